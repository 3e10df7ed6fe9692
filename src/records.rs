// 📊 Cumulative Aggregator - all-time records per owner
//
// Folds the yearly standings into one row per owner. Owners are grouped by
// their resolved display name, the same label the standings carry.

use crate::standings::{PlayoffResult, YearlyStanding};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub owner: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
    pub playoff_appearances: u32,
    pub championships: u32,
    /// Number of standing rows folded into this record
    pub seasons: u32,
}

impl TeamRecord {
    fn empty(owner: &str) -> Self {
        TeamRecord {
            owner: owner.to_string(),
            wins: 0,
            losses: 0,
            ties: 0,
            points_for: 0.0,
            points_against: 0.0,
            playoff_appearances: 0,
            championships: 0,
            seasons: 0,
        }
    }

    fn absorb(&mut self, standing: &YearlyStanding) {
        self.wins += standing.wins;
        self.losses += standing.losses;
        self.ties += standing.ties;
        self.points_for += standing.points_for;
        self.points_against += standing.points_against;
        self.seasons += 1;
        if standing.playoff_result.made_playoffs() {
            self.playoff_appearances += 1;
        }
        if standing.playoff_result == PlayoffResult::Champion {
            self.championships += 1;
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    pub fn win_pct(&self) -> f64 {
        crate::extremal::win_pct(self.wins, self.losses, self.ties)
    }
}

/// Fold standings by owner; wins descending, then points-for descending
///
/// Owners keep first-appearance order before the (stable) sort, so equal
/// keys come out in standings order.
pub fn aggregate_records(standings: &[YearlyStanding]) -> Vec<TeamRecord> {
    let mut records: Vec<TeamRecord> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for standing in standings {
        let slot = *index.entry(standing.owner.as_str()).or_insert_with(|| {
            records.push(TeamRecord::empty(&standing.owner));
            records.len() - 1
        });
        records[slot].absorb(standing);
    }

    records.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then(b.points_for.total_cmp(&a.points_for))
    });

    info!(owners = records.len(), "aggregated cumulative records");
    records
}

// ============================================================================
// LEAGUE CHAMPIONS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinLossTie {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueChampion {
    pub year: u16,
    pub team_name: String,
    pub owner_name: String,
    pub record: WinLossTie,
    pub points_for: f64,
    pub points_against: f64,
}

/// Every season's champion, most recent first
pub fn league_champions(standings: &[YearlyStanding]) -> Vec<LeagueChampion> {
    let mut champions: Vec<LeagueChampion> = standings
        .iter()
        .filter(|s| s.playoff_result == PlayoffResult::Champion)
        .map(|s| LeagueChampion {
            year: s.year,
            team_name: s.team.clone(),
            owner_name: s.owner.clone(),
            record: WinLossTie {
                wins: s.wins,
                losses: s.losses,
                ties: s.ties,
            },
            points_for: s.points_for,
            points_against: s.points_against,
        })
        .collect();

    champions.sort_by(|a, b| b.year.cmp(&a.year));
    champions
}

// ============================================================================
// TESTS
// ============================================================================
