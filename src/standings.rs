// 🏆 Standings Extractor
//
// One row per team per season: final rank, overall record, points and the
// playoff outcome derived from rank + seed.

use crate::config::LeagueConfig;
use crate::entities::OwnerRegistry;
use crate::loader::SeasonSet;
use crate::raw::RawTeam;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

// ============================================================================
// PLAYOFF RESULT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayoffResult {
    Champion,
    #[serde(rename = "Runner-up")]
    RunnerUp,
    #[serde(rename = "Semi-finals")]
    SemiFinals,
    #[serde(rename = "Quarter-finals")]
    QuarterFinals,
    Missed,
}

impl PlayoffResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayoffResult::Champion => "Champion",
            PlayoffResult::RunnerUp => "Runner-up",
            PlayoffResult::SemiFinals => "Semi-finals",
            PlayoffResult::QuarterFinals => "Quarter-finals",
            PlayoffResult::Missed => "Missed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Champion" => Some(PlayoffResult::Champion),
            "Runner-up" => Some(PlayoffResult::RunnerUp),
            "Semi-finals" => Some(PlayoffResult::SemiFinals),
            "Quarter-finals" => Some(PlayoffResult::QuarterFinals),
            "Missed" => Some(PlayoffResult::Missed),
            _ => None,
        }
    }

    /// First matching rule wins:
    /// 1. rank 1 → Champion
    /// 2. rank 2 → Runner-up
    /// 3. seed in (0, cutoff] → Quarter-finals ("made playoffs")
    /// 4. otherwise → Missed
    ///
    /// Semi-finals is never produced; the export does not say how far a
    /// seeded team advanced.
    pub fn classify(rank: u32, playoff_seed: Option<u32>, seed_cutoff: u32) -> Self {
        match (rank, playoff_seed) {
            (1, _) => PlayoffResult::Champion,
            (2, _) => PlayoffResult::RunnerUp,
            (_, Some(seed)) if seed > 0 && seed <= seed_cutoff => PlayoffResult::QuarterFinals,
            _ => PlayoffResult::Missed,
        }
    }

    pub fn made_playoffs(&self) -> bool {
        *self != PlayoffResult::Missed
    }
}

impl fmt::Display for PlayoffResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// YEARLY STANDING
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyStanding {
    pub year: u16,
    pub team: String,
    pub owner: String,
    /// Final rank; 0 when the export carries none
    pub rank: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
    pub playoff_result: PlayoffResult,
}

impl YearlyStanding {
    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    pub fn win_pct(&self) -> f64 {
        crate::extremal::win_pct(self.wins, self.losses, self.ties)
    }

    fn from_team(year: u16, team: &RawTeam, owner: String, seed_cutoff: u32) -> Self {
        let record = team.overall();
        let rank = team.final_rank().unwrap_or(0);

        YearlyStanding {
            year,
            team: team.display_name(),
            owner,
            rank,
            wins: record.wins,
            losses: record.losses,
            ties: record.ties,
            points_for: record.points_for,
            points_against: record.points_against,
            playoff_result: PlayoffResult::classify(rank, team.playoff_seed, seed_cutoff),
        }
    }
}

// ============================================================================
// EXTRACTION
// ============================================================================

/// Extract standings for every season; year descending, then rank ascending
///
/// Teams without a resolvable owner are dropped (logged, not an error).
pub fn extract_standings(
    seasons: &SeasonSet,
    owners: &OwnerRegistry,
    config: &LeagueConfig,
) -> Vec<YearlyStanding> {
    let mut standings = Vec::new();

    for (&year, season) in seasons {
        for team in &season.teams {
            let owner_id = match team.owner_id() {
                Some(id) => id,
                None => {
                    warn!(year, team = %team.display_name(), "skipping team without owner");
                    continue;
                }
            };

            standings.push(YearlyStanding::from_team(
                year,
                team,
                owners.name_of(owner_id),
                config.playoff_seed_cutoff,
            ));
        }
    }

    sort_standings(&mut standings);
    info!(rows = standings.len(), "extracted yearly standings");
    standings
}

/// Year descending, rank ascending; stable for equal keys
pub fn sort_standings(standings: &mut [YearlyStanding]) {
    standings.sort_by(|a, b| b.year.cmp(&a.year).then(a.rank.cmp(&b.rank)));
}

// ============================================================================
// TESTS
// ============================================================================
