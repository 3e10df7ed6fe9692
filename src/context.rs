// 🗂️ League Data - the derived dataset, built once and passed by reference
//
// Every extractor runs exactly once in `build`; the analytic views
// (superlatives, hall of fame, performance) are computed on demand from the
// stored collections and never mutate them.

use crate::config::LeagueConfig;
use crate::draft::{extract_draft_positions, DraftPosition};
use crate::entities::OwnerRegistry;
use crate::error::LeagueResult;
use crate::hall_of_fame::{hall_of_fame, HallOfFameData};
use crate::loader::{SeasonSet, SeasonSource};
use crate::matchups::{extract_matchups, Matchup};
use crate::performance::{season_performance, WeeklyPerformance};
use crate::records::{aggregate_records, league_champions, LeagueChampion, TeamRecord};
use crate::standings::{extract_standings, YearlyStanding};
use crate::superlatives::{season_superlatives, YearlySuperlatives};
use tracing::info;

#[derive(Debug, Clone)]
pub struct LeagueData {
    pub config: LeagueConfig,
    pub owners: OwnerRegistry,
    pub standings: Vec<YearlyStanding>,
    pub records: Vec<TeamRecord>,
    pub draft_positions: Vec<DraftPosition>,
    pub matchups: Vec<Matchup>,
    /// Every loaded season, most recent first
    pub years: Vec<u16>,
}

impl LeagueData {
    /// Run the full derivation over `seasons`
    pub fn build(seasons: &SeasonSet, config: &LeagueConfig) -> Self {
        let owners = OwnerRegistry::from_seasons(seasons);
        let standings = extract_standings(seasons, &owners, config);
        let records = aggregate_records(&standings);
        let draft_positions = extract_draft_positions(seasons, &owners);
        let matchups = extract_matchups(seasons, &owners, config);
        let years: Vec<u16> = seasons.keys().rev().copied().collect();

        info!(
            seasons = years.len(),
            owners = owners.len(),
            records = records.len(),
            "league data derived"
        );

        LeagueData {
            config: config.clone(),
            owners,
            standings,
            records,
            draft_positions,
            matchups,
            years,
        }
    }

    /// Load every season from `source`, then build
    pub fn load(source: &dyn SeasonSource, config: &LeagueConfig) -> LeagueResult<Self> {
        info!(source = %source.describe(), "loading seasons");
        let seasons = source.load_seasons()?;
        Ok(Self::build(&seasons, config))
    }

    pub fn available_years(&self) -> &[u16] {
        &self.years
    }

    pub fn standings_for(&self, year: u16) -> Vec<YearlyStanding> {
        self.standings.iter().filter(|s| s.year == year).cloned().collect()
    }

    pub fn matchups_for(&self, season: u16) -> Vec<Matchup> {
        self.matchups.iter().filter(|m| m.season == season).cloned().collect()
    }

    pub fn draft_positions_for(&self, year: u16) -> Vec<DraftPosition> {
        self.draft_positions.iter().filter(|d| d.year == year).cloned().collect()
    }

    pub fn champions(&self) -> Vec<LeagueChampion> {
        league_champions(&self.standings)
    }

    pub fn superlatives(&self, year: u16) -> LeagueResult<YearlySuperlatives> {
        season_superlatives(year, &self.standings_for(year), &self.matchups_for(year))
    }

    pub fn hall_of_fame(&self) -> LeagueResult<HallOfFameData> {
        hall_of_fame(&self.standings, &self.matchups, &self.config)
    }

    pub fn season_performance(&self, season: u16) -> Vec<WeeklyPerformance> {
        season_performance(&self.matchups, season)
    }
}

// ============================================================================
// TESTS
// ============================================================================
