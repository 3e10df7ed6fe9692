// League History - Core Library
// Derives standings, records, draft positions, matchups and superlatives
// from raw per-season league exports. Used by the CLI, the API server and tests.

pub mod config;
pub mod context;
pub mod db;
pub mod draft;
pub mod entities;
pub mod error;
pub mod export;
pub mod extremal;
pub mod hall_of_fame;
pub mod loader;
pub mod matchups;
pub mod performance;
pub mod quality;
pub mod raw;
pub mod records;
pub mod standings;
pub mod streaks;
pub mod superlatives;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::LeagueConfig;
pub use context::LeagueData;
pub use draft::{extract_draft_positions, DraftPosition};
pub use entities::{Owner, OwnerRegistry, UNKNOWN_OWNER};
pub use error::{LeagueError, LeagueResult};
pub use export::{export_league, verify_manifest, ExportFormat, Manifest, ManifestEntry};
pub use extremal::{extremal_all, extremal_last, extremal_one, per_game, win_pct, Extreme, TiePolicy};
pub use hall_of_fame::{hall_of_fame, HallOfFameData};
pub use loader::{DirectorySource, MemorySource, SeasonSet, SeasonSource};
pub use matchups::{extract_matchups, GameResult, Matchup};
pub use performance::{season_performance, WeeklyPerformance};
pub use quality::{check_league, QualityIssue, QualityReport, Severity};
pub use raw::RawSeason;
pub use records::{aggregate_records, league_champions, LeagueChampion, TeamRecord};
pub use standings::{extract_standings, PlayoffResult, YearlyStanding};
pub use streaks::{longest_streaks, team_streaks, Streaks};
pub use superlatives::{season_superlatives, YearlySuperlatives};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
