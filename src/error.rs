// Error taxonomy for the derivation pipeline
//
// Loader failures and empty superlative inputs are errors. Per-row anomalies
// (team without owner, matchup with an unmapped team) are NOT errors: the
// extractors drop the row and log a warning instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeagueError {
    /// The source produced no season records at all
    #[error("no season records found in {}", path.display())]
    NoSeasons { path: PathBuf },

    /// A season record exists but cannot be used; aborts the whole batch
    #[error("season {year}: {reason}")]
    MissingData { year: u16, reason: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Superlatives requested over zero standings or zero matchups
    #[error("no data to compute superlatives for {scope}")]
    EmptySeasonSet { scope: String },
}

pub type LeagueResult<T> = std::result::Result<T, LeagueError>;
