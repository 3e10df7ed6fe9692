// ⚙️ League configuration - thresholds as data
//
// The schedule-dependent constants of the derivation live here instead of in
// the extractors, so a league with a different season length only needs a
// JSON file, not a rebuild.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const DEFAULT_CHAMPIONSHIP_WEEK: u32 = 15;
pub const DEFAULT_PLAYOFF_SEED_CUTOFF: u32 = 6;
pub const DEFAULT_MIN_GAMES_FOR_PPG: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueConfig {
    /// WINNERS_BRACKET games in this week or later count as championship games
    pub championship_week: u32,

    /// Per-season replacement for `championship_week`
    pub championship_week_overrides: BTreeMap<u16, u32>,

    /// Playoff seeds in (0, cutoff] are labelled Quarter-finals
    pub playoff_seed_cutoff: u32,

    /// Minimum games played for the all-time points-per-game superlative
    pub min_games_for_ppg: u32,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        LeagueConfig {
            championship_week: DEFAULT_CHAMPIONSHIP_WEEK,
            championship_week_overrides: BTreeMap::new(),
            playoff_seed_cutoff: DEFAULT_PLAYOFF_SEED_CUTOFF,
            min_games_for_ppg: DEFAULT_MIN_GAMES_FOR_PPG,
        }
    }
}

impl LeagueConfig {
    /// Load configuration from a JSON file; missing keys keep their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: LeagueConfig =
            serde_json::from_str(&content).context("Failed to parse league config JSON")?;

        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn championship_week_for(&self, season: u16) -> u32 {
        self.championship_week_overrides
            .get(&season)
            .copied()
            .unwrap_or(self.championship_week)
    }
}
