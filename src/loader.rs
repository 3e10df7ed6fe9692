// 📂 Raw Season Loader
//
// Reads one export per season and returns them keyed by year. The source is a
// trait so the directory layout used in production and the in-memory fixtures
// used by tests share the same validation.

use crate::error::{LeagueError, LeagueResult};
use crate::raw::{RawSeason, SeasonEnvelope};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// All seasons of the league, ascending by year
pub type SeasonSet = BTreeMap<u16, RawSeason>;

// ============================================================================
// SOURCE TRAIT
// ============================================================================

/// SeasonSource - anything that can hand over the raw season records
pub trait SeasonSource {
    /// Return every season record, or fail the batch
    ///
    /// An empty result is an error (`LeagueError::NoSeasons`): every later
    /// aggregate assumes the full history is present.
    fn load_seasons(&self) -> LeagueResult<SeasonSet>;

    /// Human-readable origin, used in logs
    fn describe(&self) -> String;
}

/// Parse one season document; accepts both the object and the list format
pub fn parse_season(year: u16, content: &str) -> LeagueResult<RawSeason> {
    let envelope: SeasonEnvelope =
        serde_json::from_str(content).map_err(|e| LeagueError::MissingData {
            year,
            reason: format!("invalid season export: {}", e),
        })?;

    envelope.into_season().ok_or_else(|| LeagueError::MissingData {
        year,
        reason: "export list is empty".to_string(),
    })
}

// ============================================================================
// DIRECTORY SOURCE
// ============================================================================

/// `<dir>/<year>.json`, one file per season
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        DirectorySource {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Season year from a file name like `2019.json`
    fn year_from_path(path: &Path) -> Option<u16> {
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            return None;
        }
        path.file_stem()
            .and_then(|s| s.to_str())
            .and_then(|s| s.trim().parse::<u16>().ok())
    }
}

impl SeasonSource for DirectorySource {
    fn load_seasons(&self) -> LeagueResult<SeasonSet> {
        let entries = fs::read_dir(&self.dir).map_err(|source| LeagueError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut seasons = SeasonSet::new();

        for entry in entries {
            let path = entry
                .map_err(|source| LeagueError::Io {
                    path: self.dir.clone(),
                    source,
                })?
                .path();

            if !path.is_file() {
                continue;
            }

            let year = match Self::year_from_path(&path) {
                Some(year) => year,
                None => {
                    if path.extension().and_then(|e| e.to_str()) == Some("json") {
                        warn!(file = %path.display(), "skipping export without a year in its name");
                    }
                    continue;
                }
            };

            let content = fs::read_to_string(&path).map_err(|source| LeagueError::Io {
                path: path.clone(),
                source,
            })?;

            let season = parse_season(year, &content)?;
            debug!(
                year,
                teams = season.teams.len(),
                games = season.schedule.len(),
                "loaded season export"
            );
            seasons.insert(year, season);
        }

        if seasons.is_empty() {
            return Err(LeagueError::NoSeasons {
                path: self.dir.clone(),
            });
        }

        info!(seasons = seasons.len(), source = %self.describe(), "loaded season exports");
        Ok(seasons)
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}

// ============================================================================
// IN-MEMORY SOURCE
// ============================================================================

/// Seasons already held in memory (fixtures, other transports)
pub struct MemorySource {
    seasons: SeasonSet,
}

impl MemorySource {
    pub fn new(seasons: SeasonSet) -> Self {
        MemorySource { seasons }
    }
}

impl SeasonSource for MemorySource {
    fn load_seasons(&self) -> LeagueResult<SeasonSet> {
        if self.seasons.is_empty() {
            return Err(LeagueError::NoSeasons {
                path: PathBuf::from("<memory>"),
            });
        }
        Ok(self.seasons.clone())
    }

    fn describe(&self) -> String {
        format!("<memory: {} seasons>", self.seasons.len())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_loads_object_and_list_formats() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "2012.json", r#"[{"members": [], "teams": [{"id": 1}]}]"#);
        write(dir.path(), "2020.json", r#"{"members": [], "teams": [{"id": 2}]}"#);

        let seasons = DirectorySource::new(dir.path()).load_seasons().unwrap();

        assert_eq!(seasons.len(), 2);
        assert_eq!(seasons[&2012].teams[0].id, 1);
        assert_eq!(seasons[&2020].teams[0].id, 2);
    }

    #[test]
    fn test_ignores_non_season_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "2019.json", r#"{"teams": []}"#);
        write(dir.path(), "notes.txt", "hello");
        write(dir.path(), "league.json", "{}");

        let seasons = DirectorySource::new(dir.path()).load_seasons().unwrap();
        assert_eq!(seasons.keys().copied().collect::<Vec<_>>(), vec![2019]);
    }

    #[test]
    fn test_empty_directory_is_missing_data() {
        let dir = tempfile::tempdir().unwrap();
        let result = DirectorySource::new(dir.path()).load_seasons();
        assert!(matches!(result, Err(LeagueError::NoSeasons { .. })));
    }

    #[test]
    fn test_unparseable_season_aborts_batch() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "2018.json", r#"{"teams": []}"#);
        write(dir.path(), "2019.json", "{ truncated");

        let result = DirectorySource::new(dir.path()).load_seasons();
        assert!(matches!(result, Err(LeagueError::MissingData { year: 2019, .. })));
    }

    #[test]
    fn test_empty_list_export_is_missing_data() {
        let result = parse_season(2011, "[]");
        assert!(matches!(result, Err(LeagueError::MissingData { year: 2011, .. })));
    }

    #[test]
    fn test_null_schedule_is_empty() {
        let season = parse_season(2010, r#"{"members": [], "teams": [], "schedule": null}"#).unwrap();
        assert!(season.schedule.is_empty());

        let wrapped = parse_season(2010, r#"[{"members": null, "teams": [{"id": 4}], "schedule": null}]"#).unwrap();
        assert!(wrapped.members.is_empty());
        assert_eq!(wrapped.teams[0].id, 4);
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let result = DirectorySource::new("/definitely/not/here").load_seasons();
        assert!(matches!(result, Err(LeagueError::Io { .. })));
    }

    #[test]
    fn test_memory_source_requires_seasons() {
        let source = MemorySource::new(SeasonSet::new());
        assert!(source.load_seasons().is_err());

        let mut seasons = SeasonSet::new();
        seasons.insert(2021, RawSeason::default());
        let source = MemorySource::new(seasons);
        assert_eq!(source.load_seasons().unwrap().len(), 1);
    }
}
