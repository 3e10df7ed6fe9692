// 🏈 Matchup Extractor - normalized game log
//
// One row per scheduled game with both sides present. Bye weeks (one side
// missing) and games referencing a team id the season does not map to an
// owned team are skipped.

use crate::config::LeagueConfig;
use crate::entities::OwnerRegistry;
use crate::loader::SeasonSet;
use crate::raw::RawMatchup;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, warn};

pub const TIER_NONE: &str = "NONE";
pub const TIER_CHAMPIONSHIP: &str = "CHAMPIONSHIP";
pub const TIER_WINNERS_BRACKET: &str = "WINNERS_BRACKET";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matchup {
    pub season: u16,
    pub week: u32,
    pub home_team: String,
    pub away_team: String,
    pub home_owner: String,
    pub away_owner: String,
    pub home_score: f64,
    pub away_score: f64,
    pub is_playoff: bool,
    pub is_championship: bool,
}

/// Outcome of one game from one team's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Tie,
}

impl Matchup {
    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }

    /// (own score, opponent score) for `team`, None if it did not play
    pub fn scores_for(&self, team: &str) -> Option<(f64, f64)> {
        if self.home_team == team {
            Some((self.home_score, self.away_score))
        } else if self.away_team == team {
            Some((self.away_score, self.home_score))
        } else {
            None
        }
    }

    pub fn result_for(&self, team: &str) -> Option<GameResult> {
        let (own, opp) = self.scores_for(team)?;
        Some(if own > opp {
            GameResult::Win
        } else if own < opp {
            GameResult::Loss
        } else {
            GameResult::Tie
        })
    }

    pub fn margin(&self) -> f64 {
        (self.home_score - self.away_score).abs()
    }

    pub fn combined_points(&self) -> f64 {
        self.home_score + self.away_score
    }

    /// (winner, loser) team names; None for a tie
    pub fn winner_loser(&self) -> Option<(&str, &str)> {
        if self.home_score > self.away_score {
            Some((self.home_team.as_str(), self.away_team.as_str()))
        } else if self.away_score > self.home_score {
            Some((self.away_team.as_str(), self.home_team.as_str()))
        } else {
            None
        }
    }
}

/// Playoff flags for one scheduled game: (is_playoff, is_championship)
///
/// A missing tier counts as NONE. WINNERS_BRACKET games only count as the
/// championship from `championship_week` on.
pub fn classify_tier(tier: Option<&str>, week: u32, championship_week: u32) -> (bool, bool) {
    let tier = tier.unwrap_or(TIER_NONE);
    let is_playoff = tier != TIER_NONE;
    let is_championship =
        tier == TIER_CHAMPIONSHIP || (tier == TIER_WINNERS_BRACKET && week >= championship_week);
    (is_playoff, is_championship)
}

struct TeamRef {
    name: String,
    owner_id: String,
}

/// Extract the game log; season descending, then week ascending
pub fn extract_matchups(
    seasons: &SeasonSet,
    owners: &OwnerRegistry,
    config: &LeagueConfig,
) -> Vec<Matchup> {
    let mut matchups = Vec::new();

    for (&year, season) in seasons {
        let teams: HashMap<u32, TeamRef> = season
            .teams
            .iter()
            .filter_map(|team| {
                team.owner_id().map(|owner_id| {
                    (
                        team.id,
                        TeamRef {
                            name: team.display_name(),
                            owner_id: owner_id.to_string(),
                        },
                    )
                })
            })
            .collect();

        let championship_week = config.championship_week_for(year);
        let mut byes = 0usize;

        for game in &season.schedule {
            match build_matchup(year, game, &teams, owners, championship_week) {
                Some(matchup) => matchups.push(matchup),
                None if game.home.is_none() || game.away.is_none() => byes += 1,
                None => {
                    warn!(year, week = game.matchup_period_id, "skipping game with unmapped team id");
                }
            }
        }

        debug!(year, byes, "skipped bye-week schedule entries");
    }

    matchups.sort_by(|a, b| b.season.cmp(&a.season).then(a.week.cmp(&b.week)));
    info!(rows = matchups.len(), "extracted matchups");
    matchups
}

fn build_matchup(
    year: u16,
    game: &RawMatchup,
    teams: &HashMap<u32, TeamRef>,
    owners: &OwnerRegistry,
    championship_week: u32,
) -> Option<Matchup> {
    let home = game.home.as_ref()?;
    let away = game.away.as_ref()?;
    let home_team = teams.get(&home.team_id)?;
    let away_team = teams.get(&away.team_id)?;

    let (is_playoff, is_championship) = classify_tier(
        game.playoff_tier_type.as_deref(),
        game.matchup_period_id,
        championship_week,
    );

    Some(Matchup {
        season: year,
        week: game.matchup_period_id,
        home_team: home_team.name.clone(),
        away_team: away_team.name.clone(),
        home_owner: owners.name_of(&home_team.owner_id),
        away_owner: owners.name_of(&away_team.owner_id),
        home_score: home.total_points,
        away_score: away.total_points,
        is_playoff,
        is_championship,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RawMatchupSide;
    use crate::test_support::{four_team_season, game, matchup};

    fn extract(seasons: &SeasonSet) -> Vec<Matchup> {
        let owners = OwnerRegistry::from_seasons(seasons);
        extract_matchups(seasons, &owners, &LeagueConfig::default())
    }

    #[test]
    fn test_championship_week_threshold() {
        assert_eq!(classify_tier(Some("WINNERS_BRACKET"), 15, 15), (true, true));
        assert_eq!(classify_tier(Some("WINNERS_BRACKET"), 14, 15), (true, false));
        assert_eq!(classify_tier(Some("CHAMPIONSHIP"), 3, 15), (true, true));
        assert_eq!(classify_tier(Some("LOSERS_CONSOLATION_LADDER"), 16, 15), (true, false));
        assert_eq!(classify_tier(Some("NONE"), 16, 15), (false, false));
        assert_eq!(classify_tier(None, 16, 15), (false, false));
    }

    #[test]
    fn test_extracts_games_with_names_and_owners() {
        let mut seasons = SeasonSet::new();
        seasons.insert(2020, four_team_season());

        let matchups = extract(&seasons);

        assert_eq!(matchups.len(), 6);
        assert_eq!(matchups[0].home_team, "Alpha Dogs");
        assert_eq!(matchups[0].away_owner, "Bob Beta");
        assert_eq!(matchups[0].home_score, 120.0);
        assert!(!matchups[0].is_playoff);
    }

    #[test]
    fn test_bye_and_unmapped_games_are_skipped() {
        let mut season = four_team_season();
        let mut bye = game(4, 1, 100.0, 2, 0.0);
        bye.away = None;
        season.schedule.push(bye);
        season.schedule.push(game(4, 3, 90.0, 99, 80.0));

        let mut seasons = SeasonSet::new();
        seasons.insert(2020, season);

        let matchups = extract(&seasons);
        assert_eq!(matchups.len(), 6);
        assert!(matchups.iter().all(|m| m.week <= 3));
    }

    #[test]
    fn test_playoff_flags_use_season_override() {
        let mut season = four_team_season();
        let mut final_game = game(14, 1, 130.0, 2, 120.0);
        final_game.playoff_tier_type = Some("WINNERS_BRACKET".to_string());
        season.schedule.push(final_game);

        let mut seasons = SeasonSet::new();
        seasons.insert(2012, season);
        let owners = OwnerRegistry::from_seasons(&seasons);

        let default = extract_matchups(&seasons, &owners, &LeagueConfig::default());
        let last = default.last().unwrap();
        assert!(last.is_playoff);
        assert!(!last.is_championship);

        let mut config = LeagueConfig::default();
        config.championship_week_overrides.insert(2012, 14);
        let overridden = extract_matchups(&seasons, &owners, &config);
        assert!(overridden.last().unwrap().is_championship);
    }

    #[test]
    fn test_sorted_season_desc_week_asc() {
        let mut seasons = SeasonSet::new();
        let mut older = four_team_season();
        older.schedule.reverse();
        seasons.insert(2019, older);
        seasons.insert(2020, four_team_season());

        let keys: Vec<(u16, u32)> = extract(&seasons).iter().map(|m| (m.season, m.week)).collect();
        let mut expected = keys.clone();
        expected.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        assert_eq!(keys, expected);
        assert_eq!(keys.first(), Some(&(2020, 1)));
        assert_eq!(keys.last(), Some(&(2019, 3)));
    }

    #[test]
    fn test_missing_points_default_to_zero() {
        let json = r#"{"matchupPeriodId": 2, "home": {"teamId": 1}, "away": {"teamId": 2, "totalPoints": 88.5}}"#;
        let raw: RawMatchup = serde_json::from_str(json).unwrap();
        assert_eq!(raw.home, Some(RawMatchupSide { team_id: 1, total_points: 0.0 }));
    }

    #[test]
    fn test_result_helpers() {
        let m = matchup(2020, 1, "A", 100.0, "B", 90.5);
        assert_eq!(m.result_for("A"), Some(GameResult::Win));
        assert_eq!(m.result_for("B"), Some(GameResult::Loss));
        assert_eq!(m.result_for("C"), None);
        assert_eq!(m.margin(), 9.5);
        assert_eq!(m.winner_loser(), Some(("A", "B")));

        let tie = matchup(2020, 2, "A", 80.0, "B", 80.0);
        assert_eq!(tie.result_for("B"), Some(GameResult::Tie));
        assert_eq!(tie.winner_loser(), None);
    }
}
