// 📈 Season Performance - cumulative record per team per week, for trend charts

use crate::matchups::{GameResult, Matchup};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPerformance {
    pub week: u32,
    /// Chart series id, assigned by order of first appearance in the season
    pub team_id: u32,
    pub team_name: String,
    pub owner_name: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_scored: f64,
}

struct SeasonTeam<'a> {
    id: u32,
    name: &'a str,
    owner: &'a str,
}

/// Cumulative win/loss/tie tally and weekly score for every team in `season`
///
/// A team on bye gets no row that week; its tally carries over to the next
/// week it plays. Rows are ordered by week, then team id. A season without
/// matchups yields no rows.
pub fn season_performance(matchups: &[Matchup], season: u16) -> Vec<WeeklyPerformance> {
    let games: Vec<&Matchup> = matchups.iter().filter(|m| m.season == season).collect();

    // ids by first appearance; owner label from the latest game
    let mut teams: Vec<SeasonTeam> = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for m in &games {
        for (name, owner) in [(&m.home_team, &m.home_owner), (&m.away_team, &m.away_owner)] {
            match seen.get(name.as_str()) {
                Some(&index) => teams[index].owner = owner.as_str(),
                None => {
                    seen.insert(name, teams.len());
                    teams.push(SeasonTeam {
                        id: teams.len() as u32 + 1,
                        name,
                        owner,
                    });
                }
            }
        }
    }

    let weeks: BTreeSet<u32> = games.iter().map(|m| m.week).collect();
    let mut rows = Vec::new();

    for team in &teams {
        let (mut wins, mut losses, mut ties) = (0, 0, 0);

        for &week in &weeks {
            let Some(game) = games.iter().find(|m| m.week == week && m.involves(team.name)) else {
                continue;
            };
            let Some((score, _)) = game.scores_for(team.name) else {
                continue;
            };

            match game.result_for(team.name) {
                Some(GameResult::Win) => wins += 1,
                Some(GameResult::Loss) => losses += 1,
                Some(GameResult::Tie) => ties += 1,
                None => {}
            }

            rows.push(WeeklyPerformance {
                week,
                team_id: team.id,
                team_name: team.name.to_string(),
                owner_name: team.owner.to_string(),
                wins,
                losses,
                ties,
                points_scored: score,
            });
        }
    }

    rows.sort_by(|a, b| a.week.cmp(&b.week).then(a.team_id.cmp(&b.team_id)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::matchup;

    #[test]
    fn test_cumulative_tally_with_bye() {
        let games = vec![
            matchup(2021, 1, "A", 100.0, "B", 90.0),
            matchup(2021, 1, "C", 80.0, "D", 85.0),
            matchup(2021, 2, "B", 95.0, "C", 95.0),
            // A on bye in week 2
            matchup(2021, 3, "D", 70.0, "A", 110.0),
            matchup(2020, 1, "A", 50.0, "B", 60.0),
        ];

        let rows = season_performance(&games, 2021);

        let a: Vec<&WeeklyPerformance> = rows.iter().filter(|r| r.team_name == "A").collect();
        assert_eq!(a.len(), 2);
        assert_eq!((a[0].week, a[0].wins, a[0].losses), (1, 1, 0));
        assert_eq!((a[1].week, a[1].wins, a[1].losses), (3, 2, 0));
        assert_eq!(a[1].points_scored, 110.0);

        let b: Vec<&WeeklyPerformance> = rows.iter().filter(|r| r.team_name == "B").collect();
        assert_eq!(b.len(), 2);
        assert_eq!((b[1].wins, b[1].losses, b[1].ties), (0, 1, 1));
    }

    #[test]
    fn test_ids_follow_first_appearance_and_rows_are_ordered() {
        let games = vec![
            matchup(2021, 2, "C", 80.0, "A", 85.0),
            matchup(2021, 1, "B", 100.0, "A", 90.0),
        ];

        let rows = season_performance(&games, 2021);

        let ids: HashMap<&str, u32> = rows.iter().map(|r| (r.team_name.as_str(), r.team_id)).collect();
        assert_eq!(ids["C"], 1);
        assert_eq!(ids["A"], 2);
        assert_eq!(ids["B"], 3);

        let keys: Vec<(u32, u32)> = rows.iter().map(|r| (r.week, r.team_id)).collect();
        assert_eq!(keys, vec![(1, 2), (1, 3), (2, 1), (2, 2)]);
        assert_eq!(rows[0].owner_name, "A Owner");
    }

    #[test]
    fn test_owner_name_comes_from_latest_game() {
        let mut handover = matchup(2021, 2, "A", 100.0, "B", 90.0);
        handover.home_owner = "New Owner".to_string();
        let games = vec![matchup(2021, 1, "A", 80.0, "B", 90.0), handover];

        let rows = season_performance(&games, 2021);

        let a: Vec<&WeeklyPerformance> = rows.iter().filter(|r| r.team_name == "A").collect();
        assert_eq!(a.len(), 2);
        assert!(a.iter().all(|r| r.owner_name == "New Owner"));
        assert_eq!(a[0].team_id, 1);
    }

    #[test]
    fn test_unknown_season_is_empty() {
        let games = vec![matchup(2021, 1, "A", 100.0, "B", 90.0)];
        assert!(season_performance(&games, 1999).is_empty());
    }
}
