// 🔥 Streaks - longest consecutive wins / losses within one season
//
// Walks a team's games strictly in week order. A win extends the win streak
// and resets the loss streak (and vice versa); a tie resets both.

use crate::matchups::{GameResult, Matchup};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Streaks {
    pub win_streak: u32,
    pub loss_streak: u32,
}

/// Longest streaks over an already ordered sequence of results
pub fn longest_streaks<I>(results: I) -> Streaks
where
    I: IntoIterator<Item = GameResult>,
{
    let mut best = Streaks::default();
    let mut wins = 0u32;
    let mut losses = 0u32;

    for result in results {
        match result {
            GameResult::Win => {
                wins += 1;
                losses = 0;
                best.win_streak = best.win_streak.max(wins);
            }
            GameResult::Loss => {
                losses += 1;
                wins = 0;
                best.loss_streak = best.loss_streak.max(losses);
            }
            GameResult::Tie => {
                wins = 0;
                losses = 0;
            }
        }
    }

    best
}

/// Longest streaks of `team` across one season's games
///
/// `season_matchups` must belong to a single season; games are re-sorted by
/// week (stable) so callers may pass them in any order.
pub fn team_streaks<'a, I>(season_matchups: I, team: &str) -> Streaks
where
    I: IntoIterator<Item = &'a Matchup>,
{
    let mut games: Vec<&Matchup> = season_matchups.into_iter().filter(|m| m.involves(team)).collect();
    games.sort_by_key(|m| m.week);

    longest_streaks(games.into_iter().filter_map(|m| m.result_for(team)))
}
