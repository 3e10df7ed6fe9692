// 🥇 Superlatives Engine - per season
//
// Single-leader semantics: every category reports exactly one entry. Ties at
// a maximum go to the first tied entry in input order; ties at the worst
// record, lowest week score, closest game and least-points week go to the
// last. Standings come in rank order and matchups in week order, so those
// minimums land on the lower-ranked team or the later week.

use crate::error::{LeagueError, LeagueResult};
use crate::extremal::{extremal_last, extremal_one, Extreme};
use crate::matchups::Matchup;
use crate::standings::YearlyStanding;
use crate::streaks::team_streaks;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// RESULT TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamValue {
    pub team: String,
    pub owner: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamWeekValue {
    pub team: String,
    pub owner: String,
    pub week: u32,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStreak {
    pub team: String,
    pub owner: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blowout {
    pub winner: String,
    pub loser: String,
    pub week: u32,
    pub margin: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloseGame {
    pub team1: String,
    pub team2: String,
    pub week: u32,
    pub margin: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordLine {
    pub team: String,
    pub owner: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekTotal {
    pub week: u32,
    pub total_points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlySuperlatives {
    pub year: u16,
    pub highest_points_for: TeamValue,
    pub lowest_points_for: TeamValue,
    pub highest_points_against: TeamValue,
    pub lowest_points_against: TeamValue,
    pub highest_single_week_score: TeamWeekValue,
    pub lowest_single_week_score: TeamWeekValue,
    pub longest_win_streak: TeamStreak,
    pub longest_lose_streak: TeamStreak,
    /// None when every game of the season was tied
    pub biggest_blowout: Option<Blowout>,
    pub closest_game: Option<CloseGame>,
    pub best_record: RecordLine,
    pub worst_record: RecordLine,
    pub most_points_in_week: WeekTotal,
    pub least_points_in_week: WeekTotal,
}

// ============================================================================
// SHARED SCORE VIEWS
// ============================================================================

/// One team's score in one game; every matchup yields two of these
#[derive(Debug, Clone, PartialEq)]
pub struct TeamGameScore {
    pub season: u16,
    pub week: u32,
    pub team: String,
    pub owner: String,
    pub score: f64,
}

/// Home score then away score for each matchup, in matchup order
pub fn team_game_scores(matchups: &[Matchup]) -> Vec<TeamGameScore> {
    matchups
        .iter()
        .flat_map(|m| {
            [
                TeamGameScore {
                    season: m.season,
                    week: m.week,
                    team: m.home_team.clone(),
                    owner: m.home_owner.clone(),
                    score: m.home_score,
                },
                TeamGameScore {
                    season: m.season,
                    week: m.week,
                    team: m.away_team.clone(),
                    owner: m.away_owner.clone(),
                    score: m.away_score,
                },
            ]
        })
        .collect()
}

/// Games with a winner; tied games have no margin to rank
pub fn decided_games(matchups: &[Matchup]) -> Vec<&Matchup> {
    matchups.iter().filter(|m| m.winner_loser().is_some()).collect()
}

/// Combined points of all games per week, ascending by week
pub fn weekly_totals(matchups: &[Matchup]) -> Vec<WeekTotal> {
    let mut totals: BTreeMap<u32, f64> = BTreeMap::new();
    for m in matchups {
        *totals.entry(m.week).or_insert(0.0) += m.combined_points();
    }
    totals
        .into_iter()
        .map(|(week, total_points)| WeekTotal { week, total_points })
        .collect()
}

// ============================================================================
// COMPUTATION
// ============================================================================

struct StreakRow<'a> {
    standing: &'a YearlyStanding,
    win_streak: u32,
    loss_streak: u32,
}

/// Superlatives of one season
///
/// `standings` and `matchups` must already be restricted to `year`.
/// Fails with `EmptySeasonSet` when either is empty.
pub fn season_superlatives(
    year: u16,
    standings: &[YearlyStanding],
    matchups: &[Matchup],
) -> LeagueResult<YearlySuperlatives> {
    let empty = || LeagueError::EmptySeasonSet {
        scope: format!("season {}", year),
    };
    if standings.is_empty() || matchups.is_empty() {
        return Err(empty());
    }

    let team_value = |s: &YearlyStanding, value: f64| TeamValue {
        team: s.team.clone(),
        owner: s.owner.clone(),
        value,
    };
    let record_line = |s: &YearlyStanding| RecordLine {
        team: s.team.clone(),
        owner: s.owner.clone(),
        wins: s.wins,
        losses: s.losses,
        ties: s.ties,
    };

    let pf_high = extremal_one(standings, |s| s.points_for, Extreme::Max).ok_or_else(empty)?;
    let pf_low = extremal_one(standings, |s| s.points_for, Extreme::Min).ok_or_else(empty)?;
    let pa_high = extremal_one(standings, |s| s.points_against, Extreme::Max).ok_or_else(empty)?;
    let pa_low = extremal_one(standings, |s| s.points_against, Extreme::Min).ok_or_else(empty)?;
    let best = extremal_one(standings, YearlyStanding::win_pct, Extreme::Max).ok_or_else(empty)?;
    let worst = extremal_last(standings, YearlyStanding::win_pct, Extreme::Min).ok_or_else(empty)?;

    let scores = team_game_scores(matchups);
    let week_value = |s: &TeamGameScore| TeamWeekValue {
        team: s.team.clone(),
        owner: s.owner.clone(),
        week: s.week,
        value: s.score,
    };
    let high_week = extremal_one(&scores, |s| s.score, Extreme::Max).ok_or_else(empty)?;
    let low_week = extremal_last(&scores, |s| s.score, Extreme::Min).ok_or_else(empty)?;

    let streak_rows: Vec<StreakRow> = standings
        .iter()
        .map(|standing| {
            let streaks = team_streaks(matchups, &standing.team);
            StreakRow {
                standing,
                win_streak: streaks.win_streak,
                loss_streak: streaks.loss_streak,
            }
        })
        .collect();
    let win_streak = extremal_one(&streak_rows, |r| r.win_streak as f64, Extreme::Max).ok_or_else(empty)?;
    let loss_streak = extremal_one(&streak_rows, |r| r.loss_streak as f64, Extreme::Max).ok_or_else(empty)?;

    let decided = decided_games(matchups);
    let biggest_blowout = extremal_one(&decided, |m| m.margin(), Extreme::Max).and_then(|m| {
        m.winner_loser().map(|(winner, loser)| Blowout {
            winner: winner.to_string(),
            loser: loser.to_string(),
            week: m.week,
            margin: m.margin(),
        })
    });
    let closest_game = extremal_last(&decided, |m| m.margin(), Extreme::Min).map(|m| CloseGame {
        team1: m.home_team.clone(),
        team2: m.away_team.clone(),
        week: m.week,
        margin: m.margin(),
    });

    let totals = weekly_totals(matchups);
    let most_week = extremal_one(&totals, |t| t.total_points, Extreme::Max).ok_or_else(empty)?;
    let least_week = extremal_last(&totals, |t| t.total_points, Extreme::Min).ok_or_else(empty)?;

    Ok(YearlySuperlatives {
        year,
        highest_points_for: team_value(pf_high, pf_high.points_for),
        lowest_points_for: team_value(pf_low, pf_low.points_for),
        highest_points_against: team_value(pa_high, pa_high.points_against),
        lowest_points_against: team_value(pa_low, pa_low.points_against),
        highest_single_week_score: week_value(high_week),
        lowest_single_week_score: week_value(low_week),
        longest_win_streak: TeamStreak {
            team: win_streak.standing.team.clone(),
            owner: win_streak.standing.owner.clone(),
            value: win_streak.win_streak,
        },
        longest_lose_streak: TeamStreak {
            team: loss_streak.standing.team.clone(),
            owner: loss_streak.standing.owner.clone(),
            value: loss_streak.loss_streak,
        },
        biggest_blowout,
        closest_game,
        best_record: record_line(best),
        worst_record: record_line(worst),
        most_points_in_week: most_week.clone(),
        least_points_in_week: least_week.clone(),
    })
}

// ============================================================================
// TESTS
// ============================================================================
