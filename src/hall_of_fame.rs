// 🏛️ Hall of Fame - all-time superlatives
//
// Unlike the per-season engine, every category here keeps ALL entries tied
// at the extreme. A category with a unique holder still returns a list of
// one; callers must not assume a single winner.

use crate::config::LeagueConfig;
use crate::error::{LeagueError, LeagueResult};
use crate::extremal::{extremal_all, per_game, Extreme};
use crate::matchups::Matchup;
use crate::standings::{PlayoffResult, YearlyStanding};
use crate::streaks::team_streaks;
use crate::superlatives::{decided_games, team_game_scores};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

// ============================================================================
// RESULT TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonRecord {
    pub team: String,
    pub owner: String,
    pub year: u16,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub win_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekScore {
    pub team: String,
    pub owner: String,
    pub year: u16,
    pub week: u32,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsPerGame {
    pub team: String,
    pub owner: String,
    pub year: u16,
    pub value: f64,
    pub games_played: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonStreak {
    pub team: String,
    pub owner: String,
    pub year: u16,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllTimeBlowout {
    pub winner: String,
    pub loser: String,
    pub year: u16,
    pub week: u32,
    pub margin: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionshipCount {
    pub owner: String,
    pub championships: u32,
    /// Ascending
    pub years: Vec<u16>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HallOfFameData {
    pub best_record: Vec<SeasonRecord>,
    pub worst_record: Vec<SeasonRecord>,
    pub most_points_in_week: Vec<WeekScore>,
    pub lowest_week_score: Vec<WeekScore>,
    #[serde(rename = "highestPPG")]
    pub highest_ppg: Vec<PointsPerGame>,
    pub longest_win_streak: Vec<SeasonStreak>,
    pub longest_lose_streak: Vec<SeasonStreak>,
    pub biggest_blowout: Vec<AllTimeBlowout>,
    pub most_championships: Vec<ChampionshipCount>,
}

// ============================================================================
// COMPUTATION
// ============================================================================

/// All-time superlatives over every season
///
/// Fails with `EmptySeasonSet` when there are no standings or no matchups.
/// Individual categories may still be empty (no team reaching the PPG
/// minimum, no champion recorded, every game tied).
pub fn hall_of_fame(
    standings: &[YearlyStanding],
    matchups: &[Matchup],
    config: &LeagueConfig,
) -> LeagueResult<HallOfFameData> {
    if standings.is_empty() || matchups.is_empty() {
        return Err(LeagueError::EmptySeasonSet {
            scope: "all seasons".to_string(),
        });
    }

    let (longest_win_streak, longest_lose_streak) = season_streaks(standings, matchups);

    Ok(HallOfFameData {
        best_record: season_records(standings, Extreme::Max),
        worst_record: season_records(standings, Extreme::Min),
        most_points_in_week: week_scores(matchups, Extreme::Max),
        lowest_week_score: week_scores(matchups, Extreme::Min),
        highest_ppg: highest_ppg(matchups, config.min_games_for_ppg),
        longest_win_streak,
        longest_lose_streak,
        biggest_blowout: biggest_blowouts(matchups),
        most_championships: most_championships(standings),
    })
}

fn season_records(standings: &[YearlyStanding], extreme: Extreme) -> Vec<SeasonRecord> {
    extremal_all(standings, YearlyStanding::win_pct, extreme)
        .into_iter()
        .map(|s| SeasonRecord {
            team: s.team.clone(),
            owner: s.owner.clone(),
            year: s.year,
            wins: s.wins,
            losses: s.losses,
            ties: s.ties,
            win_pct: s.win_pct(),
        })
        .collect()
}

fn week_scores(matchups: &[Matchup], extreme: Extreme) -> Vec<WeekScore> {
    let scores = team_game_scores(matchups);
    extremal_all(&scores, |s| s.score, extreme)
        .into_iter()
        .map(|s| WeekScore {
            team: s.team.clone(),
            owner: s.owner.clone(),
            year: s.season,
            week: s.week,
            value: s.score,
        })
        .collect()
}

struct SeasonTotals {
    team: String,
    owner: String,
    year: u16,
    points: f64,
    games: u32,
}

/// Points per game per (team, season), restricted to `min_games` or more
///
/// The minimum keeps a short or partial season from dominating.
fn highest_ppg(matchups: &[Matchup], min_games: u32) -> Vec<PointsPerGame> {
    let mut totals: Vec<SeasonTotals> = Vec::new();
    let mut index: HashMap<(u16, &str), usize> = HashMap::new();

    for m in matchups {
        for (team, owner, score) in [
            (&m.home_team, &m.home_owner, m.home_score),
            (&m.away_team, &m.away_owner, m.away_score),
        ] {
            let slot = *index.entry((m.season, team.as_str())).or_insert_with(|| {
                totals.push(SeasonTotals {
                    team: team.clone(),
                    owner: owner.clone(),
                    year: m.season,
                    points: 0.0,
                    games: 0,
                });
                totals.len() - 1
            });
            totals[slot].points += score;
            totals[slot].games += 1;
        }
    }

    let eligible: Vec<PointsPerGame> = totals
        .into_iter()
        .filter(|t| t.games >= min_games)
        .map(|t| PointsPerGame {
            value: per_game(t.points, t.games),
            team: t.team,
            owner: t.owner,
            year: t.year,
            games_played: t.games,
        })
        .collect();

    extremal_all(&eligible, |p| p.value, Extreme::Max)
        .into_iter()
        .cloned()
        .collect()
}

/// Longest win and loss streaks per team-season, every tie at the top of each
fn season_streaks(standings: &[YearlyStanding], matchups: &[Matchup]) -> (Vec<SeasonStreak>, Vec<SeasonStreak>) {
    let mut by_season: HashMap<u16, Vec<&Matchup>> = HashMap::new();
    for m in matchups {
        by_season.entry(m.season).or_default().push(m);
    }

    let mut win_rows = Vec::with_capacity(standings.len());
    let mut loss_rows = Vec::with_capacity(standings.len());
    for s in standings {
        let games = by_season.get(&s.year).map(Vec::as_slice).unwrap_or(&[]);
        let streaks = team_streaks(games.iter().copied(), &s.team);
        let row = |value| SeasonStreak {
            team: s.team.clone(),
            owner: s.owner.clone(),
            year: s.year,
            value,
        };
        win_rows.push(row(streaks.win_streak));
        loss_rows.push(row(streaks.loss_streak));
    }

    let longest = |rows: &[SeasonStreak]| -> Vec<SeasonStreak> {
        extremal_all(rows, |s| s.value as f64, Extreme::Max)
            .into_iter()
            .cloned()
            .collect()
    };
    (longest(&win_rows), longest(&loss_rows))
}

fn biggest_blowouts(matchups: &[Matchup]) -> Vec<AllTimeBlowout> {
    let decided = decided_games(matchups);
    extremal_all(&decided, |m| m.margin(), Extreme::Max)
        .into_iter()
        .filter_map(|m| {
            m.winner_loser().map(|(winner, loser)| AllTimeBlowout {
                winner: winner.to_string(),
                loser: loser.to_string(),
                year: m.season,
                week: m.week,
                margin: m.margin(),
            })
        })
        .collect()
}

/// Owners with the most titles, each with the sorted list of title years
fn most_championships(standings: &[YearlyStanding]) -> Vec<ChampionshipCount> {
    let mut counts: Vec<(String, BTreeSet<u16>)> = Vec::new();

    for s in standings.iter().filter(|s| s.playoff_result == PlayoffResult::Champion) {
        match counts.iter_mut().find(|(owner, _)| *owner == s.owner) {
            Some((_, years)) => {
                years.insert(s.year);
            }
            None => counts.push((s.owner.clone(), BTreeSet::from([s.year]))),
        }
    }

    let counts: Vec<ChampionshipCount> = counts
        .into_iter()
        .map(|(owner, years)| ChampionshipCount {
            owner,
            championships: years.len() as u32,
            years: years.into_iter().collect(),
        })
        .collect();

    extremal_all(&counts, |c| c.championships as f64, Extreme::Max)
        .into_iter()
        .cloned()
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
