// Fixture builders shared by the unit tests

use crate::matchups::Matchup;
use crate::raw::{
    RawDraftSettings, RawMatchup, RawMatchupSide, RawMember, RawOverallRecord, RawRecord,
    RawSeason, RawSettings, RawTeam,
};
use crate::standings::{PlayoffResult, YearlyStanding};

pub fn member(id: &str, first: &str, last: &str) -> RawMember {
    RawMember {
        id: id.to_string(),
        display_name: format!("{}{}", first.to_lowercase(), last.to_lowercase()),
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
    }
}

/// Team with a full overall record and a final rank
pub fn team(id: u32, name: &str, owner: &str, wins: u32, losses: u32, rank: u32) -> RawTeam {
    RawTeam {
        id,
        name: Some(name.to_string()),
        primary_owner: Some(owner.to_string()),
        owners: Some(vec![owner.to_string()]),
        record: Some(RawRecord {
            overall: Some(RawOverallRecord {
                wins,
                losses,
                ties: 0,
                points_for: 100.0 * wins as f64 + 10.0 * id as f64,
                points_against: 100.0 * losses as f64,
            }),
        }),
        rank_final: Some(rank),
        ..Default::default()
    }
}

pub fn game(week: u32, home: u32, home_pts: f64, away: u32, away_pts: f64) -> RawMatchup {
    RawMatchup {
        matchup_period_id: week,
        home: Some(RawMatchupSide {
            team_id: home,
            total_points: home_pts,
        }),
        away: Some(RawMatchupSide {
            team_id: away,
            total_points: away_pts,
        }),
        playoff_tier_type: Some("NONE".to_string()),
    }
}

pub fn with_pick_order(mut season: RawSeason, order: &[u32]) -> RawSeason {
    season.settings = Some(RawSettings {
        draft_settings: Some(RawDraftSettings {
            pick_order: Some(order.to_vec()),
        }),
    });
    season
}

/// Small four-team season: Alpha beats everyone, Delta loses every game
pub fn four_team_season() -> RawSeason {
    RawSeason {
        members: vec![
            member("{A}", "Ann", "Alpha"),
            member("{B}", "Bob", "Beta"),
            member("{C}", "Cy", "Gamma"),
            member("{D}", "Di", "Delta"),
        ],
        teams: vec![
            team(1, "Alpha Dogs", "{A}", 3, 0, 1),
            team(2, "Beta Blockers", "{B}", 2, 1, 2),
            team(3, "Gamma Rays", "{C}", 1, 2, 3),
            team(4, "Delta Force", "{D}", 0, 3, 4),
        ],
        schedule: vec![
            game(1, 1, 120.0, 2, 100.0),
            game(1, 3, 90.0, 4, 80.0),
            game(2, 1, 110.0, 3, 70.0),
            game(2, 2, 105.0, 4, 104.0),
            game(3, 4, 60.0, 1, 150.0),
            game(3, 2, 99.0, 3, 98.0),
        ],
        settings: None,
    }
}

pub fn standing(year: u16, team: &str, owner: &str, wins: u32, losses: u32, ties: u32) -> YearlyStanding {
    YearlyStanding {
        year,
        team: team.to_string(),
        owner: owner.to_string(),
        rank: 0,
        wins,
        losses,
        ties,
        points_for: 0.0,
        points_against: 0.0,
        playoff_result: PlayoffResult::Missed,
    }
}

pub fn matchup(season: u16, week: u32, home: &str, home_score: f64, away: &str, away_score: f64) -> Matchup {
    Matchup {
        season,
        week,
        home_team: home.to_string(),
        away_team: away.to_string(),
        home_owner: format!("{} Owner", home),
        away_owner: format!("{} Owner", away),
        home_score,
        away_score,
        is_playoff: false,
        is_championship: false,
    }
}
