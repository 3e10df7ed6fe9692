// 📝 Draft Position Extractor
//
// Position sources, in priority order:
// 1. settings.draftSettings.pickOrder - the actual snake-draft slot
// 2. team.draftDayProjectedRank       - newer exports without a pick order
// Teams with neither are left out (position 0 is never emitted).

use crate::entities::OwnerRegistry;
use crate::loader::SeasonSet;
use crate::raw::{RawSeason, RawTeam};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPosition {
    pub year: u16,
    pub team: String,
    pub owner: String,
    /// 1-indexed pick slot
    pub position: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_rank: Option<u32>,
}

/// Draft slot of one team, if the season says anything about it
pub fn draft_slot(season: &RawSeason, team: &RawTeam) -> Option<u32> {
    match season.pick_order() {
        Some(order) => order
            .iter()
            .position(|&id| id == team.id)
            .map(|index| index as u32 + 1),
        None => team.draft_day_projected_rank.filter(|rank| *rank > 0),
    }
}

/// Extract draft positions; year descending, then position ascending
pub fn extract_draft_positions(seasons: &SeasonSet, owners: &OwnerRegistry) -> Vec<DraftPosition> {
    let mut positions = Vec::new();

    for (&year, season) in seasons {
        for team in &season.teams {
            let Some(owner_id) = team.owner_id() else {
                warn!(year, team = %team.display_name(), "skipping draft slot of team without owner");
                continue;
            };

            let Some(position) = draft_slot(season, team) else {
                continue;
            };

            positions.push(DraftPosition {
                year,
                team: team.display_name(),
                owner: owners.name_of(owner_id),
                position,
                final_rank: team.final_rank(),
            });
        }
    }

    positions.sort_by(|a, b| b.year.cmp(&a.year).then(a.position.cmp(&b.position)));
    info!(rows = positions.len(), "extracted draft positions");
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{member, team, with_pick_order};

    fn three_teams() -> RawSeason {
        RawSeason {
            members: vec![member("{A}", "Ann", "A"), member("{B}", "Bo", "B"), member("{C}", "Cy", "C")],
            teams: vec![
                team(10, "Ten", "{A}", 5, 5, 2),
                team(20, "Twenty", "{B}", 6, 4, 1),
                team(30, "Thirty", "{C}", 4, 6, 3),
            ],
            ..Default::default()
        }
    }

    fn extract(seasons: &SeasonSet) -> Vec<DraftPosition> {
        extract_draft_positions(seasons, &OwnerRegistry::from_seasons(seasons))
    }

    #[test]
    fn test_pick_order_is_authoritative() {
        let mut season = with_pick_order(three_teams(), &[30, 10, 20]);
        season.teams[0].draft_day_projected_rank = Some(3);

        let mut seasons = SeasonSet::new();
        seasons.insert(2014, season);

        let positions = extract(&seasons);
        let slots: Vec<(&str, u32)> = positions.iter().map(|p| (p.team.as_str(), p.position)).collect();

        assert_eq!(slots, vec![("Thirty", 1), ("Ten", 2), ("Twenty", 3)]);
    }

    #[test]
    fn test_team_missing_from_pick_order_is_excluded() {
        let season = with_pick_order(three_teams(), &[30, 10]);
        let mut seasons = SeasonSet::new();
        seasons.insert(2014, season);

        let positions = extract(&seasons);
        assert_eq!(positions.len(), 2);
        assert!(positions.iter().all(|p| p.team != "Twenty"));
    }

    #[test]
    fn test_team_without_owner_is_excluded() {
        let mut season = with_pick_order(three_teams(), &[30, 10, 20]);
        season.teams[0].primary_owner = None;
        season.teams[0].owners = None;

        let mut seasons = SeasonSet::new();
        seasons.insert(2014, season);

        let positions = extract(&seasons);
        assert_eq!(positions.len(), 2);
        assert!(positions.iter().all(|p| p.team != "Ten"));
        assert_eq!(positions[0].team, "Thirty");
        assert_eq!(positions[1].position, 3);
    }

    #[test]
    fn test_projected_rank_fallback() {
        let mut season = three_teams();
        season.teams[0].draft_day_projected_rank = Some(2);
        season.teams[1].draft_day_projected_rank = Some(1);
        season.teams[2].draft_day_projected_rank = Some(0);

        let mut seasons = SeasonSet::new();
        seasons.insert(2022, season);

        let positions = extract(&seasons);

        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0].team, "Twenty");
        assert_eq!(positions[0].position, 1);
        assert_eq!(positions[0].final_rank, Some(1));
        assert_eq!(positions[1].owner, "Ann A");
    }

    #[test]
    fn test_sorted_year_desc_position_asc() {
        let mut seasons = SeasonSet::new();
        seasons.insert(2014, with_pick_order(three_teams(), &[30, 10, 20]));
        seasons.insert(2015, with_pick_order(three_teams(), &[20, 30, 10]));

        let keys: Vec<(u16, u32)> = extract(&seasons).iter().map(|p| (p.year, p.position)).collect();
        assert_eq!(keys, vec![(2015, 1), (2015, 2), (2015, 3), (2014, 1), (2014, 2), (2014, 3)]);
    }

    #[test]
    fn test_final_rank_omitted_when_absent() {
        let mut season = with_pick_order(three_teams(), &[10, 20, 30]);
        season.teams[0].rank_final = None;

        let mut seasons = SeasonSet::new();
        seasons.insert(2014, season);

        let positions = extract(&seasons);
        assert_eq!(positions[0].final_rank, None);

        let json = serde_json::to_string(&positions[0]).unwrap();
        assert!(!json.contains("finalRank"));
    }
}
