// 📥 Raw season export - the external per-season feed
//
// These types mirror the league host's export format. Every field the
// derivation does not strictly need is optional, and unknown fields are
// ignored, so newer exports keep loading. Explicit `null`s read as the
// field's default.

use serde::{Deserialize, Deserializer, Serialize};

/// `null` or a missing key both yield `T::default()`
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One member (person) of the league in a given season
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMember {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOverallRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub wins: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub losses: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ties: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points_for: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points_against: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub overall: Option<RawOverallRecord>,
}

/// One fantasy team in a given season
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTeam {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub primary_owner: Option<String>,
    #[serde(default)]
    pub owners: Option<Vec<String>>,
    #[serde(default)]
    pub record: Option<RawRecord>,
    #[serde(default)]
    pub rank_final: Option<u32>,
    #[serde(default)]
    pub rank_calculated_final: Option<u32>,
    #[serde(default)]
    pub playoff_seed: Option<u32>,
    #[serde(default)]
    pub draft_day_projected_rank: Option<u32>,
}

impl RawTeam {
    /// Display label; exports occasionally carry an empty name
    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Team {}", self.id),
        }
    }

    /// Primary owner, falling back to the first listed co-owner
    pub fn owner_id(&self) -> Option<&str> {
        self.primary_owner
            .as_deref()
            .filter(|id| !id.is_empty())
            .or_else(|| {
                self.owners
                    .as_ref()
                    .and_then(|owners| owners.first())
                    .map(String::as_str)
                    .filter(|id| !id.is_empty())
            })
    }

    /// `rankFinal`, then `rankCalculatedFinal`; zero counts as absent
    pub fn final_rank(&self) -> Option<u32> {
        self.rank_final
            .filter(|r| *r > 0)
            .or(self.rank_calculated_final.filter(|r| *r > 0))
    }

    pub fn overall(&self) -> RawOverallRecord {
        self.record
            .as_ref()
            .and_then(|r| r.overall.clone())
            .unwrap_or_default()
    }
}

/// One side of a scheduled game
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMatchupSide {
    pub team_id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_points: f64,
}

/// One scheduled game; bye weeks have only one side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMatchup {
    pub matchup_period_id: u32,
    #[serde(default)]
    pub home: Option<RawMatchupSide>,
    #[serde(default)]
    pub away: Option<RawMatchupSide>,
    #[serde(default)]
    pub playoff_tier_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDraftSettings {
    #[serde(default)]
    pub pick_order: Option<Vec<u32>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSettings {
    #[serde(default)]
    pub draft_settings: Option<RawDraftSettings>,
}

/// Complete export for one season
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSeason {
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<RawMember>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub teams: Vec<RawTeam>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub schedule: Vec<RawMatchup>,
    #[serde(default)]
    pub settings: Option<RawSettings>,
}

impl RawSeason {
    /// Snake-draft pick order, if the export carries a non-empty one
    pub fn pick_order(&self) -> Option<&[u32]> {
        self.settings
            .as_ref()
            .and_then(|s| s.draft_settings.as_ref())
            .and_then(|d| d.pick_order.as_deref())
            .filter(|order| !order.is_empty())
    }
}

/// Older exports wrap the season object in a one-element list.
/// `Wrapped` is tried first: serde would otherwise accept a list as a
/// positional `RawSeason`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SeasonEnvelope {
    Wrapped(Vec<RawSeason>),
    Single(RawSeason),
}

impl SeasonEnvelope {
    pub fn into_season(self) -> Option<RawSeason> {
        match self {
            SeasonEnvelope::Single(season) => Some(season),
            SeasonEnvelope::Wrapped(list) => list.into_iter().next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_name_fallback() {
        let team = RawTeam {
            id: 7,
            name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(team.display_name(), "Team 7");

        let named = RawTeam {
            id: 7,
            name: Some("Gridiron Gang".to_string()),
            ..Default::default()
        };
        assert_eq!(named.display_name(), "Gridiron Gang");
    }

    #[test]
    fn test_owner_id_falls_back_to_owners_list() {
        let team = RawTeam {
            id: 1,
            owners: Some(vec!["{B}".to_string(), "{C}".to_string()]),
            ..Default::default()
        };
        assert_eq!(team.owner_id(), Some("{B}"));

        let primary = RawTeam {
            primary_owner: Some("{A}".to_string()),
            ..team.clone()
        };
        assert_eq!(primary.owner_id(), Some("{A}"));

        let none = RawTeam { id: 2, ..Default::default() };
        assert_eq!(none.owner_id(), None);
    }

    #[test]
    fn test_final_rank_skips_zero() {
        let team = RawTeam {
            id: 1,
            rank_final: Some(0),
            rank_calculated_final: Some(4),
            ..Default::default()
        };
        assert_eq!(team.final_rank(), Some(4));

        let neither = RawTeam { id: 1, ..Default::default() };
        assert_eq!(neither.final_rank(), None);
    }

    #[test]
    fn test_envelope_accepts_object_and_list() {
        let object = r#"{"members": [], "teams": [{"id": 3, "name": "A"}]}"#;
        let list = r#"[{"members": [], "teams": [{"id": 3, "name": "A"}]}]"#;

        let a: SeasonEnvelope = serde_json::from_str(object).unwrap();
        let b: SeasonEnvelope = serde_json::from_str(list).unwrap();

        assert_eq!(a.into_season().unwrap().teams[0].id, 3);
        assert_eq!(b.into_season().unwrap().teams[0].id, 3);
    }

    #[test]
    fn test_empty_list_has_no_season() {
        let empty: SeasonEnvelope = serde_json::from_str("[]").unwrap();
        assert!(empty.into_season().is_none());
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let json = r#"{
            "members": [{"id": "{A}", "displayName": null}],
            "teams": [{"id": 1, "record": {"overall": {"wins": null, "losses": 2, "pointsFor": null}}}],
            "schedule": [{"matchupPeriodId": 1, "home": {"teamId": 1, "totalPoints": null}}],
            "settings": null
        }"#;
        let season: RawSeason = serde_json::from_str(json).unwrap();

        assert_eq!(season.members[0].display_name, "");
        let overall = season.teams[0].overall();
        assert_eq!((overall.wins, overall.losses, overall.points_for), (0, 2, 0.0));
        assert_eq!(season.schedule[0].home.as_ref().unwrap().total_points, 0.0);
        assert!(season.settings.is_none());

        let bare: RawSeason = serde_json::from_str(r#"{"members": null, "teams": null, "schedule": null}"#).unwrap();
        assert_eq!(bare, RawSeason::default());
    }

    #[test]
    fn test_pick_order_ignores_empty_list() {
        let json = r#"{"settings": {"draftSettings": {"pickOrder": []}}}"#;
        let season: RawSeason = serde_json::from_str(json).unwrap();
        assert!(season.pick_order().is_none());

        let json = r#"{"settings": {"draftSettings": {"pickOrder": [30, 10, 20]}}}"#;
        let season: RawSeason = serde_json::from_str(json).unwrap();
        assert_eq!(season.pick_order(), Some(&[30, 10, 20][..]));
    }
}
