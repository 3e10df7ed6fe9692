// 👤 Owner Entity + Owner Resolver
//
// "Team name is a VALUE (changes every season), owner id is IDENTITY"
//
// Problem solved:
// - The same person appears in every season's member list
// - Display names drift between seasons; the id does not
// - Standings, drafts and matchups all need one stable label per owner

use crate::loader::SeasonSet;
use crate::raw::RawMember;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

/// Label used when a team references an owner id no member list contains
pub const UNKNOWN_OWNER: &str = "Unknown";

// ============================================================================
// OWNER ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    /// Source-assigned member id - NEVER changes
    pub id: String,
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
}

impl Owner {
    pub fn from_member(member: &RawMember) -> Self {
        Owner {
            id: member.id.clone(),
            display_name: member.display_name.clone(),
            first_name: member.first_name.clone().unwrap_or_default(),
            last_name: member.last_name.clone().unwrap_or_default(),
        }
    }

    /// "First Last" when both parts are known, the display name otherwise
    pub fn name(&self) -> String {
        if !self.first_name.is_empty() && !self.last_name.is_empty() {
            format!("{} {}", self.first_name, self.last_name)
        } else {
            self.display_name.clone()
        }
    }
}

// ============================================================================
// OWNER REGISTRY
// ============================================================================

/// Canonical owners keyed by member id
///
/// Built once per data load. Duplicate ids resolve first-wins: the earliest
/// season (years ascending) that lists a member defines that owner, and later
/// seasons never overwrite it.
#[derive(Debug, Clone, Default)]
pub struct OwnerRegistry {
    owners: BTreeMap<String, Owner>,
}

impl OwnerRegistry {
    pub fn new() -> Self {
        OwnerRegistry::default()
    }

    /// Resolve every member of every season
    pub fn from_seasons(seasons: &SeasonSet) -> Self {
        let mut registry = OwnerRegistry::new();

        for season in seasons.values() {
            for member in &season.members {
                registry.insert_if_absent(Owner::from_member(member));
            }
        }

        info!(owners = registry.len(), "resolved owners");
        registry
    }

    /// Insert unless the id is already known; returns whether it was inserted
    pub fn insert_if_absent(&mut self, owner: Owner) -> bool {
        if self.owners.contains_key(&owner.id) {
            return false;
        }
        self.owners.insert(owner.id.clone(), owner);
        true
    }

    pub fn get(&self, id: &str) -> Option<&Owner> {
        self.owners.get(id)
    }

    /// Display name for an id; unknown ids resolve to "Unknown"
    pub fn name_of(&self, id: &str) -> String {
        self.get(id)
            .map(Owner::name)
            .unwrap_or_else(|| UNKNOWN_OWNER.to_string())
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Owners ordered by id
    pub fn all(&self) -> impl Iterator<Item = &Owner> {
        self.owners.values()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RawSeason;

    fn member(id: &str, display: &str, first: Option<&str>, last: Option<&str>) -> RawMember {
        RawMember {
            id: id.to_string(),
            display_name: display.to_string(),
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
        }
    }

    #[test]
    fn test_name_prefers_first_and_last() {
        let owner = Owner::from_member(&member("{1}", "jdoe42", Some("Jane"), Some("Doe")));
        assert_eq!(owner.name(), "Jane Doe");
    }

    #[test]
    fn test_name_falls_back_to_display_name() {
        let only_first = Owner::from_member(&member("{1}", "jdoe42", Some("Jane"), None));
        assert_eq!(only_first.name(), "jdoe42");

        let empty_last = Owner::from_member(&member("{1}", "jdoe42", Some("Jane"), Some("")));
        assert_eq!(empty_last.name(), "jdoe42");
    }

    #[test]
    fn test_unknown_id() {
        let registry = OwnerRegistry::new();
        assert_eq!(registry.name_of("{missing}"), "Unknown");
    }

    #[test]
    fn test_first_occurrence_wins_across_seasons() {
        let mut seasons = SeasonSet::new();
        seasons.insert(
            2015,
            RawSeason {
                members: vec![member("{1}", "early", Some("Sam"), Some("Early"))],
                ..Default::default()
            },
        );
        seasons.insert(
            2016,
            RawSeason {
                members: vec![
                    member("{1}", "late", Some("Sam"), Some("Late")),
                    member("{2}", "other", None, None),
                ],
                ..Default::default()
            },
        );

        let registry = OwnerRegistry::from_seasons(&seasons);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.name_of("{1}"), "Sam Early");
        assert_eq!(registry.name_of("{2}"), "other");
    }

    #[test]
    fn test_insert_if_absent_reports_duplicates() {
        let mut registry = OwnerRegistry::new();
        assert!(registry.insert_if_absent(Owner::from_member(&member("{1}", "a", None, None))));
        assert!(!registry.insert_if_absent(Owner::from_member(&member("{1}", "b", None, None))));
        assert_eq!(registry.name_of("{1}"), "a");
    }
}
