// ✅ Data Quality - integrity checks over the derived league data
//
// The derivation never assumes these properties; it reports them. A
// critical issue means the derived aggregates contradict each other, a
// warning means the source fixtures are odd but usable.

use crate::context::LeagueData;
use crate::draft::DraftPosition;
use crate::records::TeamRecord;
use crate::standings::{PlayoffResult, YearlyStanding};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{info, warn};

// ============================================================================
// REPORT TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Severity {
    Critical, // Derived aggregates disagree with each other
    Warning,  // Source data violates an expected property
    Info,     // Worth knowing, nothing is wrong
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityIssue {
    pub severity: Severity,
    pub rule_name: String,
    /// Season the issue belongs to, None for all-time checks
    pub year: Option<u16>,
    pub issue: String,
}

impl QualityIssue {
    fn new(severity: Severity, rule_name: &str, year: Option<u16>, issue: String) -> Self {
        QualityIssue {
            severity,
            rule_name: rule_name.to_string(),
            year,
            issue,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    pub rules_checked: Vec<String>,
    pub issues: Vec<QualityIssue>,
}

impl QualityReport {
    pub fn summary(&self) -> String {
        format!(
            "Rules: {}, Issues: {} ({} critical, {} warnings)",
            self.rules_checked.len(),
            self.issues.len(),
            self.count(Severity::Critical),
            self.count(Severity::Warning)
        )
    }

    pub fn has_critical_issues(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Critical)
    }

    pub fn is_clean(&self) -> bool {
        self.issues.iter().all(|i| i.severity == Severity::Info)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

// ============================================================================
// CHECKS
// ============================================================================

pub const RULE_RANK_PERMUTATION: &str = "rank_permutation";
pub const RULE_RECORD_CONSISTENCY: &str = "record_consistency";
pub const RULE_UNIQUE_DRAFT_POSITION: &str = "unique_draft_position";
pub const RULE_SEASON_HAS_MATCHUPS: &str = "season_has_matchups";

/// Run every integrity check over `data`
pub fn check_league(data: &LeagueData) -> QualityReport {
    let mut issues = Vec::new();

    issues.extend(check_rank_permutation(&data.standings));
    issues.extend(check_record_consistency(&data.records, &data.standings));
    issues.extend(check_unique_draft_positions(&data.draft_positions));

    let seasons_with_games: BTreeSet<u16> = data.matchups.iter().map(|m| m.season).collect();
    for &year in &data.years {
        if !seasons_with_games.contains(&year) {
            issues.push(QualityIssue::new(
                Severity::Info,
                RULE_SEASON_HAS_MATCHUPS,
                Some(year),
                "no matchups; superlatives and performance are unavailable".to_string(),
            ));
        }
    }

    for issue in issues.iter().filter(|i| i.severity != Severity::Info) {
        warn!(rule = %issue.rule_name, year = ?issue.year, "{}", issue.issue);
    }

    let report = QualityReport {
        rules_checked: vec![
            RULE_RANK_PERMUTATION.to_string(),
            RULE_RECORD_CONSISTENCY.to_string(),
            RULE_UNIQUE_DRAFT_POSITION.to_string(),
            RULE_SEASON_HAS_MATCHUPS.to_string(),
        ],
        issues,
    };
    info!("{}", report.summary());
    report
}

/// Ranks within each year must be exactly 1..=N
pub fn check_rank_permutation(standings: &[YearlyStanding]) -> Vec<QualityIssue> {
    let mut by_year: BTreeMap<u16, Vec<u32>> = BTreeMap::new();
    for s in standings {
        by_year.entry(s.year).or_default().push(s.rank);
    }

    by_year
        .into_iter()
        .filter_map(|(year, mut ranks)| {
            ranks.sort_unstable();
            let expected: Vec<u32> = (1..=ranks.len() as u32).collect();
            (ranks != expected).then(|| {
                QualityIssue::new(
                    Severity::Warning,
                    RULE_RANK_PERMUTATION,
                    Some(year),
                    format!("ranks {:?} are not a permutation of 1..={}", ranks, expected.len()),
                )
            })
        })
        .collect()
}

/// Each record's seasons and championships must match the standings it came from
pub fn check_record_consistency(records: &[TeamRecord], standings: &[YearlyStanding]) -> Vec<QualityIssue> {
    let mut expected: HashMap<&str, (u32, u32)> = HashMap::new();
    for s in standings {
        let entry = expected.entry(s.owner.as_str()).or_default();
        entry.0 += 1;
        if s.playoff_result == PlayoffResult::Champion {
            entry.1 += 1;
        }
    }

    let mut issues = Vec::new();
    for record in records {
        let (seasons, championships) = expected.get(record.owner.as_str()).copied().unwrap_or_default();
        if record.seasons != seasons {
            issues.push(QualityIssue::new(
                Severity::Critical,
                RULE_RECORD_CONSISTENCY,
                None,
                format!(
                    "{}: record has {} seasons, standings have {}",
                    record.owner, record.seasons, seasons
                ),
            ));
        }
        if record.championships != championships {
            issues.push(QualityIssue::new(
                Severity::Critical,
                RULE_RECORD_CONSISTENCY,
                None,
                format!(
                    "{}: record has {} championships, standings have {}",
                    record.owner, record.championships, championships
                ),
            ));
        }
    }
    issues
}

/// No two teams may share a draft slot within one year
pub fn check_unique_draft_positions(positions: &[DraftPosition]) -> Vec<QualityIssue> {
    let mut seen: BTreeSet<(u16, u32)> = BTreeSet::new();
    let mut reported: BTreeSet<(u16, u32)> = BTreeSet::new();
    let mut issues = Vec::new();

    for p in positions {
        let key = (p.year, p.position);
        if !seen.insert(key) && reported.insert(key) {
            issues.push(QualityIssue::new(
                Severity::Warning,
                RULE_UNIQUE_DRAFT_POSITION,
                Some(p.year),
                format!("draft position {} is assigned more than once", p.position),
            ));
        }
    }
    issues
}

// ============================================================================
// TESTS
// ============================================================================
