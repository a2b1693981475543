// SPDX-License-Identifier: MIT
//! Achievement catalog — the fixed rule set, loaded once at process start.
//!
//! Achievement codes use snake_case as their string value (e.g.
//! `"first_entry"`). They are stable across service versions and are the
//! identity of a grant row in `user_achievements`.

use super::GamificationError;

// ─── Achievement code constants ───────────────────────────────────────────────

pub const FIRST_ENTRY: &str = "first_entry";
pub const ENTRIES_10: &str = "entries_10";
pub const ENTRIES_50: &str = "entries_50";
pub const ENTRIES_100: &str = "entries_100";
pub const ENTRIES_365: &str = "entries_365";
pub const STREAK_3: &str = "streak_3";
pub const STREAK_7: &str = "streak_7";
pub const STREAK_14: &str = "streak_14";
pub const STREAK_30: &str = "streak_30";
pub const STREAK_100: &str = "streak_100";

// ─── Metric ───────────────────────────────────────────────────────────────────

/// The statistic an achievement rule thresholds on.
///
/// There are no combinators: each rule is a single metric compared against a
/// single threshold with `>=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Lifetime count of journal entries.
    TotalEntries,
    /// Length of the current daily journaling streak (UTC calendar days).
    StreakDays,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TotalEntries => "total_entries",
            Self::StreakDays => "streak_days",
        }
    }
}

// ─── Definitions ──────────────────────────────────────────────────────────────

/// A single achievement rule: cross `threshold` on `metric`, earn `points`.
#[derive(Debug, Clone)]
pub struct AchievementDefinition {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub metric: Metric,
    pub threshold: i64,
    pub points: i64,
}

/// The validated, points-ascending catalog handed to the engine.
///
/// Evaluation and commit order follow this ordering, so lower-value
/// achievements are committed before higher-value ones within one pass.
#[derive(Debug)]
pub struct AchievementCatalog {
    defs: Vec<AchievementDefinition>,
}

impl AchievementCatalog {
    /// The built-in rule set. This list is the canonical source of truth for
    /// the achievement catalog; the database stores only grants and balances.
    pub fn builtin() -> Result<Self, GamificationError> {
        Self::from_definitions(vec![
            AchievementDefinition {
                code: FIRST_ENTRY,
                name: "First Entry",
                description: "Wrote your first journal entry. The habit begins.",
                metric: Metric::TotalEntries,
                threshold: 1,
                points: 10,
            },
            AchievementDefinition {
                code: ENTRIES_10,
                name: "Ten Pages",
                description: "Wrote 10 journal entries.",
                metric: Metric::TotalEntries,
                threshold: 10,
                points: 25,
            },
            AchievementDefinition {
                code: ENTRIES_50,
                name: "Fifty Pages",
                description: "Wrote 50 journal entries.",
                metric: Metric::TotalEntries,
                threshold: 50,
                points: 75,
            },
            AchievementDefinition {
                code: ENTRIES_100,
                name: "Century",
                description: "Wrote 100 journal entries.",
                metric: Metric::TotalEntries,
                threshold: 100,
                points: 150,
            },
            AchievementDefinition {
                code: ENTRIES_365,
                name: "A Year of Pages",
                description: "Wrote 365 journal entries. Prolific.",
                metric: Metric::TotalEntries,
                threshold: 365,
                points: 400,
            },
            AchievementDefinition {
                code: STREAK_3,
                name: "Warming Up",
                description: "Journaled 3 days in a row.",
                metric: Metric::StreakDays,
                threshold: 3,
                points: 25,
            },
            AchievementDefinition {
                code: STREAK_7,
                name: "One Week Strong",
                description: "Journaled 7 days in a row.",
                metric: Metric::StreakDays,
                threshold: 7,
                points: 50,
            },
            AchievementDefinition {
                code: STREAK_14,
                name: "Fortnight",
                description: "Journaled 14 days in a row.",
                metric: Metric::StreakDays,
                threshold: 14,
                points: 100,
            },
            AchievementDefinition {
                code: STREAK_30,
                name: "Monthly Devotion",
                description: "Journaled 30 days in a row.",
                metric: Metric::StreakDays,
                threshold: 30,
                points: 200,
            },
            AchievementDefinition {
                code: STREAK_100,
                name: "Hundred Days",
                description: "Journaled 100 days in a row. Unstoppable.",
                metric: Metric::StreakDays,
                threshold: 100,
                points: 500,
            },
        ])
    }

    /// Validate and order a definition list.
    ///
    /// Duplicate codes and non-positive thresholds are configuration errors:
    /// callers treat them as fatal at startup, never at call time.
    pub fn from_definitions(
        mut defs: Vec<AchievementDefinition>,
    ) -> Result<Self, GamificationError> {
        let mut seen = std::collections::HashSet::new();
        for def in &defs {
            if !seen.insert(def.code) {
                return Err(GamificationError::Configuration(format!(
                    "duplicate achievement code: {}",
                    def.code
                )));
            }
            if def.threshold <= 0 {
                return Err(GamificationError::Configuration(format!(
                    "achievement {} has non-positive threshold {}",
                    def.code, def.threshold
                )));
            }
        }
        // Stable sort: ties keep their declaration order.
        defs.sort_by_key(|d| d.points);
        Ok(Self { defs })
    }

    /// All definitions, ascending by points.
    pub fn all(&self) -> &[AchievementDefinition] {
        &self.defs
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid_and_points_ascending() {
        let catalog = AchievementCatalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        let points: Vec<i64> = catalog.all().iter().map(|d| d.points).collect();
        let mut sorted = points.clone();
        sorted.sort();
        assert_eq!(points, sorted);
    }

    #[test]
    fn duplicate_code_is_configuration_error() {
        let dup = AchievementDefinition {
            code: FIRST_ENTRY,
            name: "Dup",
            description: "",
            metric: Metric::TotalEntries,
            threshold: 2,
            points: 5,
        };
        let mut defs = AchievementCatalog::builtin().unwrap().defs;
        defs.push(dup);
        let err = AchievementCatalog::from_definitions(defs).unwrap_err();
        assert!(matches!(err, GamificationError::Configuration(_)));
    }

    #[test]
    fn non_positive_threshold_is_configuration_error() {
        let defs = vec![AchievementDefinition {
            code: "broken",
            name: "Broken",
            description: "",
            metric: Metric::StreakDays,
            threshold: 0,
            points: 5,
        }];
        let err = AchievementCatalog::from_definitions(defs).unwrap_err();
        assert!(matches!(err, GamificationError::Configuration(_)));
    }

    #[test]
    fn equal_points_keep_declaration_order() {
        let defs = vec![
            AchievementDefinition {
                code: "a",
                name: "A",
                description: "",
                metric: Metric::TotalEntries,
                threshold: 1,
                points: 25,
            },
            AchievementDefinition {
                code: "b",
                name: "B",
                description: "",
                metric: Metric::StreakDays,
                threshold: 3,
                points: 25,
            },
        ];
        let catalog = AchievementCatalog::from_definitions(defs).unwrap();
        let codes: Vec<&str> = catalog.all().iter().map(|d| d.code).collect();
        assert_eq!(codes, vec!["a", "b"]);
    }
}
