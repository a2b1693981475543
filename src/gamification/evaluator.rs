// SPDX-License-Identifier: MIT
//! Rule evaluation — which achievements newly qualify for a user's stats.

use std::collections::HashSet;

use super::catalog::{AchievementDefinition, Metric};
use super::stats::UserStats;

/// The achievements whose threshold is met by `stats` and whose code is not
/// already in `earned_codes`.
///
/// Order follows the catalog (ascending points), which fixes the commit order
/// for deterministic tests and partial-failure recovery; it has no effect on
/// final state, since every qualifying achievement is eventually granted.
pub fn newly_qualifying<'a>(
    stats: &UserStats,
    catalog: &'a [AchievementDefinition],
    earned_codes: &HashSet<String>,
) -> Vec<&'a AchievementDefinition> {
    catalog
        .iter()
        .filter(|def| qualifies(stats, def) && !earned_codes.contains(def.code))
        .collect()
}

fn qualifies(stats: &UserStats, def: &AchievementDefinition) -> bool {
    match def.metric {
        Metric::TotalEntries => stats.total_entries >= def.threshold,
        Metric::StreakDays => i64::from(stats.current_streak) >= def.threshold,
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamification::catalog::{self, AchievementCatalog};

    fn earned(codes: &[&str]) -> HashSet<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn one_entry_qualifies_first_entry_only() {
        let catalog = AchievementCatalog::builtin().unwrap();
        let stats = UserStats {
            total_entries: 1,
            current_streak: 1,
        };
        let newly = newly_qualifying(&stats, catalog.all(), &earned(&[]));
        let codes: Vec<&str> = newly.iter().map(|d| d.code).collect();
        assert_eq!(codes, vec![catalog::FIRST_ENTRY]);
    }

    #[test]
    fn earned_codes_are_excluded() {
        let catalog = AchievementCatalog::builtin().unwrap();
        let stats = UserStats {
            total_entries: 12,
            current_streak: 4,
        };
        let newly = newly_qualifying(
            &stats,
            catalog.all(),
            &earned(&[catalog::FIRST_ENTRY, catalog::ENTRIES_10]),
        );
        let codes: Vec<&str> = newly.iter().map(|d| d.code).collect();
        assert_eq!(codes, vec![catalog::STREAK_3]);
    }

    #[test]
    fn results_follow_catalog_order() {
        let catalog = AchievementCatalog::builtin().unwrap();
        let stats = UserStats {
            total_entries: 400,
            current_streak: 120,
        };
        let newly = newly_qualifying(&stats, catalog.all(), &earned(&[]));
        // Everything qualifies; order must be ascending by points.
        assert_eq!(newly.len(), catalog.len());
        let points: Vec<i64> = newly.iter().map(|d| d.points).collect();
        let mut sorted = points.clone();
        sorted.sort();
        assert_eq!(points, sorted);
    }

    #[test]
    fn nothing_qualifies_below_thresholds() {
        let catalog = AchievementCatalog::builtin().unwrap();
        let stats = UserStats {
            total_entries: 0,
            current_streak: 0,
        };
        assert!(newly_qualifying(&stats, catalog.all(), &earned(&[])).is_empty());
    }
}
