// SPDX-License-Identifier: MIT
//! The orchestrator — one externally callable operation, `evaluate_and_award`.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use super::awards::{AwardCommitter, CommitOutcome};
use super::catalog::AchievementCatalog;
use super::evaluator::newly_qualifying;
use super::model::{AchievementStatus, StatusSnapshot};
use super::stats::StatsProvider;
use super::GamificationError;
use crate::journal::EntryStore;

/// Composes the stats provider, evaluator, and award committer into the
/// single status-check/award operation.
///
/// Cheap to construct per call: it only clones the Arc-backed pool. All
/// mutation funnels through the committer; the engine itself holds no state
/// between calls, which is what makes the whole operation idempotent and
/// self-healing after partial failures.
pub struct GamificationEngine {
    stats: StatsProvider,
    awards: AwardCommitter,
    catalog: Arc<AchievementCatalog>,
}

impl GamificationEngine {
    pub fn new(pool: SqlitePool, catalog: Arc<AchievementCatalog>) -> Self {
        Self {
            stats: StatsProvider::new(EntryStore::new(pool.clone())),
            awards: AwardCommitter::new(pool),
            catalog,
        }
    }

    /// Evaluate the catalog for `user_id`, commit any newly qualifying
    /// achievements, and return the post-commit snapshot.
    ///
    /// A failed commit for one achievement is logged and skipped; the rest
    /// of the pass and the snapshot still complete, and the missed award is
    /// retried naturally on the next call. Only read failures abort.
    pub async fn evaluate_and_award(
        &self,
        user_id: &str,
    ) -> Result<StatusSnapshot, GamificationError> {
        let earned_codes: HashSet<String> = self
            .awards
            .grants(user_id)
            .await
            .map_err(GamificationError::unavailable)?
            .into_iter()
            .map(|(code, _)| code)
            .collect();

        let stats = self.stats.compute(user_id).await?;

        for def in newly_qualifying(&stats, self.catalog.all(), &earned_codes) {
            match self.awards.commit(user_id, def.code, def.points).await {
                Ok(CommitOutcome::Committed) => {
                    info!(
                        user_id = %user_id,
                        achievement = %def.code,
                        points = def.points,
                        "achievement earned"
                    );
                }
                Ok(CommitOutcome::AlreadyAwarded) => {
                    // A concurrent evaluation got there first.
                    debug!(user_id = %user_id, achievement = %def.code, "already awarded");
                }
                Err(e) => {
                    warn!(
                        user_id = %user_id,
                        achievement = %def.code,
                        error = %format!("{e:#}"),
                        "award commit failed, will retry on next evaluation"
                    );
                }
            }
        }

        // Re-read grants and balance so the snapshot reflects this pass.
        let grants: HashMap<String, String> = self
            .awards
            .grants(user_id)
            .await
            .map_err(GamificationError::unavailable)?
            .into_iter()
            .collect();
        let total_points = self
            .awards
            .points_balance(user_id)
            .await
            .map_err(GamificationError::unavailable)?;

        let achievements = self
            .catalog
            .all()
            .iter()
            .map(|def| {
                let earned_at = grants.get(def.code).cloned();
                AchievementStatus {
                    code: def.code.to_string(),
                    name: def.name.to_string(),
                    description: def.description.to_string(),
                    points: def.points,
                    is_earned: earned_at.is_some(),
                    earned_at,
                }
            })
            .collect();

        Ok(StatusSnapshot {
            total_points,
            total_entries: stats.total_entries,
            current_streak: stats.current_streak,
            achievements,
        })
    }
}
