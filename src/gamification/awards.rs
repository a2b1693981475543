// SPDX-License-Identifier: MIT
//! Award persistence — the sole writer of grant records and point balances.
//!
//! Each award is one SQLite transaction: the grant insert and the points
//! increment either both take effect or neither does. Concurrent commits for
//! the same (user, achievement) are arbitrated by the grant table's primary
//! key, not by application locking: the insert runs first, and zero affected
//! rows means another caller already holds the grant, so the points leg is
//! never executed.

use anyhow::{Context as _, Result};
use chrono::Utc;
use sqlx::SqlitePool;

/// Result of an award commit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// This call inserted the grant and incremented the balance.
    Committed,
    /// The (user, achievement) pair was already granted — benign under
    /// races, nothing was written.
    AlreadyAwarded,
}

pub struct AwardCommitter {
    pool: SqlitePool,
}

impl AwardCommitter {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Atomically grant `code` to `user_id` and add `points` to their
    /// balance. Exactly one concurrent caller can observe `Committed`.
    pub async fn commit(
        &self,
        user_id: &str,
        code: &str,
        points: i64,
    ) -> Result<CommitOutcome> {
        let earned_at = Utc::now().to_rfc3339();
        let mut tx = self.pool.begin().await.context("begin award transaction")?;

        let inserted = sqlx::query(
            "INSERT OR IGNORE INTO user_achievements (user_id, achievement_code, earned_at)
             VALUES (?, ?, ?)",
        )
        .bind(user_id)
        .bind(code)
        .bind(&earned_at)
        .execute(&mut *tx)
        .await
        .context("insert grant record")?
        .rows_affected();

        if inserted == 0 {
            tx.rollback().await.context("abort duplicate award")?;
            return Ok(CommitOutcome::AlreadyAwarded);
        }

        sqlx::query(
            "INSERT INTO user_points (user_id, total_points) VALUES (?, ?)
             ON CONFLICT(user_id) DO UPDATE SET
               total_points = total_points + excluded.total_points",
        )
        .bind(user_id)
        .bind(points)
        .execute(&mut *tx)
        .await
        .context("increment points balance")?;

        tx.commit().await.context("commit award")?;
        Ok(CommitOutcome::Committed)
    }

    /// All grants for a user as `(achievement_code, earned_at)` pairs.
    pub async fn grants(&self, user_id: &str) -> Result<Vec<(String, String)>> {
        Ok(sqlx::query_as(
            "SELECT achievement_code, earned_at FROM user_achievements WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .context("load grant records")?)
    }

    pub async fn points_balance(&self, user_id: &str) -> Result<i64> {
        let balance: Option<i64> =
            sqlx::query_scalar("SELECT total_points FROM user_points WHERE user_id = ?")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .context("load points balance")?;
        Ok(balance.unwrap_or(0))
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
