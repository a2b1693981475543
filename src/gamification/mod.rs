// SPDX-License-Identifier: MIT
//! Gamification achievement engine.
//!
//! Derives journaling streaks from raw entry timestamps, evaluates the fixed
//! achievement catalog against accumulated statistics, and commits each newly
//! earned achievement (grant record + point award) exactly once per
//! (user, achievement) — no matter how many status checks or new-entry events
//! race through here.

pub mod awards;
pub mod catalog;
pub mod engine;
pub mod evaluator;
pub mod model;
pub mod stats;

pub use awards::{AwardCommitter, CommitOutcome};
pub use catalog::{AchievementCatalog, AchievementDefinition, Metric};
pub use engine::GamificationEngine;
pub use model::{AchievementStatus, StatusSnapshot};
pub use stats::{StatsProvider, UserStats};

/// Failures that abort a gamification call outright.
///
/// A failed commit for a single achievement is *not* in this taxonomy: the
/// engine logs it and keeps going, and the missed award self-heals on the
/// next call (the earned set is re-derived every time).
#[derive(Debug, thiserror::Error)]
pub enum GamificationError {
    /// The entry feed or grant store could not be read. Retryable; surfaced
    /// to the HTTP layer as a generic server error before any writes happen.
    #[error("gamification data unavailable: {0}")]
    DataUnavailable(#[source] anyhow::Error),

    /// Malformed catalog (duplicate code or non-positive threshold).
    /// Fatal at startup, never produced at call time.
    #[error("achievement catalog misconfigured: {0}")]
    Configuration(String),
}

impl GamificationError {
    pub(crate) fn unavailable(err: impl Into<anyhow::Error>) -> Self {
        Self::DataUnavailable(err.into())
    }
}
