// SPDX-License-Identifier: MIT
//! Gamification read models — serialisable types returned to the HTTP layer.

use serde::{Deserialize, Serialize};

/// One achievement's place in a user's snapshot, earned or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementStatus {
    /// Machine-stable snake_case code, e.g. `"first_entry"`.
    pub code: String,

    /// Human-readable badge name, e.g. `"First Entry"`.
    pub name: String,

    /// Short description shown on the achievement card.
    pub description: String,

    /// Points awarded when this achievement is earned.
    pub points: i64,

    /// Whether the user has earned this achievement.
    pub is_earned: bool,

    /// ISO 8601 timestamp of the grant. `None` when not yet earned.
    pub earned_at: Option<String>,
}

/// The full read-model view of a user's gamification state.
///
/// Always lists the complete catalog, earned and unearned alike. Derived
/// fresh on every call; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub total_points: i64,
    pub total_entries: i64,
    pub current_streak: u32,
    pub achievements: Vec<AchievementStatus>,
}

// ─── Tests ────────────────────────────────────────────────────────────────────
