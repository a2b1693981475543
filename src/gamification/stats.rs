// SPDX-License-Identifier: MIT
//! Per-user journaling statistics — entry count and current streak.
//!
//! The streak is never persisted: it is recomputed from the raw entry
//! timestamps on every call, so it can never drift from the entry feed.

use chrono::{DateTime, NaiveDate, Utc};

use super::GamificationError;
use crate::journal::EntryStore;

/// Accumulated statistics the achievement rules threshold on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserStats {
    pub total_entries: i64,
    pub current_streak: u32,
}

/// Computes `UserStats` from the read-only entry feed.
pub struct StatsProvider {
    entries: EntryStore,
}

impl StatsProvider {
    pub fn new(entries: EntryStore) -> Self {
        Self { entries }
    }

    /// Entry count + current streak as of now (UTC).
    ///
    /// Feed failures surface as `DataUnavailable`; no partial stats are ever
    /// returned.
    pub async fn compute(&self, user_id: &str) -> Result<UserStats, GamificationError> {
        let total_entries = self
            .entries
            .count_entries(user_id)
            .await
            .map_err(GamificationError::unavailable)?;
        let stamps = self
            .entries
            .entry_timestamps(user_id)
            .await
            .map_err(GamificationError::unavailable)?;

        let days = distinct_days_desc(&stamps);
        let current_streak = current_streak(&days, Utc::now().date_naive());

        Ok(UserStats {
            total_entries,
            current_streak,
        })
    }
}

/// Collapse entry timestamps to their distinct UTC calendar dates, newest
/// first. Multiple entries on the same day count as one streak day.
pub fn distinct_days_desc(stamps: &[DateTime<Utc>]) -> Vec<NaiveDate> {
    let mut days: Vec<NaiveDate> = stamps.iter().map(|t| t.date_naive()).collect();
    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();
    days
}

/// Walk the distinct entry dates (descending) and return the current streak.
///
/// The streak is zero unless the most recent entry date is `today` or
/// yesterday — a broken streak resets to zero outright, it is not "the last
/// N consecutive days ending in the past". From a qualifying head date the
/// walk extends while each next date is exactly one calendar day earlier,
/// and stops at the first gap.
pub fn current_streak(days_desc: &[NaiveDate], today: NaiveDate) -> u32 {
    let Some(&latest) = days_desc.first() else {
        return 0;
    };
    if (today - latest).num_days() > 1 {
        return 0;
    }

    let mut streak = 1;
    for pair in days_desc.windows(2) {
        if (pair[0] - pair[1]).num_days() == 1 {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

// ─── Tests ────────────────────────────────────────────────────────────────────
