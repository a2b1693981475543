// rest/routes/status.rs — GET /api/v1/users/{user_id}/status.
//
// Every status check runs a full evaluate-and-award pass, so an achievement
// earned since the last entry (e.g. a streak threshold crossed by the clock)
// is granted on read, not only on write.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::error;

use crate::gamification::{GamificationEngine, StatusSnapshot};
use crate::AppContext;

pub async fn get_status(
    State(ctx): State<Arc<AppContext>>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let engine = GamificationEngine::new(ctx.storage.pool(), Arc::clone(&ctx.catalog));
    match engine.evaluate_and_award(&user_id).await {
        Ok(snapshot) => Ok(Json(snapshot_json(&snapshot))),
        Err(e) => {
            error!(user_id = %user_id, error = %e, "status evaluation failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "status unavailable" })),
            ))
        }
    }
}

/// Wire shape of a `StatusSnapshot`.
///
/// ```json
/// {
///   "totalPoints":   35,
///   "totalEntries":  12,
///   "currentStreak": 3,
///   "achievements": [
///     { "code": "first_entry", "name": "First Entry", "description": "…",
///       "points": 10, "isEarned": true, "earnedAt": "2026-02-25T10:30:00Z" },
///     …
///   ]
/// }
/// ```
pub(crate) fn snapshot_json(snapshot: &StatusSnapshot) -> Value {
    let achievements: Vec<Value> = snapshot
        .achievements
        .iter()
        .map(|a| {
            json!({
                "code":        a.code,
                "name":        a.name,
                "description": a.description,
                "points":      a.points,
                "isEarned":    a.is_earned,
                "earnedAt":    a.earned_at,
            })
        })
        .collect();

    json!({
        "totalPoints":   snapshot.total_points,
        "totalEntries":  snapshot.total_entries,
        "currentStreak": snapshot.current_streak,
        "achievements":  achievements,
    })
}
