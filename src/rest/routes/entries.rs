// rest/routes/entries.rs — POST /api/v1/users/{user_id}/entries.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::error;

use super::status::snapshot_json;
use crate::gamification::GamificationEngine;
use crate::journal::EntryStore;
use crate::AppContext;

#[derive(Deserialize)]
pub struct CreateEntryRequest {
    pub body: String,
}

/// Record a journal entry, then immediately run an evaluate-and-award pass
/// so achievements unlocked by this entry land before the response.
pub async fn create_entry(
    State(ctx): State<Arc<AppContext>>,
    Path(user_id): Path<String>,
    Json(req): Json<CreateEntryRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let store = EntryStore::new(ctx.storage.pool());
    let entry = match store.record_entry(&user_id, &req.body).await {
        Ok(entry) => entry,
        Err(e) => {
            error!(user_id = %user_id, error = %format!("{e:#}"), "entry insert failed");
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "could not record entry" })),
            ));
        }
    };

    let engine = GamificationEngine::new(ctx.storage.pool(), Arc::clone(&ctx.catalog));
    match engine.evaluate_and_award(&user_id).await {
        Ok(snapshot) => Ok(Json(json!({
            "entry": {
                "id":        entry.id,
                "authorId":  entry.author_id,
                "createdAt": entry.created_at,
            },
            "status": snapshot_json(&snapshot),
        }))),
        Err(e) => {
            error!(user_id = %user_id, error = %e, "post-entry evaluation failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "status unavailable" })),
            ))
        }
    }
}
