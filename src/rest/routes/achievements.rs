// rest/routes/achievements.rs — GET /api/v1/achievements.
//
// The full catalog without any user state; clients render unearned badges
// from this list.

use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::AppContext;

pub async fn list_achievements(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    let list: Vec<Value> = ctx
        .catalog
        .all()
        .iter()
        .map(|def| {
            json!({
                "code":        def.code,
                "name":        def.name,
                "description": def.description,
                "metric":      def.metric.as_str(),
                "threshold":   def.threshold,
                "points":      def.points,
            })
        })
        .collect();
    Json(Value::Array(list))
}
