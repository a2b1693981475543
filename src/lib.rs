pub mod config;
pub mod gamification;
pub mod journal;
pub mod rest;
pub mod storage;

use std::sync::Arc;

use config::ServiceConfig;
use gamification::AchievementCatalog;
use storage::Storage;

/// Shared application state passed to every route handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServiceConfig>,
    pub storage: Arc<Storage>,
    /// Validated at startup; immutable for the life of the process.
    pub catalog: Arc<AchievementCatalog>,
    pub started_at: std::time::Instant,
}
