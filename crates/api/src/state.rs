use std::sync::Arc;

use reportal_db::cascade::CascadeCoordinator;
use reportal_db::DbPool;
use reportal_notify::NotificationRouter;

use crate::config::ServerConfig;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Arc<ServerConfig>,
    pub notifications: Arc<NotificationRouter>,
    pub cascade: Arc<CascadeCoordinator>,
}
