use std::sync::Arc;

use axum::{middleware, Router};

use shared_config::AppConfig;
use shared_utils::{origin_filter, AllowedOrigins};
use stats_cell::create_stats_router;

/// Full API surface: the stats routes behind the origin allow-list. The
/// filter runs ahead of every handler; preflight requests bypass it.
pub fn create_router(config: Arc<AppConfig>) -> Router {
    let allowed = Arc::new(AllowedOrigins::from_config(&config));

    create_stats_router(config).layer(middleware::from_fn_with_state(allowed, origin_filter))
}
