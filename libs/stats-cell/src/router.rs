use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{
    get_champions, get_game_count, get_game_version, health_check, load_all_combination_win_rate,
    load_combination_win_rate, StatsHandlers,
};
use shared_config::AppConfig;

pub fn stats_routes(handlers: Arc<StatsHandlers>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route(
            "/api/load-combination-win-rate",
            post(load_combination_win_rate),
        )
        .route("/api/game-version", get(get_game_version))
        .route("/api/get-champions", get(get_champions))
        .route("/api/game-count", get(get_game_count))
        .route(
            "/api/load-all-combination-win-rate",
            post(load_all_combination_win_rate),
        )
        .with_state(handlers)
}

pub fn create_stats_router(config: Arc<AppConfig>) -> Router {
    stats_routes(Arc::new(StatsHandlers::new(config)))
}
