use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::IntoResponse,
    Json,
};
use tracing::instrument;

use shared_config::AppConfig;
use shared_database::{FirebaseClient, StatsStore};
use shared_models::ApiResponse;

use crate::models::{
    combination_key, AllCombinationsRequest, CombinationTable, CombinationWinRate,
    CombinationWinRateRequest, DatasetKey, Role, StatsError, WinRateRecord,
};
use crate::services::StatsResolver;

/// Records below this game count are too noisy to rank.
const MIN_TOTAL_GAMES: i64 = 200;
/// Fixed top-N slice for the all-combinations listing, in storage order.
const TOP_RESULTS: usize = 10;

pub struct StatsHandlers {
    resolver: StatsResolver,
}

impl StatsHandlers {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let store = Arc::new(FirebaseClient::new(&config));
        Self {
            resolver: StatsResolver::new(store),
        }
    }

    /// Same handlers over an arbitrary store, for tests.
    pub fn with_store(store: Arc<dyn StatsStore>) -> Self {
        Self {
            resolver: StatsResolver::new(store),
        }
    }

    async fn combination_table(&self) -> Result<CombinationTable, StatsError> {
        let cached = self.resolver.resolve(DatasetKey::Cache).await?;
        serde_json::from_value(cached).map_err(|err| StatsError::Upstream(err.to_string()))
    }
}

pub async fn health_check() -> Json<ApiResponse> {
    Json(ApiResponse::ok("server running"))
}

#[instrument(skip(handlers, body))]
pub async fn load_combination_win_rate(
    State(handlers): State<Arc<StatsHandlers>>,
    body: Result<Json<CombinationWinRateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, StatsError> {
    let Json(params) = body.map_err(|rejection| StatsError::BadRequest(rejection.body_text()))?;

    let role = Role::parse(&params.role).ok_or(StatsError::UnknownRoles)?;
    let buddy_role = Role::parse(&params.buddy_role).ok_or(StatsError::UnknownRoles)?;
    let key = combination_key(role, buddy_role);

    let mut table = handlers.combination_table().await?;
    let records = table
        .remove(&key)
        .ok_or_else(|| StatsError::Upstream(format!("no records for combination {}", key)))?;

    // Exact, case-sensitive champion match on the first role's slot; storage
    // order is preserved.
    let win_rates: Vec<CombinationWinRate> = records
        .into_iter()
        .filter(|record| record.champion_at(role.code()) == Some(params.champion.as_str()))
        .filter_map(|record| {
            Some(CombinationWinRate {
                champ: record.champion_at(role.code())?.to_string(),
                buddy_champ: record.champion_at(buddy_role.code())?.to_string(),
                win_rate: record.win_rate,
                total: record.total,
            })
        })
        .collect();

    Ok((
        [(
            header::CACHE_CONTROL,
            "public, max-age=86400, s-maxage=86400",
        )],
        Json(ApiResponse::ok(win_rates)),
    ))
}

#[instrument(skip(handlers, body))]
pub async fn load_all_combination_win_rate(
    State(handlers): State<Arc<StatsHandlers>>,
    body: Result<Json<AllCombinationsRequest>, JsonRejection>,
) -> Result<Json<ApiResponse>, StatsError> {
    let Json(params) = body.map_err(|rejection| StatsError::BadRequest(rejection.body_text()))?;

    // The combination key is taken as supplied, not checked against the role
    // table; an unknown key surfaces as an upstream fault on lookup.
    let mut table = handlers.combination_table().await?;
    let records = table.remove(&params.combination).ok_or_else(|| {
        StatsError::Upstream(format!("no records for combination {}", params.combination))
    })?;

    let top: Vec<WinRateRecord> = records
        .into_iter()
        .filter(|record| record.total >= MIN_TOTAL_GAMES)
        .take(TOP_RESULTS)
        .collect();

    Ok(Json(ApiResponse::ok(top)))
}

#[instrument(skip(handlers))]
pub async fn get_game_version(
    State(handlers): State<Arc<StatsHandlers>>,
) -> Result<Json<ApiResponse>, StatsError> {
    let version = handlers.resolver.resolve(DatasetKey::GameVersion).await?;
    Ok(Json(ApiResponse::ok(version)))
}

#[instrument(skip(handlers))]
pub async fn get_champions(
    State(handlers): State<Arc<StatsHandlers>>,
) -> Result<Json<ApiResponse>, StatsError> {
    let champions = handlers.resolver.resolve(DatasetKey::Champions).await?;
    Ok(Json(ApiResponse::ok(champions)))
}

#[instrument(skip(handlers))]
pub async fn get_game_count(
    State(handlers): State<Arc<StatsHandlers>>,
) -> Result<Json<ApiResponse>, StatsError> {
    let count = handlers.resolver.resolve(DatasetKey::GameCount).await?;
    Ok(Json(ApiResponse::ok(count)))
}
