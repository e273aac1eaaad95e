// =====================================================================================
// STATS CELL - CHAMPION BUDDY WIN-RATE STATISTICS
// =====================================================================================
//
// This cell serves the precomputed statistics behind the buddy-champ web app:
// - Role-pair combination win rates, filtered per champion
// - Game version, game count and champion list passthroughs
// - A fetch-or-cache resolver over the remote stats store (12h TTL)
//
// =====================================================================================

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

// Re-export commonly used types
pub use models::{
    combination_key, CombinationWinRate, CombinationWinRateRequest, AllCombinationsRequest,
    DatasetKey, Role, StatsError, WinRateRecord,
};

pub use services::{DatasetCache, StatsResolver, DEFAULT_TTL};

pub use handlers::StatsHandlers;
pub use router::{create_stats_router, stats_routes};
