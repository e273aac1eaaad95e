use std::collections::HashMap;
use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::ApiResponse;

/// The four datasets published by the remote store. Reference paths equal the
/// camelCase dataset names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKey {
    Cache,
    GameVersion,
    GameCount,
    Champions,
}

impl DatasetKey {
    pub fn as_path(&self) -> &'static str {
        match self {
            DatasetKey::Cache => "cache",
            DatasetKey::GameVersion => "gameVersion",
            DatasetKey::GameCount => "gameCount",
            DatasetKey::Champions => "champions",
        }
    }
}

impl fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

/// Closed set of lane roles. Input is case-insensitive; anything outside the
/// set is a validation fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Jungle,
    Support,
    Top,
    Mid,
    Ad,
}

impl Role {
    pub fn parse(input: &str) -> Option<Role> {
        match input.to_lowercase().as_str() {
            "jungle" => Some(Role::Jungle),
            "support" => Some(Role::Support),
            "top" => Some(Role::Top),
            "mid" => Some(Role::Mid),
            "ad" => Some(Role::Ad),
            _ => None,
        }
    }

    /// Short code used in combination keys and record fields.
    pub fn code(&self) -> &'static str {
        match self {
            Role::Jungle => "jg",
            Role::Support => "sup",
            Role::Top => "top",
            Role::Mid => "mid",
            Role::Ad => "ad",
        }
    }
}

/// Order-independent key into the combination table: codes sorted
/// lexicographically, joined with `-`.
pub fn combination_key(a: Role, b: Role) -> String {
    let mut codes = [a.code(), b.code()];
    codes.sort_unstable();
    codes.join("-")
}

/// One stored win-rate row. Champion names sit under role-code keys next to
/// the counters, e.g. `{"ad": "Ashe", "sup": "Lulu", "winRate": 55, "total": 300}`,
/// and round-trip unchanged through serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinRateRecord {
    #[serde(rename = "winRate")]
    pub win_rate: f64,
    pub total: i64,
    #[serde(flatten)]
    pub champions: HashMap<String, String>,
}

impl WinRateRecord {
    pub fn champion_at(&self, code: &str) -> Option<&str> {
        self.champions.get(code).map(String::as_str)
    }
}

/// Shape of the `cache` dataset: combination key to stored record sequence.
pub type CombinationTable = HashMap<String, Vec<WinRateRecord>>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinationWinRateRequest {
    pub role: String,
    pub buddy_role: String,
    pub champion: String,
}

#[derive(Debug, Deserialize)]
pub struct AllCombinationsRequest {
    pub combination: String,
}

/// Projection of a record for one requested role pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinationWinRate {
    pub champ: String,
    pub buddy_champ: String,
    pub win_rate: f64,
    pub total: i64,
}

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("unknown roles")]
    UnknownRoles,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Upstream(String),
}

impl From<anyhow::Error> for StatsError {
    fn from(err: anyhow::Error) -> Self {
        StatsError::Upstream(err.to_string())
    }
}

impl IntoResponse for StatsError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);

        // Faults ride in the envelope over HTTP 200; clients switch on `status`.
        (StatusCode::OK, Json(ApiResponse::error(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn combination_key_is_order_independent() {
        assert_eq!(
            combination_key(Role::Ad, Role::Support),
            combination_key(Role::Support, Role::Ad)
        );
        assert_eq!(combination_key(Role::Support, Role::Ad), "ad-sup");
        assert_eq!(combination_key(Role::Top, Role::Jungle), "jg-top");
    }

    #[test]
    fn role_parsing_is_case_insensitive() {
        assert_eq!(Role::parse("Jungle"), Some(Role::Jungle));
        assert_eq!(Role::parse("SUPPORT"), Some(Role::Support));
        assert_eq!(Role::parse("ad"), Some(Role::Ad));
        assert_eq!(Role::parse("adc"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn record_round_trips_role_keyed_fields() {
        let stored = json!({"ad": "Ashe", "sup": "Lulu", "winRate": 55.0, "total": 300});
        let record: WinRateRecord = serde_json::from_value(stored.clone()).unwrap();

        assert_eq!(record.champion_at("ad"), Some("Ashe"));
        assert_eq!(record.champion_at("sup"), Some("Lulu"));
        assert_eq!(record.champion_at("jg"), None);
        assert_eq!(serde_json::to_value(&record).unwrap(), stored);
    }
}
