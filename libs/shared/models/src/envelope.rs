use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform response wrapper used by every endpoint. Clients inspect `status`,
/// not the HTTP status code: faults are still delivered as HTTP 200 with
/// `status: "error"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: ResponseStatus,
    pub msg: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Ok,
    Error,
}

impl ApiResponse {
    pub fn ok(msg: impl Serialize) -> Self {
        Self {
            status: ResponseStatus::Ok,
            msg: serde_json::to_value(msg).unwrap_or(Value::Null),
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            msg: Value::String(msg.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_envelope_serializes_with_lowercase_status() {
        let response = ApiResponse::ok("server running");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"status": "ok", "msg": "server running"}));
    }

    #[test]
    fn error_envelope_carries_message_text() {
        let response = ApiResponse::error("unknown roles");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"status": "error", "msg": "unknown roles"}));
    }
}
