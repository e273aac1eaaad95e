use std::env;
use tracing::warn;

const DEFAULT_DATABASE_URL: &str = "https://buddy-champ-jj.firebaseio.com";

// The web app origins allowed to call the API. Fixed at startup, no runtime
// updates.
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://buddy-champ-jj.firebaseapp.com",
    "https://buddy-champ-jj.web.app",
];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| {
                    warn!("DATABASE_URL not set, using default");
                    DEFAULT_DATABASE_URL.to_string()
                }),
            allowed_origins: match env::var("ALLOWED_ORIGINS") {
                Ok(origins) => origins
                    .split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect(),
                Err(_) => DEFAULT_ALLOWED_ORIGINS
                    .iter()
                    .map(|o| o.to_string())
                    .collect(),
            },
        };

        if config.allowed_origins.is_empty() {
            warn!("ALLOWED_ORIGINS is empty - all cross-origin requests will be rejected");
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_both_deployed_origins() {
        let config = AppConfig {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };
        assert_eq!(config.allowed_origins.len(), 2);
        assert!(config.allowed_origins.iter().all(|o| o.starts_with("https://")));
    }
}
