use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    /// PostgreSQL connection URL for the ledger database
    #[serde(default)]
    pub postgres_url: Option<String>,
    #[serde(default)]
    pub db: DbConfig,
}

/// Connection pool tuning
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DbConfig {
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout_secs: 5,
        }
    }
}

impl AppConfig {
    pub fn load(env: &str) -> Self {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));
        serde_yaml::from_str(&content).expect("Failed to parse config yaml")
    }

    /// Resolve the database URL: the DATABASE_URL environment variable
    /// takes precedence over the config file value.
    pub fn database_url(&self) -> Option<String> {
        std::env::var("DATABASE_URL")
            .ok()
            .or_else(|| self.postgres_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_test_config() {
        let config = AppConfig::load("test");
        assert_eq!(config.log_level, "debug");
        assert!(config.postgres_url.is_some());

        // No db section in config/test.yaml: pool tuning falls back to defaults
        assert_eq!(config.db.max_connections, 10);
        assert_eq!(config.db.acquire_timeout_secs, 5);
    }

    #[test]
    fn test_db_section_overrides_defaults() {
        let config: AppConfig = serde_yaml::from_str(
            r#"
            log_level: "info"
            log_dir: "./logs"
            log_file: "ledger.log"
            use_json: false
            rotation: "never"
            db:
              max_connections: 32
              acquire_timeout_secs: 2
            "#,
        )
        .expect("Failed to parse config yaml");

        assert_eq!(config.db.max_connections, 32);
        assert_eq!(config.db.acquire_timeout_secs, 2);
        assert!(config.postgres_url.is_none());
    }
}
