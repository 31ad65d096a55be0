use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where the catalog document is stored
    pub data_dir: PathBuf,
    /// Server bind address
    pub bind_addr: String,
    /// Default cap on free-text search results
    pub search_limit: usize,
    /// Default number of matching items scanned for suggestions
    pub suggest_limit: usize,
    /// Default cap on related items
    pub related_limit: usize,
    /// Upper bound on any client-supplied `limit`
    pub max_limit: usize,
    /// Write the sample catalog on startup when no catalog exists yet
    pub seed_if_missing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            bind_addr: "127.0.0.1:5000".to_string(),
            search_limit: 50,
            suggest_limit: 10,
            related_limit: 10,
            max_limit: 200,
            seed_if_missing: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("CAKE_CATALOG_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(addr) = std::env::var("CAKE_CATALOG_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(val) = std::env::var("CAKE_CATALOG_SEARCH_LIMIT") {
            if let Ok(v) = val.parse() {
                config.search_limit = v;
            }
        }
        if let Ok(val) = std::env::var("CAKE_CATALOG_SUGGEST_LIMIT") {
            if let Ok(v) = val.parse() {
                config.suggest_limit = v;
            }
        }
        if let Ok(val) = std::env::var("CAKE_CATALOG_RELATED_LIMIT") {
            if let Ok(v) = val.parse() {
                config.related_limit = v;
            }
        }
        if let Ok(val) = std::env::var("CAKE_CATALOG_MAX_LIMIT") {
            if let Ok(v) = val.parse() {
                config.max_limit = v;
            }
        }
        if let Ok(val) = std::env::var("CAKE_CATALOG_SEED") {
            config.seed_if_missing = matches!(val.to_lowercase().as_str(), "1" | "true" | "yes");
        }

        config
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join("catalog.json")
    }

    /// Resolve a client-supplied limit against a default, clamped to `max_limit`.
    pub fn limit(&self, requested: Option<usize>, default: usize) -> usize {
        requested.unwrap_or(default).min(self.max_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.search_limit, 50);
        assert_eq!(config.suggest_limit, 10);
        assert_eq!(config.related_limit, 10);
        assert_eq!(config.catalog_path(), PathBuf::from("./data/catalog.json"));
    }

    #[test]
    fn test_limit_clamped() {
        let config = Config::default();
        assert_eq!(config.limit(None, 50), 50);
        assert_eq!(config.limit(Some(5), 50), 5);
        assert_eq!(config.limit(Some(10_000), 50), 200);
    }
}
