use std::time::Duration;

use serde::Deserialize;

/// Tuning for the paginated catalog loader.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub page_size: u32,
    /// Hard cap on materialized meals, so loading terminates even if the
    /// upstream "has more pages" signal is wrong.
    pub max_items: usize,
    pub page_timeout: Duration,
    pub max_retries: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: 50,
            max_items: 200,
            page_timeout: Duration::from_secs(10),
            max_retries: 3,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub debounce: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub search: SearchConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let catalog = CatalogConfig {
            page_size: env_parse("ANGI_CATALOG_PAGE_SIZE", 50),
            max_items: env_parse("ANGI_CATALOG_MAX_ITEMS", 200),
            page_timeout: Duration::from_millis(env_parse("ANGI_CATALOG_PAGE_TIMEOUT_MS", 10_000)),
            max_retries: env_parse("ANGI_CATALOG_MAX_RETRIES", 3),
        };
        let search = SearchConfig {
            debounce: Duration::from_millis(env_parse("ANGI_SEARCH_DEBOUNCE_MS", 500)),
        };
        Self { catalog, search }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
