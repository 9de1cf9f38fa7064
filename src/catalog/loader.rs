use anyhow::Context;
use rand::Rng;
use std::time::Duration;
use tracing::{debug, warn};

use crate::catalog::page::CatalogPage;
use crate::catalog::sample::sample_meals;
use crate::catalog::source::CatalogSource;
use crate::config::CatalogConfig;
use crate::error::Error;
use crate::model::Meal;

const BACKOFF_BASE: Duration = Duration::from_millis(200);
const BACKOFF_JITTER_MS: u64 = 100;

/// Materializes the full meal catalog from a paginated source.
///
/// Pages are fetched strictly in order, each with its own timeout and a
/// bounded retry budget; the total item count is capped so loading
/// terminates even when the upstream "has more pages" signal is wrong.
pub struct CatalogLoader {
    config: CatalogConfig,
}

impl CatalogLoader {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    pub async fn load(&self, source: &dyn CatalogSource) -> Result<Vec<Meal>, Error> {
        let mut meals: Vec<Meal> = Vec::new();
        let mut page = 1u32;
        loop {
            let fetched = self
                .fetch_page_with_retry(source, page)
                .await
                .map_err(Error::CatalogUnavailable)?;
            let count = fetched.items.len();
            meals.extend(fetched.items);
            debug!(page, count, total = meals.len(), "catalog page loaded");

            if meals.len() >= self.config.max_items {
                meals.truncate(self.config.max_items);
                debug!(cap = self.config.max_items, "catalog item cap reached");
                break;
            }
            // an empty page claiming more data would otherwise loop forever
            if !fetched.has_next_page || count == 0 {
                break;
            }
            page += 1;
        }
        Ok(meals)
    }

    /// Degraded mode: any load failure, or a catalog with nothing in it,
    /// falls back to the built-in sample set so callers keep the exact
    /// same search and assignment semantics.
    pub async fn load_or_sample(&self, source: &dyn CatalogSource) -> Vec<Meal> {
        match self.load(source).await {
            Ok(meals) if !meals.is_empty() => meals,
            Ok(_) => {
                warn!("catalog is empty, using built-in sample set");
                sample_meals()
            }
            Err(e) => {
                warn!(error = %e, "catalog unavailable, using built-in sample set");
                sample_meals()
            }
        }
    }

    async fn fetch_page_with_retry(
        &self,
        source: &dyn CatalogSource,
        page: u32,
    ) -> anyhow::Result<CatalogPage> {
        let mut attempt = 0u32;
        loop {
            let outcome =
                tokio::time::timeout(self.config.page_timeout, source.fetch_page(page, self.config.page_size))
                    .await;
            let err = match outcome {
                Ok(Ok(fetched)) => return Ok(fetched),
                Ok(Err(e)) => e,
                Err(_) => anyhow::anyhow!("timed out after {:?}", self.config.page_timeout),
            };
            attempt += 1;
            if attempt > self.config.max_retries {
                warn!(page, attempt, error = %err, "giving up on catalog page");
                return Err(err).with_context(|| format!("fetch catalog page {page}"));
            }
            let backoff = BACKOFF_BASE * 2u32.saturating_pow(attempt - 1)
                + Duration::from_millis(rand::thread_rng().gen_range(0..BACKOFF_JITTER_MS));
            debug!(page, attempt, ?backoff, error = %err, "retrying catalog page");
            tokio::time::sleep(backoff).await;
        }
    }
}
