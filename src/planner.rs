use std::sync::Arc;

use crate::catalog::{CatalogCache, CatalogLoader, CatalogPage, CatalogSource};
use crate::config::AppConfig;
use crate::error::Error;
use crate::model::{
    CalorieBreakdown, IngredientRef, Meal, RankedResult, SearchQuery, UserProfile,
};
use crate::plan::{self, compute_target, WeeklyAssignment};
use crate::search::{self, SearchSession};

/// Entry point the UI layer holds on to: one catalog source, one explicit
/// cache, one config. All planning and search flows go through here.
pub struct Planner {
    source: Arc<dyn CatalogSource>,
    config: AppConfig,
    cache: CatalogCache,
}

impl Planner {
    pub fn new(source: Arc<dyn CatalogSource>, config: AppConfig) -> Self {
        Self {
            source,
            config,
            cache: CatalogCache::new(),
        }
    }

    pub fn from_env(source: Arc<dyn CatalogSource>) -> Self {
        Self::new(source, AppConfig::from_env())
    }

    /// Planner over a fixed in-memory catalog; used by tests and previews.
    pub fn fixed(meals: Vec<Meal>) -> Self {
        Self::new(Arc::new(FixedCatalog { meals }), AppConfig::default())
    }

    /// The materialized catalog, fetched through the paging loader on first
    /// use and cached until [`Planner::invalidate_catalog`]. Degrades to
    /// the built-in sample set when the backend is unreachable.
    pub async fn catalog(&mut self) -> Vec<Meal> {
        if let Some(cached) = self.cache.get() {
            return cached.to_vec();
        }
        let loader = CatalogLoader::new(self.config.catalog.clone());
        let meals = loader.load_or_sample(self.source.as_ref()).await;
        self.cache.store(meals.clone());
        meals
    }

    /// Drops the cached catalog; the next call refetches. Call this when
    /// the profile changes or the backend signals a new catalog version.
    pub fn invalidate_catalog(&mut self) {
        self.cache.invalidate();
    }

    pub async fn search(&mut self, query: &SearchQuery) -> Vec<RankedResult> {
        let catalog = self.catalog().await;
        search::search(query, &catalog)
    }

    /// Debounce/late-arrival guard sized from config; one per search box.
    pub fn search_session(&self) -> SearchSession {
        SearchSession::new(self.config.search.debounce)
    }

    pub fn compute_target(&self, profile: &UserProfile) -> CalorieBreakdown {
        compute_target(profile)
    }

    /// Full planning run: target from the profile, then a freshly assigned
    /// week over the current catalog.
    pub async fn weekly_plan(
        &mut self,
        profile: &UserProfile,
    ) -> (CalorieBreakdown, WeeklyAssignment) {
        let breakdown = compute_target(profile);
        let catalog = self.catalog().await;
        (breakdown, plan::assign(&breakdown, &catalog))
    }

    /// Resolves ingredient display names to canonical catalog entries.
    pub async fn resolve_ingredients(
        &self,
        names: &[String],
    ) -> Result<Vec<IngredientRef>, Error> {
        self.source
            .fetch_ingredients_by_name(names)
            .await
            .map_err(Error::CatalogUnavailable)
    }
}

struct FixedCatalog {
    meals: Vec<Meal>,
}

#[async_trait::async_trait]
impl CatalogSource for FixedCatalog {
    async fn fetch_page(&self, page: u32, limit: u32) -> anyhow::Result<CatalogPage> {
        let start = (page.saturating_sub(1) as usize) * limit as usize;
        let items: Vec<Meal> = self
            .meals
            .iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect();
        let has_next_page = start + items.len() < self.meals.len();
        Ok(CatalogPage::new(items, has_next_page))
    }

    async fn fetch_ingredients_by_name(
        &self,
        names: &[String],
    ) -> anyhow::Result<Vec<IngredientRef>> {
        let wanted: Vec<String> = names
            .iter()
            .map(|n| crate::text::normalize(n.trim()).to_lowercase())
            .collect();
        let mut seen = std::collections::HashSet::new();
        let mut out = Vec::new();
        for meal in &self.meals {
            for ing in &meal.ingredients {
                let folded = crate::text::normalize(ing).to_lowercase();
                if wanted.iter().any(|w| folded.contains(w.as_str()))
                    && seen.insert(folded.clone())
                {
                    out.push(IngredientRef {
                        id: format!("ing-{}", seen.len()),
                        name: ing.clone(),
                    });
                }
            }
        }
        Ok(out)
    }
}
