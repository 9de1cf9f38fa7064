use crate::model::Meal;

/// Caller-owned catalog cache with explicit invalidation.
///
/// The shipped client kept the last fetched catalog in module-global state;
/// this object is passed in instead, so a profile change or a new catalog
/// version invalidates it visibly rather than through hidden cross-call
/// state.
#[derive(Debug, Default)]
pub struct CatalogCache {
    meals: Option<Vec<Meal>>,
    version: u64,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&[Meal]> {
        self.meals.as_deref()
    }

    pub fn store(&mut self, meals: Vec<Meal>) {
        self.version += 1;
        self.meals = Some(meals);
    }

    pub fn invalidate(&mut self) {
        if self.meals.take().is_some() {
            self.version += 1;
            tracing::debug!(version = self.version, "catalog cache invalidated");
        }
    }

    /// Bumps whenever the cached contents change; callers can compare
    /// versions to detect that ranked results are stale.
    pub fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_and_invalidate_bump_version() {
        let mut cache = CatalogCache::new();
        assert!(cache.get().is_none());
        cache.store(Vec::new());
        let v1 = cache.version();
        assert!(cache.get().is_some());
        cache.invalidate();
        assert!(cache.get().is_none());
        assert!(cache.version() > v1);
    }

    #[test]
    fn invalidating_empty_cache_is_a_no_op() {
        let mut cache = CatalogCache::new();
        cache.invalidate();
        assert_eq!(cache.version(), 0);
    }
}
