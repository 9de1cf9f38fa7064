use async_trait::async_trait;

use crate::catalog::page::CatalogPage;
use crate::model::IngredientRef;

/// Read-only access to the remote meal catalog.
///
/// Implementations live outside this crate (HTTP client in the app shell,
/// in-memory fixtures in tests). Page numbering starts at 1, matching the
/// upstream API.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_page(&self, page: u32, limit: u32) -> anyhow::Result<CatalogPage>;

    /// Resolves display ingredient names to canonical catalog entries, for
    /// callers that filter by ingredient id rather than free text.
    async fn fetch_ingredients_by_name(
        &self,
        names: &[String],
    ) -> anyhow::Result<Vec<IngredientRef>>;
}
