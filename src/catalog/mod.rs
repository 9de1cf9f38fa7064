mod cache;
mod loader;
mod page;
mod sample;
mod source;

pub use cache::CatalogCache;
pub use loader::CatalogLoader;
pub use page::CatalogPage;
pub use sample::sample_meals;
pub use source::CatalogSource;
