// Service exports
pub mod cache;
pub mod catalog;

pub use cache::{CacheKey, CacheStats, FrequencyCache};
pub use catalog::{CatalogError, LotteryCatalog};
