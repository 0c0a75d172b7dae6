use crate::models::{BusinessRecord, ForumPostRecord, ProductRecord, RouteRecord};
use crate::SearchError;
use async_trait::async_trait;

// Scan contract shared by all four sources: return at most `limit` rows,
// restricted server-side to active/published records where the collection
// carries such a flag. No ordering guarantees are required.

#[async_trait]
pub trait RouteSource {
    async fn scan_routes(&self, limit: usize) -> Result<Vec<RouteRecord>, SearchError>;
}

#[async_trait]
pub trait ForumSource {
    async fn scan_posts(&self, limit: usize) -> Result<Vec<ForumPostRecord>, SearchError>;
}

#[async_trait]
pub trait BusinessSource {
    async fn scan_businesses(&self, limit: usize) -> Result<Vec<BusinessRecord>, SearchError>;
}

#[async_trait]
pub trait ProductSource {
    async fn scan_products(&self, limit: usize) -> Result<Vec<ProductRecord>, SearchError>;
}
