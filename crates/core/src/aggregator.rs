use crate::matcher::matches_candidate;
use crate::models::{
    SearchResponse, SearchResult, SourceKind, MAX_RESULTS, MIN_QUERY_CHARS, PER_SOURCE_LIMIT,
    SOURCE_TIMEOUT,
};
use crate::traits::{BusinessSource, ForumSource, ProductSource, RouteSource};
use crate::SearchError;
use std::future::Future;
use tracing::warn;

pub struct SearchAggregator<R, F, B, P>
where
    R: RouteSource,
    F: ForumSource,
    B: BusinessSource,
    P: ProductSource,
{
    routes: R,
    forum: F,
    businesses: B,
    products: P,
}

impl<R, F, B, P> SearchAggregator<R, F, B, P>
where
    R: RouteSource + Send + Sync,
    F: ForumSource + Send + Sync,
    B: BusinessSource + Send + Sync,
    P: ProductSource + Send + Sync,
{
    pub fn new(routes: R, forum: F, businesses: B, products: P) -> Self {
        Self {
            routes,
            forum,
            businesses,
            products,
        }
    }

    /// Fan a query out to all four sources, fuzzy-filter each source's
    /// rows, and merge in fixed priority order: routes, forum posts,
    /// businesses, products. A failed or timed-out source contributes
    /// nothing and is reported in `failed_sources`; it never aborts the
    /// other scans. Queries below the length threshold return an empty
    /// response without touching the backend.
    pub async fn search(&self, term: &str) -> SearchResponse {
        if term.chars().count() < MIN_QUERY_CHARS {
            return SearchResponse::default();
        }

        let (routes, posts, businesses, products) = tokio::join!(
            guarded(SourceKind::Route, self.routes.scan_routes(PER_SOURCE_LIMIT)),
            guarded(SourceKind::ForumPost, self.forum.scan_posts(PER_SOURCE_LIMIT)),
            guarded(
                SourceKind::Business,
                self.businesses.scan_businesses(PER_SOURCE_LIMIT)
            ),
            guarded(
                SourceKind::Product,
                self.products.scan_products(PER_SOURCE_LIMIT)
            ),
        );

        let mut results = Vec::new();
        let mut failed_sources = Vec::new();

        match routes {
            Ok(records) => results.extend(
                records
                    .into_iter()
                    .filter(|record| {
                        matches_candidate(&record.title, record.description.as_deref(), term)
                    })
                    .map(SearchResult::from),
            ),
            Err(kind) => failed_sources.push(kind),
        }

        match posts {
            Ok(records) => results.extend(
                records
                    .into_iter()
                    .filter(|record| {
                        matches_candidate(&record.title, record.content.as_deref(), term)
                    })
                    .map(SearchResult::from),
            ),
            Err(kind) => failed_sources.push(kind),
        }

        match businesses {
            Ok(records) => results.extend(
                records
                    .into_iter()
                    .filter(|record| {
                        matches_candidate(&record.name, record.description.as_deref(), term)
                    })
                    .map(SearchResult::from),
            ),
            Err(kind) => failed_sources.push(kind),
        }

        match products {
            Ok(records) => results.extend(
                records
                    .into_iter()
                    .filter(|record| {
                        matches_candidate(&record.title, record.description.as_deref(), term)
                    })
                    .map(SearchResult::from),
            ),
            Err(kind) => failed_sources.push(kind),
        }

        results.truncate(MAX_RESULTS);

        SearchResponse {
            results,
            failed_sources,
        }
    }
}

async fn guarded<T>(
    kind: SourceKind,
    scan: impl Future<Output = Result<Vec<T>, SearchError>>,
) -> Result<Vec<T>, SourceKind> {
    match tokio::time::timeout(SOURCE_TIMEOUT, scan).await {
        Ok(Ok(records)) => Ok(records),
        Ok(Err(error)) => {
            warn!(source = %kind, error = %error, "source scan failed, dropping its contribution");
            Err(kind)
        }
        Err(_) => {
            warn!(source = %kind, timeout = ?SOURCE_TIMEOUT, "source scan timed out, dropping its contribution");
            Err(kind)
        }
    }
}
