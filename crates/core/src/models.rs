use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Queries shorter than this never reach the backend.
pub const MIN_QUERY_CHARS: usize = 2;

/// Server-side cap applied to every source scan, before fuzzy filtering.
pub const PER_SOURCE_LIMIT: usize = 10;

/// Total cap on the merged result list.
pub const MAX_RESULTS: usize = 20;

/// A source scan slower than this contributes nothing.
pub const SOURCE_TIMEOUT: Duration = Duration::from_secs(3);

/// The four collections a search fans out to, in merge-priority order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Route,
    ForumPost,
    Business,
    Product,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Route => "route",
            SourceKind::ForumPost => "forum_post",
            SourceKind::Business => "business",
            SourceKind::Product => "product",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteRecord {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub difficulty_level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForumPostRecord {
    pub id: String,
    pub title: String,
    pub content: Option<String>,
    pub category_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusinessRecord {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<f64>,
}

/// Variant-specific display fields. Only the fields relevant to the
/// result's `kind` are ever populated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResultMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// A normalized, UI-ready hit. `id` is unique only within its `kind`;
/// the composite key is `(kind, id)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: SourceKind,
    pub url: String,
    #[serde(default)]
    pub metadata: ResultMetadata,
}

impl From<RouteRecord> for SearchResult {
    fn from(record: RouteRecord) -> Self {
        Self {
            url: format!("/twisties?route={}", record.id),
            id: record.id,
            title: record.title,
            description: record.description.unwrap_or_default(),
            kind: SourceKind::Route,
            metadata: ResultMetadata {
                difficulty: record.difficulty_level,
                ..Default::default()
            },
        }
    }
}

impl From<ForumPostRecord> for SearchResult {
    fn from(record: ForumPostRecord) -> Self {
        Self {
            url: format!("/forum?post={}", record.id),
            id: record.id,
            title: record.title,
            description: record.content.unwrap_or_default(),
            kind: SourceKind::ForumPost,
            metadata: ResultMetadata {
                category: record.category_name,
                ..Default::default()
            },
        }
    }
}

impl From<BusinessRecord> for SearchResult {
    fn from(record: BusinessRecord) -> Self {
        Self {
            url: format!("/businesses/{}", record.id),
            id: record.id,
            title: record.name,
            description: record.description.unwrap_or_default(),
            kind: SourceKind::Business,
            metadata: ResultMetadata {
                location: record.location,
                ..Default::default()
            },
        }
    }
}

impl From<ProductRecord> for SearchResult {
    fn from(record: ProductRecord) -> Self {
        Self {
            url: format!("/marketplace/{}", record.id),
            id: record.id,
            title: record.title,
            description: record.description.unwrap_or_default(),
            kind: SourceKind::Product,
            metadata: ResultMetadata {
                price: record.price,
                ..Default::default()
            },
        }
    }
}

/// Outcome of one aggregated search. Sources that errored or timed out are
/// listed in `failed_sources` instead of failing the whole search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub failed_sources: Vec<SourceKind>,
}
