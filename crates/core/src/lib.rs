pub mod aggregator;
pub mod error;
pub mod matcher;
pub mod models;
pub mod session;
pub mod stores;
pub mod traits;

pub use aggregator::SearchAggregator;
pub use error::SearchError;
pub use matcher::{is_subsequence_match, matches_candidate};
pub use models::{
    BusinessRecord, ForumPostRecord, ProductRecord, ResultMetadata, RouteRecord, SearchResponse,
    SearchResult, SourceKind, MAX_RESULTS, MIN_QUERY_CHARS, PER_SOURCE_LIMIT, SOURCE_TIMEOUT,
};
pub use session::{PanelState, SearchSession, SearchTicket};
pub use stores::RestStore;
pub use traits::{BusinessSource, ForumSource, ProductSource, RouteSource};
