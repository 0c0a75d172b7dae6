use crate::models::{BusinessRecord, ForumPostRecord, ProductRecord, RouteRecord};
use crate::traits::{BusinessSource, ForumSource, ProductSource, RouteSource};
use crate::SearchError;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

/// Client for the hosted backend's PostgREST-style REST surface. One store
/// serves all four collections; the backend enforces row-level access, so
/// every scan here is a plain filtered read.
#[derive(Clone)]
pub struct RestStore {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl RestStore {
    pub fn new(endpoint: &str, api_key: impl Into<String>) -> Result<Self, SearchError> {
        Ok(Self {
            client: Client::new(),
            endpoint: Url::parse(endpoint)?,
            api_key: api_key.into(),
        })
    }

    async fn scan<T: DeserializeOwned>(
        &self,
        table: &str,
        columns: &str,
        active_only: bool,
        limit: usize,
    ) -> Result<Vec<T>, SearchError> {
        let url = scan_url(&self.endpoint, table, columns, active_only, limit)?;

        let response = self
            .client
            .get(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SearchError::BackendResponse {
                backend: table.to_string(),
                details: response.status().to_string(),
            });
        }

        Ok(response.json::<Vec<T>>().await?)
    }
}

fn scan_url(
    endpoint: &Url,
    table: &str,
    columns: &str,
    active_only: bool,
    limit: usize,
) -> Result<Url, SearchError> {
    let mut url = endpoint.join(&format!("rest/v1/{table}"))?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("select", columns);
        if active_only {
            pairs.append_pair("is_active", "eq.true");
        }
        pairs.append_pair("limit", &limit.to_string());
    }
    Ok(url)
}

#[async_trait]
impl RouteSource for RestStore {
    async fn scan_routes(&self, limit: usize) -> Result<Vec<RouteRecord>, SearchError> {
        self.scan("routes", "id,title,description,difficulty_level", true, limit)
            .await
    }
}

#[async_trait]
impl ForumSource for RestStore {
    // Forum posts carry no publish flag, so the scan is unfiltered.
    async fn scan_posts(&self, limit: usize) -> Result<Vec<ForumPostRecord>, SearchError> {
        self.scan("forum_posts", "id,title,content,category_name", false, limit)
            .await
    }
}

#[async_trait]
impl BusinessSource for RestStore {
    async fn scan_businesses(&self, limit: usize) -> Result<Vec<BusinessRecord>, SearchError> {
        self.scan("businesses", "id,name,description,location", true, limit)
            .await
    }
}

#[async_trait]
impl ProductSource for RestStore {
    async fn scan_products(&self, limit: usize) -> Result<Vec<ProductRecord>, SearchError> {
        self.scan("products", "id,title,description,price", true, limit)
            .await
    }
}
