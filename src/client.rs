use crate::config::Config;
use crate::error::Result;
use crate::http::{RateLimitState, Transport};
use crate::normalize;
use crate::pagination::{self, PaginatedQuery, PROBE_PAGE_SIZE};
use crate::sampler;
use crate::types::{
    ApiStatus, CollectionValue, FolderSummary, Identity, ListSummary, RandomRecord,
};
use log::error;
use serde_json::Value;
use std::sync::Mutex;

/// Discogs API client. One instance per credential; share it across callers
/// so pacing and quota bookkeeping stay coherent. All requests from one
/// instance are serialized through its rate limiter.
pub struct DiscogsClient {
    http: Transport,
    rng: Mutex<fastrand::Rng>,
}

impl DiscogsClient {
    pub fn new(cfg: Config) -> reqwest::Result<Self> {
        Ok(Self {
            http: Transport::new(cfg)?,
            rng: Mutex::new(fastrand::Rng::new()),
        })
    }

    /// Client with a seeded random source; the sampler's page/item draws
    /// become reproducible.
    pub fn with_seed(cfg: Config, seed: u64) -> reqwest::Result<Self> {
        Ok(Self {
            http: Transport::new(cfg)?,
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.http.config().api_url, path)
    }

    fn folder_url(&self, username: &str, folder_id: i64) -> String {
        self.url(&format!(
            "/users/{}/collection/folders/{}",
            urlencoding::encode(username),
            folder_id
        ))
    }

    fn releases_url(&self, username: &str, folder_id: i64) -> String {
        self.url(&format!(
            "/users/{}/collection/folders/{}/releases",
            urlencoding::encode(username),
            folder_id
        ))
    }

    fn wants_url(&self, username: &str) -> String {
        self.url(&format!("/users/{}/wants", urlencoding::encode(username)))
    }

    /// Account identity (username, collection/wantlist counts, currency).
    pub async fn identity(&self) -> Result<Identity> {
        let data = self.http.get_json(&self.url("/oauth/identity"), &[]).await?;
        Ok(normalize::identity(&data))
    }

    /// Item count of one collection folder (folder 0 means "all items").
    pub async fn collection_count(&self, username: &str) -> Result<u64> {
        let data = self.http.get_json(&self.folder_url(username, 0), &[]).await?;
        Ok(data.get("count").and_then(Value::as_u64).unwrap_or(0))
    }

    /// Collection folders; `None` when the account has no folders.
    pub async fn folders(&self, username: &str) -> Result<Option<FolderSummary>> {
        let url = self.url(&format!(
            "/users/{}/collection/folders",
            urlencoding::encode(username)
        ));
        let data = self.http.get_json(&url, &[]).await?;
        Ok(normalize::folder_summary(&data))
    }

    /// User-curated lists; `None` when the account has no lists.
    pub async fn lists(&self, username: &str) -> Result<Option<ListSummary>> {
        let url = self.url(&format!("/users/{}/lists", urlencoding::encode(username)));
        let data = self.http.get_json(&url, &[]).await?;
        Ok(normalize::list_summary(&data))
    }

    /// Wantlist size via a page-size-1 probe; only pagination metadata is
    /// consumed. `None` when the envelope carries no item count.
    pub async fn wantlist_count(&self, username: &str) -> Result<Option<u64>> {
        let params = [
            ("page", "1".to_string()),
            ("per_page", PROBE_PAGE_SIZE.to_string()),
        ];
        let data = self.http.get_json(&self.wants_url(username), &params).await?;
        Ok(data.pointer("/pagination/items").and_then(Value::as_u64))
    }

    /// Marketplace valuation of the collection.
    pub async fn collection_value(&self, username: &str) -> Result<CollectionValue> {
        let url = self.url(&format!(
            "/users/{}/collection/value",
            urlencoding::encode(username)
        ));
        let data = self.http.get_json(&url, &[]).await?;
        Ok(normalize::collection_value(&data))
    }

    /// One randomly sampled release from a folder, or `None` for an empty
    /// folder. Issues at most two requests.
    pub async fn random_record(
        &self,
        username: &str,
        folder_id: i64,
    ) -> Result<Option<RandomRecord>> {
        sampler::pick_random(
            &self.http,
            &self.rng,
            &self.folder_url(username, folder_id),
            &self.releases_url(username, folder_id),
        )
        .await
    }

    /// Every release's `basic_information` across all pages of a folder.
    pub async fn full_collection(&self, username: &str, folder_id: i64) -> Result<Vec<Value>> {
        let query = PaginatedQuery::bulk(self.releases_url(username, folder_id), "releases");
        pagination::fetch_all_basic_information(&self.http, &query).await
    }

    /// Every wantlist entry's `basic_information` across all pages.
    pub async fn full_wantlist(&self, username: &str) -> Result<Vec<Value>> {
        let query = PaginatedQuery::bulk(self.wants_url(username), "wants");
        pagination::fetch_all_basic_information(&self.http, &query).await
    }

    /// Raw items of one user list across all pages. List items are shaped
    /// differently from collection/wantlist entries, so no sub-object is
    /// extracted.
    pub async fn list_items(&self, list_id: i64) -> Result<Vec<Value>> {
        let query = PaginatedQuery::bulk(self.url(&format!("/lists/{}", list_id)), "items");
        pagination::fetch_all(&self.http, &query).await
    }

    /// Availability probe against the service root. Never fails: transport
    /// or protocol errors collapse into `available: false`.
    pub async fn api_status(&self) -> ApiStatus {
        match self.http.get_json(&self.url("/"), &[]).await {
            Ok(data) => normalize::api_status(&data),
            Err(e) => {
                error!("failed to check API status: {}", e);
                ApiStatus::unavailable(Some(e.to_string()))
            }
        }
    }

    /// Snapshot of the quota bookkeeping for diagnostics.
    pub fn rate_limit(&self) -> RateLimitState {
        self.http.rate_limit()
    }
}
