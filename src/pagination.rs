use crate::error::Result;
use crate::http::Transport;
use crate::normalize;
use log::debug;
use serde_json::Value;

/// Page size for bulk list endpoints.
pub const BULK_PAGE_SIZE: u32 = 100;
/// Page size for count-only probes (pagination metadata is all we want).
pub const PROBE_PAGE_SIZE: u32 = 1;

/// One paginated endpoint: where to fetch, how big the pages are, and which
/// array field of the envelope holds the items (`"releases"`, `"wants"`,
/// `"items"`).
#[derive(Debug, Clone)]
pub struct PaginatedQuery {
    pub base_url: String,
    pub page_size: u32,
    pub extract_key: &'static str,
}

impl PaginatedQuery {
    pub fn bulk(base_url: String, extract_key: &'static str) -> Self {
        Self {
            base_url,
            page_size: BULK_PAGE_SIZE,
            extract_key,
        }
    }
}

/// Walk an endpoint to completion, accumulating raw items in page order.
///
/// Stops when a page comes back with no extractable items (exhausted or
/// malformed, treated as "no more data") or once the just-fetched page
/// number reaches the declared `pagination.pages` (default 1 when absent).
/// The page counter is strictly increasing, so the walk terminates even
/// when the server misreports `pages` as larger than reality.
pub async fn fetch_all(http: &Transport, query: &PaginatedQuery) -> Result<Vec<Value>> {
    walk(http, query, false).await
}

/// Like [`fetch_all`] but extracts the nested `basic_information`
/// sub-object of each item before accumulating.
pub async fn fetch_all_basic_information(
    http: &Transport,
    query: &PaginatedQuery,
) -> Result<Vec<Value>> {
    walk(http, query, true).await
}

async fn walk(http: &Transport, query: &PaginatedQuery, extract_basic: bool) -> Result<Vec<Value>> {
    let mut all = Vec::new();
    let mut page: u64 = 1;
    loop {
        let params = [
            ("page", page.to_string()),
            ("per_page", query.page_size.to_string()),
        ];
        let data = http.get_json(&query.base_url, &params).await?;
        let items = match data.get(query.extract_key).and_then(Value::as_array) {
            Some(items) if !items.is_empty() => items,
            _ => break,
        };
        if extract_basic {
            all.extend(items.iter().map(normalize::basic_information));
        } else {
            all.extend(items.iter().cloned());
        }
        let pages = data
            .pointer("/pagination/pages")
            .and_then(Value::as_u64)
            .unwrap_or(1);
        debug!(
            "fetched page {}/{} ({} items) from {}",
            page,
            pages,
            items.len(),
            query.base_url
        );
        if page >= pages {
            break;
        }
        page += 1;
    }
    Ok(all)
}
