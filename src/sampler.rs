use crate::error::Result;
use crate::http::Transport;
use crate::normalize;
use crate::pagination::BULK_PAGE_SIZE;
use crate::types::RandomRecord;
use log::debug;
use serde_json::Value;
use std::sync::Mutex;

/// Draw one release uniformly-ish from a paginated folder without
/// materializing it: probe the folder's item count, pick a page uniformly,
/// fetch only that page, pick an item uniformly from it.
///
/// A short final page gives its items slightly higher selection probability
/// than items on full pages; this is an accepted approximation inherited
/// from the two-phase design.
///
/// Returns `Ok(None)` for an empty folder (no page fetch is issued) or an
/// empty/absent release page; both are legitimate terminal states.
pub async fn pick_random(
    http: &Transport,
    rng: &Mutex<fastrand::Rng>,
    folder_url: &str,
    releases_url: &str,
) -> Result<Option<RandomRecord>> {
    let folder = http.get_json(folder_url, &[]).await?;
    let count = folder.get("count").and_then(Value::as_u64).unwrap_or(0);
    if count == 0 {
        debug!("folder reports zero items; nothing to sample");
        return Ok(None);
    }

    let per_page = BULK_PAGE_SIZE as u64;
    let total_pages = count.div_ceil(per_page);
    let page = {
        let mut r = rng.lock().expect("rng lock");
        r.u64(1..=total_pages)
    };

    let params = [
        ("page", page.to_string()),
        ("per_page", per_page.to_string()),
    ];
    let data = http.get_json(releases_url, &params).await?;
    let releases = match data.get("releases").and_then(Value::as_array) {
        Some(r) if !r.is_empty() => r,
        _ => return Ok(None),
    };
    let idx = {
        let mut r = rng.lock().expect("rng lock");
        r.usize(0..releases.len())
    };
    debug!(
        "sampled item {} of {} on page {}/{}",
        idx,
        releases.len(),
        page,
        total_pages
    );
    Ok(Some(normalize::random_record(&releases[idx])))
}
