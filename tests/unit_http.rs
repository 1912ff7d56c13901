use discogs_client::http::{update_rate_limit_from_headers, RateLimitState};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

#[test]
fn state_defaults_match_documented_quota() {
    let state = RateLimitState::default();
    assert_eq!(state.total, 60);
    assert_eq!(state.used, 0);
    assert_eq!(state.remaining, 60);
    assert!(!state.exceeded);
    assert!(state.last_updated.is_none());
}

#[test]
fn successful_update_clears_a_previous_exceeded_flag() {
    let mut state = RateLimitState {
        exceeded: true,
        remaining: 0,
        used: 60,
        ..Default::default()
    };
    let mut h = HeaderMap::new();
    h.insert("x-discogs-ratelimit", "60".parse().unwrap());
    h.insert("x-discogs-ratelimit-used", "2".parse().unwrap());
    h.insert("x-discogs-ratelimit-remaining", "58".parse().unwrap());
    update_rate_limit_from_headers(&mut state, &h, StatusCode::OK);
    assert!(!state.exceeded);
    assert_eq!(state.remaining, 58);
    assert_eq!(state.total - state.used, state.remaining);
}

#[test]
fn snapshot_serializes_with_stable_field_names() {
    let state = RateLimitState::default();
    let v = serde_json::to_value(&state).unwrap();
    assert_eq!(v["total"], 60);
    assert_eq!(v["remaining"], 60);
    assert_eq!(v["exceeded"], false);
    assert!(v["last_updated"].is_null());
}
