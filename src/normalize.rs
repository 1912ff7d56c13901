//! Pure response-shaping layer. No I/O; every accessor supplies a default
//! so heterogeneous or partial payloads normalize into fixed shapes.

use crate::types::{
    ApiStatus, CollectionValue, FolderEntry, FolderSummary, Identity, ListEntry, ListSummary,
    RandomRecord, RandomRecordData,
};
use serde_json::Value;

const UNKNOWN_ARTIST: &str = "Unknown Artist";
const UNKNOWN_TITLE: &str = "Unknown Title";

fn str_field(v: &Value, key: &str) -> Option<String> {
    v.get(key).and_then(Value::as_str).map(str::to_string)
}

fn i64_field(v: &Value, key: &str) -> Option<i64> {
    v.get(key).and_then(Value::as_i64)
}

fn u64_field(v: &Value, key: &str) -> Option<u64> {
    v.get(key).and_then(Value::as_u64)
}

/// Parse a monetary value that may arrive as a number or a formatted string
/// like `"$1,234.56"`. Unparsable or empty input yields 0.0.
pub fn parse_currency(value: &Value) -> f64 {
    if let Some(n) = value.as_f64() {
        return n;
    }
    let Some(s) = value.as_str() else {
        return 0.0;
    };
    let numeric: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    numeric.parse::<f64>().unwrap_or(0.0)
}

/// Compose a display string from a record's format list: first entry only,
/// `"Name (Desc1, Desc2)"` when descriptions exist, bare name otherwise,
/// `None` when there is no usable format entry at all.
pub fn format_string(basic_info: &Value) -> Option<String> {
    let formats = basic_info.get("formats").and_then(Value::as_array)?;
    let first = formats.first()?;
    let name = first.get("name").and_then(Value::as_str)?;
    let descriptions: Vec<&str> = first
        .get("descriptions")
        .and_then(Value::as_array)
        .map(|a| a.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    if descriptions.is_empty() {
        Some(name.to_string())
    } else {
        Some(format!("{} ({})", name, descriptions.join(", ")))
    }
}

/// Pull the nested `basic_information` sub-object off a collection or
/// wantlist item, defaulting to an empty object.
pub fn basic_information(item: &Value) -> Value {
    item.get("basic_information")
        .cloned()
        .unwrap_or_else(|| Value::Object(Default::default()))
}

pub fn identity(data: &Value) -> Identity {
    Identity {
        username: str_field(data, "username").unwrap_or_else(|| "Unknown".into()),
        collection_count: u64_field(data, "num_collection").unwrap_or(0),
        wantlist_count: u64_field(data, "num_wantlist").unwrap_or(0),
        currency: str_field(data, "curr_abbr").unwrap_or_else(|| "$".into()),
    }
}

/// Returns `None` when the payload carries no folders at all; collaborators
/// treat that as "no data", distinct from a failed call.
pub fn folder_summary(data: &Value) -> Option<FolderSummary> {
    let folders = data.get("folders").and_then(Value::as_array)?;
    if folders.is_empty() {
        return None;
    }
    let entries: Vec<FolderEntry> = folders
        .iter()
        .map(|f| FolderEntry {
            id: i64_field(f, "id").unwrap_or(0),
            count: i64_field(f, "count").unwrap_or(0),
            name: str_field(f, "name").unwrap_or_default(),
            resource_url: str_field(f, "resource_url").unwrap_or_default(),
        })
        .collect();
    Some(FolderSummary {
        count: entries.len() as u64,
        folders: entries,
    })
}

pub fn list_summary(data: &Value) -> Option<ListSummary> {
    let lists = data.get("lists").and_then(Value::as_array)?;
    if lists.is_empty() {
        return None;
    }
    let entries: Vec<ListEntry> = lists
        .iter()
        .map(|l| ListEntry {
            name: str_field(l, "name").unwrap_or_default(),
            id: i64_field(l, "id").unwrap_or(0),
            uri: str_field(l, "uri").unwrap_or_default(),
            public: l.get("public").and_then(Value::as_bool).unwrap_or(false),
        })
        .collect();
    Some(ListSummary {
        count: entries.len() as u64,
        lists: entries,
    })
}

pub fn collection_value(data: &Value) -> CollectionValue {
    CollectionValue {
        min: parse_currency(data.get("minimum").unwrap_or(&Value::Null)),
        median: parse_currency(data.get("median").unwrap_or(&Value::Null)),
        max: parse_currency(data.get("maximum").unwrap_or(&Value::Null)),
        currency: str_field(data, "currency").unwrap_or_else(|| "$".into()),
    }
}

pub fn random_record(release: &Value) -> RandomRecord {
    let basic = basic_information(release);
    let artist = basic
        .get("artists")
        .and_then(Value::as_array)
        .and_then(|a| a.first())
        .and_then(|a| a.get("name"))
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_ARTIST);
    let title = basic
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_TITLE);
    let first_label = basic
        .get("labels")
        .and_then(Value::as_array)
        .and_then(|l| l.first());
    RandomRecord {
        title: format!("{} - {}", artist, title),
        data: RandomRecordData {
            cat_no: first_label
                .and_then(|l| l.get("catno"))
                .and_then(Value::as_str)
                .map(str::to_string),
            cover_image: str_field(&basic, "cover_image"),
            format: format_string(&basic),
            label: first_label
                .and_then(|l| l.get("name"))
                .and_then(Value::as_str)
                .map(str::to_string),
            released: i64_field(&basic, "year"),
        },
    }
}

/// Availability is signaled by a greeting field in the service root body.
pub fn api_status(data: &Value) -> ApiStatus {
    match str_field(data, "hello") {
        Some(hello) => ApiStatus {
            available: true,
            hello: Some(hello),
            api_version: str_field(data, "api_version"),
            documentation_url: str_field(data, "documentation_url"),
            statistics: data
                .get("statistics")
                .cloned()
                .unwrap_or_else(|| Value::Object(Default::default())),
            error: None,
        },
        None => ApiStatus::unavailable(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn currency_parsing_grid() {
        assert_eq!(parse_currency(&json!("$1,234.56")), 1234.56);
        assert_eq!(parse_currency(&json!("")), 0.0);
        assert_eq!(parse_currency(&json!("-12.3")), -12.3);
        assert_eq!(parse_currency(&json!(42.5)), 42.5);
        assert_eq!(parse_currency(&json!(7)), 7.0);
        assert_eq!(parse_currency(&json!("EUR")), 0.0);
        assert_eq!(parse_currency(&Value::Null), 0.0);
    }

    #[test]
    fn format_composition() {
        let full = json!({"formats": [{"name": "Vinyl", "descriptions": ["LP", "Album"]}]});
        assert_eq!(format_string(&full).as_deref(), Some("Vinyl (LP, Album)"));

        let bare = json!({"formats": [{"name": "Vinyl"}]});
        assert_eq!(format_string(&bare).as_deref(), Some("Vinyl"));

        assert_eq!(format_string(&json!({"formats": []})), None);
        assert_eq!(format_string(&json!({})), None);
        // Nameless first entry renders nothing rather than "(LP)".
        assert_eq!(
            format_string(&json!({"formats": [{"descriptions": ["LP"]}]})),
            None
        );
    }

    #[test]
    fn identity_defaults() {
        let id = identity(&json!({}));
        assert_eq!(id.username, "Unknown");
        assert_eq!(id.collection_count, 0);
        assert_eq!(id.currency, "$");

        let id = identity(&json!({
            "username": "vinylfan",
            "num_collection": 321,
            "num_wantlist": 12,
            "curr_abbr": "EUR"
        }));
        assert_eq!(id.username, "vinylfan");
        assert_eq!(id.collection_count, 321);
        assert_eq!(id.wantlist_count, 12);
        assert_eq!(id.currency, "EUR");
    }

    #[test]
    fn folder_summary_none_on_missing_or_empty() {
        assert!(folder_summary(&json!({})).is_none());
        assert!(folder_summary(&json!({"folders": []})).is_none());

        let summary = folder_summary(&json!({"folders": [
            {"id": 0, "count": 100, "name": "All", "resource_url": "https://x/0"},
            {"name": "Uncategorized"}
        ]}))
        .unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.folders[0].id, 0);
        assert_eq!(summary.folders[1].id, 0);
        assert_eq!(summary.folders[1].resource_url, "");
    }

    #[test]
    fn collection_value_string_and_numeric_inputs() {
        let v = collection_value(&json!({
            "minimum": "$10.00",
            "median": 25,
            "maximum": "1,000.50",
            "currency": "USD"
        }));
        assert_eq!(v.min, 10.0);
        assert_eq!(v.median, 25.0);
        assert_eq!(v.max, 1000.50);
        assert_eq!(v.currency, "USD");

        let v = collection_value(&json!({}));
        assert_eq!((v.min, v.median, v.max), (0.0, 0.0, 0.0));
        assert_eq!(v.currency, "$");
    }

    #[test]
    fn random_record_full_and_sparse() {
        let release = json!({"basic_information": {
            "title": "Blue Train",
            "year": 1957,
            "cover_image": "https://img/bt.jpg",
            "artists": [{"name": "John Coltrane"}],
            "labels": [{"name": "Blue Note", "catno": "BLP 1577"}],
            "formats": [{"name": "Vinyl", "descriptions": ["LP", "Mono"]}]
        }});
        let rec = random_record(&release);
        assert_eq!(rec.title, "John Coltrane - Blue Train");
        assert_eq!(rec.data.cat_no.as_deref(), Some("BLP 1577"));
        assert_eq!(rec.data.label.as_deref(), Some("Blue Note"));
        assert_eq!(rec.data.format.as_deref(), Some("Vinyl (LP, Mono)"));
        assert_eq!(rec.data.released, Some(1957));

        let rec = random_record(&json!({}));
        assert_eq!(rec.title, "Unknown Artist - Unknown Title");
        assert!(rec.data.cat_no.is_none());
        assert!(rec.data.cover_image.is_none());
        assert!(rec.data.format.is_none());
        assert!(rec.data.label.is_none());
        assert!(rec.data.released.is_none());
    }

    #[test]
    fn api_status_greeting_gates_availability() {
        let up = api_status(&json!({
            "hello": "Welcome to the Discogs API.",
            "api_version": "v2",
            "statistics": {"releases": 12345}
        }));
        assert!(up.available);
        assert_eq!(up.api_version.as_deref(), Some("v2"));

        let down = api_status(&json!({"unexpected": true}));
        assert!(!down.available);
    }
}
