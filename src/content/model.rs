use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::config;

/// Shared view of a normalized record so list and detail logic can stay
/// generic over the concrete content type.
pub trait ContentItem {
    fn id(&self) -> &str;
    fn published(&self) -> Option<NaiveDateTime>;
    fn category(&self) -> &str;
}

/// The CMS answers with a bare array, `{"data": [...]}` or a type-named
/// wrapper like `{"clients": [...]}` depending on the controller. Probe in
/// that order; anything else counts as an empty collection.
pub fn unwrap_envelope(json: &Value) -> Vec<Value> {
    if let Some(items) = json.as_array() {
        return items.clone();
    }
    if let Some(items) = json.get("data").and_then(Value::as_array) {
        return items.clone();
    }
    if let Some(map) = json.as_object() {
        for value in map.values() {
            if let Some(items) = value.as_array() {
                return items.clone();
            }
        }
    }
    Vec::new()
}

/// Single-record endpoints return either the object itself or `{"data": {...}}`.
pub fn unwrap_record(json: &Value) -> Value {
    match json.get("data") {
        Some(inner) if inner.is_object() => inner.clone(),
        _ => json.clone(),
    }
}

pub fn normalize_collection<T>(json: &Value, from: fn(&Value) -> Option<T>) -> Vec<T> {
    unwrap_envelope(json).iter().filter_map(from).collect()
}

/// First non-empty string under any of the candidate keys.
fn pick_str(record: &Value, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(text) = record.get(*key).and_then(Value::as_str) {
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

/// Identifiers arrive as integers or strings depending on the endpoint.
fn pick_id(record: &Value, keys: &[&str]) -> Option<String> {
    for key in keys {
        match record.get(*key) {
            Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}

fn pick_str_array(record: &Value, key: &str) -> Vec<String> {
    record
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Absolute URLs pass through, anything else is a path on the CMS disk.
pub fn resolve_image(raw: &str) -> String {
    if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!("{}{}", config::get_storage_url(), raw)
    }
}

/// Body text comes out of the CMS with literal `\r\n` / `\n` escape
/// sequences instead of real line breaks.
pub fn clean_body(raw: &str) -> String {
    raw.replace("\\r\\n", "<br>").replace("\\n", "<br>")
}

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_utc());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(parsed);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

pub fn format_date_id(date: &NaiveDateTime) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_ID[date.month0() as usize],
        date.year()
    )
}

pub fn format_month_year_id(date: &NaiveDateTime) -> String {
    format!("{} {}", MONTHS_ID[date.month0() as usize], date.year())
}

pub const DEFAULT_CATEGORY: &str = "Umum";

#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: Option<String>,
    pub category: String,
    pub author: String,
    pub created_at: Option<NaiveDateTime>,
}

impl BlogPost {
    pub fn from_value(record: &Value) -> Option<BlogPost> {
        let id = pick_id(record, &["id", "_id"])?;
        let title = pick_str(record, &["title", "name"])?;
        Some(BlogPost {
            id,
            title,
            excerpt: pick_str(record, &["excerpt", "summary"]).unwrap_or_default(),
            content: pick_str(record, &["content", "body"])
                .map(|body| clean_body(&body))
                .unwrap_or_default(),
            image: pick_str(record, &["image", "thumbnail"]).map(|path| resolve_image(&path)),
            category: pick_str(record, &["category"])
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            author: pick_str(record, &["author"]).unwrap_or_default(),
            created_at: pick_str(record, &["created_at", "published_at"])
                .as_deref()
                .and_then(parse_timestamp),
        })
    }
}

impl ContentItem for BlogPost {
    fn id(&self) -> &str {
        &self.id
    }

    fn published(&self) -> Option<NaiveDateTime> {
        self.created_at
    }

    fn category(&self) -> &str {
        &self.category
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub images: Vec<String>,
    pub link: Option<String>,
    pub category: String,
    pub client: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub duration: Option<String>,
    pub challenge: Option<String>,
    pub solution: Option<String>,
    pub results: Vec<String>,
    pub technologies: Vec<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl PortfolioEntry {
    pub fn from_value(record: &Value) -> Option<PortfolioEntry> {
        let id = pick_id(record, &["id", "_id"])?;
        let title = pick_str(record, &["title", "name"])?;
        let image = pick_str(record, &["image", "thumbnail"]).map(|path| resolve_image(&path));
        let mut images: Vec<String> = pick_str_array(record, "images")
            .iter()
            .map(|path| resolve_image(path))
            .collect();
        if images.is_empty() {
            // Gallery falls back to the main image
            images.extend(image.clone());
        }
        Some(PortfolioEntry {
            id,
            title,
            description: pick_str(record, &["description", "excerpt"]).unwrap_or_default(),
            image,
            images,
            link: pick_str(record, &["link", "url"]),
            category: pick_str(record, &["category"])
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            client: pick_str(record, &["client"]),
            date: pick_str(record, &["date"]).as_deref().and_then(parse_timestamp),
            duration: pick_str(record, &["duration"]),
            challenge: pick_str(record, &["challenge"]),
            solution: pick_str(record, &["solution"]),
            results: pick_str_array(record, "results"),
            technologies: pick_str_array(record, "technologies"),
            created_at: pick_str(record, &["created_at", "published_at"])
                .as_deref()
                .and_then(parse_timestamp),
        })
    }
}

impl ContentItem for PortfolioEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn published(&self) -> Option<NaiveDateTime> {
        self.created_at.or(self.date)
    }

    fn category(&self) -> &str {
        &self.category
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceOffering {
    pub id: String,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub icon: String,
}

impl ServiceOffering {
    pub fn from_value(record: &Value) -> Option<ServiceOffering> {
        let id = pick_id(record, &["id", "_id"])?;
        let title = pick_str(record, &["title", "name"])?;
        Some(ServiceOffering {
            id,
            title,
            description: pick_str(record, &["description", "excerpt"]).unwrap_or_default(),
            features: pick_str_array(record, "features"),
            icon: pick_str(record, &["icon"])
                .map(|path| resolve_image(&path))
                .unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientLogo {
    pub id: Option<String>,
    pub name: String,
    pub company: String,
    pub logo: String,
}

impl ClientLogo {
    /// Entries without any resolvable logo are dropped by the caller.
    pub fn from_value(record: &Value) -> Option<ClientLogo> {
        let logo = pick_str(record, &["logo", "image", "logo_url", "logoUrl"])?;
        Some(ClientLogo {
            id: pick_id(record, &["id", "_id"]),
            name: pick_str(record, &["name", "title"]).unwrap_or_default(),
            company: pick_str(record, &["company"]).unwrap_or_default(),
            logo: resolve_image(&logo),
        })
    }

    pub fn label(&self) -> &str {
        if !self.name.is_empty() {
            &self.name
        } else if !self.company.is_empty() {
            &self.company
        } else {
            "Klien"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_clients() -> Vec<Value> {
        vec![
            json!({"id": 1, "name": "Alfa", "logo": "logos/alfa.png"}),
            json!({"_id": "b2", "title": "Beta", "logo_url": "https://cdn.example.com/beta.png"}),
            json!({"id": 3, "name": "Gamma"}),
        ]
    }

    #[test]
    fn unwraps_bare_array_data_key_and_named_key_alike() {
        let records = sample_clients();
        let bare = json!(records.clone());
        let data = json!({ "data": records.clone() });
        let named = json!({ "clients": records.clone() });

        let from_bare = normalize_collection(&bare, ClientLogo::from_value);
        let from_data = normalize_collection(&data, ClientLogo::from_value);
        let from_named = normalize_collection(&named, ClientLogo::from_value);

        assert_eq!(from_bare, from_data);
        assert_eq!(from_data, from_named);
        assert_eq!(from_bare.len(), 2);
    }

    #[test]
    fn envelope_without_any_array_yields_empty() {
        assert!(unwrap_envelope(&json!({"message": "ok"})).is_empty());
        assert!(unwrap_envelope(&json!("plain string")).is_empty());
        assert!(unwrap_envelope(&json!(null)).is_empty());
    }

    #[test]
    fn drops_entries_missing_the_mandatory_logo() {
        let records = sample_clients();
        let normalized = normalize_collection(&json!(records), ClientLogo::from_value);
        assert!(normalized.len() <= records.len());
        assert!(normalized.iter().all(|c| !c.logo.is_empty()));
        assert!(!normalized.iter().any(|c| c.name == "Gamma"));
    }

    #[test]
    fn logo_field_fallback_chain_is_ordered() {
        let record = json!({
            "id": 7,
            "name": "Delta",
            "image": "logos/second.png",
            "logo": "logos/first.png"
        });
        let client = ClientLogo::from_value(&record).unwrap();
        assert!(client.logo.ends_with("logos/first.png"));
    }

    #[test]
    fn resolves_relative_paths_against_storage_and_keeps_absolute_urls() {
        let relative = resolve_image("blogs/cover.jpg");
        assert!(relative.starts_with(config::get_storage_url()));
        assert!(relative.ends_with("blogs/cover.jpg"));

        let absolute = resolve_image("https://images.example.com/a.jpg");
        assert_eq!(absolute, "https://images.example.com/a.jpg");
        // Resolution is idempotent once the URL is absolute
        assert_eq!(resolve_image(&relative), relative);
    }

    #[test]
    fn clean_body_unescapes_newlines_and_is_idempotent() {
        let cleaned = clean_body("baris satu\\r\\nbaris dua\\nbaris tiga");
        assert_eq!(cleaned, "baris satu<br>baris dua<br>baris tiga");
        assert_eq!(clean_body(&cleaned), cleaned);
    }

    #[test]
    fn blog_post_normalization_fills_defaults() {
        let record = json!({
            "id": 42,
            "title": "Judul",
            "content": "Isi\\nartikel",
            "image": "blogs/42.jpg",
            "created_at": "2024-03-01T08:30:00.000000Z"
        });
        let post = BlogPost::from_value(&record).unwrap();
        assert_eq!(post.id, "42");
        assert_eq!(post.category, DEFAULT_CATEGORY);
        assert_eq!(post.content, "Isi<br>artikel");
        assert!(post.image.unwrap().ends_with("blogs/42.jpg"));
        assert!(post.created_at.is_some());
    }

    #[test]
    fn blog_post_without_title_is_rejected() {
        assert!(BlogPost::from_value(&json!({"id": 1, "title": ""})).is_none());
        assert!(BlogPost::from_value(&json!({"title": "no id"})).is_none());
    }

    #[test]
    fn portfolio_gallery_falls_back_to_main_image() {
        let record = json!({
            "id": 5,
            "title": "Proyek",
            "image": "portfolios/cover.png",
            "images": []
        });
        let entry = PortfolioEntry::from_value(&record).unwrap();
        assert_eq!(entry.images.len(), 1);
        assert_eq!(entry.images[0], entry.image.clone().unwrap());
        assert_eq!(entry.category, DEFAULT_CATEGORY);
        assert!(entry.results.is_empty());
        assert!(entry.technologies.is_empty());
    }

    #[test]
    fn parses_common_timestamp_shapes() {
        assert!(parse_timestamp("2024-01-01T00:00:00.000000Z").is_some());
        assert!(parse_timestamp("2024-01-01 10:20:30").is_some());
        assert!(parse_timestamp("2024-01-01").is_some());
        assert!(parse_timestamp("bukan tanggal").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn formats_dates_in_indonesian() {
        let date = parse_timestamp("2024-11-15").unwrap();
        assert_eq!(format_date_id(&date), "15 November 2024");
        assert_eq!(format_month_year_id(&date), "November 2024");
    }
}
