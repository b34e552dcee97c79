//! Feed Loader
//!
//! Fetches the generated feed (bypassing the HTTP cache) and turns the
//! outcome into store updates and a status line.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

use crate::config::{LABEL_FAILED, LABEL_LOADING, LABEL_UPDATED, LABEL_WAITING};
use crate::error::LoadError;
use crate::models::Feed;
use crate::store::{store_apply_load, AppStore};

// ========================
// Status Line
// ========================

/// Text shown in the status area
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StatusLine {
    /// Fetch still in flight
    #[default]
    Loading,
    /// Feed carries a timestamp (already formatted)
    Updated(String),
    /// Feed loaded but was never generated
    Waiting,
    /// Fetch or decode failed
    Failed,
}

impl StatusLine {
    pub fn from_feed(feed: &Feed) -> Self {
        match feed.fetched_at() {
            Some(ts) => StatusLine::Updated(localize_timestamp(ts)),
            None => StatusLine::Waiting,
        }
    }

    pub fn text(&self) -> String {
        match self {
            StatusLine::Loading => LABEL_LOADING.to_string(),
            StatusLine::Updated(when) => format!("{} {}", LABEL_UPDATED, when),
            StatusLine::Waiting => LABEL_WAITING.to_string(),
            StatusLine::Failed => LABEL_FAILED.to_string(),
        }
    }
}

/// Feed timestamp in the user's locale and zone; unparseable values are returned as is
pub fn localize_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(utc) => locale_string(utc),
        None => raw.to_string(),
    }
}

/// `Date.prototype.toLocaleString` with the browser's default locale
#[cfg(target_arch = "wasm32")]
fn locale_string(utc: DateTime<Utc>) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(utc.timestamp_millis() as f64));
    date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED).into()
}

#[cfg(not(target_arch = "wasm32"))]
fn locale_string(utc: DateTime<Utc>) -> String {
    format_in(utc, &chrono::Local)
}

/// Host layout: `DD.MM.YYYY, HH:MM:SS` in `tz`
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn format_in<Tz: TimeZone>(utc: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    utc.with_timezone(tz).format("%d.%m.%Y, %H:%M:%S").to_string()
}

/// RFC 3339 first, then a naive ISO date-time or a bare date, read as UTC
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

// ========================
// Fetch
// ========================

/// GET `url` with `cache: "no-store"` and decode it as a feed
pub async fn fetch_feed(url: &str) -> Result<Feed, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Network("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_cache(RequestCache::NoStore);
    let request = Request::new_with_str_and_init(url, &opts).map_err(LoadError::network)?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(LoadError::network)?;
    let resp: Response = resp_value.dyn_into().map_err(LoadError::network)?;
    if !resp.ok() {
        return Err(LoadError::Status(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(LoadError::body)?)
        .await
        .map_err(LoadError::body)?
        .as_string()
        .ok_or_else(|| LoadError::Body("response body is not text".to_string()))?;

    Ok(Feed::from_json(&text)?)
}

/// Load the feed once and publish the outcome to the store
pub async fn load_feed(store: AppStore, url: String) {
    let result = fetch_feed(&url).await;
    match &result {
        Ok(feed) => {
            web_sys::console::log_1(
                &format!("[LOADER] Loaded {} movies from {} (count={:?})", feed.items.len(), url, feed.count).into(),
            );
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[LOADER] Failed to load {}: {}", url, e).into());
        }
    }
    store_apply_load(&store, result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(raw: &str) -> String {
        parse_timestamp(raw)
            .map(|t| format_in(t, &Utc))
            .unwrap_or_else(|| raw.to_string())
    }

    #[test]
    fn test_format_rfc3339() {
        assert_eq!(utc("2024-05-01T12:30:05Z"), "01.05.2024, 12:30:05");
        assert_eq!(utc("2024-05-01T12:30:05+03:00"), "01.05.2024, 09:30:05");
    }

    #[test]
    fn test_format_naive_is_utc() {
        assert_eq!(utc("2024-05-01T12:30:05.123456"), "01.05.2024, 12:30:05");
        assert_eq!(utc("2024-05-01 12:30:05"), "01.05.2024, 12:30:05");
    }

    #[test]
    fn test_date_only_is_utc_midnight() {
        assert_eq!(utc("2024-05-01"), "01.05.2024, 00:00:00");
        assert!(parse_timestamp(" 2024-05-01 ").is_some());
    }

    #[test]
    fn test_format_in_other_zone() {
        let moscow = FixedOffset::east_opt(3 * 3600).unwrap();
        let instant = parse_timestamp("2024-12-31T22:00:00Z").unwrap();
        assert_eq!(format_in(instant, &moscow), "01.01.2025, 01:00:00");
    }

    #[test]
    fn test_unparseable_passthrough() {
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(localize_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn test_status_from_feed() {
        let waiting = Feed::from_json(r#"{"count": 0, "items": []}"#).unwrap();
        assert_eq!(StatusLine::from_feed(&waiting), StatusLine::Waiting);
        assert_eq!(StatusLine::from_feed(&waiting).text(), LABEL_WAITING);

        let fresh = Feed::from_json(r#"{"count": 1, "fetched_at_utc": "2024-05-01T12:30:05Z"}"#).unwrap();
        match StatusLine::from_feed(&fresh) {
            StatusLine::Updated(when) => assert!(when.contains("2024")),
            other => panic!("unexpected status {:?}", other),
        }
    }

    #[test]
    fn test_status_text() {
        assert_eq!(StatusLine::default().text(), LABEL_LOADING);
        assert_eq!(StatusLine::Failed.text(), LABEL_FAILED);
        assert_eq!(
            StatusLine::Updated("01.05.2024, 12:30:05".to_string()).text(),
            format!("{} 01.05.2024, 12:30:05", LABEL_UPDATED)
        );
    }
}
