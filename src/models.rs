//! Frontend Models
//!
//! Data structures matching the generated `movies.json` feed.
//!
//! Item fields decode leniently: a value of the wrong JSON type becomes
//! `None` (or an empty list) instead of failing the whole feed.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Movie identifier as written by the feed generator (number or string)
#[derive(Debug, Clone, PartialEq)]
pub enum MovieId {
    Number(Number),
    Text(String),
}

impl Default for MovieId {
    fn default() -> Self {
        MovieId::Text(String::new())
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovieId::Number(n) => write!(f, "{}", n),
            MovieId::Text(s) => f.write_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for MovieId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => MovieId::Number(n),
            Value::String(s) => MovieId::Text(s),
            Value::Null => MovieId::default(),
            other => MovieId::Text(other.to_string()),
        })
    }
}

/// One movie record (matches feed items)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    #[serde(default)]
    pub id: MovieId,
    #[serde(default, deserialize_with = "text_or_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub vote_average: Option<f64>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub poster_url: Option<String>,
    #[serde(default, deserialize_with = "text_list")]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub overview: Option<String>,
}

impl Movie {
    /// Title for matching and sorting ("" when missing)
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Release date for sorting ("" when missing)
    pub fn release_date_or_empty(&self) -> &str {
        self.release_date.as_deref().unwrap_or("")
    }

    /// Vote average for sorting (0.0 when missing)
    pub fn rating_or_zero(&self) -> f64 {
        self.vote_average.unwrap_or(0.0)
    }

    /// Poster URL, treating an empty string as no poster
    pub fn poster(&self) -> Option<&str> {
        self.poster_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// The fetched feed document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Feed {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Movie>,
    #[serde(default, deserialize_with = "count_or_none")]
    pub count: Option<u64>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub fetched_at_utc: Option<String>,
}

impl Feed {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// The generator has not produced any data yet (count missing or zero)
    pub fn is_empty(&self) -> bool {
        self.count.unwrap_or(0) == 0
    }

    /// Freshness timestamp, ignoring blank values
    pub fn fetched_at(&self) -> Option<&str> {
        self.fetched_at_utc.as_deref().filter(|ts| !ts.trim().is_empty())
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// ========================
// Lenient Field Decoders
// ========================

fn text_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn number_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        _ => None,
    })
}

fn count_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().map(|f| f.max(0.0) as u64)),
        _ => None,
    })
}

/// Keeps the string entries of an array; anything else is an empty list
fn text_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|value| match value {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}
