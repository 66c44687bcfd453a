//! Normalization of upstream feed payloads into [`Article`] records.
//!
//! The feed serves one payload per date: topics keyed by id, each carrying a
//! title and an ordered article list. Articles arrive in two encodings
//! depending on the feed revision: named-field objects (optionally with a
//! nested `coordinates` sub-object) and bare positional rows mirroring the
//! upstream storage schema. Both normalize to the same named-field record so
//! nothing downstream ever addresses a field by numeric index.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::article::{Article, Orientation};
use crate::TARGET_ADAPTER;

// Positional-row field offsets, mirroring the upstream row schema
// (article_id, topic_id, title, time, politics, credibility,
//  latitude, longitude, url).
const ROW_TITLE: usize = 2;
const ROW_TIME: usize = 3;
const ROW_POLITICS: usize = 4;
const ROW_LATITUDE: usize = 6;
const ROW_LONGITUDE: usize = 7;
const ROW_URL: usize = 8;

/// One topic from a per-date feed payload.
#[derive(Debug, Clone)]
pub struct Topic {
    pub title: String,
    pub articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct RawTopic {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    articles: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    publisher: Option<String>,
    #[serde(default, rename = "publishDate", alias = "publish_date")]
    publish_date: Option<String>,
    #[serde(default)]
    orientation: Option<String>,
    #[serde(default, alias = "url")]
    link: Option<String>,
    #[serde(default)]
    coordinates: Option<RawCoordinates>,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawCoordinates {
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
}

/// Parses a per-date feed payload into its topics, ordered by topic key.
///
/// Individual articles that fail to decode are skipped with a debug log;
/// only a payload that is not a topic map at the top level is an error.
pub fn parse_day_feed(payload: &str) -> Result<Vec<Topic>> {
    let raw: BTreeMap<String, RawTopic> =
        serde_json::from_str(payload).context("feed payload is not a topic map")?;

    let mut keyed: Vec<(String, RawTopic)> = raw.into_iter().collect();
    // Topic keys are numeric strings; keep "10" after "2"
    keyed.sort_by_key(|(key, _)| key.parse::<u64>().unwrap_or(u64::MAX));

    let mut topics = Vec::with_capacity(keyed.len());
    for (key, topic) in keyed {
        let mut articles = Vec::with_capacity(topic.articles.len());
        for value in &topic.articles {
            match decode_article(value) {
                Some(article) => articles.push(article),
                None => {
                    debug!(
                        target: TARGET_ADAPTER,
                        "Skipping undecodable article in topic {}", key
                    );
                }
            }
        }

        topics.push(Topic {
            title: topic.title.unwrap_or_else(|| format!("Topic {}", key)),
            articles,
        });
    }

    Ok(topics)
}

/// Decodes one article from either feed encoding.
pub fn decode_article(value: &Value) -> Option<Article> {
    match value {
        Value::Array(row) => article_from_row(row),
        Value::Object(_) => article_from_object(value),
        _ => None,
    }
}

fn article_from_object(value: &Value) -> Option<Article> {
    let raw: RawArticle = serde_json::from_value(value.clone()).ok()?;

    // Earlier feed revisions nest the coordinates, later ones flatten them
    let (latitude, longitude) = match raw.coordinates {
        Some(coordinates) => (coordinates.latitude, coordinates.longitude),
        None => (raw.latitude, raw.longitude),
    };

    Some(Article {
        title: raw.title.unwrap_or_default(),
        summary: raw.summary,
        publisher: raw.publisher,
        publish_date: raw.publish_date,
        latitude,
        longitude,
        orientation: raw
            .orientation
            .as_deref()
            .map(Orientation::from)
            .unwrap_or_default(),
        link: raw.link,
    })
}

/// Decodes a positional row into a named-field article.
pub fn article_from_row(row: &[Value]) -> Option<Article> {
    let title = row.get(ROW_TITLE)?.as_str()?.to_string();

    Some(Article {
        title,
        summary: None,
        publisher: None,
        publish_date: row.get(ROW_TIME).and_then(Value::as_str).map(str::to_string),
        latitude: row.get(ROW_LATITUDE).and_then(Value::as_f64),
        longitude: row.get(ROW_LONGITUDE).and_then(Value::as_f64),
        orientation: row
            .get(ROW_POLITICS)
            .and_then(Value::as_str)
            .map(Orientation::from)
            .unwrap_or_default(),
        link: row.get(ROW_URL).and_then(Value::as_str).map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_named_object_topics() {
        let payload = r#"{
            "1": { "title": "Storm moves east", "articles": [
                { "title": "Coastal towns brace",
                  "coordinates": { "latitude": 40.7128, "longitude": -74.006 },
                  "publishDate": "2025-02-28T09:00:00",
                  "publisher": "Example Wire",
                  "orientation": "Center-left" }
            ]},
            "2": { "title": "Budget vote", "articles": [] }
        }"#;

        let topics = parse_day_feed(payload).unwrap();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].title, "Storm moves east");
        assert_eq!(topics[1].title, "Budget vote");

        let article = &topics[0].articles[0];
        assert_eq!(article.latitude, Some(40.7128));
        assert_eq!(article.longitude, Some(-74.006));
        assert_eq!(article.orientation, Orientation::CenterLeft);
        assert_eq!(article.publisher.as_deref(), Some("Example Wire"));
        assert!(article.published_at().is_some());
    }

    #[test]
    fn decodes_positional_rows() {
        let row = json!([
            17,
            3,
            "Refinery fire contained",
            "2025-02-28T11:30:00",
            "Right-wing",
            0.8,
            29.7604,
            -95.3698,
            "https://example.com/fire"
        ]);

        let article = decode_article(&row).unwrap();
        assert_eq!(article.title, "Refinery fire contained");
        assert_eq!(article.orientation, Orientation::RightWing);
        assert_eq!(article.latitude, Some(29.7604));
        assert_eq!(article.longitude, Some(-95.3698));
        assert_eq!(article.link.as_deref(), Some("https://example.com/fire"));
    }

    #[test]
    fn unknown_orientation_decodes_rather_than_failing() {
        let row = json!([1, 1, "Local notes", null, "Syndicated", null, 39.0, -98.0, null]);
        let article = decode_article(&row).unwrap();
        assert_eq!(article.orientation, Orientation::Unknown);
        assert!(article.publish_date.is_none());
    }

    #[test]
    fn undecodable_articles_are_skipped_not_fatal() {
        let payload = r#"{ "1": { "title": "Sparse", "articles": [[1, 2], 42, "text"] } }"#;
        let topics = parse_day_feed(payload).unwrap();
        assert_eq!(topics.len(), 1);
        assert!(topics[0].articles.is_empty());
    }

    #[test]
    fn topics_order_numerically_and_title_falls_back_to_the_key() {
        let payload = r#"{ "10": { "articles": [] }, "2": { "articles": [] } }"#;
        let topics = parse_day_feed(payload).unwrap();
        assert_eq!(topics[0].title, "Topic 2");
        assert_eq!(topics[1].title, "Topic 10");
    }

    #[test]
    fn non_map_payload_is_an_error() {
        assert!(parse_day_feed("[1, 2, 3]").is_err());
        assert!(parse_day_feed("not json").is_err());
    }
}
