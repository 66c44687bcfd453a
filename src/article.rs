//! The normalized article record and its orientation label tables.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fallback pin color for labels with no dedicated hue.
pub const UNKNOWN_COLOR: &str = "#808080";

/// Political-orientation label attached to an article by the upstream feed.
///
/// The label set is closed; anything the feed sends outside it lands on
/// `Unknown` rather than failing to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Orientation {
    RightWing,
    CenterRight,
    Neutral,
    CenterLeft,
    LeftWing,
    PublicBroadcaster,
    GovtInstitution,
    ProGovernment,
    GovtPropaganda,
    Indeterminate,
    Pending,
    #[default]
    Unknown,
}

/// Which side of the vote bar a label counts toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lean {
    Left,
    Right,
}

impl Orientation {
    /// Side this label votes for; `None` for everything non-partisan.
    pub fn lean(&self) -> Option<Lean> {
        match self {
            Orientation::LeftWing | Orientation::CenterLeft => Some(Lean::Left),
            Orientation::RightWing | Orientation::CenterRight => Some(Lean::Right),
            _ => None,
        }
    }

    /// Weight this label contributes to its side of the vote bar.
    pub fn weight(&self) -> u32 {
        match self {
            Orientation::LeftWing | Orientation::RightWing => 2,
            Orientation::CenterLeft | Orientation::CenterRight => 1,
            _ => 0,
        }
    }

    /// Pin and vote-bar color for this label.
    pub fn color(&self) -> &'static str {
        match self {
            Orientation::RightWing => "#BC291E",
            Orientation::CenterRight => "#D1695E",
            Orientation::LeftWing => "#0070C0",
            Orientation::CenterLeft => "#5B9BD5",
            Orientation::Neutral => "#9E9E9E",
            Orientation::PublicBroadcaster => "#2A9D8F",
            Orientation::GovtInstitution => "#8E7CC3",
            Orientation::ProGovernment => "#C27BA0",
            Orientation::GovtPropaganda => "#A64D79",
            _ => UNKNOWN_COLOR,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::RightWing => write!(f, "Right-wing"),
            Orientation::CenterRight => write!(f, "Center-right"),
            Orientation::Neutral => write!(f, "Neutral"),
            Orientation::CenterLeft => write!(f, "Center-left"),
            Orientation::LeftWing => write!(f, "Left-wing"),
            Orientation::PublicBroadcaster => write!(f, "Public Broadcaster"),
            Orientation::GovtInstitution => write!(f, "Gov't Institution"),
            Orientation::ProGovernment => write!(f, "Pro-Government"),
            Orientation::GovtPropaganda => write!(f, "Gov't Propaganda"),
            Orientation::Indeterminate => write!(f, "Indeterminate"),
            Orientation::Pending => write!(f, "Pending"),
            Orientation::Unknown => write!(f, "Unknown"),
        }
    }
}

impl From<&str> for Orientation {
    fn from(s: &str) -> Self {
        match s {
            "Right-wing" => Orientation::RightWing,
            "Center-right" => Orientation::CenterRight,
            "Neutral" => Orientation::Neutral,
            "Center-left" => Orientation::CenterLeft,
            "Left-wing" => Orientation::LeftWing,
            "Public Broadcaster" => Orientation::PublicBroadcaster,
            "Gov't Institution" => Orientation::GovtInstitution,
            "Pro-Government" => Orientation::ProGovernment,
            "Gov't Propaganda" => Orientation::GovtPropaganda,
            "Indeterminate" => Orientation::Indeterminate,
            "Pending" => Orientation::Pending,
            _ => Orientation::Unknown,
        }
    }
}

impl From<String> for Orientation {
    fn from(s: String) -> Self {
        Orientation::from(s.as_str())
    }
}

impl From<Orientation> for String {
    fn from(orientation: Orientation) -> Self {
        orientation.to_string()
    }
}

/// A geo-tagged news article normalized from the upstream feed.
///
/// Articles carry no stable identifier; identity is positional within the
/// sequence the caller supplies, so derived state keys off list position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    // Shown as the pin hover label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    // ISO 8601 as sent by the feed; parse via published_at()
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,

    // WGS84 degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    #[serde(default)]
    pub orientation: Orientation,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Article {
    pub fn new(title: &str) -> Self {
        Article {
            title: title.to_string(),
            summary: None,
            publisher: None,
            publish_date: None,
            latitude: None,
            longitude: None,
            orientation: Orientation::Unknown,
            link: None,
        }
    }

    pub fn with_position(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_publisher(mut self, publisher: &str) -> Self {
        self.publisher = Some(publisher.to_string());
        self
    }

    pub fn with_publish_date(mut self, publish_date: &str) -> Self {
        self.publish_date = Some(publish_date.to_string());
        self
    }

    /// Raw coordinates when both axes are present and finite.
    pub fn position(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) if latitude.is_finite() && longitude.is_finite() => {
                Some((latitude, longitude))
            }
            _ => None,
        }
    }

    /// Parsed publish timestamp, when the raw string is one of the formats
    /// the feed is known to emit.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_publish_date(self.publish_date.as_deref()?)
    }
}

/// Parses a feed publish timestamp.
///
/// Some feed revisions send RFC 3339, others zone-less ISO 8601 or a bare
/// date; zone-less values are taken as UTC.
pub fn parse_publish_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }

    for format in &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(date) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(date.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|date| date.and_utc());
    }

    None
}
