use std::env;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::TARGET_LAYOUT;

const JITTER_FACTOR_ENV: &str = "LEANMAP_JITTER_FACTOR";

/// Display coordinate derived for one plottable article.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayPoint {
    // Index of the source article in the sequence the caller supplied;
    // back-reference only, the source is never touched through it
    pub source_index: usize,
    pub longitude: f64,
    pub latitude: f64,
}

/// Inclusive geographic bounding box in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    /// Whether a coordinate lies inside the box; edges count as inside.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.min_latitude
            && latitude <= self.max_latitude
            && longitude >= self.min_longitude
            && longitude <= self.max_longitude
    }
}

/// Settings for the pin layout pass.
#[derive(Debug, Clone, Copy)]
pub struct LayoutConfig {
    // Each axis shifts by at most half of this, in degrees
    pub jitter_factor: f64,
    // None plots everything regardless of location
    pub bounds: Option<BoundingBox>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            jitter_factor: super::DEFAULT_JITTER_FACTOR,
            bounds: Some(super::CONUS_BOUNDS),
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_jitter_factor(mut self, jitter_factor: f64) -> Self {
        self.jitter_factor = jitter_factor;
        self
    }

    pub fn with_bounds(mut self, bounds: Option<BoundingBox>) -> Self {
        self.bounds = bounds;
        self
    }

    /// Default configuration, with the jitter magnitude overridden by the
    /// `LEANMAP_JITTER_FACTOR` environment variable when it parses to a
    /// finite non-negative number.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = env::var(JITTER_FACTOR_ENV) {
            match raw.trim().parse::<f64>() {
                Ok(factor) if factor.is_finite() && factor >= 0.0 => {
                    config.jitter_factor = factor;
                }
                _ => {
                    warn!(
                        target: TARGET_LAYOUT,
                        "Ignoring invalid {} value: {}", JITTER_FACTOR_ENV, raw
                    );
                }
            }
        }

        config
    }
}
