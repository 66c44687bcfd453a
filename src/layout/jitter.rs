use rand::Rng;
use tracing::debug;

use super::types::{DisplayPoint, LayoutConfig};
use crate::article::Article;
use crate::TARGET_LAYOUT;

/// Computes jittered display coordinates for every plottable article.
///
/// Articles with missing or non-finite coordinates, and articles outside the
/// configured bounds, are dropped; survivors keep their input order. Every
/// surviving point is perturbed independently so coincident articles stay
/// visually distinguishable on the map. Offsets are drawn fresh on every
/// call; nothing carries over between article sequences.
pub fn compute_display_points(articles: &[Article], config: &LayoutConfig) -> Vec<DisplayPoint> {
    compute_display_points_with(articles, config, &mut rand::rng())
}

/// Variant taking the randomness source, so callers needing reproducible
/// output can pass a seeded generator or a fixed-offset stub.
pub fn compute_display_points_with<R: Rng>(
    articles: &[Article],
    config: &LayoutConfig,
    rng: &mut R,
) -> Vec<DisplayPoint> {
    let mut points = Vec::with_capacity(articles.len());
    let mut dropped = 0usize;

    for (source_index, article) in articles.iter().enumerate() {
        let (latitude, longitude) = match article.position() {
            Some(position) => position,
            None => {
                dropped += 1;
                continue;
            }
        };

        if let Some(bounds) = config.bounds {
            if !bounds.contains(latitude, longitude) {
                dropped += 1;
                continue;
            }
        }

        points.push(DisplayPoint {
            source_index,
            longitude: longitude + rng.random_range(-0.5..0.5) * config.jitter_factor,
            latitude: latitude + rng.random_range(-0.5..0.5) * config.jitter_factor,
        });
    }

    if dropped > 0 {
        debug!(
            target: TARGET_LAYOUT,
            "Dropped {} of {} articles as unplottable or out of bounds",
            dropped,
            articles.len()
        );
    }

    points
}
