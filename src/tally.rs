//! Weighted left/right vote tally over an article sequence.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::article::{Article, Lean};
use crate::TARGET_TALLY;

/// Cumulative left/right split for a set of articles.
///
/// Scores are weighted counts from the fixed orientation table. Percentages
/// are rounded half-up independently per side, so they may not sum to
/// exactly 100; with no voting article at all both report 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientationTally {
    pub left_score: u32,
    pub right_score: u32,
    pub left_percent: u32,
    pub right_percent: u32,
}

impl OrientationTally {
    pub fn total(&self) -> u32 {
        self.left_score + self.right_score
    }
}

/// Tallies the weighted political lean of the given articles.
///
/// Pure over its input: the caller passes the timeline prefix ending at the
/// cursor and recomputes on every cursor move.
pub fn compute_orientation_tally(articles: &[Article]) -> OrientationTally {
    let mut left_score = 0u32;
    let mut right_score = 0u32;

    for article in articles {
        match article.orientation.lean() {
            Some(Lean::Left) => left_score += article.orientation.weight(),
            Some(Lean::Right) => right_score += article.orientation.weight(),
            None => {}
        }
    }

    let total = left_score + right_score;
    let (left_percent, right_percent) = if total == 0 {
        // No votes yet: an empty bar, not an artificial 50/50 split
        (0, 0)
    } else {
        (
            (f64::from(left_score) * 100.0 / f64::from(total)).round() as u32,
            (f64::from(right_score) * 100.0 / f64::from(total)).round() as u32,
        )
    };

    debug!(
        target: TARGET_TALLY,
        "Tallied {} articles: left {} ({}%), right {} ({}%)",
        articles.len(),
        left_score,
        left_percent,
        right_score,
        right_percent
    );

    OrientationTally {
        left_score,
        right_score,
        left_percent,
        right_percent,
    }
}
