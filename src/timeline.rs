//! Scrub-state over one topic's article sequence.

use tracing::info;

use crate::article::Article;
use crate::layout::{compute_display_points, DisplayPoint, LayoutConfig};
use crate::tally::{compute_orientation_tally, OrientationTally};
use crate::TARGET_LAYOUT;

/// Holds the full article list and a cursor, and derives everything the view
/// renders: the cumulative pin prefix and the running vote tally.
///
/// Loading a new sequence recomputes every display point from scratch with
/// fresh jitter; nothing carries over between topics. The tally is
/// recomputed from the prefix on every call rather than patched
/// incrementally.
#[derive(Debug)]
pub struct Timeline {
    articles: Vec<Article>,
    points: Vec<DisplayPoint>,
    cursor: usize,
    config: LayoutConfig,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl Timeline {
    pub fn new(config: LayoutConfig) -> Self {
        Timeline {
            articles: Vec::new(),
            points: Vec::new(),
            cursor: 0,
            config,
        }
    }

    /// Replaces the article sequence, recomputing display coordinates and
    /// resetting the cursor to the start.
    pub fn load(&mut self, articles: Vec<Article>) {
        self.points = compute_display_points(&articles, &self.config);
        self.articles = articles;
        self.cursor = 0;

        info!(
            target: TARGET_LAYOUT,
            "Loaded {} articles, {} plottable",
            self.articles.len(),
            self.points.len()
        );
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor, clamping to the last article.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = match self.articles.len() {
            0 => 0,
            len => cursor.min(len - 1),
        };
    }

    /// Steps the cursor one article forward, saturating at the end.
    pub fn advance(&mut self) {
        self.set_cursor(self.cursor + 1);
    }

    /// The article under the cursor, whose timestamp the view shows.
    pub fn current(&self) -> Option<&Article> {
        self.articles.get(self.cursor)
    }

    /// Articles revealed so far: the prefix ending at the cursor.
    pub fn visible(&self) -> &[Article] {
        if self.articles.is_empty() {
            &[]
        } else {
            &self.articles[..=self.cursor]
        }
    }

    /// Display points for the revealed prefix, in input order.
    pub fn visible_points(&self) -> impl Iterator<Item = &DisplayPoint> {
        let cursor = self.cursor;
        self.points
            .iter()
            .take_while(move |point| point.source_index <= cursor)
    }

    /// Vote tally over the revealed prefix, recomputed on every call.
    pub fn tally(&self) -> OrientationTally {
        compute_orientation_tally(self.visible())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::Orientation;

    fn topic() -> Vec<Article> {
        vec![
            Article::new("harbor reopens")
                .with_position(40.7128, -74.0060)
                .with_orientation(Orientation::LeftWing)
                .with_publisher("Harbor Ledger"),
            Article::new("council recall")
                .with_position(41.8781, -87.6298)
                .with_orientation(Orientation::RightWing),
            Article::new("overseas reaction").with_position(51.5074, -0.1278),
            Article::new("statehouse vote")
                .with_position(34.0522, -118.2437)
                .with_orientation(Orientation::CenterRight),
        ]
    }

    #[test]
    fn load_resets_cursor_and_visibility() {
        let mut timeline = Timeline::default();
        timeline.load(topic());
        timeline.set_cursor(3);

        timeline.load(topic());
        assert_eq!(timeline.cursor(), 0);
        assert_eq!(timeline.visible().len(), 1);
        assert_eq!(timeline.visible_points().count(), 1);
    }

    #[test]
    fn cursor_reveals_a_cumulative_prefix() {
        let mut timeline = Timeline::default();
        timeline.load(topic());

        assert_eq!(timeline.visible().len(), 1);
        timeline.set_cursor(2);
        assert_eq!(timeline.visible().len(), 3);
        // the overseas article stays on the slider but is never plotted
        assert_eq!(timeline.visible_points().count(), 2);
    }

    #[test]
    fn cursor_clamps_to_the_last_article() {
        let mut timeline = Timeline::default();
        timeline.load(topic());

        timeline.set_cursor(99);
        assert_eq!(timeline.cursor(), 3);

        timeline.advance();
        assert_eq!(timeline.cursor(), 3);
        assert_eq!(timeline.current().map(|a| a.title.as_str()), Some("statehouse vote"));
    }

    #[test]
    fn tally_follows_the_cursor() {
        let mut timeline = Timeline::default();
        timeline.load(topic());

        assert_eq!(timeline.tally().left_score, 2);
        assert_eq!(timeline.tally().right_score, 0);

        timeline.set_cursor(3);
        let tally = timeline.tally();
        assert_eq!(tally.left_score, 2);
        assert_eq!(tally.right_score, 3);
    }

    #[test]
    fn current_article_exposes_the_hover_label() {
        let mut timeline = Timeline::default();
        timeline.load(topic());

        assert_eq!(
            timeline.current().and_then(|a| a.publisher.as_deref()),
            Some("Harbor Ledger")
        );
    }

    #[test]
    fn empty_timeline_has_nothing_visible() {
        let mut timeline = Timeline::default();
        timeline.load(Vec::new());

        assert!(timeline.is_empty());
        assert!(timeline.visible().is_empty());
        assert_eq!(timeline.visible_points().count(), 0);
        assert!(timeline.current().is_none());
        assert_eq!(timeline.tally(), OrientationTally::default());

        timeline.set_cursor(5);
        assert_eq!(timeline.cursor(), 0);
    }
}
