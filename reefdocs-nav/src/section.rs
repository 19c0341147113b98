//! Section boundary model and active-entry resolution.
//!
//! The layout is a flat list of cumulative pixel boundaries derived from
//! rendered section heights. It is rebuilt wholesale whenever layout may
//! have changed (page load, debounced resize) and is read-only during
//! scroll handling.

use serde::{Deserialize, Serialize};

/// Pixels subtracted from each cumulative boundary so a section hands off
/// to the next one slightly before its content has fully scrolled past.
pub const EARLY_TRIGGER_PX: f64 = 25.0;

/// Slack for treating the viewport as having reached the bottom of the
/// scrollable content. Trailing whitespace of the last section rarely
/// reaches its nominal boundary, so the bottom of the page wins outright.
pub const BOTTOM_SLACK_PX: f64 = 5.0;

/// Lower edge of one section's active range, keyed by its DOM id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBound {
    pub id: String,
    pub boundary: f64,
}

/// Viewport numbers sampled at scroll time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub content_height: f64,
}

impl ViewportMetrics {
    /// Whether the viewport bottom is within [`BOTTOM_SLACK_PX`] of the end
    /// of the scrollable content.
    #[must_use]
    pub fn at_bottom(&self) -> bool {
        self.viewport_height + self.scroll_y + BOTTOM_SLACK_PX >= self.content_height
    }
}

/// Ordered section boundaries in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionLayout {
    bounds: Vec<SectionBound>,
}

impl SectionLayout {
    /// Build boundaries from `(id, rendered height)` pairs in document
    /// order. Each boundary is the running height sum minus the
    /// early-trigger bias; heights are clamped at zero, so the boundary
    /// sequence is non-decreasing.
    #[must_use]
    pub fn from_heights<I>(sections: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let mut total = 0.0;
        let bounds = sections
            .into_iter()
            .map(|(id, height)| {
                total += height.max(0.0);
                SectionBound {
                    id,
                    boundary: total - EARLY_TRIGGER_PX,
                }
            })
            .collect();
        Self { bounds }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    #[must_use]
    pub fn bounds(&self) -> &[SectionBound] {
        &self.bounds
    }

    #[must_use]
    pub fn last_id(&self) -> Option<&str> {
        self.bounds.last().map(|bound| bound.id.as_str())
    }

    /// First section, in document order, whose boundary has not been
    /// scrolled past. The comparison is inclusive: a scroll offset exactly
    /// on a boundary still selects that section.
    #[must_use]
    pub fn section_at(&self, scroll_y: f64) -> Option<&str> {
        self.bounds
            .iter()
            .find(|bound| scroll_y <= bound.boundary)
            .map(|bound| bound.id.as_str())
    }

    /// Entry to highlight for the sampled viewport, or `None` when nothing
    /// qualifies. The bottom-of-page rule supersedes the boundary scan.
    #[must_use]
    pub fn active_entry(&self, view: &ViewportMetrics) -> Option<&str> {
        if view.at_bottom() {
            return self.last_id();
        }
        self.section_at(view.scroll_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(heights: &[(&str, f64)]) -> SectionLayout {
        SectionLayout::from_heights(
            heights
                .iter()
                .map(|(id, h)| ((*id).to_string(), *h)),
        )
    }

    #[test]
    fn empty_layout_resolves_nothing() {
        let empty = SectionLayout::default();
        assert!(empty.is_empty());
        assert_eq!(empty.section_at(0.0), None);
        let view = ViewportMetrics {
            scroll_y: 10.0,
            viewport_height: 500.0,
            content_height: 400.0,
        };
        assert_eq!(empty.active_entry(&view), None);
    }

    #[test]
    fn negative_heights_are_clamped() {
        let l = layout(&[("a", 100.0), ("b", -40.0), ("c", 60.0)]);
        let bounds = l.bounds();
        assert!((bounds[0].boundary - 75.0).abs() < f64::EPSILON);
        assert!((bounds[1].boundary - 75.0).abs() < f64::EPSILON);
        assert!((bounds[2].boundary - 135.0).abs() < f64::EPSILON);
    }

    #[test]
    fn scan_past_all_boundaries_is_none() {
        let l = layout(&[("a", 100.0)]);
        assert_eq!(l.section_at(100.0), None);
    }
}
