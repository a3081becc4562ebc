//! Scroll target math – viewport span, item offsets, and the "is this item
//! visible, and if not where do we go" decision.
//!
//! Pure functions over numbers; nothing here keeps state.

use super::metrics::{ItemGeometry, LayoutMetrics, Orientation};

/// Span of the viewport along the stacking axis.
///
/// Unavailable metrics (not mounted, hidden) read as `0`, as does any
/// non-finite or negative measurement.
pub fn viewport_span(orientation: Orientation, metrics: Option<LayoutMetrics>) -> f64 {
    let Some(metrics) = metrics else {
        return 0.0;
    };
    let span = match orientation {
        Orientation::Vertical => metrics.height,
        Orientation::Horizontal => metrics.width,
    };
    sanitize(span)
}

/// Sum of every item span.
pub fn total_span(item_spans: &[f64]) -> f64 {
    item_spans.iter().copied().map(sanitize).sum()
}

/// Offset at which item `item_index`'s leading edge meets the viewport's
/// leading edge: the cumulative span of every item before it.
///
/// Returns `0` for an empty stack or an out-of-range index.
pub fn scroll_into_view_position(item_index: usize, item_spans: &[f64]) -> f64 {
    if item_index >= item_spans.len() {
        return 0.0;
    }
    total_span(&item_spans[..item_index])
}

/// Furthest the stack can scroll: `max(0, total - viewport)`.
pub fn max_scroll_distance(item_spans: &[f64], viewport_span: f64) -> f64 {
    if item_spans.is_empty() {
        return 0.0;
    }
    (total_span(item_spans) - sanitize(viewport_span)).max(0.0)
}

/// Geometry of item `index` derived from pre-measured spans.
pub fn item_geometry(index: usize, item_spans: &[f64]) -> Option<ItemGeometry> {
    let span = *item_spans.get(index)?;
    Some(ItemGeometry::new(
        scroll_into_view_position(index, item_spans),
        sanitize(span),
    ))
}

/// Decide whether an item spanning `[leading, trailing]` needs scrolling to
/// be visible in the window `[current, current + viewport]`.
///
/// `None` when it is already fully visible.  Trailing overflow wins over
/// leading underflow, so an item larger than the viewport is aligned on its
/// trailing edge.
pub fn direction_aware_target(
    current_offset: f64,
    item_leading_edge: f64,
    item_trailing_edge: f64,
    viewport_span: f64,
) -> Option<f64> {
    let window_end = current_offset + viewport_span;
    if item_trailing_edge > window_end {
        Some(item_trailing_edge - viewport_span)
    } else if item_leading_edge < current_offset {
        Some(item_leading_edge)
    } else {
        None
    }
}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPANS: [f64; 12] = [
        120.0, 180.0, 240.0, 120.0, 640.0, 200.0, 220.0, 170.0, 160.0, 240.0, 110.0, 270.0,
    ];

    #[test]
    fn viewport_span_follows_orientation() {
        let m = Some(LayoutMetrics::new(200.0, 100.0));
        assert_eq!(viewport_span(Orientation::Vertical, m), 100.0);
        assert_eq!(viewport_span(Orientation::Horizontal, m), 200.0);
    }

    #[test]
    fn viewport_span_is_zero_without_metrics() {
        assert_eq!(viewport_span(Orientation::Vertical, None), 0.0);
        let bad = Some(LayoutMetrics::new(f64::NAN, -5.0));
        assert_eq!(viewport_span(Orientation::Horizontal, bad), 0.0);
        assert_eq!(viewport_span(Orientation::Vertical, bad), 0.0);
    }

    #[test]
    fn scroll_into_view_position_sums_preceding_items() {
        assert_eq!(scroll_into_view_position(0, &SPANS), 0.0);
        assert_eq!(scroll_into_view_position(4, &SPANS), 660.0);
        assert_eq!(scroll_into_view_position(11, &SPANS), 2400.0);
    }

    #[test]
    fn scroll_into_view_position_out_of_range_is_zero() {
        assert_eq!(scroll_into_view_position(0, &[]), 0.0);
        assert_eq!(scroll_into_view_position(12, &SPANS), 0.0);
    }

    #[test]
    fn max_scroll_distance_matches_total_minus_viewport() {
        assert_eq!(max_scroll_distance(&SPANS, 200.0), 2470.0);
        assert_eq!(max_scroll_distance(&[], 200.0), 0.0);
        assert_eq!(max_scroll_distance(&[50.0, 50.0], 200.0), 0.0);
        assert_eq!(max_scroll_distance(&[50.0, 50.0], 0.0), 100.0);
    }

    #[test]
    fn item_geometry_from_spans() {
        assert_eq!(item_geometry(4, &SPANS), Some(ItemGeometry::new(660.0, 640.0)));
        assert_eq!(item_geometry(12, &SPANS), None);
    }

    #[test]
    fn visible_item_needs_no_scroll() {
        assert_eq!(direction_aware_target(100.0, 120.0, 180.0, 100.0), None);
        // Edges touching the window still count as visible.
        assert_eq!(direction_aware_target(100.0, 100.0, 200.0, 100.0), None);
    }

    #[test]
    fn item_past_trailing_edge_aligns_trailing() {
        assert_eq!(direction_aware_target(0.0, 250.0, 350.0, 100.0), Some(250.0));
    }

    #[test]
    fn item_before_leading_edge_aligns_leading() {
        assert_eq!(direction_aware_target(300.0, 100.0, 200.0, 100.0), Some(100.0));
    }
}
