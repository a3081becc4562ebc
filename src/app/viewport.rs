//! Terminal implementation of the layout metrics provider.
//!
//! The stack area is only known after layout, so the host pushes it in with
//! [`TerminalViewport::set_area`] whenever the terminal is resized.  A real
//! change fires the observer callback; an unchanged area does not.

use crate::core::metrics::{LayoutMetrics, LayoutMetricsProvider, Orientation, ResizeCallback};

/// Natural size of one item, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemBox {
    pub width: u16,
    pub height: u16,
}

#[derive(Default)]
pub struct TerminalViewport {
    area: Option<(u16, u16)>,
    items: Vec<ItemBox>,
    callback: Option<ResizeCallback>,
}

impl TerminalViewport {
    pub fn new(items: Vec<ItemBox>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Record the inner size of the stack pane.  Returns `true` when it
    /// changed (and observers were notified).
    pub fn set_area(&mut self, width: u16, height: u16) -> bool {
        if self.area == Some((width, height)) {
            return false;
        }
        self.area = Some((width, height));
        if let Some(cb) = self.callback.as_mut() {
            cb();
        }
        true
    }

    pub fn is_observed(&self) -> bool {
        self.callback.is_some()
    }
}

impl LayoutMetricsProvider for TerminalViewport {
    fn observe(&mut self, callback: ResizeCallback) {
        self.callback = Some(callback);
    }

    fn disconnect(&mut self) {
        self.callback = None;
    }

    fn measure(&self) -> Option<LayoutMetrics> {
        let (w, h) = self.area?;
        Some(LayoutMetrics::new(f64::from(w), f64::from(h)))
    }

    fn measure_item(&self, index: usize, orientation: Orientation) -> Option<f64> {
        let item = self.items.get(index)?;
        Some(f64::from(match orientation {
            Orientation::Horizontal => item.width,
            Orientation::Vertical => item.height,
        }))
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn unmeasured_until_area_is_set() {
        let vp = TerminalViewport::new(Vec::new());
        assert_eq!(vp.measure(), None);
    }

    #[test]
    fn resize_fires_only_on_change() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut vp = TerminalViewport::new(Vec::new());
        let counter = Arc::clone(&hits);
        vp.observe(Box::new(move || {
            counter.fetch_add(1, Ordering::Relaxed);
        }));

        assert!(vp.set_area(80, 20));
        assert!(!vp.set_area(80, 20));
        assert!(vp.set_area(100, 20));
        assert_eq!(hits.load(Ordering::Relaxed), 2);
        assert_eq!(vp.measure(), Some(LayoutMetrics::new(100.0, 20.0)));

        vp.disconnect();
        vp.set_area(10, 10);
        assert_eq!(hits.load(Ordering::Relaxed), 2);
        assert!(!vp.is_observed());
    }

    #[test]
    fn item_span_follows_orientation() {
        let vp = TerminalViewport::new(vec![ItemBox { width: 12, height: 4 }]);
        assert_eq!(vp.measure_item(0, Orientation::Horizontal), Some(12.0));
        assert_eq!(vp.measure_item(0, Orientation::Vertical), Some(4.0));
        assert_eq!(vp.measure_item(1, Orientation::Vertical), None);
        assert_eq!(vp.item_count(), 1);
    }
}
