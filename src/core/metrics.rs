//! Layout vocabulary shared by the engine and its hosts.
//!
//! The engine never measures anything itself.  A host implements
//! [`LayoutMetricsProvider`] and the orchestrator consults it read-only.

/// Axis along which items are stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn label(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "horizontal" | "h" => Some(Orientation::Horizontal),
            "vertical" | "v" => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

/// Text direction.  Only changes behaviour for horizontal stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ltr" => Some(Direction::Ltr),
            "rtl" => Some(Direction::Rtl),
            _ => None,
        }
    }
}

/// Size of the viewport as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutMetrics {
    pub width: f64,
    pub height: f64,
}

impl LayoutMetrics {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Position of a focused item along the stacking axis, relative to the
/// stack's coordinate origin (not to the current scroll offset).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemGeometry {
    /// Distance from the origin to the item's leading edge.
    pub leading: f64,
    /// Extent of the item along the axis.
    pub span: f64,
}

impl ItemGeometry {
    pub fn new(leading: f64, span: f64) -> Self {
        Self { leading, span }
    }

    pub fn trailing(&self) -> f64 {
        self.leading + self.span
    }
}

/// Callback fired by a provider when the viewport changes size.
pub type ResizeCallback = Box<dyn FnMut() + Send>;

/// Host capability that measures the viewport and reports resizes.
///
/// `measure` is called synchronously whenever the orchestrator needs a
/// current span; `callback` passed to `observe` fires whenever the viewport
/// size changes, after which the orchestrator expects `on_resize` to be
/// delivered to it.
pub trait LayoutMetricsProvider {
    /// Start reporting viewport size changes through `callback`.
    fn observe(&mut self, callback: ResizeCallback);

    /// Stop reporting.  Must tolerate being called when not observing.
    fn disconnect(&mut self);

    /// Current viewport size, or `None` when nothing is laid out yet.
    fn measure(&self) -> Option<LayoutMetrics>;

    /// Live span of item `index` along `orientation`, for stacks without
    /// pre-measured spans.
    fn measure_item(&self, _index: usize, _orientation: Orientation) -> Option<f64> {
        None
    }

    /// Number of items the host has laid out, when it measures live.
    fn item_count(&self) -> usize {
        0
    }
}
