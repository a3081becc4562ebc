//! The stack orchestrator.
//!
//! [`ScrollStack`] owns the scroll state of one stack of items and reacts to
//! the host's mount / resize / focus / frame / unmount notifications.  It
//! composes the target math ([`super::target`]), the position store, and the
//! animator, and is the only writer of the scroll offset.

use std::time::{Duration, Instant};

use super::animator::{AnimationState, ScrollAnimator};
use super::frame::{start_frames, FrameScheduler, FrameTask};
use super::metrics::{Direction, ItemGeometry, LayoutMetricsProvider, Orientation, ResizeCallback};
use super::store::{NativeScroll, ScrollPositionStore};
use super::target;

/// Tolerance when checking whether focus geometry lies within the items.
const GEOMETRY_EPSILON: f64 = 1e-6;

// ───────────────────────────────────────── config ────────────

/// Options recognised by a stack.  Fixed for the lifetime of a layout;
/// replace it wholesale with [`ScrollStack::set_config`].
#[derive(Debug, Clone, PartialEq)]
pub struct StackConfig {
    pub orientation: Orientation,
    pub direction: Direction,
    /// Pre-measured item spans.  `None` means measure through the provider.
    pub item_spans: Option<Vec<f64>>,
    pub smooth_scrolling: bool,
    /// Extra span revealed past a focused item so its neighbour peeks in.
    pub next_item_peek: f64,
    pub scroll_duration: Duration,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            direction: Direction::Ltr,
            item_spans: None,
            smooth_scrolling: true,
            next_item_peek: 50.0,
            scroll_duration: Duration::from_millis(500),
        }
    }
}

// ───────────────────────────────────────── state ─────────────

/// Read-only snapshot of a stack's scroll state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub current_offset: f64,
    pub viewport_span: f64,
    pub max_scroll_distance: f64,
    pub is_animating: bool,
}

/// A scroll the orchestrator decided to perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub from: f64,
    pub to: f64,
}

// ───────────────────────────────────────── orchestrator ──────

pub struct ScrollStack<P, F> {
    config: StackConfig,
    provider: P,
    scheduler: F,
    store: ScrollPositionStore<NativeScroll>,
    animator: ScrollAnimator,
    frame_task: Option<FrameTask>,
    item_spans: Vec<f64>,
    viewport_span: f64,
    max_scroll: f64,
    mounted: bool,
}

impl<P: LayoutMetricsProvider, F: FrameScheduler> ScrollStack<P, F> {
    pub fn new(config: StackConfig, provider: P, scheduler: F) -> Self {
        let store = ScrollPositionStore::new(
            NativeScroll::default(),
            config.orientation,
            config.direction,
        );
        Self {
            config,
            provider,
            scheduler,
            store,
            animator: ScrollAnimator::new(),
            frame_task: None,
            item_spans: Vec::new(),
            viewport_span: 0.0,
            max_scroll: 0.0,
            mounted: false,
        }
    }

    // ── lifecycle ───────────────────────────────────────────────

    /// Attach to the provider and take the first measurements.
    ///
    /// `on_resize` is handed to the provider; it must arrange for
    /// [`ScrollStack::on_resize`] to be called on this stack.
    pub fn mount(&mut self, on_resize: ResizeCallback) {
        if self.mounted {
            self.provider.disconnect();
        }
        self.provider.observe(on_resize);
        self.mounted = true;
        self.recompute();
        tracing::debug!(
            viewport = self.viewport_span,
            max_scroll = self.max_scroll,
            items = self.item_spans.len(),
            "stack mounted"
        );
    }

    /// Detach from the provider and stop any in-flight animation.
    pub fn unmount(&mut self) {
        self.provider.disconnect();
        self.stop_animation();
        self.mounted = false;
    }

    /// Viewport changed size: re-measure and re-clamp without animating.
    pub fn on_resize(&mut self) {
        self.recompute();
        let current = self.store.get();
        let clamped = self.clamp_offset(current);
        if clamped != current {
            // An animation heading out of range would fight the clamp.
            self.stop_animation();
            self.store.set(clamped);
        }
        tracing::debug!(
            viewport = self.viewport_span,
            max_scroll = self.max_scroll,
            offset = clamped,
            "stack resized"
        );
    }

    /// Swap in a new configuration snapshot and re-evaluate.
    pub fn set_config(&mut self, config: StackConfig) {
        self.store.set_layout(config.orientation, config.direction);
        self.config = config;
        if !self.config.smooth_scrolling {
            self.stop_animation();
        }
        self.on_resize();
    }

    fn recompute(&mut self) {
        let orientation = self.config.orientation;
        self.item_spans = match &self.config.item_spans {
            Some(spans) => spans.clone(),
            None => (0..self.provider.item_count())
                .map(|i| self.provider.measure_item(i, orientation).unwrap_or(0.0))
                .collect(),
        };
        self.viewport_span = target::viewport_span(orientation, self.provider.measure());
        self.max_scroll = target::max_scroll_distance(&self.item_spans, self.viewport_span);
    }

    // ── focus ───────────────────────────────────────────────────

    /// An item received focus.  Scrolls it (plus the peek margin) into view
    /// when it is not already fully visible.
    pub fn on_item_focus(&mut self, geometry: ItemGeometry) -> Option<ScrollRequest> {
        if !self.tracks(&geometry) {
            tracing::debug!(?geometry, "focus outside tracked items ignored");
            return None;
        }
        if !self.needs_scrolling() {
            return None;
        }

        let peek = self.config.next_item_peek.max(0.0);
        let current = self.store.get();
        let target = target::direction_aware_target(
            current,
            geometry.leading - peek,
            geometry.trailing() + peek,
            self.viewport_span,
        )?;
        let to = self.clamp_offset(target);
        if to == current {
            return None;
        }

        let request = ScrollRequest { from: current, to };
        tracing::debug!(from = request.from, to = request.to, "scrolling focused item into view");
        self.scroll_content(request.from, request.to);
        Some(request)
    }

    /// Focus item `index` using the known spans.
    pub fn focus_item(&mut self, index: usize) -> Option<ScrollRequest> {
        let geometry = target::item_geometry(index, &self.item_spans)?;
        self.on_item_focus(geometry)
    }

    fn tracks(&self, geometry: &ItemGeometry) -> bool {
        if !geometry.leading.is_finite() || !geometry.span.is_finite() || geometry.span < 0.0 {
            return false;
        }
        let total = target::total_span(&self.item_spans);
        total > 0.0
            && geometry.leading >= -GEOMETRY_EPSILON
            && geometry.trailing() <= total + GEOMETRY_EPSILON
    }

    // ── scrolling ───────────────────────────────────────────────

    /// Align item `index`'s leading edge with the viewport's leading edge.
    pub fn scroll_to_item(&mut self, index: usize) -> Option<ScrollRequest> {
        if index >= self.item_spans.len() {
            return None;
        }
        let current = self.store.get();
        let to = self.clamp_offset(target::scroll_into_view_position(index, &self.item_spans));
        if to == current {
            return None;
        }
        self.scroll_content(current, to);
        Some(ScrollRequest { from: current, to })
    }

    /// Move from `from` to `to`, animated when smooth scrolling is on.
    /// Supersedes whatever animation was running.
    pub fn scroll_content(&mut self, from: f64, to: f64) {
        let from = self.clamp_offset(from);
        let to = self.clamp_offset(to);
        self.stop_animation();

        if self.config.smooth_scrolling
            && self
                .animator
                .start(from, to, self.config.scroll_duration, Instant::now())
        {
            self.store.set(from);
            self.frame_task = Some(start_frames(&mut self.scheduler));
            tracing::debug!(
                from,
                to,
                duration = ?self.config.scroll_duration,
                "scroll animation started"
            );
        } else {
            self.store.set(to);
        }
    }

    /// Immediate relative scroll (wheel, page keys).  Cancels animation.
    pub fn scroll_by(&mut self, delta: f64) {
        self.stop_animation();
        let to = self.clamp_offset(self.store.get() + delta);
        self.store.set(to);
    }

    /// Advance the running animation.  Returns `true` when the offset moved.
    pub fn on_animation_frame(&mut self, now: Instant) -> bool {
        let Some(offset) = self.animator.frame(now) else {
            self.cancel_frames();
            return false;
        };
        let offset = self.clamp_offset(offset);
        self.store.set(offset);
        if !self.animator.is_animating() {
            self.cancel_frames();
            tracing::debug!(offset, "scroll animation finished");
        }
        true
    }

    fn stop_animation(&mut self) {
        self.animator.stop();
        self.cancel_frames();
    }

    fn cancel_frames(&mut self) {
        if let Some(task) = self.frame_task.take() {
            task.cancel();
        }
    }

    fn clamp_offset(&self, offset: f64) -> f64 {
        if offset.is_finite() {
            offset.clamp(0.0, self.max_scroll)
        } else {
            0.0
        }
    }

    // ── accessors ───────────────────────────────────────────────

    /// `true` when the items overflow the viewport.
    pub fn needs_scrolling(&self) -> bool {
        self.max_scroll > 0.0
    }

    pub fn offset(&self) -> f64 {
        self.store.get()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    pub fn animation(&self) -> Option<&AnimationState> {
        self.animator.current()
    }

    pub fn state(&self) -> ScrollState {
        ScrollState {
            current_offset: self.store.get(),
            viewport_span: self.viewport_span,
            max_scroll_distance: self.max_scroll,
            is_animating: self.animator.is_animating(),
        }
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    pub fn item_spans(&self) -> &[f64] {
        &self.item_spans
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }
}
