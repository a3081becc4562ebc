//! Scroll position store – reads and writes the offset of the underlying
//! scrollable region in direction-agnostic terms.
//!
//! Right-to-left horizontal regions report their native offset as a
//! negative (or mirrored) number.  Callers of [`ScrollPositionStore`] only
//! ever see "distance scrolled from the start", which is never negative.

use super::metrics::{Direction, Orientation};

/// The host's scrollable region, in its native coordinates.
pub trait ScrollRegion {
    fn native_offset(&self) -> f64;
    fn set_native_offset(&mut self, offset: f64);
}

/// In-memory region.  The terminal host renders from this directly.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NativeScroll {
    offset: f64,
}

impl ScrollRegion for NativeScroll {
    fn native_offset(&self) -> f64 {
        self.offset
    }

    fn set_native_offset(&mut self, offset: f64) {
        self.offset = offset;
    }
}

/// Direction-aware view over a [`ScrollRegion`].
#[derive(Debug, Clone)]
pub struct ScrollPositionStore<R: ScrollRegion = NativeScroll> {
    region: R,
    orientation: Orientation,
    direction: Direction,
}

impl<R: ScrollRegion> ScrollPositionStore<R> {
    pub fn new(region: R, orientation: Orientation, direction: Direction) -> Self {
        Self {
            region,
            orientation,
            direction,
        }
    }

    pub fn set_layout(&mut self, orientation: Orientation, direction: Direction) {
        let current = self.get();
        self.orientation = orientation;
        self.direction = direction;
        self.set(current);
    }

    /// `true` when native offsets run opposite to logical ones.
    fn mirrored(&self) -> bool {
        self.orientation == Orientation::Horizontal && self.direction == Direction::Rtl
    }

    /// Distance scrolled from the start of the stack.
    pub fn get(&self) -> f64 {
        let native = self.region.native_offset();
        if self.mirrored() {
            native.abs()
        } else {
            native
        }
    }

    pub fn set(&mut self, offset: f64) {
        let native = if self.mirrored() { -offset } else { offset };
        self.region.set_native_offset(native);
    }

    pub fn region(&self) -> &R {
        &self.region
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(orientation: Orientation, direction: Direction) -> ScrollPositionStore {
        ScrollPositionStore::new(NativeScroll::default(), orientation, direction)
    }

    #[test]
    fn ltr_round_trip() {
        let mut s = store(Orientation::Horizontal, Direction::Ltr);
        assert_eq!(s.get(), 0.0);
        s.set(100.0);
        assert_eq!(s.get(), 100.0);
        assert_eq!(s.region().native_offset(), 100.0);
    }

    #[test]
    fn rtl_round_trip_uses_negative_native_offsets() {
        let mut s = store(Orientation::Horizontal, Direction::Rtl);
        assert_eq!(s.get(), 0.0);
        for x in [0.0, 1.5, 100.0, 2470.0] {
            s.set(x);
            assert_eq!(s.get(), x);
        }
        assert_eq!(s.region().native_offset(), -2470.0);
    }

    #[test]
    fn rtl_is_ignored_for_vertical_stacks() {
        let mut s = store(Orientation::Vertical, Direction::Rtl);
        s.set(40.0);
        assert_eq!(s.region().native_offset(), 40.0);
        assert_eq!(s.get(), 40.0);
    }

    #[test]
    fn switching_direction_keeps_logical_offset() {
        let mut s = store(Orientation::Horizontal, Direction::Ltr);
        s.set(75.0);
        s.set_layout(Orientation::Horizontal, Direction::Rtl);
        assert_eq!(s.get(), 75.0);
        assert_eq!(s.region().native_offset(), -75.0);
    }
}
