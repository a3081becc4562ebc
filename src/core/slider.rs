//! Slider label placement.
//!
//! A label sits at a pixel position along its slider's track and is placed
//! as a pair of percentage insets.  The slider's configuration is pushed in
//! explicitly with [`SliderLabel::update`]; the label never inspects its
//! parent.

use super::metrics::{Direction, Orientation};

/// Snapshot of the parent slider's configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConfiguration {
    pub min: f64,
    pub max: f64,
    pub direction: Direction,
    pub orientation: Orientation,
    pub disabled: bool,
}

impl Default for SliderConfiguration {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 0.0,
            direction: Direction::Ltr,
            orientation: Orientation::Horizontal,
            disabled: false,
        }
    }
}

/// Fraction of the track covered at `position`, limited to `[0, 1]` and
/// mirrored for right-to-left sliders.
///
/// An indeterminate ratio (e.g. `min == max == position`) stays NaN so the
/// caller can detect it.
pub fn convert_pixel_to_percent(position: f64, min: f64, max: f64, direction: Direction) -> f64 {
    let ratio = (position - min) / (max - min);
    // f64::clamp propagates NaN, which is what we want here.
    let pct = ratio.clamp(0.0, 1.0);
    match direction {
        Direction::Rtl => 1.0 - pct,
        Direction::Ltr => pct,
    }
}

/// Which pair of sides the insets apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSides {
    LeftRight,
    RightLeft,
    TopBottom,
}

impl LabelSides {
    fn names(self) -> (&'static str, &'static str) {
        match self {
            LabelSides::LeftRight => ("left", "right"),
            LabelSides::RightLeft => ("right", "left"),
            LabelSides::TopBottom => ("top", "bottom"),
        }
    }
}

/// Computed placement of a label, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelPosition {
    pub leading_pct: i64,
    pub trailing_pct: i64,
    pub sides: LabelSides,
}

impl LabelPosition {
    /// Inline-style form, e.g. `left: 25%; right: 75%;`.
    pub fn to_style(&self) -> String {
        let (lead, trail) = self.sides.names();
        format!(
            "{lead}: {}%; {trail}: {}%;",
            self.leading_pct, self.trailing_pct
        )
    }
}

/// A label attached to a slider.
#[derive(Debug, Clone)]
pub struct SliderLabel {
    position: f64,
    config: SliderConfiguration,
    hide_mark: bool,
}

impl SliderLabel {
    pub fn new(position: f64, config: SliderConfiguration) -> Self {
        Self {
            position,
            config,
            hide_mark: false,
        }
    }

    pub fn with_hidden_mark(mut self, hide: bool) -> Self {
        self.hide_mark = hide;
        self
    }

    /// Replace the slider configuration snapshot.
    pub fn update(&mut self, config: SliderConfiguration) {
        tracing::debug!(
            min = config.min,
            max = config.max,
            orientation = config.orientation.label(),
            direction = config.direction.label(),
            "slider label config updated"
        );
        self.config = config;
    }

    pub fn set_position(&mut self, position: f64) {
        self.position = position;
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    pub fn hides_mark(&self) -> bool {
        self.hide_mark
    }

    pub fn position(&self) -> LabelPosition {
        // Rtl is expressed by swapping side names below, so the fraction
        // itself is never mirrored here.
        let pct = convert_pixel_to_percent(
            self.position,
            self.config.min,
            self.config.max,
            Direction::Ltr,
        );
        let (leading_pct, trailing_pct) = if pct.is_nan() {
            (50, 50)
        } else {
            (
                round_half_up(pct * 100.0),
                round_half_up((1.0 - pct) * 100.0),
            )
        };

        let sides = match (self.config.orientation, self.config.direction) {
            (Orientation::Vertical, _) => LabelSides::TopBottom,
            (Orientation::Horizontal, Direction::Rtl) => LabelSides::RightLeft,
            (Orientation::Horizontal, Direction::Ltr) => LabelSides::LeftRight,
        };
        LabelPosition {
            leading_pct,
            trailing_pct,
            sides,
        }
    }

    pub fn style(&self) -> String {
        self.position().to_style()
    }
}

/// Rounds .5 towards +∞, matching how percentages are rounded for display.
fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(min: f64, max: f64) -> SliderConfiguration {
        SliderConfiguration {
            min,
            max,
            ..Default::default()
        }
    }

    #[test]
    fn percent_is_limited_to_track() {
        assert_eq!(convert_pixel_to_percent(25.0, 0.0, 100.0, Direction::Ltr), 0.25);
        assert_eq!(convert_pixel_to_percent(-10.0, 0.0, 100.0, Direction::Ltr), 0.0);
        assert_eq!(convert_pixel_to_percent(150.0, 0.0, 100.0, Direction::Ltr), 1.0);
        assert_eq!(convert_pixel_to_percent(25.0, 0.0, 100.0, Direction::Rtl), 0.75);
    }

    #[test]
    fn indeterminate_ratio_stays_nan() {
        assert!(convert_pixel_to_percent(0.0, 0.0, 0.0, Direction::Ltr).is_nan());
    }

    #[test]
    fn horizontal_ltr_style() {
        let label = SliderLabel::new(25.0, config(0.0, 100.0));
        assert_eq!(label.style(), "left: 25%; right: 75%;");
    }

    #[test]
    fn horizontal_rtl_swaps_sides() {
        let cfg = SliderConfiguration {
            direction: Direction::Rtl,
            ..config(0.0, 100.0)
        };
        let label = SliderLabel::new(25.0, cfg);
        assert_eq!(label.style(), "right: 25%; left: 75%;");
    }

    #[test]
    fn vertical_uses_top_bottom() {
        let cfg = SliderConfiguration {
            orientation: Orientation::Vertical,
            ..config(0.0, 10.0)
        };
        let label = SliderLabel::new(3.0, cfg);
        assert_eq!(label.style(), "top: 30%; bottom: 70%;");
    }

    #[test]
    fn default_config_falls_back_to_center() {
        let label = SliderLabel::new(0.0, SliderConfiguration::default());
        let pos = label.position();
        assert_eq!((pos.leading_pct, pos.trailing_pct), (50, 50));
        assert_eq!(label.style(), "left: 50%; right: 50%;");
    }

    #[test]
    fn non_numeric_position_falls_back_to_center() {
        let label = SliderLabel::new(f64::NAN, config(0.0, 100.0));
        assert_eq!(label.position().leading_pct, 50);
    }

    #[test]
    fn update_replaces_snapshot() {
        let mut label = SliderLabel::new(50.0, config(0.0, 100.0));
        assert_eq!(label.position().leading_pct, 50);
        label.update(SliderConfiguration {
            disabled: true,
            ..config(0.0, 200.0)
        });
        assert_eq!(label.position().leading_pct, 25);
        assert!(label.is_disabled());
        label.set_position(200.0);
        assert_eq!(label.style(), "left: 100%; right: 0%;");
    }
}
