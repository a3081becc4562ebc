//! User configuration – stack options, key bindings, and persistence.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/stack-scroll/config.toml` (default
//! `~/.config/stack-scroll/config.toml`).  Unknown keys and bad values are
//! skipped with a warning; loading never fails.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

use crate::core::{Direction, Orientation, StackConfig};

/// Problems found while reading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("unknown setting `{0}`")]
    UnknownKey(String),
    #[error("config file I/O: {0}")]
    Io(#[from] std::io::Error),
}

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions in the stack view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    FocusNext,
    FocusPrev,
    FocusFirst,
    FocusLast,
    PageForward,
    PageBack,
    ToggleSmooth,
    ToggleOrientation,
    ToggleDirection,
    Quit,
}

impl Action {
    pub const ALL: &[Action] = &[
        Action::FocusNext,
        Action::FocusPrev,
        Action::FocusFirst,
        Action::FocusLast,
        Action::PageForward,
        Action::PageBack,
        Action::ToggleSmooth,
        Action::ToggleOrientation,
        Action::ToggleDirection,
        Action::Quit,
    ];

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::FocusNext => "focus_next",
            Action::FocusPrev => "focus_prev",
            Action::FocusFirst => "focus_first",
            Action::FocusLast => "focus_last",
            Action::PageForward => "page_forward",
            Action::PageBack => "page_back",
            Action::ToggleSmooth => "toggle_smooth",
            Action::ToggleOrientation => "toggle_orientation",
            Action::ToggleDirection => "toggle_direction",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Action::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding – key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

const MODIFIER_MASK: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::ALT)
    .union(KeyModifiers::SHIFT);

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Only CTRL/ALT/SHIFT are compared.
    pub fn matches(&self, event: KeyEvent) -> bool {
        self.code == event.code
            && (self.modifiers & MODIFIER_MASK) == (event.modifiers & MODIFIER_MASK)
    }

    /// Short form for the status bar (e.g. `"Alt+→"`).
    pub fn display(&self) -> String {
        self.render(true)
    }

    fn to_config_string(&self) -> String {
        self.render(false)
    }

    fn render(&self, pretty: bool) -> String {
        let mut s = String::new();
        for (flag, name) in [
            (KeyModifiers::CONTROL, "Ctrl+"),
            (KeyModifiers::ALT, "Alt+"),
            (KeyModifiers::SHIFT, "Shift+"),
        ] {
            if self.modifiers.contains(flag) {
                s.push_str(name);
            }
        }
        let key = match (self.code, pretty) {
            (KeyCode::Char(' '), _) => "Space".to_string(),
            (KeyCode::Char(c), _) => c.to_string(),
            (KeyCode::Up, true) => "↑".into(),
            (KeyCode::Down, true) => "↓".into(),
            (KeyCode::Left, true) => "←".into(),
            (KeyCode::Right, true) => "→".into(),
            (KeyCode::Up, false) => "Up".into(),
            (KeyCode::Down, false) => "Down".into(),
            (KeyCode::Left, false) => "Left".into(),
            (KeyCode::Right, false) => "Right".into(),
            (KeyCode::Enter, _) => "Enter".into(),
            (KeyCode::Esc, _) => "Esc".into(),
            (KeyCode::Tab, _) => "Tab".into(),
            (KeyCode::BackTab, _) => "BackTab".into(),
            (KeyCode::Home, _) => "Home".into(),
            (KeyCode::End, _) => "End".into(),
            (KeyCode::PageUp, _) => "PageUp".into(),
            (KeyCode::PageDown, _) => "PageDown".into(),
            (KeyCode::F(n), _) => format!("F{n}"),
            (other, _) => format!("{other:?}"),
        };
        s.push_str(&key);
        s
    }

    /// Parse a key string like `"Ctrl+c"`, `"Alt+Up"`, `"q"`, `"PageDown"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let (key_part, mods) = parts.split_last()?;

        for part in mods {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            k if k.starts_with('f') && k.len() > 1 => KeyCode::F(k[1..].parse().ok()?),
            _ => {
                let mut chars = key_part.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                KeyCode::Char(c)
            }
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── limits ────────────

/// Most demo items a host will generate.
pub const MAX_ITEM_COUNT: usize = 500;

/// Longest accepted scroll animation, in milliseconds.
pub const MAX_SCROLL_DURATION_MS: u64 = 10_000;

/// Limit a requested item count to `1..=MAX_ITEM_COUNT`.
pub fn clamp_item_count(n: usize) -> usize {
    n.clamp(1, MAX_ITEM_COUNT)
}

pub fn clamp_scroll_duration(ms: u64) -> Duration {
    Duration::from_millis(ms.min(MAX_SCROLL_DURATION_MS))
}

// ───────────────────────────────────────── config ────────────

/// Application configuration – the stack's options plus host settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    pub stack: StackConfig,
    /// Number of generated demo items when no spans are configured.
    pub item_count: usize,
    /// Cadence of animation frames.
    pub frame_interval: Duration,
    /// Draw the thumb on the scroll slider.
    pub show_slider_mark: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            stack: StackConfig {
                // Terminal cells, not pixels.
                next_item_peek: 2.0,
                ..StackConfig::default()
            },
            item_count: 12,
            frame_interval: Duration::from_millis(16),
            show_slider_mark: true,
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let shift = KeyModifiers::SHIFT;
        let mut m = HashMap::new();

        m.insert(
            FocusNext,
            vec![
                KeyBind::new(Right, n),
                KeyBind::new(Down, n),
                KeyBind::new(Tab, n),
                KeyBind::new(Char('l'), n),
            ],
        );
        m.insert(
            FocusPrev,
            vec![
                KeyBind::new(Left, n),
                KeyBind::new(Up, n),
                KeyBind::new(BackTab, shift),
                KeyBind::new(Char('h'), n),
            ],
        );
        m.insert(FocusFirst, vec![KeyBind::new(Home, n)]);
        m.insert(FocusLast, vec![KeyBind::new(End, n)]);
        m.insert(PageForward, vec![KeyBind::new(PageDown, n)]);
        m.insert(PageBack, vec![KeyBind::new(PageUp, n)]);
        m.insert(ToggleSmooth, vec![KeyBind::new(Char('s'), n)]);
        m.insert(ToggleOrientation, vec![KeyBind::new(Char('o'), n)]);
        m.insert(ToggleDirection, vec![KeyBind::new(Char('d'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n), KeyBind::new(Esc, n)]);

        m
    }

    /// Find the action bound to a key event.  The binding with the most
    /// modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .flat_map(|(&action, binds)| binds.iter().map(move |b| (action, b)))
            .filter(|(_, b)| b.matches(event))
            .max_by_key(|(_, b)| b.modifiers.bits().count_ones())
            .map(|(action, _)| action)
    }

    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Status-bar hint built from the current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}/{}: focus | {}: smooth | {}: orientation | {}: direction | {}: quit",
            self.short_binding(Action::FocusPrev),
            self.short_binding(Action::FocusNext),
            self.short_binding(Action::ToggleSmooth),
            self.short_binding(Action::ToggleOrientation),
            self.short_binding(Action::ToggleDirection),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!("{}: {}", path.display(), ConfigError::from(e));
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(())
    }

    /// Parse config text.  Bad lines are logged and skipped.
    pub fn parse(s: &str) -> Self {
        let mut config = Self::default();
        for (lineno, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                tracing::warn!("config line {}: expected `key = value`", lineno + 1);
                continue;
            };
            if let Err(e) = config.apply(key.trim(), value.trim()) {
                tracing::warn!("config line {}: {e}", lineno + 1);
            }
        }
        config
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        let value = value.trim_matches('"');

        match key {
            "orientation" => {
                self.stack.orientation = Orientation::parse(value).ok_or_else(invalid)?;
            }
            "direction" => self.stack.direction = Direction::parse(value).ok_or_else(invalid)?,
            "item_spans" => self.stack.item_spans = Some(parse_spans(value).ok_or_else(invalid)?),
            "smooth_scrolling" => {
                self.stack.smooth_scrolling = value.parse().map_err(|_| invalid())?;
            }
            "slider_mark" => self.show_slider_mark = value.parse().map_err(|_| invalid())?,
            "next_item_peek" => {
                let peek: f64 = value.parse().map_err(|_| invalid())?;
                if !peek.is_finite() || peek < 0.0 {
                    return Err(invalid());
                }
                self.stack.next_item_peek = peek;
            }
            "scroll_duration_ms" => {
                let ms: u64 = value.parse().map_err(|_| invalid())?;
                self.stack.scroll_duration = clamp_scroll_duration(ms);
            }
            "item_count" => {
                let n: usize = value.parse().map_err(|_| invalid())?;
                self.item_count = clamp_item_count(n);
            }
            "frame_interval_ms" => {
                let ms: u64 = value.parse().map_err(|_| invalid())?;
                self.frame_interval = Duration::from_millis(ms.clamp(4, 200));
            }
            _ => {
                let action = Action::from_config_key(key)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let parsed: Vec<KeyBind> = value
                    .split(',')
                    .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                    .collect();
                if parsed.is_empty() {
                    return Err(invalid());
                }
                self.bindings.insert(action, parsed);
            }
        }
        Ok(())
    }

    pub fn serialise(&self) -> String {
        let spans = match &self.stack.item_spans {
            Some(spans) => format!(
                "item_spans = {}",
                spans.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(", ")
            ),
            None => "# item_spans = 12, 18, 24   (omit to measure items live)".to_string(),
        };
        let mut lines = vec![
            "# stack-scroll configuration".to_string(),
            String::new(),
            "# Stack".to_string(),
            format!("orientation = {}", self.stack.orientation.label()),
            format!("direction = {}", self.stack.direction.label()),
            spans,
            format!("smooth_scrolling = {}", self.stack.smooth_scrolling),
            format!("next_item_peek = {}", self.stack.next_item_peek),
            format!("scroll_duration_ms = {}", self.stack.scroll_duration.as_millis()),
            format!("item_count = {}", self.item_count),
            format!("frame_interval_ms = {}", self.frame_interval.as_millis()),
            format!("slider_mark = {}", self.show_slider_mark),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Parse `"12, 18, 24"` into spans.  Every entry must be a finite,
/// non-negative number.
pub fn parse_spans(value: &str) -> Option<Vec<f64>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0))
        .collect()
}

/// Return the config file path (`$XDG_CONFIG_HOME/stack-scroll/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("stack-scroll").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn parses_stack_options() {
        let cfg = AppConfig::parse(
            "orientation = vertical\n\
             direction = rtl\n\
             item_spans = 120, 180, 240\n\
             smooth_scrolling = false\n\
             next_item_peek = 0\n\
             scroll_duration_ms = 250\n",
        );
        assert_eq!(cfg.stack.orientation, Orientation::Vertical);
        assert_eq!(cfg.stack.direction, Direction::Rtl);
        assert_eq!(cfg.stack.item_spans, Some(vec![120.0, 180.0, 240.0]));
        assert!(!cfg.stack.smooth_scrolling);
        assert_eq!(cfg.stack.next_item_peek, 0.0);
        assert_eq!(cfg.stack.scroll_duration, Duration::from_millis(250));
    }

    #[test]
    fn bad_values_keep_defaults() {
        let cfg = AppConfig::parse(
            "orientation = diagonal\n\
             item_spans = 1, -2\n\
             next_item_peek = nan\n\
             mystery = 4\n\
             not a pair\n",
        );
        let defaults = AppConfig::default();
        assert_eq!(cfg.stack, defaults.stack);
    }

    #[test]
    fn apply_reports_typed_errors() {
        let mut cfg = AppConfig::default();
        assert!(matches!(
            cfg.apply("direction", "sideways"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(cfg.apply("bogus", "1"), Err(ConfigError::UnknownKey(_))));
    }

    #[test]
    fn rebinding_from_file() {
        let cfg = AppConfig::parse("quit = Ctrl+x, F10\n");
        assert_eq!(
            cfg.match_key(key(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(cfg.match_key(key(KeyCode::F(10), KeyModifiers::NONE)), Some(Action::Quit));
        assert_eq!(cfg.match_key(key(KeyCode::Char('q'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn serialise_round_trips() {
        let mut cfg = AppConfig::default();
        cfg.stack.orientation = Orientation::Vertical;
        cfg.stack.item_spans = Some(vec![3.0, 4.5]);
        cfg.show_slider_mark = false;
        cfg.bindings.insert(
            Action::ToggleSmooth,
            vec![KeyBind::new(KeyCode::Char('m'), KeyModifiers::ALT)],
        );

        let back = AppConfig::parse(&cfg.serialise());
        assert_eq!(back.stack, cfg.stack);
        assert_eq!(back.bindings, cfg.bindings);
        assert_eq!(back.item_count, cfg.item_count);
        assert!(!back.show_slider_mark);
    }

    #[test]
    fn default_keys_map_to_actions() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.match_key(key(KeyCode::Right, KeyModifiers::NONE)), Some(Action::FocusNext));
        assert_eq!(
            cfg.match_key(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(Action::FocusPrev)
        );
        assert_eq!(cfg.match_key(key(KeyCode::Char('z'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn counts_and_durations_are_limited() {
        let cfg = AppConfig::parse("item_count = 99999999\nscroll_duration_ms = 60000\n");
        assert_eq!(cfg.item_count, MAX_ITEM_COUNT);
        assert_eq!(cfg.stack.scroll_duration, Duration::from_millis(MAX_SCROLL_DURATION_MS));

        assert_eq!(clamp_item_count(0), 1);
        assert_eq!(clamp_item_count(usize::MAX), MAX_ITEM_COUNT);
        assert_eq!(clamp_scroll_duration(250), Duration::from_millis(250));
        assert_eq!(clamp_scroll_duration(u64::MAX), Duration::from_millis(MAX_SCROLL_DURATION_MS));
    }
}
