//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme – change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── stack ──────────────────────────────────────────────────
    pub fn item_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn focused_item_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    // ── slider ─────────────────────────────────────────────────
    pub fn track_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn thumb_style() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    /// Border used while the items overflow the viewport.
    pub fn scrolling_border_style() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
