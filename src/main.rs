//! Terminal demo for the stack scroll engine.
//!
//! Renders a stack of items, moves focus with keys or the mouse, and lets
//! the engine smooth-scroll the focused item into view.
//! Run with `--print-config` to dump the effective configuration.

use std::io::{self, stderr};
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, widgets::Paragraph, Terminal};
use tokio::sync::mpsc;

use stack_scroll::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use stack_scroll::config::{clamp_item_count, clamp_scroll_duration, parse_spans, AppConfig};
use stack_scroll::core::{Direction, Orientation};
use stack_scroll::ui::{
    layout::AppLayout, slider_bar::SliderBar, stack_widget::StackWidget, theme::Theme,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Smooth-scrolling item stack demo")]
struct Cli {
    /// Stack items top to bottom instead of left to right.
    #[arg(long)]
    vertical: bool,

    /// Lay horizontal stacks out right to left.
    #[arg(long)]
    rtl: bool,

    /// Pre-measured item spans in cells, e.g. `12,18,24`.
    #[arg(long)]
    spans: Option<String>,

    /// Number of generated items when no spans are given.
    #[arg(long)]
    items: Option<usize>,

    /// Jump instead of animating.
    #[arg(long = "no-smooth")]
    no_smooth: bool,

    /// Cells of the next item to reveal past the focused one.
    #[arg(long)]
    peek: Option<f64>,

    /// Scroll animation length in milliseconds.
    #[arg(long = "duration-ms")]
    duration_ms: Option<u64>,

    /// Print the effective configuration and exit.
    #[arg(long = "print-config")]
    print_config: bool,

    /// Write the effective configuration to the config file.
    #[arg(long = "save-config")]
    save_config: bool,
}

impl Cli {
    /// Command-line flags win over the config file.  Values go through the
    /// same limits as the config file; this runs before the terminal is set up.
    fn apply(&self, config: &mut AppConfig) -> Result<()> {
        if self.vertical {
            config.stack.orientation = Orientation::Vertical;
        }
        if self.rtl {
            config.stack.direction = Direction::Rtl;
        }
        if let Some(spans) = &self.spans {
            let Some(parsed) = parse_spans(spans) else {
                bail!("--spans: expected comma-separated non-negative numbers, got {spans:?}");
            };
            config.stack.item_spans = Some(parsed);
        }
        if let Some(n) = self.items {
            config.item_count = clamp_item_count(n);
        }
        if self.no_smooth {
            config.stack.smooth_scrolling = false;
        }
        if let Some(peek) = self.peek {
            if !peek.is_finite() || peek < 0.0 {
                bail!("--peek must be a non-negative number");
            }
            config.stack.next_item_peek = peek;
        }
        if let Some(ms) = self.duration_ms {
            config.stack.scroll_duration = clamp_scroll_duration(ms);
        }
        Ok(())
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load();
    cli.apply(&mut config)?;

    if cli.print_config {
        print!("{}", config.serialise());
        return Ok(());
    }
    if cli.save_config {
        config.save()?;
    }

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    // ── channels + stack ──────────────────────────────────────
    let (tx, mut events) = mpsc::unbounded_channel::<AppEvent>();
    spawn_event_reader(Duration::from_millis(100), tx.clone());

    let mut state = AppState::new(config, tx.clone());
    let size = terminal.size()?;
    state.set_terminal_area(Rect::new(0, 0, size.width, size.height));

    let resize_tx = tx.clone();
    state.stack.mount(Box::new(move || {
        let _ = resize_tx.send(AppEvent::ViewportResized);
    }));
    state.focus(0);

    // ── event loop ────────────────────────────────────────────
    loop {
        terminal.draw(|frame| {
            let layout = AppLayout::from_area(frame.area());
            let cfg = state.stack.config();

            let spans = state.stack.item_spans();
            let stack = StackWidget::new(&state.items, spans, state.stack.offset())
                .focused(state.focused)
                .layout(cfg.orientation, cfg.direction)
                .scrolling(state.stack.needs_scrolling());
            frame.render_widget(stack, layout.stack_area);

            frame.render_widget(
                SliderBar::for_scroll(&state.stack.state(), cfg.direction)
                    .hide_mark(!state.config.show_slider_mark),
                layout.slider_area,
            );

            let hint = state.config.status_bar_hint();
            let status_text = state.status_message.as_deref().unwrap_or(&hint);
            frame.render_widget(
                Paragraph::new(status_text).style(Theme::status_bar_style()),
                layout.status_area,
            );
        })?;

        let Some(event) = events.recv().await else {
            break;
        };
        match event {
            AppEvent::Key(k) => handler::handle_key(&mut state, k),
            AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
            AppEvent::Resize(w, h) => state.set_terminal_area(Rect::new(0, 0, w, h)),
            AppEvent::ViewportResized => state.stack.on_resize(),
            AppEvent::Frame => {
                state.stack.on_animation_frame(Instant::now());
            }
            AppEvent::Tick => {}
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    state.stack.unmount();
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stack_scroll::config::{MAX_ITEM_COUNT, MAX_SCROLL_DURATION_MS};

    fn apply(args: &[&str]) -> Result<AppConfig> {
        let argv = std::iter::once("stack-scroll").chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv)?;
        let mut config = AppConfig::default();
        cli.apply(&mut config)?;
        Ok(config)
    }

    #[test]
    fn flags_override_the_config() {
        let args = ["--vertical", "--rtl", "--no-smooth", "--peek", "3", "--spans", "4,5"];
        let config = apply(&args).unwrap();
        assert_eq!(config.stack.orientation, Orientation::Vertical);
        assert_eq!(config.stack.direction, Direction::Rtl);
        assert!(!config.stack.smooth_scrolling);
        assert_eq!(config.stack.next_item_peek, 3.0);
        assert_eq!(config.stack.item_spans, Some(vec![4.0, 5.0]));
    }

    #[test]
    fn oversized_flags_are_limited() {
        let huge = u64::MAX.to_string();
        let config = apply(&["--items", &huge, "--duration-ms", &huge]).unwrap();
        assert_eq!(config.item_count, MAX_ITEM_COUNT);
        assert_eq!(config.stack.scroll_duration, Duration::from_millis(MAX_SCROLL_DURATION_MS));

        let config = apply(&["--items", "0"]).unwrap();
        assert_eq!(config.item_count, 1);
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(apply(&["--spans", "4,-1"]).is_err());
        assert!(apply(&["--peek", "-2"]).is_err());
    }
}
