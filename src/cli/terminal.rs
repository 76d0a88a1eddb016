//! Terminal colour and width handling

use std::fmt::Display;

use owo_colors::{colors::css, OwoColorize};

/// Below this many columns, tables are printed as stacked lines.
const NARROW_COLUMNS: u16 = 60;

/// Whether stdout can render colours.
fn color_enabled() -> bool {
    supports_color::on_cached(supports_color::Stream::Stdout).is_some()
}

/// Whether the terminal is too narrow for tabular output.
pub fn is_narrow() -> bool {
    terminal_size::terminal_size().is_some_and(|(width, _)| width.0 < NARROW_COLUMNS)
}

/// Colours for verdicts and secondary text.
///
/// Falls back to plain text when colour is unsupported.
pub trait Paint: Display + Sized {
    /// Green, for viable enclosures
    fn accepted(&self) -> String {
        if color_enabled() {
            self.fg::<css::Green>().to_string()
        } else {
            self.to_string()
        }
    }

    /// Orange, for rejected enclosures
    fn rejected(&self) -> String {
        if color_enabled() {
            self.fg::<css::Orange>().to_string()
        } else {
            self.to_string()
        }
    }

    /// Dimmed
    fn muted(&self) -> String {
        if color_enabled() {
            self.dimmed().to_string()
        } else {
            self.to_string()
        }
    }
}

impl<T: Display> Paint for T {}
