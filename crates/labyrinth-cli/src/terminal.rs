//! Terminal styling and capability detection.
//!
//! This module provides ANSI escape code definitions and color detection
//! for maze rendering. It abstracts terminal capabilities so the renderers
//! only deal with a resolved [`ColorPalette`].

/// ANSI escape codes for maze cells.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Gray for walls.
    pub const GRAY: &str = "\x1b[90m";
    /// Bold green for the escape path.
    pub const GREEN_BOLD: &str = "\x1b[1;32m";
    /// Cyan for notices.
    pub const CYAN: &str = "\x1b[36m";
}

/// Resolved color codes, either ANSI sequences or empty strings when color
/// is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub wall: &'static str,
    pub path: &'static str,
    pub notice: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            wall: colors::GRAY,
            path: colors::GREEN_BOLD,
            notice: colors::CYAN,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            wall: "",
            path: "",
            notice: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Respects the `NO_COLOR` environment variable (https://no-color.org/) and
/// the `TERM=dumb` convention.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Check if the terminal supports Unicode block characters.
///
/// Looks for UTF hints in `LANG` and `LC_ALL`.
#[must_use]
pub fn supports_unicode() -> bool {
    for var in ["LC_ALL", "LANG"] {
        if let Ok(value) = std::env::var(var) {
            if value.to_uppercase().contains("UTF") {
                return true;
            }
        }
    }
    // On Windows, assume Unicode support unless TERM suggests otherwise
    #[cfg(windows)]
    {
        if let Ok(term) = std::env::var("TERM") {
            return !term.eq_ignore_ascii_case("dumb");
        }
        return true;
    }
    #[cfg(not(windows))]
    {
        false
    }
}
