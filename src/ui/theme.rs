//! Color theme constants for the catalog UI.

use ratatui::style::Color;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the list that has focus
pub const COLOR_BORDER_FOCUSED: Color = Color::White;

/// Heading text
pub const COLOR_HEADER: Color = Color::White;

/// Highlighted row
pub const COLOR_ACCENT: Color = Color::LightGreen;

/// Dim text for placeholders and hints
pub const COLOR_DIM: Color = Color::DarkGray;

/// Fallback line of a list that failed to load
pub const COLOR_ERROR: Color = Color::Red;
