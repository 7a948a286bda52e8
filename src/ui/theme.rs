//! Color theme constants for the dashboard.

use ratatui::style::Color;

// ============================================================================
// Chrome
// ============================================================================

/// Borders around the body
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Header text
pub const COLOR_HEADER: Color = Color::White;

/// Secondary header text (sort mode, hints)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background of the selected row
pub const COLOR_SELECTION_BG: Color = Color::Rgb(30, 40, 60);

// ============================================================================
// Status line
// ============================================================================

/// Progress and success messages
pub const COLOR_STATUS: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Failure messages (those starting with "Error")
pub const COLOR_ERROR: Color = Color::Red;

// ============================================================================
// Rows
// ============================================================================

/// Running containers, ready nodes
pub const COLOR_RUNNING: Color = Color::LightGreen;

/// Stopped containers, dangling images
pub const COLOR_STOPPED: Color = Color::Gray;
