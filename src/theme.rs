//! Theme module for wheel-tui
//!
//! This module provides a centralized color palette and styling constants
//! for the "fairground at night" look.

use ratatui::style::Color;
use ratatui::symbols::border;

// ============================================================================
// Background Colors - Night Sky Palette
// ============================================================================

/// Primary background color - deepest night blue (#0b0f1a)
pub const BG_PRIMARY: Color = Color::Rgb(11, 15, 26);

/// Secondary background color - cards and panels (#141a29)
pub const BG_SECONDARY: Color = Color::Rgb(20, 26, 41);

/// Tertiary background color - highlighted rows (#1e2638)
pub const BG_TERTIARY: Color = Color::Rgb(30, 38, 56);

/// Subtle border color (#2a3347)
pub const BORDER_SUBTLE: Color = Color::Rgb(42, 51, 71);

// ============================================================================
// Accent Colors
// ============================================================================

/// Primary accent - marquee gold (#fbbf24)
pub const GOLD_PRIMARY: Color = Color::Rgb(251, 191, 36);

/// Dimmed gold for secondary elements (#a17a14)
pub const GOLD_DIM: Color = Color::Rgb(161, 122, 20);

/// Pink accent used for the pointer and the winner (#f472b6)
pub const PINK_ACCENT: Color = Color::Rgb(244, 114, 182);

// ============================================================================
// Status Colors
// ============================================================================

/// Excluded name background (#4c1d24)
pub const RED_EXCLUDED_BG: Color = Color::Rgb(76, 29, 36);

/// Excluded name foreground (#f87171)
pub const RED_EXCLUDED: Color = Color::Rgb(248, 113, 113);

/// Green ready indicator (#4ade80)
pub const GREEN_READY: Color = Color::Rgb(74, 222, 128);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - bright white (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color - muted gray (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

// ============================================================================
// Wheel Segments
// ============================================================================

/// Colors cycled over the wheel slices
pub const SEGMENT_COLORS: [Color; 6] = [
    Color::Rgb(96, 165, 250),  // blue
    Color::Rgb(167, 139, 250), // violet
    Color::Rgb(244, 114, 182), // pink
    Color::Rgb(251, 146, 60),  // orange
    Color::Rgb(250, 204, 21),  // yellow
    Color::Rgb(52, 211, 153),  // green
];

/// Colors used by the fireworks overlay
pub const FIREWORK_COLORS: [Color; 4] = [
    Color::Rgb(251, 191, 36),
    Color::Rgb(244, 114, 182),
    Color::Rgb(96, 165, 250),
    Color::Rgb(74, 222, 128),
];

pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

pub fn segment_color(slot: usize) -> Color {
    SEGMENT_COLORS[slot % SEGMENT_COLORS.len()]
}

/// Alternate between two colors every few animation ticks
pub fn get_pulse_color(tick: u64, bright: Color, dim: Color) -> Color {
    if (tick / 4) % 2 == 0 { bright } else { dim }
}
