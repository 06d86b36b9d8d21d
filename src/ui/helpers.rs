//! UI helper functions

use ratatui::layout::Rect;

/// Truncate to at most `max_chars` characters, marking the cut with "…"
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    // Safely truncate using character boundaries
    let truncated: String = text.chars().take(max_chars - 1).collect();
    format!("{}…", truncated)
}

/// Rectangle of `width_percent` of `area`'s width and `height` rows,
/// centred in `area`
pub fn centered_rect(width_percent: u16, height: u16, area: Rect) -> Rect {
    let width = (area.width as u32 * width_percent.min(100) as u32 / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Canvas bounds that keep a circle of `radius` round inside `area`.
/// Terminal cells are roughly twice as tall as they are wide.
pub fn round_bounds(area: Rect, radius: f64) -> ([f64; 2], [f64; 2]) {
    let width = area.width.max(1) as f64 * 0.5;
    let height = area.height.max(1) as f64;
    let ratio = width / height;
    if ratio >= 1.0 {
        ([-radius * ratio, radius * ratio], [-radius, radius])
    } else {
        ([-radius, radius], [-radius / ratio, radius / ratio])
    }
}
