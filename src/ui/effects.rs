//! Snow and fireworks overlays.
//!
//! Both are drawn last, straight into the frame buffer, and only onto
//! blank cells so they never hide text.

use std::time::Instant;

use ratatui::prelude::*;

use crate::effects::Celebration;
use crate::theme::{FIREWORK_COLORS, TEXT_PRIMARY};

const SNOWFLAKES: u64 = 50;

/// ASCII so a flake always fills exactly one cell
pub const SNOWFLAKE: &str = "*";

/// Burst centres as fractions of the screen
const BURSTS: [(f64, f64); 3] = [(0.2, 0.3), (0.8, 0.25), (0.5, 0.7)];

/// Directions of the sparks in one burst (x is doubled for cell aspect)
const SPARKS: [(f64, f64); 8] = [
    (1.0, 0.0),
    (0.7, 0.7),
    (0.0, 1.0),
    (-0.7, 0.7),
    (-1.0, 0.0),
    (-0.7, -0.7),
    (0.0, -1.0),
    (0.7, -0.7),
];

/// Cheap deterministic scatter (splitmix64 finaliser)
fn scatter(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn paint_blank(buf: &mut Buffer, x: u16, y: u16, symbol: &str, color: Color) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        if cell.symbol() == " " {
            cell.set_symbol(symbol).set_fg(color);
        }
    }
}

/// Cell of snowflake `index` at animation `tick`
pub fn snowflake_position(index: u64, tick: u64, area: Rect) -> Option<(u16, u16)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    let x = scatter(index) % area.width as u64;
    let speed = 1 + scatter(index + 1_000) % 3;
    let y = (scatter(index + 2_000) + tick * speed / 2) % area.height as u64;
    Some((area.x + x as u16, area.y + y as u16))
}

pub fn render_snow(area: Rect, tick: u64, frame: &mut Frame) {
    let buf = frame.buffer_mut();
    for index in 0..SNOWFLAKES {
        if let Some((x, y)) = snowflake_position(index, tick, area) {
            paint_blank(buf, x, y, SNOWFLAKE, TEXT_PRIMARY);
        }
    }
}

pub fn render_fireworks(area: Rect, celebration: &Celebration, now: Instant, frame: &mut Frame) {
    let progress = celebration.progress(now);
    let buf = frame.buffer_mut();
    let radius = 1.0 + progress * (area.height as f64 / 3.0);
    let symbol = match progress {
        p if p < 0.33 => "✦",
        p if p < 0.66 => "*",
        _ => "·",
    };

    for (burst, (fx, fy)) in BURSTS.iter().enumerate() {
        let cx = area.x as f64 + area.width as f64 * fx;
        let cy = area.y as f64 + area.height as f64 * fy;
        for (spark, (dx, dy)) in SPARKS.iter().enumerate() {
            let x = cx + dx * radius * 2.0;
            let y = cy + dy * radius;
            if x < area.x as f64 || y < area.y as f64 {
                continue;
            }
            let (x, y) = (x.round() as u16, y.round() as u16);
            if x >= area.right() || y >= area.bottom() {
                continue;
            }
            let color = FIREWORK_COLORS[(burst + spark) % FIREWORK_COLORS.len()];
            paint_blank(buf, x, y, symbol, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snowflakes_stay_inside_area() {
        let area = Rect::new(3, 2, 40, 10);
        for tick in [0, 7, 1_000, 123_456] {
            for index in 0..SNOWFLAKES {
                let (x, y) = snowflake_position(index, tick, area).unwrap();
                assert!(x >= area.left() && x < area.right());
                assert!(y >= area.top() && y < area.bottom());
            }
        }
    }

    #[test]
    fn test_snowflakes_fall() {
        let area = Rect::new(0, 0, 80, 1_000);
        let (x0, y0) = snowflake_position(4, 0, area).unwrap();
        let (x1, y1) = snowflake_position(4, 20, area).unwrap();
        assert_eq!(x0, x1);
        assert_ne!(y0, y1);
    }

    #[test]
    fn test_no_snow_in_empty_area() {
        assert_eq!(snowflake_position(1, 1, Rect::new(0, 0, 0, 5)), None);
    }

    #[test]
    fn test_paint_blank_keeps_text() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        buf.set_string(0, 0, "A", Style::default());
        paint_blank(&mut buf, 0, 0, SNOWFLAKE, TEXT_PRIMARY);
        paint_blank(&mut buf, 1, 0, SNOWFLAKE, TEXT_PRIMARY);
        paint_blank(&mut buf, 9, 9, SNOWFLAKE, TEXT_PRIMARY);
        assert_eq!(buf[(0, 0)].symbol(), "A");
        assert_eq!(buf[(1, 0)].symbol(), SNOWFLAKE);
    }

    #[test]
    fn test_snowflake_is_single_width() {
        assert!(SNOWFLAKE.is_ascii());
        assert_eq!(Span::raw(SNOWFLAKE).width(), 1);
    }
}
