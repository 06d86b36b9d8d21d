//! Wheel panel: the spinning canvas and the status line under it

use std::f64::consts::TAU;
use std::time::Instant;

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Circle, Line as CanvasLine},
    },
};

use crate::app::App;
use crate::theme::{
    BG_PRIMARY, BORDER_SUBTLE, GOLD_DIM, GOLD_PRIMARY, GREEN_READY, PINK_ACCENT, RED_EXCLUDED,
    ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, get_pulse_color, segment_color,
};
use crate::wheel::Slot;

use super::helpers::{round_bounds, truncate_label};

/// Canvas half-extent; the wheel itself has radius 1.0
const CANVAS_RADIUS: f64 = 1.25;

/// Above this many slices only the one under the pointer is labelled
const MAX_LABELS: usize = 24;

/// Longest label printed on a slice
const LABEL_CHARS: usize = 12;

/// Point on the unit circle at `turns` clockwise from the top
fn rim_point(turns: f64, radius: f64) -> (f64, f64) {
    let theta = turns * TAU;
    (radius * theta.sin(), radius * theta.cos())
}

pub fn render_wheel_panel(area: Rect, app: &App, now: Instant, frame: &mut Frame) {
    let block = Block::default()
        .title(" Wheel ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_PRIMARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(2)])
        .split(inner);

    let slots = app.slots();
    let pointer = app.wheel.pointer_slot(now, slots.len());
    render_canvas(layout[0], app, &slots, pointer, now, frame);
    render_status(layout[1], app, &slots, pointer, now, frame);
}

fn render_canvas(
    area: Rect,
    app: &App,
    slots: &[Slot],
    pointer: Option<usize>,
    now: Instant,
    frame: &mut Frame,
) {
    let (x_bounds, y_bounds) = round_bounds(area, CANVAS_RADIUS);
    let cell_width = (x_bounds[1] - x_bounds[0]) / area.width.max(1) as f64;
    let angle = app.wheel.angle_at(now);
    let count = slots.len();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(BG_PRIMARY)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: 1.0,
                color: GOLD_PRIMARY,
            });
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: 0.06,
                color: GOLD_DIM,
            });

            if count == 0 {
                return;
            }

            // Spokes at slice boundaries
            if count > 1 {
                for slot in 0..count {
                    let (x, y) = rim_point(slot as f64 / count as f64 + angle, 1.0);
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: 0.0,
                        x2: x,
                        y2: y,
                        color: segment_color(slot),
                    });
                }
            }

            // Mark the slice under the pointer along its rim
            if let Some(selected) = pointer {
                let mid = (selected as f64 + 0.5) / count as f64 + angle;
                let (x1, y1) = rim_point(mid, 0.82);
                let (x2, y2) = rim_point(mid, 0.98);
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: PINK_ACCENT,
                });
            }

            ctx.layer();

            for (slot, entry) in slots.iter().enumerate() {
                let selected = pointer == Some(slot);
                if count > MAX_LABELS && !selected {
                    continue;
                }
                let label = truncate_label(&entry.name, LABEL_CHARS);
                let (x, y) = rim_point((slot as f64 + 0.5) / count as f64 + angle, 0.6);
                let x = x - label.chars().count() as f64 * cell_width / 2.0;
                let style = if selected {
                    Style::default()
                        .fg(PINK_ACCENT)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(segment_color(slot))
                };
                ctx.print(x, y, Span::styled(label, style));
            }

            ctx.print(
                -cell_width / 2.0,
                1.1,
                Span::styled("▼", Style::default().fg(PINK_ACCENT)),
            );
        });

    frame.render_widget(canvas, area);
}

fn render_status(
    area: Rect,
    app: &App,
    slots: &[Slot],
    pointer: Option<usize>,
    now: Instant,
    frame: &mut Frame,
) {
    let under_pointer = pointer
        .and_then(|slot| slots.get(slot))
        .map(|slot| slot.name.as_str())
        .unwrap_or("");

    let line = if let Some(winner) = app.wheel.winner() {
        Line::from(vec![
            Span::styled("🎉 ", Style::default()),
            Span::styled(
                winner.name.clone(),
                Style::default()
                    .fg(PINK_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else if app.wheel.is_spinning() {
        let pulse = get_pulse_color(app.animation_tick(now), GOLD_PRIMARY, GOLD_DIM);
        Line::from(vec![
            Span::styled("Spinning… ", Style::default().fg(pulse)),
            Span::styled(
                under_pointer.to_string(),
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            ),
        ])
    } else if app.can_spin() {
        Line::from(vec![
            Span::styled("● ", Style::default().fg(GREEN_READY)),
            Span::styled("Press Space to spin", Style::default().fg(TEXT_PRIMARY)),
            Span::styled(
                format!("  ({} eligible)", slots.len()),
                Style::default().fg(TEXT_MUTED),
            ),
        ])
    } else {
        let reason = if app.candidates.is_empty() {
            "add some names"
        } else {
            "every name is excluded"
        };
        Line::from(vec![
            Span::styled("○ ", Style::default().fg(RED_EXCLUDED)),
            Span::styled(
                format!("Spin disabled: {}", reason),
                Style::default().fg(TEXT_MUTED),
            ),
        ])
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rim_point_orientation() {
        let (x, y) = rim_point(0.0, 1.0);
        assert!(x.abs() < 1e-9 && (y - 1.0).abs() < 1e-9);
        // A quarter turn clockwise from the top is the right-hand side
        let (x, y) = rim_point(0.25, 1.0);
        assert!((x - 1.0).abs() < 1e-9 && y.abs() < 1e-9);
    }
}
