//! UI module for wheel-tui
//!
//! This module contains UI rendering functions for the TUI interface,
//! including the wheel canvas, the editing side panel, the winner
//! dialog and the decorative overlays.

mod dialog;
mod effects;
mod helpers;
mod panel;
mod wheel;

use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::cli::VERSION;
use crate::models::Mode;
use crate::theme::{BG_PRIMARY, BORDER_SUBTLE, GOLD_PRIMARY, TEXT_PRIMARY};

/// Draw one full frame
pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);

    // Create main layout: header banner + content area + bottom bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header banner
            Constraint::Min(10),   // Wheel and side panel
            Constraint::Length(1), // Bottom bar (single line)
        ])
        .split(area);

    render_banner(main_layout[0], app, frame);

    // Create horizontal split: 60% wheel, 40% side panel
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_layout[1]);

    wheel::render_wheel_panel(panels[0], app, now, frame);
    panel::render_side_panel(panels[1], app, frame);
    render_key_hints(main_layout[2], app, frame);

    if let Some(winner) = app.wheel.winner() {
        dialog::render_winner_dialog(area, winner, frame);
    }

    if app.effects.snow() {
        effects::render_snow(area, app.animation_tick(now), frame);
    }
    if let Some(celebration) = app.effects.celebration() {
        effects::render_fireworks(area, celebration, now, frame);
    }
}

fn render_banner(area: Rect, app: &App, frame: &mut Frame) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(BORDER_SUBTLE));
    let banner = Paragraph::new(Line::from(Span::styled(
        app.header.clone(),
        Style::default()
            .fg(GOLD_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )))
    .block(block)
    .alignment(Alignment::Center);
    frame.render_widget(banner, area);
}

/// Bottom bar hint text for the focused part of the UI
fn key_hints(app: &App) -> &'static str {
    if app.wheel.winner().is_some() {
        return " Esc: Close | r: Remove winner ";
    }
    match app.mode {
        Mode::Wheel => {
            " Space: Spin | s: Shuffle | o: Sort | c: Clear | e: Names | x: Exclude | h: Header | r: Random header | q: Quit "
        }
        Mode::Names => " Type one name per line | Esc: Done ",
        Mode::Exclusions => " ↑/↓: Move | Space: Toggle | Esc: Done ",
        Mode::Header => " Type a header | Enter/Esc: Done ",
    }
}

fn render_key_hints(area: Rect, app: &App, frame: &mut Frame) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(22)])
        .split(area);

    let hints = Paragraph::new(key_hints(app))
        .style(Style::default().fg(Color::Black).bg(GOLD_PRIMARY));
    frame.render_widget(hints, layout[0]);

    let badge = Paragraph::new(format!(" {} · v{} ", app.mode.label(), VERSION))
        .alignment(Alignment::Right)
        .style(Style::default().fg(TEXT_PRIMARY).bg(BORDER_SUBTLE));
    frame.render_widget(badge, layout[1]);
}
