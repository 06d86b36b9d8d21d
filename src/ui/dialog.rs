//! Winner announcement popup

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::theme::{
    BG_SECONDARY, GOLD_PRIMARY, PINK_ACCENT, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY,
};
use crate::wheel::Draw;

use super::helpers::centered_rect;

pub fn render_winner_dialog(area: Rect, winner: &Draw, frame: &mut Frame) {
    let popup = centered_rect(50, 8, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(Span::styled(
            " Winner Announcement ",
            Style::default().fg(GOLD_PRIMARY).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(GOLD_PRIMARY))
        .style(Style::default().bg(BG_SECONDARY));

    let key = Style::default().fg(GOLD_PRIMARY).add_modifier(Modifier::BOLD);
    let text = vec![
        Line::default(),
        Line::from(vec![
            Span::styled("🎉 Winner: ", Style::default().fg(TEXT_PRIMARY)),
            Span::styled(
                winner.name.clone(),
                Style::default()
                    .fg(PINK_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("! 🎉", Style::default().fg(TEXT_PRIMARY)),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("Esc", key),
            Span::styled(" Close    ", Style::default().fg(TEXT_MUTED)),
            Span::styled("r", key),
            Span::styled(" Remove", Style::default().fg(TEXT_MUTED)),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup);
}
