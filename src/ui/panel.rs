//! Side panel: header field, list actions, names editor and exclusions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::App;
use crate::models::Mode;
use crate::theme::{
    BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, GOLD_PRIMARY, RED_EXCLUDED, RED_EXCLUDED_BG,
    ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};

use super::helpers::truncate_label;

/// Tallest the exclusion list grows before scrolling
const MAX_EXCLUSION_ROWS: u16 = 10;

fn panel_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused { GOLD_PRIMARY } else { BORDER_SUBTLE };
    let title_style = if focused {
        Style::default().fg(GOLD_PRIMARY).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_SECONDARY)
    };
    Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(BG_SECONDARY))
}

pub fn render_side_panel(area: Rect, app: &App, frame: &mut Frame) {
    let rows = app.exclusion_rows().len() as u16;
    let exclusion_height = if rows == 0 {
        0
    } else {
        rows.min(MAX_EXCLUSION_ROWS) + 2
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Header field
            Constraint::Length(2),                // Actions and counts
            Constraint::Min(5),                   // Names editor
            Constraint::Length(exclusion_height), // Exclusion list
        ])
        .split(area);

    render_header_field(layout[0], app, frame);
    render_actions(layout[1], app, frame);
    render_names_editor(layout[2], app, frame);
    if exclusion_height > 0 {
        render_exclusions(layout[3], app, frame);
    }
}

fn render_header_field(area: Rect, app: &App, frame: &mut Frame) {
    let block = panel_block(" Header ".to_string(), app.mode == Mode::Header);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(&app.header_editor, inner);
}

fn render_actions(area: Rect, app: &App, frame: &mut Frame) {
    let key = Style::default().fg(GOLD_PRIMARY).add_modifier(Modifier::BOLD);
    let label = Style::default().fg(TEXT_SECONDARY);
    let dim = Style::default().fg(TEXT_MUTED);
    let label = if app.list_locked() { dim } else { label };

    let actions = Line::from(vec![
        Span::styled(" s", key),
        Span::styled(" Shuffle  ", label),
        Span::styled("o", key),
        Span::styled(format!(" Sort {}  ", app.sort_direction.label()), label),
        Span::styled("c", key),
        Span::styled(" Clear  ", label),
        Span::styled("r", key),
        Span::styled(" Random header", label),
    ]);

    let total = app.candidates.len();
    let eligible = app.slots().len();
    let counts = Line::from(vec![Span::styled(
        format!(
            " {} names · {} excluded · {} eligible",
            total,
            total - eligible,
            eligible
        ),
        dim,
    )]);

    frame.render_widget(Paragraph::new(vec![actions, counts]), area);
}

fn render_names_editor(area: Rect, app: &App, frame: &mut Frame) {
    let title = format!(" Names ({}) ", app.candidates.len());
    let block = panel_block(title, app.mode == Mode::Names);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(&app.names_editor, inner);
}

fn render_exclusions(area: Rect, app: &App, frame: &mut Frame) {
    let focused = app.mode == Mode::Exclusions;
    let title = if app.exclusions.is_empty() {
        " Exclude names "
    } else {
        " Excluded names (won't be selected) "
    };
    let block = panel_block(title.to_string(), focused);
    let name_width = area.width.saturating_sub(16) as usize;

    let items: Vec<ListItem> = app
        .exclusion_rows()
        .into_iter()
        .map(|name| {
            let excluded = app.exclusions.is_excluded(name);
            let (tag, tag_style, row_style) = if excluded {
                (
                    "✓ Excluded",
                    Style::default().fg(RED_EXCLUDED).add_modifier(Modifier::BOLD),
                    Style::default().bg(RED_EXCLUDED_BG),
                )
            } else {
                (
                    "Exclude",
                    Style::default().fg(TEXT_MUTED),
                    Style::default(),
                )
            };
            let label = truncate_label(name, name_width);
            let padding = name_width.saturating_sub(label.chars().count()) + 1;
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {}", label), Style::default().fg(TEXT_PRIMARY)),
                Span::raw(" ".repeat(padding)),
                Span::styled(tag, tag_style),
            ]))
            .style(row_style)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(BG_TERTIARY).add_modifier(Modifier::BOLD))
        .highlight_symbol(if focused { "›" } else { " " });

    let mut state = ListState::default().with_selected(Some(app.exclusion_cursor));
    frame.render_stateful_widget(list, area, &mut state);
}
