//! Component catalog screen
//!
//! Each category label is followed by its components: the name in bold and
//! the selectable summary line beneath it.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Block, Borders, BorderType},
};

use crate::ui::theme::Theme;
use crate::ui::view::ComponentListView;

pub fn render(frame: &mut Frame, area: Rect, view: &ComponentListView, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let header = Paragraph::new(Span::styled(view.header, theme.heading()))
        .alignment(Alignment::Center);
    frame.render_widget(header, chunks[1]);

    let (lines, selected_line) = catalog_lines(view, theme);
    let body = chunks[3];
    let visible = body.height.saturating_sub(2);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.card))
        .style(Style::default().bg(theme.card));

    let list = Paragraph::new(lines)
        .block(block)
        .scroll((scroll_offset(selected_line, visible), 0));
    frame.render_widget(list, body);
}

/// Build the catalog lines; also returns the line index of the selection
pub fn catalog_lines(view: &ComponentListView, theme: &Theme) -> (Vec<Line<'static>>, usize) {
    let mut lines = Vec::new();
    let mut selected_line = 0;
    let mut index = 0;

    for category in view.categories {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            category.label,
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )));

        for entry in category.items {
            lines.push(Line::from(Span::styled(
                format!("  {}", entry.name),
                Style::default().add_modifier(Modifier::BOLD),
            )));

            let is_selected = index == view.selected;
            if is_selected {
                selected_line = lines.len();
                lines.push(Line::from(Span::styled(
                    format!("  > {}", entry.summary),
                    theme.selected(),
                )));
            } else {
                lines.push(Line::from(format!("    {}", entry.summary)));
            }
            index += 1;
        }
    }

    (lines, selected_line)
}

/// Smallest scroll that keeps the selected line in view
fn scroll_offset(selected_line: usize, visible: u16) -> u16 {
    let visible = visible.max(1) as usize;
    (selected_line + 1).saturating_sub(visible) as u16
}
