//! Welcome screen

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::ui::theme::{Theme, ON_PRIMARY, TEXT_MUTED};
use crate::ui::view::WelcomeView;

const LOGO: [&str; 7] = [
    r"   .-----------------.   ",
    r"  /  [ ]  [ ]  [ ]   /|  ",
    r" /-----------------/ |  ",
    r" |  ===========   |  |  ",
    r" |  =======       |  /  ",
    r" |  [  OK  ]      | /   ",
    r" '----------------'     ",
];

pub fn render(frame: &mut Frame, area: Rect, view: &WelcomeView, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(LOGO.len() as u16),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let logo: Vec<Line> = LOGO
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(theme.primary))))
        .collect();
    frame.render_widget(Paragraph::new(logo).alignment(Alignment::Center), chunks[1]);

    let title = Paragraph::new(Span::styled(
        view.title,
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[3]);

    let blurb_area = horizontal_padding(chunks[4], 4);
    let blurb = Paragraph::new(Span::styled(view.blurb, Style::default().fg(TEXT_MUTED)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(blurb, blurb_area);

    let button_area = horizontal_padding(chunks[6], 2);
    let button = Paragraph::new(Span::styled(
        view.action_label,
        Style::default().fg(ON_PRIMARY).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .style(Style::default().bg(theme.primary))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.primary)),
    );
    frame.render_widget(button, button_area);
}

/// Shrink an area by `pad` cells on the left and right
fn horizontal_padding(area: Rect, pad: u16) -> Rect {
    let pad = pad.min(area.width / 2);
    Rect {
        x: area.x + pad,
        width: area.width - pad * 2,
        ..area
    }
}
