//! Detail screen with the styled sample sentence

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::catalog::TextRun;
use crate::ui::theme::{run_style, Theme};
use crate::ui::view::DetailView;

pub fn render(frame: &mut Frame, area: Rect, view: &DetailView, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .split(area);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(view.back_label.len() as u16 + 2),
            Constraint::Min(0),
            Constraint::Length(view.back_label.len() as u16 + 2),
        ])
        .split(chunks[1]);

    let back = Paragraph::new(Span::styled(view.back_label, theme.selected()));
    frame.render_widget(back, header[0]);

    let title = Paragraph::new(Span::styled(view.title, theme.heading()))
        .alignment(Alignment::Center);
    frame.render_widget(title, header[1]);

    let sample = Paragraph::new(styled_line(view.runs))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(sample, chunks[3]);
}

/// One span per run, in order
pub fn styled_line(runs: &'static [TextRun]) -> Line<'static> {
    Line::from(
        runs.iter()
            .map(|run| Span::styled(run.text, run_style(&run.style)))
            .collect::<Vec<_>>(),
    )
}
