//! Main UI Application
//!
//! Owns the navigator, routes key presses to actions and draws the current
//! screen.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Clear, Paragraph},
};

use crate::catalog;
use crate::nav::{Navigator, Route};
use crate::settings::Settings;
use super::screens;
use super::theme::{Theme, HINT};
use super::view::{self, Action, ScreenView};

/// Main UI application
pub struct App {
    /// Route stack
    nav: Navigator,
    /// Highlighted entry on the component list (flat index)
    list_cursor: usize,
    /// Colors
    theme: Theme,
    /// Whether the key hint footer is drawn
    show_key_hints: bool,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        Self {
            nav: Navigator::new(),
            list_cursor: 0,
            theme: Theme::from_settings(settings),
            show_key_hints: settings.show_key_hints,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn list_cursor(&self) -> usize {
        self.list_cursor
    }

    /// Changes whenever the drawn output would change
    pub fn render_stamp(&self) -> (u64, usize) {
        (self.nav.revision(), self.list_cursor)
    }

    /// Description of the screen for the current state
    pub fn view(&self) -> ScreenView {
        view::describe(&self.nav, self.list_cursor)
    }

    /// Handle keyboard input, returns true if should quit
    pub fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            return Ok(true);
        }

        match key.code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
                self.perform(Action::Back);
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right | KeyCode::Char('l') => {
                if let Some(action) = self.view().primary_action() {
                    self.perform(action);
                }
            }
            _ if matches!(self.nav.current_route(), Route::ComponentList) => {
                self.handle_list_input(key);
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_list_input(&mut self, key: KeyEvent) {
        let last = catalog::entry_count().saturating_sub(1);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.list_cursor = self.list_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.list_cursor = (self.list_cursor + 1).min(last);
            }
            KeyCode::Home => self.list_cursor = 0,
            KeyCode::End => self.list_cursor = last,
            _ => {}
        }
    }

    /// Apply an action. A fresh visit to the list starts at the top; coming
    /// back from a detail screen keeps the cursor where it was.
    pub fn perform(&mut self, action: Action) {
        if action == Action::Navigate(Route::ComponentList) {
            self.list_cursor = 0;
        }
        if let Action::Navigate(route) = &action {
            if let Some(name) = route.component() {
                log::debug!("Opening detail for {:?}", name);
            }
        }
        action.apply(&mut self.nav);
    }

    pub fn render(&self, frame: &mut Frame) {
        frame.render_widget(Clear, frame.area());

        let (body, footer) = if self.show_key_hints {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)])
                .split(frame.area());
            (chunks[0], Some(chunks[1]))
        } else {
            (frame.area(), None)
        };
        let body = margin(body);

        let view = self.view();
        match &view {
            ScreenView::Welcome(v) => screens::welcome::render(frame, body, v, &self.theme),
            ScreenView::ComponentList(v) => {
                screens::component_list::render(frame, body, v, &self.theme)
            }
            ScreenView::Detail(v) => screens::detail::render(frame, body, v, &self.theme),
        }

        if let Some(area) = footer {
            let hints = Paragraph::new(Span::styled(key_hints(&view), Style::default().fg(HINT)))
                .alignment(ratatui::layout::Alignment::Center);
            frame.render_widget(hints, area);
        }
    }
}

/// Footer text for a screen
fn key_hints(view: &ScreenView) -> &'static str {
    match view {
        ScreenView::Welcome(_) => "[Enter] Continue  [Q] Quit",
        ScreenView::ComponentList(_) => "[↑/↓] Select  [Enter] Open  [Esc] Back  [Q] Quit",
        ScreenView::Detail(_) => "[Esc] Back  [Q] Quit",
    }
}

/// Small margins that adapt to terminal size
fn margin(r: Rect) -> Rect {
    let margin = if r.width > 100 && r.height > 40 { 2 } else { 1 };
    Rect {
        x: r.x + margin,
        y: r.y + margin,
        width: r.width.saturating_sub(margin * 2),
        height: r.height.saturating_sub(margin * 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, style::Modifier, Terminal};

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_input(KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    fn draw(app: &App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect()
    }

    fn screen_text(buffer: &Buffer) -> String {
        (0..buffer.area.height).map(|y| row_text(buffer, y) + "\n").collect()
    }

    /// Position of the first cell of `needle` (ASCII only)
    fn find(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
        let chars: Vec<String> = needle.chars().map(String::from).collect();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width.saturating_sub(chars.len() as u16 - 1) {
                let hit = chars
                    .iter()
                    .enumerate()
                    .all(|(i, c)| buffer[(x + i as u16, y)].symbol() == c.as_str());
                if hit {
                    return Some((x, y));
                }
            }
        }
        None
    }

    #[test]
    fn test_walk_forward_and_back() {
        let mut app = App::new(&Settings::default());
        assert_eq!(app.navigator().current_route(), &Route::Welcome);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.navigator().current_route(), &Route::ComponentList);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.navigator().current_route(), &Route::Detail("TextField".into()));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.navigator().current_route(), &Route::ComponentList);
        assert_eq!(app.list_cursor(), 2);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.navigator().current_route(), &Route::Welcome);
    }

    #[test]
    fn test_back_at_welcome_does_nothing() {
        let mut app = App::new(&Settings::default());
        let stamp = app.render_stamp();
        for _ in 0..3 {
            assert!(!press(&mut app, KeyCode::Esc));
        }
        assert_eq!(app.navigator().current_route(), &Route::Welcome);
        assert_eq!(app.render_stamp(), stamp);
    }

    #[test]
    fn test_enter_on_detail_goes_back() {
        let mut app = App::new(&Settings::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.navigator().current_route(), &Route::Detail("Text".into()));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.navigator().current_route(), &Route::ComponentList);
    }

    #[test]
    fn test_list_cursor_bounds_and_reset() {
        let mut app = App::new(&Settings::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.list_cursor(), 0);

        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.list_cursor(), 5);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.list_cursor(), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(&Settings::default());
        assert!(press(&mut app, KeyCode::Char('q')));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_input(ctrl_c).unwrap());
    }

    #[test]
    fn test_render_welcome() {
        let app = App::new(&Settings::default());
        let terminal = draw(&app);
        let text = screen_text(terminal.backend().buffer());
        assert!(text.contains("Jetpack Compose"));
        assert!(text.contains("I'm ready"));
        assert!(text.contains("[Enter] Continue"));
    }

    #[test]
    fn test_render_list_order() {
        let mut app = App::new(&Settings::default());
        press(&mut app, KeyCode::Enter);
        let terminal = draw(&app);
        let buffer = terminal.backend().buffer();

        let row = |needle: &str| find(buffer, needle).map(|(_, y)| y).unwrap();
        assert!(row("UI Components List") < row("Display"));
        assert!(row("Display") < row("Input "));
        assert!(row("Input ") < row("Layout"));
        assert!(row("TextField") < row("PasswordField"));
    }

    #[test]
    fn test_render_detail_runs() {
        let mut app = App::new(&Settings::default());
        app.perform(Action::Navigate(Route::ComponentList));
        app.perform(Action::Navigate(Route::Detail("Row".into())));
        let terminal = draw(&app);
        let buffer = terminal.backend().buffer();

        assert!(find(buffer, "Text Detail").is_some());
        assert!(find(buffer, "< Back").is_some());

        let (x, y) = find(buffer, "The quick Brown fox jumps over the lazy dog.").unwrap();
        let modifier = |offset: u16| buffer[(x + offset, y)].modifier;
        assert!(modifier(0).is_empty());
        assert!(modifier(4).contains(Modifier::CROSSED_OUT));
        assert!(modifier(10).contains(Modifier::BOLD));
        assert_eq!(buffer[(x + 10, y)].fg, ratatui::style::Color::Rgb(0xAA, 0x66, 0x00));
        assert!(modifier(16).is_empty());
        assert!(modifier(26).contains(Modifier::BOLD));
        assert!(modifier(31).contains(Modifier::ITALIC));
        assert!(modifier(40).is_empty());
    }

    #[test]
    fn test_render_without_hints() {
        let settings = Settings { show_key_hints: false, ..Settings::default() };
        let app = App::new(&settings);
        let terminal = draw(&app);
        assert!(find(terminal.backend().buffer(), "[Enter]").is_none());
    }

    #[test]
    fn test_render_tiny_terminal() {
        let mut app = App::new(&Settings::default());
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        for _ in 0..3 {
            terminal.draw(|frame| app.render(frame)).unwrap();
            press(&mut app, KeyCode::Enter);
        }
    }
}
