//! About screen — the "Who I Am" paragraphs and badges, scrollable.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::model::Profile;
use crate::tui::action::Action;

/// State for the about screen.
#[derive(Debug, Clone, Default)]
pub struct AboutState {
    scroll: u16,
}

impl AboutState {
    /// Creates a new state scrolled to the top.
    pub fn new() -> Self {
        Self { scroll: 0 }
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            _ => Action::None,
        }
    }
}

fn about_lines() -> Vec<Line<'static>> {
    let profile = Profile::builtin();
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let badge_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::Gray);

    let mut lines = vec![Line::from(Span::styled("Who I Am", header_style))];
    let badges: Vec<String> = profile.badges.iter().map(|b| format!("[{b}]")).collect();
    lines.push(Line::from(Span::styled(badges.join(" "), badge_style)));
    for paragraph in profile.about {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(*paragraph, text_style)));
    }
    lines
}

/// Renders the about screen.
#[mutants::skip]
pub fn draw_about(state: &AboutState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" About ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let lines = about_lines();
    let total = lines.len() as u16;
    let capped_scroll = state.scroll().min(total.saturating_sub(1));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((capped_scroll, 0));
    frame.render_widget(paragraph, content_area);

    let footer = Paragraph::new("\u{2191}/\u{2193}: scroll").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    mod scrolling {
        use super::*;

        #[test]
        fn down_increments_scroll() {
            let mut state = AboutState::new();
            let action = state.handle_key(press(KeyCode::Down));
            assert_eq!(action, Action::None);
            assert_eq!(state.scroll(), 1);
        }

        #[test]
        fn up_decrements_scroll() {
            let mut state = AboutState::new();
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.scroll(), 1);
        }

        #[test]
        fn up_at_top_saturates() {
            let mut state = AboutState::new();
            let action = state.handle_key(press(KeyCode::Up));
            assert_eq!(action, Action::None);
            assert_eq!(state.scroll(), 0);
        }

        #[test]
        fn unhandled_key_is_ignored() {
            let mut state = AboutState::new();
            let action = state.handle_key(press(KeyCode::Char('x')));
            assert_eq!(action, Action::None);
            assert_eq!(state.scroll(), 0);
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render_about(state: &AboutState, width: u16, height: u16) -> String {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| {
                    draw_about(state, frame, frame.area());
                })
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn shows_header_badges_and_text() {
            let state = AboutState::new();
            let output = render_about(&state, 100, 24);
            assert!(output.contains("Who I Am"), "should show section header");
            assert!(
                output.contains("[Available for Work]"),
                "should show badges"
            );
            assert!(
                output.contains("MERN Stack full-stack developer"),
                "should show first paragraph"
            );
        }

        #[test]
        fn scrolling_moves_content_up() {
            let mut state = AboutState::new();
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Down));
            let output = render_about(&state, 100, 24);
            assert!(
                !output.contains("Who I Am"),
                "header should scroll out of view"
            );
        }

        #[test]
        fn shows_scroll_hint() {
            let state = AboutState::new();
            let output = render_about(&state, 100, 24);
            assert!(output.contains("scroll"), "should show footer hint");
        }
    }
}
