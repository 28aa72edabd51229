//! Skills screen — skill groups on the left, members of the selected group
//! on the right.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::model::{Profile, SkillGroup};
use crate::tui::action::Action;

/// State for the skills screen.
#[derive(Debug, Clone, Default)]
pub struct SkillsState {
    selected: usize,
}

impl SkillsState {
    /// Creates a new state with the first group selected.
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// Returns the selected group index.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Returns the currently selected skill group.
    pub fn selected_group(&self) -> &'static SkillGroup {
        &Profile::builtin().skills[self.selected]
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        let last = Profile::builtin().skills.len() - 1;
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(last);
                Action::None
            }
            _ => Action::None,
        }
    }
}

/// Renders the skills screen.
#[mutants::skip]
pub fn draw_skills(state: &SkillsState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Skills ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [list_area, detail_area] =
        Layout::horizontal([Constraint::Length(26), Constraint::Min(0)]).areas(inner);

    let group_lines: Vec<Line> = Profile::builtin()
        .skills
        .iter()
        .enumerate()
        .map(|(i, group)| {
            let style = if i == state.selected() {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!(" {} ", group.name), style))
        })
        .collect();
    frame.render_widget(Paragraph::new(group_lines), list_area);

    let group = state.selected_group();
    let mut detail_lines = vec![
        Line::from(Span::styled(
            group.name,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            group.description,
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];
    for skill in group.skills {
        detail_lines.push(Line::from(Span::styled(
            format!("  \u{25aa} {skill}"),
            Style::default().fg(Color::Green),
        )));
    }

    let [detail_content, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(detail_area);
    frame.render_widget(
        Paragraph::new(detail_lines).wrap(Wrap { trim: true }),
        detail_content,
    );

    let footer = Paragraph::new("\u{2191}/\u{2193}: choose group")
        .style(Style::default().fg(Color::DarkGray));
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

    mod selection {
        use super::*;

        #[test]
        fn starts_on_first_group() {
            let state = SkillsState::new();
            assert_eq!(state.selected(), 0);
            assert_eq!(state.selected_group().name, "Programming Languages");
        }

        #[test]
        fn down_moves_selection() {
            let mut state = SkillsState::new();
            let action = state.handle_key(press(KeyCode::Down));
            assert_eq!(action, Action::None);
            assert_eq!(state.selected_group().name, "Frontend Development");
        }

        #[test]
        fn up_moves_selection_back() {
            let mut state = SkillsState::new();
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.selected(), 1);
        }

        #[test]
        fn up_at_top_saturates() {
            let mut state = SkillsState::new();
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.selected(), 0);
        }

        #[test]
        fn down_at_bottom_saturates() {
            let mut state = SkillsState::new();
            let groups = Profile::builtin().skills.len();
            for _ in 0..groups + 5 {
                state.handle_key(press(KeyCode::Down));
            }
            assert_eq!(state.selected(), groups - 1);
            assert_eq!(state.selected_group().name, "Payment Gateways");
        }

        #[test]
        fn unhandled_key_is_ignored() {
            let mut state = SkillsState::new();
            let action = state.handle_key(press(KeyCode::Char('x')));
            assert_eq!(action, Action::None);
            assert_eq!(state.selected(), 0);
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

        fn render_skills(state: &SkillsState, width: u16, height: u16) -> String {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| {
                    draw_skills(state, frame, frame.area());
                })
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn lists_all_groups() {
            let state = SkillsState::new();
            let output = render_skills(&state, 100, 24);
            assert!(output.contains("Programming Languages"));
            assert!(output.contains("Cloud & DevOps"));
            assert!(output.contains("Payment Gateways"));
        }

        #[test]
        fn shows_selected_group_members() {
            let mut state = SkillsState::new();
            state.handle_key(press(KeyCode::Down));
            let output = render_skills(&state, 100, 24);
            assert!(output.contains("ReactJS"), "should list frontend skills");
            assert!(
                output.contains("beautiful user interfaces"),
                "should show group description"
            );
        }

        #[test]
        fn does_not_leak_other_group_members() {
            let state = SkillsState::new();
            let output = render_skills(&state, 100, 24);
            assert!(
                !output.contains("Stripe"),
                "payment skills belong to an unselected group"
            );
        }
    }
}
