//! Help screen — scrollable keybinding reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::Action;
use crate::tui::app::Section;

static GLOBAL_KEYS: &[(&str, &str)] = &[
    ("1-5", "jump to a section"),
    ("Tab / →", "next section"),
    ("Shift-Tab / ←", "previous section"),
    ("?", "help"),
    ("q / Esc", "back to Home; from Home: quit"),
    ("Ctrl+C", "quit"),
];

static HOME_KEYS: &[(&str, &str)] = &[("any key", "finish the intro animation")];

static ABOUT_KEYS: &[(&str, &str)] = &[("↑/↓", "scroll")];

static SKILLS_KEYS: &[(&str, &str)] = &[("↑/↓", "select skill group")];

static PROJECTS_KEYS: &[(&str, &str)] = &[
    ("↑/↓", "select project"),
    ("f", "cycle category filter"),
    ("Home / End", "first / last"),
];

static CONTACT_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev field"),
    ("Enter", "send; in the message: new line"),
    ("Ctrl+S", "send from any field"),
    ("Esc", "back to Home"),
];

static HELP_KEYS: &[(&str, &str)] = &[("↑/↓", "scroll"), ("q / Esc", "back")];

/// State for the help screen.
#[derive(Debug, Clone)]
pub struct HelpState {
    scroll: u16,
    origin: Section,
}

impl Default for HelpState {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpState {
    /// Creates a new [`HelpState`] with scroll position at the top and origin [`Section::Home`].
    pub fn new() -> Self {
        Self {
            scroll: 0,
            origin: Section::Home,
        }
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Returns the origin section that opened help.
    pub fn origin(&self) -> Section {
        self.origin
    }

    /// Sets the origin section to return to when help is dismissed.
    pub fn set_origin(&mut self, section: Section) {
        self.origin = section;
    }

    /// Resets the scroll position to the top.
    pub fn reset(&mut self) {
        self.scroll = 0;
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
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(self.origin),
            _ => Action::None,
        }
    }
}

fn section_keys(origin: Section) -> &'static [(&'static str, &'static str)] {
    match origin {
        Section::Home => HOME_KEYS,
        Section::About => ABOUT_KEYS,
        Section::Skills => SKILLS_KEYS,
        Section::Projects => PROJECTS_KEYS,
        Section::Contact => CONTACT_KEYS,
        Section::Help => HELP_KEYS,
    }
}

fn build_section(title: &'static str, keys: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(title, header_style)),
    ];
    for (key, desc) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<20}"), key_style),
            Span::styled(*desc, dim_style),
        ]));
    }
    lines
}

fn help_content(origin: Section) -> Vec<Line<'static>> {
    let mut lines = build_section("Global", GLOBAL_KEYS);
    lines.extend(build_section(origin.label(), section_keys(origin)));
    lines
}

/// Renders the help screen.
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let title = format!(" Help – {} ", state.origin().label());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let content_lines = help_content(state.origin());
    let total = content_lines.len() as u16;
    let height = content_area.height;
    let capped_scroll = state.scroll().min(total.saturating_sub(height));

    let paragraph = Paragraph::new(content_lines).scroll((capped_scroll, 0));
    frame.render_widget(paragraph, content_area);

    let footer =
        Paragraph::new("↑/↓: scroll  q/Esc: back").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
