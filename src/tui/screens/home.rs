//! Home screen — the hero section with a tick-driven typewriter reveal.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::model::Profile;
use crate::tui::action::Action;

/// Ticks per cursor blink phase once the reveal has finished.
const BLINK_PERIOD: u64 = 4;

/// State for the home screen.
#[derive(Debug, Clone)]
pub struct HomeState {
    revealed: usize,
    ticks: u64,
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeState {
    /// Creates a new state with nothing revealed yet.
    pub fn new() -> Self {
        Self {
            revealed: 0,
            ticks: 0,
        }
    }

    /// Advances the typewriter by one character, then drives the cursor
    /// blink once the greeting is fully revealed.
    pub fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
        if self.revealed < greeting_len() {
            self.revealed += 1;
        }
    }

    /// Any key skips the remainder of the reveal.
    pub fn handle_key(&mut self, _key: KeyEvent) -> Action {
        if self.revealed < greeting_len() {
            self.revealed = greeting_len();
        }
        Action::None
    }

    /// Returns the revealed prefix of the greeting.
    pub fn revealed_greeting(&self) -> String {
        Profile::builtin()
            .greeting
            .chars()
            .take(self.revealed)
            .collect()
    }

    /// Returns `true` once the whole greeting is showing.
    pub fn reveal_complete(&self) -> bool {
        self.revealed >= greeting_len()
    }

    /// Whether the block cursor is visible this frame. Steady while typing,
    /// blinking afterwards.
    pub fn cursor_visible(&self) -> bool {
        !self.reveal_complete() || (self.ticks / BLINK_PERIOD) % 2 == 0
    }
}

fn greeting_len() -> usize {
    Profile::builtin().greeting.chars().count()
}

/// Renders the home screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_home(state: &HomeState, frame: &mut Frame, area: Rect) {
    let profile = Profile::builtin();

    let block = Block::default()
        .title(" Home ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut greeting_spans = vec![Span::styled(
        state.revealed_greeting(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if state.cursor_visible() {
        greeting_spans.push(Span::styled(
            "\u{2588}",
            Style::default().fg(Color::Cyan),
        ));
    }

    let mut lines = vec![
        Line::from(greeting_spans),
        Line::from(""),
        Line::from(Span::styled(
            profile.headline,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(profile.tagline, Style::default().fg(Color::Gray))),
        Line::from(""),
    ];
    for badge in profile.badges {
        lines.push(Line::from(Span::styled(
            format!("\u{2022} {badge}"),
            Style::default().fg(Color::Green),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("{}  |  {}", profile.email, profile.location),
        Style::default().fg(Color::DarkGray),
    )));
    let socials: Vec<&str> = profile.socials.iter().map(|s| s.name).collect();
    lines.push(Line::from(Span::styled(
        socials.join("  "),
        Style::default().fg(Color::DarkGray),
    )));

    // Extra rows so the tagline survives wrapping on narrow terminals.
    let height = (lines.len() as u16).saturating_add(2).min(inner.height);
    let [centered] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(inner);

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, centered);
}
