//! Tab bar and footer — the persistent navigation chrome.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::Section;

/// Renders the one-line tab bar: brand on the left, numbered section tabs
/// with the active one highlighted.
///
/// Help is not a tab; while it is active no tab is highlighted.
#[mutants::skip]
pub fn draw_nav_bar(active: Section, frame: &mut Frame, area: Rect) {
    let brand_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let active_style = Style::default().fg(Color::Black).bg(Color::Yellow);
    let idle_style = Style::default().fg(Color::DarkGray);

    let mut spans = vec![Span::styled(" termfolio ", brand_style), Span::raw(" ")];
    for (i, section) in Section::tabs().iter().enumerate() {
        let style = if *section == active {
            active_style
        } else {
            idle_style
        };
        spans.push(Span::styled(
            format!(" {} {} ", i + 1, section.label()),
            style,
        ));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders the one-line footer: key hints on the left, the site credit on
/// the right.
#[mutants::skip]
pub fn draw_footer(credit: &str, hint: &str, frame: &mut Frame, area: Rect) {
    let dim = Style::default().fg(Color::DarkGray);
    frame.render_widget(Paragraph::new(Span::styled(hint, dim)), area);
    frame.render_widget(
        Paragraph::new(Span::styled(credit, dim)).alignment(Alignment::Right),
        area,
    );
}
