//! Bordered single-line input row with focus and error styling.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Rows rendered by [`draw_text_field`] occupy this many terminal lines.
pub const FIELD_HEIGHT: u16 = 3;

/// Borrowed view of one single-line input for rendering.
///
/// Values and errors live in the submission controller; this struct only
/// carries what one frame needs.
#[derive(Debug, Clone)]
pub struct TextFieldView<'a> {
    /// Display label shown in the border title (a `*` suffix is added).
    pub label: &'a str,
    /// Current text value.
    pub value: &'a str,
    /// Validation error message, if any.
    pub error: Option<&'a str>,
    /// Whether this field has input focus.
    pub focused: bool,
}

/// Renders one bordered input row.
///
/// Border is red when errored, yellow when focused, dark gray otherwise. A
/// blinking block cursor follows the value on the focused field, and the
/// error message overlaps the bottom border.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_text_field(view: &TextFieldView, frame: &mut Frame, area: Rect) {
    let border_color = if view.error.is_some() {
        Color::Red
    } else if view.focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(format!("{} *", view.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let mut spans = vec![Span::raw(view.value)];
    if view.focused {
        spans.push(Span::styled(
            "\u{2588}",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);

    if let Some(err) = view.error {
        let err_area = Rect {
            x: area.x + 2,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(4),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(err, Style::default().fg(Color::Red))),
            err_area,
        );
    }
}
