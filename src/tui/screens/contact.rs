//! Contact screen — the submission form bound to the state machine that
//! validates, dispatches, and settles each send.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_textarea::TextArea;

use crate::model::{
    ContactForm, FAILED_NOTICE, Field, SENT_NOTICE, SubmissionState, SubmitOutcome,
};
use crate::tui::action::Action;
use crate::tui::app::Section;
use crate::tui::widgets::{FIELD_HEIGHT, TextFieldView, draw_text_field};

const SPINNER: &[char] = &['|', '/', '-', '\\'];

/// State for the contact screen: the submission controller plus the input
/// widgets bound to it.
pub struct ContactState {
    form: ContactForm,
    focus: Field,
    textarea: TextArea<'static>,
    ticks: u64,
}

impl Default for ContactState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactState {
    /// Creates a new state with an idle form and focus on the name field.
    pub fn new() -> Self {
        Self {
            form: ContactForm::new(),
            focus: Field::Name,
            textarea: make_textarea(),
            ticks: 0,
        }
    }

    /// Returns the submission controller for rendering and assertions.
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Returns the field that currently has input focus.
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Returns the message editor for rendering.
    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    ///
    /// Editing is never blocked by the submission state; the controller's
    /// own guards decide what a submit key does.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Esc {
            return Action::Navigate(Section::Home);
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            return self.submit();
        }

        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus_prev();
                Action::None
            }
            _ if self.focus == Field::Message => self.edit_message(key),
            KeyCode::Enter => self.submit(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.push_char(self.focus, ch);
                Action::None
            }
            KeyCode::Backspace => {
                self.form.pop_char(self.focus);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Applies a finished dispatch to the controller.
    ///
    /// On a success that is still current this also clears the message
    /// editor alongside the fields and returns `true` so the caller arms
    /// the revert timer. Stale sequences leave everything untouched.
    pub fn mail_settled(&mut self, seq: u64, success: bool) -> bool {
        if success {
            let accepted = self.form.dispatch_succeeded(seq);
            if accepted {
                self.textarea = make_textarea();
                self.focus = Field::Name;
            }
            accepted
        } else {
            self.form.dispatch_failed(seq)
        }
    }

    /// Reverts `Sent` to `Idle` once the display window runs out.
    pub fn sent_window_elapsed(&mut self, seq: u64) -> bool {
        self.form.sent_window_elapsed(seq)
    }

    /// Drives the sending spinner.
    pub fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    fn spinner(&self) -> char {
        SPINNER[(self.ticks % SPINNER.len() as u64) as usize]
    }

    fn focus_next(&mut self) {
        self.focus = cycle(Field::all(), self.focus, true);
        self.apply_focus_style();
    }

    fn focus_prev(&mut self) {
        self.focus = cycle(Field::all(), self.focus, false);
        self.apply_focus_style();
    }

    /// The editor paints its own cursor, so it only gets one while focused.
    fn apply_focus_style(&mut self) {
        if self.focus == Field::Message {
            self.textarea
                .set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        } else {
            self.textarea.set_cursor_style(Style::default());
        }
    }

    /// Forwards a key to the message editor and mirrors the result into the
    /// controller, which clears any stale message error on edit.
    fn edit_message(&mut self, key: KeyEvent) -> Action {
        if self.textarea.input(key) {
            self.form
                .set_field(Field::Message, self.textarea.lines().join("\n"));
        }
        Action::None
    }

    fn submit(&mut self) -> Action {
        match self.form.submit() {
            SubmitOutcome::Dispatch { seq, message } => Action::Dispatch { seq, message },
            SubmitOutcome::Invalid | SubmitOutcome::Ignored => Action::None,
        }
    }
}

fn make_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default());
    textarea
}

/// Cycles through a slice to find the next or previous element.
fn cycle<T: PartialEq + Copy>(items: &[T], current: T, forward: bool) -> T {
    let pos = items.iter().position(|&x| x == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % items.len()
    } else {
        (pos + items.len() - 1) % items.len()
    };
    items[next]
}

/// Renders the contact screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_contact(state: &ContactState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Contact ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.form().state() == SubmissionState::Sent {
        draw_sent_panel(frame, inner);
        return;
    }

    let [intro_area, name_area, email_area, subject_area, message_area, status_area] =
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Min(FIELD_HEIGHT + 2),
            Constraint::Length(1),
        ])
        .areas(inner);

    let intro = Paragraph::new(vec![
        Line::from("Have a project in mind or just want to say hi? Drop me a message."),
        Line::from(Span::styled(
            "All fields are required.",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(intro, intro_area);

    let values = state.form().values();
    let errors = state.form().errors();
    for (field, field_area) in [
        (Field::Name, name_area),
        (Field::Email, email_area),
        (Field::Subject, subject_area),
    ] {
        let error_text = errors.get(&field).map(ToString::to_string);
        let view = TextFieldView {
            label: field.label(),
            value: values.get(field),
            error: error_text.as_deref(),
            focused: state.focus() == field,
        };
        draw_text_field(&view, frame, field_area);
    }

    let message_error = errors.get(&Field::Message).map(ToString::to_string);
    let border_color = if message_error.is_some() {
        Color::Red
    } else if state.focus() == Field::Message {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let message_block = Block::default()
        .title(format!("{} *", Field::Message.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let message_inner = message_block.inner(message_area);
    frame.render_widget(message_block, message_area);
    frame.render_widget(state.textarea(), message_inner);

    if let Some(err) = message_error {
        let err_area = Rect {
            x: message_area.x + 2,
            y: message_area.y + message_area.height.saturating_sub(1),
            width: message_area.width.saturating_sub(4),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(err, Style::default().fg(Color::Red))),
            err_area,
        );
    }

    let status = match state.form().state() {
        SubmissionState::Sending => Line::from(Span::styled(
            format!("{} Sending...", state.spinner()),
            Style::default().fg(Color::Yellow),
        )),
        SubmissionState::Failed => {
            Line::from(Span::styled(FAILED_NOTICE, Style::default().fg(Color::Red)))
        }
        _ => Line::from(Span::styled(
            "Tab: next field  Enter/Ctrl+S: send  Esc: back",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(status), status_area);
}

/// Success panel shown during the post-send display window.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn draw_sent_panel(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "\u{2713} Message Sent!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(SENT_NOTICE, Style::default().fg(Color::Green))),
    ];

    let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered,
    );
}
