//! Projects screen — filterable project list with a detail pane.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::model::{Profile, Project, ProjectCategory};
use crate::tui::action::Action;

/// State for the projects screen.
#[derive(Debug, Clone, Default)]
pub struct ProjectsState {
    selected: usize,
    filter: Option<ProjectCategory>,
}

impl ProjectsState {
    /// Creates a new state showing all projects, first one selected.
    pub fn new() -> Self {
        Self {
            selected: 0,
            filter: None,
        }
    }

    /// Returns the selected index within the filtered list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Returns the active category filter, `None` for all projects.
    pub fn filter(&self) -> Option<ProjectCategory> {
        self.filter
    }

    /// Returns the display label for the active filter.
    pub fn filter_label(&self) -> &'static str {
        self.filter.map_or("All", |category| category.label())
    }

    /// Returns the projects visible under the active filter.
    pub fn filtered(&self) -> Vec<&'static Project> {
        Profile::builtin()
            .projects
            .iter()
            .filter(|project| self.filter.is_none_or(|category| project.category == category))
            .collect()
    }

    /// Returns the currently selected project, if the filtered list has one.
    pub fn selected_project(&self) -> Option<&'static Project> {
        self.filtered().get(self.selected).copied()
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                let last = self.filtered().len().saturating_sub(1);
                self.selected = (self.selected + 1).min(last);
                Action::None
            }
            KeyCode::Home => {
                self.selected = 0;
                Action::None
            }
            KeyCode::End => {
                self.selected = self.filtered().len().saturating_sub(1);
                Action::None
            }
            KeyCode::Char('f') => {
                self.cycle_filter();
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Advances the filter All → Frontend → Full Stack → UI/UX Design → All,
    /// resetting the selection.
    fn cycle_filter(&mut self) {
        let categories = ProjectCategory::all();
        self.filter = match self.filter {
            None => Some(categories[0]),
            Some(current) => categories
                .iter()
                .position(|&c| c == current)
                .and_then(|pos| categories.get(pos + 1))
                .copied(),
        };
        self.selected = 0;
    }
}

/// Renders the projects screen.
#[mutants::skip]
pub fn draw_projects(state: &ProjectsState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" Projects [{}] ", state.filter_label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [list_area, detail_area] =
        Layout::horizontal([Constraint::Length(28), Constraint::Min(0)]).areas(inner);

    let title_lines: Vec<Line> = state
        .filtered()
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let style = if i == state.selected() {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!(" {} ", project.title), style))
        })
        .collect();
    frame.render_widget(Paragraph::new(title_lines), list_area);

    let [detail_content, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(detail_area);

    if let Some(project) = state.selected_project() {
        let mut detail_lines = vec![
            Line::from(Span::styled(
                project.title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                project.category.label(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                project.description,
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Technologies",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        for tech in project.technologies {
            detail_lines.push(Line::from(Span::styled(
                format!("  \u{25aa} {tech}"),
                Style::default().fg(Color::Yellow),
            )));
        }
        frame.render_widget(
            Paragraph::new(detail_lines).wrap(Wrap { trim: true }),
            detail_content,
        );
    }

    let footer = Paragraph::new("\u{2191}/\u{2193}: choose  f: filter  Home/End: first/last")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
