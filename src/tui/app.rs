use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use chrono::{Datelike, Utc};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tokio::runtime::Handle;

use crate::mail::Mailer;
use crate::model::{ContactMessage, Profile, SENT_WINDOW};

use super::action::Action;
use super::error::AppError;
use super::event::AppEvent;
use super::screens::{
    AboutState, ContactState, HelpState, HomeState, ProjectsState, SkillsState, draw_about,
    draw_contact, draw_help, draw_home, draw_projects, draw_skills,
};
use super::widgets::{draw_footer, draw_nav_bar};

/// How long the event loop waits for input before counting a tick.
const TICK: Duration = Duration::from_millis(100);

/// All sections the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Animated introduction.
    Home,
    /// Bio and availability.
    About,
    /// Skill groups with details.
    Skills,
    /// Project gallery with a category filter.
    Projects,
    /// Contact form.
    Contact,
    /// Show keybinding help.
    Help,
}

impl Section {
    /// Sections reachable from the navigation bar, in tab order.
    pub fn tabs() -> &'static [Section] {
        &[
            Self::Home,
            Self::About,
            Self::Skills,
            Self::Projects,
            Self::Contact,
        ]
    }

    /// Human-readable label for the navigation bar and help titles.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
            Self::Help => "Help",
        }
    }

    /// Maps a digit key to its tab, `1` being the first.
    fn from_digit(ch: char) -> Option<Self> {
        let index = ch.to_digit(10)? as usize;
        Self::tabs().get(index.checked_sub(1)?).copied()
    }

    /// The tab after this one, wrapping around. Help falls back to Home.
    fn next(self) -> Self {
        let tabs = Self::tabs();
        match tabs.iter().position(|&section| section == self) {
            Some(pos) => tabs[(pos + 1) % tabs.len()],
            None => Self::Home,
        }
    }

    /// The tab before this one, wrapping around. Help falls back to Home.
    fn prev(self) -> Self {
        let tabs = Self::tabs();
        match tabs.iter().position(|&section| section == self) {
            Some(pos) => tabs[(pos + tabs.len() - 1) % tabs.len()],
            None => Self::Home,
        }
    }
}

/// Top-level application state.
pub struct App {
    section: Section,
    home: HomeState,
    about: AboutState,
    skills: SkillsState,
    projects: ProjectsState,
    contact: ContactState,
    help: HelpState,
    mailer: Arc<dyn Mailer>,
    runtime: Handle,
    tx: Sender<AppEvent>,
    rx: Receiver<AppEvent>,
    footer: String,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the [`Section::Home`] section.
    ///
    /// `runtime` is where mail dispatches and timers run; their results
    /// come back through an internal channel drained by the event loop.
    pub fn new(mailer: Arc<dyn Mailer>, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::channel();
        let footer = Profile::builtin().footer_line(Utc::now().year());
        Self {
            section: Section::Home,
            home: HomeState::new(),
            about: AboutState::new(),
            skills: SkillsState::new(),
            projects: ProjectsState::new(),
            contact: ContactState::new(),
            help: HelpState::new(),
            mailer,
            runtime,
            tx,
            rx,
            footer,
            should_quit: false,
        }
    }

    /// Main event loop: draw → poll input or tick → drain background events.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(TICK)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            } else {
                self.on_tick();
            }

            while let Ok(app_event) = self.rx.try_recv() {
                self.handle_event(app_event);
            }
        }
        Ok(())
    }

    /// Renders the navigation bar, the active section, and the footer.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [nav_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        draw_nav_bar(self.section, frame, nav_area);

        match self.section {
            Section::Home => draw_home(&self.home, frame, body_area),
            Section::About => draw_about(&self.about, frame, body_area),
            Section::Skills => draw_skills(&self.skills, frame, body_area),
            Section::Projects => draw_projects(&self.projects, frame, body_area),
            Section::Contact => draw_contact(&self.contact, frame, body_area),
            Section::Help => draw_help(&self.help, frame, body_area),
        }

        draw_footer(&self.footer, "?: help  q: quit", frame, footer_area);
    }

    /// Handles a key event: global navigation first, then the active
    /// section's own handler.
    ///
    /// The contact section gets every key so typing is never stolen by a
    /// navigation shortcut; it hands control back through its actions.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.section == Section::Contact {
            let action = self.contact.handle_key(key);
            self.apply_action(action);
            return;
        }

        if let Some(action) = self.global_action(key) {
            self.apply_action(action);
            return;
        }

        let action = match self.section {
            Section::Home => self.home.handle_key(key),
            Section::About => self.about.handle_key(key),
            Section::Skills => self.skills.handle_key(key),
            Section::Projects => self.projects.handle_key(key),
            Section::Contact => Action::None,
            Section::Help => self.help.handle_key(key),
        };
        self.apply_action(action);
    }

    /// Keys that work on every section outside the contact form.
    fn global_action(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char(ch @ '1'..='5') => Section::from_digit(ch).map(Action::Navigate),
            KeyCode::Tab | KeyCode::Right => Some(Action::Navigate(self.section.next())),
            KeyCode::BackTab | KeyCode::Left => Some(Action::Navigate(self.section.prev())),
            KeyCode::Char('?') => {
                if self.section == Section::Help {
                    Some(Action::None)
                } else {
                    self.help.set_origin(self.section);
                    self.help.reset();
                    Some(Action::Navigate(Section::Help))
                }
            }
            KeyCode::Char('q') | KeyCode::Esc => match self.section {
                Section::Home => Some(Action::Quit),
                // Help handles q/Esc itself to return to its origin.
                Section::Help => None,
                _ => Some(Action::Navigate(Section::Home)),
            },
            _ => None,
        }
    }

    fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(section) => self.section = section,
            Action::Dispatch { seq, message } => self.spawn_dispatch(seq, message),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Hands a validated message to the mailer on the background runtime.
    /// The outcome comes back through the channel tagged with `seq`.
    fn spawn_dispatch(&self, seq: u64, message: ContactMessage) {
        let mailer = Arc::clone(&self.mailer);
        let tx = self.tx.clone();
        tracing::info!(seq, reply_to = %message.email, "dispatching contact message");
        self.runtime.spawn(async move {
            let outcome = mailer.send(&message).await;
            let _ = tx.send(AppEvent::MailSettled { seq, outcome });
        });
    }

    /// Arms the timer that reverts the success notice back to the form.
    fn spawn_revert_timer(&self, seq: u64) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            tokio::time::sleep(SENT_WINDOW).await;
            let _ = tx.send(AppEvent::SentWindowElapsed { seq });
        });
    }

    /// Applies a background event to the contact screen. Events carrying a
    /// stale sequence number are ignored by the form itself.
    fn handle_event(&mut self, app_event: AppEvent) {
        match app_event {
            AppEvent::MailSettled { seq, outcome } => match outcome {
                Ok(()) => {
                    if self.contact.mail_settled(seq, true) {
                        self.spawn_revert_timer(seq);
                    }
                }
                Err(error) => {
                    tracing::error!(seq, %error, "contact message failed to send");
                    self.contact.mail_settled(seq, false);
                }
            },
            AppEvent::SentWindowElapsed { seq } => {
                self.contact.sent_window_elapsed(seq);
            }
        }
    }

    /// Advances time-driven state while no input is pending.
    fn on_tick(&mut self) {
        self.home.on_tick();
        self.contact.on_tick();
    }

    /// Returns the current section.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the contact screen state.
    pub fn contact(&self) -> &ContactState {
        &self.contact
    }
}
