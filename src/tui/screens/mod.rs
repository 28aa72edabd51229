//! TUI screen implementations.

pub mod about;
pub mod contact;
pub mod help;
pub mod home;
pub mod projects;
pub mod skills;

pub use about::{AboutState, draw_about};
pub use contact::{ContactState, draw_contact};
pub use help::{HelpState, draw_help};
pub use home::{HomeState, draw_home};
pub use projects::{ProjectsState, draw_projects};
pub use skills::{SkillsState, draw_skills};
