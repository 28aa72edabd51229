#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! termfolio: a personal portfolio for the terminal.
//!
//! Rendering and navigation live in [`tui`]; the contact form's validation
//! and submission lifecycle live in [`model`], and [`mail`] carries accepted
//! messages out over SMTP.

pub mod config;
pub mod mail;
pub mod model;
pub mod tui;
