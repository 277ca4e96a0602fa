//! lingodeck - a terminal language drill with AI-generated lessons
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod provider;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
