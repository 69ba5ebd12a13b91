//! # partage-client
//!
//! UI-agnostic client core for Partage: the application state, the
//! lifecycle commands and the view projections.
//!
//! The embedding front end (web shell, CLI, test harness) owns an
//! [`AppState`], dispatches commands from [`commands`] and redraws from
//! the [`views`] projections after every successful mutation.  Nothing
//! in this crate touches a screen.

pub mod commands;
pub mod error;
pub mod state;
pub mod views;

use tracing_subscriber::{fmt, EnvFilter};

pub use error::ClientError;
pub use state::AppState;

/// Initialise the tracing subscriber for an embedding shell.
///
/// Call once at startup.  `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("partage_client=debug,partage_store=info,warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
