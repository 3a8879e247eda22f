//! hutres - command-line client for the hut reservation service
//!
//! Logs in with a CSRF-protected form login and reads the current user
//! and the list of managed huts, all through one cookie-carrying session.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod logging;
pub mod output;
pub mod session;
pub mod utils;

pub use api::{HutReservation, Overview};
pub use error::{HutError, Result};
pub use session::Session;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
