//! Submission controllers
//!
//! Each controller runs validate, encode, send and react for one form. The
//! TUI drives the three steps separately so the request runs on a spawned
//! task: `prepare` validates and starts an attempt, the pending payload is
//! sent, and `complete` applies the outcome. Outcomes for an attempt the
//! controller no longer owns are dropped.

mod login;
mod register;

pub use login::{LoginController, LoginOutcome};
pub use register::{RegisterController, RegisterOutcome, IMAGE_REQUIRED};

/// Shown when the service could not be reached or sent an unreadable reply
pub const NETWORK_FAILURE: &str = "An error occurred. Please try again.";
