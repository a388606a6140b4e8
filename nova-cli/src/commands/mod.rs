//! Command handlers for the launcher CLI.

pub mod create_token;
pub mod deploy;
