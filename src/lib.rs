//! # site-admin
//!
//! Command-line access to the website's admin area. Uses the same login flow,
//! route guard and admin client as the browser frontend, with `reqwest` for
//! HTTP and a JSON file for the session token.

pub mod cli;
pub mod commands;
pub mod error;
pub mod transport;

pub use error::CliError;
