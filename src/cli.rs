//! Command-line surface.

#[cfg(test)]
#[path = "cli_test.rs"]
mod cli_test;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::CliError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Parser, Debug)]
#[command(name = "site-admin", about = "Admin area of the painting company website")]
pub struct Cli {
    /// Backend base URL.
    #[arg(long, env = "SITE_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Where the session token is kept between invocations.
    #[arg(long, env = "SITE_ADMIN_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Log in and store the session token. Reads the password from stdin when
    /// neither --password nor SITE_ADMIN_PASSWORD is given.
    Login {
        #[arg(long, env = "SITE_ADMIN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Forget the stored session token.
    Logout,
    /// Report whether the admin area is accessible with the stored session.
    Status,
    /// List leads.
    Leads,
    /// Show one lead.
    Lead { id: String },
    /// Show the price list.
    Pricing,
}

impl Cli {
    /// Session file from the flag/env, else `<config dir>/site-admin/session.json`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::NoSessionPath`] when neither is available.
    pub fn session_path(&self) -> Result<PathBuf, CliError> {
        if let Some(path) = &self.session_file {
            return Ok(path.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join("site-admin").join("session.json"))
            .ok_or(CliError::NoSessionPath)
    }
}
