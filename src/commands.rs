//! Subcommand implementations.
//!
//! Each command returns the text to print on success; failures come back as
//! [`CliError`] for `main` to report.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::io::BufRead;
use std::path::{Path, PathBuf};

use admin_session::{
    AdminClient, ApiBase, Decision, FileSessionStore, LANDING_ROUTE, Lead, LoginFlow, LoginOutcome, PricingItem,
    RouteGuard,
};

use crate::cli::Command;
use crate::error::CliError;
use crate::transport::ReqwestTransport;

/// Login flow, guard and admin client sharing one session file.
pub struct AdminContext {
    flow: LoginFlow<ReqwestTransport, FileSessionStore>,
    guard: RouteGuard<FileSessionStore>,
    admin: AdminClient<ReqwestTransport, FileSessionStore>,
    session_path: PathBuf,
}

impl AdminContext {
    /// # Errors
    ///
    /// Returns [`CliError::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, session_path: PathBuf) -> Result<Self, CliError> {
        let transport = ReqwestTransport::new()?;
        let store = FileSessionStore::new(&session_path);
        let api = ApiBase::new(base_url);
        Ok(Self {
            flow: LoginFlow::new(transport.clone(), store.clone(), api.clone()),
            guard: RouteGuard::new(store.clone()),
            admin: AdminClient::new(transport, store, api),
            session_path,
        })
    }

    #[must_use]
    pub fn session_path(&self) -> &Path {
        &self.session_path
    }
}

/// Dispatch one parsed command.
///
/// # Errors
///
/// Propagates the failing command's [`CliError`].
pub async fn run(ctx: &AdminContext, command: Command, stdin: impl BufRead) -> Result<String, CliError> {
    match command {
        Command::Login { password } => {
            let password = resolve_password(password, stdin)?;
            login(ctx, &password).await
        }
        Command::Logout => logout(ctx),
        Command::Status => Ok(status(ctx)),
        Command::Leads => leads(ctx).await,
        Command::Lead { id } => lead(ctx, &id).await,
        Command::Pricing => pricing(ctx).await,
    }
}

/// Use the flag/env password if given, else the first line of `stdin`.
///
/// # Errors
///
/// Returns [`CliError::Stdin`] if stdin cannot be read.
pub fn resolve_password(password: Option<String>, mut stdin: impl BufRead) -> Result<String, CliError> {
    if let Some(password) = password {
        return Ok(password);
    }
    let mut line = String::new();
    stdin.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_owned())
}

/// # Errors
///
/// [`CliError::LoginRejected`] / [`CliError::Unreachable`] for the two failure
/// kinds, [`CliError::Submit`] if the password is empty.
pub async fn login(ctx: &AdminContext, password: &str) -> Result<String, CliError> {
    match ctx.flow.submit(password).await? {
        LoginOutcome::Authenticated => Ok(format!(
            "Logged in. Session saved to {}.",
            ctx.session_path.display()
        )),
        LoginOutcome::Rejected { message, attempts_remaining } => {
            Err(CliError::LoginRejected { message, attempts_remaining })
        }
        LoginOutcome::Unreachable { message } => Err(CliError::Unreachable(message)),
    }
}

/// # Errors
///
/// Returns [`CliError::Store`] if the session file cannot be removed.
pub fn logout(ctx: &AdminContext) -> Result<String, CliError> {
    ctx.flow.logout()?;
    Ok("Logged out.".to_owned())
}

#[must_use]
pub fn status(ctx: &AdminContext) -> String {
    match ctx.guard.check(LANDING_ROUTE) {
        Decision::Allow => "Logged in (session token present).".to_owned(),
        Decision::Deny { .. } => "Not logged in. Run `site-admin login` first.".to_owned(),
    }
}

/// # Errors
///
/// Returns [`CliError::Admin`]; a rejected token has already been cleared.
pub async fn leads(ctx: &AdminContext) -> Result<String, CliError> {
    let leads = ctx.admin.leads().await?;
    Ok(format_leads(&leads))
}

/// # Errors
///
/// Returns [`CliError::Admin`]; a rejected token has already been cleared.
pub async fn lead(ctx: &AdminContext, id: &str) -> Result<String, CliError> {
    let lead = ctx.admin.lead(id).await?;
    Ok(format_lead(&lead))
}

/// # Errors
///
/// Returns [`CliError::Admin`]; a rejected token has already been cleared.
pub async fn pricing(ctx: &AdminContext) -> Result<String, CliError> {
    let items = ctx.admin.pricing().await?;
    Ok(format_pricing(&items))
}

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or("-")
}

pub(crate) fn format_leads(leads: &[Lead]) -> String {
    if leads.is_empty() {
        return "No leads.".to_owned();
    }
    leads
        .iter()
        .map(|lead| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                lead.id,
                or_dash(Some(&lead.name)),
                or_dash(Some(&lead.email)),
                or_dash(lead.service.as_deref()),
                or_dash(lead.created_at.as_deref()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn format_lead(lead: &Lead) -> String {
    let fields = [
        ("id", Some(lead.id.as_str())),
        ("name", Some(lead.name.as_str())),
        ("email", Some(lead.email.as_str())),
        ("phone", lead.phone.as_deref()),
        ("service", lead.service.as_deref()),
        ("status", lead.status.as_deref()),
        ("received", lead.created_at.as_deref()),
        ("message", lead.message.as_deref()),
    ];
    fields
        .iter()
        .map(|(label, value)| format!("{label:<9}{}", or_dash(*value)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn format_pricing(items: &[PricingItem]) -> String {
    if items.is_empty() {
        return "No prices.".to_owned();
    }
    items
        .iter()
        .map(|item| {
            let price = item
                .price
                .filter(|p| p.is_finite())
                .map_or_else(|| "on quote".to_owned(), |p| format!("{p:.2}"));
            format!("{}\t{}\t{price}", or_dash(Some(&item.service)), or_dash(item.unit.as_deref()))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
