use std::process::ExitCode;

use clap::Parser;
use site_admin::cli::Cli;
use site_admin::commands::{self, AdminContext};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let result = match cli.session_path() {
        Ok(path) => match AdminContext::new(&cli.base_url, path) {
            Ok(ctx) => commands::run(&ctx, cli.command, std::io::stdin().lock()).await,
            Err(e) => Err(e),
        },
        Err(e) => Err(e),
    };

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
