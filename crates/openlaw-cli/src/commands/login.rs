//! Login command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;

use openlaw_core::Credentials;

use crate::cli::ConnectionArgs;
use crate::output;
use crate::session::storage::{self, StoredSession};
use crate::session::CliSession;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email address
    #[arg(long)]
    pub user: String,

    /// Account password
    #[arg(long, env = "OPENLAW_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn run(args: LoginArgs, connection: &ConnectionArgs) -> Result<()> {
    let session = CliSession::open(connection)?;
    let client = session.client();
    client.clear_session_token();

    eprintln!("{}", "Logging in...".dimmed());

    client
        .login(Credentials::new(&args.user, &args.password))
        .await
        .context("Failed to login")?;

    let token = match client.session_token() {
        Some(token) if !token.is_empty() => token,
        _ => bail!("Login succeeded but the server returned no session token"),
    };

    let root = client.config().root.to_string();
    storage::save_session(&StoredSession::new(&root, token.as_str()))
        .context("Failed to save session")?;

    output::success("Logged in successfully");
    println!();
    output::field("User", &args.user);
    output::field("Root", &root);

    Ok(())
}
