//! Whoami command implementation.

use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;

use openlaw_core::ApiRoot;

use crate::cli::ConnectionArgs;
use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub fn run(_args: WhoamiArgs, connection: &ConnectionArgs) -> Result<()> {
    let session = storage::load_session()
        .context("Failed to load session")?
        .context("No active session. Run 'openlaw login' first.")?;

    output::field("Root", &session.root);
    output::field(
        "Saved",
        &session
            .saved_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
    );

    let configured = ApiRoot::new(&connection.root).map(|root| root.to_string());
    if configured.as_deref().ok() != Some(session.root.as_str()) {
        output::warning(&format!(
            "Session belongs to {}, not the configured root {}",
            session.root, connection.root
        ));
    }

    Ok(())
}
