//! Network command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::ConnectionArgs;
use crate::output;
use crate::session::CliSession;

#[derive(Args, Debug)]
pub struct NetworkArgs {
    /// Print compact JSON
    #[arg(long)]
    pub compact: bool,
}

pub async fn run(args: NetworkArgs, connection: &ConnectionArgs) -> Result<()> {
    let session = CliSession::open(connection)?;

    let network = session
        .client()
        .get_current_network()
        .await
        .context("Failed to fetch network");
    let network = session.finish(network)?;

    output::json(&network, args.compact)
}
