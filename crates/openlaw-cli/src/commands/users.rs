//! User subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use super::PageArgs;
use crate::cli::ConnectionArgs;
use crate::output;
use crate::session::CliSession;

#[derive(Args, Debug)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UsersSubcommand {
    /// Search users by keyword (admin only)
    Search {
        #[arg(default_value = "")]
        keyword: String,

        #[command(flatten)]
        paging: PageArgs,

        /// Print compact JSON
        #[arg(long)]
        compact: bool,
    },
}

pub async fn handle(cmd: UsersCommand, connection: &ConnectionArgs) -> Result<()> {
    let session = CliSession::open(connection)?;

    let result = match cmd.command {
        UsersSubcommand::Search {
            keyword,
            paging,
            compact,
        } => match session
            .client()
            .search_users(&keyword, paging.page, paging.page_size)
            .await
        {
            Ok(users) => output::json(&users, compact),
            Err(e) => Err(e).context("Failed to search users"),
        },
    };

    session.finish(result)
}
