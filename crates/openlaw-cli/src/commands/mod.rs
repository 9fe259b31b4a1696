//! Subcommand implementations.

pub mod contract;
pub mod login;
pub mod logout;
pub mod network;
pub mod template;
pub mod users;
pub mod whoami;

use anyhow::Result;
use clap::Args;

use crate::cli::{Commands, ConnectionArgs};

/// Paging options shared by the search commands.
#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Results per page
    #[arg(long, default_value_t = 20)]
    pub page_size: u32,
}

pub async fn handle(command: Commands, connection: &ConnectionArgs) -> Result<()> {
    match command {
        Commands::Login(args) => login::run(args, connection).await,
        Commands::Logout(args) => logout::run(args),
        Commands::Whoami(args) => whoami::run(args, connection),
        Commands::Template(cmd) => template::handle(cmd, connection).await,
        Commands::Contract(cmd) => contract::handle(cmd, connection).await,
        Commands::Users(cmd) => users::handle(cmd, connection).await,
        Commands::Network(args) => network::run(args, connection).await,
    }
}
