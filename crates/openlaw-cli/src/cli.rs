//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use crate::commands::contract::ContractCommand;
use crate::commands::login::LoginArgs;
use crate::commands::logout::LogoutArgs;
use crate::commands::network::NetworkArgs;
use crate::commands::template::TemplateCommand;
use crate::commands::users::UsersCommand;
use crate::commands::whoami::WhoamiArgs;

pub const DEFAULT_ROOT: &str = "https://lib.openlaw.io/api/v1";

/// Command-line client for the OpenLaw API.
#[derive(Parser, Debug)]
#[command(name = "openlaw")]
#[command(author, version = env!("OPENLAW_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where and how to reach the API.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// API root URL
    #[arg(long, env = "OPENLAW_ROOT", default_value = DEFAULT_ROOT, global = true)]
    pub root: String,

    /// Basic-auth user for gateways in front of the API
    #[arg(long, env = "OPENLAW_BASIC_USER", global = true)]
    pub basic_user: Option<String>,

    /// Basic-auth password
    #[arg(long, env = "OPENLAW_BASIC_PASSWORD", hide_env_values = true, global = true)]
    pub basic_password: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and persist the session token
    Login(LoginArgs),

    /// Forget the persisted session
    Logout(LogoutArgs),

    /// Display the persisted session
    Whoami(WhoamiArgs),

    /// Template operations
    Template(TemplateCommand),

    /// Contract operations
    Contract(ContractCommand),

    /// User administration
    Users(UsersCommand),

    /// Show the Ethereum network in use
    Network(NetworkArgs),
}
