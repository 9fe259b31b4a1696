//! Contract subcommands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};

use openlaw_client::DirectorySaver;

use super::PageArgs;
use crate::cli::ConnectionArgs;
use crate::output;
use crate::session::CliSession;

#[derive(Args, Debug)]
pub struct ContractCommand {
    #[command(subcommand)]
    pub command: ContractSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ContractSubcommand {
    /// Fetch a contract
    Get {
        id: String,

        /// Access token of a shared contract
        #[arg(long)]
        access_token: Option<String>,

        /// Print compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Search contracts by keyword
    Search {
        #[arg(default_value = "")]
        keyword: String,

        #[command(flatten)]
        paging: PageArgs,

        /// Sort order understood by the server
        #[arg(long, default_value = "creationDate")]
        sort_by: String,

        /// Print compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show the signature status of a contract
    Status {
        id: String,

        /// Access token of a shared contract
        #[arg(long)]
        access_token: Option<String>,

        /// Print compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Export a contract
    Download {
        id: String,

        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Pdf)]
        format: ExportFormat,

        /// Directory to save into
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Docx,
    Pdf,
    Json,
}

pub async fn handle(cmd: ContractCommand, connection: &ConnectionArgs) -> Result<()> {
    let session = CliSession::open(connection)?;
    let result = run(cmd.command, &session).await;
    session.finish(result)
}

async fn run(command: ContractSubcommand, session: &CliSession) -> Result<()> {
    let client = session.client();

    match command {
        ContractSubcommand::Get {
            id,
            access_token,
            compact,
        } => {
            let contract = client
                .get_contract(&id, access_token.as_deref())
                .await
                .context("Failed to fetch contract")?;
            output::json(&contract, compact)
        }
        ContractSubcommand::Search {
            keyword,
            paging,
            sort_by,
            compact,
        } => {
            let results = client
                .search_contracts(&keyword, paging.page, paging.page_size, &sort_by)
                .await
                .context("Failed to search contracts")?;
            output::json(&results, compact)
        }
        ContractSubcommand::Status {
            id,
            access_token,
            compact,
        } => {
            let status = client
                .load_contract_status(&id, access_token.as_deref())
                .await
                .context("Failed to load contract status")?;
            output::json(&status, compact)
        }
        ContractSubcommand::Download { id, format, out } => {
            let saver = DirectorySaver::new(out);
            let name = match format {
                ExportFormat::Docx => client.download_contract_as_docx(&id, &saver).await,
                ExportFormat::Pdf => client.download_contract_as_pdf(&id, &saver).await,
                ExportFormat::Json => client.download_contract_as_json(&id, &saver).await,
            }
            .context("Failed to download contract")?;
            output::success(&format!("Saved {}", saver.path_for(&name).display()));
            Ok(())
        }
    }
}
