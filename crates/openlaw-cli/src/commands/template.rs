//! Template subcommands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use openlaw_client::DirectorySaver;

use super::PageArgs;
use crate::cli::ConnectionArgs;
use crate::output;
use crate::session::CliSession;

#[derive(Args, Debug)]
pub struct TemplateCommand {
    #[command(subcommand)]
    pub command: TemplateSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TemplateSubcommand {
    /// Fetch a template by title, or one revision's source with --version
    Get {
        title: String,

        /// Revision to fetch
        #[arg(long)]
        version: Option<String>,

        /// Print compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// List the revisions of a template
    Versions {
        title: String,

        #[command(flatten)]
        paging: PageArgs,

        /// Print compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Search templates by keyword
    Search {
        #[arg(default_value = "")]
        keyword: String,

        #[command(flatten)]
        paging: PageArgs,

        /// Search deleted templates instead
        #[arg(long)]
        deleted: bool,

        /// Print compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Download a template as JSON
    Download {
        title: String,

        /// Directory to save into
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

pub async fn handle(cmd: TemplateCommand, connection: &ConnectionArgs) -> Result<()> {
    let session = CliSession::open(connection)?;
    let result = run(cmd.command, &session).await;
    session.finish(result)
}

async fn run(command: TemplateSubcommand, session: &CliSession) -> Result<()> {
    let client = session.client();

    match command {
        TemplateSubcommand::Get {
            title,
            version: Some(version),
            ..
        } => {
            let source = client
                .get_template_version(&title, &version)
                .await
                .context("Failed to fetch template version")?;
            println!("{}", source);
            Ok(())
        }
        TemplateSubcommand::Get {
            title,
            version: None,
            compact,
        } => {
            let template = client
                .get_template(&title)
                .await
                .context("Failed to fetch template")?;
            output::json(&template, compact)
        }
        TemplateSubcommand::Versions {
            title,
            paging,
            compact,
        } => {
            let versions = client
                .get_template_versions(&title, paging.page_size, paging.page)
                .await
                .context("Failed to list template versions")?;
            output::json(&versions, compact)
        }
        TemplateSubcommand::Search {
            keyword,
            paging,
            deleted,
            compact,
        } => {
            let results = if deleted {
                client
                    .search_deleted_templates(&keyword, paging.page, paging.page_size)
                    .await
            } else {
                client
                    .template_search(&keyword, paging.page, paging.page_size)
                    .await
            };
            let results = results.context("Failed to search templates")?;
            output::json(&results, compact)
        }
        TemplateSubcommand::Download { title, out } => {
            let saver = DirectorySaver::new(out);
            let name = client
                .download_template_as_json(&title, &saver)
                .await
                .context("Failed to download template")?;
            output::success(&format!("Saved {}", saver.path_for(&name).display()));
            Ok(())
        }
    }
}
