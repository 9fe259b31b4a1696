//! CLI session: a client seeded from, and written back to, storage.

pub mod storage;

use anyhow::{Context, Result, bail};
use tracing::{debug, warn};

use openlaw_client::ApiClient;
use openlaw_core::{ClientConfig, SessionToken};

use crate::cli::ConnectionArgs;

use storage::StoredSession;

/// A client plus the token it was seeded with.
#[derive(Debug)]
pub struct CliSession {
    client: ApiClient,
    seeded: Option<SessionToken>,
}

impl CliSession {
    /// Build a client for the configured root, reusing the stored token if it
    /// was issued by the same root.
    pub fn open(args: &ConnectionArgs) -> Result<Self> {
        let config = client_config(args)?;
        let root = config.root.to_string();
        let client = ApiClient::new(config).context("Failed to create client")?;

        let stored = match storage::load_session() {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable session file");
                None
            }
        };

        let seeded = match stored {
            Some(stored) if stored.root == root => {
                debug!(saved_at = %stored.saved_at, "Reusing stored session");
                Some(SessionToken::new(stored.token))
            }
            Some(stored) => {
                warn!(
                    stored_root = %stored.root,
                    root = %root,
                    "Stored session belongs to another root, not reusing it"
                );
                None
            }
            None => None,
        };

        let client = match &seeded {
            Some(token) => client.with_session_token(token.clone()),
            None => client,
        };

        Ok(Self { client, seeded })
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Persist the token, then hand back the command's outcome.
    ///
    /// A persist failure only replaces a successful outcome; a failed command
    /// keeps its own error and the persist failure is logged.
    pub fn finish<T>(&self, result: Result<T>) -> Result<T> {
        settle(result, self.persist())
    }

    /// Write the token back if the server rotated it.
    fn persist(&self) -> Result<()> {
        let current = self.client.session_token();
        if current == self.seeded {
            return Ok(());
        }

        match current {
            Some(token) if !token.is_empty() => {
                debug!("Persisting refreshed session token");
                storage::save_session(&StoredSession::new(
                    self.client.config().root.to_string(),
                    token.as_str(),
                ))
            }
            // The server cleared the token: the stored one is no longer valid.
            _ => storage::clear_session().map(|_| ()),
        }
    }
}

fn settle<T>(result: Result<T>, persisted: Result<()>) -> Result<T> {
    match (result, persisted) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(e)) => Err(e.context("Failed to save session")),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(persist)) => {
            warn!(error = %persist, "Failed to save session");
            Err(e)
        }
    }
}

fn client_config(args: &ConnectionArgs) -> Result<ClientConfig> {
    let config = ClientConfig::from_root(&args.root).context("Invalid API root")?;

    match (&args.basic_user, &args.basic_password) {
        (Some(user), Some(password)) => Ok(config.with_basic_auth(user, password)),
        (None, None) => Ok(config),
        _ => bail!("--basic-user and --basic-password must be given together"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(user: Option<&str>, password: Option<&str>) -> ConnectionArgs {
        ConnectionArgs {
            root: "https://lib.openlaw.io/api/v1".to_string(),
            basic_user: user.map(str::to_string),
            basic_password: password.map(str::to_string),
        }
    }

    #[test]
    fn basic_auth_needs_both_parts() {
        assert!(client_config(&args(Some("gw"), None)).is_err());
        assert!(client_config(&args(None, Some("pw"))).is_err());

        let config = client_config(&args(Some("gw"), Some("pw"))).unwrap();
        assert_eq!(config.auth.unwrap().username(), "gw");
    }

    #[test]
    fn command_error_wins_over_persist_error() {
        let result: Result<()> = Err(anyhow::anyhow!("Failed to search templates"));
        let err = settle(result, Err(anyhow::anyhow!("disk full"))).unwrap_err();
        assert_eq!(err.to_string(), "Failed to search templates");
    }

    #[test]
    fn persist_error_fails_successful_command() {
        let err = settle(Ok(1), Err(anyhow::anyhow!("disk full"))).unwrap_err();
        assert_eq!(err.to_string(), "Failed to save session");
        assert_eq!(err.root_cause().to_string(), "disk full");
    }

    #[test]
    fn successful_command_and_persist() {
        assert_eq!(settle(Ok(1), Ok(())).unwrap(), 1);
        let err = settle::<()>(Err(anyhow::anyhow!("boom")), Ok(())).unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn root_is_validated() {
        let mut bad = args(None, None);
        bad.root = "not a url".to_string();
        assert!(client_config(&bad).is_err());
    }
}
