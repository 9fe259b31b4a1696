//! openlaw-client - Session-gated HTTP client for the OpenLaw API.
//!
//! All calls flow through one pipeline owned by [`ApiClient`]: wait for the
//! latest login to settle, attach the session token and basic auth, dispatch
//! through a [`Transport`](openlaw_core::Transport), and keep the session
//! token current from the `OPENLAW_JWT` response header.
//!
//! # Example
//!
//! ```no_run
//! use openlaw_client::ApiClient;
//! use openlaw_core::Credentials;
//!
//! # async fn example() -> Result<(), openlaw_core::Error> {
//! let client = ApiClient::from_root("https://lib.openlaw.io")?;
//!
//! // Not awaited: later calls wait for the login on their own.
//! let login = client.login(Credentials::new("jane@openlaw.io", "password"));
//!
//! let results = client.template_search("sale", 1, 10).await?;
//! println!("{results}");
//!
//! login.await?;
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
mod gate;
mod saver;
mod transport;

pub use client::ApiClient;
pub use gate::{LoginHandle, ReadyHandle};
pub use saver::DirectorySaver;
pub use transport::HttpTransport;
