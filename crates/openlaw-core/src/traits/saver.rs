//! Download sink trait.

use async_trait::async_trait;

use crate::Result;

/// Persists a downloaded file under a suggested name.
///
/// This is the host's "save bytes as a file" capability. A desktop host
/// writes to disk, a browser-like host triggers its download prompt.
#[async_trait]
pub trait FileSaver: Send + Sync {
    /// Persist `bytes` as a file named after `suggested_name`.
    async fn save(&self, bytes: &[u8], suggested_name: &str) -> Result<()>;
}
