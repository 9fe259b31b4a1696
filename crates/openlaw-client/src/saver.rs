//! Filesystem download sink.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument};

use openlaw_core::disposition::DEFAULT_DOWNLOAD_NAME;
use openlaw_core::{Error, FileSaver, Result};

/// Saves downloads into a directory.
///
/// Only the final component of the suggested name is used, so a server
/// cannot direct a download outside the directory. Existing files with the
/// same name are overwritten.
#[derive(Debug, Clone)]
pub struct DirectorySaver {
    dir: PathBuf,
}

impl DirectorySaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory downloads are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path a download with this suggested name is written to.
    pub fn path_for(&self, suggested_name: &str) -> PathBuf {
        let name = Path::new(suggested_name)
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_DOWNLOAD_NAME);
        self.dir.join(name)
    }
}

#[async_trait]
impl FileSaver for DirectorySaver {
    #[instrument(skip(self, bytes), fields(dir = %self.dir.display(), len = bytes.len()))]
    async fn save(&self, bytes: &[u8], suggested_name: &str) -> Result<()> {
        let path = self.path_for(suggested_name);
        let save_error = |e: std::io::Error| Error::Save {
            name: path.display().to_string(),
            message: e.to_string(),
        };

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(save_error)?;

        let mut file = tokio::fs::File::create(&path).await.map_err(save_error)?;
        file.write_all(bytes).await.map_err(save_error)?;
        file.flush().await.map_err(save_error)?;

        debug!(path = %path.display(), "Saved download");
        Ok(())
    }
}
