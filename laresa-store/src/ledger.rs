use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Append-only flat file with one published reservation per line.
#[derive(Debug, Clone)]
pub struct ReservationLedger {
    path: PathBuf,
}

impl ReservationLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `payload` followed by a newline, creating the file if needed
    pub async fn append(&self, payload: &[u8]) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        let mut line = Vec::with_capacity(payload.len() + 1);
        line.extend_from_slice(payload);
        line.push(b'\n');

        file.write_all(&line).await?;
        file.flush().await
    }
}
