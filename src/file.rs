//! File handles for the source and destination of a run.
//!
//! [`File`] is a thin path wrapper. Opening happens only when a reader or
//! writer is requested, and the handle it returns is owned by the caller, so
//! it is closed when the consuming stage drops it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use tokio::fs;
use tokio::io::{BufReader, BufWriter};

/// A file on disk, addressed by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
}

impl File {
    /// Wraps `path` without touching the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the file for buffered reading.
    ///
    /// Fails if the file is missing, is a directory, or is not readable.
    pub async fn reader(&self) -> Result<BufReader<fs::File>> {
        let file = fs::File::open(&self.path).await.with_context(|| format!("failed to open file: {}", self.path.display()))?;

        // Opening a directory succeeds on some platforms; the first read would fail instead.
        let meta = file.metadata().await.with_context(|| format!("failed to open file: {}", self.path.display()))?;
        ensure!(!meta.is_dir(), "failed to open file: {} is a directory", self.path.display());

        Ok(BufReader::new(file))
    }

    /// Creates or truncates the file for buffered writing.
    ///
    /// Parent directories are not created; a missing directory is an error.
    pub async fn writer(&self) -> Result<BufWriter<fs::File>> {
        let file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .await
            .with_context(|| format!("failed to create file: {}", self.path.display()))?;

        Ok(BufWriter::new(file))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    use super::*;

    #[tokio::test]
    async fn test_create_and_open_file() {
        let dir = tempdir().unwrap();
        let file = File::new(dir.path().join("test.txt"));

        {
            let mut writer = file.writer().await.unwrap();
            writer.write_all(b"Hello, World!").await.unwrap();
            writer.flush().await.unwrap();
        }

        let mut content = String::new();
        file.reader().await.unwrap().read_to_string(&mut content).await.unwrap();
        assert_eq!(content, "Hello, World!");
    }

    #[tokio::test]
    async fn test_writer_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "previous contents").unwrap();

        let mut writer = File::new(&path).writer().await.unwrap();
        writer.write_all(b"new").await.unwrap();
        writer.flush().await.unwrap();
        drop(writer);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[tokio::test]
    async fn test_open_missing_file() {
        let dir = tempdir().unwrap();
        let file = File::new(dir.path().join("missing.txt"));

        let err = file.reader().await.unwrap_err();
        assert!(err.to_string().starts_with("failed to open file"));
    }

    #[tokio::test]
    async fn test_open_directory() {
        let dir = tempdir().unwrap();
        assert!(File::new(dir.path()).reader().await.is_err());
    }

    #[tokio::test]
    async fn test_create_in_missing_directory() {
        let dir = tempdir().unwrap();
        let file = File::new(dir.path().join("no/such/dir/out.txt"));

        let err = file.writer().await.unwrap_err();
        assert!(err.to_string().starts_with("failed to create file"));
        assert!(!file.path().exists());
    }
}
