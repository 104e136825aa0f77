//! Destination writing.
//!
//! Lines are written in order, each followed by [`LINE_TERMINATOR`], and the
//! sink is flushed explicitly before returning. A buffered sink can accept
//! every write and still lose the tail on flush, so the flush result is
//! checked like any other write.

use anyhow::{Context, Result};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::config::LINE_TERMINATOR;
use crate::ui::progress::Bar;

/// Writes lines to a sink.
#[derive(Debug, Clone, Copy)]
pub struct LineWriter {
    terminator: &'static str,
}

impl LineWriter {
    #[inline]
    pub fn new() -> Self {
        Self { terminator: LINE_TERMINATOR }
    }

    /// Writes every line to `output`, then flushes it.
    ///
    /// `output` is dropped before returning. Returns the number of bytes
    /// written, terminators included.
    pub async fn write_all<W, S>(&self, mut output: W, lines: &[S], progress: Option<&Bar>) -> Result<u64>
    where
        W: AsyncWrite + Unpin,
        S: AsRef<[u8]>,
    {
        let mut written = 0u64;

        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            self.write_line(&mut output, line).await.with_context(|| format!("failed to write line {}", index + 1))?;
            written += (line.len() + self.terminator.len()) as u64;

            if let Some(bar) = progress {
                bar.add(1);
            }
        }

        output.flush().await.context("failed to flush output")?;

        Ok(written)
    }

    async fn write_line<W: AsyncWrite + Unpin>(&self, output: &mut W, line: &[u8]) -> std::io::Result<()> {
        output.write_all(line).await?;
        output.write_all(self.terminator.as_bytes()).await
    }
}

impl Default for LineWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::pin::Pin;
    use std::task::{Context as TaskContext, Poll};

    use tokio::io::BufWriter;

    use super::*;

    /// Accepts every write; fails on flush.
    struct FlushFailure;

    impl AsyncWrite for FlushFailure {
        fn poll_write(self: Pin<&mut Self>, _cx: &mut TaskContext<'_>, buf: &[u8]) -> Poll<io::Result<usize>> {
            Poll::Ready(Ok(buf.len()))
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut TaskContext<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Err(io::Error::other("no space left")))
        }

        fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut TaskContext<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }
    }

    /// Rejects every write.
    struct WriteFailure;

    impl AsyncWrite for WriteFailure {
        fn poll_write(self: Pin<&mut Self>, _cx: &mut TaskContext<'_>, _buf: &[u8]) -> Poll<io::Result<usize>> {
            Poll::Ready(Err(io::Error::other("read-only filesystem")))
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut TaskContext<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }

        fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut TaskContext<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }
    }

    #[tokio::test]
    async fn test_write_lines() {
        let mut output = Vec::new();
        let written = LineWriter::new().write_all(&mut output, &["alpha", "", "beta"], None).await.unwrap();

        assert_eq!(output, b"alpha\n\nbeta\n");
        assert_eq!(written, output.len() as u64);
    }

    #[tokio::test]
    async fn test_write_raw_bytes() {
        let mut output = Vec::new();
        LineWriter::new().write_all(&mut output, &[b"caf\xe9".to_vec()], None).await.unwrap();

        assert_eq!(output, b"caf\xe9\n");
    }

    #[tokio::test]
    async fn test_write_nothing() {
        let mut output = Vec::new();
        let lines: [&str; 0] = [];
        let written = LineWriter::new().write_all(&mut output, &lines, None).await.unwrap();

        assert!(output.is_empty());
        assert_eq!(written, 0);
    }

    #[tokio::test]
    async fn test_write_advances_progress() {
        let bar = Bar::new(2, "Writing").unwrap();
        let mut output = Vec::new();
        LineWriter::new().write_all(&mut output, &["a", "b"], Some(&bar)).await.unwrap();

        assert_eq!(output, b"a\nb\n");
    }

    #[tokio::test]
    async fn test_flush_failure_is_reported() {
        let output = BufWriter::new(FlushFailure);

        let err = LineWriter::new().write_all(output, &["buffered"], None).await.unwrap_err();
        assert_eq!(err.to_string(), "failed to flush output");
        assert_eq!(err.root_cause().to_string(), "no space left");
    }

    #[tokio::test]
    async fn test_write_failure_is_reported() {
        let err = LineWriter::new().write_all(WriteFailure, &["first", "second"], None).await.unwrap_err();
        assert_eq!(err.to_string(), "failed to write line 1");
    }
}
