//! Source scanning.
//!
//! The reader drains a buffered source into memory one line at a time. A
//! line ends at `\n`; a trailing `\r` is dropped with it. A final line
//! without a terminator is still yielded, and an empty source yields no
//! lines at all. Lines are kept as raw bytes, so the source encoding is never
//! validated.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Collects every line of a source.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineReader;

impl LineReader {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Reads `input` to the end and returns its lines in order.
    ///
    /// `input` is consumed and dropped before returning, on success and on
    /// failure alike. An I/O error aborts the scan; the lines already read are
    /// discarded.
    pub async fn read_all<R: AsyncBufRead + Unpin>(&self, input: R) -> Result<Vec<Vec<u8>>> {
        let mut segments = input.split(b'\n');
        let mut out = Vec::new();

        loop {
            let number = out.len() + 1;
            match segments.next_segment().await.with_context(|| format!("failed to read line {number}"))? {
                Some(mut line) => {
                    if line.last() == Some(&b'\r') {
                        line.pop();
                    }
                    out.push(line);
                }
                None => break,
            }
        }

        Ok(out)
    }
}
