//! Read, encode, write orchestration.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::encoder::Encoder;
use crate::file::File;
use crate::stream::{LineReader, LineWriter};
use crate::types::{Phase, Summary};
use crate::ui::progress::Bar;

/// Runs one source file through the encoder into a destination file.
///
/// The phases are strictly sequential: the source is read to the end and
/// closed before anything is encoded, and the destination is only created
/// once encoding is done. A failed read therefore never touches the
/// destination. A failed write leaves whatever was written in place.
pub struct Processor {
    encoder: Encoder,
    reader: LineReader,
    writer: LineWriter,
    show_progress: bool,
}

impl Processor {
    pub fn new(encoder: Encoder) -> Self {
        Self { encoder, reader: LineReader::new(), writer: LineWriter::new(), show_progress: false }
    }

    /// Enables the line counter during the write phase.
    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    #[instrument(skip_all, fields(source = %input.path().display(), destination = %output.path().display()))]
    pub async fn process(&self, input: &File, output: &File) -> Result<Summary> {
        let start = Instant::now();

        let lines = self.read(input).await.context(Phase::Read.failure())?;
        debug!(phase = %Phase::Read, lines = lines.len(), "source scanned");

        let encoded = self.encoder.encode_lines(&lines);
        debug!(phase = %Phase::Encode, lines = encoded.len(), "lines encoded");

        let bytes = self.write(output, &encoded).await.context(Phase::Write.failure())?;
        debug!(phase = %Phase::Write, bytes, "destination written");

        Ok(Summary { lines: encoded.len(), bytes, elapsed: start.elapsed() })
    }

    async fn read(&self, input: &File) -> Result<Vec<Vec<u8>>> {
        let source = input.reader().await?;
        self.reader.read_all(source).await
    }

    async fn write(&self, output: &File, lines: &[Vec<u8>]) -> Result<u64> {
        let destination = output.writer().await?;

        let progress = if self.show_progress { Some(Bar::new(lines.len() as u64, "Writing")?) } else { None };
        let written = self.writer.write_all(destination, lines, progress.as_ref()).await?;

        if let Some(bar) = &progress {
            bar.finish();
        }

        Ok(written)
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::new(Encoder::default())
    }
}
