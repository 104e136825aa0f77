use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::{APP_NAME, LOG_LEVEL};
use crate::file::File;
use crate::processor::Processor;

#[derive(Parser)]
#[command(name = APP_NAME, version, about = "Rewrite smart quotes, ampersands, hyphens and accented letters in a text file as ASCII and HTML entities, trimming every line.")]
pub struct App {
    /// Text file to encode.
    #[arg(value_name = "SOURCE")]
    source: PathBuf,

    /// File to write the encoded text to (created or truncated).
    #[arg(value_name = "DESTINATION")]
    destination: PathBuf,
}

impl App {
    pub fn init() -> Result<Self> {
        let subscriber = tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(LOG_LEVEL).with_file(true).with_line_number(true).finish();
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(Self::parse())
    }

    pub async fn execute(self) -> Result<()> {
        let input = File::new(self.source);
        let output = File::new(self.destination);

        let processor = Processor::default().with_progress(std::io::stderr().is_terminal());
        let summary = processor.process(&input, &output).await?;

        crate::ui::show_success(output.path(), &summary);

        Ok(())
    }
}
