use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{PROGRESS_CHARS, PROGRESS_TEMPLATE};

pub struct Bar {
    bar: ProgressBar,
}

impl Bar {
    pub fn new(total: u64, description: &str) -> Result<Self> {
        let bar = ProgressBar::new(total);
        let style = ProgressStyle::default_bar().template(PROGRESS_TEMPLATE)?.progress_chars(PROGRESS_CHARS);

        bar.set_style(style);
        bar.set_message(description.to_owned());

        Ok(Self { bar })
    }

    pub fn add(&self, delta: u64) {
        self.bar.inc(delta);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for Bar {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
