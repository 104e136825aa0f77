//! Line encoding.
//!
//! Pure transformation from source lines to destination lines: substitution
//! through a [`Charset`], then surrounding whitespace is trimmed. Lines are
//! raw bytes; trimming decodes UTF-8 at the edges and stops at the first byte
//! that is not whitespace, valid or not.

use bstr::ByteSlice;

use crate::charset::{CHARSET, Charset};

/// Encodes lines with a fixed substitution table.
#[derive(Debug, Clone, Copy)]
pub struct Encoder {
    charset: Charset,
}

impl Encoder {
    #[inline]
    pub fn new(charset: Charset) -> Self {
        Self { charset }
    }

    /// Substitutes and trims a single line.
    pub fn encode_line(&self, line: &[u8]) -> Vec<u8> {
        let encoded = self.charset.apply(line);
        let trimmed = encoded.trim();

        if trimmed.len() == encoded.len() { encoded } else { trimmed.to_vec() }
    }

    /// Encodes every line, preserving count and order.
    pub fn encode_lines<S: AsRef<[u8]>>(&self, lines: &[S]) -> Vec<Vec<u8>> {
        lines.iter().map(|line| self.encode_line(line.as_ref())).collect()
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new(CHARSET)
    }
}
