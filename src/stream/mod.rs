//! Line-oriented I/O stages.
//!
//! - [`reader`]: Scans a source into lines, terminators stripped
//! - [`writer`]: Writes lines to a sink, terminators appended, then flushes

pub mod reader;
pub mod writer;

pub use reader::LineReader;
pub use writer::LineWriter;
