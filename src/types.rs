//! Common type definitions for textenc.
//!
//! - [`Phase`]: Names the stage of a run, used in error context and logs
//! - [`Summary`]: Outcome of a successful run

use std::time::Duration;

use strum::Display;

/// A stage of the read, encode, write cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    /// Source file is scanned into memory.
    Read,

    /// Lines are substituted and trimmed.
    Encode,

    /// Encoded lines are written to the destination.
    Write,
}

impl Phase {
    /// Label attached to errors raised while in this phase.
    #[inline]
    pub fn failure(self) -> String {
        format!("{self} failed")
    }
}

/// Result of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Lines written to the destination.
    pub lines: usize,

    /// Bytes written to the destination, terminators included.
    pub bytes: u64,

    /// Wall-clock time of the full read, encode, write cycle.
    pub elapsed: Duration,
}
