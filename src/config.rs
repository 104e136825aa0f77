//! Global Configuration Constants
//!
//! Compile-time parameters for textenc. There is no configuration file and no
//! environment lookup; everything the tool needs to know up front lives here.

use tracing::Level;

/// Application name used in user-facing output.
pub const APP_NAME: &str = "textenc";

/// Terminator appended after every line written to the destination file.
///
/// Source files may use `\n` or `\r\n`; output is always normalized to `\n`.
pub const LINE_TERMINATOR: &str = "\n";

/// Most verbose level the tracing subscriber will emit.
///
/// Diagnostics go to stderr, so raising this never pollutes the confirmation
/// line printed on stdout.
pub const LOG_LEVEL: Level = Level::WARN;

// === Progress Bar ===

/// Template for the line counter shown while the destination is written.
pub const PROGRESS_TEMPLATE: &str = "{msg} [{bar:40.cyan/blue}] {pos}/{len} lines ({per_sec}, {eta})";

/// Fill, tip and empty characters of the progress bar.
pub const PROGRESS_CHARS: &str = "●○ ";
