//! Terminal output.
//!
//! - [`display`]: Confirmation line printed after a successful run
//! - [`progress`]: Line counter shown while the destination is written

pub mod display;
pub mod progress;

pub use display::show_success;
