//! Memory Allocator Configuration
//!
//! Every encoded line is a fresh byte buffer, and a large file turns into a long
//! burst of short-lived allocations. mimalloc handles that pattern better than
//! the system allocator.

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
