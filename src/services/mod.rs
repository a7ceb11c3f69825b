//! Service layer for board file I/O.
//!
//! Services wrap the parser with path handling and error context so that
//! callers (the CLI, embedding applications) never touch the format directly.

pub mod boards;

// Re-export commonly used types
pub use boards::BoardService;
