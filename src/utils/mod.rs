//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - File I/O with consistent error handling
//! - `parser` - Text extraction primitives

pub mod io;
pub mod parser;
