// Public modules
pub mod apps;
pub mod artifact;
pub mod error;
pub mod stamp;

// Re-export common types for convenience
pub use error::{Error, Result};
