/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Usage:
/// ```ignore
/// log_status!("stamp", "{}: stamped version '{}'", package, version);
/// ```
///
/// Status lines never go to stdout: the binaries' stdout is a contract
/// (a filename, a display name, or a version string) that release
/// scripts capture and parse.
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

pub mod core;
pub mod utils;

// Re-export everything from core for ergonomic library use
// Users can write `icy_build::apps` instead of `icy_build::core::apps`
pub use core::*;
pub use utils::*;
