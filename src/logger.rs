//! Colored `log!` and verbose-only `debug!` macros.
//!
//! Messages go to stderr so rendered head markup on stdout stays clean.
//!
//! # Example
//!
//! ```ignore
//! log!("render"; "wrote {} tags", count);
//! debug!("config"; "loaded {}", path.display());
//! ```

use owo_colors::{OwoColorize, Style};
use std::fmt;
use std::io::{Write, stderr};
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enable or disable `debug!` output.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Log a message with a colored module prefix.
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Like `log!`, but only when `--verbose` is set.
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Write `[module] message` to stderr.
pub fn log(module: &str, message: &str) {
    let mut err = stderr().lock();
    let _ = writeln!(err, "{} {message}", Prefix(module));
}

/// Module prefix, colored by the command that emits it.
struct Prefix<'a>(&'a str);

impl fmt::Display for Prefix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("[{}]", self.0);
        let style = match self.0.to_ascii_lowercase().as_str() {
            "render" | "schema" => Style::new().bright_blue(),
            "check" => Style::new().bright_green(),
            "error" => Style::new().bright_red(),
            _ => Style::new().bright_yellow(),
        };
        write!(f, "{}", text.style(style.bold()))
    }
}
