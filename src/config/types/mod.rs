//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types and diagnostics    |
//! | `field`  | Type-safe field paths for diagnostics        |
//! | `value`  | Single-or-list values                        |

mod error;
mod field;
mod value;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use value::OneOrMany;
