//! Shared helpers.

pub mod html;
pub mod phone;

/// `None` for a missing or empty string.
///
/// Optional inputs left blank in TOML or JSON count as absent.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
