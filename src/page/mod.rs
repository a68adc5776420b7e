//! Page input: type and per-page properties.

mod kind;
mod props;

pub use kind::PageType;
pub use props::PageProps;
