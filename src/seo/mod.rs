//! Head assembly: meta and link tags plus JSON-LD scripts.
//!
//! [`SeoHead`] turns a [`SeoConfig`](crate::config::SeoConfig) and
//! [`PageProps`](crate::page::PageProps) into a [`Head`], which renders to an
//! HTML fragment or serializes to JSON.

mod builder;
mod head;
mod tag;

pub use builder::SeoHead;
pub use head::{Head, JsonLd};
pub use tag::{LinkTag, MetaTag};
