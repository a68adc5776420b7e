//! `<meta>` and `<link>` tag records.

use crate::config::TagNaming;
use serde::{Deserialize, Serialize};

/// Prefixes of tags that take the `property` attribute under
/// [`TagNaming::Property`].
const PROPERTY_PREFIXES: [&str; 3] = ["og:", "fb:", "article:"];

/// A `<meta>` tag: exactly one of `name` / `property`, plus `content`.
///
/// Page files may supply extra metas in either form:
///
/// ```toml
/// [[metas]]
/// name = "yandex-verification"
/// content = "abc123"
///
/// [[metas]]
/// property = "og:video"
/// content = "https://example.com/intro.mp4"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(default)]
    pub content: String,
}

impl MetaTag {
    pub fn name(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            property: None,
            content: content.into(),
        }
    }

    pub fn property(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: None,
            property: Some(property.into()),
            content: content.into(),
        }
    }

    /// Pick the attribute for `key` according to `naming`.
    pub fn keyed(naming: TagNaming, key: &str, content: impl Into<String>) -> Self {
        let is_property = PROPERTY_PREFIXES.iter().any(|p| key.starts_with(p));
        match naming {
            TagNaming::Property if is_property => Self::property(key, content),
            _ => Self::name(key, content),
        }
    }

    /// Attribute name and value identifying the tag.
    pub fn key(&self) -> (&'static str, &str) {
        match (&self.property, &self.name) {
            (Some(property), _) => ("property", property),
            (None, Some(name)) => ("name", name),
            (None, None) => ("name", ""),
        }
    }
}

/// A `<link>` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTag {
    pub rel: String,
    pub href: String,
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
    #[serde(
        alias = "hrefLang",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hreflang: Option<String>,
}

impl LinkTag {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            kind: None,
            hreflang: None,
        }
    }

    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_hreflang(mut self, hreflang: impl Into<String>) -> Self {
        self.hreflang = Some(hreflang.into());
        self
    }
}
