//! `[head]` configuration: how the head tag lists are assembled.
//!
//! ```toml
//! [head]
//! tag_naming = "property"   # "name" | "property"
//! article_tags = true
//! link_merge = "append"     # "append" | "replace"
//! ```

use serde::{Deserialize, Serialize};

/// Attribute used for Open Graph style tags (`og:*`, `fb:*`, `article:*`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagNaming {
    /// `<meta name="og:title">` for every tag.
    Name,
    /// `<meta property="og:title">` for Open Graph tags (default).
    #[default]
    Property,
}

/// How page-supplied links combine with the generated base links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkMerge {
    /// Page links follow the base links (default).
    #[default]
    Append,
    /// Page links, when given, replace the base links.
    Replace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadOptions {
    pub tag_naming: TagNaming,
    /// Emit `article:published_time`, `article:modified_time` and
    /// `article:tag` on article pages.
    pub article_tags: bool,
    pub link_merge: LinkMerge,
}

impl Default for HeadOptions {
    fn default() -> Self {
        Self {
            tag_naming: TagNaming::Property,
            article_tags: true,
            link_merge: LinkMerge::Append,
        }
    }
}
