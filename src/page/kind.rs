//! Page type.

use serde::{Deserialize, Serialize};

/// Page type, selecting the JSON-LD `@type` and the `og:type`.
///
/// Any unrecognized value deserializes to `WebPage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PageType {
    Article,
    BlogPosting,
    Blog,
    #[default]
    #[serde(other)]
    WebPage,
}

impl PageType {
    /// Article-like pages carry author, headline and dates.
    #[inline]
    pub fn is_article(&self) -> bool {
        matches!(self, Self::Article | Self::BlogPosting)
    }

    /// schema.org `@type`.
    pub fn schema_type(&self) -> &'static str {
        match self {
            Self::Article => "Article",
            Self::BlogPosting => "BlogPosting",
            Self::Blog => "Blog",
            Self::WebPage => "WebPage",
        }
    }

    /// `og:type` value.
    pub fn og_type(&self) -> &'static str {
        if self.is_article() { "article" } else { "website" }
    }
}
