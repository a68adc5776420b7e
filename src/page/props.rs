//! Page description consumed by the head builder.
//!
//! Loaded from a TOML or JSON file:
//!
//! ```toml
//! title = "Hello"
//! description = "First post"
//! pathname = "/posts/hello"
//! page_type = "BlogPosting"
//! image = "/img/hello.jpg"
//! date_published = "2025-01-01"
//! tags = ["rust", "seo"]
//! canonical = true
//! ```

use super::PageType;
use crate::schema::Agent;
use crate::seo::{LinkTag, MetaTag};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Deserialize tags, treating `null` as empty vec
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Per-page input.
///
/// | Field            | Fallback                                 |
/// |------------------|------------------------------------------|
/// | `title`          | `[meta].title`                           |
/// | `description`    | `[meta].description`                     |
/// | `headline`       | the effective description                |
/// | `locale`         | `[i18n].default`, then `[meta].html_lang` |
/// | `pathname`       | `/`                                      |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageProps {
    pub title: Option<String>,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub locale: Option<String>,
    /// Site-relative path starting with `/`.
    pub pathname: String,
    pub page_type: PageType,
    /// Site-relative image path; the default social images are used when unset.
    pub image: Option<String>,
    pub date_published: Option<String>,
    pub date_modified: Option<String>,
    #[serde(deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    /// Emit `<link rel="canonical">`.
    pub canonical: bool,
    pub noindex: bool,
    /// Extra metas, appended after the generated ones.
    pub metas: Vec<MetaTag>,
    /// Extra links, merged per `[head].link_merge`.
    pub links: Vec<LinkTag>,
    pub author: Option<Agent>,
    pub publisher: Option<Agent>,
}

impl Default for PageProps {
    fn default() -> Self {
        Self {
            title: None,
            headline: None,
            description: None,
            locale: None,
            pathname: "/".into(),
            page_type: PageType::default(),
            image: None,
            date_published: None,
            date_modified: None,
            tags: Vec::new(),
            canonical: false,
            noindex: false,
            metas: Vec::new(),
            links: Vec::new(),
            author: None,
            publisher: None,
        }
    }
}

impl PageProps {
    /// Load from a `.json` file, or TOML for any other extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read page file: {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse page file: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse page file: {}", path.display()))
        }
    }

    /// Root path carries the organization schema.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.pathname == "/"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default() {
        let props = PageProps::default();
        assert_eq!(props.pathname, "/");
        assert!(props.is_root());
        assert_eq!(props.page_type, PageType::WebPage);
        assert!(!props.canonical);
    }

    #[test]
    fn test_deserialize_toml() {
        let props: PageProps = toml::from_str(
            r#"
title = "Hello"
pathname = "/posts/hello"
page_type = "BlogPosting"
tags = ["rust"]
noindex = true

[[metas]]
name = "yandex-verification"
content = "abc"

[[links]]
rel = "alternate"
href = "/feed.xml"
type = "application/rss+xml"

[author]
name = "Jane"
"#,
        )
        .unwrap();

        assert_eq!(props.title.as_deref(), Some("Hello"));
        assert!(!props.is_root());
        assert_eq!(props.page_type, PageType::BlogPosting);
        assert_eq!(props.tags, vec!["rust"]);
        assert!(props.noindex);
        assert_eq!(props.metas[0].name.as_deref(), Some("yandex-verification"));
        assert_eq!(props.links[0].kind.as_deref(), Some("application/rss+xml"));
        assert_eq!(props.author.map(|a| a.kind), Some("Person".to_string()));
    }

    #[test]
    fn test_null_tags() {
        let props: PageProps = serde_json::from_str(r#"{"tags": null}"#).unwrap();
        assert!(props.tags.is_empty());
    }

    #[test]
    fn test_from_path_by_extension() {
        let temp = TempDir::new().unwrap();

        let json = temp.path().join("page.json");
        fs::write(&json, r#"{"title": "From JSON", "pathname": "/a"}"#).unwrap();
        let props = PageProps::from_path(&json).unwrap();
        assert_eq!(props.title.as_deref(), Some("From JSON"));

        let toml_path = temp.path().join("page.toml");
        fs::write(&toml_path, "title = \"From TOML\"").unwrap();
        let props = PageProps::from_path(&toml_path).unwrap();
        assert_eq!(props.title.as_deref(), Some("From TOML"));
        assert!(props.is_root());
    }

    #[test]
    fn test_from_path_errors() {
        let temp = TempDir::new().unwrap();
        assert!(PageProps::from_path(&temp.path().join("missing.toml")).is_err());

        let bad = temp.path().join("bad.json");
        fs::write(&bad, "{").unwrap();
        let err = PageProps::from_path(&bad).unwrap_err();
        assert!(err.to_string().contains("Failed to parse page file"));
    }
}
