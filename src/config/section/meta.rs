//! `[meta]` configuration: default document language and texts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    /// `<html lang>` value (e.g., "en", "ru").
    pub html_lang: String,

    /// `og:locale` value (e.g., "en_US").
    pub og_locale: String,

    /// Default page title.
    pub title: String,

    /// Default page description.
    pub description: String,

    /// `og:site_name` when no locale-specific short name exists.
    pub short_name: Option<String>,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            html_lang: "en".into(),
            og_locale: "en_US".into(),
            title: String::new(),
            description: String::new(),
            short_name: None,
        }
    }
}

impl SiteMeta {
    /// Name used for `og:site_name`.
    pub fn site_name(&self) -> &str {
        self.short_name.as_deref().unwrap_or(&self.title)
    }
}
