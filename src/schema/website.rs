//! `WebSite` JSON-LD node.

use super::CONTEXT;
use serde::Serialize;

/// Builder input.
#[derive(Debug, Clone, Copy)]
pub struct WebSiteInput<'a> {
    pub site_url: &'a str,
    pub site_title: &'a str,
    pub site_description: &'a str,
    pub html_lang: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebSiteSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "inLanguage")]
    pub in_language: String,
}

/// Build the site-level node. Fixed shape, values copied verbatim.
pub fn website_schema(input: WebSiteInput<'_>) -> WebSiteSchema {
    WebSiteSchema {
        context: CONTEXT,
        kind: "WebSite",
        url: input.site_url.to_string(),
        name: input.site_title.to_string(),
        description: input.site_description.to_string(),
        in_language: input.html_lang.to_string(),
    }
}
