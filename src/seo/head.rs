//! Assembled head content and its HTML rendering.

use super::{LinkTag, MetaTag};
use crate::schema::{OrganizationSchema, PageSchema, WebSiteSchema};
use crate::utils::html::{escape, escape_attr, escape_script_json};
use serde::Serialize;

/// One `<script type="application/ld+json">` document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsonLd {
    WebSite(WebSiteSchema),
    Page(PageSchema),
    Organization(Box<OrganizationSchema>),
}

impl JsonLd {
    /// Compact JSON, safe to embed in a `<script>` element.
    pub fn to_script_text(&self) -> serde_json::Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(escape_script_json(&json).into_owned())
    }
}

/// Head content for one page.
///
/// `html_lang` belongs on the `<html>` element and is not part of the
/// fragment produced by [`to_html`](Self::to_html).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Head {
    pub html_lang: String,
    pub title: String,
    pub metas: Vec<MetaTag>,
    pub links: Vec<LinkTag>,
    pub scripts: Vec<JsonLd>,
}

impl Head {
    /// Metas whose `name` or `property` equals `key`, in order.
    pub fn metas_for<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a MetaTag> {
        self.metas.iter().filter(move |meta| meta.key().1 == key)
    }

    /// Render as an HTML fragment, one element per line.
    pub fn to_html(&self) -> serde_json::Result<String> {
        let mut html = String::with_capacity(4096);

        html.push_str("<title>");
        html.push_str(&escape(&self.title));
        html.push_str("</title>\n");

        for meta in &self.metas {
            let (attr, key) = meta.key();
            html.push_str("<meta ");
            html.push_str(attr);
            push_attr_value(&mut html, key);
            html.push_str(" content");
            push_attr_value(&mut html, &meta.content);
            html.push_str(">\n");
        }

        for link in &self.links {
            html.push_str("<link rel");
            push_attr_value(&mut html, &link.rel);
            if let Some(kind) = &link.kind {
                html.push_str(" type");
                push_attr_value(&mut html, kind);
            }
            if let Some(hreflang) = &link.hreflang {
                html.push_str(" hreflang");
                push_attr_value(&mut html, hreflang);
            }
            html.push_str(" href");
            push_attr_value(&mut html, &link.href);
            html.push_str(">\n");
        }

        for script in &self.scripts {
            html.push_str("<script type=\"application/ld+json\">");
            html.push_str(&script.to_script_text()?);
            html.push_str("</script>\n");
        }

        Ok(html)
    }
}

fn push_attr_value(html: &mut String, value: &str) {
    html.push_str("=\"");
    html.push_str(&escape_attr(value));
    html.push('"');
}
