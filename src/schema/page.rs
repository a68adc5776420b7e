//! Page JSON-LD node (`WebPage`, `Blog`, `Article`, `BlogPosting`).

use super::CONTEXT;
use crate::page::PageType;
use serde::{Deserialize, Serialize};

fn default_image_object() -> String {
    "ImageObject".into()
}

fn default_agent_type() -> String {
    "Person".into()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageObject {
    #[serde(rename = "@type", default = "default_image_object")]
    pub kind: String,
    pub url: String,
}

/// Author or publisher (`Person` / `Organization`).
///
/// In page files:
///
/// ```toml
/// [author]
/// "@type" = "Person"
/// name = "Jane Doe"
/// url = "https://example.com/about/jane"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    #[serde(rename = "@type", default = "default_agent_type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,
}

impl Agent {
    /// Publisher synthesized from site data.
    pub fn organization(name: Option<&str>, url: &str, logo: &str) -> Self {
        Self {
            kind: "Organization".into(),
            name: name.map(str::to_string),
            url: Some(url.to_string()),
            logo: Some(ImageObject {
                kind: default_image_object(),
                url: logo.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebPageRef {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

/// Builder input.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageSchemaInput<'a> {
    pub organization_name: Option<&'a str>,
    pub site_url: &'a str,
    pub site_logo: &'a str,
    /// Absolute page URL.
    pub url: &'a str,
    pub title: &'a str,
    pub headline: &'a str,
    pub html_lang: &'a str,
    /// Absolute image URL.
    pub image_url: Option<&'a str>,
    pub date_published: Option<&'a str>,
    pub date_modified: Option<&'a str>,
    pub page_type: PageType,
    pub publisher: Option<&'a Agent>,
    pub author: Option<&'a Agent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub in_language: String,
    pub publisher: Agent,

    // Article / BlogPosting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Agent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_entity_of_page: Option<WebPageRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,

    // WebPage / Blog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Build the page node.
///
/// Article-like pages get `author` (falling back to the publisher),
/// `mainEntityOfPage`, `headline` and the dates that are set. Other pages
/// get `url` and `description` (the headline).
pub fn page_schema(input: PageSchemaInput<'_>) -> PageSchema {
    let publisher = input.publisher.cloned().unwrap_or_else(|| {
        Agent::organization(input.organization_name, input.site_url, input.site_logo)
    });

    let mut schema = PageSchema {
        context: CONTEXT,
        kind: input.page_type.schema_type(),
        name: input.title.to_string(),
        in_language: input.html_lang.to_string(),
        publisher,
        author: None,
        main_entity_of_page: None,
        headline: None,
        date_published: None,
        date_modified: None,
        url: None,
        description: None,
        image: None,
    };

    if input.page_type.is_article() {
        schema.author = Some(
            input
                .author
                .cloned()
                .unwrap_or_else(|| schema.publisher.clone()),
        );
        schema.main_entity_of_page = Some(WebPageRef {
            kind: "WebPage",
            id: input.url.to_string(),
        });
        schema.headline = Some(input.headline.to_string());
        schema.date_published = input.date_published.map(str::to_string);
        schema.date_modified = input.date_modified.map(str::to_string);
    } else {
        schema.url = Some(input.url.to_string());
        schema.description = Some(input.headline.to_string());
    }

    schema.image = input.image_url.map(str::to_string);
    schema
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn input(page_type: PageType) -> PageSchemaInput<'static> {
        PageSchemaInput {
            organization_name: Some("Acme"),
            site_url: "https://example.com",
            site_logo: "https://example.com/logo.png",
            url: "https://example.com/posts/hello",
            title: "Hello",
            headline: "Hello, world",
            html_lang: "en",
            page_type,
            ..Default::default()
        }
    }

    fn to_json(schema: PageSchema) -> Value {
        serde_json::to_value(schema).unwrap()
    }

    mod article {
        use super::*;

        #[test]
        fn with_dates() {
            let value = to_json(page_schema(PageSchemaInput {
                date_published: Some("2025-01-01"),
                date_modified: Some("2025-01-02"),
                ..input(PageType::Article)
            }));

            assert_eq!(value["@type"], "Article");
            assert_eq!(value["datePublished"], "2025-01-01");
            assert_eq!(value["dateModified"], "2025-01-02");
            assert_eq!(value["headline"], "Hello, world");
            assert_eq!(
                value["mainEntityOfPage"],
                json!({"@type": "WebPage", "@id": "https://example.com/posts/hello"})
            );
            assert!(value.get("url").is_none());
            assert!(value.get("description").is_none());
        }

        #[test]
        fn dates_omitted_when_missing() {
            let value = to_json(page_schema(input(PageType::BlogPosting)));
            assert_eq!(value["@type"], "BlogPosting");
            assert!(value.get("datePublished").is_none());
            assert!(value.get("dateModified").is_none());
        }

        #[test]
        fn author_falls_back_to_publisher() {
            let value = to_json(page_schema(input(PageType::Article)));
            assert_eq!(value["author"], value["publisher"]);
            assert_eq!(
                value["publisher"],
                json!({
                    "@type": "Organization",
                    "name": "Acme",
                    "url": "https://example.com",
                    "logo": {"@type": "ImageObject", "url": "https://example.com/logo.png"}
                })
            );
        }

        #[test]
        fn provided_author_and_publisher() {
            let author = Agent {
                kind: "Person".into(),
                name: Some("Jane".into()),
                url: None,
                logo: None,
            };
            let publisher = Agent {
                kind: "Organization".into(),
                name: Some("Press".into()),
                url: None,
                logo: None,
            };
            let value = to_json(page_schema(PageSchemaInput {
                author: Some(&author),
                publisher: Some(&publisher),
                ..input(PageType::Article)
            }));
            assert_eq!(value["author"], json!({"@type": "Person", "name": "Jane"}));
            assert_eq!(
                value["publisher"],
                json!({"@type": "Organization", "name": "Press"})
            );
        }
    }

    mod web_page {
        use super::*;

        #[test]
        fn blog_has_url_and_description() {
            let value = to_json(page_schema(input(PageType::Blog)));
            assert_eq!(value["@type"], "Blog");
            assert_eq!(value["url"], "https://example.com/posts/hello");
            assert_eq!(value["description"], "Hello, world");
            assert!(value.get("author").is_none());
            assert!(value.get("headline").is_none());
            assert!(value.get("mainEntityOfPage").is_none());
        }

        #[test]
        fn default_type_is_web_page() {
            let value = to_json(page_schema(input(PageType::default())));
            assert_eq!(value["@type"], "WebPage");
            assert!(value.get("author").is_none());
        }

        #[test]
        fn dates_ignored() {
            let value = to_json(page_schema(PageSchemaInput {
                date_published: Some("2025-01-01"),
                ..input(PageType::WebPage)
            }));
            assert!(value.get("datePublished").is_none());
        }
    }

    #[test]
    fn test_common_fields() {
        let value = to_json(page_schema(input(PageType::WebPage)));
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["name"], "Hello");
        assert_eq!(value["inLanguage"], "en");
    }

    #[test]
    fn test_image() {
        let value = to_json(page_schema(PageSchemaInput {
            image_url: Some("https://example.com/img/a.jpg"),
            ..input(PageType::Article)
        }));
        assert_eq!(value["image"], "https://example.com/img/a.jpg");

        let value = to_json(page_schema(input(PageType::Article)));
        assert!(value.get("image").is_none());
    }

    #[test]
    fn test_publisher_without_name() {
        let value = to_json(page_schema(PageSchemaInput {
            organization_name: None,
            ..input(PageType::WebPage)
        }));
        assert!(value["publisher"].get("name").is_none());
    }

    #[test]
    fn test_idempotent() {
        let a = page_schema(input(PageType::Article));
        let b = page_schema(input(PageType::Article));
        assert_eq!(a, b);
    }

    #[test]
    fn test_agent_deserialize_default_type() {
        let agent: Agent = toml::from_str(r#"name = "Jane""#).unwrap();
        assert_eq!(agent.kind, "Person");
        assert_eq!(agent.name.as_deref(), Some("Jane"));
    }
}
