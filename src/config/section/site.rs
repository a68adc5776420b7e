//! `[site]` configuration.
//!
//! Site-wide values shared by every page: base URL, logo, theme color and
//! the default social preview images.

use crate::config::{ConfigDiagnostics, FieldPath, OneOrMany};
use serde::{Deserialize, Serialize};

/// Default social preview image descriptor.
///
/// `src` is a prefix: the rendered image is `<src><locale>.jpg`, so one
/// image per locale can be shipped (e.g. `/img/og-en.jpg`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub src: String,
    pub width: u32,
    pub height: u32,
}

impl ImageConfig {
    /// Image path for a locale.
    pub fn src_for(&self, locale: &str) -> String {
        format!("{}{}.jpg", self.src, locale)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site origin without trailing slash (e.g., "https://example.com").
    pub url: String,

    /// Absolute logo URL.
    pub logo: String,

    /// `theme-color` meta value.
    pub theme_color: String,

    /// Default Open Graph image.
    pub og_image: ImageConfig,

    /// Default Twitter Card image.
    pub twitter_image: ImageConfig,

    /// Facebook App ID (`fb:app_id`).
    pub fb_app_id: Option<String>,

    /// Twitter handle of the site (`twitter:site`).
    pub twitter_site: Option<String>,

    /// Twitter handle of the content creator (`twitter:creator`).
    pub twitter_creator: Option<String>,

    /// Photo(s) of the business, used as the organization `image`.
    pub business_photo: Option<OneOrMany<String>>,
}

impl SiteConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const OG_IMAGE_SRC: FieldPath = FieldPath::new("site.og_image.src");
    pub const TWITTER_IMAGE_SRC: FieldPath = FieldPath::new("site.twitter_image.src");

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be a valid http(s) URL with a host and no trailing slash
    /// - default image prefixes must be set
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.url.is_empty() {
            diag.error_with_hint(
                Self::URL,
                "site URL is not configured",
                format!("set {}, e.g.: \"https://example.com\"", Self::URL),
            );
        } else {
            match url::Url::parse(&self.url) {
                Ok(parsed) => {
                    // Must be http or https
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::URL,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    // Must have a valid host
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::URL,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::URL,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }

            // Page paths start with '/', so a trailing slash doubles it
            if self.url.ends_with('/') {
                diag.error_with_hint(
                    Self::URL,
                    "URL must not end with '/'",
                    format!("use \"{}\"", self.url.trim_end_matches('/')),
                );
            }
        }

        if self.og_image.src.is_empty() {
            diag.warn(Self::OG_IMAGE_SRC, "default og:image is empty");
        }
        if self.twitter_image.src.is_empty() {
            diag.warn(Self::TWITTER_IMAGE_SRC, "default twitter:image is empty");
        }
    }
}
