//! Head assembly from site configuration and page props.
//!
//! # Tag Order
//!
//! | Group    | Tags                                                         |
//! |----------|--------------------------------------------------------------|
//! | base     | robots, description, theme-color, og:locale, og:locale:alternate |
//! | og       | site_name, url, type, title, description, image, image:alt, size, fb:app_id, article:publisher, og:see_also |
//! | article  | published_time, modified_time, tag (article pages only)     |
//! | twitter  | card, title, description, image, image:alt, size, site, creator |
//! | page     | `metas` from page props                                      |

use super::{Head, JsonLd, LinkTag, MetaTag};
use crate::config::{LinkMerge, SeoConfig};
use crate::page::PageProps;
use crate::schema::{
    OrganizationInput, PageSchemaInput, WebSiteInput, organization_schema, page_schema,
    website_schema,
};
use crate::utils::non_empty;
use crate::utils::phone::{InternationalPhone, PhoneFormat};

/// Values derived once per page and shared by the tag groups and schemas.
struct PageContext<'p> {
    /// Absolute page URL.
    url: String,
    /// Absolute page image URL, when the page has its own image.
    image_url: Option<String>,
    /// Path without a locale prefix.
    pure_path: String,
    locale: &'p str,
    html_lang: &'p str,
    og_locale: &'p str,
    site_name: &'p str,
    title: &'p str,
    description: &'p str,
    headline: &'p str,
}

/// Head builder bound to a site configuration.
///
/// ```ignore
/// let head = SeoHead::new(&config).render(&page);
/// println!("{}", head.to_html()?);
/// ```
pub struct SeoHead<'a> {
    config: &'a SeoConfig,
    phone: &'a dyn PhoneFormat,
}

impl<'a> SeoHead<'a> {
    pub fn new(config: &'a SeoConfig) -> Self {
        Self {
            config,
            phone: &InternationalPhone,
        }
    }

    /// Use a custom formatter for contact point phone numbers.
    pub fn with_phone(mut self, phone: &'a dyn PhoneFormat) -> Self {
        self.phone = phone;
        self
    }

    /// Assemble the full head for `page`.
    pub fn render(&self, page: &PageProps) -> Head {
        let ctx = self.context(page);

        let mut metas = self.base_metas(page, &ctx);
        metas.extend(self.og_metas(page, &ctx));
        metas.extend(self.article_metas(page));
        metas.extend(self.twitter_metas(&ctx));
        metas.extend(page.metas.iter().cloned());

        Head {
            html_lang: ctx.html_lang.to_string(),
            title: ctx.title.to_string(),
            metas,
            links: self.links(page, &ctx),
            scripts: self.scripts_with(page, &ctx),
        }
    }

    /// JSON-LD documents for `page`: WebSite, page, and Organization on the
    /// root path when `[contacts]` is configured.
    pub fn scripts(&self, page: &PageProps) -> Vec<JsonLd> {
        let ctx = self.context(page);
        self.scripts_with(page, &ctx)
    }

    fn context<'p>(&'p self, page: &'p PageProps) -> PageContext<'p> {
        let config = self.config;
        let site_url = config.site.url.as_str();
        let i18n = config.i18n.as_ref();

        let locale = non_empty(page.locale.as_deref())
            .or_else(|| i18n.map(|i| i.default.as_str()))
            .unwrap_or(&config.meta.html_lang);
        let locale_meta = i18n.and_then(|i| i.locale(locale));

        let description =
            non_empty(page.description.as_deref()).unwrap_or(&config.meta.description);

        PageContext {
            url: format!("{site_url}{}", page.pathname),
            image_url: non_empty(page.image.as_deref())
                .map(|path| format!("{site_url}{path}")),
            pure_path: match i18n {
                Some(i18n) => i18n.pure_path(&page.pathname),
                None => page.pathname.clone(),
            },
            locale,
            html_lang: non_empty(locale_meta.map(|l| l.html_lang.as_str()))
                .unwrap_or(&config.meta.html_lang),
            og_locale: non_empty(locale_meta.map(|l| l.og_locale.as_str()))
                .unwrap_or(&config.meta.og_locale),
            site_name: non_empty(locale_meta.map(|l| l.short_name.as_str()))
                .unwrap_or_else(|| config.meta.site_name()),
            title: non_empty(page.title.as_deref()).unwrap_or(&config.meta.title),
            description,
            headline: non_empty(page.headline.as_deref()).unwrap_or(description),
        }
    }

    fn tag(&self, key: &str, content: impl Into<String>) -> MetaTag {
        MetaTag::keyed(self.config.head.tag_naming, key, content)
    }

    fn base_metas(&self, page: &PageProps, ctx: &PageContext<'_>) -> Vec<MetaTag> {
        let robots = if page.noindex {
            "noindex, follow"
        } else {
            "index, follow"
        };

        let mut metas = vec![
            self.tag("robots", robots),
            self.tag("description", ctx.description),
            self.tag("theme-color", self.config.site.theme_color.as_str()),
            self.tag("og:locale", ctx.og_locale),
        ];

        if let Some(i18n) = &self.config.i18n {
            metas.extend(
                i18n.locales
                    .iter()
                    .filter(|l| l.code != ctx.locale)
                    .map(|l| self.tag("og:locale:alternate", l.og_locale.as_str())),
            );
        }

        metas
    }

    fn og_metas(&self, page: &PageProps, ctx: &PageContext<'_>) -> Vec<MetaTag> {
        let site = &self.config.site;
        let social = &self.config.social;

        let mut metas = vec![
            self.tag("og:site_name", ctx.site_name),
            self.tag("og:url", ctx.url.as_str()),
            self.tag("og:type", page.page_type.og_type()),
            self.tag("og:title", ctx.title),
            self.tag("og:description", ctx.description),
        ];

        let image = match &ctx.image_url {
            Some(url) => url.clone(),
            None => site.og_image.src_for(ctx.locale),
        };
        metas.push(self.tag("og:image", image));
        metas.push(self.tag("og:image:alt", ctx.description));
        if ctx.image_url.is_none() {
            metas.push(self.tag("og:image:width", site.og_image.width.to_string()));
            metas.push(self.tag("og:image:height", site.og_image.height.to_string()));
        }

        if let Some(app_id) = non_empty(site.fb_app_id.as_deref()) {
            metas.push(self.tag("fb:app_id", app_id));
        }

        if let Some(facebook) = social.get("facebook") {
            metas.push(self.tag("article:publisher", facebook.to.as_str()));
        }
        metas.extend(social.targets().map(|to| self.tag("og:see_also", to)));

        metas
    }

    fn article_metas(&self, page: &PageProps) -> Vec<MetaTag> {
        if !self.config.head.article_tags || !page.page_type.is_article() {
            return Vec::new();
        }

        let mut metas = Vec::new();
        if let Some(date) = non_empty(page.date_published.as_deref()) {
            metas.push(self.tag("article:published_time", date));
        }
        if let Some(date) = non_empty(page.date_modified.as_deref()) {
            metas.push(self.tag("article:modified_time", date));
        }
        metas.extend(page.tags.iter().map(|t| self.tag("article:tag", t.as_str())));
        metas
    }

    fn twitter_metas(&self, ctx: &PageContext<'_>) -> Vec<MetaTag> {
        let site = &self.config.site;

        let image = match &ctx.image_url {
            Some(url) => url.clone(),
            None => site.twitter_image.src_for(ctx.locale),
        };

        let mut metas = vec![
            self.tag("twitter:card", "summary_large_image"),
            self.tag("twitter:title", ctx.title),
            self.tag("twitter:description", ctx.description),
            self.tag("twitter:image", image),
            self.tag("twitter:image:alt", ctx.description),
        ];

        if ctx.image_url.is_none() {
            metas.push(self.tag("twitter:image:width", site.twitter_image.width.to_string()));
            metas.push(self.tag("twitter:image:height", site.twitter_image.height.to_string()));
        }

        let handle = non_empty(site.twitter_site.as_deref());
        let creator = non_empty(site.twitter_creator.as_deref());
        if let (Some(handle), Some(creator)) = (handle.or(creator), creator.or(handle)) {
            metas.push(self.tag("twitter:site", handle));
            metas.push(self.tag("twitter:creator", creator));
        }

        metas
    }

    fn links(&self, page: &PageProps, ctx: &PageContext<'_>) -> Vec<LinkTag> {
        let site_url = self.config.site.url.as_str();

        let mut links =
            vec![LinkTag::new("author", format!("{site_url}/humans.txt")).with_type("text/plain")];
        if page.canonical {
            links.push(LinkTag::new("canonical", ctx.url.as_str()));
        }

        match self.config.head.link_merge {
            LinkMerge::Append => links.extend(page.links.iter().cloned()),
            LinkMerge::Replace if !page.links.is_empty() => links = page.links.clone(),
            LinkMerge::Replace => {}
        }

        if let Some(i18n) = &self.config.i18n {
            links.extend(i18n.locales.iter().map(|l| {
                let href = format!("{site_url}{}", i18n.localize_path(&ctx.pure_path, &l.code));
                LinkTag::new("alternate", href).with_hreflang(l.html_lang.as_str())
            }));
            links.push(
                LinkTag::new("alternate", format!("{site_url}{}", ctx.pure_path))
                    .with_hreflang("x-default"),
            );
        }

        links
    }

    fn scripts_with(&self, page: &PageProps, ctx: &PageContext<'_>) -> Vec<JsonLd> {
        let config = self.config;

        let mut scripts = vec![
            JsonLd::WebSite(website_schema(WebSiteInput {
                site_url: &config.site.url,
                site_title: &config.meta.title,
                site_description: &config.meta.description,
                html_lang: ctx.html_lang,
            })),
            JsonLd::Page(page_schema(PageSchemaInput {
                organization_name: non_empty(config.address.name.as_deref()),
                site_url: &config.site.url,
                site_logo: &config.site.logo,
                url: &ctx.url,
                title: ctx.title,
                headline: ctx.headline,
                html_lang: ctx.html_lang,
                image_url: ctx.image_url.as_deref(),
                date_published: non_empty(page.date_published.as_deref()),
                date_modified: non_empty(page.date_modified.as_deref()),
                page_type: page.page_type,
                publisher: page.publisher.as_ref(),
                author: page.author.as_ref(),
            })),
        ];

        if page.is_root()
            && let Some(contacts) = &config.contacts
        {
            let input = OrganizationInput {
                contacts,
                address: &config.address,
                site: &config.site,
                social: &config.social,
            };
            scripts.push(JsonLd::Organization(Box::new(organization_schema(
                input, self.phone,
            ))));
        }

        scripts
    }
}
