//! SEO head tags and JSON-LD structured data for static sites.
//!
//! # Module Structure
//!
//! ```text
//! config/   # seo.toml: site, meta, head, i18n, contacts, address, social
//! page/     # PageProps and PageType
//! schema/   # WebSite, page and Organization JSON-LD builders
//! seo/      # SeoHead builder, Head output, meta/link tags
//! utils/    # HTML escaping, phone formatting
//! ```
//!
//! # Example
//!
//! ```ignore
//! let config = SeoConfig::from_str(include_str!("seo.toml"))?;
//! let page = PageProps { pathname: "/about".into(), ..Default::default() };
//! let html = SeoHead::new(&config).render(&page).to_html()?;
//! ```

pub mod config;
pub mod logger;
pub mod page;
pub mod schema;
pub mod seo;
pub mod utils;

pub use config::SeoConfig;
pub use page::{PageProps, PageType};
pub use seo::{Head, SeoHead};
