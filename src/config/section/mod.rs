//! Configuration section definitions.
//!
//! Each module corresponds to a section in `seo.toml`:
//!
//! | Module     | TOML Section   | Purpose                                 |
//! |------------|----------------|-----------------------------------------|
//! | `site`     | `[site]`       | Site URL, logo, default images          |
//! | `meta`     | `[meta]`       | Default language, title, description    |
//! | `head`     | `[head]`       | Tag naming, article tags, link merging  |
//! | `i18n`     | `[i18n]`       | Locales and localized paths             |
//! | `contacts` | `[contacts]`   | Business type, geo, phones, hours       |
//! | `address`  | `[address]`    | Names, postal address, contact points   |
//! | `social`   | `[social]`     | Social profile links                    |

mod address;
mod contacts;
mod head;
mod i18n;
mod meta;
mod site;
mod social;

pub use address::{ContactPointConfig, OrgAddress, PostalAddressConfig};
pub use contacts::{GeoConfig, OpeningHours, OrgContacts};
pub use head::{HeadOptions, LinkMerge, TagNaming};
pub use i18n::{I18nConfig, LocaleMeta};
pub use meta::SiteMeta;
pub use site::{ImageConfig, SiteConfig};
pub use social::{SocialLink, SocialLinks};
