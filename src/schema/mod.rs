//! JSON-LD structured data builders.
//!
//! Every builder is a pure function of its input and returns a typed record
//! whose field order is the serialized key order.
//!
//! | Builder                 | `@type`                                  |
//! |-------------------------|------------------------------------------|
//! | [`website_schema`]      | `WebSite`                                |
//! | [`page_schema`]         | `WebPage`, `Blog`, `Article`, `BlogPosting` |
//! | [`organization_schema`] | `organization_type` from `[contacts]`    |

pub mod hours;
mod organization;
mod page;
mod website;

pub use organization::{
    ContactPoint, GeoCoordinates, OrganizationInput, OrganizationSchema, PostalAddress,
    organization_schema,
};
pub use page::{Agent, ImageObject, PageSchema, PageSchemaInput, WebPageRef, page_schema};
pub use website::{WebSiteInput, WebSiteSchema, website_schema};

/// schema.org vocabulary URL.
pub const CONTEXT: &str = "https://schema.org";
