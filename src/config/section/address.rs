//! `[address]` configuration: organization names, postal address and
//! contact points.
//!
//! # Example
//!
//! ```toml
//! [address]
//! name = "Acme"
//! legal_name = "Acme LLC"
//! description = "Anvils and more"
//!
//! [address.postal_address]
//! street_address = ["1 Main St", "Suite 2"]
//! address_locality = "Springfield"
//! postal_code = "12345"
//! address_country = "US"
//!
//! [[address.contact_point]]
//! name = "Sales"
//! contact_type = "sales"
//! telephone = ["15551234567"]
//! email = ["sales@example.com"]
//! ```

use crate::config::OneOrMany;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Postal address. Keys beyond the common schema.org ones are kept in
/// `extra` and emitted as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostalAddressConfig {
    /// Street lines, joined with ", " on output.
    pub street_address: Option<Vec<String>>,
    pub address_locality: Option<String>,
    pub address_region: Option<String>,
    pub postal_code: Option<String>,
    pub address_country: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactPointConfig {
    pub name: Option<String>,
    pub contact_type: Option<String>,
    /// Phone numbers, digits only.
    pub telephone: Option<Vec<String>>,
    pub email: Option<Vec<String>>,
    pub area_served: Option<OneOrMany<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgAddress {
    /// Organization display name.
    pub name: Option<String>,
    pub legal_name: Option<String>,
    pub alternate_name: Option<String>,
    pub description: Option<String>,
    pub postal_address: Option<PostalAddressConfig>,
    pub contact_point: Option<Vec<ContactPointConfig>>,
}
