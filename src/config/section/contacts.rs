//! `[contacts]` configuration: business type, location and opening hours.
//!
//! # Example
//!
//! ```toml
//! [contacts]
//! organization_type = "LocalBusiness"
//! phone = ["79991234567"]
//! email = ["hello@example.com"]
//! price_range = "$$"
//! opening_hours = [
//!     ["mo-fr", "09:00", "18:00"],
//!     ["sa", "10:00", "14:00"],
//! ]
//!
//! [contacts.geo]
//! latitude = 55.75
//! longitude = 37.61
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::schema::hours;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Geographic coordinates. Extra keys (e.g. `elevation`) are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoConfig {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One `[days, opens, closes]` entry, e.g. `["mo-fr", "09:00", "18:00"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours(pub String, pub String, pub String);

impl OpeningHours {
    pub fn days(&self) -> &str {
        &self.0
    }

    pub fn opens(&self) -> &str {
        &self.1
    }

    pub fn closes(&self) -> &str {
        &self.2
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgContacts {
    /// schema.org type (e.g., "Organization", "LocalBusiness", "Store").
    pub organization_type: String,
    pub geo: Option<GeoConfig>,
    pub opening_hours: Option<Vec<OpeningHours>>,
    /// Phone numbers, digits only; the first one is primary.
    pub phone: Option<Vec<String>>,
    /// Email addresses; the first one is primary.
    pub email: Option<Vec<String>>,
    /// URL of a map showing the location.
    pub has_map: Option<String>,
    pub price_range: Option<String>,
    pub currencies_accepted: Option<String>,
    pub payment_accepted: Option<String>,
}

impl Default for OrgContacts {
    fn default() -> Self {
        Self {
            organization_type: "Organization".into(),
            geo: None,
            opening_hours: None,
            phone: None,
            email: None,
            has_map: None,
            price_range: None,
            currencies_accepted: None,
            payment_accepted: None,
        }
    }
}

impl OrgContacts {
    pub const ORGANIZATION_TYPE: FieldPath = FieldPath::new("contacts.organization_type");
    pub const OPENING_HOURS: FieldPath = FieldPath::new("contacts.opening_hours");

    /// Validate contacts.
    ///
    /// Unknown weekday abbreviations still render (as empty entries), so
    /// they are reported as warnings.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.organization_type.is_empty() {
            diag.error_with_hint(
                Self::ORGANIZATION_TYPE,
                "organization type must not be empty",
                "use a schema.org type such as \"Organization\" or \"LocalBusiness\"",
            );
        }

        for entry in self.opening_hours.iter().flatten() {
            for token in hours::unknown_days(entry.days()) {
                diag.warn(
                    Self::OPENING_HOURS,
                    format!("unknown day '{token}' in \"{}\"", entry.days()),
                );
            }
            if entry.days().trim().is_empty() {
                diag.warn(Self::OPENING_HOURS, "entry without days");
            }
        }
    }
}
