//! Organization JSON-LD node with address, contact points and opening hours.

use super::CONTEXT;
use super::hours::OpeningHoursSpecification;
use crate::config::{
    ContactPointConfig, GeoConfig, OneOrMany, OrgAddress, OrgContacts, PostalAddressConfig,
    SiteConfig, SocialLinks,
};
use crate::utils::non_empty;
use crate::utils::phone::PhoneFormat;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<&PostalAddressConfig> for PostalAddress {
    fn from(config: &PostalAddressConfig) -> Self {
        Self {
            kind: "PostalAddress",
            street_address: config.street_address.as_ref().map(|lines| lines.join(", ")),
            address_locality: config.address_locality.clone(),
            address_region: config.address_region.clone(),
            postal_code: config.postal_code.clone(),
            address_country: config.address_country.clone(),
            extra: config.extra.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoCoordinates {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<&GeoConfig> for GeoCoordinates {
    fn from(config: &GeoConfig) -> Self {
        Self {
            kind: "GeoCoordinates",
            latitude: config.latitude,
            longitude: config.longitude,
            extra: config.extra.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_served: Option<OneOrMany<String>>,
}

impl ContactPoint {
    /// Every number is formatted; numbers are joined with ", ", emails
    /// with ",".
    fn from_config<P: PhoneFormat + ?Sized>(config: &ContactPointConfig, phone: &P) -> Self {
        Self {
            kind: "ContactPoint",
            name: config.name.clone(),
            contact_type: config.contact_type.clone(),
            telephone: config.telephone.as_ref().map(|numbers| {
                numbers
                    .iter()
                    .map(|n| phone.format_phone(n))
                    .collect::<Vec<_>>()
                    .join(", ")
            }),
            email: config.email.as_ref().map(|emails| emails.join(",")),
            area_served: config.area_served.clone(),
        }
    }
}

/// Builder input.
#[derive(Debug, Clone, Copy)]
pub struct OrganizationInput<'a> {
    pub contacts: &'a OrgContacts,
    pub address: &'a OrgAddress,
    pub site: &'a SiteConfig,
    pub social: &'a SocialLinks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    pub logo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoCoordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_point: Option<Vec<ContactPoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub same_as: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currencies_accepted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_accepted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(
        rename = "OpeningHoursSpecification",
        skip_serializing_if = "Option::is_none"
    )]
    pub opening_hours_specification: Option<Vec<OpeningHoursSpecification>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_map: Option<String>,
}

/// Build the organization node.
///
/// Contact points take priority over the organization-level phone and
/// email lists: when contact points are configured, `telephone` and
/// `email` are carried by each contact point only. Otherwise the raw lists
/// are joined with "," at the top level.
pub fn organization_schema<P: PhoneFormat + ?Sized>(
    input: OrganizationInput<'_>,
    phone: &P,
) -> OrganizationSchema {
    let OrganizationInput {
        contacts,
        address,
        site,
        social,
    } = input;

    let contact_point = address.contact_point.as_ref().map(|points| {
        points
            .iter()
            .map(|point| ContactPoint::from_config(point, phone))
            .collect::<Vec<_>>()
    });

    let (telephone, email) = if contact_point.is_some() {
        (None, None)
    } else {
        (
            contacts.phone.as_ref().map(|numbers| numbers.join(",")),
            contacts.email.as_ref().map(|emails| emails.join(",")),
        )
    };

    OrganizationSchema {
        context: CONTEXT,
        kind: contacts.organization_type.clone(),
        id: site.url.clone(),
        name: owned(&address.name),
        description: owned(&address.description),
        url: site.url.clone(),
        logo: site.logo.clone(),
        image: site.business_photo.as_ref().map(OneOrMany::to_vec),
        address: address.postal_address.as_ref().map(PostalAddress::from),
        legal_name: owned(&address.legal_name),
        alternate_name: owned(&address.alternate_name),
        telephone,
        email,
        geo: contacts.geo.as_ref().map(GeoCoordinates::from),
        contact_point,
        same_as: (!social.is_empty()).then(|| social.targets().map(str::to_string).collect()),
        currencies_accepted: owned(&contacts.currencies_accepted),
        payment_accepted: owned(&contacts.payment_accepted),
        price_range: owned(&contacts.price_range),
        opening_hours_specification: contacts.opening_hours.as_ref().map(|hours| {
            hours
                .iter()
                .map(OpeningHoursSpecification::from_config)
                .collect()
        }),
        has_map: owned(&contacts.has_map),
    }
}

fn owned(value: &Option<String>) -> Option<String> {
    non_empty(value.as_deref()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OpeningHours;
    use crate::utils::phone::InternationalPhone;
    use serde_json::json;

    fn site() -> SiteConfig {
        SiteConfig {
            url: "https://example.com".into(),
            logo: "https://example.com/logo.png".into(),
            ..Default::default()
        }
    }

    fn contacts() -> OrgContacts {
        OrgContacts {
            organization_type: "LocalBusiness".into(),
            phone: Some(vec!["79991234567".into(), "79990000000".into()]),
            email: Some(vec!["a@example.com".into(), "b@example.com".into()]),
            ..Default::default()
        }
    }

    fn build(contacts: &OrgContacts, address: &OrgAddress, site: &SiteConfig) -> Value {
        let social = SocialLinks::new();
        let schema = organization_schema(
            OrganizationInput {
                contacts,
                address,
                site,
                social: &social,
            },
            &InternationalPhone,
        );
        serde_json::to_value(schema).unwrap()
    }

    #[test]
    fn test_base_fields() {
        let address = OrgAddress {
            name: Some("Acme".into()),
            description: Some("Anvils".into()),
            ..Default::default()
        };
        let value = build(&OrgContacts::default(), &address, &site());
        assert_eq!(
            value,
            json!({
                "@context": "https://schema.org",
                "@type": "Organization",
                "@id": "https://example.com",
                "name": "Acme",
                "description": "Anvils",
                "url": "https://example.com",
                "logo": "https://example.com/logo.png"
            })
        );
    }

    #[test]
    fn test_street_address_joined() {
        let address = OrgAddress {
            postal_address: Some(PostalAddressConfig {
                street_address: Some(vec!["Line1".into(), "Line2".into()]),
                postal_code: Some("12345".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let value = build(&OrgContacts::default(), &address, &site());
        assert_eq!(
            value["address"],
            json!({
                "@type": "PostalAddress",
                "streetAddress": "Line1, Line2",
                "postalCode": "12345"
            })
        );
    }

    #[test]
    fn test_postal_extra_keys_merged() {
        let mut extra = Map::new();
        extra.insert("postOfficeBoxNumber".into(), Value::from("42"));
        let address = OrgAddress {
            postal_address: Some(PostalAddressConfig {
                extra,
                ..Default::default()
            }),
            ..Default::default()
        };
        let value = build(&OrgContacts::default(), &address, &site());
        assert_eq!(value["address"]["postOfficeBoxNumber"], "42");
        assert!(value["address"].get("streetAddress").is_none());
    }

    #[test]
    fn test_fallback_phone_and_email_raw_joined() {
        let value = build(&contacts(), &OrgAddress::default(), &site());
        assert_eq!(value["telephone"], "79991234567,79990000000");
        assert_eq!(value["email"], "a@example.com,b@example.com");
        assert!(value.get("contactPoint").is_none());
    }

    #[test]
    fn test_contact_points_take_priority() {
        let address = OrgAddress {
            contact_point: Some(vec![ContactPointConfig {
                name: Some("Sales".into()),
                contact_type: Some("sales".into()),
                telephone: Some(vec!["79991234567".into(), "79990000000".into()]),
                email: Some(vec!["sales@example.com".into(), "shop@example.com".into()]),
                area_served: Some(OneOrMany::One("RU".into())),
            }]),
            ..Default::default()
        };
        let value = build(&contacts(), &address, &site());

        assert!(value.get("telephone").is_none());
        assert!(value.get("email").is_none());
        assert_eq!(
            value["contactPoint"],
            json!([{
                "@type": "ContactPoint",
                "name": "Sales",
                "contactType": "sales",
                "telephone": "+7 (999) 123-45-67, +7 (999) 000-00-00",
                "email": "sales@example.com,shop@example.com",
                "areaServed": "RU"
            }])
        );
    }

    #[test]
    fn test_contact_point_custom_formatter() {
        let address = OrgAddress {
            contact_point: Some(vec![ContactPointConfig {
                telephone: Some(vec!["1".into(), "2".into()]),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let social = SocialLinks::new();
        let contacts = OrgContacts::default();
        let site = site();
        let schema = organization_schema(
            OrganizationInput {
                contacts: &contacts,
                address: &address,
                site: &site,
                social: &social,
            },
            &|raw: &str| format!("tel:{raw}"),
        );
        let points = schema.contact_point.unwrap();
        assert_eq!(points[0].telephone.as_deref(), Some("tel:1, tel:2"));
        assert_eq!(points[0].email, None);
    }

    #[test]
    fn test_business_photo_normalized() {
        let mut site = site();
        site.business_photo = Some(OneOrMany::One("https://example.com/a.jpg".into()));
        let value = build(&OrgContacts::default(), &OrgAddress::default(), &site);
        assert_eq!(value["image"], json!(["https://example.com/a.jpg"]));

        site.business_photo = Some(OneOrMany::Many(vec!["x".into(), "y".into()]));
        let value = build(&OrgContacts::default(), &OrgAddress::default(), &site);
        assert_eq!(value["image"], json!(["x", "y"]));
    }

    #[test]
    fn test_geo() {
        let contacts = OrgContacts {
            geo: Some(GeoConfig {
                latitude: 55.75,
                longitude: 37.61,
                extra: Map::new(),
            }),
            ..Default::default()
        };
        let value = build(&contacts, &OrgAddress::default(), &site());
        assert_eq!(
            value["geo"],
            json!({"@type": "GeoCoordinates", "latitude": 55.75, "longitude": 37.61})
        );
    }

    #[test]
    fn test_same_as() {
        let social: SocialLinks = [
            ("facebook", "https://facebook.com/acme"),
            ("github", "https://github.com/acme"),
        ]
        .into_iter()
        .collect();
        let contacts = OrgContacts::default();
        let address = OrgAddress::default();
        let site = site();
        let schema = organization_schema(
            OrganizationInput {
                contacts: &contacts,
                address: &address,
                site: &site,
                social: &social,
            },
            &InternationalPhone,
        );
        assert_eq!(
            schema.same_as,
            Some(vec![
                "https://facebook.com/acme".to_string(),
                "https://github.com/acme".to_string()
            ])
        );
    }

    #[test]
    fn test_same_as_omitted_without_links() {
        let value = build(&OrgContacts::default(), &OrgAddress::default(), &site());
        assert!(value.get("sameAs").is_none());
    }

    #[test]
    fn test_passthrough_fields() {
        let contacts = OrgContacts {
            price_range: Some("$$".into()),
            currencies_accepted: Some("RUB".into()),
            payment_accepted: Some("Cash, Credit Card".into()),
            has_map: Some("https://maps.example.com/acme".into()),
            ..Default::default()
        };
        let address = OrgAddress {
            legal_name: Some("Acme LLC".into()),
            alternate_name: Some("ACME".into()),
            ..Default::default()
        };
        let value = build(&contacts, &address, &site());
        assert_eq!(value["priceRange"], "$$");
        assert_eq!(value["currenciesAccepted"], "RUB");
        assert_eq!(value["paymentAccepted"], "Cash, Credit Card");
        assert_eq!(value["hasMap"], "https://maps.example.com/acme");
        assert_eq!(value["legalName"], "Acme LLC");
        assert_eq!(value["alternateName"], "ACME");
    }

    #[test]
    fn test_opening_hours() {
        let contacts = OrgContacts {
            opening_hours: Some(vec![
                OpeningHours("mo-fr".into(), "09:00".into(), "18:00".into()),
                OpeningHours("sa,su".into(), "10:00".into(), "14:00".into()),
            ]),
            ..Default::default()
        };
        let value = build(&contacts, &OrgAddress::default(), &site());
        let hours = &value["OpeningHoursSpecification"];
        assert_eq!(
            hours[0]["dayOfWeek"],
            json!(["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"])
        );
        assert_eq!(hours[1]["dayOfWeek"], json!(["Saturday", "Sunday"]));
        assert_eq!(hours[1]["opens"], "10:00");
    }

    #[test]
    fn test_blank_passthroughs_omitted() {
        let contacts = OrgContacts {
            price_range: Some(String::new()),
            has_map: Some(String::new()),
            ..Default::default()
        };
        let address = OrgAddress {
            name: Some(String::new()),
            legal_name: Some(String::new()),
            ..Default::default()
        };
        let value = build(&contacts, &address, &site());
        for key in ["name", "legalName", "priceRange", "hasMap"] {
            assert!(value.get(key).is_none(), "{key} should be omitted");
        }
    }

    #[test]
    fn test_idempotent() {
        let address = OrgAddress {
            name: Some("Acme".into()),
            ..Default::default()
        };
        let a = build(&contacts(), &address, &site());
        let b = build(&contacts(), &address, &site());
        assert_eq!(a, b);
    }
}
