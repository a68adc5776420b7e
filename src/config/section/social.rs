//! `[social]` configuration: profile links keyed by network.
//!
//! ```toml
//! [social.facebook]
//! to = "https://facebook.com/acme"
//!
//! [social.github]
//! to = "https://github.com/acme"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Profile URL.
    pub to: String,
}

/// Social links, iterated in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocialLinks(BTreeMap<String, SocialLink>);

impl SocialLinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, to: impl Into<String>) {
        self.0.insert(key.into(), SocialLink { to: to.into() });
    }

    pub fn get(&self, key: &str) -> Option<&SocialLink> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Profile URLs, one per key.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(|link| link.to.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SocialLinks {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut links = Self::new();
        for (key, to) in iter {
            links.insert(key, to);
        }
        links
    }
}
