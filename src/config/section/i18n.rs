//! `[i18n]` configuration and locale path helpers.
//!
//! # Example
//!
//! ```toml
//! [i18n]
//! default = "en"
//!
//! [[i18n.locales]]
//! code = "en"
//! html_lang = "en"
//! og_locale = "en_US"
//! short_name = "Acme"
//!
//! [[i18n.locales]]
//! code = "ru"
//! html_lang = "ru"
//! og_locale = "ru_RU"
//! short_name = "Акме"
//! ```
//!
//! Paths of the default locale are unprefixed (`/about`), other locales are
//! prefixed with their code (`/ru/about`). Set `prefix_default = true` to
//! prefix the default locale too.

use crate::config::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Per-locale metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleMeta {
    /// Locale code, also the path prefix (e.g., "ru").
    pub code: String,
    /// `hreflang` / `<html lang>` value.
    pub html_lang: String,
    /// `og:locale` value.
    pub og_locale: String,
    /// `og:site_name` value.
    pub short_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Default locale code.
    pub default: String,

    /// Prefix the default locale's paths as well.
    pub prefix_default: bool,

    /// Locales in output order (`hreflang` alternates follow this order).
    pub locales: Vec<LocaleMeta>,
}

impl I18nConfig {
    pub const DEFAULT: FieldPath = FieldPath::new("i18n.default");
    pub const LOCALES: FieldPath = FieldPath::new("i18n.locales");

    /// Look up a locale by code.
    pub fn locale(&self, code: &str) -> Option<&LocaleMeta> {
        self.locales.iter().find(|l| l.code == code)
    }

    /// Locale codes in configured order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(|l| l.code.as_str())
    }

    /// Path of `path` in locale `code`.
    ///
    /// `path` must be locale-free (see [`pure_path`](Self::pure_path)).
    ///
    /// # Examples
    /// ```ignore
    /// localize_path("/about", "ru") -> "/ru/about"
    /// localize_path("/", "ru")      -> "/ru/"
    /// localize_path("/about", "en") -> "/about"   // default locale
    /// ```
    pub fn localize_path(&self, path: &str, code: &str) -> String {
        if code == self.default && !self.prefix_default {
            return path.to_string();
        }

        if path.starts_with('/') {
            format!("/{code}{path}")
        } else {
            format!("/{code}/{path}")
        }
    }

    /// Strip a leading locale segment from `path`.
    ///
    /// # Examples
    /// ```ignore
    /// pure_path("/ru/about") -> "/about"
    /// pure_path("/ru")       -> "/"
    /// pure_path("/rural")    -> "/rural"
    /// ```
    pub fn pure_path(&self, path: &str) -> String {
        for code in self.codes() {
            let Some(rest) = path
                .strip_prefix('/')
                .and_then(|p| p.strip_prefix(code))
            else {
                continue;
            };

            if rest.is_empty() {
                return "/".to_string();
            }
            if rest.starts_with('/') {
                return rest.to_string();
            }
        }
        path.to_string()
    }

    /// Validate i18n configuration.
    ///
    /// # Checks
    /// - at least one locale
    /// - locale codes are unique and non-empty
    /// - `default` names a configured locale
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.locales.is_empty() {
            diag.error_with_hint(
                Self::LOCALES,
                "no locales configured",
                "add [[i18n.locales]] entries or remove [i18n]",
            );
            return;
        }

        let mut seen = FxHashSet::default();
        for locale in &self.locales {
            if locale.code.is_empty() {
                diag.error(Self::LOCALES, "locale code must not be empty");
            } else if !seen.insert(locale.code.as_str()) {
                diag.error(
                    Self::LOCALES,
                    format!("duplicate locale code '{}'", locale.code),
                );
            }
        }

        if self.locale(&self.default).is_none() {
            diag.error_with_hint(
                Self::DEFAULT,
                format!("default locale '{}' is not in {}", self.default, Self::LOCALES),
                format!("set {} to one of the configured codes", Self::DEFAULT),
            );
        }
    }
}
