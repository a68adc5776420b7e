//! Site configuration management for `seo.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── meta       # [meta]
//! │   ├── head       # [head]
//! │   ├── i18n       # [i18n]
//! │   ├── contacts   # [contacts]
//! │   ├── address    # [address]
//! │   └── social     # [social]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── value      # OneOrMany
//! └── mod.rs         # SeoConfig (this file)
//! ```

pub mod section;
pub mod types;
mod util;

pub use section::{
    ContactPointConfig, GeoConfig, HeadOptions, I18nConfig, ImageConfig, LinkMerge, LocaleMeta,
    OpeningHours, OrgAddress, OrgContacts, PostalAddressConfig, SiteConfig, SiteMeta, SocialLink,
    SocialLinks, TagNaming,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, OneOrMany};

use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::find_config_file;

/// Default config file name.
pub const CONFIG_FILE: &str = "seo.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing seo.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeoConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site URL, logo, default images
    #[serde(default)]
    pub site: SiteConfig,

    /// Default language and texts
    #[serde(default)]
    pub meta: SiteMeta,

    /// Head assembly options
    #[serde(default)]
    pub head: HeadOptions,

    /// Locales (optional)
    #[serde(default)]
    pub i18n: Option<I18nConfig>,

    /// Organization contacts; the organization schema is emitted only when set
    #[serde(default)]
    pub contacts: Option<OrgContacts>,

    /// Organization names and addresses
    #[serde(default)]
    pub address: OrgAddress,

    /// Social profile links
    #[serde(default)]
    pub social: SocialLinks,
}

impl SeoConfig {
    /// Load configuration, searching upward from cwd for `config_name`.
    pub fn load(config_name: &Path) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let path = find_config_file(config_name, &cwd)
            .ok_or_else(|| ConfigError::NotFound(config_name.to_path_buf()))?;

        let mut config = Self::from_path(&path)?;
        debug!("config"; "loaded {}", path.display());
        config.config_path = path;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Collect diagnostics for every section.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        if let Some(i18n) = &self.i18n {
            i18n.validate(&mut diag);
        }
        if let Some(contacts) = &self.contacts {
            contacts.validate(&mut diag);
        }

        diag
    }

    /// Validate configuration, printing warnings and failing on errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diag = self.diagnose();
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// tests
// ============================================================================
