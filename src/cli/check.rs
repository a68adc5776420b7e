//! `check` command: validate `seo.toml`.

use anyhow::{Result, bail};
use tola_seo::config::SeoConfig;
use tola_seo::log;

/// Print diagnostics and fail when the configuration has errors.
pub fn check_config(config: &SeoConfig) -> Result<()> {
    let diag = config.diagnose();
    diag.print_warnings();

    if diag.has_errors() {
        eprintln!("{diag}");
        bail!("invalid config: {}", config.config_path.display());
    }

    let warnings = diag.warnings().len();
    if warnings == 0 {
        log!("check"; "{} is valid", config.config_path.display());
    } else {
        log!("check"; "{} is valid ({} warning{})",
            config.config_path.display(), warnings, if warnings == 1 { "" } else { "s" });
    }
    Ok(())
}
