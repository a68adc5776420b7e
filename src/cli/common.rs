//! Common utilities shared across CLI commands.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tola_seo::page::PageProps;
use tola_seo::{debug, log};

use super::args::PageArgs;

/// Load the page file (or defaults) and apply command-line overrides.
pub fn load_page(args: &PageArgs) -> Result<PageProps> {
    let mut page = match &args.page {
        Some(path) => {
            let page = PageProps::from_path(path)?;
            debug!("page"; "loaded {}", path.display());
            page
        }
        None => PageProps::default(),
    };

    if let Some(path) = &args.path {
        page.pathname = normalize_pathname(path);
    }
    if let Some(locale) = &args.locale {
        page.locale = Some(locale.clone());
    }

    Ok(page)
}

/// Ensure a leading `/`.
fn normalize_pathname(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Write to `output`, or stdout when unset.
pub fn write_output(module: &str, content: &str, output: Option<&Path>) -> Result<()> {
    if let Some(path) = output {
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        write!(file, "{content}")?;
        log!(module; "wrote {}", path.display());
    } else {
        print!("{content}");
    }
    Ok(())
}
