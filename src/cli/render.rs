//! `render` and `schema` commands.

use std::path::Path;

use anyhow::Result;
use tola_seo::config::SeoConfig;
use tola_seo::debug;
use tola_seo::seo::SeoHead;

use super::args::{OutputFormat, PageArgs};
use super::common::{load_page, write_output};

/// Render the head of one page as HTML or JSON.
pub fn render_page(
    config: &SeoConfig,
    args: &PageArgs,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let page = load_page(args)?;
    let head = SeoHead::new(config).render(&page);
    debug!("render"; "{} metas, {} links, {} scripts for {}",
        head.metas.len(), head.links.len(), head.scripts.len(), page.pathname);

    let content = match format {
        OutputFormat::Html => head.to_html()?,
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&head)?),
    };

    write_output("render", &content, output)
}

/// Print the JSON-LD documents of one page as a pretty JSON array.
pub fn print_schema(config: &SeoConfig, args: &PageArgs, output: Option<&Path>) -> Result<()> {
    let page = load_page(args)?;
    let scripts = SeoHead::new(config).scripts(&page);
    let content = format!("{}\n", serde_json::to_string_pretty(&scripts)?);
    write_output("schema", &content, output)
}
