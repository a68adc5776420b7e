//! tola-seo - SEO head tags and JSON-LD for static sites.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use tola_seo::{SeoConfig, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SeoConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Render {
            page,
            format,
            output,
        } => {
            config.validate()?;
            cli::render::render_page(&config, page, *format, output.as_deref())
        }
        Commands::Schema { page, output } => {
            config.validate()?;
            cli::render::print_schema(&config, page, output.as_deref())
        }
        Commands::Check => cli::check::check_config(&config),
    }
}
