//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// SEO head tags and JSON-LD structured data for static sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "seo.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render head tags for a page
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        page: PageArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Print the JSON-LD documents for a page
    #[command(visible_alias = "s")]
    Schema {
        #[command(flatten)]
        page: PageArgs,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Validate the configuration file
    #[command(visible_alias = "c")]
    Check,
}

/// Page selection shared by `render` and `schema`.
#[derive(clap::Args, Debug, Clone)]
pub struct PageArgs {
    /// Page description file (`.toml` or `.json`). Site defaults when omitted.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub page: Option<PathBuf>,

    /// Override the page path (e.g., `/about`)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Override the page locale
    #[arg(short, long)]
    pub locale: Option<String>,
}

/// `render` output format.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// HTML fragment for the document head
    #[default]
    Html,
    /// Head as JSON
    Json,
}
