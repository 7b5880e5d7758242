use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write scrapbook posts, index pages and the raw article dump.
    Generate(GenerateArgs),
    /// Load and prepare every scrapbook without writing anything.
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Directory holding the page lists and annotation files.
    #[arg(long, default_value = "annotations")]
    pub annotations: String,

    /// Output directory for the generated pages.
    #[arg(long, default_value = "../../web/zaynar/site/content/space")]
    pub out: String,

    /// Output file path for every article's text.
    #[arg(long, default_value = "raw-articles.txt")]
    pub raw_articles: String,

    /// Site content section used in internal links.
    #[arg(long, default_value = "space")]
    pub section: String,

    /// Base URL of the scanned images (`og_image`).
    #[arg(long, default_value = "https://zaynar.co.uk/images")]
    pub image_base_url: String,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Directory holding the page lists and annotation files.
    #[arg(long, default_value = "annotations")]
    pub annotations: String,
}
