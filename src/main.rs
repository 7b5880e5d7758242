use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;
use scrapbook_posts::cli::{Cli, Command};

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_main() -> anyhow::Result<()> {
    scrapbook_posts::logging::init().context("init logging")?;

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        Command::Generate(args) => {
            scrapbook_posts::posts::generate(args).context("generate")?;
        }
        Command::Check(args) => {
            scrapbook_posts::posts::check(args).context("check")?;
        }
    }

    Ok(())
}
