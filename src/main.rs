use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use minus::Pager;
use std::path::{Path, PathBuf};
use taglog::areas::repository::Repository;
use taglog::artifacts::changelog::filter::ConventionalFilter;
use taglog::artifacts::config::Config;
use taglog::artifacts::core::PagerWriter;
use taglog::artifacts::core::logging::init_logging;
use taglog::commands::porcelain::taglog::TaglogOptions;

#[derive(Parser)]
#[command(
    name = "taglog",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Conventional commits grouped by release tag",
    long_about = "Lists the commits of a repository whose message starts with a conventional \
    prefix (feat, fix, perf, ...), grouped under the tag that released them. \
    Commits newer than the latest tag are listed as untagged.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(short, long, default_value = ".", help = "The path to the repository")]
    repo: String,
    #[arg(
        short,
        long,
        help = "JSON file with the list of prefixes (default: ./taglog.json, then <repo>/taglog.json)"
    )]
    config: Option<PathBuf>,
    #[arg(short, long, help = "Show whole commit messages instead of their first line")]
    full: bool,
    #[arg(long, help = "Write to stdout instead of the pager")]
    no_pager: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let is_terminal = std::io::stdout().is_terminal();
    let use_pager = is_terminal && !cli.no_pager && std::env::var_os("NO_PAGER").is_none();
    let opts = TaglogOptions {
        full_message: cli.full,
        color: is_terminal,
    };

    if use_pager {
        let pager = Pager::new();
        pager.set_prompt("taglog")?;

        let repository = Repository::new(&cli.repo, Box::new(PagerWriter::new(pager.clone())))?;
        let filter = load_filter(cli.config.as_deref(), repository.path())?;
        let clusters = repository.taglog(&filter, &opts).await?;

        // nothing to page through
        if clusters.total_commits() > 0 {
            minus::page_all(pager)?;
        }
    } else {
        let repository = Repository::new(&cli.repo, Box::new(std::io::stdout()))?;
        let filter = load_filter(cli.config.as_deref(), repository.path())?;
        repository.taglog(&filter, &opts).await?;
    }

    Ok(())
}

fn load_filter(explicit: Option<&Path>, repository_path: &Path) -> Result<ConventionalFilter> {
    let pwd = std::env::current_dir()?;
    let config = Config::load(explicit, &[pwd.as_path(), repository_path])?;

    match config.source() {
        Some(path) => tracing::info!(path = %path.display(), "using prefixes from config file"),
        None => tracing::info!("using default prefixes"),
    }

    Ok(ConventionalFilter::new(config.prefixes()))
}
