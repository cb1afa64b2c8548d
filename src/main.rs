use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hitlist::client::HttpSearchClient;
use hitlist::config::Config;
use hitlist::store::FileStore;
use hitlist::{RecordId, SearchController, SearchView, SubmitOutcome};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Search Hacker News and dismiss results, remembering both between runs.
#[derive(Debug, Parser)]
#[command(name = "hitlist", version, about)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Store file, overriding the configured location
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search for TERM, or for the remembered term when omitted
    Search { term: Option<String> },
    /// Print the remembered term and result list
    Show,
    /// Dismiss the result with this id
    Dismiss { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    // a dismissal is only useful if the list it edits survives the process
    config.persist_results = true;
    if let Some(path) = cli.store {
        config.store_path = Some(path);
    }

    let store_path = config.resolved_store_path();
    let store = FileStore::open(&store_path)
        .with_context(|| format!("opening store at {}", store_path.display()))?;
    let client = HttpSearchClient::new(config.request_timeout())?;
    let controller = SearchController::new(config, client, Arc::new(store))?;

    match cli.command {
        Command::Search { term } => {
            if let Some(term) = term {
                controller.set_search_term(term)?;
            }
            if controller.submit_search().await? == SubmitOutcome::Skipped {
                eprintln!("nothing to search for");
            }
        }
        Command::Show => {}
        Command::Dismiss { id } => {
            if !controller.remove_record(&RecordId::new(id.as_str()))? {
                eprintln!("no result with id {id}");
            }
        }
    }

    print_view(&controller.view());
    controller.shutdown()?;
    Ok(())
}

fn print_view(view: &SearchView) {
    println!("Search: {}", view.search_term);
    if view.is_error {
        println!("Something went wrong ...");
    }
    for record in &view.records {
        println!(
            "{:>10}  {}  ({})  by {}, {} comments, {} points",
            record.id, record.title, record.url, record.author, record.comment_count, record.score
        );
    }
}
