use chrono::Utc;
use clap::{Parser, Subcommand};
use moto_search_core::{
    PanelState, RestStore, SearchAggregator, SearchResponse, SearchResult, SearchSession,
    MIN_QUERY_CHARS,
};
use std::io::BufRead;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "moto-search", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend base URL
    #[arg(long, env = "MOTO_SEARCH_API_URL", default_value = "http://localhost:54321")]
    api_url: String,

    /// Backend API key
    #[arg(long, env = "MOTO_SEARCH_API_KEY", default_value = "")]
    api_key: String,
}

#[derive(Subcommand)]
enum Command {
    /// Run one federated search across routes, forum posts, businesses, and products.
    Search {
        /// Search query
        #[arg(long)]
        query: String,
        /// Print the full response as JSON instead of one line per hit.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Read query lines from stdin and print the search panel state after each.
    Interactive,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_version = env!("CARGO_PKG_VERSION");

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();

    let store = RestStore::new(&cli.api_url, &cli.api_key)
        .map_err(|error| anyhow::anyhow!(error.to_string()))?;
    let aggregator =
        SearchAggregator::new(store.clone(), store.clone(), store.clone(), store);

    info!(
        version = app_version,
        started_at = %Utc::now().to_rfc3339(),
        api_url = %cli.api_url,
        "moto-search boot"
    );

    match cli.command {
        Command::Search { query, json } => {
            let response = aggregator.search(&query).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
                return Ok(());
            }

            report_failed_sources(&response);
            if response.results.is_empty() {
                println!("no results found for '{query}'");
            }
            for hit in &response.results {
                print_hit(hit);
            }
        }
        Command::Interactive => {
            let mut session = SearchSession::new();
            println!("type a query and press enter (ctrl-d to quit)");

            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = line?;
                let term = line.trim();

                if let Some(ticket) = session.begin(term) {
                    let response = aggregator.search(term).await;
                    report_failed_sources(&response);
                    if !session.apply(ticket, response) {
                        warn!(query = %term, "discarded a stale search response");
                    }
                }

                match session.state() {
                    PanelState::BelowThreshold => {
                        println!("(keep typing, at least {MIN_QUERY_CHARS} characters)");
                    }
                    PanelState::Loading => println!("searching..."),
                    PanelState::NoMatches { query } => {
                        println!("no results found for '{query}'");
                    }
                    PanelState::Ready { results } => {
                        for hit in &results {
                            print_hit(hit);
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

fn report_failed_sources(response: &SearchResponse) {
    for source in &response.failed_sources {
        warn!(source = %source, "source unavailable, results may be incomplete");
    }
}

fn print_hit(hit: &SearchResult) {
    println!("[{}] {} -> {}", hit.kind, hit.title, hit.url);
    if let Some(difficulty) = &hit.metadata.difficulty {
        println!("  difficulty={difficulty}");
    }
    if let Some(category) = &hit.metadata.category {
        println!("  category={category}");
    }
    if let Some(location) = &hit.metadata.location {
        println!("  location={location}");
    }
    if let Some(price) = hit.metadata.price {
        println!("  price={price:.2}");
    }
    if !hit.description.is_empty() {
        println!("  {}", hit.description);
    }
}
