use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use article_search::config::{Config, Overrides};
use article_search::{api, store::ArticleStore};

#[derive(Parser)]
#[command(name = "artsearch")]
#[command(about = "Article store with keyword and tag search")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (the default)
    Serve(ServeArgs),
}

#[derive(Args, Clone, Default)]
struct ServeArgs {
    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port for the HTTP API
    #[arg(short, long)]
    port: Option<u16>,

    /// JSON file holding the articles
    #[arg(short, long)]
    data_file: Option<PathBuf>,
}

impl From<ServeArgs> for Overrides {
    fn from(args: ServeArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            data_file: args.data_file,
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "article_search=debug,artsearch=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = Config::from_env(args.into())?;

    let store = ArticleStore::open(&config.data_file)?;
    tracing::info!(
        "Loaded {} articles from {}",
        store.len(),
        config.data_file.display()
    );

    let app = api::create_router(store);

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Article search backend running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve(args)) => serve(args).await,
        None => serve(cli.serve).await,
    }
}
