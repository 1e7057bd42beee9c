use anyhow::Context;
use clap::Parser;
use ridersim_api::RestApi;
use ridersim_similarity::{ScoringConfig, SimilarityEngine};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Find riders who ride like a given rider
#[derive(Parser, Debug)]
#[command(name = "ridersim")]
#[command(about = "Rider similarity search over a CSV roster", long_about = None)]
struct Args {
    /// Path to the rider CSV dataset
    #[arg(short, long, default_value = "./data/rider_points.csv")]
    dataset: PathBuf,

    /// Optional JSON scoring config; unspecified fields keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// HTTP API port
    #[arg(long, default_value_t = 5000)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<ScoringConfig> {
    let Some(path) = path else {
        return Ok(ScoringConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading scoring config {:?}", path))?;
    ScoringConfig::from_json(&json).with_context(|| format!("parsing scoring config {:?}", path))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting ridersim v{}", env!("CARGO_PKG_VERSION"));
    info!("Dataset: {:?}", args.dataset);

    let config = load_config(args.config.as_ref())?;
    let roster = ridersim_storage::load_roster(&args.dataset)
        .await
        .with_context(|| format!("loading dataset {:?}", args.dataset))?;
    let engine = Arc::new(SimilarityEngine::new(roster, config)?);
    info!("Engine ready with {} riders", engine.roster().len());

    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(engine, http_port).await {
                error!("HTTP server error: {}", e);
            }
        })
    });

    info!("HTTP API: http://localhost:{}/riders", http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
