use anyhow::{Context, Result};
use chanscope::analysis::analyze_channel;
use chanscope::config::Config;
use chanscope::models::ChannelSnapshot;
use chanscope::source::{ChannelSource, YouTubeClient};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chanscope-cli")]
#[command(about = "Channel analytics from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a saved channel snapshot without touching the network
    Analyze {
        /// JSON file holding a channel snapshot. Engagement rates are recomputed
        /// from the view, like and comment counts.
        #[arg(long)]
        snapshot: PathBuf,
    },
    /// Fetch a channel from YouTube and analyze it
    Fetch {
        /// Channel id, @handle or youtube.com URL
        input: String,
        /// Print the fetched snapshot instead of the analysis
        #[arg(long)]
        raw: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chanscope=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { snapshot } => {
            let raw = std::fs::read_to_string(&snapshot)
                .with_context(|| format!("failed to read {}", snapshot.display()))?;
            let snapshot: ChannelSnapshot = serde_json::from_str(&raw).with_context(|| {
                format!("{} is not a valid channel snapshot", snapshot.display())
            })?;

            let analysis = analyze_channel(snapshot);
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        Commands::Fetch { input, raw } => {
            let config = Config::from_env()?;
            let client = YouTubeClient::from_config(&config.youtube)?;

            let snapshot = client
                .snapshot_for(&input)
                .await
                .with_context(|| format!("failed to fetch channel '{}'", input))?;

            if raw {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                let analysis = analyze_channel(snapshot);
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            }
        }
    }

    Ok(())
}
