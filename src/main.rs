//! standard-routes
//!
//! Fetches the transit API's standard routes, sorts each route's track
//! circuits by sequence number, warns about duplicate circuit IDs and prints
//! the result for the static `StandardRoutes.json` file.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use standard_routes::config::loader::{load_config, validated};
use standard_routes::fetch::StandardRoutesClient;
use standard_routes::observability::logging;
use standard_routes::report::write_report;
use standard_routes::routes::{normalize, StandardRoutes};

#[derive(Parser)]
#[command(name = "standard-routes")]
#[command(about = "Generate StandardRoutes.json from the transit API", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch standard routes from the API, normalize and print them
    Fetch {
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Endpoint URL
        #[arg(short, long)]
        url: Option<String>,

        /// API key
        #[arg(short, long, env = "WMATA_API_KEY", hide_env_values = true)]
        key: Option<String>,

        /// Write the JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Normalize an existing StandardRoutes.json without fetching
    Check {
        /// StandardRoutes.json to check
        file: PathBuf,

        /// Write the JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Fetch {
            config,
            url,
            key,
            output,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(url) = url {
                config.source.url = url;
            }
            if let Some(key) = key {
                config.source.api_key = key;
            }
            if output.is_some() {
                config.output.path = output;
            }
            let config = validated(config)?;

            let client = StandardRoutesClient::new(&config.source)?;
            let mut data = client.fetch().await?;
            normalize(&mut data);
            write_report(&data, config.output.path.as_deref())?;
        }
        Commands::Check { file, output } => {
            tracing::info!(path = %file.display(), "Checking standard routes file");
            let reader = BufReader::new(File::open(&file)?);
            let mut data: StandardRoutes = serde_json::from_reader(reader)?;
            normalize(&mut data);
            write_report(&data, output.as_deref())?;
        }
    }

    Ok(())
}
