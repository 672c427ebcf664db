use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use automl_vision::{format, AutoMlClient, Config, Pipeline, DEFAULT_ENDPOINT};

#[derive(Parser, Debug)]
#[command(name = "automl-vision", version, about = "Query a hosted image classification model")]
struct Cli {
    /// Address of the prediction service
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Make a prediction for an image
    Predict {
        /// Id of the model used for classification
        model_id: String,
        /// Path of the input image
        file_path: PathBuf,
        /// Minimum confidence (0 to 1) for a label to be returned;
        /// defaults to the service-side setting when omitted
        score_threshold: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    // Fail on missing configuration before touching the file or the network.
    let config = Config::from_env()?;

    match cli.command {
        Command::Predict {
            model_id,
            file_path,
            score_threshold,
        } => {
            let client = AutoMlClient::builder()
                .endpoint(cli.endpoint)
                .connect()
                .await?;
            let mut pipeline = Pipeline::new(config, client);
            let prediction = pipeline
                .run(&model_id, &file_path, score_threshold.as_deref())
                .await?;

            let stdout = io::stdout();
            let mut out = stdout.lock();
            format::write_results(&mut out, &prediction)?;
            out.flush()?;
        }
    }

    Ok(())
}
