//! Headless sales prediction.
//!
//! Reads one order form as JSON and prints the prediction report.
//!
//! # Usage
//! ```sh
//! cargo run --bin predict -- --input order.json
//! cat order.json | cargo run --bin predict -- --json
//! ```
//!
//! # Environment Variables
//! - `MODEL_PATH` - Model artifact (default: `final_sales_forecasting_model.json` beside the binary)
//! - `FORM_DEFAULTS_FILE` - Optional TOML overrides for the form defaults
//! - `RUST_LOG` - Log filter (default: `info`). Logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use salescast::application::ml::load_predictor;
use salescast::application::prediction_service::PredictionService;
use salescast::config::Config;
use salescast::domain::sales::OrderForm;
use salescast::infrastructure::logging;
use std::io::Read;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the order form JSON (reads stdin when omitted)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Model artifact, overriding MODEL_PATH
    #[arg(long)]
    model: Option<PathBuf>,

    /// Print the outcome as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn read_body(input: Option<&PathBuf>) -> Result<String> {
    let content = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read order form {:?}", path))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read order form from stdin")?;
            buffer
        }
    };
    Ok(content)
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init_stderr();

    let args = Args::parse();
    let config = Config::from_env()?;
    let model_path = args.model.clone().unwrap_or(config.model_path);

    let predictor = match load_predictor(&model_path) {
        Ok(p) => p,
        Err(e) => {
            error!("Error loading model files: {}", e);
            anyhow::bail!("Model could not be loaded: {}", e);
        }
    };
    let service = PredictionService::new(predictor);

    let body = match read_body(args.input.as_ref()) {
        Ok(body) => body,
        Err(e) => {
            error!("{:#}", e);
            anyhow::bail!("{:#}", e);
        }
    };
    let outcome = match OrderForm::from_json(&body) {
        Ok(form) => service.submit(&form),
        Err(e) => PredictionService::reject(e),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome);
    }

    if !outcome.is_success() {
        anyhow::bail!("Prediction failed");
    }
    info!("Done.");
    Ok(())
}
