use chrono::Local;
use salescast::application::ml::load_predictor;
use salescast::application::prediction_service::PredictionService;
use salescast::config::Config;
use salescast::infrastructure::logging;
use salescast::interfaces::app::PredictorApp;
use salescast::interfaces::view_models::FormViewModel;

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok();

    // 1. Logging (Stdout + UI)
    let (log_tx, log_rx) = crossbeam_channel::unbounded();
    logging::init_with_ui_channel(log_tx);

    info!("Starting Store Sales Predictor {}...", env!("CARGO_PKG_VERSION"));

    // 2. Config
    let config = Config::from_env()?;
    info!("Model artifact: {:?}", config.model_path);

    // 3. Load the model once; a failure leaves the window in its fatal state
    let app = match load_predictor(&config.model_path) {
        Ok(predictor) => {
            let service = PredictionService::new(predictor);
            let view = FormViewModel::new(&config.form_defaults, Local::now().date_naive());
            PredictorApp::ready(service, view, log_rx)
        }
        Err(e) => {
            error!("Error loading model files: {}", e);
            PredictorApp::fatal(e.to_string(), log_rx)
        }
    };

    // 4. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([900.0, 900.0])
            .with_title("Store Sales Predictor"),
        ..Default::default()
    };

    eframe::run_native(
        "Store Sales Predictor",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
