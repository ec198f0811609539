mod analyzer;
mod config;
mod loader;
mod model;
mod pipeline;
mod preprocess;
mod render;
mod report;

use config::load_config;
use tracing::{error, info};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {e}");
            std::process::exit(1);
        }
    };

    info!("🚀 Starting quick analysis...");
    match pipeline::run(&config) {
        Ok(summary) => {
            info!(
                "✅ Analysis complete: {} statements, charts at {}",
                summary.statements,
                summary.image_path.display()
            );
        }
        Err(e) => {
            error!("❌ Analysis failed: {e}");
            std::process::exit(1);
        }
    }
}
