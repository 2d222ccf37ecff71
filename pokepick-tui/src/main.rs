use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

#[tokio::main]
async fn main() {
    let log_file = File::create("pokepick-tui.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = pokepick_tui::run().await {
        eprintln!("Error: {}", e);
    }
}
