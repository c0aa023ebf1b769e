use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use chronos_runner::{AppConfig, ClockApp};
use chronos_sync::CycleOutcome;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = AppConfig::from_env();
    info!("Starting clock against {}", config.time_url);

    let app = ClockApp::new(config);
    app.start().await;

    println!("commands: set <h> <m> <s> | retry | settings | status | quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("set") => {
                let hour = parts.next().unwrap_or("");
                let minute = parts.next().unwrap_or("");
                let second = parts.next().unwrap_or("");
                app.on_field_edited(hour, minute, second).await;
            }
            Some("retry") => {
                if app.retry().await == CycleOutcome::AlreadyRunning {
                    warn!("A sync cycle is already running");
                }
            }
            Some("settings") => {
                info!("Settings panel visible: {}", app.toggle_settings());
            }
            Some("status") => {
                info!("Sync status: {:?}", app.scheduler().status().await);
            }
            Some("quit") | Some("exit") => break,
            Some(other) => warn!("Unknown command: {}", other),
            None => {}
        }
    }
}
