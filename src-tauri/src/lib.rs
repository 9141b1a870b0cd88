//! Kinetic Backend
//!
//! Layered architecture:
//! - domain: Request payloads and errors
//! - gateway: Upstream greeting service access
//! - commands: Tauri command handlers

use std::sync::Arc;

use tauri::Manager;

mod config;
mod domain;
mod gateway;
mod commands;

use config::GatewayConfig;
use gateway::{GreetingGateway, HttpGateway};

/// Application state shared across commands
pub struct AppState {
    pub gateway: Arc<dyn GreetingGateway>,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            rolling_logger::init_logger(app.path().app_log_dir()?, "Kinetic")?;

            let config = GatewayConfig::from_env().map_err(|e| {
                let _ = rolling_logger::error(&format!("Invalid gateway configuration: {}", e));
                e
            })?;
            let gateway = HttpGateway::new(config)?;
            let _ = rolling_logger::info(&format!(
                "Upstream greeting service at {} (timeout {:?})",
                gateway.config().base_url,
                gateway.config().timeout
            ));

            app.manage(AppState {
                gateway: Arc::new(gateway),
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![commands::greet, commands::check, commands::recent_logs])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
