//! Tauri Commands for Greeting + Check
//!
//! Exposes the upstream greeting service to the frontend via Tauri IPC.
//! Errors reach the frontend as the rejection message of `invoke`.

use tauri::State;

use crate::gateway::GreetingGateway;
use crate::AppState;

/// Ask upstream to greet `name` (any text, including empty)
#[tauri::command]
pub async fn greet(state: State<'_, AppState>, name: String) -> Result<String, String> {
    greet_via(state.gateway.as_ref(), &name).await
}

/// Ask upstream for its status text
#[tauri::command]
pub async fn check(state: State<'_, AppState>) -> Result<String, String> {
    check_via(state.gateway.as_ref()).await
}

async fn greet_via(gateway: &dyn GreetingGateway, name: &str) -> Result<String, String> {
    log::info!("greet requested for {:?}", name);
    gateway.greet(name).await.map_err(|e| {
        let _ = rolling_logger::warn(&format!("greet failed: {}", e));
        e.to_string()
    })
}

async fn check_via(gateway: &dyn GreetingGateway) -> Result<String, String> {
    log::info!("check requested");
    gateway.check().await.map_err(|e| {
        let _ = rolling_logger::warn(&format!("check failed: {}", e));
        e.to_string()
    })
}
