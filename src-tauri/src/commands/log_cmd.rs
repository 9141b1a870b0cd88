//! Log Commands
//!
//! Read access to the in-memory tail of the application log.

/// Most recent log lines, oldest first (empty before the logger starts)
#[tauri::command]
pub fn recent_logs() -> Vec<String> {
    rolling_logger::recent_lines()
}
