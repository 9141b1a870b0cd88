//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod greeting_cmd;
mod log_cmd;

pub use greeting_cmd::*;
pub use log_cmd::*;
