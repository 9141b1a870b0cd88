//! Greeting Commands
//!
//! The two host commands this UI talks to, behind a small invoker trait so
//! the request flow can run against a stub outside the webview.

use async_trait::async_trait;
use wasm_bindgen::prelude::*;

use crate::models::GreetArgs;
use super::invoke;

/// A host command with its payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Status request, no payload
    Check,
    /// Greeting request for a name
    Greet(GreetArgs),
}

impl Command {
    pub fn greet(name: impl Into<String>) -> Self {
        Command::Greet(GreetArgs { name: name.into() })
    }

    /// Command name as registered in the Tauri invoke handler
    pub fn name(&self) -> &'static str {
        match self {
            Command::Check => "check",
            Command::Greet(_) => "greet",
        }
    }
}

/// Boundary that executes a host command and yields its text result
#[async_trait(?Send)]
pub trait CommandInvoker {
    async fn invoke(&self, command: &Command) -> Result<String, String>;
}

/// Invoker backed by `window.__TAURI__.core.invoke`
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriInvoker;

#[async_trait(?Send)]
impl CommandInvoker for TauriInvoker {
    async fn invoke(&self, command: &Command) -> Result<String, String> {
        let js_args = match command {
            Command::Check => JsValue::NULL,
            Command::Greet(args) => serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?,
        };
        let result = invoke(command.name(), js_args).await.map_err(js_error_message)?;
        serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
    }
}

/// Backend errors arrive as plain strings; anything else is debug-printed
fn js_error_message(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names_match_backend_handlers() {
        assert_eq!(Command::Check.name(), "check");
        assert_eq!(Command::greet("Ada").name(), "greet");
    }

    #[test]
    fn test_greet_payload_shape() {
        let Command::Greet(args) = Command::greet("Ada") else {
            panic!("expected greet command");
        };
        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Ada" }));
    }
}
