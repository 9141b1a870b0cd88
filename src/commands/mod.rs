//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands.

mod greeting;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Rejections (backend `Err`) surface as `Err` through `catch`
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

pub use greeting::*;
