//! WebAssembly bindings for the happy mining simulator.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Driving the mining engine on a fixed 10 ms browser interval
//! - The start/stop/reset lifecycle and difficulty control
//! - Reading engine state snapshots for rendering
//! - Formatting the coin report for the download button

use wasm_bindgen::prelude::*;

pub mod miner;
pub mod state;

// Re-export the main type for JS access
pub use miner::Miner;

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Log to the browser console.
#[wasm_bindgen]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}
