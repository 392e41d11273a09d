//! JS-facing conversions of the engine's read surface.

use mining_core::{Coin, EngineSnapshot};
use wasm_bindgen::prelude::*;

/// Convert an engine snapshot to a JS value.
pub fn snapshot_to_js(snapshot: &EngineSnapshot) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(snapshot)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
}

/// Convert the coin list to a JS array of plain objects.
pub fn coins_to_js(coins: &[Coin]) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(coins)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
}
