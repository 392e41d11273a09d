//! Mining controller for the browser client.

use std::cell::RefCell;
use std::rc::Rc;

use mining_core::{DifficultyLevel, MiningEngine, TICK_INTERVAL_MS};
use wasm_bindgen::prelude::*;

use crate::state::{coins_to_js, snapshot_to_js};

/// The main mining controller.
///
/// Owns the engine and the browser interval that drives it. At most one
/// interval is ever active; the stored handle is the witness, and
/// `stop`/`reset` clear it before they return so no further tick can
/// fire afterwards.
#[wasm_bindgen]
pub struct Miner {
    /// Shared with the tick closure while the interval is active.
    engine: Rc<RefCell<MiningEngine>>,
    /// Handle of the active interval, if any.
    interval_id: Option<i32>,
    /// Keeps the tick closure alive for the lifetime of the interval.
    tick_closure: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl Miner {
    /// Create an idle miner with an empty chain and difficulty 1.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Miner {
        Miner {
            engine: Rc::new(RefCell::new(MiningEngine::new())),
            interval_id: None,
            tick_closure: None,
        }
    }

    /// Start mining at one tick per 10 ms. No-op if already running.
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.engine.borrow().is_running() {
            return Ok(());
        }

        let engine = Rc::clone(&self.engine);
        let closure = Closure::<dyn FnMut()>::new(move || {
            engine.borrow_mut().tick();
        });

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            TICK_INTERVAL_MS as i32,
        )?;

        self.interval_id = Some(id);
        self.tick_closure = Some(closure);
        self.engine.borrow_mut().start();
        Ok(())
    }

    /// Stop mining, preserving the hash, count, coins and difficulty.
    pub fn stop(&mut self) {
        self.clear_interval();
        self.engine.borrow_mut().stop();
    }

    /// Stop mining and clear the chain, count and coins.
    ///
    /// The difficulty level persists, matching the slider staying put
    /// when the collection is cleared.
    pub fn reset(&mut self) {
        self.clear_interval();
        self.engine.borrow_mut().reset();
    }

    /// Set the difficulty level (1-5).
    ///
    /// Out-of-range values and changes while running are rejected.
    pub fn set_difficulty(&mut self, level: u8) -> Result<(), JsValue> {
        let level =
            DifficultyLevel::new(level).map_err(|e| JsValue::from_str(&format!("{}", e)))?;
        self.engine
            .borrow_mut()
            .set_difficulty(level)
            .map_err(|e| JsValue::from_str(&format!("{}", e)))
    }

    /// Check if mining is active.
    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool {
        self.engine.borrow().is_running()
    }

    /// Latest hash in the chain; empty before the first tick.
    #[wasm_bindgen(getter)]
    pub fn current_hash(&self) -> String {
        self.engine.borrow().current_hash().to_string()
    }

    /// Number of ticks executed since the last reset.
    #[wasm_bindgen(getter)]
    pub fn iteration_count(&self) -> u64 {
        self.engine.borrow().iteration_count()
    }

    /// Current difficulty level.
    #[wasm_bindgen(getter)]
    pub fn difficulty(&self) -> u8 {
        self.engine.borrow().difficulty().get()
    }

    /// Number of coins collected since the last reset.
    #[wasm_bindgen(getter)]
    pub fn coin_count(&self) -> usize {
        self.engine.borrow().coin_count()
    }

    /// Collected coins in discovery order.
    pub fn coins(&self) -> Result<JsValue, JsValue> {
        coins_to_js(self.engine.borrow().coins())
    }

    /// Full observable state for rendering.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        snapshot_to_js(&self.engine.borrow().snapshot())
    }

    /// Build the downloadable coin report text.
    pub fn report(&self) -> String {
        mining_core::report(self.engine.borrow().coins(), &locale_timestamp())
    }

    /// File name for the downloaded report.
    pub fn report_file_name(&self) -> String {
        mining_core::report_file_name(&locale_timestamp())
    }

    /// Release the interval so no further tick fires.
    fn clear_interval(&mut self) {
        if let Some(id) = self.interval_id.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(id);
            }
        }
        self.tick_closure = None;
    }
}

impl Default for Miner {
    fn default() -> Self {
        Miner::new()
    }
}

impl Drop for Miner {
    fn drop(&mut self) {
        self.clear_interval();
    }
}

/// Current wall-clock time in the browser's locale format.
fn locale_timestamp() -> String {
    js_sys::Date::new_0()
        .to_locale_string("default", &JsValue::UNDEFINED)
        .into()
}
