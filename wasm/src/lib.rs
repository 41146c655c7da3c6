//! Baize WebAssembly bindings.
//!
//! Exposes the table session to the browser UI. The UI owns presentation (wheel
//! animation, sound, DOM); these bindings resolve rounds instantaneously and the UI
//! stages playback on its own schedule.

use baize_engine::{Table, TableError, WheelRng};
use baize_types::{slot_angle_degrees, BetTarget, Pocket, WHEEL_ORDER};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

/// Helper to convert a serializable value to a plain JavaScript object.
fn to_object<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize: {e}")))
}

fn to_js_error(err: TableError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// A single-player roulette session owned by the page.
#[wasm_bindgen]
pub struct WasmTable {
    inner: Table,
}

#[wasm_bindgen]
impl WasmTable {
    /// Create a session seeded from OS entropy.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmTable {
        WasmTable {
            inner: Table::new(WheelRng::from_entropy()),
        }
    }

    /// Create a reproducible session for demos and tests.
    pub fn with_seed(seed: u64) -> WasmTable {
        WasmTable {
            inner: Table::new(WheelRng::seeded(seed)),
        }
    }

    /// Place a bet. `target` uses the tagged shape, e.g.
    /// `{kind: "straight", value: 17}` or `{kind: "red"}`.
    pub fn place_bet(&mut self, target: JsValue, stake: u64) -> Result<(), JsValue> {
        let target: BetTarget = serde_wasm_bindgen::from_value(target)
            .map_err(|e| JsValue::from_str(&format!("Invalid bet target: {e}")))?;
        self.inner.place_bet(target, stake).map_err(to_js_error)
    }

    pub fn clear_bets(&mut self) {
        self.inner.clear_bets();
    }

    /// Spin the wheel and settle the round. Returns the full round result; the UI
    /// animates toward `pocket` and reveals the rest afterwards.
    pub fn spin(&mut self) -> Result<JsValue, JsValue> {
        let result = self.inner.spin().map_err(to_js_error)?;
        to_object(&result)
    }

    #[wasm_bindgen(getter)]
    pub fn balance(&self) -> u64 {
        self.inner.balance()
    }

    /// Balance not yet committed to bets.
    #[wasm_bindgen(getter)]
    pub fn available_balance(&self) -> u64 {
        self.inner.available_balance()
    }

    #[wasm_bindgen(getter)]
    pub fn total_staked(&self) -> u64 {
        self.inner.total_staked()
    }

    #[wasm_bindgen(getter)]
    pub fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    /// Current bets in table order.
    pub fn bets(&self) -> Result<JsValue, JsValue> {
        let bets: Vec<_> = self.inner.bets().collect();
        to_object(&bets)
    }

    /// Past draws, most recent first, at most 10 entries.
    pub fn history(&self) -> Vec<u8> {
        self.inner.history().map(|pocket| pocket.value()).collect()
    }

    /// The last resolved round, or `null` before the first spin.
    pub fn last_result(&self) -> Result<JsValue, JsValue> {
        match self.inner.last_result() {
            Some(result) => to_object(result),
            None => Ok(JsValue::NULL),
        }
    }

    /// Restore the session to its starting state.
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

impl Default for WasmTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Physical wheel order for rendering, clockwise from the zero.
#[wasm_bindgen]
pub fn wheel_order() -> Vec<u8> {
    WHEEL_ORDER.to_vec()
}

/// Color name for a pocket: `"green"`, `"red"`, or `"black"`.
#[wasm_bindgen]
pub fn pocket_color(pocket: u8) -> Result<String, JsValue> {
    let pocket = Pocket::new(pocket).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(pocket.color().to_string())
}

/// Rotation angle, in degrees clockwise from the zero mark, of a pocket's slot.
#[wasm_bindgen]
pub fn pocket_angle(pocket: u8) -> Result<f64, JsValue> {
    let pocket = Pocket::new(pocket).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(slot_angle_degrees(pocket))
}
