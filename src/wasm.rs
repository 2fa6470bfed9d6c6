use crate::Count;
use crate::game::History;
use crate::game::Throw;
use crate::play::Session;
use crate::predict::Config;
use crate::predict::Predictor;
use wasm_bindgen::prelude::*;

// Re-export types for JavaScript
//
// history crosses the boundary as a plain byte slice of symbols in
// {0,1,2}; there is no manual buffer lifecycle. every symbol is
// validated on entry and rejected as a contract violation otherwise.

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub struct WasmPredictor(Predictor);

#[wasm_bindgen]
pub struct WasmSession(Session);

#[wasm_bindgen]
impl WasmPredictor {
    #[wasm_bindgen(constructor)]
    pub fn new(streak: usize, confidence: Count) -> Self {
        Self(Predictor::from(Config { streak, confidence }))
    }

    #[wasm_bindgen]
    pub fn patient() -> Self {
        Self(Predictor::from(Config::PATIENT))
    }

    #[wasm_bindgen]
    pub fn eager() -> Self {
        Self(Predictor::from(Config::EAGER))
    }

    /// the counter to the opponent's likely next throw. `user_move` must
    /// match the final history entry; the caller keeps them consistent.
    #[wasm_bindgen]
    pub fn best_move(&mut self, user_move: u8, history: &[u8]) -> Result<u8, JsValue> {
        let user = Throw::parse(user_move).map_err(|e| JsValue::from_str(e))?;
        let history = History::try_from(history).map_err(|e| JsValue::from_str(e))?;
        match history.last() {
            Some(last) if last != user => {
                Err(JsValue::from_str("user move inconsistent with history"))
            }
            None => Err(JsValue::from_str("user move missing from history")),
            Some(_) => Ok(u8::from(self.0.counter(&history))),
        }
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.0.reset();
    }
}

#[wasm_bindgen]
impl WasmSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self(Session::default())
    }

    /// play one round and return `{ user, bot, outcome }` as JSON.
    #[wasm_bindgen]
    pub fn play(&mut self, user_move: u8) -> Result<JsValue, JsValue> {
        let user = Throw::parse(user_move).map_err(|e| JsValue::from_str(e))?;
        let round = self.0.play(user);
        let json = serde_json::to_string(&round).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(JsValue::from_str(&json))
    }

    /// running score as JSON.
    #[wasm_bindgen]
    pub fn score(&self) -> Result<JsValue, JsValue> {
        let json = serde_json::to_string(&self.0.score())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(JsValue::from_str(&json))
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.0.reset();
    }
}
