//! WASM-facing API over a single engine-owned game instance.
//!
//! The UI layer holds no game state of its own: it feeds click events in
//! and renders the [`GameState`](crate::types::GameState) that comes back.

use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;
use wasm_bindgen::prelude::*;

use crate::game::Game;
use crate::snapshot;

static GAME: Lazy<Mutex<Game>> = Lazy::new(|| Mutex::new(Game::new()));

fn lock_game() -> Result<MutexGuard<'static, Game>, JsValue> {
    GAME.lock()
        .map_err(|_| JsValue::from_str("game instance lock poisoned"))
}

fn state_to_js(game: &Game) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&game.to_game_state()).map_err(JsValue::from)
}

/// Resets the session to the starting position and returns its state.
#[wasm_bindgen]
pub fn new_game() -> Result<JsValue, JsValue> {
    let mut game = lock_game()?;
    *game = Game::new();
    state_to_js(&game)
}

/// Feeds one click event and returns the resulting state.
/// Errors only on out-of-range coordinates; an illegal destination
/// resolves silently through the selection state machine.
#[wasm_bindgen]
pub fn click_square(row: u8, col: u8) -> Result<JsValue, JsValue> {
    let mut game = lock_game()?;
    game.click(row, col).map_err(|e| JsValue::from_str(&e))?;
    state_to_js(&game)
}

/// Returns the current state without mutating anything.
#[wasm_bindgen]
pub fn game_state() -> Result<JsValue, JsValue> {
    let game = lock_game()?;
    state_to_js(&game)
}

/// Turn accessor: 1 = red, 2 = black.
#[wasm_bindgen]
pub fn current_player() -> Result<u8, JsValue> {
    Ok(lock_game()?.current_player())
}

/// Encodes the session for the shell's key-value storage.
#[wasm_bindgen]
pub fn save_game() -> Result<Vec<u8>, JsValue> {
    let game = lock_game()?;
    Ok(snapshot::encode(&game))
}

/// Restores a session saved with [`save_game`] and returns its state.
#[wasm_bindgen]
pub fn load_game(bytes: &[u8]) -> Result<JsValue, JsValue> {
    let restored = snapshot::decode(bytes).map_err(|e| JsValue::from_str(&e))?;
    let mut game = lock_game()?;
    *game = restored;
    state_to_js(&game)
}
