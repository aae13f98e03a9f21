#![cfg(target_arch = "wasm32")]

//! Browser-side smoke tests for the WASM API surface.
//! The rules themselves are covered by the unit tests; these only check
//! that state crosses the JS boundary intact.

use checkers::api;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn field(state: &JsValue, name: &str) -> JsValue {
    Reflect::get(state, &JsValue::from_str(name)).expect("state field must exist")
}

#[wasm_bindgen_test]
fn new_game_reports_red_to_move() {
    let state = api::new_game().unwrap();

    assert_eq!(field(&state, "current_player").as_f64(), Some(1.0));
    assert_eq!(field(&state, "moves_played").as_f64(), Some(0.0));
    // `None` crosses the boundary as `undefined`.
    assert!(field(&state, "selected").is_undefined());
}

#[wasm_bindgen_test]
fn clicks_select_and_move_across_the_boundary() {
    api::new_game().unwrap();

    let state = api::click_square(5, 0).unwrap();
    assert!(field(&state, "selected").is_object());

    let state = api::click_square(4, 1).unwrap();
    assert_eq!(field(&state, "current_player").as_f64(), Some(2.0));
    assert_eq!(field(&state, "moves_played").as_f64(), Some(1.0));
}

#[wasm_bindgen_test]
fn out_of_range_click_is_a_js_error() {
    api::new_game().unwrap();

    assert!(api::click_square(8, 8).is_err());
}

#[wasm_bindgen_test]
fn snapshot_roundtrips_over_the_boundary() {
    api::new_game().unwrap();
    api::click_square(5, 0).unwrap();
    api::click_square(4, 1).unwrap();

    let bytes = api::save_game().unwrap();
    let state = api::load_game(&bytes).unwrap();

    assert_eq!(field(&state, "current_player").as_f64(), Some(2.0));
    assert_eq!(field(&state, "moves_played").as_f64(), Some(1.0));
}
