//! Browser smoke tests for the wasm miner controller.

#![cfg(target_arch = "wasm32")]

use mining_wasm::Miner;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn miner_starts_idle() {
    let miner = Miner::new();
    assert!(!miner.is_running());
    assert_eq!(miner.current_hash(), "");
    assert_eq!(miner.iteration_count(), 0);
    assert_eq!(miner.difficulty(), 1);
    assert_eq!(miner.coin_count(), 0);
}

#[wasm_bindgen_test]
fn start_stop_round_trip() {
    let mut miner = Miner::new();
    miner.start().unwrap();
    assert!(miner.is_running());
    // Idempotent: a second start keeps the single active interval
    miner.start().unwrap();
    miner.stop();
    assert!(!miner.is_running());
}

#[wasm_bindgen_test]
fn set_difficulty_rejects_out_of_range() {
    let mut miner = Miner::new();
    assert!(miner.set_difficulty(0).is_err());
    assert!(miner.set_difficulty(6).is_err());
    assert_eq!(miner.difficulty(), 1);
    miner.set_difficulty(3).unwrap();
    assert_eq!(miner.difficulty(), 3);
}

#[wasm_bindgen_test]
fn set_difficulty_rejected_while_running() {
    let mut miner = Miner::new();
    miner.start().unwrap();
    assert!(miner.set_difficulty(2).is_err());
    assert_eq!(miner.difficulty(), 1);
    miner.stop();
}

#[wasm_bindgen_test]
fn report_has_header_and_file_name() {
    let miner = Miner::new();
    let report = miner.report();
    assert!(report.contains("happy mining!"));
    assert!(report.contains("채굴한 코인 개수: 0"));
    assert!(miner.report_file_name().ends_with(" COINS.txt"));
}
