//! Core mining-loop logic for the happy mining simulator.
//!
//! This crate provides pure Rust implementations of:
//! - SHA256 hash chaining over the previous hash value
//! - Difficulty levels and the leading-zero coin predicate
//! - The mining engine state machine (start/stop/reset/tick)
//! - Plain-text coin report formatting for the download surface

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod coin;
pub mod difficulty;
pub mod engine;
pub mod export;
pub mod hash;

pub use coin::Coin;
pub use difficulty::{qualifies, DifficultyError, DifficultyLevel, MAX_LEVEL, MIN_LEVEL};
pub use engine::{EngineError, EngineSnapshot, MiningEngine, TICK_INTERVAL_MS};
pub use export::{report, report_file_name};
pub use hash::{next_hash, nth_hash, HASH_HEX_LEN};
