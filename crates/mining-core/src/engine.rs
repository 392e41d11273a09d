//! The mining engine state machine.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::coin::Coin;
use crate::difficulty::{qualifies, DifficultyLevel};
use crate::hash::next_hash;

/// Period of the tick driver, in milliseconds.
pub const TICK_INTERVAL_MS: u32 = 10;

/// Errors from engine commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The difficulty cannot change while the miner is running.
    Running,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Running => {
                write!(f, "Difficulty cannot be changed while mining is running")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}

/// An owned read projection of the engine state, for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Whether the miner is currently running.
    pub running: bool,
    /// Latest hash in the chain; empty before the first tick.
    pub current_hash: String,
    /// Number of ticks executed since the last reset.
    pub iteration_count: u64,
    /// Difficulty level applied to new hashes.
    pub difficulty: DifficultyLevel,
    /// Coins discovered so far, in discovery order.
    pub coins: Vec<Coin>,
}

/// The mining simulation state machine.
///
/// Owns all mutable simulation state. A periodic driver calls [`tick`]
/// every [`TICK_INTERVAL_MS`] while the engine is running; each tick
/// chains the hash forward, bumps the iteration count and collects a
/// coin when the new hash qualifies at the current difficulty.
///
/// Lifecycle commands are tolerant: calling them from a state where
/// they do not apply is a no-op, not an error. The single exception is
/// [`set_difficulty`], which reports rejection so callers can surface
/// it.
///
/// [`tick`]: MiningEngine::tick
/// [`set_difficulty`]: MiningEngine::set_difficulty
#[derive(Debug, Clone, Default)]
pub struct MiningEngine {
    running: bool,
    current_hash: String,
    iteration_count: u64,
    difficulty: DifficultyLevel,
    coins: Vec<Coin>,
}

impl MiningEngine {
    /// Create an idle engine with an empty chain and difficulty 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin mining. No-op if already running, so a driver can never be
    /// installed twice.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Halt mining, preserving the hash, count, coins and difficulty.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Halt mining and clear the chain, count and coins.
    ///
    /// The difficulty level deliberately persists across resets.
    pub fn reset(&mut self) {
        self.running = false;
        self.current_hash = String::new();
        self.iteration_count = 0;
        self.coins.clear();
    }

    /// Execute one mining iteration.
    ///
    /// Only advances while running; a stray driver callback arriving
    /// after [`stop`] or [`reset`] therefore cannot move the chain.
    /// Returns the discovered coin when the new hash qualifies.
    ///
    /// [`stop`]: MiningEngine::stop
    /// [`reset`]: MiningEngine::reset
    pub fn tick(&mut self) -> Option<&Coin> {
        if !self.running {
            return None;
        }
        self.current_hash = next_hash(&self.current_hash);
        self.iteration_count += 1;
        if qualifies(&self.current_hash, self.difficulty) {
            self.coins.push(Coin {
                hash: self.current_hash.clone(),
                count: self.iteration_count,
                level: self.difficulty,
            });
            self.coins.last()
        } else {
            None
        }
    }

    /// Set the difficulty for subsequent ticks.
    ///
    /// Rejected while running, so the rules cannot change mid-run. The
    /// range check happens earlier, in [`DifficultyLevel::new`].
    pub fn set_difficulty(&mut self, level: DifficultyLevel) -> Result<(), EngineError> {
        if self.running {
            return Err(EngineError::Running);
        }
        self.difficulty = level;
        Ok(())
    }

    /// Whether the miner is currently running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Latest hash in the chain; empty before the first tick.
    #[inline]
    pub fn current_hash(&self) -> &str {
        &self.current_hash
    }

    /// Number of ticks executed since the last reset.
    #[inline]
    pub fn iteration_count(&self) -> u64 {
        self.iteration_count
    }

    /// Difficulty level applied to new hashes.
    #[inline]
    pub fn difficulty(&self) -> DifficultyLevel {
        self.difficulty
    }

    /// Coins discovered since the last reset, in discovery order.
    #[inline]
    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    /// Number of coins discovered since the last reset.
    #[inline]
    pub fn coin_count(&self) -> usize {
        self.coins.len()
    }

    /// Owned projection of the full observable state.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            running: self.running,
            current_hash: self.current_hash.clone(),
            iteration_count: self.iteration_count,
            difficulty: self.difficulty,
            coins: self.coins.clone(),
        }
    }
}
