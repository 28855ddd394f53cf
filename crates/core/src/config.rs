//! Runtime configuration of the machine.
//!
//! Compile-time defaults live in `tui-slots-types`; [`SlotConfig`] carries the
//! values a session actually runs with and can be overridden from the
//! environment:
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `TUI_SLOTS_BALANCE` | starting balance | 100 |
//! | `TUI_SLOTS_BET` | bet per spin | 1 |
//! | `TUI_SLOTS_SEED` | RNG seed | derived from the clock |
//! | `TUI_SLOTS_TURBO` | `1`/`true` halves every animation duration | off |
//!
//! Unparseable values fall back to the default.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::SlotError;
use crate::types::{
    SymbolType, BASE_SPIN_DISTANCE, BASE_SPIN_MS, BET_AMOUNT, EXTRA_SPIN_MS, INITIAL_BALANCE,
    MAX_EXTRA_DISTANCE, MIN_STOP_DISTANCE, PER_REEL_SPIN_DISTANCE, PER_REEL_SPIN_MS, REEL_COUNT,
    REEL_SYMBOLS, SETTLE_DELAY_MS, START_OVERSHOOT, STOP_BASE_MS, STOP_OVERSHOOT, STOP_STAGGER_MS,
};

/// Distances (in slots) and durations (in ms) of the reel animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinTiming {
    pub base_distance: u32,
    pub per_reel_distance: u32,
    /// Inclusive upper bound of the random extra distance.
    pub max_extra_distance: u32,
    pub base_spin_ms: u32,
    pub per_reel_spin_ms: u32,
    pub extra_spin_ms: u32,
    pub start_overshoot: f64,
    pub stop_overshoot: f64,
    pub stop_base_ms: u32,
    pub stop_stagger_ms: u32,
    pub min_stop_distance: f64,
    pub settle_delay_ms: u32,
}

impl Default for SpinTiming {
    fn default() -> Self {
        Self {
            base_distance: BASE_SPIN_DISTANCE,
            per_reel_distance: PER_REEL_SPIN_DISTANCE,
            max_extra_distance: MAX_EXTRA_DISTANCE,
            base_spin_ms: BASE_SPIN_MS,
            per_reel_spin_ms: PER_REEL_SPIN_MS,
            extra_spin_ms: EXTRA_SPIN_MS,
            start_overshoot: START_OVERSHOOT,
            stop_overshoot: STOP_OVERSHOOT,
            stop_base_ms: STOP_BASE_MS,
            stop_stagger_ms: STOP_STAGGER_MS,
            min_stop_distance: MIN_STOP_DISTANCE,
            settle_delay_ms: SETTLE_DELAY_MS,
        }
    }
}

impl SpinTiming {
    /// Same distances, every duration halved.
    pub fn turbo() -> Self {
        let d = Self::default();
        Self {
            base_spin_ms: d.base_spin_ms / 2,
            per_reel_spin_ms: d.per_reel_spin_ms / 2,
            extra_spin_ms: d.extra_spin_ms / 2,
            stop_base_ms: d.stop_base_ms / 2,
            stop_stagger_ms: d.stop_stagger_ms / 2,
            settle_delay_ms: d.settle_delay_ms / 2,
            ..d
        }
    }

    /// Slots travelled by reel `reel` on a spin with `extra` random distance.
    pub fn spin_distance(&self, reel: usize, extra: u32) -> f64 {
        self.base_distance as f64 + (reel as u32 * self.per_reel_distance) as f64 + extra as f64
    }

    pub fn spin_duration_ms(&self, reel: usize, extra: u32) -> u32 {
        self.base_spin_ms
            .saturating_add((reel as u32).saturating_mul(self.per_reel_spin_ms))
            .saturating_add(extra.saturating_mul(self.extra_spin_ms))
    }

    pub fn stop_duration_ms(&self, reel: usize) -> u32 {
        self.stop_base_ms
            .saturating_add((reel as u32).saturating_mul(self.stop_stagger_ms))
    }

    pub fn validate(&self) -> Result<(), SlotError> {
        if self.base_distance == 0 {
            return Err(SlotError::InvalidTiming("base spin distance must be positive"));
        }
        if !self.start_overshoot.is_finite() || !self.stop_overshoot.is_finite() {
            return Err(SlotError::InvalidTiming("overshoot must be finite"));
        }
        if !self.min_stop_distance.is_finite() || self.min_stop_distance <= 0.0 {
            return Err(SlotError::InvalidTiming("minimum stop distance must be positive"));
        }
        Ok(())
    }
}

/// Session configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotConfig {
    pub initial_balance: u32,
    pub bet: u32,
    pub reels: usize,
    pub seed: u32,
    pub timing: SpinTiming,
    /// Master table every reel draws from.
    pub symbols: Vec<SymbolType>,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            initial_balance: INITIAL_BALANCE,
            bet: BET_AMOUNT,
            reels: REEL_COUNT,
            seed: 1,
            timing: SpinTiming::default(),
            symbols: REEL_SYMBOLS.to_vec(),
        }
    }
}

impl SlotConfig {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let initial_balance = lookup("TUI_SLOTS_BALANCE")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.initial_balance);

        let bet = lookup("TUI_SLOTS_BET")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.bet);

        let seed = lookup("TUI_SLOTS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let turbo = lookup("TUI_SLOTS_TURBO")
            .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        Self {
            initial_balance,
            bet,
            seed,
            timing: if turbo {
                SpinTiming::turbo()
            } else {
                SpinTiming::default()
            },
            ..defaults
        }
    }

    /// Reject configurations the machine cannot run with.
    pub fn validate(&self) -> Result<(), SlotError> {
        if self.symbols.is_empty() {
            return Err(SlotError::EmptySymbolTable);
        }
        if self.reels != REEL_COUNT {
            return Err(SlotError::ReelCount {
                expected: REEL_COUNT,
                got: self.reels,
            });
        }
        if self.bet == 0 {
            return Err(SlotError::ZeroBet);
        }
        self.timing.validate()
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
