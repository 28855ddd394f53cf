//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the slot machine.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Machine Layout
//!
//! - **Reels**: 3 reels, evaluated left to right
//! - **Slots per reel**: 5 (1 visible + 4 buffer for smooth recycling)
//! - **Symbols**: 6 kinds, drawn uniformly from [`REEL_SYMBOLS`]
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed frame interval (~60 FPS) |
//! | `BASE_SPIN_MS` | 2500 | Spin tween duration of the first reel |
//! | `PER_REEL_SPIN_MS` | 600 | Extra duration per reel index |
//! | `EXTRA_SPIN_MS` | 600 | Extra duration per unit of random extra distance |
//! | `STOP_BASE_MS` | 200 | Forced-stop tween duration of the first reel |
//! | `STOP_STAGGER_MS` | 50 | Extra forced-stop duration per reel index |
//! | `SETTLE_DELAY_MS` | 100 | Pause between the last reel stopping and evaluation |
//! | `WIN_MESSAGE_FADE_MS` | 300 | Win message fade in / fade out |
//! | `WIN_MESSAGE_HOLD_MS` | 2000 | Win message hold before fading out |
//! | `PRESS_REVERT_MS` | 100 | Spin button press animation |
//!
//! # Payouts
//!
//! | Tier | Match | Payout |
//! |------|-------|--------|
//! | Jackpot | 3 of a kind | 3 x bet |
//! | Pair | 2 of a kind | 2 x bet |
//!
//! # Examples
//!
//! ```
//! use tui_slots_types::{PayoutTier, SpinAction, SymbolType, REEL_COUNT, REEL_SYMBOLS};
//!
//! let symbol = SymbolType::from_str("sym3").unwrap();
//! assert_eq!(symbol, SymbolType::Sym3);
//! assert_eq!(symbol.display_name(), "Black Triangle");
//!
//! assert_eq!(SpinAction::from_str("toggle"), Some(SpinAction::Toggle));
//! assert_eq!(PayoutTier::Jackpot.multiplier(), 3);
//!
//! assert_eq!(REEL_COUNT, 3);
//! assert!(!REEL_SYMBOLS.is_empty());
//! ```

/// Number of reels on the machine
pub const REEL_COUNT: usize = 3;

/// Symbol slots per reel (1 visible + 4 buffer)
pub const SLOTS_PER_REEL: usize = 5;

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Starting balance of a fresh session
pub const INITIAL_BALANCE: u32 = 100;

/// Bet deducted for every spin
pub const BET_AMOUNT: u32 = 1;

/// Slots every reel travels on a normal spin
pub const BASE_SPIN_DISTANCE: u32 = 10;

/// Additional slots travelled per reel index
pub const PER_REEL_SPIN_DISTANCE: u32 = 5;

/// Upper bound (inclusive) of the random extra distance per reel
pub const MAX_EXTRA_DISTANCE: u32 = 2;

/// Spin tween duration of reel 0
pub const BASE_SPIN_MS: u32 = 2500;

/// Additional spin duration per reel index
pub const PER_REEL_SPIN_MS: u32 = 600;

/// Additional spin duration per unit of extra distance
pub const EXTRA_SPIN_MS: u32 = 600;

/// Back-out overshoot used when a spin starts
pub const START_OVERSHOOT: f64 = 0.5;

/// Back-out overshoot used for a forced stop
pub const STOP_OVERSHOOT: f64 = 0.3;

/// Forced-stop tween duration of reel 0
pub const STOP_BASE_MS: u32 = 200;

/// Additional forced-stop duration per reel index
pub const STOP_STAGGER_MS: u32 = 50;

/// Minimum slots a reel must travel past its start position on a forced stop
pub const MIN_STOP_DISTANCE: f64 = 1.0;

/// Pause between the last reel stopping and reading the symbols
pub const SETTLE_DELAY_MS: u32 = 100;

/// Win message fade duration (in and out)
pub const WIN_MESSAGE_FADE_MS: u32 = 300;

/// How long a win message stays fully visible
pub const WIN_MESSAGE_HOLD_MS: u32 = 2000;

/// Spin button press animation length
pub const PRESS_REVERT_MS: u32 = 100;

/// Spin button scale while pressed
pub const PRESS_SCALE: f64 = 0.9;

/// Motion blur per slot of movement in one frame
pub const BLUR_FACTOR: f64 = 8.0;


/// The six symbol kinds printed on the reels
///
/// - **Sym1**: Silver Star
/// - **Sym2**: Gold Circle
/// - **Sym3**: Black Triangle
/// - **Sym4**: Blue Square
/// - **Sym5**: Red Diamond
/// - **Sym6**: Yellow Hexagon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum SymbolType {
    #[default]
    Sym1,
    Sym2,
    Sym3,
    Sym4,
    Sym5,
    Sym6,
}

impl SymbolType {
    /// Every symbol kind, in tag order
    pub const ALL: [SymbolType; 6] = [
        SymbolType::Sym1,
        SymbolType::Sym2,
        SymbolType::Sym3,
        SymbolType::Sym4,
        SymbolType::Sym5,
        SymbolType::Sym6,
    ];

    /// Parse symbol tag from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_slots_types::SymbolType;
    ///
    /// assert_eq!(SymbolType::from_str("SYM1"), Some(SymbolType::Sym1));
    /// assert_eq!(SymbolType::from_str("sym6"), Some(SymbolType::Sym6));
    /// assert_eq!(SymbolType::from_str("cherry"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sym1" => Some(SymbolType::Sym1),
            "sym2" => Some(SymbolType::Sym2),
            "sym3" => Some(SymbolType::Sym3),
            "sym4" => Some(SymbolType::Sym4),
            "sym5" => Some(SymbolType::Sym5),
            "sym6" => Some(SymbolType::Sym6),
            _ => None,
        }
    }

    /// Convert to the uppercase tag used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolType::Sym1 => "SYM1",
            SymbolType::Sym2 => "SYM2",
            SymbolType::Sym3 => "SYM3",
            SymbolType::Sym4 => "SYM4",
            SymbolType::Sym5 => "SYM5",
            SymbolType::Sym6 => "SYM6",
        }
    }

    /// Player-facing name used in win messages
    pub fn display_name(&self) -> &'static str {
        match self {
            SymbolType::Sym1 => "Silver Star",
            SymbolType::Sym2 => "Gold Circle",
            SymbolType::Sym3 => "Black Triangle",
            SymbolType::Sym4 => "Blue Square",
            SymbolType::Sym5 => "Red Diamond",
            SymbolType::Sym6 => "Yellow Hexagon",
        }
    }

    /// Stable index into [`SymbolType::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Symbol shown when a reel cannot resolve its centered slot
pub const FALLBACK_SYMBOL: SymbolType = SymbolType::Sym1;

use SymbolType::{Sym1 as S1, Sym2 as S2, Sym3 as S3, Sym4 as S4, Sym5 as S5, Sym6 as S6};

/// Master symbol table every reel draws from (uniformly, by index)
///
/// Symbols appear with different frequencies; a symbol's draw probability is
/// its number of entries divided by the table length.
pub const REEL_SYMBOLS: [SymbolType; 102] = [
    S1, S5, S1, S3, S4,
    S3, S2, S4, S3, S6,
    S3, S1, S6, S1, S2,
    S1, S2, S2, S2, S1,
    S2, S1, S4, S1, S3,
    S6, S1, S3, S2, S5,
    S3, S1, S2, S2, S2,
    S1, S4, S1, S4, S1,
    S3, S2, S4, S4, S5,
    S2, S3, S1, S1, S1,
    S4, S5, S2, S2, S2,
    S1, S5, S6, S1, S3,
    S4, S2, S5, S2, S1,
    S5, S1, S2, S1, S1,
    S1, S4, S4, S3, S3,
    S5, S5, S4, S2, S5,
    S2, S1, S3, S2, S3,
    S1, S4, S3, S4, S2,
    S3, S4, S1, S1, S1,
    S2, S6, S3, S2, S3,
    S1, S5,
];

/// Player requests delivered by the input source
///
/// The machine does not care where a request came from (keyboard, script, test).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinAction {
    /// Start a spin when idle, stop the reels when spinning
    Toggle,
    /// Start a spin (ignored unless idle with enough balance)
    Spin,
    /// Stop the spinning reels early
    Stop,
}

impl SpinAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_slots_types::SpinAction;
    ///
    /// assert_eq!(SpinAction::from_str("spin"), Some(SpinAction::Spin));
    /// assert_eq!(SpinAction::from_str("STOP"), Some(SpinAction::Stop));
    /// assert_eq!(SpinAction::from_str("bet"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "toggle" => Some(SpinAction::Toggle),
            "spin" => Some(SpinAction::Spin),
            "stop" => Some(SpinAction::Stop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpinAction::Toggle => "toggle",
            SpinAction::Spin => "spin",
            SpinAction::Stop => "stop",
        }
    }
}

/// Spin lifecycle phases
///
/// `Idle -> Spinning -> (Stopping) -> Settling -> Evaluating -> Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpinPhase {
    /// Waiting for a spin request
    #[default]
    Idle,
    /// Reels free-running on their spin tweens
    Spinning,
    /// Reels running their short forced-stop tweens
    Stopping,
    /// All reels at rest, waiting out the settle delay
    Settling,
    /// Reading centered symbols and paying out
    Evaluating,
}

impl SpinPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpinPhase::Idle => "idle",
            SpinPhase::Spinning => "spinning",
            SpinPhase::Stopping => "stopping",
            SpinPhase::Settling => "settling",
            SpinPhase::Evaluating => "evaluating",
        }
    }

    /// Whether reels are still moving under a tween
    pub fn reels_moving(&self) -> bool {
        matches!(self, SpinPhase::Spinning | SpinPhase::Stopping)
    }
}

/// Payout tiers
///
/// Only multiset membership matters: reel order and adjacency are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayoutTier {
    /// Three of a kind
    Jackpot,
    /// Exactly two of a kind
    Pair,
}

impl PayoutTier {
    /// Bet multiplier paid for this tier
    pub fn multiplier(&self) -> u32 {
        match self {
            PayoutTier::Jackpot => 3,
            PayoutTier::Pair => 2,
        }
    }

    /// Symbols that must match for this tier
    pub fn match_count(&self) -> u8 {
        match self {
            PayoutTier::Jackpot => 3,
            PayoutTier::Pair => 2,
        }
    }

    /// Headline line of the win message
    pub fn headline(&self) -> &'static str {
        match self {
            PayoutTier::Jackpot => "JACKPOT!",
            PayoutTier::Pair => "Nice Win!",
        }
    }
}
