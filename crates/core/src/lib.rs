//! Core slot machine logic - pure, deterministic, and testable
//!
//! This crate contains the spin animation and outcome evaluation engine.
//! It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: the same seed and the same frame times produce the same spins
//! - **Testable**: headless controller, recording UI sink, no real clock
//! - **Portable**: any frame host can drive it (terminal, tests, benchmarks)
//! - **Allocation-free while spinning**: per-frame ticks reuse preallocated buffers
//!
//! # Module Structure
//!
//! - [`tween`]: generic per-frame interpolation with back-out easing
//! - [`timers`]: deferred tasks guarded by a generation token
//! - [`reel`]: five recyclable slots per reel and the centered-symbol query
//! - [`outcome`]: payout evaluation of the three displayed symbols
//! - [`controller`]: the spin lifecycle state machine and the balance
//! - [`config`]: runtime configuration and animation timing
//! - [`ports`]: texture provider and UI sink traits
//! - [`rng`]: deterministic LCG for symbol draws
//!
//! # Example
//!
//! ```
//! use tui_slots_core::{NoTextures, SlotConfig, SpinController};
//! use tui_slots_types::{SpinAction, SpinPhase, TICK_MS};
//!
//! let mut machine = SpinController::new(SlotConfig::with_seed(7), NoTextures).unwrap();
//! let mut ui = ();
//!
//! assert!(machine.handle_action(SpinAction::Toggle, 0, &mut ui));
//! assert_eq!(machine.balance(), 99);
//!
//! // Drive frames until the spin has been paid out.
//! let mut now = 0;
//! while machine.phase() != SpinPhase::Idle {
//!     now += TICK_MS as u64;
//!     machine.tick(now, &mut ui);
//! }
//! let payout = machine.last_outcome().unwrap().payout;
//! assert_eq!(machine.balance(), 99 + payout);
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod outcome;
pub mod ports;
pub mod reel;
pub mod rng;
pub mod snapshot;
pub mod timers;
pub mod tween;

pub use tui_slots_types as types;

pub use config::{SlotConfig, SpinTiming};
pub use controller::{SpinController, SpinEvent, SpinTask};
pub use error::SlotError;
pub use outcome::{evaluate, Outcome};
pub use ports::{NoTextures, SymbolTextures, UiEvent, UiSink};
pub use reel::{Reel, ReelProperty, SlotView};
pub use rng::SimpleRng;
pub use snapshot::{MachineSnapshot, ReelSnapshot};
pub use timers::TimerQueue;
pub use tween::{Easing, Tween, TweenHandle, TweenScheduler, TweenSpec, Tweenable};
