//! TUI Slots (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_slots::{core, input, term, types}`;
//! the implementation lives under `crates/`.

pub use tui_slots_core as core;
pub use tui_slots_input as input;
pub use tui_slots_term as term;
pub use tui_slots_types as types;
