//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::SpinAction`]. The machine
//! only understands a spin/stop toggle plus explicit spin and stop requests, so
//! there is no repeat handling here: the frame host drops auto-repeat events.

pub mod map;

pub use tui_slots_types as types;

pub use map::{action_for_key, should_quit};
