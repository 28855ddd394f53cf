//! Terminal rendering for the slot machine.
//!
//! A small, game-oriented rendering layer: views draw into a plain
//! framebuffer, and the renderer flushes only the cells that changed.
//!
//! - [`fb`]: framebuffer and styles
//! - [`glyphs`]: symbol glyphs, the terminal's texture provider
//! - [`hud`]: the UI sink, with win message and button animations
//! - [`machine_view`]: cabinet, reels, HUD and button layout
//! - [`renderer`]: diffing terminal backend
//! - [`throttle`]: skip redraws of an unchanged idle screen

pub mod fb;
pub mod glyphs;
pub mod hud;
pub mod machine_view;
pub mod renderer;
pub mod throttle;

pub use tui_slots_core as core;
pub use tui_slots_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use glyphs::{Glyph, GlyphTextures};
pub use hud::{Hud, HudProperty};
pub use machine_view::{MachineView, Viewport, CABINET_H, CABINET_W};
pub use renderer::{encode_diff_into, encode_full_into, ChangedRuns, Run, TerminalRenderer};
pub use throttle::{Fingerprint, RenderThrottle};
