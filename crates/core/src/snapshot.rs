//! Snapshot module - plain copy of the machine state for the frame host
//!
//! Filled in place once per frame by [`SpinController::snapshot_into`] so the
//! host can decide whether to redraw and whether a key press will be accepted
//! without borrowing the controller.
//!
//! [`SpinController::snapshot_into`]: crate::controller::SpinController::snapshot_into

use crate::types::{SpinAction, SpinPhase, SymbolType, REEL_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReelSnapshot {
    pub position: f64,
    pub blur: f64,
    /// Symbol nearest the center line, `None` if unresolvable.
    pub centered: Option<SymbolType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MachineSnapshot {
    pub phase: SpinPhase,
    pub balance: u32,
    pub bet: u32,
    pub running: bool,
    pub spin_count: u64,
    pub reels: [ReelSnapshot; REEL_COUNT],
}

impl MachineSnapshot {
    /// Whether a spin request would be accepted right now.
    pub fn can_spin(&self) -> bool {
        self.phase == SpinPhase::Idle && !self.running && self.balance >= self.bet
    }

    /// Whether `action` would change anything in this state.
    pub fn accepts(&self, action: SpinAction) -> bool {
        match action {
            SpinAction::Spin => self.can_spin(),
            SpinAction::Stop => self.phase == SpinPhase::Spinning,
            SpinAction::Toggle => self.can_spin() || self.phase == SpinPhase::Spinning,
        }
    }
}
