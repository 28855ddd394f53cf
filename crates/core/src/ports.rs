//! Narrow interfaces to the collaborators around the core.
//!
//! The core never inspects what a texture handle is, and never waits on the UI:
//! every [`UiSink`] call is a fire-and-forget notification.

use crate::types::SymbolType;

/// Maps a symbol tag to an opaque drawable handle.
pub trait SymbolTextures {
    type Handle: Clone;

    fn handle(&self, symbol: SymbolType) -> Self::Handle;
}

/// Texture provider for headless use (tests, simulations).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoTextures;

impl SymbolTextures for NoTextures {
    type Handle = ();

    fn handle(&self, _symbol: SymbolType) {}
}

/// Receives presentation updates from the spin controller.
pub trait UiSink {
    fn update_balance(&mut self, balance: u32);
    fn update_win_display(&mut self, amount: u32);
    fn show_win_message(&mut self, text: &str);
    fn set_spin_affordance_enabled(&mut self, enabled: bool);
    fn set_spin_affordance_busy(&mut self, busy: bool);
}

/// A recorded [`UiSink`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Balance(u32),
    WinDisplay(u32),
    WinMessage(String),
    AffordanceEnabled(bool),
    AffordanceBusy(bool),
}

/// Records every call, in order.
impl UiSink for Vec<UiEvent> {
    fn update_balance(&mut self, balance: u32) {
        self.push(UiEvent::Balance(balance));
    }

    fn update_win_display(&mut self, amount: u32) {
        self.push(UiEvent::WinDisplay(amount));
    }

    fn show_win_message(&mut self, text: &str) {
        self.push(UiEvent::WinMessage(text.to_string()));
    }

    fn set_spin_affordance_enabled(&mut self, enabled: bool) {
        self.push(UiEvent::AffordanceEnabled(enabled));
    }

    fn set_spin_affordance_busy(&mut self, busy: bool) {
        self.push(UiEvent::AffordanceBusy(busy));
    }
}

/// Discards every call.
impl UiSink for () {
    fn update_balance(&mut self, _balance: u32) {}
    fn update_win_display(&mut self, _amount: u32) {}
    fn show_win_message(&mut self, _text: &str) {}
    fn set_spin_affordance_enabled(&mut self, _enabled: bool) {}
    fn set_spin_affordance_busy(&mut self, _busy: bool) {}
}
