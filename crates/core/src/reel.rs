//! Reel module - one vertical column of recyclable symbol slots
//!
//! A reel has a continuous, unwrapped scroll `position` measured in slots. Its
//! five slots are laid out from that position alone:
//!
//! ```text
//! offset(slot) = (position + slot) mod 5 - 1      in [-1, 4)
//! ```
//!
//! Offset 0 is the center line (the one visible row); negative offsets are
//! above it. As the position grows, every slot moves down; when a slot runs off
//! the bottom of the window it wraps a full buffer cycle back to the top (just
//! above the visible row) and receives a freshly drawn symbol. The wrap count of
//! each slot is tracked, so the layout stays a pure function of the position and
//! recycling happens exactly when a slot crosses a cycle boundary.
//!
//! Symbol identity lives in the reel's own slot array; render handles sit in a
//! parallel array looked up by slot index.

use arrayvec::ArrayVec;

use crate::error::SlotError;
use crate::ports::SymbolTextures;
use crate::rng::SimpleRng;
use crate::tween::Tweenable;
use crate::types::{SymbolType, BLUR_FACTOR, FALLBACK_SYMBOL, SLOTS_PER_REEL};

/// Lowest slot offset a laid-out slot can have (one row above center).
pub const OFFSET_MIN: f64 = -1.0;

/// Offsets stay strictly below this bound.
pub const OFFSET_MAX: f64 = (SLOTS_PER_REEL - 1) as f64;

/// Tweenable reel properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReelProperty {
    /// Scroll position of the reel at this index
    Position(usize),
}

/// Read-only view of one slot, for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotView<'a, H> {
    pub slot: usize,
    pub offset: f64,
    pub symbol: SymbolType,
    pub handle: &'a H,
}

/// One reel
#[derive(Debug, Clone)]
pub struct Reel<H> {
    index: usize,
    position: f64,
    previous_position: f64,
    blur: f64,
    symbols: [SymbolType; SLOTS_PER_REEL],
    handles: ArrayVec<H, SLOTS_PER_REEL>,
    /// Wrap count of each slot at the last layout.
    cycles: [i64; SLOTS_PER_REEL],
    offsets: [f64; SLOTS_PER_REEL],
}

#[inline]
fn slot_cycle(position: f64, slot: usize) -> i64 {
    ((position + slot as f64) / SLOTS_PER_REEL as f64).floor() as i64
}

#[inline]
fn slot_offset(position: f64, slot: usize, cycle: i64) -> f64 {
    position + slot as f64 - (cycle * SLOTS_PER_REEL as i64) as f64 - 1.0
}

impl<H: Clone> Reel<H> {
    /// Create a reel at position 0 with every slot drawn from `table`.
    pub fn new<X>(
        index: usize,
        table: &[SymbolType],
        rng: &mut SimpleRng,
        textures: &X,
    ) -> Result<Self, SlotError>
    where
        X: SymbolTextures<Handle = H>,
    {
        let mut symbols = [FALLBACK_SYMBOL; SLOTS_PER_REEL];
        let mut handles = ArrayVec::new();
        for symbol in symbols.iter_mut() {
            *symbol = rng
                .draw_symbol(table)
                .ok_or(SlotError::EmptySymbolTable)?;
            handles.push(textures.handle(*symbol));
        }

        let mut cycles = [0i64; SLOTS_PER_REEL];
        let mut offsets = [0.0; SLOTS_PER_REEL];
        for slot in 0..SLOTS_PER_REEL {
            cycles[slot] = slot_cycle(0.0, slot);
            offsets[slot] = slot_offset(0.0, slot, cycles[slot]);
        }

        Ok(Self {
            index,
            position: 0.0,
            previous_position: 0.0,
            blur: 0.0,
            symbols,
            handles,
            cycles,
            offsets,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Set the scroll position. Slots are laid out on the next
    /// [`Reel::tick_recycle`].
    pub fn advance_position(&mut self, position: f64) {
        self.position = position;
    }

    /// Blur amount from the last frame's movement.
    pub fn blur(&self) -> f64 {
        self.blur
    }

    pub fn symbols(&self) -> &[SymbolType; SLOTS_PER_REEL] {
        &self.symbols
    }

    pub fn offsets(&self) -> &[f64; SLOTS_PER_REEL] {
        &self.offsets
    }

    pub fn handle(&self, slot: usize) -> Option<&H> {
        self.handles.get(slot)
    }

    pub fn slots(&self) -> impl Iterator<Item = SlotView<'_, H>> + '_ {
        self.handles
            .iter()
            .enumerate()
            .map(move |(slot, handle)| SlotView {
                slot,
                offset: self.offsets[slot],
                symbol: self.symbols[slot],
                handle,
            })
    }

    /// Per-frame layout pass. Runs whether or not a tween moved the reel.
    ///
    /// Updates the blur from the movement since the previous frame, lays out
    /// every slot and gives each slot that wrapped a new symbol from `table`.
    /// Returns the number of recycled slots.
    pub fn tick_recycle<X>(
        &mut self,
        table: &[SymbolType],
        rng: &mut SimpleRng,
        textures: &X,
    ) -> usize
    where
        X: SymbolTextures<Handle = H>,
    {
        self.blur = (self.position - self.previous_position) * BLUR_FACTOR;
        self.previous_position = self.position;

        let mut recycled = 0;
        for slot in 0..SLOTS_PER_REEL {
            let cycle = slot_cycle(self.position, slot);
            if cycle != self.cycles[slot] {
                self.cycles[slot] = cycle;
                if let Some(symbol) = rng.draw_symbol(table) {
                    self.symbols[slot] = symbol;
                    self.handles[slot] = textures.handle(symbol);
                    recycled += 1;
                }
            }
            self.offsets[slot] = slot_offset(self.position, slot, cycle);
        }
        recycled
    }

    /// Slot nearest to the center line, if any offset is comparable.
    pub fn centered_slot(&self) -> Option<usize> {
        let mut best = None;
        let mut best_distance = f64::INFINITY;
        for (slot, offset) in self.offsets.iter().enumerate() {
            let distance = offset.abs();
            if distance < best_distance {
                best_distance = distance;
                best = Some(slot);
            }
        }
        best
    }

    /// The symbol this reel currently displays.
    pub fn centered_symbol(&self) -> Result<SymbolType, SlotError> {
        let slot = self
            .centered_slot()
            .ok_or(SlotError::UnresolvedSymbol { reel: self.index })?;
        let symbol = self.symbols[slot];
        log::debug!(
            "reel {}: position={:.2} slot={} offset={:.3} symbol={}",
            self.index,
            self.position,
            slot,
            self.offsets[slot],
            symbol.as_str()
        );
        Ok(symbol)
    }

    /// Like [`Reel::centered_symbol`], but logs the defect and yields
    /// [`FALLBACK_SYMBOL`] instead of failing.
    pub fn centered_symbol_or_fallback(&self) -> SymbolType {
        match self.centered_symbol() {
            Ok(symbol) => symbol,
            Err(err) => {
                log::error!("{err}; falling back to {}", FALLBACK_SYMBOL.as_str());
                FALLBACK_SYMBOL
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn set_symbol<X>(&mut self, slot: usize, symbol: SymbolType, textures: &X)
    where
        X: SymbolTextures<Handle = H>,
    {
        self.symbols[slot] = symbol;
        self.handles[slot] = textures.handle(symbol);
    }
}

impl<H> Tweenable<ReelProperty> for [Reel<H>] {
    fn value(&self, property: ReelProperty) -> f64 {
        match property {
            ReelProperty::Position(i) => self.get(i).map(|r| r.position).unwrap_or(0.0),
        }
    }

    fn set_value(&mut self, property: ReelProperty, value: f64) {
        match property {
            ReelProperty::Position(i) => {
                if let Some(reel) = self.get_mut(i) {
                    reel.position = value;
                }
            }
        }
    }
}
