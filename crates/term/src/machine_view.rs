//! MachineView: maps the spin controller and the HUD into a framebuffer.
//!
//! This module is pure (no I/O) and allocation-free once the framebuffer has
//! its size. Layout, relative to the cabinet's top-left corner:
//!
//! ```text
//! ┌───────────────────────────────┐   0
//! │           TUI SLOTS           │   1
//! │   ┌───────┬───────┬───────┐   │   2
//! │   │       │       │       │   │   3   reel window: 5 lines,
//! │   │   ▲   │   ●   │   ■   │   │   4   2 lines per slot
//! │  ▶│   ★   │   ★   │   ◆   │◀  │   5   payline
//! │   │   ■   │   ▲   │   ●   │   │   6
//! │   │       │       │       │   │   7
//! │   └───────┴───────┴───────┘   │   8
//! │           Nice Win!           │   9   win message
//! │        2 Silver Star!         │  10
//! │ Balance: $101        Wins: 1  │  11
//! │ Last win: $2                  │  12
//! │                               │  13
//! │           [  SPIN  ]          │  14
//! │      space spin/stop  q quit  │  15
//! └───────────────────────────────┘  16
//! ```

use crate::core::{Reel, SpinController, SymbolTextures};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::glyphs::Glyph;
use crate::hud::Hud;
use crate::types::REEL_COUNT;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

pub const CABINET_W: u16 = 33;
pub const CABINET_H: u16 = 17;

/// Columns per reel.
const REEL_W: u16 = 7;
/// Terminal lines per slot.
const ROW_H: f64 = 2.0;
const WINDOW_H: u16 = 5;
const CENTER_LINE: u16 = WINDOW_H / 2;
const REELS_W: u16 = REEL_W * REEL_COUNT as u16 + REEL_COUNT as u16 + 1;
const REELS_X: u16 = (CABINET_W - REELS_W) / 2;
const REELS_Y: u16 = 2;
const MESSAGE_Y: u16 = 9;
const BALANCE_Y: u16 = 11;
const BUTTON_Y: u16 = 14;
const HINT_Y: u16 = 15;

/// Blur above which glyphs are drawn dim.
const BLUR_DIM: f64 = 2.0;
/// Blur above which a glyph leaves a trail on the line above.
const BLUR_TRAIL: f64 = 4.0;
/// Scale below which only the headline of a win message fits.
const MESSAGE_FULL_SCALE: f64 = 0.75;

const CABINET_BG: Rgb = Rgb::new(35, 20, 30);
const PAPER: Rgb = Rgb::new(235, 232, 220);
const GOLD: Rgb = Rgb::new(245, 200, 60);

pub struct MachineView {
    title: &'static str,
    hints: bool,
}

impl Default for MachineView {
    fn default() -> Self {
        Self {
            title: "TUI SLOTS",
            hints: true,
        }
    }
}

impl MachineView {
    pub fn with_hints(mut self, hints: bool) -> Self {
        self.hints = hints;
        self
    }

    /// Top-left corner of the cabinet, centered in `viewport`.
    pub fn origin(viewport: Viewport) -> (u16, u16) {
        (
            viewport.width.saturating_sub(CABINET_W) / 2,
            viewport.height.saturating_sub(CABINET_H) / 2,
        )
    }

    /// Row of the payline.
    pub fn payline_row(viewport: Viewport) -> u16 {
        Self::origin(viewport).1 + REELS_Y + 1 + CENTER_LINE
    }

    /// Column holding the glyphs of reel `reel`.
    pub fn reel_column(viewport: Viewport, reel: usize) -> u16 {
        Self::origin(viewport).0 + REELS_X + 1 + reel as u16 * (REEL_W + 1) + REEL_W / 2
    }

    /// Row of the spin/stop button.
    pub fn button_row(viewport: Viewport) -> u16 {
        Self::origin(viewport).1 + BUTTON_Y
    }

    /// Render into an existing framebuffer (the per-frame path).
    pub fn render_into<X>(
        &self,
        machine: &SpinController<X>,
        hud: &Hud,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) where
        X: SymbolTextures<Handle = Glyph>,
    {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (x0, y0) = Self::origin(viewport);
        let cabinet = CellStyle::new(Rgb::new(200, 170, 90), CABINET_BG);
        fb.fill_rect(x0, y0, CABINET_W, CABINET_H, ' ', cabinet);
        fb.draw_box(x0, y0, CABINET_W, CABINET_H, cabinet);
        fb.put_str_centered(x0, y0 + 1, CABINET_W, self.title, cabinet.bold());

        self.draw_reels(fb, machine, x0 + REELS_X, y0 + REELS_Y);
        self.draw_message(fb, hud, x0, y0 + MESSAGE_Y);
        self.draw_balance(fb, hud, x0, y0 + BALANCE_Y);
        self.draw_button(fb, hud, x0, y0 + BUTTON_Y);

        if self.hints {
            let hint = CellStyle::new(Rgb::new(150, 130, 130), CABINET_BG).dim();
            fb.put_str_centered(x0, y0 + HINT_Y, CABINET_W, "space spin/stop  q quit", hint);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<X>(
        &self,
        machine: &SpinController<X>,
        hud: &Hud,
        viewport: Viewport,
    ) -> FrameBuffer
    where
        X: SymbolTextures<Handle = Glyph>,
    {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(machine, hud, viewport, &mut fb);
        fb
    }

    fn draw_reels<X>(&self, fb: &mut FrameBuffer, machine: &SpinController<X>, x: u16, y: u16)
    where
        X: SymbolTextures<Handle = Glyph>,
    {
        let frame = CellStyle::new(Rgb::new(200, 200, 200), CABINET_BG);

        fb.draw_box(x, y, REELS_W, WINDOW_H + 2, frame);
        for r in 1..REEL_COUNT as u16 {
            let sx = x + r * (REEL_W + 1);
            fb.put_char(sx, y, '┬', frame);
            fb.put_char(sx, y + WINDOW_H + 1, '┴', frame);
            for dy in 1..=WINDOW_H {
                fb.put_char(sx, y + dy, '│', frame);
            }
        }

        let payline = y + 1 + CENTER_LINE;
        let marker = CellStyle::new(GOLD, CABINET_BG).bold();
        fb.put_char(x.saturating_sub(1), payline, '▶', marker);
        fb.put_char(x + REELS_W, payline, '◀', marker);

        for (r, reel) in machine.reels().iter().enumerate() {
            let rx = x + 1 + r as u16 * (REEL_W + 1);
            self.draw_reel(fb, reel, machine.textures(), rx, y + 1);
        }
    }

    /// One reel window with its top-left corner at `(x, y)`.
    ///
    /// A reel whose centered slot cannot be resolved shows the fallback
    /// symbol on the payline.
    fn draw_reel<X>(&self, fb: &mut FrameBuffer, reel: &Reel<Glyph>, textures: &X, x: u16, y: u16)
    where
        X: SymbolTextures<Handle = Glyph>,
    {
        let paper = CellStyle::new(Rgb::new(0, 0, 0), PAPER);
        fb.fill_rect(x, y, REEL_W, WINDOW_H, ' ', paper);

        let blur = reel.blur().abs();
        let gx = x + REEL_W / 2;

        // Trails first so glyphs win where they overlap.
        if blur > BLUR_TRAIL {
            for slot in reel.slots() {
                if let Some(line) = window_line(slot.offset) {
                    if line > 0 {
                        let style = CellStyle::new(slot.handle.fg, PAPER).dim();
                        fb.put_char(gx, y + line - 1, '┊', style);
                    }
                }
            }
        }

        for slot in reel.slots() {
            if let Some(line) = window_line(slot.offset) {
                let base = CellStyle::new(slot.handle.fg, PAPER);
                let style = if blur > BLUR_DIM { base.dim() } else { base.bold() };
                fb.put_char(gx, y + line, slot.handle.ch, style);
            }
        }

        if reel.centered_slot().is_none() {
            let glyph = textures.handle(reel.centered_symbol_or_fallback());
            fb.put_char(gx, y + CENTER_LINE, glyph.ch, CellStyle::new(glyph.fg, PAPER).dim());
        }
    }

    fn draw_message(&self, fb: &mut FrameBuffer, hud: &Hud, x: u16, y: u16) {
        let Some(text) = hud.message() else {
            return;
        };
        let opacity = hud.message_opacity();
        if opacity <= 0.0 {
            return;
        }
        let style = CellStyle::new(CABINET_BG.blend(GOLD, opacity), CABINET_BG).bold();
        let lines = if hud.message_scale() < MESSAGE_FULL_SCALE { 1 } else { 2 };
        for (i, line) in text.split('\n').take(lines).enumerate() {
            fb.put_str_centered(x, y + i as u16, CABINET_W, line, style);
        }
    }

    fn draw_balance(&self, fb: &mut FrameBuffer, hud: &Hud, x: u16, y: u16) {
        let label = CellStyle::new(Rgb::new(220, 220, 220), CABINET_BG);
        let value = CellStyle::new(GOLD, CABINET_BG).bold();

        let cx = fb.put_str(x + 2, y, "Balance: $", label);
        fb.put_u32(cx, y, hud.balance(), value);

        let wins_x = x + CABINET_W - 12;
        let cx = fb.put_str(wins_x, y, "Wins: ", label);
        fb.put_u32(cx, y, hud.win_count(), value);

        if hud.last_win() > 0 {
            let cx = fb.put_str(x + 2, y + 1, "Last win: $", label);
            fb.put_u32(cx, y + 1, hud.last_win(), value);
        }
    }

    fn draw_button(&self, fb: &mut FrameBuffer, hud: &Hud, x: u16, y: u16) {
        let style = if hud.enabled() {
            CellStyle::new(GOLD, Rgb::new(140, 20, 30)).bold()
        } else {
            CellStyle::new(Rgb::new(120, 110, 110), Rgb::new(60, 45, 50)).dim()
        };
        let (open, close) = if hud.is_pressed() { ("[", "]") } else { ("[  ", "  ]") };

        let w = (open.len() + 4 + close.len()) as u16;
        let mut cx = x + (CABINET_W - w) / 2;
        cx = fb.put_str(cx, y, open, style);
        cx = fb.put_str(cx, y, hud.button_label(), style);
        fb.put_str(cx, y, close, style);
    }
}

/// Window line of a slot offset, if the slot is in view.
fn window_line(offset: f64) -> Option<u16> {
    let line = (offset * ROW_H).round() + CENTER_LINE as f64;
    if line >= 0.0 && line < WINDOW_H as f64 {
        Some(line as u16)
    } else {
        None
    }
}
