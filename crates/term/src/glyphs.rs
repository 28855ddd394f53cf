//! Terminal "textures": one colored glyph per symbol.

use crate::core::SymbolTextures;
use crate::fb::Rgb;
use crate::types::SymbolType;

/// Drawable handle for one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Rgb,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: '?',
            fg: Rgb::new(220, 220, 220),
        }
    }
}

/// Glyph set indexed by [`SymbolType::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphTextures {
    glyphs: [Glyph; 6],
}

const SILVER: Rgb = Rgb::new(170, 175, 190);
const GOLD: Rgb = Rgb::new(230, 180, 40);
const BLACK: Rgb = Rgb::new(25, 25, 30);
const BLUE: Rgb = Rgb::new(40, 90, 220);
const RED: Rgb = Rgb::new(210, 40, 50);
const YELLOW: Rgb = Rgb::new(215, 200, 20);

impl GlyphTextures {
    pub fn unicode() -> Self {
        Self {
            glyphs: [
                Glyph { ch: '★', fg: SILVER },
                Glyph { ch: '●', fg: GOLD },
                Glyph { ch: '▲', fg: BLACK },
                Glyph { ch: '■', fg: BLUE },
                Glyph { ch: '◆', fg: RED },
                Glyph { ch: '⎔', fg: YELLOW },
            ],
        }
    }

    /// For terminals without the geometric shapes block.
    pub fn ascii() -> Self {
        Self {
            glyphs: [
                Glyph { ch: '*', fg: SILVER },
                Glyph { ch: 'O', fg: GOLD },
                Glyph { ch: 'A', fg: BLACK },
                Glyph { ch: '#', fg: BLUE },
                Glyph { ch: 'X', fg: RED },
                Glyph { ch: 'H', fg: YELLOW },
            ],
        }
    }

    pub fn glyph(&self, symbol: SymbolType) -> Glyph {
        self.glyphs[symbol.index()]
    }
}

impl Default for GlyphTextures {
    fn default() -> Self {
        Self::unicode()
    }
}

impl SymbolTextures for GlyphTextures {
    type Handle = Glyph;

    fn handle(&self, symbol: SymbolType) -> Glyph {
        self.glyph(symbol)
    }
}
