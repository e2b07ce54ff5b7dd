//! Module: symbol
//!
//! Purpose: MorseSymbol, the classified output of one button timing
//! measurement. Produced by the edge timer, consumed by the input
//! assembler. Immutable once produced.
//!
//! Safety: Safe. No unsafe blocks. Copy types only.

/// A single classified Morse input event.
///
/// `Dot`, `Dash` and `Space` carry a printable token that is appended to
/// the input buffer and echoed back to the player. `Submit` carries no
/// token: it finalizes the buffer into a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MorseSymbol {
    /// Short press (held below the dot threshold).
    Dot,
    /// Long press (held at or above the dot threshold).
    Dash,
    /// Letter gap within a word (button released past the space threshold).
    Space,
    /// Candidate terminator (button released past the submit threshold).
    Submit,
}

impl MorseSymbol {
    /// Rendered token for this symbol, or `None` for `Submit`.
    #[inline]
    pub const fn token(self) -> Option<char> {
        match self {
            MorseSymbol::Dot => Some('.'),
            MorseSymbol::Dash => Some('-'),
            MorseSymbol::Space => Some(' '),
            MorseSymbol::Submit => None,
        }
    }

    /// Check if this symbol terminates a candidate.
    #[inline]
    pub const fn is_submit(self) -> bool {
        matches!(self, MorseSymbol::Submit)
    }
}
