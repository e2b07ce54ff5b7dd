//! Module: assembler
//!
//! Purpose: Accumulates classified Morse symbols into a bounded candidate
//! buffer. Enforces the capacity limit (overflow drops symbols, never
//! fatal) and the level rule that spaces only count in word levels.
//! Submit finalizes the buffer into a candidate string and clears it.
//!
//! Safety: Safe. No unsafe blocks. Fixed buffers, no allocation.

use crate::symbol::MorseSymbol;

/// Maximum number of tokens in one candidate.
pub const INPUT_CAPACITY: usize = 100;

/// Result of feeding one symbol to the assembler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Token appended; echo this character to the player.
    Echo(char),
    /// Symbol dropped (space outside a word level, or buffer full).
    Ignored,
    /// Submit received: `candidate()` now holds the finalized string.
    Ready,
}

/// Bounded input buffer with append-only semantics.
///
/// Tokens are only appended until a Submit finalizes the buffer; the
/// working buffer then resets to empty while the candidate remains
/// readable until `clear()`.
pub struct InputAssembler {
    buf: [u8; INPUT_CAPACITY],
    len: usize,
    candidate: [u8; INPUT_CAPACITY],
    candidate_len: usize,
}

impl InputAssembler {
    /// Create an empty assembler.
    pub const fn new() -> Self {
        Self {
            buf: [0u8; INPUT_CAPACITY],
            len: 0,
            candidate: [0u8; INPUT_CAPACITY],
            candidate_len: 0,
        }
    }

    /// Feed one classified symbol.
    ///
    /// `allow_spaces` is true only in word levels; elsewhere a Space is
    /// ignored. Appends beyond capacity are silently dropped, and a
    /// Submit at full capacity still finalizes.
    pub fn accept(&mut self, symbol: MorseSymbol, allow_spaces: bool) -> Outcome {
        if symbol.is_submit() {
            self.finalize();
            return Outcome::Ready;
        }

        if symbol == MorseSymbol::Space && !allow_spaces {
            return Outcome::Ignored;
        }

        let Some(token) = symbol.token() else {
            return Outcome::Ignored;
        };

        if self.len >= INPUT_CAPACITY {
            return Outcome::Ignored;
        }

        self.buf[self.len] = token as u8;
        self.len += 1;
        Outcome::Echo(token)
    }

    /// The finalized candidate string. Empty until the first Submit.
    pub fn candidate(&self) -> &str {
        // Buffer only ever holds '.', '-' and ' ', always valid UTF-8.
        core::str::from_utf8(&self.candidate[..self.candidate_len]).unwrap_or("")
    }

    /// Tokens currently in the working buffer.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the working buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if further appends would be dropped.
    pub fn at_capacity(&self) -> bool {
        self.len >= INPUT_CAPACITY
    }

    /// Drop the finalized candidate after evaluation.
    pub fn clear(&mut self) {
        self.candidate_len = 0;
    }

    /// Move the working buffer into candidate storage.
    ///
    /// Word-level input always ends with the letter-gap artifact that
    /// precedes the submit timeout, so one trailing space is stripped.
    fn finalize(&mut self) {
        let mut end = self.len;
        if end > 0 && self.buf[end - 1] == b' ' {
            end -= 1;
        }

        self.candidate[..end].copy_from_slice(&self.buf[..end]);
        self.candidate_len = end;
        self.len = 0;
    }
}

impl Default for InputAssembler {
    fn default() -> Self {
        Self::new()
    }
}
