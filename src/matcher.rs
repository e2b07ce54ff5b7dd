//! Module: matcher
//!
//! Purpose: Compares a finalized candidate against the challenge code.
//! Grading is exact string equality in every level; the per-letter
//! decomposition exists only to tell the player what they actually keyed
//! after a wrong answer.
//!
//! Safety: Safe. No unsafe blocks. Caller-provided scratch buffer, no
//! allocation.

use crate::dictionary::Dictionary;

/// Grading result for one candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchResult {
    Correct,
    Incorrect,
}

/// Grade a candidate against the challenge code.
///
/// Exact match only, for both letter and word levels. Partial word
/// matches are still Incorrect.
#[inline]
pub fn evaluate(candidate: &str, challenge_code: &str) -> MatchResult {
    if candidate == challenge_code {
        MatchResult::Correct
    } else {
        MatchResult::Incorrect
    }
}

/// Decode a candidate into the letters it spells, for feedback only.
///
/// Splits on the space delimiter and resolves each token against the
/// letter dictionary. Resolved labels are concatenated into `out`; if
/// any token is unresolved a single trailing `?` is appended. Returns
/// the decoded string, truncated if `out` runs out of room.
pub fn decode_candidate<'a>(candidate: &str, out: &'a mut [u8]) -> &'a str {
    let mut pos = 0;
    let mut unresolved = false;

    for token in candidate.split(' ').filter(|t| !t.is_empty()) {
        match Dictionary::Letters.find_by_code(token) {
            Some(label) => {
                let bytes = label.as_bytes();
                let n = bytes.len().min(out.len() - pos);
                out[pos..pos + n].copy_from_slice(&bytes[..n]);
                pos += n;
            }
            None => unresolved = true,
        }
    }

    if unresolved && pos < out.len() {
        out[pos] = b'?';
        pos += 1;
    }

    core::str::from_utf8(&out[..pos]).unwrap_or("")
}
