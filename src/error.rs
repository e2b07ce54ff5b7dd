//! Game error types
//!
//! All in-core errors recover locally with a player-visible message;
//! none abort the process. The only terminal conditions are the quit
//! code and the external watchdog.

/// Recoverable game error with code and message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// E01: Unrecognized code at level select or result menu
    InvalidSelection,
    /// E02: Candidate matches no dictionary entry
    UnknownCode,
    /// E03: Candidate exceeded the input buffer capacity
    BufferOverflow,
}

impl GameError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidSelection => "E01",
            Self::UnknownCode => "E02",
            Self::BufferOverflow => "E03",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidSelection => "invalid selection",
            Self::UnknownCode => "unknown code",
            Self::BufferOverflow => "input too long",
        }
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let rendered = format!("{}", GameError::InvalidSelection);
        assert_eq!(rendered, "E01: invalid selection");
    }
}
