//! Game state machine.
//!
//! Pure logic, no hardware dependencies. Owns the session record and
//! drives level selection, rounds, scoring and the failure/retry flow.
//! Hardware reaches it only through the [`Board`] collaborator trait,
//! so the whole machine runs on host in tests.
//!
//! # Phases
//!
//! ```text
//! LevelSelect ──level code──▶ Playing ──lives 0 / remaining 0──▶ LevelResult
//!      ▲                                                            │
//!      └───────────────────────.---- (play again)───────────────────┘
//!
//! ..... at LevelSelect / ..--- at LevelResult ──▶ SessionEnd
//! ```

use core::fmt::Write;

use crate::console;
use crate::dictionary::Dictionary;
use crate::error::GameError;
use crate::led::Rgb;
use crate::matcher::{self, MatchResult};

/// Level select code for quitting the session.
pub const QUIT_CODE: &str = ".....";

/// Result menu code for returning to level select.
pub const PLAY_AGAIN_CODE: &str = ".----";

/// Result menu code for ending the session.
pub const EXIT_CODE: &str = "..---";

/// Correct answers needed to win a level.
pub const ROUNDS_TO_WIN: u8 = 5;

/// Lives granted on level entry.
pub const STARTING_LIVES: u8 = 3;

/// Difficulty level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    One,
    Two,
    Three,
    Four,
}

/// Per-level rules: which dictionary, whether the answer code is shown
/// with the prompt, and whether spaces count as input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelConfig {
    pub uses_words: bool,
    pub show_answer: bool,
    pub allow_spaces: bool,
}

impl Level {
    /// Parse a level select candidate (`.----` through `....-`).
    pub fn from_code(code: &str) -> Option<Level> {
        match code {
            ".----" => Some(Level::One),
            "..---" => Some(Level::Two),
            "...--" => Some(Level::Three),
            "....-" => Some(Level::Four),
            _ => None,
        }
    }

    /// Level number for display.
    pub fn number(self) -> u8 {
        match self {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
            Level::Four => 4,
        }
    }

    /// Rules for this level. Levels 1-2 drill letters, 3-4 words;
    /// odd levels show the answer code with the prompt.
    pub fn config(self) -> LevelConfig {
        match self {
            Level::One => LevelConfig {
                uses_words: false,
                show_answer: true,
                allow_spaces: false,
            },
            Level::Two => LevelConfig {
                uses_words: false,
                show_answer: false,
                allow_spaces: false,
            },
            Level::Three => LevelConfig {
                uses_words: true,
                show_answer: true,
                allow_spaces: true,
            },
            Level::Four => LevelConfig {
                uses_words: true,
                show_answer: false,
                allow_spaces: true,
            },
        }
    }

    /// Dictionary this level draws challenges from.
    pub fn dictionary(self) -> Dictionary {
        if self.config().uses_words {
            Dictionary::Words
        } else {
            Dictionary::Letters
        }
    }
}

/// The single mutable session record.
///
/// Owned by [`Game`]; components receive references, never copies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Lives remaining in the current level. 0 is a loss.
    pub lives: u8,
    /// Correct answers still needed to win the level. 0 is a win.
    pub remaining: u8,
    /// Correct answers in the current level.
    pub right: u32,
    /// Wrong answers in the current level.
    pub wrong: u32,
    /// Levels won this session. Never reset, not even on a loss.
    pub streak: u32,
    /// Index of the current challenge in the active dictionary.
    pub challenge: usize,
}

impl GameState {
    pub const fn new() -> Self {
        Self {
            lives: STARTING_LIVES,
            remaining: ROUNDS_TO_WIN,
            right: 0,
            wrong: 0,
            streak: 0,
            challenge: 0,
        }
    }

    /// Accuracy percentage, or `None` before the first attempt.
    pub fn accuracy(&self) -> Option<f32> {
        let attempts = self.right + self.wrong;
        if attempts == 0 {
            return None;
        }
        Some(self.right as f32 / attempts as f32 * 100.0)
    }

    /// Re-arm the per-level counters on level entry.
    fn start_level(&mut self) {
        self.lives = STARTING_LIVES;
        self.remaining = ROUNDS_TO_WIN;
        self.right = 0;
        self.wrong = 0;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Session phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    LevelSelect,
    Playing(Level),
    LevelResult,
    SessionEnd,
}

/// What the driver loop should do after a candidate was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Wait for the next finalized candidate.
    AwaitInput,
    /// Session is over; leave the loop.
    SessionOver,
}

/// External collaborators, bundled.
///
/// The core never touches hardware: LED color, random draws and console
/// output all go through this trait. Firmware implements it over
/// ESP-IDF; tests implement it over plain buffers.
pub trait Board {
    /// Display sink: set the status LED color.
    fn set_led(&mut self, color: Rgb);

    /// Random source: uniform draw in `[0, bound)`.
    fn random(&mut self, bound: u32) -> u32;

    /// Console sink for all player-facing text.
    fn console(&mut self) -> &mut dyn Write;
}

/// Top-level game controller.
pub struct Game {
    phase: Phase,
    state: GameState,
}

impl Game {
    /// Create a fresh session at level select.
    pub const fn new() -> Self {
        Self {
            phase: Phase::LevelSelect,
            state: GameState::new(),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current session record.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Check if space symbols currently count as input.
    ///
    /// Drives the assembler rule: spaces only exist in word levels.
    pub fn allows_spaces(&self) -> bool {
        match self.phase {
            Phase::Playing(level) => level.config().allow_spaces,
            _ => false,
        }
    }

    /// Print the opening screens and enter level select.
    pub fn begin(&mut self, board: &mut dyn Board) {
        let out = board.console();
        console::welcome(out);
        console::instructions(out);
        console::level_menu(out);
        board.set_led(Rgb::BLUE);
        self.phase = Phase::LevelSelect;
    }

    /// Advance the machine with one finalized candidate.
    pub fn on_candidate(&mut self, candidate: &str, board: &mut dyn Board) -> Step {
        match self.phase {
            Phase::LevelSelect => self.select_level(candidate, board),
            Phase::Playing(level) => self.play_round(candidate, level, board),
            Phase::LevelResult => self.select_result(candidate, board),
            Phase::SessionEnd => Step::SessionOver,
        }
    }

    // --- Phase handlers ---

    fn select_level(&mut self, candidate: &str, board: &mut dyn Board) -> Step {
        if candidate == QUIT_CODE {
            console::goodbye(board.console());
            self.phase = Phase::SessionEnd;
            return Step::SessionOver;
        }

        match Level::from_code(candidate) {
            Some(level) => {
                self.enter_level(level, board);
                Step::AwaitInput
            }
            None => {
                let out = board.console();
                console::report_error(out, GameError::InvalidSelection);
                console::level_menu(out);
                Step::AwaitInput
            }
        }
    }

    fn play_round(&mut self, candidate: &str, level: Level, board: &mut dyn Board) -> Step {
        let challenge = level.dictionary().entry(self.state.challenge);

        match matcher::evaluate(candidate, challenge.code) {
            MatchResult::Correct => {
                self.state.right += 1;
                self.state.remaining -= 1;
                console::report_correct(board.console(), self.state.remaining);
            }
            MatchResult::Incorrect => {
                self.state.wrong += 1;
                self.state.lives = self.state.lives.saturating_sub(1);
                self.state.remaining = ROUNDS_TO_WIN;

                let mut scratch = [0u8; 32];
                let decoded = matcher::decode_candidate(candidate, &mut scratch);
                let out = board.console();
                if decoded == "?" {
                    console::report_error(out, GameError::UnknownCode);
                }
                console::report_incorrect(out, decoded, challenge.label, challenge.code, self.state.lives);
                board.set_led(Rgb::for_lives(self.state.lives));
            }
        }

        // Loss is checked before win. The counters make the cases
        // mutually exclusive within a single round.
        if self.state.lives == 0 {
            self.finish_level(false, board);
        } else if self.state.remaining == 0 {
            self.finish_level(true, board);
        } else {
            self.next_round(level, board);
        }
        Step::AwaitInput
    }

    fn select_result(&mut self, candidate: &str, board: &mut dyn Board) -> Step {
        match candidate {
            PLAY_AGAIN_CODE => {
                board.set_led(Rgb::BLUE);
                console::level_menu(board.console());
                self.phase = Phase::LevelSelect;
                Step::AwaitInput
            }
            EXIT_CODE => {
                console::goodbye(board.console());
                self.phase = Phase::SessionEnd;
                Step::SessionOver
            }
            _ => {
                let out = board.console();
                console::report_error(out, GameError::InvalidSelection);
                console::result_menu(out);
                Step::AwaitInput
            }
        }
    }

    // --- Round flow ---

    fn enter_level(&mut self, level: Level, board: &mut dyn Board) {
        self.state.start_level();
        board.set_led(Rgb::GREEN);
        let _ = writeln!(board.console(), "\n--- LEVEL {} ---", level.number());
        self.phase = Phase::Playing(level);
        self.next_round(level, board);
    }

    fn next_round(&mut self, level: Level, board: &mut dyn Board) {
        let dictionary = level.dictionary();
        self.state.challenge = board.random(dictionary.len() as u32) as usize;

        let entry = dictionary.entry(self.state.challenge);
        let answer = level.config().show_answer.then_some(entry.code);
        console::round_prompt(board.console(), entry.label, answer);
    }

    fn finish_level(&mut self, won: bool, board: &mut dyn Board) {
        if won {
            self.state.streak += 1;
            board.set_led(Rgb::BLUE);
        } else {
            board.set_led(Rgb::RED);
        }

        console::stats(board.console(), &self.state, won);

        // Per-level counters re-arm as part of presenting the result;
        // the streak carries across levels.
        self.state.right = 0;
        self.state.wrong = 0;
        self.state.lives = STARTING_LIVES;
        self.state.remaining = ROUNDS_TO_WIN;

        console::result_menu(board.console());
        self.phase = Phase::LevelResult;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_codes() {
        assert_eq!(Level::from_code(".----"), Some(Level::One));
        assert_eq!(Level::from_code("..---"), Some(Level::Two));
        assert_eq!(Level::from_code("...--"), Some(Level::Three));
        assert_eq!(Level::from_code("....-"), Some(Level::Four));
        assert_eq!(Level::from_code("....."), None);
        assert_eq!(Level::from_code(""), None);
    }

    #[test]
    fn test_level_config() {
        assert!(!Level::One.config().uses_words);
        assert!(Level::One.config().show_answer);
        assert!(!Level::Two.config().show_answer);
        assert!(Level::Three.config().uses_words);
        assert!(Level::Three.config().allow_spaces);
        assert!(!Level::Four.config().show_answer);
        assert_eq!(Level::Four.dictionary(), Dictionary::Words);
        assert_eq!(Level::Two.dictionary(), Dictionary::Letters);
    }

    #[test]
    fn test_accuracy_undefined_without_attempts() {
        let state = GameState::new();
        assert_eq!(state.accuracy(), None);
    }

    #[test]
    fn test_accuracy_percentage() {
        let mut state = GameState::new();
        state.right = 1;
        state.wrong = 3;
        assert_eq!(state.accuracy(), Some(25.0));
    }

    #[test]
    fn test_fresh_game_defaults() {
        let game = Game::new();
        assert_eq!(game.phase(), Phase::LevelSelect);
        assert_eq!(game.state().lives, 3);
        assert_eq!(game.state().remaining, 5);
        assert_eq!(game.state().streak, 0);
        assert!(!game.allows_spaces());
    }
}
