//! # MorseTrainer
//!
//! Interactive Morse code training game for a board with one button and
//! one addressable RGB status LED.
//!
//! ## Architecture
//!
//! Input flows one way: button edges → [`EdgeQueue`] → [`EdgeTimer`] →
//! [`InputAssembler`] → [`ReadyFlag`] → [`Game`]. Core modules are pure
//! logic with no hardware dependencies and run on host in tests;
//! hardware reaches the game only through the [`Board`] trait.

#![cfg_attr(not(test), no_std)]

pub mod assembler;
pub mod console;
pub mod dictionary;
pub mod edge;
pub mod error;
pub mod events;
pub mod game;
pub mod led;
pub mod matcher;
pub mod signal;
pub mod symbol;

pub use assembler::{InputAssembler, Outcome, INPUT_CAPACITY};
pub use dictionary::{Dictionary, MorseEntry};
pub use edge::EdgeTimer;
pub use error::GameError;
pub use events::{Edge, EdgeKind, EdgeQueue};
pub use game::{Board, Game, GameState, Level, Phase, Step};
pub use led::Rgb;
pub use matcher::MatchResult;
pub use signal::{Liveness, ReadyFlag};
pub use symbol::MorseSymbol;
