//! Module: led
//!
//! Purpose: Status LED color model. The game maps session state to one
//! of four colors; pushing the triple out to the addressable LED is the
//! display sink's job, not ours.
//!
//! Safety: Safe. No unsafe blocks. Copy types only.

/// RGB intensity triple for the status LED.
///
/// Channels run at 6-bit intensity, hence the `0x3F` scale. Full 8-bit
/// drive is uncomfortably bright on the on-board pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// All lives intact, and level entry.
    pub const GREEN: Rgb = Rgb::new(0x00, 0x3F, 0x00);

    /// One life lost.
    pub const YELLOW: Rgb = Rgb::new(0x3F, 0x3F, 0x00);

    /// Last life, and level loss.
    pub const RED: Rgb = Rgb::new(0x3F, 0x00, 0x00);

    /// Idle, level select, and win pending.
    pub const BLUE: Rgb = Rgb::new(0x00, 0x00, 0x3F);

    /// Color for the remaining-lives count during play.
    pub const fn for_lives(lives: u8) -> Rgb {
        match lives {
            3.. => Rgb::GREEN,
            2 => Rgb::YELLOW,
            _ => Rgb::RED,
        }
    }
}
