//! Colors and the fade-to-black step.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! This format is native to the ST7789 and is what the draw color is stored
//! in, so fading works directly on the channels without conversion.

use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use rand::Rng;

use crate::config::COLOR_RANGE_END;

/// Color of dead cells and of the screen between rounds.
pub const BLANK: Rgb565 = Rgb565::BLACK;

/// Pick a random draw color.
///
/// Any raw value below [`COLOR_RANGE_END`] is possible, including black. A
/// black round still simulates one generation before it ends.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb565 { Rgb565::from(RawU16::new(rng.gen_range(0..COLOR_RANGE_END))) }

/// One fade step: every channel drops by one, clamped at zero.
#[inline]
pub fn fade_step(color: Rgb565) -> Rgb565 {
    Rgb565::new(
        color.r().saturating_sub(1),
        color.g().saturating_sub(1),
        color.b().saturating_sub(1),
    )
}

/// Number of [`fade_step`] calls needed to reach black.
#[inline]
pub fn fade_steps(color: Rgb565) -> u8 { color.r().max(color.g()).max(color.b()) }

// =============================================================================
// Tests
// =============================================================================
