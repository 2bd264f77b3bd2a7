//! Core of the toroidal Game of Life demo.
//!
//! This crate contains the platform-agnostic round logic shared between the
//! desktop simulator and the Pico 2 firmware:
//!
//! - [`config`]: Display size, timing and grid capacity constants
//! - [`colors`]: RGB565 blank color and the fade-to-black step
//! - [`field`]: Double-buffered toroidal cell grid
//! - [`stepper`]: Life rule and generation step
//! - [`render`]: Change-driven cell rendering
//! - [`interaction`]: Play/Step mode driven by switch taps
//! - [`debounce`]: Time-agnostic switch debouncing
//! - [`waiter`]: Power-conserving wait loop that keeps polling input
//! - [`round`]: Round parameters, the per-round state machine and the demo loop
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p life-common
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the firmware links the crate as `no_std`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod debounce;
pub mod field;
pub mod interaction;
pub mod render;
pub mod round;
pub mod stepper;
pub mod waiter;

// Re-export commonly used items
pub use field::{Field, FieldError};
pub use interaction::{Interaction, Mode, Switch, Taps};
pub use render::Renderer;
pub use round::{Demo, Phase, Progress, Round, RoundEnd, RoundParams, RoundSummary};
pub use waiter::{Sleep, Switches, Waiter};
