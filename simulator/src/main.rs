//! Toroidal Life simulator for Windows/Desktop.
//!
//! Runs the same demo loop as the firmware on an `embedded-graphics-simulator`
//! window sized like the Pico Display Pack.
//!
//! # Controls
//!
//! - **A**: Step mode, advance one generation per press
//! - **B**: Play mode
//! - **Esc / Q** or closing the window: quit

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

mod panel;

use embassy_futures::block_on;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, Window};
use life_common::colors::BLANK;
use life_common::config::{GRID_CAPACITY, SCREEN_HEIGHT, SCREEN_WIDTH};
use life_common::{Demo, RoundEnd, RoundSummary, Waiter};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::panel::{SharedDisplay, ThreadSleep, WindowSwitches};

fn main() {
    let mut display = SharedDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(3).build();
    let window = Window::new("Toroidal Life", &output_settings);

    display.clear(BLANK).ok();

    let switches = WindowSwitches::new(window, display.clone());
    let waiter = Waiter::new(switches, ThreadSleep);
    let mut demo: Demo<_, _, _, _, GRID_CAPACITY> = Demo::new(display, waiter, SmallRng::from_entropy());

    println!("Toroidal Life: A = step, B = play, Esc = quit");

    let mut round = 0u32;
    let Err(err) = block_on(demo.run(|summary| {
        round += 1;
        log_round(round, summary);
    }));
    eprintln!("field allocation failed: {err}");
    std::process::exit(1);
}

fn log_round(
    round: u32,
    summary: &RoundSummary,
) {
    let end = match summary.end {
        RoundEnd::EmptyBoard => "board emptied",
        RoundEnd::FadedOut => "faded out",
    };
    let fade = summary
        .fade_started_at
        .map_or_else(|| "no fade".to_owned(), |g| format!("fade from gen {g}"));
    println!(
        "[round {round}] pitch {} grid {}x{}: {} after {} generations ({fade})",
        summary.cell_pitch, summary.width, summary.height, end, summary.generations,
    );
}
