//! Toroidal Game of Life firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Runs endless rounds of Life on the Pimoroni Pico Display Pack.
//! Switch A enters Step mode and advances one generation per tap,
//! switch B returns to Play mode.

#![no_std]
#![no_main]

mod display;
mod platform;

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::clocks::RoscRng;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::Spi;
use embedded_graphics::prelude::*;
use life_common::colors::BLANK;
use life_common::config::GRID_CAPACITY;
use life_common::{Demo, Waiter};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use {defmt_rtt as _, panic_probe as _};

use crate::display::{display_spi_config, init_display};
use crate::platform::{GpioSwitches, TimerSleep};

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"pico2-life"),
    embassy_rp::binary_info::rp_program_description!(c"Toroidal Game of Life on the Pico Display Pack"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Toroidal Life starting...");

    let p = embassy_rp::init(Default::default());

    // Display pins: CS=17, DC=16, CLK=18, MOSI=19, Backlight=20
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let _backlight = Output::new(p.PIN_20, Level::High);

    // TX-only, the panel has no MISO
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, display_spi_config());

    let Ok(mut display) = init_display(spi, cs, dc) else {
        defmt::panic!("Display init failed");
    };
    display.clear(BLANK).ok();

    info!("Display initialized!");

    // Switches A and B pull to ground when pressed
    let switches = GpioSwitches::new(Input::new(p.PIN_12, Pull::Up), Input::new(p.PIN_13, Pull::Up));
    let waiter = Waiter::new(switches, TimerSleep);

    let rng = SmallRng::seed_from_u64(RoscRng.next_u64());

    let mut demo: Demo<_, _, _, _, GRID_CAPACITY> = Demo::new(display, waiter, rng);

    info!("Starting demo loop...");

    let mut round = 0u32;
    let Err(err) = demo
        .run(|summary| {
            round = round.wrapping_add(1);
            info!("Round {} done: {}", round, summary);
        })
        .await;

    defmt::panic!("Cannot build field: {}", err);
}
