//! Display driver for the Pimoroni Pico Display Pack (PIM543, ST7789, 240x135).
//!
//! Pin mapping:
//! - CS: GPIO17
//! - DC: GPIO16
//! - CLK: GPIO18 (SPI0 CLK)
//! - MOSI: GPIO19 (SPI0 TX)
//! - Backlight: GPIO20
//! - Reset: Tied to RUN pin (resets with Pico)

use core::convert::Infallible;

use display_interface_spi::SPIInterface;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Config as SpiConfig, Spi};
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use mipidsi::{Builder, NoResetPin};

/// ST7789 on the Display Pack (no reset pin).
pub type PackDisplay<'d> =
    mipidsi::Display<SPIInterface<ExclusiveDevice<Spi<'d, SPI0, Blocking>, Output<'d>, NoDelay>, Output<'d>>, ST7789, NoResetPin>;

/// Native panel size, portrait.
const PANEL_WIDTH: u16 = 135;
const PANEL_HEIGHT: u16 = 240;

/// The 135x240 window sits inside the controller's 240x320 RAM.
const PANEL_OFFSET_X: u16 = 52;
const PANEL_OFFSET_Y: u16 = 40;

/// Display bring-up failed. The driver's error types carry no detail worth
/// logging.
#[derive(Debug, defmt::Format)]
pub struct InitError;

impl From<Infallible> for InitError {
    fn from(never: Infallible) -> Self { match never {} }
}

/// Initialize the Display Pack in landscape (240x135).
pub fn init_display<'d>(
    spi: Spi<'d, SPI0, Blocking>,
    cs: Output<'d>,
    dc: Output<'d>,
) -> Result<PackDisplay<'d>, InitError> {
    let spi_device = ExclusiveDevice::new_no_delay(spi, cs)?;
    let di = SPIInterface::new(spi_device, dc);

    Builder::new(ST7789, di)
        .display_size(PANEL_WIDTH, PANEL_HEIGHT)
        .display_offset(PANEL_OFFSET_X, PANEL_OFFSET_Y)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .invert_colors(ColorInversion::Inverted)
        .init(&mut embassy_time::Delay)
        .map_err(|_| InitError)
}

/// SPI configuration for the ST7789 display.
///
/// 40MHz is within the controller's 62.5MHz limit.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 40_000_000;
    config
}
