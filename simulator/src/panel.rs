//! Desktop stand-ins for the display, the switches and the sleep primitive.
//!
//! The SDL window only refreshes when `Window::update` is called, and input
//! events are only collected at the same time. The demo polls input at least
//! every 50 ms while it waits, so [`WindowSwitches::poll`] presents the frame
//! and reads the keyboard in one go. The display buffer is shared between the
//! draw side and the window through `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::convert::Infallible;
use std::process;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent, Window};
use life_common::{Sleep, Switch, Switches, Taps};

// =============================================================================
// Display
// =============================================================================

/// Simulator framebuffer shared between the demo and the window.
#[derive(Clone)]
pub struct SharedDisplay(Rc<RefCell<SimulatorDisplay<Rgb565>>>);

impl SharedDisplay {
    pub fn new(size: Size) -> Self { Self(Rc::new(RefCell::new(SimulatorDisplay::new(size)))) }
}

impl OriginDimensions for SharedDisplay {
    fn size(&self) -> Size { self.0.borrow().size() }
}

impl DrawTarget for SharedDisplay {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.0.borrow_mut().draw_iter(pixels)
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.0.borrow_mut().fill_solid(area, color)
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.0.borrow_mut().clear(color)
    }
}

// =============================================================================
// Switches
// =============================================================================

/// Keyboard switches: `A` is Step, `B` is Play.
pub struct WindowSwitches {
    window: Window,
    display: SharedDisplay,
}

impl WindowSwitches {
    pub const fn new(
        window: Window,
        display: SharedDisplay,
    ) -> Self {
        Self { window, display }
    }
}

impl Switches for WindowSwitches {
    fn poll(&mut self) -> Taps {
        self.window.update(&self.display.0.borrow());

        let mut taps = Taps::NONE;
        for ev in self.window.events() {
            match ev {
                SimulatorEvent::Quit => process::exit(0),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::A => {
                            taps.step = true;
                            println!("[input] {:?}", Switch::Step);
                        }
                        Keycode::B => {
                            taps.play = true;
                            println!("[input] {:?}", Switch::Play);
                        }
                        Keycode::Escape | Keycode::Q => process::exit(0),
                        _ => {}
                    }
                }
                _ => {}
            }
        }
        taps
    }
}

// =============================================================================
// Sleep
// =============================================================================

/// Blocking thread sleep. The simulator runs on a single thread under
/// `block_on`, so blocking here is the same as parking the core.
#[derive(Clone, Copy, Default)]
pub struct ThreadSleep;

impl Sleep for ThreadSleep {
    async fn sleep_ms(
        &mut self,
        ms: u32,
    ) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
