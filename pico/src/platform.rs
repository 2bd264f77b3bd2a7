//! Hardware implementations of the demo's input and sleep seams.

use defmt::info;
use embassy_rp::gpio::Input;
use embassy_time::{Instant, Timer};
use life_common::debounce::Debouncer;
use life_common::{Sleep, Switch, Switches, Taps};

/// Display Pack switches A (Step) and B (Play), active-low.
pub struct GpioSwitches<'d> {
    step: Input<'d>,
    play: Input<'d>,
    step_state: Debouncer,
    play_state: Debouncer,
}

impl<'d> GpioSwitches<'d> {
    pub const fn new(
        step: Input<'d>,
        play: Input<'d>,
    ) -> Self {
        Self {
            step,
            play,
            step_state: Debouncer::new(),
            play_state: Debouncer::new(),
        }
    }
}

impl Switches for GpioSwitches<'_> {
    fn poll(&mut self) -> Taps {
        let now_ms = Instant::now().as_millis();
        let taps = Taps {
            step: self.step_state.just_pressed(self.step.is_low(), now_ms),
            play: self.play_state.just_pressed(self.play.is_low(), now_ms),
        };

        if taps.step {
            info!("Switch {}", Switch::Step);
        }
        if taps.play {
            info!("Switch {}", Switch::Play);
        }
        taps
    }
}

/// Embassy timer sleep. The executor parks the core (WFE) until the alarm.
#[derive(Clone, Copy, Default)]
pub struct TimerSleep;

impl Sleep for TimerSleep {
    async fn sleep_ms(
        &mut self,
        ms: u32,
    ) {
        Timer::after_millis(u64::from(ms)).await;
    }
}
