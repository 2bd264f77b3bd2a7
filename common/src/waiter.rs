//! Power-conserving wait loop.
//!
//! Waits are split into slices of at most [`WAIT_SLICE_MS`]. Input is polled
//! before every slice, so a tap is noticed within one slice even during a long
//! per-generation delay. On hardware the sleep is an embassy timer, which lets
//! the executor park the core between slices.

use crate::config::{STEP_POLL_MS, WAIT_SLICE_MS};
use crate::interaction::{Interaction, Mode, Taps};

/// Source of switch taps.
pub trait Switches {
    /// Sample the switches and return the taps since the previous poll.
    fn poll(&mut self) -> Taps;
}

/// Low-power timed sleep.
#[allow(async_fn_in_trait)]
pub trait Sleep {
    /// Sleep for about `ms` milliseconds.
    async fn sleep_ms(
        &mut self,
        ms: u32,
    );
}

/// Owns the input side of the demo: switches, sleep and interaction state.
pub struct Waiter<S, T> {
    switches: S,
    sleep: T,
    interaction: Interaction,
}

impl<S: Switches, T: Sleep> Waiter<S, T> {
    /// Create a waiter in Play mode.
    pub const fn new(
        switches: S,
        sleep: T,
    ) -> Self {
        Self {
            switches,
            sleep,
            interaction: Interaction::new(),
        }
    }

    #[inline]
    pub const fn interaction(&self) -> &Interaction { &self.interaction }

    #[inline]
    pub const fn switches(&self) -> &S { &self.switches }

    #[inline]
    pub const fn sleep(&self) -> &T { &self.sleep }

    /// Poll the switches once and apply the taps.
    pub fn poll(&mut self) {
        let taps = self.switches.poll();
        self.interaction.apply(taps);
    }

    /// Wait `total_ms`, polling input before every slice.
    ///
    /// Always polls at least once, so a zero-length wait still picks up
    /// pending taps.
    pub async fn wait(
        &mut self,
        total_ms: u32,
    ) {
        let mut remaining = total_ms;
        loop {
            self.poll();
            if remaining == 0 {
                break;
            }
            let slice = remaining.min(WAIT_SLICE_MS);
            self.sleep.sleep_ms(slice).await;
            remaining -= slice;
        }
    }

    /// Block in short slices until a Step tap (or a switch back to Play), then
    /// consume the pending advance.
    pub async fn wait_for_advance(&mut self) {
        while self.interaction.is_gated() {
            self.wait(STEP_POLL_MS).await;
        }
        self.interaction.take_advance();
    }

    /// Hold the round until the next generation may run.
    ///
    /// Play mode waits `delay_ms`; Step mode waits for an advance.
    pub async fn gate(
        &mut self,
        delay_ms: u32,
    ) {
        match self.interaction.mode() {
            Mode::Step => self.wait_for_advance().await,
            Mode::Play => self.wait(delay_ms).await,
        }
    }
}
