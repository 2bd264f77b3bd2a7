//! Play/Step interaction state driven by switch taps.
//!
//! Two switches feed this state:
//! - **Step** (switch A): enter Step mode and request one generation
//! - **Play** (switch B): return to Play mode (timed generations)
//!
//! The state lives for the whole process and survives across rounds.

/// How generations are advanced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Generations advance after the round's per-generation delay.
    #[default]
    Play,
    /// Generations advance only on a Step tap.
    Step,
}

/// One of the two input switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Switch {
    Step,
    Play,
}

/// Taps delivered by a single input poll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Taps {
    pub step: bool,
    pub play: bool,
}

impl Taps {
    /// No taps.
    pub const NONE: Self = Self { step: false, play: false };

    /// A single tap on `switch`.
    pub const fn single(switch: Switch) -> Self {
        match switch {
            Switch::Step => Self { step: true, play: false },
            Switch::Play => Self { step: false, play: true },
        }
    }

    #[inline]
    pub const fn any(self) -> bool { self.step || self.play }
}

/// Mode plus the pending-advance flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Interaction {
    mode: Mode,
    pending_advance: bool,
}

impl Interaction {
    /// Start in Play mode with nothing pending.
    pub const fn new() -> Self {
        Self {
            mode: Mode::Play,
            pending_advance: false,
        }
    }

    #[inline]
    pub const fn mode(&self) -> Mode { self.mode }

    #[inline]
    pub const fn pending_advance(&self) -> bool { self.pending_advance }

    /// Handle a tap on one switch.
    pub const fn on_tap(
        &mut self,
        switch: Switch,
    ) {
        match switch {
            Switch::Step => {
                self.mode = Mode::Step;
                self.pending_advance = true;
            }
            Switch::Play => self.mode = Mode::Play,
        }
    }

    /// Handle the taps from one poll. Step is applied before Play, so tapping
    /// both in the same poll leaves Play mode with an advance pending.
    ///
    /// Returns `true` if the mode changed.
    pub const fn apply(
        &mut self,
        taps: Taps,
    ) -> bool {
        let before = self.mode as u8;
        if taps.step {
            self.on_tap(Switch::Step);
        }
        if taps.play {
            self.on_tap(Switch::Play);
        }
        before != self.mode as u8
    }

    /// Whether the round must keep waiting before the next generation.
    #[inline]
    pub const fn is_gated(&self) -> bool { matches!(self.mode, Mode::Step) && !self.pending_advance }

    /// Consume the pending advance, returning whether one was pending.
    pub const fn take_advance(&mut self) -> bool {
        let pending = self.pending_advance;
        self.pending_advance = false;
        pending
    }
}

// =============================================================================
// Tests
// =============================================================================
