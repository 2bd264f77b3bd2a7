//! Round lifecycle.
//!
//! ```text
//! Initializing ──► Simulating ──► Fading ──► Ending ──► Initializing ...
//!                      │                        ▲
//!                      └──── empty board ───────┘
//! ```
//!
//! - **Initializing**: [`Demo::begin_round`] draws fresh [`RoundParams`] and
//!   seeds a [`Field`] sized to the display.
//! - **Simulating / Fading**: [`Round::advance`] runs one render → gate →
//!   swap → step iteration. A fixed point or an exhausted generation budget
//!   switches to fading, which dims the draw color by one step per generation
//!   while the condition holds.
//! - **Ending**: the round ends when the board is empty (immediately, no fade)
//!   or when the color reaches black. [`Demo::run_round`] then drops the field,
//!   blanks the screen and settles before the next round.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use rand::Rng;

use crate::colors::{BLANK, fade_step, random_color};
use crate::config::{
    DELAY_SCALE_MS,
    GENERATION_BUDGET_SCALE,
    LIVE_ONE_IN,
    MAX_CELL_PITCH,
    MIN_CELL_PITCH,
    SETTLE_MS,
};
use crate::field::{Field, FieldError};
use crate::render::Renderer;
use crate::stepper::step;
use crate::waiter::{Sleep, Switches, Waiter};

// =============================================================================
// Round Parameters
// =============================================================================

/// Visual parameters chosen at the start of every round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundParams {
    /// Pixels per cell edge.
    pub cell_pitch: u32,
    /// Initial draw color for live cells.
    pub color: Rgb565,
    /// Wait between generations in Play mode.
    pub delay_ms: u32,
    /// Generations with changes allowed before fading starts.
    pub generation_budget: i32,
}

impl RoundParams {
    /// Derive delay and budget from a pitch. The pitch is clamped to
    /// `MIN_CELL_PITCH..=MAX_CELL_PITCH`.
    pub const fn for_pitch(
        cell_pitch: u32,
        color: Rgb565,
    ) -> Self {
        let cell_pitch = if cell_pitch < MIN_CELL_PITCH {
            MIN_CELL_PITCH
        } else if cell_pitch > MAX_CELL_PITCH {
            MAX_CELL_PITCH
        } else {
            cell_pitch
        };
        Self {
            cell_pitch,
            color,
            delay_ms: delay_for_pitch(cell_pitch),
            generation_budget: (GENERATION_BUDGET_SCALE / cell_pitch) as i32,
        }
    }

    /// Draw a random color and pitch.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let color = random_color(rng);
        let cell_pitch = rng.gen_range(MIN_CELL_PITCH..=MAX_CELL_PITCH);
        Self::for_pitch(cell_pitch, color)
    }

    /// Grid dimensions (columns, rows) that fit on a display of `screen` size.
    pub const fn grid_size(
        &self,
        screen: Size,
    ) -> (usize, usize) {
        (
            (screen.width / self.cell_pitch) as usize,
            (screen.height / self.cell_pitch) as usize,
        )
    }
}

/// `floor(sqrt(pitch - 1) * DELAY_SCALE_MS)`, in integer math.
pub const fn delay_for_pitch(cell_pitch: u32) -> u32 {
    (cell_pitch.saturating_sub(1) * DELAY_SCALE_MS * DELAY_SCALE_MS).isqrt()
}

// =============================================================================
// Round State
// =============================================================================

/// Whether the round is still simulating normally or fading out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    #[default]
    Simulating,
    Fading,
}

/// Why a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoundEnd {
    /// Every cell died. The round ends without fading.
    EmptyBoard,
    /// The draw color faded all the way to black.
    FadedOut,
}

/// Result of one [`Round::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Progress {
    Continue,
    Ended(RoundEnd),
}

/// What happened during a finished round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RoundSummary {
    pub cell_pitch: u32,
    pub width: usize,
    pub height: usize,
    /// Generations stepped.
    pub generations: u32,
    /// Generation at which fading began, if it did.
    pub fade_started_at: Option<u32>,
    pub end: RoundEnd,
}

/// One round: the field, its parameters and the fade state.
///
/// Dropping the round releases the field.
pub struct Round<const N: usize> {
    field: Field<N>,
    renderer: Renderer,
    params: RoundParams,
    color: Rgb565,
    budget: i32,
    phase: Phase,
    generation: u32,
    last_changed: Option<usize>,
    fade_started_at: Option<u32>,
}

impl<const N: usize> Round<N> {
    /// Start a round on a seeded field. The first [`advance`](Self::advance)
    /// paints next (the seed) over a blank current.
    pub const fn new(
        field: Field<N>,
        params: RoundParams,
    ) -> Self {
        Self {
            field,
            renderer: Renderer::new(),
            color: params.color,
            budget: params.generation_budget,
            params,
            phase: Phase::Simulating,
            generation: 0,
            last_changed: None,
            fade_started_at: None,
        }
    }

    #[inline]
    pub const fn field(&self) -> &Field<N> { &self.field }

    #[inline]
    pub const fn params(&self) -> &RoundParams { &self.params }

    /// Current (possibly faded) draw color.
    #[inline]
    pub const fn color(&self) -> Rgb565 { self.color }

    #[inline]
    pub const fn phase(&self) -> Phase { self.phase }

    /// Generations stepped so far.
    #[inline]
    pub const fn generation(&self) -> u32 { self.generation }

    /// Changed-cell count of the most recent step.
    #[inline]
    pub const fn last_changed(&self) -> Option<usize> { self.last_changed }

    /// Run one iteration of the round loop.
    pub async fn advance<D, S, T>(
        &mut self,
        display: &mut D,
        waiter: &mut Waiter<S, T>,
    ) -> Progress
    where
        D: DrawTarget<Color = Rgb565>,
        S: Switches,
        T: Sleep,
    {
        let fading = self.phase == Phase::Fading;
        let live = self
            .renderer
            .redraw(display, &self.field, self.color, BLANK, self.params.cell_pitch, fading);
        if live == 0 {
            return Progress::Ended(RoundEnd::EmptyBoard);
        }

        waiter.gate(self.params.delay_ms).await;

        self.field.swap();
        let changed = step(&mut self.field);
        self.generation += 1;
        self.last_changed = Some(changed);

        // The budget only counts generations that changed something.
        let settled = changed == 0;
        if !settled {
            self.budget -= 1;
        }
        if settled || self.budget < 0 {
            self.fade();
        }

        if self.color == BLANK {
            Progress::Ended(RoundEnd::FadedOut)
        } else {
            Progress::Continue
        }
    }

    /// Advance until the round ends.
    pub async fn run<D, S, T>(
        mut self,
        display: &mut D,
        waiter: &mut Waiter<S, T>,
    ) -> RoundSummary
    where
        D: DrawTarget<Color = Rgb565>,
        S: Switches,
        T: Sleep,
    {
        loop {
            if let Progress::Ended(end) = self.advance(display, waiter).await {
                return self.summary(end);
            }
        }
    }

    /// Summarize the round as it stands.
    pub const fn summary(
        &self,
        end: RoundEnd,
    ) -> RoundSummary {
        RoundSummary {
            cell_pitch: self.params.cell_pitch,
            width: self.field.width(),
            height: self.field.height(),
            generations: self.generation,
            fade_started_at: self.fade_started_at,
            end,
        }
    }

    fn fade(&mut self) {
        if self.phase == Phase::Simulating {
            self.phase = Phase::Fading;
            self.fade_started_at = Some(self.generation);
            #[cfg(feature = "defmt")]
            defmt::debug!("fading from generation {}", self.generation);
        }
        self.color = fade_step(self.color);
    }
}

// =============================================================================
// Demo Loop
// =============================================================================

/// Endless sequence of rounds on one display.
pub struct Demo<D, S, T, R, const N: usize> {
    display: D,
    waiter: Waiter<S, T>,
    rng: R,
    rounds: u32,
}

impl<D, S, T, R, const N: usize> Demo<D, S, T, R, N>
where
    D: DrawTarget<Color = Rgb565>,
    S: Switches,
    T: Sleep,
    R: Rng,
{
    pub const fn new(
        display: D,
        waiter: Waiter<S, T>,
        rng: R,
    ) -> Self {
        Self {
            display,
            waiter,
            rng,
            rounds: 0,
        }
    }

    #[inline]
    pub const fn display(&self) -> &D { &self.display }

    #[inline]
    pub const fn waiter(&self) -> &Waiter<S, T> { &self.waiter }

    /// Rounds completed so far.
    #[inline]
    pub const fn rounds(&self) -> u32 { self.rounds }

    /// Pick parameters and seed a field sized to the display.
    pub fn begin_round(&mut self) -> Result<Round<N>, FieldError> {
        let params = RoundParams::random(&mut self.rng);
        let (width, height) = params.grid_size(self.display.bounding_box().size);
        let field = Field::init(width, height, LIVE_ONE_IN, &mut self.rng)?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "round {}: pitch {} grid {}x{} delay {}ms budget {}",
            self.rounds,
            params.cell_pitch,
            width,
            height,
            params.delay_ms,
            params.generation_budget
        );

        Ok(Round::new(field, params))
    }

    /// Run one full round, then blank the screen and settle.
    pub async fn run_round(&mut self) -> Result<RoundSummary, FieldError> {
        let round = self.begin_round()?;
        let summary = round.run(&mut self.display, &mut self.waiter).await;

        self.display.clear(BLANK).ok();
        self.waiter.wait(SETTLE_MS).await;
        self.rounds = self.rounds.wrapping_add(1);

        Ok(summary)
    }

    /// Run rounds forever. Only returns if a field cannot be built.
    pub async fn run<F>(
        &mut self,
        mut on_round: F,
    ) -> Result<Infallible, FieldError>
    where
        F: FnMut(&RoundSummary),
    {
        loop {
            let summary = self.run_round().await?;
            on_round(&summary);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::RgbColor;

    use super::*;

    #[test]
    fn test_delay_for_pitch() {
        assert_eq!(delay_for_pitch(1), 0);
        assert_eq!(delay_for_pitch(2), 50);
        assert_eq!(delay_for_pitch(5), 100);
        assert_eq!(delay_for_pitch(10), 150);
        // sqrt(14) * 50 = 187.08
        assert_eq!(delay_for_pitch(15), 187);
    }

    #[test]
    fn test_params_for_pitch() {
        let params = RoundParams::for_pitch(4, Rgb565::RED);
        assert_eq!(params.cell_pitch, 4);
        assert_eq!(params.delay_ms, 86);
        assert_eq!(params.generation_budget, 625);
        assert_eq!(params.color, Rgb565::RED);
    }

    #[test]
    fn test_params_clamp_pitch() {
        assert_eq!(RoundParams::for_pitch(0, Rgb565::RED).cell_pitch, MIN_CELL_PITCH);
        assert_eq!(RoundParams::for_pitch(99, Rgb565::RED).cell_pitch, MAX_CELL_PITCH);
    }

    #[test]
    fn test_grid_size_truncates() {
        let screen = Size::new(240, 135);
        assert_eq!(RoundParams::for_pitch(1, Rgb565::RED).grid_size(screen), (240, 135));
        assert_eq!(RoundParams::for_pitch(7, Rgb565::RED).grid_size(screen), (34, 19));
        assert_eq!(RoundParams::for_pitch(15, Rgb565::RED).grid_size(screen), (16, 9));
    }

    #[test]
    fn test_random_params_in_range() {
        use rand::SeedableRng;
        use rand::rngs::SmallRng;

        let mut rng = SmallRng::seed_from_u64(3);
        let mut seen = [false; MAX_CELL_PITCH as usize + 1];
        for _ in 0..2000 {
            let params = RoundParams::random(&mut rng);
            assert!((MIN_CELL_PITCH..=MAX_CELL_PITCH).contains(&params.cell_pitch));
            assert_eq!(params.delay_ms, delay_for_pitch(params.cell_pitch));
            seen[params.cell_pitch as usize] = true;
        }
        assert!(seen[MIN_CELL_PITCH as usize..].iter().all(|&s| s));
    }
}
