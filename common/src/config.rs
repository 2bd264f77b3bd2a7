//! Display, timing and simulation constants.
//!
//! Everything here is a compile-time `const`. Relationships between values are
//! checked with `const` assertions so a bad edit fails the build instead of
//! producing a demo that hangs or never fades.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7789 on Pimoroni Pico Display Pack: 240x135)
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 135;

// =============================================================================
// Round Parameters
// =============================================================================

/// Smallest cell pitch (pixels per cell edge).
pub const MIN_CELL_PITCH: u32 = 1;

/// Largest cell pitch. Pitch is drawn uniformly from `MIN..=MAX` every round.
pub const MAX_CELL_PITCH: u32 = 15;

/// A seeded cell is alive with probability `1 / LIVE_ONE_IN`.
pub const LIVE_ONE_IN: u32 = 5;

/// Per-generation delay is `sqrt(pitch - 1) * DELAY_SCALE_MS`.
/// Pitch 1 runs flat out, pitch 15 waits ~187 ms.
pub const DELAY_SCALE_MS: u32 = 50;

/// Generation budget is `GENERATION_BUDGET_SCALE / pitch`.
/// Small cells get more generations since each one is cheap to look at.
pub const GENERATION_BUDGET_SCALE: u32 = 2500;

/// Random draw colors are picked from `0..COLOR_RANGE_END` (raw RGB565).
pub const COLOR_RANGE_END: u16 = 0xFFFF;

// =============================================================================
// Timing
// =============================================================================

/// Longest single sleep between input polls, in milliseconds.
/// Bounds the latency between a tap and the demo reacting to it.
pub const WAIT_SLICE_MS: u32 = 50;

/// Wait used between polls while blocked in Step mode.
pub const STEP_POLL_MS: u32 = 10;

/// Pause on a blank screen between rounds.
pub const SETTLE_MS: u32 = 500;

/// Switch debounce window in milliseconds.
pub const DEBOUNCE_MS: u64 = 50;

// =============================================================================
// Grid Storage
// =============================================================================

/// Cell capacity of one grid buffer. Sized for pitch 1 on the full display,
/// the largest grid any round can ask for.
pub const GRID_CAPACITY: usize = (SCREEN_WIDTH * SCREEN_HEIGHT) as usize;

// Compile-time validation
const _: () = assert!(MIN_CELL_PITCH >= 1);
const _: () = assert!(MIN_CELL_PITCH <= MAX_CELL_PITCH);
const _: () = assert!(MAX_CELL_PITCH <= SCREEN_HEIGHT);
const _: () = assert!(LIVE_ONE_IN >= 1);
const _: () = assert!(STEP_POLL_MS <= WAIT_SLICE_MS);
const _: () = assert!(WAIT_SLICE_MS > 0);
