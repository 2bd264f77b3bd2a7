//! Double-buffered toroidal cell grid.
//!
//! A [`Field`] owns two grids of identical size: *current* (the generation on
//! screen) and *next* (the generation being built). Cells are stored column
//! major, `index = x * height + y`.
//!
//! # Buffer Swap
//!
//! The grids live in a fixed two-slot array and `current` is a slot index, so
//! [`Field::swap`] flips one index instead of copying cells. This mirrors the
//! framebuffer double buffering on the display side.
//!
//! # Storage
//!
//! Grids are `heapless::Vec<bool, N>`: no allocator, capacity fixed at compile
//! time. A round asking for more than `N` cells gets [`FieldError::TooLarge`].
//!
//! # Revision
//!
//! Every mutation of *next* (and every swap) bumps a revision counter. The
//! renderer uses it to skip redrawing a field it has already drawn.

use core::fmt;

use heapless::Vec;
use rand::Rng;

/// Reasons a field cannot be built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldError {
    /// Width or height is zero.
    EmptyGrid,
    /// `width * height` exceeds the grid capacity.
    TooLarge { cells: usize, capacity: usize },
}

impl fmt::Display for FieldError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::EmptyGrid => f.write_str("grid has a zero dimension"),
            Self::TooLarge { cells, capacity } => {
                write!(f, "grid needs {cells} cells but capacity is {capacity}")
            }
        }
    }
}

impl core::error::Error for FieldError {}

/// Two same-sized boolean grids with toroidal adjacency.
#[derive(Clone, Debug)]
pub struct Field<const N: usize> {
    width: usize,
    height: usize,
    grids: [Vec<bool, N>; 2],
    /// Slot index of the current grid. Next is `current ^ 1`.
    current: usize,
    revision: u32,
}

impl<const N: usize> Field<N> {
    /// Create a field with both grids dead.
    pub fn new(
        width: usize,
        height: usize,
    ) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::EmptyGrid);
        }
        let cells = width.saturating_mul(height);
        let too_large = FieldError::TooLarge { cells, capacity: N };
        if cells > N {
            return Err(too_large);
        }

        let mut grids = [Vec::new(), Vec::new()];
        for grid in &mut grids {
            grid.resize(cells, false).map_err(|_| too_large)?;
        }

        Ok(Self {
            width,
            height,
            grids,
            current: 0,
            revision: 0,
        })
    }

    /// Create a field for a new round.
    ///
    /// Current starts dead. Each cell of next is alive with probability
    /// `1 / live_one_in`, so the first render paints the seed population.
    pub fn init<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        live_one_in: u32,
        rng: &mut R,
    ) -> Result<Self, FieldError> {
        let mut field = Self::new(width, height)?;
        let one_in = live_one_in.max(1);
        let (_, next) = field.split_mut();
        for cell in next.iter_mut() {
            *cell = rng.gen_range(0..one_in) == 0;
        }
        Ok(field)
    }

    #[inline]
    pub const fn width(&self) -> usize { self.width }

    #[inline]
    pub const fn height(&self) -> usize { self.height }

    /// Monotonic counter bumped whenever next changes or the grids swap.
    #[inline]
    pub const fn revision(&self) -> u32 { self.revision }

    #[inline]
    const fn index(
        &self,
        x: usize,
        y: usize,
    ) -> usize {
        x * self.height + y
    }

    /// Current grid, column major.
    #[inline]
    pub fn current(&self) -> &[bool] { &self.grids[self.current] }

    /// Next grid, column major.
    #[inline]
    pub fn next(&self) -> &[bool] { &self.grids[self.current ^ 1] }

    /// Whether `(x, y)` is alive in the current grid.
    pub fn is_alive(
        &self,
        x: usize,
        y: usize,
    ) -> bool {
        self.current()[self.index(x, y)]
    }

    /// Whether `(x, y)` is alive in the next grid.
    pub fn is_alive_next(
        &self,
        x: usize,
        y: usize,
    ) -> bool {
        self.next()[self.index(x, y)]
    }

    /// Set a cell in the next grid. Used to seed patterns.
    pub fn set_next(
        &mut self,
        x: usize,
        y: usize,
        alive: bool,
    ) {
        let idx = self.index(x, y);
        let (_, next) = self.split_mut();
        next[idx] = alive;
    }

    /// Number of live cells in the next grid.
    pub fn live_count(&self) -> usize { self.next().iter().filter(|&&alive| alive).count() }

    /// Sum of the 8 toroidal neighbors of `(x, y)` in the current grid.
    pub fn count_neighbors(
        &self,
        x: usize,
        y: usize,
    ) -> u8 {
        count_neighbors(self.current(), self.width, self.height, x, y)
    }

    /// Exchange current and next. O(1).
    #[inline]
    pub fn swap(&mut self) {
        self.current ^= 1;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Borrow current for reading and next for writing at the same time.
    pub(crate) fn split_mut(&mut self) -> (&[bool], &mut [bool]) {
        self.revision = self.revision.wrapping_add(1);
        let [a, b] = &mut self.grids;
        let (current, next) = if self.current == 0 { (a, b) } else { (b, a) };
        (&current[..], &mut next[..])
    }
}

/// Toroidal neighbor sum over a column-major grid.
///
/// `-1` wraps to `dimension - 1` and `dimension` wraps to `0`. On a 1-wide or
/// 1-high grid several offsets land on the same cell; each is still counted,
/// so the result stays within 0..=8.
pub(crate) fn count_neighbors(
    grid: &[bool],
    width: usize,
    height: usize,
    x: usize,
    y: usize,
) -> u8 {
    let xm = (if x == 0 { width - 1 } else { x - 1 }) * height;
    let x0 = x * height;
    let xp = (if x + 1 >= width { 0 } else { x + 1 }) * height;
    let ym = if y == 0 { height - 1 } else { y - 1 };
    let yp = if y + 1 >= height { 0 } else { y + 1 };

    [
        xm + ym,
        xm + y,
        xm + yp,
        x0 + ym,
        x0 + yp,
        xp + ym,
        xp + y,
        xp + yp,
    ]
    .into_iter()
    .map(|i| u8::from(grid[i]))
    .sum()
}

// =============================================================================
// Tests
// =============================================================================
