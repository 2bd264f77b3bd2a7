//! Change-driven field rendering.
//!
//! Only cells whose state differs between current and next are painted, one
//! `pitch × pitch` block fill per cell. The display keeps whatever was drawn
//! before, so the screen always shows next once `redraw` returns.
//!
//! # Update Strategy
//!
//! | Situation | Cells drawn |
//! |-----------|-------------|
//! | Normal generation | Changed cells only (live in color, dead in blank) |
//! | Fading (`force`) | Changed cells plus every live cell, in the faded color |
//! | Same field revision drawn again | Nothing |
//!
//! Forcing is needed while fading: stable cells never change state, so without
//! a full pass the shrinking color would never reach them.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::field::Field;

/// Draws a [`Field`] onto a display and remembers which revision it drew.
#[derive(Clone, Copy, Debug, Default)]
pub struct Renderer {
    /// Field revision painted by the last unforced or forced pass.
    drawn_revision: Option<u32>,
}

impl Renderer {
    /// Create a renderer that has not drawn anything yet.
    pub const fn new() -> Self { Self { drawn_revision: None } }

    /// Paint the cells of next that need painting.
    ///
    /// Returns the number of live cells in next. `0` means the board is empty.
    ///
    /// Draw errors are ignored: the surface has no way to report them and the
    /// next pass repaints anything still out of date.
    pub fn redraw<D, const N: usize>(
        &mut self,
        display: &mut D,
        field: &Field<N>,
        color: Rgb565,
        blank: Rgb565,
        pitch: u32,
        force: bool,
    ) -> usize
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let revision = field.revision();
        if !force && self.drawn_revision == Some(revision) {
            return field.live_count();
        }

        let height = field.height();
        let (current, next) = (field.current(), field.next());
        let block = Size::new(pitch, pitch);
        let mut live = 0;

        for x in 0..field.width() {
            let col = x * height;
            for y in 0..height {
                let alive = next[col + y];
                if alive {
                    live += 1;
                }
                if (force && alive) || alive != current[col + y] {
                    let origin = Point::new((x as u32 * pitch) as i32, (y as u32 * pitch) as i32);
                    let fill = if alive { color } else { blank };
                    display.fill_solid(&Rectangle::new(origin, block), fill).ok();
                }
            }
        }

        self.drawn_revision = Some(revision);
        live
    }
}

// =============================================================================
// Tests
// =============================================================================
