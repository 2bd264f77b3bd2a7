//! Test doubles for the display, switches and sleep.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use life_common::{Field, Sleep, Switches, Taps};

/// Display that records block fills and clears instead of drawing.
pub struct RecordingDisplay {
    size: Size,
    pub fills: Vec<(Rectangle, Rgb565)>,
    pub clears: Vec<Rgb565>,
}

impl RecordingDisplay {
    pub fn new(
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            size: Size::new(width, height),
            fills: Vec::new(),
            clears: Vec::new(),
        }
    }
}

impl OriginDimensions for RecordingDisplay {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for RecordingDisplay {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        _pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.fills.push((*area, color));
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.clears.push(color);
        Ok(())
    }
}

/// Switches that replay a fixed script, one entry per poll, then stay idle.
#[derive(Default)]
pub struct ScriptedSwitches {
    script: VecDeque<Taps>,
    pub polls: usize,
}

impl ScriptedSwitches {
    pub fn new(script: impl IntoIterator<Item = Taps>) -> Self {
        Self {
            script: script.into_iter().collect(),
            polls: 0,
        }
    }

    /// Idle for `idle` polls, then deliver `taps`.
    pub fn after(
        idle: usize,
        taps: Taps,
    ) -> Self {
        Self::new(std::iter::repeat_n(Taps::NONE, idle).chain(std::iter::once(taps)))
    }
}

impl Switches for ScriptedSwitches {
    fn poll(&mut self) -> Taps {
        self.polls += 1;
        self.script.pop_front().unwrap_or(Taps::NONE)
    }
}

/// Sleep that returns immediately and records every slice.
#[derive(Default)]
pub struct RecordingSleep {
    pub slices: Vec<u32>,
}

impl RecordingSleep {
    pub fn total_ms(&self) -> u32 { self.slices.iter().sum() }
}

impl Sleep for RecordingSleep {
    async fn sleep_ms(
        &mut self,
        ms: u32,
    ) {
        self.slices.push(ms);
    }
}

/// Field with `cells` alive in next and current dead, like a fresh round.
pub fn seeded<const N: usize>(
    width: usize,
    height: usize,
    cells: &[(usize, usize)],
) -> Field<N> {
    let mut field = Field::new(width, height).unwrap();
    for &(x, y) in cells {
        field.set_next(x, y, true);
    }
    field
}

pub const BLOCK: [(usize, usize); 4] = [(1, 1), (1, 2), (2, 1), (2, 2)];

pub const BLINKER: [(usize, usize); 3] = [(1, 2), (2, 2), (3, 2)];
