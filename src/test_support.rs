//! Host-side doubles for the display and for views.

use std::cell::RefCell;
use std::format;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::canvas::{Canvas, SubCanvas};
use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::event::UiEvent;
use crate::screen::Composition;
use crate::view::View;

const W: usize = DISPLAY_WIDTH as usize;
const H: usize = DISPLAY_HEIGHT as usize;

/// In-memory 128x64 monochrome frame buffer.
pub struct TestCanvas {
    frame: [[bool; W]; H],
    pub presents: u32,
    pub powered: bool,
    pub power_changes: u32,
}

impl TestCanvas {
    pub fn new() -> Self {
        Self {
            frame: [[false; W]; H],
            presents: 0,
            powered: true,
            power_changes: 0,
        }
    }

    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        self.frame[y][x]
    }

    pub fn lit_count(&self) -> usize {
        self.frame.iter().flatten().filter(|&&on| on).count()
    }

    /// Whether any pixel in the given rows is lit.
    pub fn rows_lit(&self, rows: core::ops::Range<usize>) -> bool {
        self.frame[rows].iter().flatten().any(|&on| on)
    }
}

impl OriginDimensions for TestCanvas {
    fn size(&self) -> Size {
        Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }
}

impl DrawTarget for TestCanvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            if p.x >= 0 && p.y >= 0 && (p.x as usize) < W && (p.y as usize) < H {
                self.frame[p.y as usize][p.x as usize] = color.is_on();
            }
        }
        Ok(())
    }
}

impl Canvas for TestCanvas {
    fn present(&mut self) -> Result<(), Self::Error> {
        self.presents += 1;
        Ok(())
    }

    fn set_powered(&mut self, on: bool) -> Result<(), Self::Error> {
        self.powered = on;
        self.power_changes += 1;
        Ok(())
    }
}

pub type Log = Rc<RefCell<Vec<String>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn full_screen<'v>() -> Composition<'v, TestCanvas> {
    Composition::new(
        Rectangle::new(Point::zero(), Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)),
        BinaryColor::Off,
    )
}

/// View that fills its bounds and records every draw and input call.
pub struct Marker {
    name: &'static str,
    bounds: Rectangle,
    consumes: bool,
    log: Log,
}

impl Marker {
    pub fn new(name: &'static str, bounds: Rectangle, consumes: bool, log: &Log) -> Self {
        Self {
            name,
            bounds,
            consumes,
            log: log.clone(),
        }
    }
}

impl<D: DrawTarget<Color = BinaryColor>> View<D> for Marker {
    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn draw(&self, canvas: &mut SubCanvas<'_, D>) {
        self.log.borrow_mut().push(format!("draw {}", self.name));
        let area = canvas.bounding_box();
        let _ = canvas.fill_solid(&area, BinaryColor::On);
    }

    fn handle_input(&mut self, _event: &UiEvent) -> bool {
        self.log.borrow_mut().push(format!("input {}", self.name));
        self.consumes
    }
}
