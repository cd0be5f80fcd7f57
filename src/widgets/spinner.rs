use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text as TextDrawable};

use super::{text_style, truncated, Text, ROW_HEIGHT};
use crate::canvas::SubCanvas;
use crate::event::UiEvent;
use crate::view::View;

/// Caption followed by "." / ".." / "..." cycling on every tick.
pub struct Spinner {
    origin: Point,
    width: u32,
    caption: Text,
    frame: u8,
    active: bool,
}

impl Spinner {
    pub fn new(origin: Point, width: u32, caption: &str) -> Self {
        Self {
            origin,
            width,
            caption: truncated(caption),
            frame: 0,
            active: true,
        }
    }

    pub fn frame(&self) -> u8 {
        self.frame
    }

    /// Stop or resume the animation. A stopped spinner ignores ticks.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn dots(&self) -> &'static str {
        match self.frame % 4 {
            0 => "",
            1 => ".",
            2 => "..",
            _ => "...",
        }
    }
}

impl<D: DrawTarget<Color = BinaryColor>> View<D> for Spinner {
    fn bounds(&self) -> Rectangle {
        Rectangle::new(self.origin, Size::new(self.width, ROW_HEIGHT))
    }

    fn draw(&self, canvas: &mut SubCanvas<'_, D>) {
        let style = text_style();
        let next = TextDrawable::with_baseline(&self.caption, Point::zero(), style, Baseline::Top)
            .draw(canvas)
            .unwrap_or(Point::zero());
        let _ = TextDrawable::with_baseline(self.dots(), next, style, Baseline::Top).draw(canvas);
    }

    fn handle_input(&mut self, event: &UiEvent) -> bool {
        if !self.active || *event != UiEvent::Tick {
            return false;
        }
        self.frame = self.frame.wrapping_add(1);
        true
    }
}
