use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text as TextDrawable};

use super::{text_style, truncated, Text, ROW_HEIGHT};
use crate::canvas::SubCanvas;
use crate::view::View;

/// A single line of text. Ignores input.
pub struct Label {
    origin: Point,
    width: u32,
    text: Text,
}

impl Label {
    /// Label at `origin` (screen coordinates) clipped to `width` pixels.
    pub fn new(origin: Point, width: u32, text: &str) -> Self {
        Self {
            origin,
            width,
            text: truncated(text),
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Replace the text while the label is not on a screen.
    pub fn set_text(&mut self, text: &str) {
        self.text = truncated(text);
    }
}

impl<D: DrawTarget<Color = BinaryColor>> View<D> for Label {
    fn bounds(&self) -> Rectangle {
        Rectangle::new(self.origin, Size::new(self.width, ROW_HEIGHT))
    }

    fn draw(&self, canvas: &mut SubCanvas<'_, D>) {
        let _ = TextDrawable::with_baseline(&self.text, Point::zero(), text_style(), Baseline::Top)
            .draw(canvas);
    }
}
