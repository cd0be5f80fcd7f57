//! Drawing surfaces.
//!
//! The display is any `embedded-graphics` [`DrawTarget`]. [`Canvas`] adds the
//! two things the worker needs beyond pixels: pushing a finished frame to the
//! panel and switching the panel on or off. [`SubCanvas`] is the clipped,
//! origin-shifted region a single view draws into.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// A display the UI worker can render to.
pub trait Canvas: DrawTarget {
    /// Push the frame buffer to the panel. Unbuffered targets do nothing.
    fn present(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Switch the panel on or off.
    fn set_powered(&mut self, _on: bool) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A view's window onto its parent target.
///
/// Coordinates are relative to `origin`; pixels outside `clip` are
/// discarded before they reach the parent.
pub struct SubCanvas<'c, D> {
    parent: &'c mut D,
    area: Rectangle,
    clip: Rectangle,
}

impl<'c, D: DrawTarget> SubCanvas<'c, D> {
    /// Window covering `area` of `parent`, with nothing clipped beyond it.
    pub fn new(parent: &'c mut D, area: Rectangle) -> Self {
        Self::with_clip(parent, area, area)
    }

    /// Window whose origin is `area.top_left` but which only lets through
    /// pixels inside `clip` (in parent coordinates).
    pub fn with_clip(parent: &'c mut D, area: Rectangle, clip: Rectangle) -> Self {
        Self {
            parent,
            area,
            clip: area.intersection(&clip),
        }
    }

    /// Visible region in parent coordinates.
    pub fn visible_area(&self) -> Rectangle {
        self.clip
    }
}

impl<D: DrawTarget> Dimensions for SubCanvas<'_, D> {
    fn bounding_box(&self) -> Rectangle {
        Rectangle::new(Point::zero(), self.area.size)
    }
}

impl<D: DrawTarget> DrawTarget for SubCanvas<'_, D> {
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let origin = self.area.top_left;
        let clip = self.clip;
        self.parent.draw_iter(
            pixels
                .into_iter()
                .map(move |Pixel(p, c)| Pixel(p + origin, c))
                .filter(move |Pixel(p, _)| clip.contains(*p)),
        )
    }
}

/// Smallest rectangle covering both `a` and `b`. Empty inputs are ignored.
pub fn union(a: Rectangle, b: Rectangle) -> Rectangle {
    if a.is_zero_sized() {
        return b;
    }
    if b.is_zero_sized() {
        return a;
    }

    let top_left = a.top_left.component_min(b.top_left);
    let bottom_right = (a.top_left + a.size).component_max(b.top_left + b.size);
    let extent = bottom_right - top_left;
    Rectangle::new(top_left, Size::new(extent.x as u32, extent.y as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestCanvas;
    use embedded_graphics::pixelcolor::BinaryColor;

    fn rect(x: i32, y: i32, w: u32, h: u32) -> Rectangle {
        Rectangle::new(Point::new(x, y), Size::new(w, h))
    }

    #[test]
    fn union_covers_both_rectangles() {
        assert_eq!(union(rect(0, 0, 10, 10), rect(20, 5, 10, 20)), rect(0, 0, 30, 25));
        assert_eq!(union(rect(4, 4, 2, 2), rect(0, 0, 1, 1)), rect(0, 0, 6, 6));
    }

    #[test]
    fn union_ignores_empty_rectangles() {
        let r = rect(3, 3, 5, 5);
        assert_eq!(union(Rectangle::zero(), r), r);
        assert_eq!(union(r, rect(100, 100, 0, 0)), r);
    }

    #[test]
    fn sub_canvas_translates_into_parent() {
        let mut canvas = TestCanvas::new();
        {
            let mut sub = SubCanvas::new(&mut canvas, rect(10, 20, 8, 8));
            assert_eq!(sub.bounding_box(), rect(0, 0, 8, 8));
            let _ = Pixel(Point::new(1, 2), BinaryColor::On).draw(&mut sub);
        }
        assert!(canvas.is_lit(11, 22));
        assert_eq!(canvas.lit_count(), 1);
    }

    #[test]
    fn sub_canvas_drops_pixels_outside_clip() {
        let mut canvas = TestCanvas::new();
        {
            let mut sub = SubCanvas::with_clip(&mut canvas, rect(0, 0, 16, 16), rect(0, 0, 4, 4));
            let _ = sub.fill_solid(&rect(0, 0, 16, 16), BinaryColor::On);
        }
        assert_eq!(canvas.lit_count(), 16);
        assert!(!canvas.is_lit(5, 5));
    }
}
