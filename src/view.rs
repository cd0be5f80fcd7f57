//! The `View` trait - a drawable, input-capable widget owned by a screen.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::canvas::SubCanvas;
use crate::event::UiEvent;

/// A drawable unit of a screen.
///
/// Views never see the whole display: [`draw`](View::draw) receives a
/// [`SubCanvas`] whose origin is the view's top-left corner and which clips
/// to the part of the view lying inside its screen.
pub trait View<D: DrawTarget> {
    /// Region this view paints, relative to its screen's top-left corner.
    fn bounds(&self) -> Rectangle;

    /// Render current state. Must not block.
    fn draw(&self, canvas: &mut SubCanvas<'_, D>);

    /// Offer an event to the view.
    ///
    /// Return `true` if the event was consumed and changed what the view
    /// shows; the screen then stops propagating it and gets redrawn.
    fn handle_input(&mut self, _event: &UiEvent) -> bool {
        false
    }
}
