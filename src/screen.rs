//! Screens - ordered compositions of views bound to a region of the display.
//!
//! [`Composition`] holds the state every screen needs (its region, the
//! views in paint order, the area drawn last time, attach state).
//! [`Screen`] is the polymorphic face the worker talks to; concrete screens
//! embed a `Composition` and override the attach/detach hooks as needed.
//! A bare `Composition` is itself a usable screen.
//!
//! ## Ordering
//!
//! - Painting is front-to-back in insertion order: the first view added is
//!   drawn first, later views paint over it.
//! - Input goes the other way: the most recently added view gets the first
//!   chance, and propagation stops at the first view that handles it.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

use crate::canvas::{union, SubCanvas};
use crate::config::MAX_VIEWS;
use crate::error::Error;
use crate::event::UiEvent;
use crate::view::View;

/// The views of one screen, its display region, and its lifecycle state.
pub struct Composition<'v, D: DrawTarget> {
    area: Rectangle,
    background: D::Color,
    drawn_area: Option<Rectangle>,
    views: Vec<&'v mut dyn View<D>, MAX_VIEWS>,
    attached: bool,
    invalid: bool,
    full_clear: bool,
}

impl<'v, D: DrawTarget> Composition<'v, D> {
    /// Empty, detached screen covering `area` of the display.
    ///
    /// `background` is used to clear the previously drawn area on redraw.
    pub fn new(area: Rectangle, background: D::Color) -> Self {
        Self {
            area,
            background,
            drawn_area: None,
            views: Vec::new(),
            attached: false,
            invalid: true,
            full_clear: false,
        }
    }

    pub fn area(&self) -> Rectangle {
        self.area
    }

    /// Area covered by the last redraw, in display coordinates.
    pub fn drawn_area(&self) -> Option<Rectangle> {
        self.drawn_area
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    /// Whether the screen changed in a way that needs a redraw.
    pub fn needs_redraw(&self) -> bool {
        self.invalid
    }

    /// Force a redraw on the worker's next pass.
    pub fn invalidate(&mut self) {
        self.invalid = true;
    }

    /// Append a view to the end of the paint order.
    ///
    /// Works whether or not the screen is attached.
    pub fn add_view(&mut self, view: &'v mut dyn View<D>) -> Result<(), Error> {
        self.views.push(view).map_err(|_| Error::ViewCapacity)?;
        self.invalid = true;
        Ok(())
    }

    /// Take the view at `index` out of the screen, handing it back.
    pub fn remove_view(&mut self, index: usize) -> Option<&'v mut dyn View<D>> {
        if index >= self.views.len() {
            return None;
        }
        self.invalid = true;
        Some(self.views.remove(index))
    }

    /// Record an attach/detach transition. Returns `false` if nothing changed.
    pub(crate) fn set_attached(&mut self, attached: bool) -> bool {
        if self.attached == attached {
            return false;
        }
        self.attached = attached;
        if attached {
            // Whatever was on the display belongs to some other screen.
            self.invalid = true;
            self.full_clear = true;
        }
        true
    }

    /// Offer `event` to the views, newest first, until one handles it.
    pub fn dispatch(&mut self, event: &UiEvent) -> bool {
        self.views
            .iter_mut()
            .rev()
            .any(|view| view.handle_input(event))
    }

    /// Clear what was drawn last time and paint every view in order.
    ///
    /// The first redraw after an attach clears the whole screen area.
    /// Ignored while detached.
    pub fn redraw(&mut self, canvas: &mut D) {
        if !self.attached {
            warn!("redraw requested on a detached screen");
            return;
        }

        let stale = if self.full_clear {
            self.drawn_area = None;
            Some(self.area)
        } else {
            self.drawn_area.take()
        };
        if let Some(stale) = stale {
            if canvas.fill_solid(&stale, self.background).is_err() {
                warn!("UI: clearing screen area failed");
            }
        }
        self.full_clear = false;

        let mut drawn = Rectangle::zero();
        for view in self.views.iter() {
            let bounds = view.bounds();
            let placed = Rectangle::new(self.area.top_left + bounds.top_left, bounds.size);
            let mut sub = SubCanvas::with_clip(canvas, placed, self.area);
            drawn = union(drawn, sub.visible_area());
            view.draw(&mut sub);
        }

        self.drawn_area = if drawn.is_zero_sized() {
            None
        } else {
            Some(drawn)
        };
        self.invalid = false;
    }
}

/// A screen as seen by the UI worker.
///
/// Implementors only provide access to their [`Composition`]; every other
/// method has a default. Override [`on_attach`](Screen::on_attach) /
/// [`on_detach`](Screen::on_detach) for per-screen behaviour, or
/// [`handle_event`](Screen::handle_event) to intercept input before views.
pub trait Screen<'v, D: DrawTarget + 'v> {
    fn composition(&self) -> &Composition<'v, D>;

    fn composition_mut(&mut self) -> &mut Composition<'v, D>;

    /// Called after the screen becomes the active display target.
    fn on_attach(&mut self) {}

    /// Called after the screen stops being the active display target.
    fn on_detach(&mut self) {}

    /// Make this the active display target. Re-attaching is a no-op.
    fn attach(&mut self) {
        if self.composition_mut().set_attached(true) {
            debug!("screen attached");
            self.on_attach();
        } else {
            debug!("screen already attached");
        }
    }

    /// Stop receiving redraws. Views stay where they are.
    fn detach(&mut self) {
        if self.composition_mut().set_attached(false) {
            debug!("screen detached");
            self.on_detach();
        } else {
            debug!("screen already detached");
        }
    }

    fn is_attached(&self) -> bool {
        self.composition().is_attached()
    }

    fn add_view(&mut self, view: &'v mut dyn View<D>) -> Result<(), Error> {
        self.composition_mut().add_view(view)
    }

    fn needs_redraw(&self) -> bool {
        self.composition().needs_redraw()
    }

    /// Route an event to the views. Returns `true` if a redraw is needed.
    fn handle_event(&mut self, event: &UiEvent) -> bool {
        self.composition_mut().dispatch(event)
    }

    fn redraw(&mut self, canvas: &mut D) {
        self.composition_mut().redraw(canvas)
    }
}

impl<'v, D: DrawTarget + 'v> Screen<'v, D> for Composition<'v, D> {
    fn composition(&self) -> &Composition<'v, D> {
        self
    }

    fn composition_mut(&mut self) -> &mut Composition<'v, D> {
        self
    }
}
