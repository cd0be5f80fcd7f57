use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text as TextDrawable};
use heapless::Vec;

use super::{text_style, truncated, Text, ROW_HEIGHT};
use crate::canvas::SubCanvas;
use crate::event::{ButtonId, UiEvent};
use crate::view::View;

/// Move selection cursor one item up.
pub fn select_prev(selected: usize) -> usize {
    selected.saturating_sub(1)
}

/// Move selection cursor one item down if another item exists.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if selected + 1 < item_count {
        selected + 1
    } else {
        selected
    }
}

/// Vertical list with a `>` cursor.
///
/// UP / DOWN move the cursor (clamped at the ends), SELECT confirms the
/// highlighted entry. The list scrolls so the cursor stays visible.
pub struct Menu<const N: usize> {
    bounds: Rectangle,
    items: Vec<Text, N>,
    selected: usize,
    confirmed: Option<usize>,
}

impl<const N: usize> Menu<N> {
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            items: Vec::new(),
            selected: 0,
            confirmed: None,
        }
    }

    /// Append an entry. Returns `false` if the menu is full.
    pub fn push(&mut self, item: &str) -> bool {
        self.items.push(truncated(item)).is_ok()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Index of the entry last confirmed with SELECT.
    pub fn confirmed(&self) -> Option<usize> {
        self.confirmed
    }

    fn visible_rows(&self) -> usize {
        (self.bounds.size.height / ROW_HEIGHT).max(1) as usize
    }

    fn first_visible(&self) -> usize {
        let rows = self.visible_rows();
        if self.selected < rows {
            0
        } else {
            self.selected + 1 - rows
        }
    }
}

impl<D: DrawTarget<Color = BinaryColor>, const N: usize> View<D> for Menu<N> {
    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn draw(&self, canvas: &mut SubCanvas<'_, D>) {
        let first = self.first_visible();
        let rows = self.visible_rows();

        for (row, (index, name)) in self.items.iter().enumerate().skip(first).take(rows).enumerate() {
            let marker = if index == self.selected { ">" } else { " " };
            let mut line: heapless::String<32> = heapless::String::new();
            let _ = line.push_str(marker);
            let _ = line.push_str(" ");
            let _ = line.push_str(name.as_str());
            if self.confirmed == Some(index) {
                let _ = line.push_str(" *");
            }
            let y = row as i32 * ROW_HEIGHT as i32;
            let _ = TextDrawable::with_baseline(&line, Point::new(0, y), text_style(), Baseline::Top)
                .draw(canvas);
        }
    }

    fn handle_input(&mut self, event: &UiEvent) -> bool {
        let Some(button) = event.pressed() else {
            return false;
        };
        if self.items.is_empty() {
            return false;
        }

        let before = (self.selected, self.confirmed);
        match button {
            ButtonId::UP => self.selected = select_prev(self.selected),
            ButtonId::DOWN => self.selected = select_next(self.selected, self.items.len()),
            ButtonId::SELECT => self.confirmed = Some(self.selected),
            _ => return false,
        }
        (self.selected, self.confirmed) != before
    }
}
