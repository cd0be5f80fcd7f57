//! Stock views for a 128x64 monochrome OLED.
//!
//! - [`Label`]   - a line of static text
//! - [`Menu`]    - a selectable list driven by UP / DOWN / SELECT
//! - [`Spinner`] - a caption with tick-animated dots

mod label;
mod menu;
mod spinner;

pub use label::Label;
pub use menu::{select_next, select_prev, Menu};
pub use spinner::Spinner;

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;

/// Height of one text row with `FONT_6X10`.
pub const ROW_HEIGHT: u32 = 10;

/// Longest text a widget keeps (bytes).
pub const TEXT_CAPACITY: usize = 24;

pub type Text = heapless::String<TEXT_CAPACITY>;

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

/// Copy `s` into a fixed-capacity string, truncating on a char boundary.
pub fn truncated(s: &str) -> Text {
    let mut out = Text::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
