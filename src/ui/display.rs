//! SSD1306 OLED as a UI canvas.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use screenloop::{Canvas, Error};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Buffered SSD1306 the UI worker renders into.
pub struct Oled<I2C>(Display<I2C>);

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Result<Oled<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::Display)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    Ok(Oled(display))
}

impl<I2C> OriginDimensions for Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn size(&self) -> Size {
        self.0.size()
    }
}

impl<I2C> DrawTarget for Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Color = BinaryColor;
    type Error = <Display<I2C> as DrawTarget>::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.0.draw_iter(pixels)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.0.fill_solid(area, color)
    }
}

impl<I2C> Canvas for Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn present(&mut self) -> Result<(), Self::Error> {
        self.0.flush()
    }

    fn set_powered(&mut self, on: bool) -> Result<(), Self::Error> {
        self.0.set_display_on(on)
    }
}
