//! Device-side UI wiring - OLED canvas, buttons, ticker, and screens.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Buttons**: 3 tactile switches with debouncing (UP, DOWN, SELECT)
//! - **Ticker**: posts `UiEvent::Tick` for animations and display auto-off

pub mod buttons;
pub mod display;

use defmt::{info, warn};
use embassy_nrf::peripherals::TWISPI0;
use embassy_nrf::twim::Twim;
use embassy_time::{Duration, Ticker};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use screenloop::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH, EVENT_QUEUE_DEPTH, UI_TICK_MS};
use screenloop::widgets::{Label, Menu, Spinner};
use screenloop::{Composition, Mailbox, Screen, UiEvent, View};
use static_cell::StaticCell;

/// The concrete canvas on this board.
pub type Panel = display::Oled<Twim<'static, TWISPI0>>;

/// Posts a tick every `UI_TICK_MS`.
#[embassy_executor::task]
pub async fn tick_task(mailbox: &'static Mailbox<EVENT_QUEUE_DEPTH>) -> ! {
    let mut ticker = Ticker::every(Duration::from_millis(UI_TICK_MS));
    loop {
        ticker.next().await;
        mailbox.post(UiEvent::Tick);
    }
}

/// Landing screen: title, main menu, activity indicator.
pub struct HomeScreen {
    base: Composition<'static, Panel>,
}

impl Screen<'static, Panel> for HomeScreen {
    fn composition(&self) -> &Composition<'static, Panel> {
        &self.base
    }

    fn composition_mut(&mut self) -> &mut Composition<'static, Panel> {
        &mut self.base
    }

    fn on_attach(&mut self) {
        info!("Home screen shown ({} views)", self.base.view_count());
    }

    fn on_detach(&mut self) {
        info!("Home screen hidden");
    }
}

/// Build the home screen once; views live for the rest of the firmware.
pub fn home_screen() -> &'static mut HomeScreen {
    static TITLE: StaticCell<Label> = StaticCell::new();
    static MENU: StaticCell<Menu<4>> = StaticCell::new();
    static BUSY: StaticCell<Spinner> = StaticCell::new();
    static HOME: StaticCell<HomeScreen> = StaticCell::new();

    let title = TITLE.init(Label::new(Point::new(0, 0), DISPLAY_WIDTH, "screenloop"));
    let menu = MENU.init({
        let mut menu = Menu::new(Rectangle::new(Point::new(0, 14), Size::new(DISPLAY_WIDTH, 40)));
        for item in ["Status", "Settings", "About"] {
            menu.push(item);
        }
        menu
    });
    let busy = BUSY.init(Spinner::new(Point::new(0, 54), DISPLAY_WIDTH, "Ready"));

    let home = HOME.init(HomeScreen {
        base: Composition::new(
            Rectangle::new(Point::zero(), Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)),
            BinaryColor::Off,
        ),
    });

    let views: [&'static mut dyn View<Panel>; 3] = [title, menu, busy];
    for view in views {
        if home.add_view(view).is_err() {
            warn!("Home screen is full");
        }
    }
    home
}
