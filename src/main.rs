//! screenloop firmware - nRF52840 + SSD1306 + three buttons.
//!
//! Tasks:
//!   - `ui_task`      - owns the display and runs the UI worker forever
//!   - `button_task`  - one per button, posts press/release notifications
//!   - `tick_task`    - periodic tick for animations and display auto-off
//!
//! All producers talk to the UI through `UI_EVENTS`; nothing else is shared.

#![no_std]
#![no_main]

mod ui;

use defmt::{error, info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::Pin;
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use screenloop::config::EVENT_QUEUE_DEPTH;
use screenloop::{ButtonId, Mailbox, UiWorker};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// Events for the UI task. Closed until the worker starts.
static UI_EVENTS: Mailbox<EVENT_QUEUE_DEPTH> = Mailbox::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("screenloop starting");
    let p = embassy_nrf::init(Default::default());

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let panel = match ui::display::init(i2c) {
        Ok(panel) => panel,
        Err(e) => {
            error!("Display init failed: {}", e);
            return;
        }
    };

    unwrap!(spawner.spawn(ui_task(panel)));
    unwrap!(spawner.spawn(ui::buttons::button_task(p.P0_11.degrade(), ButtonId::UP, &UI_EVENTS)));
    unwrap!(spawner.spawn(ui::buttons::button_task(p.P0_12.degrade(), ButtonId::DOWN, &UI_EVENTS)));
    unwrap!(spawner.spawn(ui::buttons::button_task(p.P0_24.degrade(), ButtonId::SELECT, &UI_EVENTS)));
    unwrap!(spawner.spawn(ui::tick_task(&UI_EVENTS)));
}

/// UI thread: build the worker, show the home screen, step forever.
#[embassy_executor::task]
async fn ui_task(panel: ui::Panel) -> ! {
    let mut worker = UiWorker::new(&UI_EVENTS, panel);
    worker.set_screen(ui::home_screen());
    worker.run().await
}
