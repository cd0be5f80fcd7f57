//! Debounced button tasks feeding the UI listener.
//!
//! Buttons are active-low with the internal pull-up enabled. A press and
//! its matching release each become one `ButtonNotification`.

use defmt::info;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_time::{Duration, Timer};
use screenloop::config::{BUTTON_DEBOUNCE_MS, EVENT_QUEUE_DEPTH};
use screenloop::{on_button_notification, ButtonId, ButtonNotification, Mailbox};

/// One task per physical button.
#[embassy_executor::task(pool_size = 3)]
pub async fn button_task(
    pin: AnyPin,
    button: ButtonId,
    mailbox: &'static Mailbox<EVENT_QUEUE_DEPTH>,
) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    let settle = Duration::from_millis(BUTTON_DEBOUNCE_MS);

    loop {
        btn.wait_for_falling_edge().await;
        Timer::after(settle).await;
        if !btn.is_low() {
            // bounce
            continue;
        }

        info!("Button {} down", button.0);
        on_button_notification(mailbox, ButtonNotification { button, pressed: true });

        btn.wait_for_rising_edge().await;
        Timer::after(settle).await;
        on_button_notification(mailbox, ButtonNotification { button, pressed: false });
    }
}
