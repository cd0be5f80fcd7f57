//! Button-bus listener: turns hardware notifications into UI events.
//!
//! Runs in the producer context (GPIO task or interrupt-side dispatcher),
//! never on the UI worker.

use crate::event::{ButtonId, UiEvent};
use crate::queue::Mailbox;

/// Raw notification from the button driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonNotification {
    pub button: ButtonId,
    pub pressed: bool,
}

impl From<ButtonNotification> for UiEvent {
    fn from(n: ButtonNotification) -> Self {
        if n.pressed {
            UiEvent::button_pressed(n.button)
        } else {
            UiEvent::button_released(n.button)
        }
    }
}

/// Forward a button notification to the UI worker.
///
/// If no worker is running yet the notification is ignored. Either way the
/// listener reports `false` (not consumed) so other listeners on the button
/// bus still receive it.
pub fn on_button_notification<const N: usize>(
    mailbox: &Mailbox<N>,
    notification: ButtonNotification,
) -> bool {
    if !mailbox.post(notification.into()) {
        debug!("UI not running, ignoring {}", notification);
    }
    false
}
