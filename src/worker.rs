//! The UI worker - the single-threaded loop that owns the display.
//!
//! One worker runs on the UI task for the life of the firmware:
//!
//! 1. [`step`](UiWorker::step) suspends until the [`Mailbox`] has events.
//! 2. It drains **all** queued events and hands them, oldest first, to the
//!    active screen.
//! 3. If any view handled an event (or the screen was invalidated), the
//!    screen is redrawn once and the frame is presented.
//!
//! All screen and view mutation happens here; the mailbox is the only
//! state touched from other contexts. Events arriving while no screen is
//! active are dropped.

use heapless::Vec;

use crate::canvas::Canvas;
use crate::config::{SWALLOW_WAKE_PRESS, UI_TICK_MS};
use crate::event::UiEvent;
use crate::power::DisplayPower;
use crate::queue::Mailbox;
use crate::screen::Screen;

/// Running counters, mostly for diagnostics and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WorkerStats {
    /// Events taken off the queue.
    pub events: u32,
    /// Events a view consumed.
    pub handled: u32,
    /// Events discarded because no screen was active.
    pub unrouted: u32,
    /// Completed screen redraws.
    pub redraws: u32,
}

/// Owns the canvas, the active screen, and the consumer side of the mailbox.
///
/// Creating a worker opens its mailbox; dropping it closes the mailbox so
/// producers see "not running" again.
pub struct UiWorker<'w, 'v, D: Canvas, const N: usize> {
    mailbox: &'w Mailbox<N>,
    canvas: D,
    active: Option<&'w mut dyn Screen<'v, D>>,
    power: DisplayPower,
    stats: WorkerStats,
}

impl<'w, 'v, D: Canvas, const N: usize> UiWorker<'w, 'v, D, N> {
    pub fn new(mailbox: &'w Mailbox<N>, canvas: D) -> Self {
        mailbox.open();
        info!("UI worker online");
        Self {
            mailbox,
            canvas,
            active: None,
            power: DisplayPower::from_config(),
            stats: WorkerStats::default(),
        }
    }

    /// Replace the display power policy.
    pub fn with_power(mut self, power: DisplayPower) -> Self {
        self.power = power;
        self
    }

    /// Queue an event for the next [`step`](Self::step). Never blocks.
    ///
    /// Other contexts should call [`Mailbox::post`] on the shared mailbox.
    pub fn add_event(&self, event: UiEvent) -> bool {
        self.mailbox.post(event)
    }

    /// Make `screen` the active display target and draw it.
    ///
    /// The previous screen, if any, is detached and handed back.
    pub fn set_screen(
        &mut self,
        screen: &'w mut dyn Screen<'v, D>,
    ) -> Option<&'w mut dyn Screen<'v, D>> {
        let previous = self.clear_screen();
        screen.attach();
        self.active = Some(screen);
        self.render();
        previous
    }

    /// Detach and hand back the active screen.
    pub fn clear_screen(&mut self) -> Option<&'w mut dyn Screen<'v, D>> {
        let previous = self.active.take()?;
        previous.detach();
        Some(previous)
    }

    pub fn screen(&self) -> Option<&dyn Screen<'v, D>> {
        match &self.active {
            Some(screen) => Some(&**screen),
            None => None,
        }
    }

    pub fn canvas(&self) -> &D {
        &self.canvas
    }

    pub fn stats(&self) -> WorkerStats {
        self.stats
    }

    pub fn display_on(&self) -> bool {
        self.power.is_on()
    }

    /// Wait for events, dispatch every queued one, redraw at most once.
    pub async fn step(&mut self) {
        loop {
            if self.try_step() {
                return;
            }
            self.mailbox.wait().await;
        }
    }

    /// Non-blocking [`step`](Self::step). Returns `false` if the queue was empty.
    pub fn try_step(&mut self) -> bool {
        let batch = self.mailbox.drain();
        if batch.is_empty() {
            return false;
        }
        self.process(batch);
        true
    }

    /// Step forever. The UI task's whole life.
    pub async fn run(&mut self) -> ! {
        loop {
            self.step().await;
        }
    }

    fn process(&mut self, batch: Vec<UiEvent, N>) {
        let mut dirty = false;

        for event in batch {
            self.stats.events = self.stats.events.wrapping_add(1);

            if event.is_user_activity() && self.power.activity() {
                self.set_panel_power(true);
                dirty = true;
                if SWALLOW_WAKE_PRESS {
                    continue;
                }
            }
            if event == UiEvent::Tick && self.power.tick(UI_TICK_MS) == Some(false) {
                self.set_panel_power(false);
            }

            let Some(screen) = self.active.as_deref_mut() else {
                self.stats.unrouted = self.stats.unrouted.wrapping_add(1);
                debug!("no active screen, dropping {}", event);
                continue;
            };
            if screen.handle_event(&event) {
                self.stats.handled = self.stats.handled.wrapping_add(1);
                dirty = true;
            }
        }

        let invalid = self.active.as_deref().is_some_and(|s| s.needs_redraw());
        if dirty || invalid {
            self.render();
        }
    }

    fn render(&mut self) {
        if !self.power.is_on() {
            return;
        }
        let Some(screen) = self.active.as_deref_mut() else {
            return;
        };

        screen.redraw(&mut self.canvas);
        self.stats.redraws = self.stats.redraws.wrapping_add(1);

        if self.canvas.present().is_err() {
            warn!("UI: frame flush failed");
        }
    }

    fn set_panel_power(&mut self, on: bool) {
        if self.canvas.set_powered(on).is_err() {
            warn!("UI: display power switch failed");
        }
    }
}

impl<D: Canvas, const N: usize> Drop for UiWorker<'_, '_, D, N> {
    fn drop(&mut self) {
        let _ = self.clear_screen();
        self.mailbox.close();
        info!("UI worker offline");
    }
}
