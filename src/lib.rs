//! screenloop - screen/view UI core for small embedded displays.
//!
//! Hardware button notifications are translated into [`UiEvent`]s and
//! posted to a [`Mailbox`]. A single [`UiWorker`] drains the mailbox,
//! routes events to the active [`Screen`], and redraws it onto a
//! [`Canvas`] when a [`View`] reports a visible change.
//!
//! ```text
//! button task ──post──► Mailbox ──drain──► UiWorker ──► Screen ──► View(s)
//!                                              │                      │
//!                                              └──── redraw ◄─────────┘
//!                                                       │
//!                                                    Canvas (SSD1306)
//! ```
//!
//! Everything here is `no_std`, allocation-free, and runs on the host for
//! testing: `cargo test`. The firmware lives in `main.rs` behind the
//! `embedded` feature.

#![cfg_attr(not(test), no_std)]

// Must come first: the logging macros are textually scoped.
mod fmt;

pub mod canvas;
pub mod config;
pub mod error;
pub mod event;
pub mod ingest;
pub mod power;
pub mod queue;
pub mod screen;
pub mod view;
pub mod widgets;
pub mod worker;

#[cfg(test)]
mod test_support;

pub use canvas::{Canvas, SubCanvas};
pub use error::Error;
pub use event::{ButtonId, UiEvent};
pub use ingest::{on_button_notification, ButtonNotification};
pub use queue::Mailbox;
pub use screen::{Composition, Screen};
pub use view::View;
pub use worker::{UiWorker, WorkerStats};
