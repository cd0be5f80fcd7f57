//! The UI mailbox - the only structure shared across execution contexts.
//!
//! Producers (button tasks, the ticker, interrupt-side listeners) call
//! [`Mailbox::post`]; the single UI worker drains it. The mailbox also
//! records whether a worker currently exists: posting to a mailbox whose
//! worker has not been constructed yet (or was torn down) is a silent no-op.
//!
//! Overflow policy: the queue is bounded and drops its **oldest** event to
//! make room for a new one.

use core::cell::RefCell;
use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;
use heapless::{Deque, Vec};

use crate::event::UiEvent;

struct Inbox<const N: usize> {
    events: Deque<UiEvent, N>,
    overflowed: u32,
}

/// Bounded, oldest-drop FIFO of [`UiEvent`]s plus the worker's "online" flag.
pub struct Mailbox<const N: usize> {
    inbox: Mutex<CriticalSectionRawMutex, RefCell<Inbox<N>>>,
    ready: Signal<CriticalSectionRawMutex, ()>,
    online: AtomicBool,
}

impl<const N: usize> Mailbox<N> {
    /// Create a closed, empty mailbox. Usable in a `static`.
    pub const fn new() -> Self {
        Self {
            inbox: Mutex::new(RefCell::new(Inbox {
                events: Deque::new(),
                overflowed: 0,
            })),
            ready: Signal::new(),
            online: AtomicBool::new(false),
        }
    }

    /// Mark a worker as present; posts are accepted from now on.
    pub fn open(&self) {
        self.inbox.lock(|_| self.online.store(true, Ordering::Release));
    }

    /// Mark the worker as gone and discard anything still queued.
    ///
    /// The flag flips under the inbox lock, so no post can slip in between
    /// the flag and the clear.
    pub fn close(&self) {
        self.inbox.lock(|inbox| {
            self.online.store(false, Ordering::Release);
            inbox.borrow_mut().events.clear();
        });
        self.ready.reset();
    }

    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::Acquire)
    }

    /// Enqueue an event. Never blocks.
    ///
    /// Returns `false` when no worker is online (the event is ignored).
    /// A full queue loses its oldest entry.
    pub fn post(&self, event: UiEvent) -> bool {
        let posted = self.inbox.lock(|inbox| {
            if !self.online.load(Ordering::Acquire) {
                return None;
            }
            let mut inbox = inbox.borrow_mut();
            let evicted = if inbox.events.is_full() {
                inbox.overflowed = inbox.overflowed.saturating_add(1);
                inbox.events.pop_front()
            } else {
                None
            };
            let _ = inbox.events.push_back(event);
            Some(evicted)
        });

        let Some(evicted) = posted else {
            return false;
        };
        if let Some(old) = evicted {
            warn!("UI queue full, dropped oldest event {}", old);
        }

        self.ready.signal(());
        true
    }

    /// Take every queued event, oldest first.
    pub fn drain(&self) -> Vec<UiEvent, N> {
        self.inbox.lock(|inbox| {
            let mut inbox = inbox.borrow_mut();
            let mut batch = Vec::new();
            while let Some(event) = inbox.events.pop_front() {
                let _ = batch.push(event);
            }
            batch
        })
    }

    /// Suspend until something has been posted since the last wake-up.
    ///
    /// May return spuriously; callers re-check with [`drain`](Self::drain).
    pub async fn wait(&self) {
        self.ready.wait().await
    }

    pub fn len(&self) -> usize {
        self.inbox.lock(|inbox| inbox.borrow().events.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of events lost to overflow since creation.
    pub fn overflowed(&self) -> u32 {
        self.inbox.lock(|inbox| inbox.borrow().overflowed)
    }
}

impl<const N: usize> Default for Mailbox<N> {
    fn default() -> Self {
        Self::new()
    }
}
