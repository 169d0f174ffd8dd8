use std::sync::{Arc, Mutex, PoisonError};
use std::task::Wake;

use super::Readiness;

/// An efficient waker which delegates wake events.
#[derive(Debug, Clone)]
pub(crate) struct InlineWaker {
    pub(crate) id: usize,
    pub(crate) readiness: Arc<Mutex<Readiness>>,
}

impl InlineWaker {
    /// Create a new instance of `InlineWaker`.
    pub(crate) fn new(id: usize, readiness: Arc<Mutex<Readiness>>) -> Self {
        Self { id, readiness }
    }
}

impl Wake for InlineWaker {
    fn wake(self: Arc<Self>) {
        self.wake_by_ref()
    }

    fn wake_by_ref(self: &Arc<Self>) {
        let mut readiness = self
            .readiness
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if !readiness.set_ready(self.id) {
            // The parent is only missing if we're woken before the first poll,
            // in which case every slot is already queued.
            if let Some(parent) = readiness.parent_waker() {
                parent.wake_by_ref();
            }
        }
    }
}
