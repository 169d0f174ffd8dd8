use core::task::Waker;
use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

/// Tracks which wakers are "ready" and should be polled, in the order in
/// which they were woken.
#[derive(Debug)]
pub(crate) struct Readiness {
    queued: FixedBitSet,
    queue: VecDeque<usize>,
    parent_waker: Option<Waker>,
}

impl Readiness {
    /// Create a new instance of readiness.
    ///
    /// Every index starts out ready, queued in index order.
    pub(crate) fn new(len: usize) -> Self {
        let mut queued = FixedBitSet::with_capacity(len);
        queued.insert_range(..);
        Self {
            queued,
            queue: (0..len).collect(),
            parent_waker: None,
        }
    }

    /// Set the ready state to `true` for the given index, queueing it behind
    /// every index that was woken before it.
    ///
    /// Returns the old ready state for this index.
    pub(crate) fn set_ready(&mut self, index: usize) -> bool {
        if self.queued.put(index) {
            true
        } else {
            self.queue.push_back(index);
            false
        }
    }

    /// Take the index that was woken the earliest, clearing its ready state.
    pub(crate) fn next_ready(&mut self) -> Option<usize> {
        let index = self.queue.pop_front()?;
        self.queued.set(index, false);
        Some(index)
    }

    /// The number of indexes currently waiting to be polled.
    pub(crate) fn ready_count(&self) -> usize {
        self.queue.len()
    }

    /// Access the parent waker.
    #[inline]
    pub(crate) fn parent_waker(&self) -> Option<&Waker> {
        self.parent_waker.as_ref()
    }

    /// Set the parent `Waker`. This needs to be called at the start of every
    /// `poll` function.
    pub(crate) fn set_waker(&mut self, parent_waker: &Waker) {
        match &mut self.parent_waker {
            Some(prev) => prev.clone_from(parent_waker),
            None => self.parent_waker = Some(parent_waker.clone()),
        }
    }
}
