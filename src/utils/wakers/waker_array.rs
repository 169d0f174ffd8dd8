use core::array;
use core::task::Waker;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{InlineWaker, Readiness};

/// A fixed-size collection of wakers which delegate to an in-line waker.
pub(crate) struct WakerArray<const N: usize> {
    wakers: [Waker; N],
    readiness: Arc<Mutex<Readiness>>,
}

impl<const N: usize> WakerArray<N> {
    /// Create a new instance of `WakerArray`.
    pub(crate) fn new() -> Self {
        let readiness = Arc::new(Mutex::new(Readiness::new(N)));
        Self {
            wakers: array::from_fn(|i| Arc::new(InlineWaker::new(i, readiness.clone())).into()),
            readiness,
        }
    }

    /// Get the waker handed to the future at `index`.
    pub(crate) fn get(&self, index: usize) -> &Waker {
        &self.wakers[index]
    }

    /// Access the `Readiness`.
    pub(crate) fn readiness(&self) -> MutexGuard<'_, Readiness> {
        self.readiness
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
