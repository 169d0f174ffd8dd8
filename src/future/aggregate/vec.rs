use super::Aggregate as AggregateTrait;
use crate::utils::{self, trace, Outcome, OutputVec, PollState, WakerVec};

use core::fmt;
use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project::pin_project;

/// A future which waits for all futures to complete successfully, or returns
/// the first error.
///
/// This `struct` is created by the [`aggregate`] method on the [`Aggregate`] trait. See
/// its documentation for more.
///
/// [`aggregate`]: crate::future::Aggregate::aggregate
/// [`Aggregate`]: crate::future::Aggregate
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct Aggregate<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    /// Whether the future has resolved or rejected.
    outcome: Outcome,
    /// The number of futures which have not yet succeeded.
    pending: usize,
    /// The output data, to be returned after every future succeeded.
    items: OutputVec<T>,
    /// A structure holding the waker passed to the future, and the various
    /// sub-wakers passed to the contained futures.
    wakers: WakerVec,
    /// The individual poll state of each future.
    state: Box<[PollState]>,
    #[pin]
    /// The futures passed to the structure.
    futures: Vec<Fut>,
}

impl<Fut, T, E> Aggregate<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    #[inline]
    pub(crate) fn new(futures: Vec<Fut>) -> Self {
        let len = futures.len();
        Self {
            outcome: Outcome::Unset,
            pending: len,
            items: OutputVec::empty(len),
            wakers: WakerVec::new(len),
            state: utils::pending_slots(len),
            futures,
        }
    }
}

impl<Fut, T, E> AggregateTrait for Vec<Fut>
where
    Fut: IntoFuture<Output = Result<T, E>>,
{
    type Output = Vec<T>;
    type Error = E;
    type Future = Aggregate<Fut::IntoFuture, T, E>;

    fn aggregate(self) -> Self::Future {
        Aggregate::new(self.into_iter().map(IntoFuture::into_future).collect())
    }
}

impl<Fut, T, E> fmt::Debug for Aggregate<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.state.iter()).finish()
    }
}

impl<Fut, T, E> Future for Aggregate<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    type Output = Result<Vec<T>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        assert!(
            !this.outcome.is_terminal(),
            "Futures must not be polled after completing"
        );

        // Only visit the futures which were woken before this call. Anything
        // woken while we're polling wakes the parent, and is seen next time.
        let mut budget = {
            let mut readiness = this.wakers.readiness();
            readiness.set_waker(cx.waker());
            readiness.ready_count()
        };

        while budget > 0 {
            budget -= 1;

            // The lock is released before polling so the child may wake
            // itself without deadlocking.
            let Some(i) = this.wakers.readiness().next_ready() else {
                break;
            };
            if !this.state[i].is_pending() {
                continue;
            }

            let mut cx = Context::from_waker(this.wakers.get(i));
            let fut = utils::get_pin_mut_from_vec(this.futures.as_mut(), i);
            if let Poll::Ready(value) = fut.poll(&mut cx) {
                match value {
                    Ok(value) => {
                        this.items.write(i, value);
                        this.state[i].set_ready();
                        *this.pending -= 1;
                        trace!(slot = i, pending = *this.pending, "slot succeeded");
                    }
                    Err(err) => {
                        // Nothing was written for this slot, so it must not
                        // be marked as "ready".
                        this.state[i].set_consumed();
                        this.outcome.finalize(Outcome::Rejected);
                        trace!(slot = i, "slot failed, rejecting");
                        return Poll::Ready(Err(err));
                    }
                }
            }
        }

        // Check whether we're all done now or need to keep going.
        if *this.pending == 0 {
            this.outcome.finalize(Outcome::Resolved);
            for state in this.state.iter_mut() {
                debug_assert!(
                    state.is_ready(),
                    "Future should have reached a `Ready` state"
                );
                state.set_consumed();
            }
            trace!(len = this.state.len(), "resolved");
            Poll::Ready(Ok(this.items.take()))
        } else {
            Poll::Pending
        }
    }
}
