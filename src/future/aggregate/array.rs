use super::Aggregate as AggregateTrait;
use crate::utils::{self, trace, Outcome, OutputArray, PollState, WakerArray};

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
pub struct Aggregate<Fut, T, E, const N: usize>
where
    Fut: Future<Output = Result<T, E>>,
{
    outcome: Outcome,
    pending: usize,
    items: OutputArray<T, N>,
    wakers: WakerArray<N>,
    state: [PollState; N],
    #[pin]
    futures: [Fut; N],
}

impl<Fut, T, E, const N: usize> Aggregate<Fut, T, E, N>
where
    Fut: Future<Output = Result<T, E>>,
{
    #[inline]
    pub(crate) fn new(futures: [Fut; N]) -> Self {
        Self {
            outcome: Outcome::Unset,
            pending: N,
            items: OutputArray::empty(),
            wakers: WakerArray::new(),
            state: [PollState::Pending; N],
            futures,
        }
    }
}

impl<Fut, T, E, const N: usize> AggregateTrait for [Fut; N]
where
    Fut: IntoFuture<Output = Result<T, E>>,
{
    type Output = [T; N];
    type Error = E;
    type Future = Aggregate<Fut::IntoFuture, T, E, N>;

    fn aggregate(self) -> Self::Future {
        Aggregate::new(self.map(IntoFuture::into_future))
    }
}

impl<Fut, T, E, const N: usize> fmt::Debug for Aggregate<Fut, T, E, N>
where
    Fut: Future<Output = Result<T, E>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.state.iter()).finish()
    }
}

impl<Fut, T, E, const N: usize> Future for Aggregate<Fut, T, E, N>
where
    Fut: Future<Output = Result<T, E>>,
{
    type Output = Result<[T; N], E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        assert!(
            !this.outcome.is_terminal(),
            "Futures must not be polled after completing"
        );

        let mut budget = {
            let mut readiness = this.wakers.readiness();
            readiness.set_waker(cx.waker());
            readiness.ready_count()
        };

        let mut futures: Pin<&mut [Fut]> = this.futures;
        while budget > 0 {
            budget -= 1;

            let Some(i) = this.wakers.readiness().next_ready() else {
                break;
            };
            if !this.state[i].is_pending() {
                continue;
            }

            let mut cx = Context::from_waker(this.wakers.get(i));
            let fut = utils::get_pin_mut(futures.as_mut(), i);
            if let Poll::Ready(value) = fut.poll(&mut cx) {
                match value {
                    Ok(value) => {
                        this.items.write(i, value);
                        this.state[i].set_ready();
                        *this.pending -= 1;
                        trace!(slot = i, pending = *this.pending, "slot succeeded");
                    }
                    Err(err) => {
                        this.state[i].set_consumed();
                        this.outcome.finalize(Outcome::Rejected);
                        trace!(slot = i, "slot failed, rejecting");
                        return Poll::Ready(Err(err));
                    }
                }
            }
        }

        if *this.pending == 0 {
            this.outcome.finalize(Outcome::Resolved);
            for state in this.state.iter_mut() {
                debug_assert!(
                    state.is_ready(),
                    "Future should have reached a `Ready` state"
                );
                state.set_consumed();
            }
            trace!(len = N, "resolved");
            Poll::Ready(Ok(this.items.take()))
        } else {
            Poll::Pending
        }
    }
}
