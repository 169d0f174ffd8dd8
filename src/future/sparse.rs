use super::aggregate::{array, vec};
use super::Aggregate;

use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project::pin_project;

/// Wait for all futures in a sequence with holes to complete successfully,
/// or return the first error.
///
/// A hole is a `None` element. Every position is visited, holes included: a
/// hole succeeds right away with `None`, and every other position succeeds
/// with `Some(value)`. The output always has the same length as the input.
pub trait AggregateSparse {
    /// The resulting output type.
    type Output;

    /// The resulting error type.
    type Error;

    /// Which kind of future are we turning this into?
    type Future: Future<Output = Result<Self::Output, Self::Error>>;

    /// Waits for multiple, possibly absent, futures to complete successfully.
    ///
    /// # Examples
    ///
    /// ```
    /// use futures_aggregate::prelude::*;
    /// use futures_lite::future::block_on;
    /// use std::future;
    ///
    /// block_on(async {
    ///     let inputs = vec![Some(future::ready(Ok::<_, ()>(1))), None, Some(future::ready(Ok(3)))];
    ///     assert_eq!(inputs.aggregate_sparse().await, Ok(vec![Some(1), None, Some(3)]));
    /// });
    /// ```
    fn aggregate_sparse(self) -> Self::Future;
}

impl<Fut, T, E> AggregateSparse for Vec<Option<Fut>>
where
    Fut: IntoFuture<Output = Result<T, E>>,
{
    type Output = Vec<Option<T>>;
    type Error = E;
    type Future = vec::Aggregate<Hole<Fut::IntoFuture>, Option<T>, E>;

    fn aggregate_sparse(self) -> Self::Future {
        self.into_iter()
            .map(|input| Hole::new(input.map(IntoFuture::into_future)))
            .collect::<Vec<_>>()
            .aggregate()
    }
}

impl<Fut, T, E, const N: usize> AggregateSparse for [Option<Fut>; N]
where
    Fut: IntoFuture<Output = Result<T, E>>,
{
    type Output = [Option<T>; N];
    type Error = E;
    type Future = array::Aggregate<Hole<Fut::IntoFuture>, Option<T>, E, N>;

    fn aggregate_sparse(self) -> Self::Future {
        self.map(|input| Hole::new(input.map(IntoFuture::into_future)))
            .aggregate()
    }
}

/// One position of a sequence with holes.
///
/// Succeeds with `None` for a hole, and with `Some(value)` once a present
/// future succeeds.
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
#[derive(Debug)]
pub struct Hole<Fut> {
    #[pin]
    inner: Option<Fut>,
}

impl<Fut> Hole<Fut> {
    /// Wrap a possibly absent future.
    pub fn new(inner: Option<Fut>) -> Self {
        Self { inner }
    }
}

impl<Fut, T, E> Future for Hole<Fut>
where
    Fut: Future<Output = Result<T, E>>,
{
    type Output = Result<Option<T>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project().inner.as_pin_mut() {
            Some(fut) => fut.poll(cx).map_ok(Some),
            None => Poll::Ready(Ok(None)),
        }
    }
}
