use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project::pin_project;

/// An input which is either already available, or still pending.
///
/// Collections passed to [`Aggregate`][super::Aggregate] must hold a single
/// type. `Eventual` lets plain values sit next to futures: both are normalized
/// into a [`Settle`] future, so a plain value is observed the same way as a
/// future which happens to be ready on its first poll.
///
/// # Examples
///
/// ```
/// use futures_aggregate::future::Eventual;
/// use futures_aggregate::prelude::*;
/// use futures_lite::future::block_on;
/// use std::future;
///
/// block_on(async {
///     let inputs = vec![
///         Eventual::Future(future::ready(Ok::<_, &str>(42))),
///         Eventual::Value(128),
///     ];
///     assert_eq!(inputs.aggregate().await, Ok(vec![42, 128]));
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eventual<T, Fut> {
    /// A value which is available right away.
    Value(T),
    /// A future which will later succeed with a value, or fail.
    Future(Fut),
}

impl<T, E, Fut> IntoFuture for Eventual<T, Fut>
where
    Fut: IntoFuture<Output = Result<T, E>>,
{
    type Output = Result<T, E>;
    type IntoFuture = Settle<T, Fut::IntoFuture>;

    fn into_future(self) -> Self::IntoFuture {
        let inner = match self {
            Eventual::Value(value) => Inner::Value(Some(value)),
            Eventual::Future(fut) => Inner::Future(fut.into_future()),
        };
        Settle { inner }
    }
}

/// The normalized form of an [`Eventual`].
///
/// This `struct` is created by calling [`IntoFuture::into_future`] on an
/// [`Eventual`]. A plain value succeeds on the first poll.
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
#[derive(Debug)]
pub struct Settle<T, Fut> {
    #[pin]
    inner: Inner<T, Fut>,
}

#[pin_project(project = InnerProj)]
#[derive(Debug)]
enum Inner<T, Fut> {
    Value(Option<T>),
    Future(#[pin] Fut),
}

impl<T, E, Fut> Future for Settle<T, Fut>
where
    Fut: Future<Output = Result<T, E>>,
{
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project().inner.project() {
            InnerProj::Value(value) => match value.take() {
                Some(value) => Poll::Ready(Ok(value)),
                None => panic!("`Settle` polled after completion"),
            },
            InnerProj::Future(fut) => fut.poll(cx),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::future::Aggregate;

    use std::future;

    #[test]
    fn value_settles_ok() {
        futures_lite::future::block_on(async {
            let input: Eventual<_, future::Ready<Result<u8, ()>>> = Eventual::Value(3);
            assert_eq!(input.await, Ok(3));
        });
    }

    #[test]
    fn future_is_forwarded() {
        futures_lite::future::block_on(async {
            let input: Eventual<u8, _> = Eventual::Future(future::ready(Err("nope")));
            assert_eq!(input.await, Err("nope"));
        });
    }

    #[test]
    fn mixed_inputs() {
        futures_lite::future::block_on(async {
            let inputs = vec![
                Eventual::Future(future::ready(Ok::<_, ()>("timeout"))),
                Eventual::Value("42"),
                Eventual::Value("128"),
            ];
            assert_eq!(inputs.aggregate().await, Ok(vec!["timeout", "42", "128"]));
        });
    }

    #[test]
    fn falsy_error_still_rejects() {
        futures_lite::future::block_on(async {
            let inputs = [Eventual::Value(1), Eventual::Future(future::ready(Err(0)))];
            assert_eq!(inputs.aggregate().await, Err(0));
        });
    }
}
