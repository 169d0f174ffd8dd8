use core::future::Future;

pub(crate) mod array;
pub(crate) mod vec;

/// Wait for all futures to complete successfully, or return the first error.
///
/// Awaits multiple fallible futures simultaneously. Their values are returned
/// in input order once every future has succeeded. The moment any future
/// fails, its error is returned without waiting for the rest.
pub trait Aggregate {
    /// The resulting output type.
    type Output;

    /// The resulting error type.
    type Error;

    /// Which kind of future are we turning this into?
    type Future: Future<Output = Result<Self::Output, Self::Error>>;

    /// Waits for multiple futures to complete successfully.
    ///
    /// Awaits multiple futures simultaneously, returning the output of the
    /// futures in input order once all of them succeed.
    ///
    /// If any future fails, the error of whichever future failed first is
    /// returned immediately. "First" is decided by the order in which futures
    /// complete, not by their position in the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use futures_aggregate::prelude::*;
    /// use futures_lite::future::block_on;
    /// use std::future;
    ///
    /// block_on(async {
    ///     let a = future::ready(Ok::<_, &str>(1));
    ///     let b = future::ready(Ok(2));
    ///     assert_eq!(vec![a, b].aggregate().await, Ok(vec![1, 2]));
    ///
    ///     let a = future::ready(Ok(1));
    ///     let b = future::ready(Err("oh no"));
    ///     assert_eq!(vec![a, b].aggregate().await, Err("oh no"));
    /// });
    /// ```
    fn aggregate(self) -> Self::Future;
}
