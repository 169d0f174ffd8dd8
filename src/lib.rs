//! Wait for every [`Future`][core::future::Future] in a collection to
//! succeed, or return the first failure the moment it happens.
//!
//! This is the async Rust counterpart of "wait for all" promise combinators:
//! a fixed, ordered collection of eventual values goes in, and a single
//! future comes out. It resolves to every value in input order, or to the
//! error of whichever input failed first.
//!
//! # Operations
//!
//! This library provides the following operations on arrays and vecs:
//!
//! - [`future::Aggregate`]: Wait for all futures to succeed, or return the first error.
//! - [`future::AggregateSparse`]: Like `Aggregate`, for collections with holes.
//! - [`aggregate`]: Collect any iterator of inputs and aggregate them.
//!
//! # Examples
//!
//! Concurrently await multiple fallible futures:
//! ```rust
//! use futures_aggregate::prelude::*;
//! use futures_lite::future::block_on;
//! use std::future;
//!
//! block_on(async {
//!     let a = future::ready(Ok::<_, &str>(1u8));
//!     let b = future::ready(Ok(2u8));
//!     let c = future::ready(Ok(3u8));
//!     assert_eq!(vec![a, b, c].aggregate().await, Ok(vec![1, 2, 3]));
//! })
//! ```
//!
//! Mix plain values with futures, and leave holes:
//! ```rust
//! use futures_aggregate::future::Eventual;
//! use futures_aggregate::prelude::*;
//! use futures_lite::future::block_on;
//! use std::future;
//!
//! block_on(async {
//!     let inputs = [
//!         Some(Eventual::Future(future::ready(Ok::<_, &str>(42)))),
//!         None,
//!         Some(Eventual::Value(128)),
//!     ];
//!     assert_eq!(
//!         inputs.aggregate_sparse().await,
//!         Ok([Some(42), None, Some(128)])
//!     );
//! })
//! ```
//!
//! # Features
//!
//! - `std` (default): use the standard library.
//! - `tracing`: emit `trace`-level events with the target `futures_aggregate`
//!   as slots settle and aggregates finish. Error values are never recorded.

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

use core::future::IntoFuture;

mod utils;

/// The futures aggregate prelude.
pub mod prelude {
    pub use super::future::Aggregate as _;
    pub use super::future::AggregateSparse as _;
}

pub mod future;

/// Helper functions and types for fixed-length arrays.
pub mod array {
    pub use crate::future::aggregate::array::Aggregate;
}

/// Helper functions and types for contiguous growable array type with heap-allocated contents,
/// written `Vec<T>`.
pub mod vec {
    pub use crate::future::aggregate::vec::Aggregate;
}

/// Wait for every input collected from an iterator to complete successfully,
/// or return the first error.
///
/// Each item is normalized with [`IntoFuture`], so a mix of ready and pending
/// values can be passed by wrapping them in [`Eventual`][crate::future::Eventual].
/// An empty iterator resolves to an empty `Vec`.
///
/// # Examples
///
/// ```
/// use futures_aggregate::future::Eventual;
/// use futures_lite::future::block_on;
/// use std::future;
///
/// block_on(async {
///     let inputs = vec![
///         Eventual::Future(future::ready(Ok::<_, ()>(1))),
///         Eventual::Value(2),
///     ];
///     let values = futures_aggregate::aggregate(inputs).await;
///     assert_eq!(values, Ok(vec![1, 2]));
/// });
/// ```
pub fn aggregate<I, Fut, T, E>(inputs: I) -> vec::Aggregate<Fut::IntoFuture, T, E>
where
    I: IntoIterator<Item = Fut>,
    Fut: IntoFuture<Output = Result<T, E>>,
{
    vec::Aggregate::new(inputs.into_iter().map(IntoFuture::into_future).collect())
}
