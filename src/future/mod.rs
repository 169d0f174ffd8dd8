//! Asynchronous basic functionality.
//!
//! Please see the fundamental `async` and `await` keywords and the [async book]
//! for more information on asynchronous programming in Rust.
//!
//! [async book]: https://rust-lang.github.io/async-book/
//!
//! # Examples
//!
//! ```
//! use futures_aggregate::prelude::*;
//! use futures_aggregate::future::Eventual;
//! use futures_lite::future::block_on;
//! use std::future;
//!
//! fn main() {
//!     block_on(async {
//!         // Await multiple fallible futures.
//!         let a = future::ready(Ok::<_, &str>(1));
//!         let b = future::ready(Ok(2));
//!         let c = future::ready(Ok(3));
//!         assert_eq!([a, b, c].aggregate().await, Ok([1, 2, 3]));
//!
//!         // The first error is returned right away.
//!         let a = future::ready(Ok(1));
//!         let b = future::ready(Err("oh no"));
//!         assert_eq!(vec![a, b].aggregate().await, Err("oh no"));
//!
//!         // Plain values can be mixed with futures.
//!         let inputs = vec![
//!             Eventual::Future(future::ready(Ok::<_, &str>(42))),
//!             Eventual::Value(128),
//!         ];
//!         assert_eq!(inputs.aggregate().await, Ok(vec![42, 128]));
//!     })
//! }
//! ```
//!
//! # Semantics
//!
//! | Name              | Return signature             | When does it return?     |
//! | ---               | ---                          | ---                      |
//! | `Aggregate`       | `Result<Vec<T>, E>`          | Return on first `Err`, wait for all `Ok`
//! | `AggregateSparse` | `Result<Vec<Option<T>>, E>`  | Same, holes succeed with `None`
//!
//! Values are always returned in input order. Errors are returned in the
//! order futures complete: if the future at index 2 fails before the future
//! at index 0, the error from index 2 is returned.
//!
//! Creating an aggregate never polls its inputs. Each input is first polled
//! when the aggregate itself is first polled, and after that only when its
//! own waker fires. Once the aggregate returns, it must not be polled again.
//! Dropping the aggregate drops every future it holds; work that must outlive
//! it should be spawned as a task, and the task's handle passed in instead.
pub use aggregate::Aggregate;
pub use eventual::{Eventual, Settle};
pub use sparse::{AggregateSparse, Hole};

pub(crate) mod aggregate;
mod eventual;
mod sparse;
