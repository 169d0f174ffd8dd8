//! Pin safety tests: a future must never move once the aggregate has
//! polled it, however many times it yields and however it settles.

use std::{
    future::Future,
    marker::PhantomPinned,
    pin::Pin,
    task::{Context, Poll},
};

use futures_aggregate::prelude::*;

/// Yields `remaining` times, then settles with `result`. Panics if it is
/// moved between polls.
struct PinCheckFuture {
    self_ptr: Option<*const Self>,
    remaining: usize,
    result: Option<Result<usize, usize>>,
    _pinned: PhantomPinned,
}

impl PinCheckFuture {
    fn ok_after(polls: usize) -> Self {
        Self::settle_after(polls, Ok(polls))
    }

    fn settle_after(polls: usize, result: Result<usize, usize>) -> Self {
        Self {
            self_ptr: None,
            remaining: polls,
            result: Some(result),
            _pinned: PhantomPinned,
        }
    }
}

impl Future for PinCheckFuture {
    type Output = Result<usize, usize>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = unsafe { self.get_unchecked_mut() };
        let current = this as *const Self;
        let stored = *this.self_ptr.get_or_insert(current);
        assert_eq!(stored, current, "moved after pinning");

        if this.remaining > 0 {
            this.remaining -= 1;
            cx.waker().wake_by_ref();
            Poll::Pending
        } else {
            Poll::Ready(this.result.take().expect("polled after completion"))
        }
    }
}

#[test]
fn vec_no_move_while_yielding() {
    futures_lite::future::block_on(async {
        let futures: Vec<_> = (0..50).map(PinCheckFuture::ok_after).collect();
        let values = futures.aggregate().await;
        assert_eq!(values, Ok((0..50).collect::<Vec<_>>()));
    });
}

#[test]
fn array_no_move_while_yielding() {
    futures_lite::future::block_on(async {
        let futures: [_; 8] = std::array::from_fn(|i| PinCheckFuture::ok_after(8 - i));
        let values = futures.aggregate().await;
        assert_eq!(values, Ok([8, 7, 6, 5, 4, 3, 2, 1]));
    });
}

#[test]
fn vec_no_move_before_rejection() {
    futures_lite::future::block_on(async {
        let mut futures: Vec<_> = (0..20).map(|i| PinCheckFuture::ok_after(i + 10)).collect();
        futures.push(PinCheckFuture::settle_after(3, Err(99)));
        assert_eq!(futures.aggregate().await, Err(99));
    });
}

#[test]
fn sparse_no_move_while_yielding() {
    futures_lite::future::block_on(async {
        let futures: Vec<_> = (0..10)
            .map(|i| (i % 3 != 0).then(|| PinCheckFuture::ok_after(i)))
            .collect();
        let values = futures.aggregate_sparse().await.unwrap();
        assert_eq!(values.len(), 10);
        assert_eq!(values[0], None);
        assert_eq!(values[1], Some(1));
        assert_eq!(values[9], None);
    });
}
