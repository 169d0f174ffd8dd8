use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Futures which yield a varying number of times, stored so that later
/// indexes tend to settle first.
pub fn futures_vec(len: usize) -> Vec<YieldFuture> {
    (0..len).map(|n| YieldFuture::new(n, len)).collect()
}

pub fn futures_array<const N: usize>() -> [YieldFuture; N] {
    std::array::from_fn(|n| YieldFuture::new(n, N))
}

/// Succeeds with its index after yielding `len - index` times, scaled down
/// so large collections stay cheap.
pub struct YieldFuture {
    index: usize,
    remaining: usize,
}

impl YieldFuture {
    fn new(index: usize, len: usize) -> Self {
        Self {
            index,
            remaining: (len - index) % 8,
        }
    }
}

impl Future for YieldFuture {
    type Output = Result<usize, ()>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.remaining == 0 {
            return Poll::Ready(Ok(self.index));
        }
        self.remaining -= 1;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}
