use std::{
    cell::RefCell,
    future::Future,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll, Waker},
};

struct LocalChannel<T> {
    value: Option<T>,
    waker: Option<Waker>,
    polls: usize,
}

/// The receiving half of a single-value channel; a future which settles once
/// the paired sender sends.
pub(crate) struct LocalReceiver<T> {
    channel: Rc<RefCell<LocalChannel<T>>>,
}

impl<T> Future for LocalReceiver<T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut channel = self.channel.borrow_mut();
        channel.polls += 1;

        match channel.value.take() {
            Some(value) => Poll::Ready(value),
            None => {
                channel.waker = Some(cx.waker().clone());
                Poll::Pending
            }
        }
    }
}

/// The sending half of a single-value channel.
pub(crate) struct LocalSender<T> {
    channel: Rc<RefCell<LocalChannel<T>>>,
}

impl<T> LocalSender<T> {
    /// Store the value and wake the receiver.
    pub(crate) fn send(&self, value: T) {
        let mut channel = self.channel.borrow_mut();
        channel.value = Some(value);
        let waker = channel.waker.take();
        drop(channel);
        if let Some(waker) = waker {
            waker.wake();
        }
    }

    /// How many times the receiver has been polled.
    pub(crate) fn polls(&self) -> usize {
        self.channel.borrow().polls
    }
}

/// Create a single-value channel whose receiver is a future.
pub(crate) fn local_channel<T>() -> (LocalSender<T>, LocalReceiver<T>) {
    let channel = Rc::new(RefCell::new(LocalChannel {
        value: None,
        waker: None,
        polls: 0,
    }));
    (
        LocalSender {
            channel: channel.clone(),
        },
        LocalReceiver { channel },
    )
}
