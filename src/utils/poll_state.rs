/// Where a slot is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PollState {
    /// The slot's future has not settled yet.
    Pending,
    /// The slot's value sits in the output storage.
    Ready,
    /// The slot's value was handed out, or its error was.
    Consumed,
}

impl PollState {
    #[inline]
    pub(crate) fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[inline]
    pub(crate) fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    #[inline]
    pub(crate) fn set_ready(&mut self) {
        *self = Self::Ready;
    }

    #[inline]
    pub(crate) fn set_consumed(&mut self) {
        *self = Self::Consumed;
    }
}

/// One `Pending` state per slot, sized once at construction.
pub(crate) fn pending_slots(len: usize) -> Box<[PollState]> {
    vec![PollState::Pending; len].into_boxed_slice()
}
