/// The terminal state of an aggregate.
///
/// An aggregate starts out [`Unset`][Self::Unset] and moves to exactly one of
/// the terminal states, after which it never changes again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// No terminal event has happened yet.
    #[default]
    Unset,
    /// Every slot succeeded and the values were handed out.
    Resolved,
    /// A slot failed and its error was handed out.
    Rejected,
}

impl Outcome {
    /// Returns `true` once the outcome is resolved or rejected.
    #[must_use]
    #[inline]
    pub(crate) fn is_terminal(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Record a terminal state. The first call wins; later calls leave the
    /// outcome untouched.
    ///
    /// Returns `true` if this call finalized the outcome.
    pub(crate) fn finalize(&mut self, terminal: Outcome) -> bool {
        debug_assert!(terminal.is_terminal(), "cannot finalize to `Unset`");
        if self.is_terminal() {
            return false;
        }
        *self = terminal;
        true
    }
}
