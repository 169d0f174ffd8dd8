use std::{array, mem};

/// Positionally indexed storage for a fixed number of values which arrive
/// out of order.
#[derive(Debug)]
pub(crate) struct OutputArray<T, const N: usize> {
    slots: [Option<T>; N],
}

impl<T, const N: usize> OutputArray<T, N> {
    /// Create storage for `N` values, none of which are written yet.
    pub(crate) fn empty() -> Self {
        Self {
            slots: array::from_fn(|_| None),
        }
    }

    /// Write a value at the index.
    ///
    /// Every index is written at most once.
    pub(crate) fn write(&mut self, idx: usize, value: T) {
        let slot = &mut self.slots[idx];
        debug_assert!(slot.is_none(), "output slot {idx} was written twice");
        *slot = Some(value);
    }

    /// Take every value in index order, leaving every slot empty.
    ///
    /// # Panics
    ///
    /// Panics if any index was never written.
    pub(crate) fn take(&mut self) -> [T; N] {
        let mut idx = 0;
        mem::replace(&mut self.slots, array::from_fn(|_| None)).map(|slot| {
            let value = match slot {
                Some(value) => value,
                None => panic!("output slot {idx} was taken before it was written"),
            };
            idx += 1;
            value
        })
    }
}
