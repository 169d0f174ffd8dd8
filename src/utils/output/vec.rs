use std::mem;

/// Positionally indexed storage for values which arrive out of order.
#[derive(Debug)]
pub(crate) struct OutputVec<T> {
    slots: Vec<Option<T>>,
}

impl<T> OutputVec<T> {
    /// Create storage for `len` values, none of which are written yet.
    pub(crate) fn empty(len: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(len).collect(),
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

    /// Take every value in index order, leaving behind an empty vector.
    ///
    /// # Panics
    ///
    /// Panics if any index was never written.
    pub(crate) fn take(&mut self) -> Vec<T> {
        mem::take(&mut self.slots)
            .into_iter()
            .enumerate()
            .map(|(idx, slot)| match slot {
                Some(value) => value,
                None => panic!("output slot {idx} was taken before it was written"),
            })
            .collect()
    }
}
