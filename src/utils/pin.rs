use core::pin::Pin;

/// Returns a pinned mutable reference to the element at `index` of a pinned
/// slice.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
#[inline]
pub(crate) fn get_pin_mut<T>(slice: Pin<&mut [T]>, index: usize) -> Pin<&mut T> {
    // SAFETY: `std` _could_ make this unsound if it were to decide Pin's
    // invariants aren't required to transmit through slices. Otherwise this has
    // the same safety as a normal field pin projection.
    unsafe { slice.map_unchecked_mut(|slice| &mut slice[index]) }
}

/// Returns a pinned mutable reference to the element at `index` of a pinned
/// vector.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
#[inline]
pub(crate) fn get_pin_mut_from_vec<T>(vec: Pin<&mut Vec<T>>, index: usize) -> Pin<&mut T> {
    // SAFETY: we never push onto or remove from a pinned vector, so its
    // buffer is never reallocated and the elements never move.
    unsafe { vec.map_unchecked_mut(|vec| &mut vec[index]) }
}
