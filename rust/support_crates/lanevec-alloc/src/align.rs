/// Aligns a number up to the next multiple of the specified alignment.
///
/// Returns `None` if the result does not fit in `usize`.
///
/// # Examples
///
/// ```
/// use lanevec_alloc::align::align_up;
///
/// assert_eq!(align_up(0, 16), Some(0));
/// assert_eq!(align_up(1, 16), Some(16));
/// assert_eq!(align_up(16, 16), Some(16));
/// assert_eq!(align_up(17, 16), Some(32));
/// assert_eq!(align_up(usize::MAX, 16), None);
/// ```
///
/// # Panics
///
/// Panics in debug builds if `alignment` is not a non-zero power of two.
#[inline]
pub fn align_up(n: usize, alignment: usize) -> Option<usize> {
    debug_assert!(alignment.is_power_of_two());
    Some(n.checked_add(alignment - 1)? & !(alignment - 1))
}

/// Checks whether a pointer lies on the specified alignment boundary.
///
/// Returns `false` for alignments that are not a power of two.
///
/// ```
/// use lanevec_alloc::align::is_aligned_ptr;
///
/// let value = 0u64;
/// let ptr = &value as *const u64 as *const u8;
/// assert!(is_aligned_ptr(ptr, 8));
/// assert!(!is_aligned_ptr(ptr.wrapping_add(1), 2));
/// assert!(!is_aligned_ptr(ptr, 3));
/// ```
#[inline]
pub fn is_aligned_ptr(ptr: *const u8, alignment: usize) -> bool {
    alignment.is_power_of_two() && (ptr as usize) & (alignment - 1) == 0
}
