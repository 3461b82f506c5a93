use std::alloc::{Layout, alloc_zeroed, dealloc};

use crate::{aligned_region::RawAllocation, error::AllocError};

/// Allocates `size` zero-filled bytes through the global allocator, passing
/// `alignment` in the layout.
///
/// The returned allocation must be released with [`free`].
pub fn allocate(size: usize, alignment: usize) -> Result<RawAllocation, AllocError> {
    let alloc_size = size.max(1);
    let layout = Layout::from_size_align(alloc_size, alignment)
        .map_err(|_| AllocError::SizeOverflow { size, alignment })?;

    let raw = unsafe { alloc_zeroed(layout) };
    if raw.is_null() {
        return Err(AllocError::OutOfMemory { size, alignment });
    }
    log::trace!("alloc_zeroed: {alloc_size} bytes at {raw:p} (alignment {alignment})");
    Ok(RawAllocation {
        raw,
        ptr: raw,
        size: alloc_size,
    })
}

/// Releases an allocation obtained from [`allocate`].
///
/// # Safety
///
/// `raw`, `size` and `alignment` must match a previous [`allocate`] call whose
/// memory has not been freed yet.
pub unsafe fn free(raw: *mut u8, size: usize, alignment: usize) {
    if let Ok(layout) = Layout::from_size_align(size, alignment) {
        unsafe { dealloc(raw, layout) };
    }
}
