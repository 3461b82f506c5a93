use crate::{align, aligned_region::RawAllocation, error::AllocError};

/// Allocates `size + alignment` zero-filled bytes with byte alignment and
/// locates an aligned sub-region of `size` bytes inside them.
///
/// The returned allocation must be released with [`free`], passing the
/// `size` field of the allocation (the padded size).
pub fn allocate(size: usize, alignment: usize) -> Result<RawAllocation, AllocError> {
    let padded_size = size
        .checked_add(alignment)
        .ok_or(AllocError::SizeOverflow { size, alignment })?;

    let mut vec = Vec::<u8>::new();
    vec.try_reserve_exact(padded_size)
        .map_err(|_| AllocError::OutOfMemory { size, alignment })?;
    vec.resize(padded_size, 0);
    let raw = Box::into_raw(vec.into_boxed_slice()) as *mut u8;

    let addr = raw as usize;
    let start = align::align_up(addr, alignment).map_or(usize::MAX, |aligned| aligned - addr);
    if start > padded_size - size {
        unsafe { free(raw, padded_size, alignment) };
        return Err(AllocError::NoAlignedRegion { size, alignment });
    }

    let ptr = unsafe { raw.add(start) };
    log::trace!("padded: {padded_size} bytes at {raw:p}, aligned start {ptr:p} (+{start})");
    Ok(RawAllocation {
        raw,
        ptr,
        size: padded_size,
    })
}

/// Releases an allocation obtained from [`allocate`].
///
/// # Safety
///
/// `raw` and `size` must be the `raw` and `size` fields of an allocation
/// returned by [`allocate`] whose memory has not been freed yet.
pub unsafe fn free(raw: *mut u8, size: usize, _alignment: usize) {
    drop(unsafe { Box::from_raw(std::ptr::slice_from_raw_parts_mut(raw, size)) });
}
