use crate::{aligned_region::RawAllocation, error::AllocError};

/// Allocates `size` zero-filled bytes aligned to `alignment` via `posix_memalign`.
///
/// The returned allocation must be released with [`free`].
pub fn allocate(size: usize, alignment: usize) -> Result<RawAllocation, AllocError> {
    // posix_memalign requires a multiple of the pointer size.
    let effective_alignment = alignment.max(std::mem::size_of::<*mut libc::c_void>());
    let alloc_size = size.max(1);

    let mut raw: *mut libc::c_void = std::ptr::null_mut();
    let res = unsafe { libc::posix_memalign(&mut raw, effective_alignment, alloc_size) };
    match res {
        0 if !raw.is_null() => {}
        libc::EINVAL => return Err(AllocError::InvalidAlignment { alignment }),
        _ => return Err(AllocError::OutOfMemory { size, alignment }),
    }

    let raw = raw as *mut u8;
    unsafe { raw.write_bytes(0, alloc_size) };
    log::trace!("posix_memalign: {alloc_size} bytes at {raw:p} (alignment {effective_alignment})");
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
/// `raw` must come from [`allocate`] and must not have been freed already.
pub unsafe fn free(raw: *mut u8, _size: usize, _alignment: usize) {
    unsafe { libc::free(raw as *mut libc::c_void) };
}
