//! Exclusively owned, aligned memory region.
//!
//! An `AlignedRegion` couples the handle used to release an allocation with the
//! aligned pointer used to access it. Depending on the strategy the two may
//! differ: the padded strategy hands out a pointer somewhere inside a larger
//! byte allocation. Both pointers are either null together (the empty region)
//! or valid together, and the handle is released exactly once on drop.
//!
//! # Ownership
//!
//! A region is the only owner of its allocation. It cannot be cloned, moving it
//! moves the allocation, and dropping it frees the allocation once through the
//! backend recorded in `strategy`. Raw pointers obtained from `as_ptr` and
//! `as_mut_ptr` borrow nothing and dangle after the drop.

use crate::{align, error::AllocError, native, padded};

/// How an [`AlignedRegion`] obtains its memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllocStrategy {
    /// Allocator that natively accepts an alignment parameter.
    Native,
    /// Ordinary allocation enlarged by the alignment, aligned start located
    /// inside it.
    Padded,
}

impl AllocStrategy {
    /// Strategy selected for the target platform at build time.
    ///
    /// Windows uses [`AllocStrategy::Padded`], every other platform uses
    /// [`AllocStrategy::Native`]. The public contract of [`AlignedRegion`] is the
    /// same for both.
    pub const fn platform_default() -> AllocStrategy {
        if cfg!(windows) {
            AllocStrategy::Padded
        } else {
            AllocStrategy::Native
        }
    }
}

impl Default for AllocStrategy {
    fn default() -> Self {
        Self::platform_default()
    }
}

/// Memory obtained from one of the allocation backends.
pub(crate) struct RawAllocation {
    /// Handle passed back to the backend when freeing.
    pub raw: *mut u8,
    /// Aligned start of the usable memory.
    pub ptr: *mut u8,
    /// Size of the backend allocation in bytes (as required by the backend's
    /// `free`).
    pub size: usize,
}

/// A zero-initialized memory region whose start is aligned to a requested
/// power-of-two boundary.
pub struct AlignedRegion {
    /// Allocation handle released on drop.
    raw: *mut u8,
    /// Aligned start of the region, inside the allocation referenced by `raw`.
    ptr: *mut u8,
    /// Usable length in bytes, starting at `ptr`.
    len: usize,
    /// Size of the backend allocation referenced by `raw`.
    raw_size: usize,
    /// Alignment of `ptr`.
    alignment: usize,
    strategy: AllocStrategy,
}

impl AlignedRegion {
    /// Returns a region that owns no memory.
    ///
    /// Both pointers are null and dropping the region frees nothing.
    pub const fn empty() -> AlignedRegion {
        AlignedRegion {
            raw: std::ptr::null_mut(),
            ptr: std::ptr::null_mut(),
            len: 0,
            raw_size: 0,
            alignment: 1,
            strategy: AllocStrategy::platform_default(),
        }
    }

    /// Allocates `len` bytes aligned to `alignment` using the platform's
    /// default strategy.
    ///
    /// # Errors
    ///
    /// See [`AlignedRegion::allocate_with`].
    pub fn allocate(len: usize, alignment: usize) -> Result<AlignedRegion, AllocError> {
        Self::allocate_with(AllocStrategy::platform_default(), len, alignment)
    }

    /// Allocates `len` bytes aligned to `alignment` using the given strategy.
    ///
    /// The memory is zero-filled. A zero `len` still produces a non-null,
    /// aligned pointer.
    ///
    /// # Arguments
    ///
    /// * `strategy` - Backend that obtains and later frees the memory.
    /// * `len` - Usable size of the region in bytes.
    /// * `alignment` - Required alignment of the region start. Must be a
    ///   power of two.
    ///
    /// # Returns
    ///
    /// A region whose [`as_ptr`](Self::as_ptr) is a multiple of `alignment`
    /// and whose [`allocated_size`](Self::allocated_size) includes any padding
    /// the strategy added.
    ///
    /// # Errors
    ///
    /// - [`AllocError::InvalidAlignment`] if `alignment` is not a power of two.
    /// - [`AllocError::SizeOverflow`] if the padded size exceeds `isize::MAX`.
    /// - [`AllocError::OutOfMemory`] if the backend could not allocate.
    /// - [`AllocError::NoAlignedRegion`] if no aligned sub-region of `len` bytes
    ///   exists within the allocation.
    pub fn allocate_with(
        strategy: AllocStrategy,
        len: usize,
        alignment: usize,
    ) -> Result<AlignedRegion, AllocError> {
        if !alignment.is_power_of_two() {
            return Err(AllocError::InvalidAlignment { alignment });
        }
        if alignment > isize::MAX as usize || len > isize::MAX as usize - alignment {
            return Err(AllocError::SizeOverflow {
                size: len,
                alignment,
            });
        }

        let allocation = match strategy {
            AllocStrategy::Native => native::allocate(len, alignment)?,
            AllocStrategy::Padded => padded::allocate(len, alignment)?,
        };

        let region = AlignedRegion {
            raw: allocation.raw,
            ptr: allocation.ptr,
            len,
            raw_size: allocation.size,
            alignment,
            strategy,
        };
        if !align::is_aligned_ptr(region.ptr, alignment) {
            return Err(AllocError::NoAlignedRegion {
                size: len,
                alignment,
            });
        }
        Ok(region)
    }

    /// Returns the usable length of the region in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the usable length is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the region owns no memory.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.raw.is_null()
    }

    /// Returns the alignment of the region start in bytes.
    #[inline]
    pub fn alignment(&self) -> usize {
        self.alignment
    }

    /// Returns the strategy the region was allocated with.
    #[inline]
    pub fn strategy(&self) -> AllocStrategy {
        self.strategy
    }

    /// Returns the size of the underlying allocation, including any padding
    /// added by the strategy.
    #[inline]
    pub fn allocated_size(&self) -> usize {
        self.raw_size
    }

    /// Returns the aligned start of the region (null for an empty region).
    ///
    /// # Safety
    ///
    /// The pointer must not be used after the region is dropped, and accesses
    /// must stay within `0..len()`.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr
    }

    /// Returns the aligned start of the region as a mutable pointer.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.ptr
    }

    /// Returns the region contents as bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        if self.ptr.is_null() {
            return &[];
        }
        unsafe { std::slice::from_raw_parts(self.ptr, self.len) }
    }

    /// Returns the region contents as mutable bytes.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        if self.ptr.is_null() {
            return &mut [];
        }
        unsafe { std::slice::from_raw_parts_mut(self.ptr, self.len) }
    }

    /// Reinterprets the region as a slice of `T`.
    ///
    /// # Panics
    ///
    /// Panics if the length is not a multiple of `size_of::<T>()` or the
    /// region alignment is insufficient for `T`.
    #[inline]
    pub fn as_slice<T>(&self) -> &[T]
    where
        T: bytemuck::AnyBitPattern,
    {
        if self.ptr.is_null() {
            return &[];
        }
        bytemuck::cast_slice(self.as_bytes())
    }

    /// Reinterprets the region as a mutable slice of `T`.
    ///
    /// # Panics
    ///
    /// Panics if the length is not a multiple of `size_of::<T>()` or the
    /// region alignment is insufficient for `T`.
    #[inline]
    pub fn as_mut_slice<T>(&mut self) -> &mut [T]
    where
        T: bytemuck::AnyBitPattern + bytemuck::NoUninit,
    {
        if self.ptr.is_null() {
            return &mut [];
        }
        bytemuck::cast_slice_mut(self.as_bytes_mut())
    }
}

impl Default for AlignedRegion {
    fn default() -> Self {
        Self::empty()
    }
}

impl Drop for AlignedRegion {
    /// Releases the allocation through the backend that produced it.
    fn drop(&mut self) {
        if self.raw.is_null() {
            return;
        }
        match self.strategy {
            AllocStrategy::Native => unsafe {
                native::free(self.raw, self.raw_size, self.alignment)
            },
            AllocStrategy::Padded => unsafe {
                padded::free(self.raw, self.raw_size, self.alignment)
            },
        }
        self.raw = std::ptr::null_mut();
        self.ptr = std::ptr::null_mut();
    }
}

// SAFETY: AlignedRegion exclusively owns its allocation and frees it on drop.
unsafe impl Send for AlignedRegion {}

// SAFETY: shared access only hands out `&[u8]`-style views; mutation requires
// `&mut self`.
unsafe impl Sync for AlignedRegion {}

impl std::fmt::Debug for AlignedRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlignedRegion")
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .field("alignment", &self.alignment)
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}
