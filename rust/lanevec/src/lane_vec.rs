//! The lane-aligned, fixed-size container.

use std::marker::PhantomData;

use lanevec_alloc::{AlignedRegion, AllocError, AllocStrategy};

use crate::{
    element_iter::ElementIter,
    error::{Error, Result},
    geometry::{LaneGeometry, Offset},
};

/// A fixed-size vector of `len` elements of type `T`, stored in whole lanes of
/// type `L`.
///
/// The storage starts at an address aligned to `size_of::<L>()` and holds
/// [`capacity`](Self::capacity) elements: `len` rounded up to a multiple of
/// the lane width. The trailing padding elements are zero-initialized and
/// readable through lanes, but lie outside the logical range
/// `[begin(), end())`.
///
/// The container exclusively owns its storage. It can be moved but not
/// cloned; `std::mem::take` leaves an empty container behind that owns no
/// memory.
pub struct LaneVec<T, L> {
    region: AlignedRegion,
    len: usize,
    _marker: PhantomData<(T, L)>,
}

impl<T, L> LaneVec<T, L>
where
    T: bytemuck::Pod,
    L: bytemuck::Pod,
{
    /// Number of elements per lane.
    pub const LANE_WIDTH: usize = LaneGeometry::<T, L>::LANE_WIDTH;

    /// Creates a zero-filled container of `count` elements using the
    /// platform's default allocation strategy.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Alignment`](crate::ErrorKind::Alignment) if no
    /// suitably aligned storage can be obtained.
    pub fn new(count: usize) -> Result<Self> {
        Self::with_strategy(count, AllocStrategy::platform_default())
    }

    /// Creates a zero-filled container of `count` elements using the given
    /// allocation strategy.
    ///
    /// # Arguments
    ///
    /// * `count` - Number of logical elements. The storage is rounded up to
    ///   a whole number of lanes.
    /// * `strategy` - How the lane-aligned storage is obtained.
    ///
    /// # Returns
    ///
    /// A container with `len() == count`, `capacity()` rounded up to a
    /// multiple of [`LANE_WIDTH`](Self::LANE_WIDTH), and storage aligned to
    /// `size_of::<L>()`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Alignment`](crate::ErrorKind::Alignment) if no
    /// suitably aligned storage can be obtained.
    pub fn with_strategy(count: usize, strategy: AllocStrategy) -> Result<Self> {
        let lane_width = Self::LANE_WIDTH;
        let lane_bytes = LaneGeometry::<T, L>::LANE_BYTES;

        let size_overflow = || {
            Error::alignment(
                count,
                lane_bytes,
                AllocError::SizeOverflow {
                    size: count,
                    alignment: lane_bytes,
                },
            )
        };
        let capacity = LaneGeometry::<T, L>::rounded_len(count).ok_or_else(size_overflow)?;
        let bytes = capacity
            .checked_mul(std::mem::size_of::<T>())
            .ok_or_else(size_overflow)?;

        let region = AlignedRegion::allocate_with(strategy, bytes, lane_bytes)
            .map_err(|e| Error::alignment(count, lane_bytes, e))?;
        log::debug!(
            "allocated lane vector: {count} elements ({capacity} rounded, {lane_width} per lane), \
             {bytes} bytes at {:p} via {strategy:?}",
            region.as_ptr()
        );

        Ok(LaneVec {
            region,
            len: count,
            _marker: PhantomData,
        })
    }

    /// Creates a container holding a copy of `values`.
    ///
    /// # Errors
    ///
    /// See [`LaneVec::new`].
    pub fn from_slice(values: &[T]) -> Result<Self> {
        let mut vec = Self::new(values.len())?;
        vec.as_mut_slice().copy_from_slice(values);
        Ok(vec)
    }

    /// Number of logical elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the container has no logical elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated elements, `len()` rounded up to whole lanes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.region.len() / std::mem::size_of::<T>()
    }

    /// Number of elements per lane.
    #[inline]
    pub fn lane_width(&self) -> usize {
        Self::LANE_WIDTH
    }

    /// Number of allocated lanes.
    #[inline]
    pub fn lane_count(&self) -> usize {
        self.capacity() / Self::LANE_WIDTH
    }

    /// Allocation strategy backing this container.
    #[inline]
    pub fn strategy(&self) -> AllocStrategy {
        self.region.strategy()
    }

    /// Aligned start of the storage (null for an empty default container).
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.region.as_ptr() as *const T
    }

    /// Aligned start of the storage as a mutable pointer.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.region.as_mut_ptr() as *mut T
    }

    /// Start and exclusive logical end of the storage.
    ///
    /// The end is `start + len()`, not the rounded capacity.
    pub fn as_ptr_range(&self) -> std::ops::Range<*const T> {
        let start = self.as_ptr();
        start..start.wrapping_add(self.len)
    }

    /// Logical elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.region.as_slice::<T>()[..self.len]
    }

    /// Logical elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.region.as_mut_slice::<T>()[..len]
    }

    /// All allocated lanes, including the padding of the last one.
    #[inline]
    pub fn lanes(&self) -> &[L] {
        self.region.as_slice::<L>()
    }

    /// All allocated lanes as a mutable slice.
    #[inline]
    pub fn lanes_mut(&mut self) -> &mut [L] {
        self.region.as_mut_slice::<L>()
    }

    /// Cursor at the first element.
    #[inline]
    pub fn begin(&mut self) -> ElementIter<'_, T, L> {
        ElementIter::from_raw(self.as_mut_ptr(), 0)
    }

    /// Cursor one past the last logical element.
    #[inline]
    pub fn end(&mut self) -> ElementIter<'_, T, L> {
        let len = self.len as Offset;
        ElementIter::from_raw(self.as_mut_ptr(), len)
    }

    /// The `(begin, end)` cursor pair over the logical elements.
    #[inline]
    pub fn range(&mut self) -> (ElementIter<'_, T, L>, ElementIter<'_, T, L>) {
        let len = self.len as Offset;
        let base = self.as_mut_ptr();
        (ElementIter::from_raw(base, 0), ElementIter::from_raw(base, len))
    }
}

impl<T, L> Default for LaneVec<T, L> {
    /// An empty container that owns no memory.
    fn default() -> Self {
        LaneVec {
            region: AlignedRegion::empty(),
            len: 0,
            _marker: PhantomData,
        }
    }
}

impl<T, L> std::ops::Deref for LaneVec<T, L>
where
    T: bytemuck::Pod,
    L: bytemuck::Pod,
{
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, L> std::ops::DerefMut for LaneVec<T, L>
where
    T: bytemuck::Pod,
    L: bytemuck::Pod,
{
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, L> std::fmt::Debug for LaneVec<T, L>
where
    T: bytemuck::Pod + std::fmt::Debug,
    L: bytemuck::Pod,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LaneVec")
            .field("values", &self.as_slice())
            .field("len", &self.len)
            .field("cap", &self.capacity())
            .field("lane_width", &Self::LANE_WIDTH)
            .field("strategy", &self.strategy())
            .finish_non_exhaustive()
    }
}
