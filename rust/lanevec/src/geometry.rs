//! Mapping between element positions and lanes.
//!
//! Every lane spans `k = size_of::<L>() / size_of::<T>()` consecutive elements.
//! An element at `offset` lives in lane `offset / k`, at `offset % k` elements
//! from the lane start. Both cursor types and the container derive their lane
//! arithmetic from here.

use std::marker::PhantomData;

/// Signed distance between two cursor positions, in elements or lanes.
///
/// `isize` has the width of a pointer, and no allocation may exceed
/// `isize::MAX` bytes, so every position in any buffer is representable.
pub type Offset = isize;

/// Lane arithmetic for elements of type `T` grouped into lanes of type `L`.
pub struct LaneGeometry<T, L>(PhantomData<(T, L)>);

impl<T, L> LaneGeometry<T, L> {
    /// Number of elements per lane.
    ///
    /// Referencing this constant rejects, at compile time, zero-sized element
    /// types and lane types whose size is not a multiple of the element size.
    pub const LANE_WIDTH: usize = {
        assert!(
            std::mem::size_of::<T>() != 0,
            "zero-sized element types are not supported"
        );
        assert!(
            std::mem::size_of::<L>() >= std::mem::size_of::<T>()
                && std::mem::size_of::<L>() % std::mem::size_of::<T>() == 0,
            "lane type size must be a non-zero multiple of the element type size"
        );
        std::mem::size_of::<L>() / std::mem::size_of::<T>()
    };

    /// Size of a lane in bytes, which is also the alignment of the storage.
    pub const LANE_BYTES: usize = std::mem::size_of::<L>();

    const K: Offset = Self::LANE_WIDTH as Offset;

    /// Index of the lane containing the element at `offset`.
    #[inline(always)]
    pub const fn lane_index(offset: Offset) -> Offset {
        offset.div_euclid(Self::K)
    }

    /// Distance of the element at `offset` from the start of its lane.
    #[inline(always)]
    pub const fn intra_lane_offset(offset: Offset) -> Offset {
        offset.rem_euclid(Self::K)
    }

    /// Number of leading elements of the containing lane that precede `offset`,
    /// in `0..k`.
    #[inline(always)]
    pub const fn start_gap(offset: Offset) -> Offset {
        Self::intra_lane_offset(offset)
    }

    /// Negated number of trailing elements of the containing lane that follow
    /// `offset`, in `-(k - 1)..=0`.
    #[inline(always)]
    pub const fn end_gap(offset: Offset) -> Offset {
        Self::intra_lane_offset(offset) - (Self::K - 1)
    }

    /// Smallest multiple of the lane width that is at least `count`, or `None`
    /// on overflow.
    #[inline]
    pub const fn rounded_len(count: usize) -> Option<usize> {
        count.div_ceil(Self::LANE_WIDTH).checked_mul(Self::LANE_WIDTH)
    }
}
