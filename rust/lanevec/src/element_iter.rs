//! Random-access cursor over the individual elements of a [`LaneVec`].
//!
//! [`LaneVec`]: crate::LaneVec

use std::marker::PhantomData;

use crate::{
    cursor::impl_cursor,
    geometry::{LaneGeometry, Offset},
    lane_iter::LaneIter,
};

/// A `(base, offset)` cursor over elements of type `T` stored in lanes of
/// type `L`.
///
/// Element cursors are obtained from [`LaneVec::begin`], [`LaneVec::end`] or
/// [`LaneVec::range`] and borrow the container mutably for `'a`, so the
/// container cannot be moved, resized or dropped while any cursor is alive.
/// Cursors are `Copy`; several may point into the same container, and writes
/// through one are visible through the others.
///
/// Positions are not bounds-checked. Moving a cursor anywhere is safe, but
/// [`read`](Self::read) and [`write`](Self::write) require the position to be
/// inside the container's storage.
///
/// [`LaneVec::begin`]: crate::LaneVec::begin
/// [`LaneVec::end`]: crate::LaneVec::end
/// [`LaneVec::range`]: crate::LaneVec::range
pub struct ElementIter<'a, T, L> {
    base: *mut T,
    offset: Offset,
    _marker: PhantomData<(&'a mut [T], fn() -> L)>,
}

impl_cursor!(ElementIter, T);

impl<'a, T, L> ElementIter<'a, T, L> {
    /// Lane that contains the current element.
    #[inline(always)]
    pub fn lower_lane(&self) -> LaneIter<'a, T, L> {
        LaneIter::from_raw(
            self.base.cast::<L>(),
            LaneGeometry::<T, L>::lane_index(self.offset),
        )
    }

    /// Lane that follows the one containing the current element.
    ///
    /// Serves as an exclusive lane bound for a range whose last element is the
    /// current one.
    #[inline(always)]
    pub fn upper_lane(&self) -> LaneIter<'a, T, L> {
        LaneIter::from_raw(
            self.base.cast::<L>(),
            LaneGeometry::<T, L>::lane_index(self.offset) + 1,
        )
    }

    /// Number of elements in [`lower_lane`](Self::lower_lane) before the
    /// current one, in `0..k`.
    ///
    /// When the cursor starts a range, this is how many leading elements of the
    /// first lane fall outside the range.
    #[inline(always)]
    pub fn lane_start_gap(&self) -> Offset {
        LaneGeometry::<T, L>::start_gap(self.offset)
    }

    /// Negated number of elements in [`lower_lane`](Self::lower_lane) after
    /// the current one, in `-(k - 1)..=0`.
    ///
    /// When the cursor is on the last element of a range, masking this many
    /// trailing elements of its lane leaves exactly the in-range elements.
    /// Zero means the current element closes its lane.
    #[inline(always)]
    pub fn lane_end_gap(&self) -> Offset {
        LaneGeometry::<T, L>::end_gap(self.offset)
    }
}
