//! Random-access cursor over whole lanes of a [`LaneVec`].
//!
//! [`LaneVec`]: crate::LaneVec

use std::marker::PhantomData;

use crate::{cursor::impl_cursor, geometry::Offset};

/// A `(base, offset)` cursor over the lanes of a container, each lane being
/// `k` consecutive elements of type `T` reinterpreted as one value of type
/// `L`.
///
/// Lane cursors are produced by [`ElementIter::lower_lane`] and
/// [`ElementIter::upper_lane`] (or default-constructed); the offset counts
/// lanes, not elements. Reading a lane yields the `k` elements packed in
/// memory order, so on little-endian targets element 0 occupies the lowest
/// bytes of an integer lane.
///
/// [`ElementIter::lower_lane`]: crate::ElementIter::lower_lane
/// [`ElementIter::upper_lane`]: crate::ElementIter::upper_lane
pub struct LaneIter<'a, T, L> {
    base: *mut L,
    offset: Offset,
    _marker: PhantomData<(&'a mut [L], fn() -> T)>,
}

impl_cursor!(LaneIter, L);
