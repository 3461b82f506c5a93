//! Range sums over lane-aligned storage.
//!
//! [`fold_elements`] is the reference: one element at a time. [`fold_lanes`]
//! reads whole lanes instead, masking the elements of the first and last lane
//! that fall outside the range. Both return the same value for integer
//! elements; float results differ only by rounding, since the lane-wise scan
//! accumulates in `WIDTH` interleaved partial sums.

use std::ops::Range;

use lanevec::{ElementIter, LaneVec};

use crate::{element::Element, lane_ops::LaneOps};

/// Sums the elements in `[b, e)` one at a time.
///
/// Returns zero for an empty range, including `b > e`.
///
/// # Safety
///
/// `b` and `e` must come from the same live container and every position in
/// `[b, e)` must lie within its logical length.
pub unsafe fn fold_elements<T: Element, L>(
    mut b: ElementIter<'_, T, L>,
    e: ElementIter<'_, T, L>,
) -> T {
    let mut acc = T::ZERO;
    while b < e {
        acc = T::add(acc, unsafe { b.read() });
        b.inc();
    }
    acc
}

/// Sums the elements in `[b, e)` a lane at a time.
///
/// Every lane overlapping the range is read in full. Elements of the first
/// lane before `b`, and of the last lane from `e` on, are masked to zero
/// before they are added. Lanes never extend past the allocated capacity,
/// so no read leaves the container's storage.
///
/// Returns zero for an empty range, including `b > e`.
///
/// # Safety
///
/// Same as [`fold_elements`].
pub unsafe fn fold_lanes<O: LaneOps>(
    b: ElementIter<'_, O::Elem, O::Lane>,
    e: ElementIter<'_, O::Elem, O::Lane>,
) -> O::Elem {
    if b >= e {
        return <O::Elem as Element>::ZERO;
    }

    let last = e - 1;
    let mut bb = b.lower_lane();
    let mut ee = last.upper_lane();
    ee.dec();

    if bb == ee {
        let lane = unsafe { bb.read() };
        return O::reduce(O::mask_both(lane, b.lane_start_gap(), last.lane_end_gap()));
    }

    let mut acc = O::mask_start(unsafe { bb.read() }, b.lane_start_gap());
    bb.inc();
    while bb != ee {
        acc = O::add(acc, unsafe { bb.read() });
        bb.inc();
    }
    let tail = O::mask_end(unsafe { ee.read() }, last.lane_end_gap());
    O::reduce(O::add(acc, tail))
}

/// Sums `vec[range]` element by element.
///
/// # Panics
///
/// Panics if `range` is decreasing or extends past `vec.len()`.
pub fn sum<T, L>(vec: &mut LaneVec<T, L>, range: Range<usize>) -> T
where
    T: Element,
    L: bytemuck::Pod,
{
    check_range(vec.len(), &range);
    let begin = vec.begin();
    unsafe { fold_elements(begin + range.start as isize, begin + range.end as isize) }
}

/// Sums `vec[range]` lane by lane using the operations of `O`.
///
/// # Panics
///
/// Panics if `range` is decreasing or extends past `vec.len()`.
pub fn lane_sum<O: LaneOps>(
    vec: &mut LaneVec<O::Elem, O::Lane>,
    range: Range<usize>,
) -> O::Elem {
    debug_assert_eq!(LaneVec::<O::Elem, O::Lane>::LANE_WIDTH, O::WIDTH);
    check_range(vec.len(), &range);
    let begin = vec.begin();
    unsafe { fold_lanes::<O>(begin + range.start as isize, begin + range.end as isize) }
}

fn check_range(len: usize, range: &Range<usize>) {
    assert!(
        range.start <= range.end && range.end <= len,
        "range {range:?} out of bounds for lane vector of length {len}"
    );
}
