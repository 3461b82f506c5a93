use lanevec::Offset;

use crate::element::Element;

/// Lane capability set for one element type and one lane type.
///
/// A lane holds `WIDTH` elements, element 0 at the lowest address. Masking
/// replaces the selected elements with zero, the identity of addition.
pub trait LaneOps {
    type Elem: Element;
    type Lane: bytemuck::Pod;

    /// Number of elements per lane.
    const WIDTH: usize;

    /// Short name used in reports.
    const NAME: &'static str;

    /// Lane with every element set to `x`.
    fn broadcast(x: Self::Elem) -> Self::Lane;

    /// Lane with every element zero.
    fn zero() -> Self::Lane;

    fn add(a: Self::Lane, b: Self::Lane) -> Self::Lane;

    fn sub(a: Self::Lane, b: Self::Lane) -> Self::Lane;

    fn mul(a: Self::Lane, b: Self::Lane) -> Self::Lane;

    /// Sum of the elements of a lane.
    fn reduce(a: Self::Lane) -> Self::Elem;

    /// Zeroes the first `gap` elements, `gap` in `0..WIDTH`.
    fn mask_start(a: Self::Lane, gap: Offset) -> Self::Lane;

    /// Zeroes the last `-gap` elements, `gap` in `-(WIDTH - 1)..=0`.
    fn mask_end(a: Self::Lane, gap: Offset) -> Self::Lane;

    /// Applies both [`mask_start`](Self::mask_start) and
    /// [`mask_end`](Self::mask_end).
    #[inline(always)]
    fn mask_both(a: Self::Lane, start_gap: Offset, end_gap: Offset) -> Self::Lane {
        Self::mask_end(Self::mask_start(a, start_gap), end_gap)
    }
}
