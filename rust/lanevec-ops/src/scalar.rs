//! Identity lanes: the lane type is the element type itself.
//!
//! Serves as the correctness baseline for wider lanes and as the fallback when
//! no wide type is available.

use std::marker::PhantomData;

use lanevec::Offset;

use crate::{element::Element, lane_ops::LaneOps};

/// Single-element lanes (`WIDTH == 1`). Every gap is necessarily zero.
pub struct Scalar<T>(PhantomData<T>);

impl<T: Element> LaneOps for Scalar<T> {
    type Elem = T;
    type Lane = T;

    const WIDTH: usize = 1;
    const NAME: &'static str = "scalar";

    #[inline(always)]
    fn broadcast(x: T) -> T {
        x
    }

    #[inline(always)]
    fn zero() -> T {
        T::ZERO
    }

    #[inline(always)]
    fn add(a: T, b: T) -> T {
        T::add(a, b)
    }

    #[inline(always)]
    fn sub(a: T, b: T) -> T {
        T::sub(a, b)
    }

    #[inline(always)]
    fn mul(a: T, b: T) -> T {
        T::mul(a, b)
    }

    #[inline(always)]
    fn reduce(a: T) -> T {
        a
    }

    #[inline(always)]
    fn mask_start(a: T, gap: Offset) -> T {
        debug_assert_eq!(gap, 0);
        a
    }

    #[inline(always)]
    fn mask_end(a: T, gap: Offset) -> T {
        debug_assert_eq!(gap, 0);
        a
    }
}
