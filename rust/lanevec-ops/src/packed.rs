//! Portable lanes of `N` elements stored as `[T; N]`.

use std::marker::PhantomData;

use lanevec::Offset;

use crate::{element::Element, lane_ops::LaneOps};

/// `[T; N]` lanes with element-wise arithmetic written as plain loops, which
/// the compiler is free to vectorize.
pub struct Packed<T, const N: usize>(PhantomData<T>);

impl<T, const N: usize> LaneOps for Packed<T, N>
where
    T: Element,
    [T; N]: bytemuck::Pod,
{
    type Elem = T;
    type Lane = [T; N];

    const WIDTH: usize = N;
    const NAME: &'static str = "packed";

    #[inline(always)]
    fn broadcast(x: T) -> [T; N] {
        [x; N]
    }

    #[inline(always)]
    fn zero() -> [T; N] {
        [T::ZERO; N]
    }

    #[inline(always)]
    fn add(a: [T; N], b: [T; N]) -> [T; N] {
        std::array::from_fn(|i| T::add(a[i], b[i]))
    }

    #[inline(always)]
    fn sub(a: [T; N], b: [T; N]) -> [T; N] {
        std::array::from_fn(|i| T::sub(a[i], b[i]))
    }

    #[inline(always)]
    fn mul(a: [T; N], b: [T; N]) -> [T; N] {
        std::array::from_fn(|i| T::mul(a[i], b[i]))
    }

    #[inline(always)]
    fn reduce(a: [T; N]) -> T {
        a.into_iter().fold(T::ZERO, T::add)
    }

    #[inline(always)]
    fn mask_start(mut a: [T; N], gap: Offset) -> [T; N] {
        debug_assert!((0..N as Offset).contains(&gap));
        a[..gap as usize].fill(T::ZERO);
        a
    }

    #[inline(always)]
    fn mask_end(mut a: [T; N], gap: Offset) -> [T; N] {
        debug_assert!((1 - N as Offset..=0).contains(&gap));
        a[(N as Offset + gap) as usize..].fill(T::ZERO);
        a
    }
}
