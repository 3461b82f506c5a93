//! `f32` lanes backed by 128-bit SSE registers.

#![allow(unused_unsafe)]

use std::arch::x86_64::*;

use lanevec::Offset;

use crate::lane_ops::LaneOps;

/// Four `f32` elements per `__m128` lane.
pub struct Sse;

/// `START_MASKS[g]` keeps all but the first `g` elements.
const START_MASKS: [[u32; 4]; 4] = [
    [!0, !0, !0, !0],
    [0, !0, !0, !0],
    [0, 0, !0, !0],
    [0, 0, 0, !0],
];

/// `END_MASKS[g + 3]` keeps all but the last `-g` elements.
const END_MASKS: [[u32; 4]; 4] = [
    [!0, 0, 0, 0],
    [!0, !0, 0, 0],
    [!0, !0, !0, 0],
    [!0, !0, !0, !0],
];

#[inline(always)]
fn mask(a: __m128, bits: [u32; 4]) -> __m128 {
    unsafe { _mm_and_ps(a, bytemuck::cast::<[u32; 4], __m128>(bits)) }
}

impl LaneOps for Sse {
    type Elem = f32;
    type Lane = __m128;

    const WIDTH: usize = 4;
    const NAME: &'static str = "sse";

    #[inline(always)]
    fn broadcast(x: f32) -> __m128 {
        unsafe { _mm_set1_ps(x) }
    }

    #[inline(always)]
    fn zero() -> __m128 {
        unsafe { _mm_setzero_ps() }
    }

    #[inline(always)]
    fn add(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_add_ps(a, b) }
    }

    #[inline(always)]
    fn sub(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_sub_ps(a, b) }
    }

    #[inline(always)]
    fn mul(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_mul_ps(a, b) }
    }

    #[inline(always)]
    fn reduce(a: __m128) -> f32 {
        unsafe {
            // (a0 + a2, a1 + a3) in the low half, then fold the pair.
            let pairs = _mm_add_ps(a, _mm_movehl_ps(a, a));
            let total = _mm_add_ss(pairs, _mm_shuffle_ps::<0b01>(pairs, pairs));
            _mm_cvtss_f32(total)
        }
    }

    #[inline(always)]
    fn mask_start(a: __m128, gap: Offset) -> __m128 {
        debug_assert!((0..4).contains(&gap));
        mask(a, START_MASKS[gap as usize])
    }

    #[inline(always)]
    fn mask_end(a: __m128, gap: Offset) -> __m128 {
        debug_assert!((-3..=0).contains(&gap));
        mask(a, END_MASKS[(gap + 3) as usize])
    }
}
