use std::ops::Range;

use lanevec::{AllocStrategy, LaneVec};
use lanevec_ops::{Element, LaneOps, Packed, Scalar, lane_sum, sum};

fn random_range(rng: &mut fastrand::Rng, len: usize) -> Range<usize> {
    let a = rng.usize(0..=len);
    let b = rng.usize(0..=len);
    a.min(b)..a.max(b)
}

/// Checks that the lane-wise sum of `O` agrees with the element-wise sum on
/// random ranges, exactly for integers and within `tolerance` (relative) for
/// floats.
fn check_random_ranges<O>(values: &[O::Elem], tolerance: f64, seed: u64)
where
    O: LaneOps,
{
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut vec = LaneVec::<O::Elem, O::Lane>::from_slice(values).unwrap();
    for _ in 0..500 {
        let range = random_range(&mut rng, values.len());
        let expected = sum(&mut vec, range.clone());
        let actual = lane_sum::<O>(&mut vec, range.clone());
        if tolerance == 0.0 {
            assert_eq!(actual, expected, "{} over {range:?}", O::NAME);
        } else {
            let (a, e) = (actual.to_f64(), expected.to_f64());
            assert!(
                (a - e).abs() <= tolerance * e.abs().max(1.0),
                "{} over {range:?}: {a} vs {e}",
                O::NAME
            );
        }
    }
}

#[test]
fn test_random_ranges_u32() {
    let mut rng = fastrand::Rng::with_seed(11);
    let values: Vec<u32> = (0..4099).map(|_| rng.u32(..)).collect();
    check_random_ranges::<Packed<u32, 4>>(&values, 0.0, 1);
    check_random_ranges::<Packed<u32, 16>>(&values, 0.0, 2);
    check_random_ranges::<Scalar<u32>>(&values, 0.0, 3);
}

#[test]
fn test_random_ranges_u8() {
    let mut rng = fastrand::Rng::with_seed(12);
    let values: Vec<u8> = (0..1031).map(|_| rng.u8(..)).collect();
    check_random_ranges::<Packed<u8, 16>>(&values, 0.0, 4);
    check_random_ranges::<Packed<u8, 32>>(&values, 0.0, 5);
}

#[test]
fn test_random_ranges_i64() {
    let mut rng = fastrand::Rng::with_seed(13);
    let values: Vec<i64> = (0..2053).map(|_| rng.i64(..)).collect();
    check_random_ranges::<Packed<i64, 2>>(&values, 0.0, 6);
    check_random_ranges::<Packed<i64, 8>>(&values, 0.0, 7);
}

#[test]
fn test_random_ranges_f64() {
    let mut rng = fastrand::Rng::with_seed(14);
    let values: Vec<f64> = (0..3001).map(|_| rng.f64() * 100.0).collect();
    check_random_ranges::<Packed<f64, 4>>(&values, 1e-12, 8);
}

#[test]
fn test_random_ranges_f32() {
    let mut rng = fastrand::Rng::with_seed(15);
    let values: Vec<f32> = (0..3001).map(|_| rng.f32()).collect();
    check_random_ranges::<Packed<f32, 8>>(&values, 1e-4, 9);
    #[cfg(target_arch = "x86_64")]
    check_random_ranges::<lanevec_ops::Sse>(&values, 1e-4, 10);
}

#[test]
fn test_empty_ranges_everywhere() {
    let values: Vec<u16> = (1..=37).collect();
    let mut vec = LaneVec::<u16, [u16; 8]>::from_slice(&values).unwrap();
    for i in 0..=values.len() {
        assert_eq!(sum(&mut vec, i..i), 0);
        assert_eq!(lane_sum::<Packed<u16, 8>>(&mut vec, i..i), 0);
    }
}

#[test]
fn test_ranges_ending_on_lane_multiples() {
    let values: Vec<u32> = (1..=64).collect();
    let mut vec = LaneVec::<u32, [u32; 8]>::from_slice(&values).unwrap();
    for end in (8..=64).step_by(8) {
        for start in 0..end {
            let expected: u32 = values[start..end].iter().sum();
            assert_eq!(
                lane_sum::<Packed<u32, 8>>(&mut vec, start..end),
                expected,
                "{start}..{end}"
            );
        }
    }
}

#[test]
fn test_ranges_within_one_lane() {
    let values: Vec<i32> = (0..32).map(|i| i * 3 - 40).collect();
    let mut vec = LaneVec::<i32, [i32; 8]>::from_slice(&values).unwrap();
    for lane in 0..4 {
        for start in lane * 8..(lane + 1) * 8 {
            for end in start..=(lane + 1) * 8 {
                let expected: i32 = values[start..end].iter().sum();
                assert_eq!(lane_sum::<Packed<i32, 8>>(&mut vec, start..end), expected);
            }
        }
    }
}

#[test]
fn test_both_strategies_agree() {
    let values: Vec<u64> = (0..999).map(|i| i * i).collect();
    let expected: u64 = values[5..990].iter().sum();
    for strategy in [AllocStrategy::Native, AllocStrategy::Padded] {
        let mut vec = LaneVec::<u64, [u64; 4]>::with_strategy(values.len(), strategy).unwrap();
        vec.copy_from_slice(&values);
        assert_eq!(lane_sum::<Packed<u64, 4>>(&mut vec, 5..990), expected);
        assert_eq!(sum(&mut vec, 5..990), expected);
    }
}

/// Fills `count` elements with `1, 2, 3, ...` and sums `[begin, end)` both
/// ways, comparing against `sum(begin + 1 ..= end)` in closed form.
fn check_sequence_scenario<O>(count: usize, begin: usize, end: usize)
where
    O: LaneOps<Elem = f32>,
{
    let mut vec = LaneVec::<f32, O::Lane>::new(count).unwrap();
    for (i, x) in vec.iter_mut().enumerate() {
        *x = (i + 1) as f32;
    }

    let (b, e) = (begin as f64, end as f64);
    let exact = (e * (e + 1.0) - b * (b + 1.0)) / 2.0;

    let by_element = sum(&mut vec, begin..end) as f64;
    let by_lane = lane_sum::<O>(&mut vec, begin..end) as f64;

    for (name, value) in [("element", by_element), (O::NAME, by_lane)] {
        let rel = (value - exact).abs() / exact;
        assert!(rel < 1e-3, "{name}: {value} vs {exact} (relative error {rel})");
    }
    assert!((by_lane - by_element).abs() / exact < 1e-3);
}

#[test]
fn test_sequence_scenario() {
    check_sequence_scenario::<Packed<f32, 4>>(729_000, 111, 700_666);
    check_sequence_scenario::<Packed<f32, 8>>(729_000, 111, 700_666);
    #[cfg(target_arch = "x86_64")]
    check_sequence_scenario::<lanevec_ops::Sse>(729_000, 111, 700_666);
}
