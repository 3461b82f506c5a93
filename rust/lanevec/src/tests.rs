use lanevec_alloc::AllocError;

use crate::{AllocStrategy, ElementIter, ErrorKind, LaneGeometry, LaneIter, LaneVec, Offset};

const STRATEGIES: [AllocStrategy; 2] = [AllocStrategy::Native, AllocStrategy::Padded];

fn filled_u8(count: usize) -> LaneVec<u8, u32> {
    let mut vec = LaneVec::<u8, u32>::new(count).unwrap();
    let (mut it, end) = vec.range();
    let mut value = 0u8;
    while it != end {
        unsafe { it.post_inc().write(value) };
        value = value.wrapping_add(1);
    }
    vec
}

/// Element `index` of a lane, viewing the lane as `k` packed elements.
fn lane_element<T: bytemuck::Pod, L: bytemuck::Pod>(lane: L, index: Offset) -> T {
    let size = std::mem::size_of::<T>();
    let start = index as usize * size;
    bytemuck::pod_read_unaligned(&bytemuck::bytes_of(&lane)[start..start + size])
}

#[test]
fn test_u8_in_u32_lanes() {
    let mut vec = filled_u8(20);
    assert_eq!(vec.len(), 20);
    assert_eq!(vec.capacity(), 20);
    assert_eq!(vec.lane_width(), 4);
    assert_eq!(vec.as_slice(), (0..20).collect::<Vec<u8>>().as_slice());

    let lane = vec.begin().lower_lane();
    assert_eq!(unsafe { lane.read_at(0) }, u32::from_ne_bytes([0, 1, 2, 3]));
    assert_eq!(unsafe { lane.read_at(1) }, u32::from_ne_bytes([4, 5, 6, 7]));
    #[cfg(target_endian = "little")]
    assert_eq!(unsafe { lane.read_at(0) }, 0x0302_0100);

    unsafe { lane.write_at(0, 0x0505_0505) };
    assert_eq!(&vec[..6], &[5, 5, 5, 5, 4, 5]);
    assert_eq!(vec[19], 19);
}

#[test]
fn test_element_cursor_access() {
    let mut vec = filled_u8(20);
    let begin = vec.begin();
    let other = begin + 5;
    unsafe {
        assert_eq!(begin.read(), 0);
        assert_eq!(other.read(), 5);
        assert_eq!(begin.read_at(7), 7);
        other.write(55);
        assert_eq!(begin.read_at(5), 55);
        (2 + begin).write_at(1, 33);
    }
    assert_eq!(vec[3], 33);
    assert_eq!(vec[5], 55);
}

#[test]
fn test_alignment_of_storage() {
    fn check<T: bytemuck::Pod, L: bytemuck::Pod>(strategy: AllocStrategy) {
        for count in [0, 1, 3, 17, 64, 1000] {
            let mut vec = LaneVec::<T, L>::with_strategy(count, strategy).unwrap();
            assert_eq!(vec.strategy(), strategy);
            let addr = vec.begin().as_ptr() as usize;
            assert_eq!(addr % std::mem::size_of::<L>(), 0);
        }
    }
    for strategy in STRATEGIES {
        check::<u8, u32>(strategy);
        check::<u8, u128>(strategy);
        check::<u16, u64>(strategy);
        check::<f32, [f32; 4]>(strategy);
        check::<f32, [f32; 16]>(strategy);
        check::<f64, [f64; 8]>(strategy);
        check::<u32, u32>(strategy);
    }
}

#[test]
fn test_logical_bound() {
    for strategy in STRATEGIES {
        for count in 0..50 {
            let mut vec = LaneVec::<u16, [u16; 8]>::with_strategy(count, strategy).unwrap();
            let (begin, end) = vec.range();
            assert_eq!(end - begin, count as Offset);
            assert_eq!(vec.len(), count);
            assert_eq!(vec.capacity(), count.div_ceil(8) * 8);
            assert_eq!(vec.lane_count(), count.div_ceil(8));
            let range = vec.as_ptr_range();
            assert_eq!(range.end as usize - range.start as usize, count * 2);
        }
    }
}

#[test]
fn test_padding_is_zero_and_outside_range() {
    let mut vec = LaneVec::<u8, u32>::new(21).unwrap();
    vec.as_mut_slice().fill(0xff);
    assert_eq!(vec.capacity(), 24);
    assert_eq!(vec.lanes().len(), 6);
    assert_eq!(vec.lanes()[5], u32::from_ne_bytes([0xff, 0, 0, 0]));

    let last = vec.end() - 1;
    assert_eq!(last.lower_lane().offset(), 5);
    assert_eq!(last.lane_end_gap(), -3);
}

#[test]
fn test_lane_round_trip() {
    fn check<T, L>(count: usize)
    where
        T: bytemuck::Pod + PartialEq + std::fmt::Debug + From<u8>,
        L: bytemuck::Pod,
    {
        let mut vec = LaneVec::<T, L>::new(count).unwrap();
        for (i, v) in vec.iter_mut().enumerate() {
            *v = T::from((i * 7 % 251) as u8);
        }
        let (mut it, end) = vec.range();
        while it != end {
            let lane = it.lower_lane();
            let value: T = lane_element(unsafe { lane.read() }, it.lane_start_gap());
            assert_eq!(value, unsafe { it.read() });
            it.inc();
        }
    }
    check::<u8, u32>(37);
    check::<u8, u64>(64);
    check::<u16, u64>(13);
    check::<u32, [u32; 4]>(29);
    check::<f32, [f32; 4]>(29);
    check::<f64, [f64; 2]>(9);
    check::<u64, u64>(5);
}

#[test]
fn test_lane_mapping() {
    let mut vec = LaneVec::<u8, u32>::new(20).unwrap();
    let begin = vec.begin();

    let expected: [(Offset, Offset, Offset); 9] = [
        (0, 0, -3),
        (1, 1, -2),
        (2, 2, -1),
        (3, 3, 0),
        (4, 0, -3),
        (7, 3, 0),
        (8, 0, -3),
        (18, 2, -1),
        (19, 3, 0),
    ];
    for (pos, start_gap, end_gap) in expected {
        let it = begin + pos;
        assert_eq!(it.lane_start_gap(), start_gap, "start gap at {pos}");
        assert_eq!(it.lane_end_gap(), end_gap, "end gap at {pos}");
        assert_eq!(it.lower_lane().offset(), pos / 4);
        assert_eq!(it.upper_lane().offset(), pos / 4 + 1);
        assert_eq!(it.upper_lane() - it.lower_lane(), 1);
    }

    let end = begin + 20;
    assert_eq!(end.lower_lane().offset(), 5);
    assert_eq!(end.lane_start_gap(), 0);
    assert_eq!(begin.lower_lane(), (begin + 3).lower_lane());
    assert_ne!(begin.lower_lane(), (begin + 4).lower_lane());
}

#[test]
fn test_geometry() {
    type G = LaneGeometry<f32, [f32; 8]>;
    assert_eq!(G::LANE_WIDTH, 8);
    assert_eq!(G::LANE_BYTES, 32);
    assert_eq!(G::lane_index(17), 2);
    assert_eq!(G::intra_lane_offset(17), 1);
    assert_eq!(G::start_gap(16), 0);
    assert_eq!(G::end_gap(16), -7);
    assert_eq!(G::end_gap(23), 0);
    assert_eq!(G::lane_index(-1), -1);
    assert_eq!(G::intra_lane_offset(-1), 7);
    assert_eq!(G::rounded_len(0), Some(0));
    assert_eq!(G::rounded_len(1), Some(8));
    assert_eq!(G::rounded_len(16), Some(16));
    assert_eq!(G::rounded_len(usize::MAX), None);

    assert_eq!(LaneGeometry::<u32, u32>::LANE_WIDTH, 1);
    assert_eq!(LaneGeometry::<u32, u32>::end_gap(5), 0);
    assert_eq!(LaneGeometry::<u32, u32>::start_gap(5), 0);
}

#[test]
fn test_cursor_arithmetic() {
    let mut vec = filled_u8(20);
    let (begin, end) = vec.range();

    let mut it = begin;
    assert_eq!(it.post_inc(), begin);
    assert_eq!(it, begin + 1);
    it.inc().inc();
    assert_eq!(it.offset(), 3);
    assert_eq!(it.post_dec().offset(), 3);
    it.dec();
    assert_eq!(it.offset(), 1);
    it += 10;
    assert_eq!(it - begin, 11);
    it -= 4;
    assert_eq!(unsafe { it.read() }, 7);
    assert_eq!(end - it, 13);
    assert_eq!(begin - end, -20);
    assert_eq!(end - 20, begin);

    assert!(begin < end);
    assert!(it > begin);
    assert!(it <= end);
    assert!(end >= it);
    assert_eq!(begin.max(end), end);

    let mut lane = begin.lower_lane();
    let lane_end = end.lower_lane();
    let mut lanes = 0;
    while lane != lane_end {
        lane.inc();
        lanes += 1;
    }
    assert_eq!(lanes, 5);
    assert!(begin.lower_lane() < lane_end);
    assert_eq!((lane_end - 2).offset(), 3);
    assert_eq!(2 + begin.lower_lane(), lane_end - 3);
}

#[test]
fn test_default_cursors() {
    let a = ElementIter::<u8, u32>::default();
    let b = ElementIter::<u8, u32>::default();
    assert!(a.is_null());
    assert_eq!(a, b);
    assert_eq!(a.offset(), 0);
    let lane = LaneIter::<u8, u32>::default();
    assert!(lane.is_null());
    assert_eq!(lane, a.lower_lane());

    let copy = a + 3;
    assert_ne!(copy, a);
    assert_eq!(copy - a, 3);
}

#[test]
fn test_move_transfers_ownership() {
    let mut a = filled_u8(20);
    let ptr = a.as_ptr();

    let b = a;
    assert_eq!(b.as_ptr(), ptr);
    assert_eq!(b.len(), 20);
    assert_eq!(b[7], 7);

    let mut c = b;
    let taken = std::mem::take(&mut c);
    assert_eq!(taken.as_ptr(), ptr);
    assert_eq!(taken.len(), 20);
    assert!(c.is_empty());
    assert!(c.as_ptr().is_null());
    assert!(c.lanes().is_empty());
    let (begin, end) = c.range();
    assert_eq!(end - begin, 0);

    a = taken;
    assert_eq!(a.as_ptr(), ptr);
    assert_eq!(a[19], 19);
    drop(c);
}

#[test]
fn test_move_assign_swaps() {
    let mut a = filled_u8(8);
    let mut b = LaneVec::<u8, u32>::new(40).unwrap();
    let (pa, pb) = (a.as_ptr(), b.as_ptr());
    std::mem::swap(&mut a, &mut b);
    assert_eq!(a.as_ptr(), pb);
    assert_eq!(a.len(), 40);
    assert_eq!(b.as_ptr(), pa);
    assert_eq!(b[5], 5);
}

#[test]
fn test_unsupported_lane_size() {
    let err = LaneVec::<u8, [u8; 3]>::new(10).unwrap_err();
    match err.kind() {
        ErrorKind::Alignment {
            count,
            lane_bytes,
            source,
        } => {
            assert_eq!(*count, 10);
            assert_eq!(*lane_bytes, 3);
            assert_eq!(*source, AllocError::InvalidAlignment { alignment: 3 });
        }
    }
    assert!(err.to_string().contains("3-byte lanes"));
}

#[test]
fn test_size_overflow() {
    for strategy in STRATEGIES {
        let err = LaneVec::<u64, [u64; 2]>::with_strategy(usize::MAX / 4, strategy).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::Alignment {
                source: AllocError::SizeOverflow { .. },
                ..
            }
        ));
        let err = LaneVec::<u8, [u8; 16]>::with_strategy(usize::MAX, strategy).unwrap_err();
        assert!(matches!(
            err.into_kind(),
            ErrorKind::Alignment {
                source: AllocError::SizeOverflow { .. },
                ..
            }
        ));
    }
}

#[test]
fn test_allocation_failure() {
    for strategy in STRATEGIES {
        let err = LaneVec::<u8, u32>::with_strategy(1 << 60, strategy).unwrap_err();
        assert!(
            matches!(
                err.kind(),
                ErrorKind::Alignment {
                    count,
                    lane_bytes: 4,
                    source: AllocError::OutOfMemory { .. },
                } if *count == 1 << 60
            ),
            "{strategy:?}: {err}"
        );
        assert!(err.to_string().contains("4-byte lanes"));
    }
}

#[test]
fn test_from_slice_and_views() {
    let values: Vec<f32> = (0..10).map(|i| i as f32 * 0.5).collect();
    let mut vec = LaneVec::<f32, [f32; 4]>::from_slice(&values).unwrap();
    assert_eq!(&vec[..], values.as_slice());
    assert_eq!(vec.lanes().len(), 3);
    assert_eq!(vec.lanes()[2], [4.0, 4.5, 0.0, 0.0]);

    vec.lanes_mut()[0] = [9.0; 4];
    assert_eq!(&vec[..5], &[9.0, 9.0, 9.0, 9.0, 2.0]);
    assert_eq!(vec.iter().copied().sum::<f32>(), 36.0 + 2.0 + 2.5 + 3.0 + 3.5 + 4.0 + 4.5);

    let debug = format!("{vec:?}");
    assert!(debug.starts_with("LaneVec"));
    assert!(debug.contains("lane_width: 4"));
}

#[test]
fn test_random_writes_through_cursors() {
    let mut rng = fastrand::Rng::with_seed(7);
    let mut expected = vec![0u32; 333];
    let mut vec = LaneVec::<u32, [u32; 8]>::new(333).unwrap();
    let begin = vec.begin();
    for _ in 0..1000 {
        let pos = rng.usize(..333);
        let value = rng.u32(..);
        unsafe { begin.write_at(pos as Offset, value) };
        expected[pos] = value;
    }
    assert_eq!(vec.as_slice(), expected.as_slice());
}

#[test]
fn test_empty_container() {
    let mut vec = LaneVec::<u8, u32>::new(0).unwrap();
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 0);
    assert!(!vec.as_ptr().is_null());
    let (begin, end) = vec.range();
    assert_eq!(begin, end);

    let vec = LaneVec::<u8, u32>::default();
    assert!(vec.as_slice().is_empty());
    assert_eq!(vec.capacity(), 0);
}
