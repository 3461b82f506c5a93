//! Walk command implementation

use anyhow::{Context, Result};
use lanevec::LaneVec;

const COUNT: usize = 20;

/// Fills 20 `u8` elements with `0..20`, prints them element by element and
/// lane by lane, then overwrites the first lane with `0x05050505`.
pub fn run() -> Result<()> {
    let mut vec = LaneVec::<u8, u32>::new(COUNT).context("allocating walkthrough vector")?;
    println!(
        "{COUNT} u8 elements, {} per u32 lane, {} lanes at {:p}",
        vec.lane_width(),
        vec.lane_count(),
        vec.as_ptr()
    );

    let (mut it, end) = vec.range();
    let mut value = 0u8;
    while it != end {
        // SAFETY: `it` stays within `[begin, end)`.
        unsafe { it.post_inc().write(value) };
        value += 1;
    }

    print_elements(&mut vec);
    print_lanes(&mut vec);

    let begin = vec.begin();
    let lane = begin.lower_lane();
    // SAFETY: the first lane lies within the container's storage.
    unsafe {
        println!("Lane of element 0: {:#010x}", lane.read());
        lane.write(0x0505_0505);
    }
    println!("After writing 0x05050505 through that lane:");
    print_elements(&mut vec);
    Ok(())
}

fn print_elements(vec: &mut LaneVec<u8, u32>) {
    let (mut it, end) = vec.range();
    let mut line = String::from("  elements:");
    while it < end {
        // SAFETY: `it` stays within `[begin, end)`.
        let x = unsafe { it.read() };
        line.push_str(&format!(" {x}"));
        it.inc();
    }
    println!("{line}");
}

fn print_lanes(vec: &mut LaneVec<u8, u32>) {
    let (begin, end) = vec.range();
    let mut lane = begin.lower_lane();
    let lanes_end = (end - 1).upper_lane();
    let mut line = String::from("  lanes:");
    while lane != lanes_end {
        // SAFETY: every lane up to the one holding the last element is allocated.
        let x = unsafe { lane.read() };
        line.push_str(&format!(" {x:#010x}"));
        lane.inc();
    }
    println!("{line}");
}
