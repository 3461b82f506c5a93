//! Bench command implementation

use std::{
    ops::Range,
    time::{Duration, Instant},
};

use anyhow::{Context, Result, bail, ensure};
use clap::ValueEnum;
use lanevec::{AllocStrategy, LaneVec};
use lanevec_ops::{LaneOps, Packed, Scalar, lane_sum, sum};

/// Largest relative error, against the closed-form sum, that still passes.
const MAX_RELATIVE_ERROR: f64 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    Native,
    Padded,
}

impl From<Strategy> for AllocStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Native => AllocStrategy::Native,
            Strategy::Padded => AllocStrategy::Padded,
        }
    }
}

struct Measurement {
    name: String,
    value: f32,
    elapsed: Duration,
}

pub fn run(count: usize, begin: usize, end: usize, strategy: Option<Strategy>) -> Result<()> {
    ensure!(
        begin <= end && end <= count,
        "range {begin}..{end} is out of bounds for {count} elements"
    );
    let strategy = strategy.map_or_else(AllocStrategy::platform_default, AllocStrategy::from);
    let range = begin..end;
    let expected = series_sum(&range);

    println!("Summing elements {begin}..{end} of {count} (values 1, 2, 3, ...) via {strategy:?}");

    let mut measurements = Vec::new();
    measurements.extend(measure::<Scalar<f32>>(count, &range, strategy, true)?);
    measurements.extend(measure::<Packed<f32, 4>>(count, &range, strategy, false)?);
    measurements.extend(measure::<Packed<f32, 8>>(count, &range, strategy, false)?);
    #[cfg(target_arch = "x86_64")]
    measurements.extend(measure::<lanevec_ops::Sse>(count, &range, strategy, false)?);

    report(&measurements, expected, range.len())
}

/// Prints one line per measurement and fails if any of them strays more than
/// [`MAX_RELATIVE_ERROR`] from `expected` or from the element fold (the first
/// measurement).
fn report(measurements: &[Measurement], expected: f64, elements: usize) -> Result<()> {
    println!("  Expected: {expected}");
    let reference = measurements.first().map_or(expected, |m| m.value as f64);
    let mut failed = Vec::new();
    for m in measurements {
        let value = m.value as f64;
        let error = relative_error(value, expected);
        let drift = relative_error(value, reference);
        println!(
            "  {:<12} {value:>16e}  {:>8.3} ns/element  error {error:.2e}  vs element fold {drift:.2e}",
            m.name,
            ns_per_element(m.elapsed, elements),
        );
        if error > MAX_RELATIVE_ERROR || drift > MAX_RELATIVE_ERROR {
            failed.push(m.name.as_str());
        }
    }

    if !failed.is_empty() {
        bail!(
            "relative error above {MAX_RELATIVE_ERROR} for: {}",
            failed.join(", ")
        );
    }
    Ok(())
}

/// Allocates and fills a vector with `O`'s lane type, then times the lane-wise
/// sum and, if `element_fold` is set, the plain element fold as well.
fn measure<O>(
    count: usize,
    range: &Range<usize>,
    strategy: AllocStrategy,
    element_fold: bool,
) -> Result<Vec<Measurement>>
where
    O: LaneOps<Elem = f32>,
{
    let mut vec = LaneVec::<f32, O::Lane>::with_strategy(count, strategy)
        .with_context(|| format!("allocating {count} elements for {}", O::NAME))?;

    let start = Instant::now();
    for (i, x) in vec.iter_mut().enumerate() {
        *x = (i + 1) as f32;
    }
    log::debug!("filled {count} elements in {:?}", start.elapsed());

    let mut measurements = Vec::new();
    if element_fold {
        let start = Instant::now();
        let value = sum(&mut vec, range.clone());
        measurements.push(Measurement {
            name: "element".to_string(),
            value,
            elapsed: start.elapsed(),
        });
    }

    let start = Instant::now();
    let value = lane_sum::<O>(&mut vec, range.clone());
    measurements.push(Measurement {
        name: format!("{}x{}", O::NAME, O::WIDTH),
        value,
        elapsed: start.elapsed(),
    });
    Ok(measurements)
}

/// Sum of `i + 1` for `i` in `range`, the values the vector is filled with.
fn series_sum(range: &Range<usize>) -> f64 {
    let (b, e) = (range.start as f64, range.end as f64);
    (e * (e + 1.0) - b * (b + 1.0)) / 2.0
}

fn relative_error(value: f64, expected: f64) -> f64 {
    if expected == 0.0 {
        value.abs()
    } else {
        ((value - expected) / expected).abs()
    }
}

fn ns_per_element(elapsed: Duration, elements: usize) -> f64 {
    elapsed.as_nanos() as f64 / elements.max(1) as f64
}
