//! Fixed-size vectors of plain-old-data elements whose storage is aligned to a
//! wider "lane" type, with random-access cursors over individual elements
//! ([`ElementIter`]) and over whole lanes ([`LaneIter`]).
//!
//! A `LaneVec<T, L>` holds `len` logical elements of type `T`. Its storage is
//! rounded up to a whole number of lanes of `L`, each lane spanning
//! `size_of::<L>() / size_of::<T>()` elements, and starts at an address aligned
//! to `size_of::<L>()`. Element cursors map any position to its enclosing lane
//! and to the gaps that must be masked when a range does not start or end on a
//! lane boundary.

pub mod element_iter;
pub mod error;
pub mod geometry;
pub mod lane_iter;
pub mod lane_vec;

mod cursor;

pub use element_iter::ElementIter;
pub use error::{Error, ErrorKind, Result};
pub use geometry::{LaneGeometry, Offset};
pub use lane_iter::LaneIter;
pub use lane_vec::LaneVec;
pub use lanevec_alloc::AllocStrategy;

#[cfg(test)]
mod tests;
