//! Lane-wise arithmetic over [`LaneVec`](lanevec::LaneVec) storage.
//!
//! [`LaneOps`] is the capability set a lane-wise scan needs for one pairing of
//! element and lane types: broadcast, zero, element-wise arithmetic, reduction
//! of a lane to a scalar, and masking of the elements that fall outside a
//! range at either end of a lane. [`reduce`] builds range sums on top of it.

pub mod element;
pub mod lane_ops;
pub mod packed;
pub mod reduce;
pub mod scalar;

#[cfg(target_arch = "x86_64")]
pub mod sse;

pub use element::Element;
pub use lane_ops::LaneOps;
pub use packed::Packed;
pub use reduce::{fold_elements, fold_lanes, lane_sum, sum};
pub use scalar::Scalar;

#[cfg(target_arch = "x86_64")]
pub use sse::Sse;
