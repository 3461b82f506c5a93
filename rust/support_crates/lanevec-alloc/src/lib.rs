//! Allocation of fixed-size memory regions aligned to an arbitrary power-of-two
//! boundary.
//!
//! Two interchangeable strategies back an [`AlignedRegion`]:
//!
//! - [`AllocStrategy::Native`]: an allocator that accepts an alignment parameter
//!   (`posix_memalign` on unix, an aligned `std::alloc::Layout` elsewhere).
//! - [`AllocStrategy::Padded`]: an ordinary byte allocation enlarged by the
//!   alignment, with the aligned start located inside it.
//!
//! The strategy used by default is picked per target platform, see
//! [`AllocStrategy::platform_default`].

pub mod align;
pub mod aligned_region;
pub mod error;

#[cfg_attr(unix, path = "native_posix.rs")]
#[cfg_attr(not(unix), path = "native_layout.rs")]
mod native;

mod padded;

pub use aligned_region::{AlignedRegion, AllocStrategy};
pub use error::AllocError;
