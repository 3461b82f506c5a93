use thiserror::Error;

/// Failure to obtain an aligned memory region.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocError {
    #[error("alignment {alignment} is not a power of two")]
    InvalidAlignment { alignment: usize },

    #[error("region of {size} bytes at alignment {alignment} exceeds the address space")]
    SizeOverflow { size: usize, alignment: usize },

    #[error("failed to allocate {size} bytes at alignment {alignment}")]
    OutOfMemory { size: usize, alignment: usize },

    #[error("no aligned region of {size} bytes at alignment {alignment} within the allocation")]
    NoAlignedRegion { size: usize, alignment: usize },
}
