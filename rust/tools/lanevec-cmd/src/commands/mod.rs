//! Command implementations for lanevec-cmd

pub mod bench;
pub mod walk;
