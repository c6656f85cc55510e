//! Shared utilities for host integration.

/// Elapsed time between host frames.
pub mod frame_timing;

pub use frame_timing::FrameClock;
