//! Shared utilities.

/// Frame timing with a periodic FPS report.
pub mod frame_timing;

pub use frame_timing::FrameTiming;
