//! Camera navigation through the wormhole's embedding space.
//!
//! Provides the free-flying camera with sheet-aware movement, basis
//! rotation, view/projection derivation, shader constant packing, and the
//! per-frame navigation controller.

/// Per-frame navigation controller driven by held input actions.
pub mod controller;
/// Core camera struct: pose, depth coordinate, projection and matrices.
pub mod core;
/// Sheet bookkeeping and throat reflection.
pub mod crossing;
/// Sheet-aware translation (walk, strafe, fly, teleport).
mod movement;
/// Basis rotation (pitch, yaw, roll, world yaw).
mod rotation;
/// Shader constant blocks and per-frame snapshots.
pub mod uniform;

pub use self::core::Camera;
pub use controller::NavigationController;
pub use crossing::{cross_space, sign, Crossing, Sheet};
pub use uniform::{CameraUniform, DepthUniform, FrameSnapshot};
