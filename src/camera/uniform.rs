//! Plain-data blocks handed to the lensing shaders each frame.

use super::core::Camera;
use crate::wormhole::{WormholeGeometry, WormholeUniform};

/// Number of entries in the deflection-angle lookup the renderer fills
/// from the camera depth.
pub const PHI_CACHE_SIZE: u32 = 16384;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Camera root constants for the lensing pass: four direction vectors
/// followed by projection scalars, 20 floats in total.
pub struct CameraUniform {
    /// Camera position (w = 0).
    pub position: [f32; 4],
    /// Look direction (w = 0).
    pub forward: [f32; 4],
    /// Up direction (w = 0).
    pub up: [f32; 4],
    /// Right direction (w = 0).
    pub right: [f32; 4],
    /// Horizontal field of view in radians.
    pub fov_x: f32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Render width in pixels.
    pub width: f32,
    /// Render height in pixels.
    pub height: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Constants for the lookup-table fill pass.
pub struct DepthUniform {
    /// Number of lookup entries.
    pub buffer_size: i32,
    /// Signed depth of the camera.
    pub l: f32,
    /// Camera distance from the origin.
    pub r: f32,
    /// Padding for 16-byte alignment.
    pub(crate) _pad: u32,
}

impl Camera {
    /// Pack the pose and projection into the shader layout.
    #[must_use]
    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            position: self.position().extend(0.0).to_array(),
            forward: self.look().extend(0.0).to_array(),
            up: self.up().extend(0.0).to_array(),
            right: self.right().extend(0.0).to_array(),
            fov_x: self.fov_x(),
            fov_y: self.fov_y(),
            width: self.width() as f32,
            height: self.height() as f32,
        }
    }

    /// Pack `l` and `r` for the lookup-table fill.
    #[must_use]
    pub fn depth_uniform(&self) -> DepthUniform {
        DepthUniform {
            buffer_size: PHI_CACHE_SIZE as i32,
            l: self.l(),
            r: self.r(),
            _pad: 0,
        }
    }
}

/// Everything the renderer reads for one frame.
///
/// Take it after all movement and rotation for the frame and after
/// `update_view` / `update_proj`; the renderer never sees a half-updated
/// camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    /// Camera constants.
    pub camera: CameraUniform,
    /// Lookup-table fill constants.
    pub depth: DepthUniform,
    /// Wormhole constants.
    pub wormhole: WormholeUniform,
    /// Column-major view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl FrameSnapshot {
    /// Capture the current camera and wormhole state.
    #[must_use]
    pub fn capture(camera: &Camera, wormhole: &WormholeGeometry) -> Self {
        Self {
            camera: camera.to_uniform(),
            depth: camera.depth_uniform(),
            wormhole: wormhole.to_uniform(),
            view_proj: camera.view_projection().to_cols_array_2d(),
        }
    }
}
