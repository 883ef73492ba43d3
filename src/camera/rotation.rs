//! Rotation of the camera basis. Independent of the sheet.

use glam::{Quat, Vec3};

use super::core::Camera;

impl Camera {
    /// Rotate up and look about the right vector.
    pub fn pitch(&mut self, angle: f32) {
        let rotation = self.axis_rotation(self.right, angle);
        self.up = rotation * self.up;
        self.look = rotation * self.look;
    }

    /// Rotate right and look about the up vector.
    pub fn yaw(&mut self, angle: f32) {
        let rotation = self.axis_rotation(self.up, angle);
        self.right = rotation * self.right;
        self.look = rotation * self.look;
    }

    /// Rotate right and up about the look vector.
    pub fn roll(&mut self, angle: f32) {
        let rotation = self.axis_rotation(self.look, angle);
        self.right = rotation * self.right;
        self.up = rotation * self.up;
    }

    /// Rotate the whole basis about the world Y axis.
    pub fn rotate_y(&mut self, angle: f32) {
        let rotation = Quat::from_rotation_y(angle * self.rotate_rate);
        self.right = rotation * self.right;
        self.up = rotation * self.up;
        self.look = rotation * self.look;
    }

    fn axis_rotation(&self, axis: Vec3, angle: f32) -> Quat {
        // The basis drifts between update_view calls.
        Quat::from_axis_angle(axis.normalize(), angle * self.rotate_rate)
    }
}
