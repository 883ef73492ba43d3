use std::f32::consts::{FRAC_PI_4, PI};

use glam::{Mat4, Vec3, Vec4};

use super::crossing::{sign, Sheet};
use crate::options::CameraOptions;

/// Free-flying camera in the wormhole's embedding space.
///
/// Besides the usual pose and projection state the camera tracks two
/// scalars the lensing stage needs: `r`, its distance from the coordinate
/// origin, and `l`, a signed depth whose sign names the sheet it is on.
///
/// The basis vectors are re-orthonormalized only by [`Camera::update_view`];
/// call it once per frame after any pose change and before reading the
/// view matrix. The cached matrices are identity until the first
/// `update_view` / `update_proj`.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub(super) right: Vec3,
    pub(super) up: Vec3,
    pub(super) look: Vec3,
    pub(super) position: Vec3,

    aspect: f32,
    fov_x: f32,
    fov_y: f32,
    near_z: f32,
    far_z: f32,

    view: Mat4,
    proj: Mat4,

    pub(super) speed: f32,
    pub(super) rotate_rate: f32,

    width: u32,
    height: u32,

    /// Signed depth along the embedding coordinate.
    pub(super) l: f32,
    /// Distance from the coordinate origin.
    pub(super) r: f32,
}

impl Default for Camera {
    fn default() -> Self {
        let position = Vec3::new(2.0, 2.0, 2.0);
        let (width, height): (u32, u32) = (1280, 720);
        let fov_y = FRAC_PI_4;
        Self {
            right: Vec3::X,
            up: Vec3::Y,
            look: Vec3::Z,
            position,
            aspect: width as f32 / height as f32,
            fov_x: fov_y * width as f32 / height as f32,
            fov_y,
            near_z: 0.1,
            far_z: 100.0,
            view: Mat4::IDENTITY,
            proj: Mat4::IDENTITY,
            speed: 10.0,
            rotate_rate: 1.0,
            width,
            height,
            l: 1.0,
            r: position.length(),
        }
    }
}

impl Camera {
    /// Create a camera with default pose and projection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a camera from options: resolution, field of view, clip planes,
    /// motion rates and initial pose. Matrices are derived before returning.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let mut camera = Self {
            speed: options.speed,
            rotate_rate: options.rotate_rate,
            ..Self::default()
        };
        camera.set_resolution_fov(
            options.width,
            options.height,
            options.fov_degrees,
        );
        camera.set_near_z(options.near_z);
        camera.set_far_z(options.far_z);
        camera.look_at(
            Vec3::from_array(options.eye),
            Vec3::from_array(options.target),
            Vec3::from_array(options.world_up),
        );
        camera.update_view();
        camera.update_proj();
        camera
    }

    // ── Pose ──────────────────────────────────────────────────────────

    /// Camera position in the current sheet's local coordinates.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Right basis vector.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Up basis vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Viewing direction.
    #[must_use]
    pub fn look(&self) -> Vec3 {
        self.look
    }

    /// Point one unit ahead of the camera.
    #[must_use]
    pub fn look_at_point(&self) -> Vec3 {
        self.position + self.look
    }

    /// Signed depth coordinate `l`.
    #[must_use]
    pub fn l(&self) -> f32 {
        self.l
    }

    /// Distance `r` from the coordinate origin.
    #[must_use]
    pub fn r(&self) -> f32 {
        self.r
    }

    /// Sheet the camera is on, read from the sign of `l`.
    #[must_use]
    pub fn sheet(&self) -> Sheet {
        Sheet::of_depth(self.l)
    }

    /// Overwrite the depth coordinate.
    pub fn set_depth(&mut self, l: f32) {
        self.l = l;
    }

    /// Move without consulting the wormhole.
    ///
    /// `r` is refreshed; `l` and the sheet are left as they were. Use
    /// [`Camera::set_position_through`] for teleports that may cross the
    /// throat.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.r = position.length();
    }

    /// Place the camera at `eye` facing `target`.
    ///
    /// `r` becomes `|eye|` and `l` takes the magnitude `|eye|` with its
    /// previous sign. Unlike the movement path this does not subtract the
    /// throat radius.
    ///
    /// `world_up` must not be parallel to `target - eye`; the right vector
    /// is undefined (NaN) in that case.
    pub fn look_at(&mut self, eye: Vec3, target: Vec3, world_up: Vec3) {
        let look = (target - eye).normalize();
        let right = world_up.cross(look).normalize();
        let up = look.cross(right);

        self.position = eye;
        self.right = right;
        self.up = up;
        self.look = look;

        self.r = eye.length();
        self.l = eye.length() * sign(self.l);
    }

    /// Distance covered per unit of `dt` by the movement commands.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Set the movement speed.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Multiplier applied to every rotation angle.
    #[must_use]
    pub fn rotate_rate(&self) -> f32 {
        self.rotate_rate
    }

    /// Set the rotation rate.
    pub fn set_rotate_rate(&mut self, rotate_rate: f32) {
        self.rotate_rate = rotate_rate;
    }

    // ── Projection ────────────────────────────────────────────────────

    /// Set the render resolution and horizontal field of view in degrees.
    ///
    /// Must be called before [`Camera::update_proj`].
    pub fn set_resolution_fov(&mut self, width: u32, height: u32, fov: f32) {
        self.width = width;
        self.height = height;
        self.aspect = width as f32 / height as f32;
        self.fov_x = fov * PI / 180.0;
        self.fov_y = self.fov_x * height as f32 / width as f32;
    }

    /// Set the near clip distance.
    pub fn set_near_z(&mut self, near_z: f32) {
        self.near_z = near_z;
    }

    /// Set the far clip distance.
    pub fn set_far_z(&mut self, far_z: f32) {
        self.far_z = far_z;
    }

    /// Near clip distance.
    #[must_use]
    pub fn near_z(&self) -> f32 {
        self.near_z
    }

    /// Far clip distance.
    #[must_use]
    pub fn far_z(&self) -> f32 {
        self.far_z
    }

    /// Horizontal field of view in radians.
    #[must_use]
    pub fn fov_x(&self) -> f32 {
        self.fov_x
    }

    /// Vertical field of view in radians.
    #[must_use]
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    /// Width over height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Rendered image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Rendered image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    // ── Matrices ──────────────────────────────────────────────────────

    /// Re-orthonormalize the basis and rebuild the left-handed view matrix.
    pub fn update_view(&mut self) {
        let right = self.up.cross(self.look).normalize();
        let up = self.look.cross(right).normalize();
        let look = self.look.normalize();

        let p = self.position;
        let x = -p.dot(right);
        let y = -p.dot(up);
        let z = -p.dot(look);

        self.right = right;
        self.up = up;
        self.look = look;

        // Rows are the basis vectors; the last column is the translation.
        self.view = Mat4::from_cols(
            Vec4::new(right.x, up.x, look.x, 0.0),
            Vec4::new(right.y, up.y, look.y, 0.0),
            Vec4::new(right.z, up.z, look.z, 0.0),
            Vec4::new(x, y, z, 1.0),
        );
    }

    /// Rebuild the left-handed perspective projection with a [0, 1] depth
    /// range.
    pub fn update_proj(&mut self) {
        self.proj =
            Mat4::perspective_lh(self.fov_y, self.aspect, self.near_z, self.far_z);
    }

    /// Cached view matrix.
    #[must_use]
    pub fn view(&self) -> Mat4 {
        self.view
    }

    /// Cached projection matrix.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        self.proj
    }

    /// World to clip transform: view first, then projection.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.proj * self.view
    }
}
