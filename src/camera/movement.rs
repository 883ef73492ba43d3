//! Translation through the two-sheeted space.
//!
//! Every move goes through the same protocol: the step is signed by the
//! current sheet, the candidate position is checked against the throat,
//! `l` is recomputed as `(|p| - radius)` with the pre-crossing sign and then
//! negated if the throat was crossed. Orientation is never touched, so the
//! facing direction stays continuous across a crossing.

use glam::Vec3;

use super::core::Camera;
use super::crossing::{cross_space, Crossing};
use crate::wormhole::WormholeGeometry;

impl Camera {
    /// Move along the look vector by `dt * speed`.
    pub fn walk(&mut self, dt: f32, wormhole: &WormholeGeometry) {
        self.translate(self.look, dt, wormhole);
    }

    /// Move along the right vector by `dt * speed`.
    pub fn strafe(&mut self, dt: f32, wormhole: &WormholeGeometry) {
        self.translate(self.right, dt, wormhole);
    }

    /// Move along the up vector by `dt * speed`.
    pub fn fly(&mut self, dt: f32, wormhole: &WormholeGeometry) {
        self.translate(self.up, dt, wormhole);
    }

    /// Teleport to `position`, reflecting through the throat if it lies
    /// inside it.
    pub fn set_position_through(
        &mut self,
        position: Vec3,
        wormhole: &WormholeGeometry,
    ) {
        let crossing = cross_space(position, self.position, wormhole);
        self.commit(crossing, wormhole);
    }

    fn translate(&mut self, dir: Vec3, dt: f32, wormhole: &WormholeGeometry) {
        // Intent is relative to the camera; past the throat the local
        // coordinates run the other way.
        let dt = dt * self.sheet().sign();
        let candidate = self.position + dir * (dt * self.speed);
        let crossing = cross_space(candidate, self.position, wormhole);
        self.commit(crossing, wormhole);
    }

    fn commit(&mut self, crossing: Crossing, wormhole: &WormholeGeometry) {
        let sheet = self.sheet();
        let radius = crossing.position.length();
        self.l = (radius - wormhole.radius) * sheet.sign();
        if crossing.crossed {
            self.l = -self.l;
            log::debug!(
                "crossed throat into {:?} sheet at r = {radius:.4}, l = {:.4}",
                sheet.flipped(),
                self.l
            );
        }

        self.r = radius;
        self.position = crossing.position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::crossing::Sheet;

    const EPS: f32 = 1e-5;

    fn camera_at(position: Vec3, l: f32, target: Vec3) -> Camera {
        let mut cam = Camera::new();
        cam.look_at(position, target, Vec3::Y);
        cam.set_depth(l);
        cam
    }

    #[test]
    fn walk_through_throat_flips_sheet() {
        let wormhole = WormholeGeometry::default();
        let mut cam = camera_at(Vec3::X, 0.5, Vec3::ZERO);
        assert!(cam.look().abs_diff_eq(Vec3::NEG_X, EPS));

        // speed 10, dt 0.08: a 0.8 step lands at radius 0.2 and reflects to 0.8.
        cam.walk(0.08, &wormhole);
        assert!(cam.position().abs_diff_eq(Vec3::new(0.8, 0.0, 0.0), EPS));
        assert!((cam.r() - 0.8).abs() < EPS);
        assert!((cam.l() + 0.3).abs() < EPS);
        assert_eq!(cam.sheet(), Sheet::Far);
        // Orientation survives the crossing.
        assert!(cam.look().abs_diff_eq(Vec3::NEG_X, EPS));
    }

    #[test]
    fn far_sheet_reverses_step() {
        let wormhole = WormholeGeometry::default();
        let mut cam = camera_at(Vec3::new(0.0, 0.0, 3.0), -2.5, Vec3::ZERO);
        // Looking toward the origin, but on the far sheet the step runs
        // away from it.
        cam.walk(0.1, &wormhole);
        assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 0.0, 4.0), EPS));
        assert!((cam.l() + 3.5).abs() < EPS);
        assert_eq!(cam.sheet(), Sheet::Far);
    }

    #[test]
    fn strafe_and_fly_follow_basis() {
        let wormhole = WormholeGeometry::default();
        let mut cam = camera_at(Vec3::new(0.0, 0.0, -3.0), 2.5, Vec3::ZERO);
        cam.strafe(0.1, &wormhole);
        assert!(cam.position().abs_diff_eq(Vec3::new(1.0, 0.0, -3.0), EPS));
        cam.fly(-0.1, &wormhole);
        assert!(cam.position().abs_diff_eq(Vec3::new(1.0, -1.0, -3.0), EPS));
        assert!((cam.r() - cam.position().length()).abs() < EPS);
        assert!((cam.l() - (cam.r() - 0.5)).abs() < EPS);
    }

    #[test]
    fn strafe_and_fly_cross_the_throat() {
        let wormhole = WormholeGeometry::default();

        // Facing +Z from (1,0,0): right is +X, so strafing left heads in.
        let mut cam = camera_at(Vec3::X, 0.5, Vec3::new(1.0, 0.0, 1.0));
        assert!(cam.right().abs_diff_eq(Vec3::X, EPS));
        cam.strafe(-0.08, &wormhole);
        assert!(cam.position().abs_diff_eq(Vec3::new(0.8, 0.0, 0.0), EPS));
        assert!((cam.r() - 0.8).abs() < EPS);
        assert!((cam.l() + 0.3).abs() < EPS);
        assert_eq!(cam.sheet(), Sheet::Far);

        // Facing +Z from (0,1,0): up is +Y, so flying down heads in.
        let mut cam = camera_at(Vec3::Y, 0.5, Vec3::new(0.0, 1.0, 1.0));
        assert!(cam.up().abs_diff_eq(Vec3::Y, EPS));
        cam.fly(-0.08, &wormhole);
        assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 0.8, 0.0), EPS));
        assert!((cam.r() - 0.8).abs() < EPS);
        assert!((cam.l() + 0.3).abs() < EPS);
        assert_eq!(cam.sheet(), Sheet::Far);
    }

    #[test]
    fn radius_is_recomputed_after_every_move() {
        let wormhole = WormholeGeometry::default();
        let mut cam = camera_at(Vec3::new(1.5, 0.3, -0.2), 1.0, Vec3::ZERO);
        let steps = [0.03, -0.05, 0.11, 0.07, -0.2, 0.09];
        for (i, dt) in steps.iter().enumerate() {
            match i % 3 {
                0 => cam.walk(*dt, &wormhole),
                1 => cam.strafe(*dt, &wormhole),
                _ => cam.fly(*dt, &wormhole),
            }
            assert_eq!(cam.r(), cam.position().length());
            assert!(cam.r() >= 0.0);
        }
    }

    #[test]
    fn sign_flips_only_on_reported_crossing() {
        let wormhole = WormholeGeometry::default();
        let mut cam = camera_at(Vec3::new(2.0, 0.0, 0.0), 1.5, Vec3::ZERO);
        for _ in 0..40 {
            let before = cam.sheet();
            let candidate =
                cam.position() + cam.look() * (0.01 * before.sign() * 10.0);
            let expected = cross_space(candidate, cam.position(), &wormhole);
            cam.walk(0.01, &wormhole);
            if expected.crossed {
                assert_eq!(cam.sheet(), before.flipped());
            } else {
                assert_eq!(cam.sheet(), before);
            }
        }
    }

    #[test]
    fn walking_back_and_forth_bounces_between_sheets() {
        let wormhole = WormholeGeometry::default();
        let mut cam = camera_at(Vec3::new(1.0, 0.0, 0.0), 0.5, Vec3::ZERO);
        cam.walk(0.08, &wormhole);
        assert_eq!(cam.sheet(), Sheet::Far);
        // On the far sheet a forward step heads outward again.
        cam.walk(0.05, &wormhole);
        assert!(cam.position().abs_diff_eq(Vec3::new(1.3, 0.0, 0.0), EPS));
        // Backing up heads inward and recrosses.
        cam.walk(-0.1, &wormhole);
        assert_eq!(cam.sheet(), Sheet::Near);
        assert!(cam.position().abs_diff_eq(Vec3::new(0.7, 0.0, 0.0), EPS));
        assert!((cam.l() - 0.2).abs() < EPS);
    }

    #[test]
    fn teleport_inside_throat_crosses() {
        let wormhole = WormholeGeometry::default();
        let mut cam = Camera::new();
        cam.set_position_through(Vec3::new(0.0, 0.0, 0.3), &wormhole);
        assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 0.0, 0.7), EPS));
        assert!((cam.l() + 0.2).abs() < EPS);
        assert!((cam.r() - 0.7).abs() < EPS);

        cam.set_position_through(Vec3::new(1.31, 0.0, 0.0), &wormhole);
        assert!((cam.l() + 0.81).abs() < EPS);
        assert_eq!(cam.sheet(), Sheet::Far);
    }

    #[test]
    fn zero_depth_moves_as_far_sheet() {
        let wormhole = WormholeGeometry::default();
        let mut cam = camera_at(Vec3::new(0.0, 2.0, 0.0), 0.0, Vec3::new(0.0, 2.0, 1.0));
        cam.walk(0.1, &wormhole);
        assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 2.0, -1.0), EPS));
        assert!(cam.l() < 0.0);
    }

    #[test]
    fn radius_change_applies_on_next_move() {
        let mut wormhole = WormholeGeometry::default();
        let mut cam = camera_at(Vec3::new(2.0, 0.0, 0.0), 1.5, Vec3::ZERO);
        wormhole.radius = 1.0;
        cam.walk(0.0, &wormhole);
        assert!((cam.l() - 1.0).abs() < EPS);
    }
}
