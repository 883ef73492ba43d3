//! Sheet bookkeeping and throat reflection.
//!
//! The embedding space has two sheets joined at the throat sphere. A camera
//! records which sheet it is on through the sign of its depth coordinate
//! `l`; a candidate position that falls inside the throat is mirrored back
//! out and the sheet flips.

use glam::Vec3;

use crate::wormhole::WormholeGeometry;

/// Sign of a depth value, with zero counted as negative.
#[inline]
#[must_use]
pub fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Which side of the throat the camera occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sheet {
    /// Positive depth; the sheet a fresh camera starts on.
    Near,
    /// Zero or negative depth.
    Far,
}

impl Sheet {
    /// Sheet encoded by a depth value.
    #[must_use]
    pub fn of_depth(l: f32) -> Self {
        if sign(l) > 0.0 {
            Self::Near
        } else {
            Self::Far
        }
    }

    /// `+1` on the near sheet, `-1` on the far one.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Near => 1.0,
            Self::Far => -1.0,
        }
    }

    /// The conjugate sheet.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Near => Self::Far,
            Self::Far => Self::Near,
        }
    }
}

/// Outcome of testing a candidate position against the throat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    /// Position after reflection (the candidate itself when not crossed).
    pub position: Vec3,
    /// Whether the candidate entered the throat.
    pub crossed: bool,
}

/// Test `new_pos` against the throat and reflect it out if it fell inside.
///
/// A candidate at radius `r' <= radius` is pushed outward along its own
/// direction by twice its penetration `radius - r'`, landing at
/// `2 * radius - r'`. Only the end point is tested and only one reflection
/// pass is made: a step that jumps over the whole throat sphere is not seen
/// as a crossing, and the reflected point is not re-tested. A candidate
/// exactly at the origin has no direction and yields a NaN position.
///
/// `_old_pos` is the position before the step; the reflection rule does not
/// use it.
#[must_use]
pub fn cross_space(
    new_pos: Vec3,
    _old_pos: Vec3,
    wormhole: &WormholeGeometry,
) -> Crossing {
    let r = new_pos.length();
    if r <= wormhole.radius {
        let reflection_r = wormhole.radius - r;
        let reflection_dir = new_pos.normalize();
        Crossing {
            position: new_pos + reflection_dir * reflection_r * 2.0,
            crossed: true,
        }
    } else {
        Crossing {
            position: new_pos,
            crossed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn zero_counts_as_negative() {
        assert_eq!(sign(0.0), -1.0);
        assert_eq!(sign(-0.0), -1.0);
        assert_eq!(sign(1e-30), 1.0);
        assert_eq!(Sheet::of_depth(0.0), Sheet::Far);
        assert_eq!(Sheet::of_depth(0.25), Sheet::Near);
    }

    #[test]
    fn flipping_sheet_negates_sign() {
        assert_eq!(Sheet::Near.flipped(), Sheet::Far);
        assert_eq!(Sheet::Far.flipped().sign(), 1.0);
    }

    #[test]
    fn reflection_doubles_penetration() {
        let wormhole = WormholeGeometry::default();
        let d = Vec3::new(1.0, 2.0, -2.0).normalize();
        let out = cross_space(d * 0.3, d * 2.0, &wormhole);
        assert!(out.crossed);
        assert!((out.position.length() - 0.7).abs() < EPS);
        assert!(out.position.normalize().abs_diff_eq(d, EPS));
    }

    #[test]
    fn outside_throat_passes_through() {
        let wormhole = WormholeGeometry::default();
        let candidate = Vec3::new(0.4, 0.0, 0.4);
        let out = cross_space(candidate, Vec3::splat(2.0), &wormhole);
        assert!(!out.crossed);
        assert_eq!(out.position, candidate);
    }

    #[test]
    fn boundary_counts_as_crossing() {
        let wormhole = WormholeGeometry::default();
        let out = cross_space(Vec3::new(0.0, 0.5, 0.0), Vec3::Y, &wormhole);
        assert!(out.crossed);
        assert!((out.position.y - 0.5).abs() < EPS);
    }

    #[test]
    fn reflection_lands_outside_throat() {
        let wormhole = WormholeGeometry {
            radius: 4.0,
            ..WormholeGeometry::default()
        };
        let out =
            cross_space(Vec3::new(0.5, 0.0, 0.0), Vec3::X * 5.0, &wormhole);
        assert!(out.crossed);
        assert!((out.position.x - 7.5).abs() < EPS);
    }

    #[test]
    fn step_clearing_the_throat_is_not_detected() {
        // Only the candidate end point is tested, so a step that jumps
        // over the whole throat sphere is not a crossing.
        let wormhole = WormholeGeometry::default();
        let out = cross_space(Vec3::new(-1.0, 0.0, 0.0), Vec3::X, &wormhole);
        assert!(!out.crossed);
        assert_eq!(out.position, Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn origin_candidate_is_degenerate() {
        let wormhole = WormholeGeometry::default();
        let out = cross_space(Vec3::ZERO, Vec3::X, &wormhole);
        assert!(out.crossed);
        assert!(out.position.is_nan());
    }
}
