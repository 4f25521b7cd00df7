//! Spherical navigation around the point of interest.
//!
//! The third rotation strategy: the eye is placed on a sphere around the
//! point of interest by polar coordinates. Unlike the pivot strategies in
//! [`crate::camera::rotation`], the up vector is re-derived from world z on
//! every move, which keeps "up" visually stable while orbiting.

use std::f64::consts::PI;

use glam::DVec3;

use crate::camera::core::{Camera, DEGENERATE_EPS};

/// Clamp distance from the poles for the polar angle, keeping the azimuth
/// well-defined.
pub const POLE_EPS: f64 = 1e-2;

/// Spherical placement of the eye relative to the point of interest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalPos {
    /// Polar angle from +z, in radians.
    pub theta: f64,
    /// Azimuth in the x-y plane from +x, in radians.
    pub phi: f64,
    /// Distance from the point of interest.
    pub dist: f64,
}

impl Camera {
    /// Spherical coordinates of the eye relative to the point of interest.
    #[must_use]
    pub fn spherical_eye_pos(&self) -> SphericalPos {
        let offset = self.pos - self.poi;
        SphericalPos {
            theta: offset.x.hypot(offset.y).atan2(offset.z),
            phi: offset.y.atan2(offset.x),
            dist: offset.length(),
        }
    }

    /// Place the eye on the sphere of radius `dist` around the point of
    /// interest, aimed back at it.
    ///
    /// `theta` is clamped into `[POLE_EPS, π − POLE_EPS]`; a non-positive
    /// `dist` rejects the move, returning `false` with the camera
    /// unchanged. The frame is rebuilt with `right = normalize(dir × ẑ)`
    /// and `vup = normalize(right × dir)`.
    pub fn move_on_sphere(&mut self, theta: f64, phi: f64, dist: f64) -> bool {
        if dist <= 0.0 {
            log::debug!("move_on_sphere rejected non-positive dist {dist}");
            return false;
        }
        let theta = theta.clamp(POLE_EPS, PI - POLE_EPS);
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();

        self.pos = self.poi
            + dist
                * DVec3::new(
                    sin_theta * cos_phi,
                    sin_theta * sin_phi,
                    cos_theta,
                );
        self.dir = (self.poi - self.pos).normalize();
        let right = self.dir.cross(DVec3::Z);
        if right.length() > DEGENERATE_EPS {
            self.right = right.normalize();
        }
        self.vup = self.right.cross(self.dir).normalize();
        true
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn spherical_round_trip() {
        let mut camera = Camera::new();
        camera.set_poi(DVec3::new(1.0, -2.0, 3.0));
        let cases =
            [(1.0, 2.0, 5.0), (0.2, -2.5, 12.0), (FRAC_PI_2, 0.0, 0.5)];
        for (theta, phi, dist) in cases {
            assert!(camera.move_on_sphere(theta, phi, dist));
            let sph = camera.spherical_eye_pos();
            assert!((sph.theta - theta).abs() < 1e-6, "theta {}", sph.theta);
            assert!((sph.phi - phi).abs() < 1e-6, "phi {}", sph.phi);
            assert!((sph.dist - dist).abs() < 1e-6, "dist {}", sph.dist);
        }
    }

    #[test]
    fn quarter_orbit_from_default() {
        let mut camera = Camera::new();
        assert!(camera.move_on_sphere(FRAC_PI_2, 0.0, 10.0));
        assert!((camera.pos() - DVec3::new(10.0, 0.0, 0.0)).length() < 1e-9);
        assert!((camera.dir() - DVec3::NEG_X).length() < 1e-9);
    }

    #[test]
    fn up_is_rederived_from_world_z() {
        let mut camera = Camera::new();
        assert!(camera.move_on_sphere(FRAC_PI_2, 0.0, 10.0));
        // On the equator the rebuilt up vector is world z itself.
        assert!((camera.vup() - DVec3::Z).length() < 1e-9);
        assert!((camera.right() - DVec3::Y).length() < 1e-9);
    }

    #[test]
    fn non_positive_distance_is_a_no_op() {
        let mut camera = Camera::new();
        let pos = camera.pos();
        let dir = camera.dir();
        assert!(!camera.move_on_sphere(1.0, 1.0, 0.0));
        assert!(!camera.move_on_sphere(1.0, 1.0, -3.0));
        assert_eq!(camera.pos(), pos);
        assert_eq!(camera.dir(), dir);
    }

    #[test]
    fn polar_angle_is_clamped_away_from_the_poles() {
        let mut camera = Camera::new();
        assert!(camera.move_on_sphere(0.0, 0.7, 4.0));
        let sph = camera.spherical_eye_pos();
        assert!((sph.theta - POLE_EPS).abs() < 1e-9);
        assert!((sph.phi - 0.7).abs() < 1e-9);

        assert!(camera.move_on_sphere(PI + 1.0, -0.7, 4.0));
        let sph = camera.spherical_eye_pos();
        assert!((sph.theta - (PI - POLE_EPS)).abs() < 1e-9);
    }

    #[test]
    fn orbit_keeps_the_frame_orthonormal() {
        let mut camera = Camera::new();
        camera.set_poi(DVec3::new(4.0, 4.0, 0.0));
        for step in 0..50 {
            let theta = 0.05 + 3.0 * f64::from(step) / 50.0;
            let phi = f64::from(step) * 0.37;
            assert!(camera.move_on_sphere(theta, phi, 7.5));
            assert!((camera.dir().length() - 1.0).abs() < 1e-9);
            assert!((camera.vup().length() - 1.0).abs() < 1e-9);
            assert!((camera.right().length() - 1.0).abs() < 1e-9);
            assert!(camera.right().dot(camera.dir()).abs() < 1e-9);
            assert!(camera.right().dot(camera.vup()).abs() < 1e-9);
        }
    }
}
