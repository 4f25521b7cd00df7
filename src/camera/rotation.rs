//! Interactive rotation model.
//!
//! Two quaternion-driven rotation families, kept as distinct strategies
//! because each has its own axis-update policy:
//!
//! 1. **Local pivot** ([`PivotAxis`]): orbit about the world origin around
//!    one of the camera's *current* frame vectors. The pivot vector itself
//!    stays fixed; the rest of the frame (and the eye) rotates around it.
//! 2. **World axis** ([`WorldAxis`]): rotate eye and frame about a fixed
//!    world basis axis.
//!
//! The third strategy, spherical orbit, lives in [`crate::camera::spherical`]
//! and re-derives the up vector from world z instead.
//!
//! All rotations build the quaternion with the *negated* angle: rotating
//! the camera frame by +angle corresponds to rotating its vectors by
//! −angle about the same axis (the scene appears to pan opposite to the
//! camera). After each rotation `right` is recomputed from the rotated
//! dir/vup rather than rotated in place, so floating error cannot
//! accumulate across long drags.

use glam::DVec3;

use crate::camera::core::Camera;
use crate::camera::quaternion::Quaternion;

/// Camera-frame vector used as a local rotation pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotAxis {
    /// The current view-up reference vector.
    Vup,
    /// The current right vector.
    Right,
    /// The current forward direction (roll).
    Dir,
}

/// Fixed world basis axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldAxis {
    /// World x axis (1, 0, 0).
    X,
    /// World y axis (0, 1, 0).
    Y,
    /// World z axis (0, 0, 1).
    Z,
}

impl WorldAxis {
    /// Unit vector of this axis.
    #[must_use]
    pub const fn unit(self) -> DVec3 {
        match self {
            Self::X => DVec3::X,
            Self::Y => DVec3::Y,
            Self::Z => DVec3::Z,
        }
    }
}

impl Camera {
    /// Frame rotation quaternion for `angle` about `axis` (negated-angle
    /// convention, see module docs).
    fn frame_rotation(angle: f64, axis: DVec3) -> Quaternion {
        Quaternion::from_rotation(-angle, axis)
    }

    /// Orbit about the current view-up vector by `angle` radians.
    ///
    /// Rotates the eye position and direction; `vup` stays fixed as the
    /// pivot and `right` is re-derived.
    pub fn fix_rot_around_vup(&mut self, angle: f64) {
        let q = Self::frame_rotation(angle, self.vup);
        self.pos = q.rotate_vector(self.pos);
        self.dir = q.rotate_vector(self.dir).normalize();
        self.update_right();
    }

    /// Orbit about the current right vector by `angle` radians.
    ///
    /// Rotates the eye position, direction, and up vector; `right` stays
    /// the pivot and is re-derived from the rotated pair.
    pub fn fix_rot_around_right(&mut self, angle: f64) {
        let q = Self::frame_rotation(angle, self.right);
        self.pos = q.rotate_vector(self.pos);
        self.dir = q.rotate_vector(self.dir).normalize();
        self.vup = q.rotate_vector(self.vup).normalize();
        self.update_right();
    }

    /// Roll about the current forward direction by `angle` radians.
    ///
    /// Rotates the eye position and up vector; `dir` stays the pivot and
    /// `right` is re-derived.
    pub fn fix_rot_around_dir(&mut self, angle: f64) {
        let q = Self::frame_rotation(angle, self.dir);
        self.pos = q.rotate_vector(self.pos);
        self.vup = q.rotate_vector(self.vup).normalize();
        self.update_right();
    }

    /// Local pivot rotation dispatched on the pivot axis.
    pub fn rotate_local(&mut self, pivot: PivotAxis, angle: f64) {
        match pivot {
            PivotAxis::Vup => self.fix_rot_around_vup(angle),
            PivotAxis::Right => self.fix_rot_around_right(angle),
            PivotAxis::Dir => self.fix_rot_around_dir(angle),
        }
    }

    /// Rotate eye and frame about the world x axis by `angle` radians.
    pub fn fix_rot_around_x(&mut self, angle: f64) {
        self.rotate_world(WorldAxis::X, angle);
    }

    /// Rotate eye and frame about the world y axis by `angle` radians.
    pub fn fix_rot_around_y(&mut self, angle: f64) {
        self.rotate_world(WorldAxis::Y, angle);
    }

    /// Rotate eye and frame about the world z axis by `angle` radians.
    pub fn fix_rot_around_z(&mut self, angle: f64) {
        self.rotate_world(WorldAxis::Z, angle);
    }

    /// World-axis rotation: eye position, direction, and up vector all
    /// rotate about the fixed axis; `right` is re-derived.
    pub fn rotate_world(&mut self, axis: WorldAxis, angle: f64) {
        let q = Self::frame_rotation(angle, axis.unit());
        self.pos = q.rotate_vector(self.pos);
        self.dir = q.rotate_vector(self.dir).normalize();
        self.vup = q.rotate_vector(self.vup).normalize();
        self.update_right();
    }
}
