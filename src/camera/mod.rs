//! Camera orientation and stereoscopic projection.
//!
//! Quaternion-based rotation engine plus a camera model maintaining an
//! orthonormal viewing frame under interactive rotation, spherical
//! navigation, and per-eye stereoscopic view/projection generation.

/// Mouse-driven camera control and drag-mode dispatch.
pub mod controller;
/// Core camera state, basis maintenance, and GPU uniform types.
pub mod core;
/// Quaternion algebra used by all rotations.
pub mod quaternion;
/// Local-pivot and world-axis rotation strategies.
pub mod rotation;
/// Spherical orbit navigation around the point of interest.
pub mod spherical;
/// Stereoscopic view/projection setups and anaglyph channel masks.
pub mod stereo;
