// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Math allowances — casts to the GPU boundary are intentional, and float
// comparison against exact constants is routine in the tests
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::missing_const_for_fn)]

//! Camera orientation and stereoscopic projection core for an interactive
//! relativistic geodesic viewer.
//!
//! The physics (spacetime metrics, geodesic integration) and all widget
//! code live in external collaborators; this crate owns the viewing state
//! and produces per-frame matrix/parameter data for an opaque renderer.
//!
//! # Key entry points
//!
//! - [`camera::core::Camera`] - viewing state, basis maintenance, and the
//!   stereo setup generators
//! - [`camera::controller::CameraController`] - mouse-drag dispatch onto
//!   the rotation strategies
//! - [`camera::quaternion::Quaternion`] - the rotation algebra underneath
//! - [`options::Options`] - runtime configuration (camera, stereo)
//!
//! # Architecture
//!
//! The camera maintains a right-handed orthonormal frame {dir, vup,
//! right} across three distinct rotation strategies (local pivot, world
//! axis, spherical orbit), each with its own axis-update policy. Per
//! frame it emits one [`camera::stereo::ViewSetup`] for mono rendering or
//! two for stereo — view matrix, projection matrix, and the anaglyph
//! channel mask the renderer applies before rasterizing.

pub mod camera;
pub mod error;
pub mod options;
