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
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Test code asserts with unwrap
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Camera navigation through a traversable wormhole.
//!
//! The wormhole joins two sheets of an embedding space at a spherical
//! throat. A camera flying through it carries a signed depth coordinate
//! `l` whose sign names the sheet it is on; stepping inside the throat
//! reflects the camera back out and flips that sign. The lensing renderer
//! consumes the camera pose, `l`, `r` and the wormhole shape as plain data.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - pose, depth coordinate, movement and matrices
//! - [`wormhole::WormholeGeometry`] - throat radius, mass and length
//! - [`camera::NavigationController`] - per-frame input interpretation
//! - [`camera::FrameSnapshot`] - the shader constants for one frame
//! - [`options::Options`] - runtime configuration with TOML presets
//! - [`session::FlightSession`] - owns all of the above and steps frames
//!
//! # Frame flow
//!
//! Raw events go through [`input::InputProcessor`]; once per frame its
//! [`input::FrameInput`] drives the controller, then
//! [`camera::Camera::update_view`] and [`camera::Camera::update_proj`]
//! refresh the matrices before a snapshot is taken for the renderer.
//! Everything runs on one thread.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod session;
pub mod util;
pub mod wormhole;

pub use camera::{Camera, FrameSnapshot, NavigationController, Sheet};
pub use error::WormholeError;
pub use options::Options;
pub use session::FlightSession;
pub use wormhole::WormholeGeometry;
