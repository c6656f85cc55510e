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
// Tests assert on known-good values
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::wildcard_imports))]

//! Input-driven camera controller for 3D scene viewers.
//!
//! The camera owns the viewer's eye state (position, yaw/pitch, projection
//! mode) and, once per frame, turns keyboard and pointer input into motion
//! and derives right-handed view and projection matrices for a renderer.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - pose, per-frame [`update`](camera::Camera::update),
//!   matrices and visibility tests
//! - [`input::InputTracker`] - folds platform events into per-frame
//!   [`input::InputSnapshot`]s
//! - [`options::Options`] - projection parameters and control sensitivities,
//!   loadable from TOML
//!
//! # Frame flow
//!
//! The host loop measures elapsed time ([`util::FrameClock`]), takes an input
//! snapshot, and calls `Camera::update` with a [`camera::FrameContext`]. The
//! update maps input to a [`input::CameraIntent`], integrates it into the
//! pose, then rebuilds the view and projection matrices for the active mode
//! (perspective or top-down orthographic).

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;

pub use camera::{BoundingBox, Camera, FrameContext, Viewport};
pub use error::CameraError;
pub use input::{CameraKey, InputSnapshot, InputTracker};
pub use options::Options;
