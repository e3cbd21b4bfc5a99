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
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests assert on known-good values
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::wildcard_imports))]

//! Arcball rotation controller for interactive 3D viewers.
//!
//! Pointer drags over a window become a unit quaternion that the host
//! applies to its model or view transform. Every pointer sample is
//! unprojected into camera space, lifted onto a virtual sphere and turned
//! into a "look at this point" orientation; a drag is the rotation between
//! the press sample and the latest sample, committed onto a persistent base
//! orientation on release.
//!
//! # Key entry points
//!
//! - [`ArcballController`] - the rotation state machine
//! - [`input`] - platform-agnostic events and the subscriber fan-out
//! - [`options::Options`] - TOML-backed configuration
//! - `Viewer` (feature `viewer`) - a winit host window driving the
//!   controller
//!
//! The controller never renders and never panics: failed samples are
//! dropped and invalid viewports ignored, so it always yields a valid,
//! possibly stale, orientation.

pub mod arcball;
pub mod error;
pub mod input;
pub mod options;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use arcball::ArcballController;
pub use error::ArcballError;
pub use input::{InputEvent, MouseButton};
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
