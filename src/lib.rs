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
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
// Function signature hygiene
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
// Test code may unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Free-look 3D camera with message-driven input.
//!
//! A [`camera::Camera`] keeps a double-precision location and yaw/pitch/roll
//! angles, and eagerly derives its view and projection matrices plus view
//! frustums on every change. Input flows through an
//! [`input::InputMapper`], which turns raw key and mouse state into typed
//! messages on an [`events::EventAggregator`]; a
//! [`camera::CameraController`] listens for those messages and moves the
//! camera.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - pose, projection, and derived transforms
//! - [`camera::CameraController`] - applies movement and look messages
//! - [`events::EventAggregator`] - type-keyed publish/subscribe
//! - [`input::InputMapper`] - input state to message translation
//! - [`options::Options`] - TOML-backed camera and keybinding settings

pub mod camera;
pub mod error;
pub mod events;
pub mod input;
pub mod options;

pub use error::FreelookError;
