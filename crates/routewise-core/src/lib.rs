// SPDX-FileCopyrightText: 2026 Routewise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for routewise.
//!
//! Holds the types every other crate in the workspace agrees on: the error
//! type, the closed set of model identifiers with their static profiles, and
//! the routing policy selector.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{Result, RoutewiseError};
pub use types::{lookup_profile, ModelId, ModelProfile, RoutingPolicy, MODEL_PROFILES};
