// SPDX-License-Identifier: AGPL-3.0-only

//! Substrate implementations

pub mod software;

pub use software::SoftwareWafer;
