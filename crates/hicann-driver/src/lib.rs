// SPDX-License-Identifier: AGPL-3.0-only

//! Configuration store and low-level parameter programming for HICANN wafers.
//!
//! The mapping toolchain places a network onto a wafer and leaves behind a
//! configuration store: one [`HicannConfig`] per allocated HICANN. This crate
//! models that store and provides the routines that tweak it before the
//! experiment is submitted.
//!
//! # Substrates
//!
//! ```text
//! Substrate (trait)  — wafer id, allocated HICANNs, per-HICANN config access
//!   SoftwareWafer    — in-memory store, reduced tile geometries for tests
//! ```
//!
//! # Quick start
//!
//! ```
//! use hicann_driver::{program_analog_parameters, AnalogParameters, SoftwareWafer, Substrate};
//! use hicann_driver::chip::coord::{HicannOnWafer, WaferId};
//! use hicann_driver::chip::shared::SharedParameter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut wafer = SoftwareWafer::new(WaferId(33));
//! let hicann = HicannOnWafer::new(297).ok_or("bad HICANN")?;
//! wafer.allocate(hicann)?;
//!
//! program_analog_parameters(&mut wafer, &AnalogParameters::default())?;
//!
//! let fgs = &wafer.hicann(hicann)?.floating_gates;
//! for block in wafer.hicann(hicann)?.geometry().fg_blocks() {
//!     assert_eq!(fgs.shared(block, SharedParameter::V_gmax0).value(), 1023);
//!     assert_eq!(fgs.shared(block, SharedParameter::V_ccas).value(), 800);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

mod error;
mod floating_gates;
mod hicann;
pub mod programmer;
mod substrate;
pub mod substrates;
mod synapses;
pub mod weights;

/// Silicon model (re-exported from hicann-chip).
pub use hicann_chip as chip;

pub use error::{Result, WaferError};
pub use floating_gates::FloatingGates;
pub use hicann::HicannConfig;
pub use programmer::{program_analog_parameters, set_parameters, AnalogParameters};
pub use substrate::Substrate;
pub use substrates::SoftwareWafer;
pub use synapses::{RowConfig, SynapseArray};
pub use weights::{set_synapse_weights, SynapseOnWafer};

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        program_analog_parameters, set_parameters, set_synapse_weights, AnalogParameters,
        HicannConfig, Result, SoftwareWafer, Substrate, SynapseOnWafer, WaferError,
    };
}
