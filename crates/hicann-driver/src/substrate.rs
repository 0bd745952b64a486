// SPDX-License-Identifier: AGPL-3.0-only

//! Substrate abstraction
//!
//! A substrate is the wafer-level configuration store the mapping toolchain
//! hands over after placement. It owns one [`HicannConfig`] per allocated
//! HICANN; programming routines only borrow it and mutate existing state.

use crate::error::Result;
use crate::hicann::HicannConfig;
use hicann_chip::coord::{HicannOnWafer, WaferId};
use std::fmt::Debug;

/// Wafer-level configuration store
///
/// Implementations decide where configuration lives (in memory, behind a
/// hardware session, in a mapping result). Every accessor is fallible so
/// that backend failures propagate to the caller unchanged.
pub trait Substrate: Debug {
    /// Wafer this substrate configures
    fn wafer(&self) -> WaferId;

    /// HICANNs in active use, in ascending order
    ///
    /// # Errors
    ///
    /// Returns error if the backend cannot enumerate its allocation.
    fn allocated_hicanns(&self) -> Result<Vec<HicannOnWafer>>;

    /// Configuration of an allocated HICANN
    ///
    /// # Errors
    ///
    /// Returns error if `hicann` is not allocated.
    fn hicann(&self, hicann: HicannOnWafer) -> Result<&HicannConfig>;

    /// Mutable configuration of an allocated HICANN
    ///
    /// # Errors
    ///
    /// Returns error if `hicann` is not allocated.
    fn hicann_mut(&mut self, hicann: HicannOnWafer) -> Result<&mut HicannConfig>;
}
