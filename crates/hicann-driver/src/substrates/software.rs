// SPDX-License-Identifier: AGPL-3.0-only

//! Software (in-memory) wafer
//!
//! Implements the `Substrate` trait with a plain map from HICANN coordinate
//! to configuration. This enables:
//!
//! 1. **CI without a wafer**: every programming routine runs against the
//!    same configuration types a hardware session would expose.
//!
//! 2. **Reduced tiles**: HICANNs can be allocated with a smaller
//!    [`Geometry`] to keep scenario tests small and readable.
//!
//! 3. **Dry runs**: the CLI programs a software wafer and prints the
//!    resulting state before anything touches real hardware.

use crate::error::{Result, WaferError};
use crate::hicann::HicannConfig;
use crate::substrate::Substrate;
use hicann_chip::coord::{Geometry, HicannOnWafer, WaferId};
use std::collections::BTreeMap;
use tracing::debug;

/// In-memory wafer
#[derive(Debug, Clone)]
pub struct SoftwareWafer {
    wafer: WaferId,
    hicanns: BTreeMap<HicannOnWafer, HicannConfig>,
}

impl SoftwareWafer {
    /// Empty wafer with no HICANNs allocated
    pub fn new(wafer: WaferId) -> Self {
        Self {
            wafer,
            hicanns: BTreeMap::new(),
        }
    }

    /// Allocate a full-size HICANN with default configuration
    ///
    /// # Errors
    ///
    /// Returns error if `hicann` is already allocated.
    pub fn allocate(&mut self, hicann: HicannOnWafer) -> Result<&mut HicannConfig> {
        self.allocate_with(hicann, Geometry::HICANN)
    }

    /// Allocate a HICANN with an explicit tile geometry
    ///
    /// # Errors
    ///
    /// Returns error if `hicann` is already allocated.
    pub fn allocate_with(
        &mut self,
        hicann: HicannOnWafer,
        geometry: Geometry,
    ) -> Result<&mut HicannConfig> {
        if self.hicanns.contains_key(&hicann) {
            return Err(WaferError::AlreadyAllocated {
                wafer: self.wafer,
                hicann,
            });
        }
        debug!("Allocating {hicann} on {} ({geometry:?})", self.wafer);
        Ok(self
            .hicanns
            .entry(hicann)
            .or_insert_with(|| HicannConfig::new(geometry)))
    }

    /// Number of allocated HICANNs
    pub fn len(&self) -> usize {
        self.hicanns.len()
    }

    /// True if nothing is allocated
    pub fn is_empty(&self) -> bool {
        self.hicanns.is_empty()
    }

    fn not_allocated(&self, hicann: HicannOnWafer) -> WaferError {
        WaferError::HicannNotAllocated {
            wafer: self.wafer,
            hicann,
        }
    }
}

impl Substrate for SoftwareWafer {
    fn wafer(&self) -> WaferId {
        self.wafer
    }

    fn allocated_hicanns(&self) -> Result<Vec<HicannOnWafer>> {
        Ok(self.hicanns.keys().copied().collect())
    }

    fn hicann(&self, hicann: HicannOnWafer) -> Result<&HicannConfig> {
        self.hicanns
            .get(&hicann)
            .ok_or_else(|| self.not_allocated(hicann))
    }

    fn hicann_mut(&mut self, hicann: HicannOnWafer) -> Result<&mut HicannConfig> {
        let err = self.not_allocated(hicann);
        self.hicanns.get_mut(&hicann).ok_or(err)
    }
}
