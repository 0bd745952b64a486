// SPDX-License-Identifier: AGPL-3.0-only

//! Configuration store of a single HICANN.

use crate::floating_gates::FloatingGates;
use crate::synapses::SynapseArray;
use hicann_chip::coord::Geometry;

/// Analog and digital configuration of one HICANN.
///
/// The geometry bounds which FG blocks, synapse drivers and rows the
/// configuration sweeps address. Storage always covers the full chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HicannConfig {
    geometry: Geometry,
    /// Floating-gate configuration.
    pub floating_gates: FloatingGates,
    /// Synapse driver rows and synapse weights.
    pub synapses: SynapseArray,
}

impl Default for HicannConfig {
    fn default() -> Self {
        Self::new(Geometry::HICANN)
    }
}

impl HicannConfig {
    /// Fresh configuration for a tile of `geometry`.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            floating_gates: FloatingGates::new(),
            synapses: SynapseArray::new(),
        }
    }

    /// Extent of this tile.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }
}
