// SPDX-License-Identifier: AGPL-3.0-only

//! Synapse weight override.
//!
//! Once the mapping has realised a projection as a set of hardware synapses,
//! their digital weights can be overwritten directly before the experiment
//! is submitted again with mapping skipped.

use crate::error::{Result, WaferError};
use crate::substrate::Substrate;
use hicann_chip::coord::{HicannOnWafer, SynapseOnHicann};
use hicann_chip::synapse::SynapseWeight;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// A synapse addressed on the wafer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SynapseOnWafer {
    /// HICANN holding the synapse.
    pub hicann: HicannOnWafer,
    /// Synapse on that HICANN.
    pub synapse: SynapseOnHicann,
}

impl fmt::Display for SynapseOnWafer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.hicann.value(),
            self.synapse.row.value(),
            self.synapse.column.value()
        )
    }
}

/// Parses `hicann/row/column`, e.g. `297/12/40`.
impl FromStr for SynapseOnWafer {
    type Err = WaferError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('/').map(str::trim).collect();
        let [hicann, row, column] = parts.as_slice() else {
            return Err(WaferError::invalid_synapse(s, "expected hicann/row/column"));
        };
        let parse = |field: &str, name: &str| {
            field
                .parse::<u16>()
                .map_err(|e| WaferError::invalid_synapse(s, format!("{name} '{field}': {e}")))
        };
        let hicann = HicannOnWafer::new(parse(*hicann, "hicann")?)
            .ok_or_else(|| WaferError::invalid_synapse(s, "hicann out of range"))?;
        let synapse = SynapseOnHicann::new(parse(*row, "row")?, parse(*column, "column")?)
            .ok_or_else(|| WaferError::invalid_synapse(s, "synapse out of range"))?;
        Ok(Self { hicann, synapse })
    }
}

/// Write `weight` to every synapse in `synapses`.
///
/// Returns the number of synapses written.
///
/// # Errors
///
/// Returns error if a synapse lies on a HICANN the substrate has not
/// allocated, or on a row outside that HICANN's geometry. Synapses before
/// the failing one keep their new weight.
pub fn set_synapse_weights<I>(substrate: &mut dyn Substrate, synapses: I, weight: SynapseWeight) -> Result<usize>
where
    I: IntoIterator<Item = SynapseOnWafer>,
{
    let mut written = 0usize;
    for syn in synapses {
        let config = substrate.hicann_mut(syn.hicann)?;
        if !config.geometry().contains_synapse_row(syn.synapse.row) {
            return Err(WaferError::coordinate_out_of_range(format!(
                "{syn} outside {:?}",
                config.geometry()
            )));
        }
        debug!("{syn}: weight {} -> {weight}", config.synapses.weight(syn.synapse));
        config.synapses.set_weight(syn.synapse, weight);
        written += 1;
    }
    info!("Set weight {weight} on {written} synapse(s) of {}", substrate.wafer());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wafer_synapse() {
        let syn: SynapseOnWafer = "297/12/40".parse().unwrap();
        assert_eq!(syn.hicann.value(), 297);
        assert_eq!(syn.synapse.row.value(), 12);
        assert_eq!(syn.synapse.column.value(), 40);
    }

    #[test]
    fn display_parses_back() {
        let syn: SynapseOnWafer = "297/12/40".parse().unwrap();
        assert_eq!(syn.to_string(), "297/12/40");
        assert_eq!(syn.to_string().parse::<SynapseOnWafer>().unwrap(), syn);

        let last: SynapseOnWafer = " 383 / 447 / 255 ".parse().unwrap();
        assert_eq!(last.to_string().parse::<SynapseOnWafer>().unwrap(), last);
    }

    #[test]
    fn rejects_malformed_synapse() {
        for bad in ["297/12", "384/0/0", "0/448/0", "0/a/0", "HICANN(297)/Synapse(12, 40)"] {
            let err = bad.parse::<SynapseOnWafer>().unwrap_err();
            assert!(
                matches!(&err, WaferError::InvalidSynapse { input, .. } if input == bad),
                "{bad}: {err}"
            );
        }
    }
}
