// SPDX-License-Identifier: AGPL-3.0-only

//! Low-level analog parameter programming.
//!
//! After the mapping toolchain has placed a network, a handful of analog
//! biases are overridden on every allocated HICANN before submission:
//!
//! ```text
//! per allocated HICANN
//!   1. every FG block       V_gmax0..V_gmax3 = gmax
//!   2. every driver × row   gmax_div[side]   = gmax_div
//!   3. every FG pass        fg_bias = fg_biasn = 0     (read-modify-write)
//!   4. every FG block       V_dllres = 275, V_ccas = 800
//! ```
//!
//! The sweep performs no validation and no retry. Values are range-checked
//! when the [`AnalogParameters`] are built; anything the substrate rejects
//! propagates to the caller.

use crate::error::Result;
use crate::substrate::Substrate;
use hicann_chip::coord::Side;
use hicann_chip::fg::DacValue;
use hicann_chip::shared::SharedParameter;
use hicann_chip::synapse::GmaxDiv;
use tracing::{debug, info, trace};

/// Default conductance divider.
pub const DEFAULT_GMAX_DIV: GmaxDiv = match GmaxDiv::new(1) {
    Some(v) => v,
    None => panic!("gmax_div default exceeds four bits"),
};

/// Default `V_dllres` written after the pass sweep.
pub const DEFAULT_V_DLLRES: DacValue = match DacValue::new(275) {
    Some(v) => v,
    None => panic!("V_dllres default exceeds the DAC range"),
};

/// Default `V_ccas` written after the pass sweep.
pub const DEFAULT_V_CCAS: DacValue = match DacValue::new(800) {
    Some(v) => v,
    None => panic!("V_ccas default exceeds the DAC range"),
};

/// Values written by [`program_analog_parameters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalogParameters {
    /// Written to `V_gmax0..V_gmax3` of every FG block.
    pub gmax: DacValue,
    /// Written to every synapse driver row on [`Self::side`].
    pub gmax_div: GmaxDiv,
    /// Side of the driver rows that receives `gmax_div`.
    pub side: Side,
    /// Written to `V_dllres` of every FG block.
    pub v_dllres: DacValue,
    /// Written to `V_ccas` of every FG block.
    pub v_ccas: DacValue,
}

impl Default for AnalogParameters {
    fn default() -> Self {
        Self {
            gmax: DacValue::MAX,
            gmax_div: DEFAULT_GMAX_DIV,
            side: Side::Left,
            v_dllres: DEFAULT_V_DLLRES,
            v_ccas: DEFAULT_V_CCAS,
        }
    }
}

impl AnalogParameters {
    /// Defaults with the given conductance settings.
    pub fn new(gmax: DacValue, gmax_div: GmaxDiv) -> Self {
        Self {
            gmax,
            gmax_div,
            ..Self::default()
        }
    }

    /// Override the driver row side.
    #[must_use]
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Override `V_dllres`.
    #[must_use]
    pub fn with_v_dllres(mut self, value: DacValue) -> Self {
        self.v_dllres = value;
        self
    }

    /// Override `V_ccas`.
    #[must_use]
    pub fn with_v_ccas(mut self, value: DacValue) -> Self {
        self.v_ccas = value;
        self
    }
}

/// Program `gmax`/`gmax_div` with the default constants on every allocated HICANN.
///
/// # Errors
///
/// Returns any error the substrate reports.
pub fn set_parameters(substrate: &mut dyn Substrate, gmax: DacValue, gmax_div: GmaxDiv) -> Result<()> {
    program_analog_parameters(substrate, &AnalogParameters::new(gmax, gmax_div))
}

/// Write `params` into every allocated HICANN of `substrate`.
///
/// HICANNs are visited in the order the substrate lists them; the order is
/// not significant. Within a HICANN the four steps run in sequence so that
/// later writes are never clobbered by earlier ones. Running the sweep twice
/// leaves the same state as running it once.
///
/// # Errors
///
/// Returns the first error the substrate reports; HICANNs already visited
/// keep their new configuration.
pub fn program_analog_parameters(substrate: &mut dyn Substrate, params: &AnalogParameters) -> Result<()> {
    let hicanns = substrate.allocated_hicanns()?;
    info!(
        "Programming analog parameters on {} HICANN(s) of {}: gmax={} gmax_div={} side={:?}",
        hicanns.len(),
        substrate.wafer(),
        params.gmax,
        params.gmax_div,
        params.side
    );

    for hicann in hicanns {
        let config = substrate.hicann_mut(hicann)?;
        let geometry = config.geometry();
        debug!("{hicann}: {geometry:?}");

        let fgs = &mut config.floating_gates;
        for block in geometry.fg_blocks() {
            for param in SharedParameter::GMAX {
                fgs.set_shared(block, param, params.gmax);
            }
        }

        for driver in geometry.synapse_drivers() {
            for row in geometry.rows() {
                config.synapses.set_gmax_div(driver, row, params.side, params.gmax_div);
            }
        }

        let fgs = &mut config.floating_gates;
        let passes = fgs.programming_passes();
        for pass in 0..passes {
            let mut cfg = fgs.fg_config(pass)?;
            trace!("{hicann}: pass {pass} fg_bias={} fg_biasn={} -> 0", cfg.fg_bias, cfg.fg_biasn);
            cfg.fg_biasn = 0;
            cfg.fg_bias = 0;
            fgs.set_fg_config(pass, cfg)?;
        }

        for block in geometry.fg_blocks() {
            fgs.set_shared(block, SharedParameter::V_dllres, params.v_dllres);
            fgs.set_shared(block, SharedParameter::V_ccas, params.v_ccas);
        }

        debug!(
            "{hicann}: {} FG block(s), {} driver row(s), {passes} pass(es) programmed",
            geometry.fg_block_count(),
            u32::from(geometry.synapse_driver_count()) * u32::from(geometry.rows_per_driver()),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let p = AnalogParameters::default();
        assert_eq!(p.gmax.value(), 1023);
        assert_eq!(p.gmax_div.value(), 1);
        assert_eq!(p.side, Side::Left);
        assert_eq!(p.v_dllres.value(), 275);
        assert_eq!(p.v_ccas.value(), 800);
    }

    #[test]
    fn builders_override_single_fields() {
        let p = AnalogParameters::new(DacValue::new(400).unwrap(), GmaxDiv::new(3).unwrap())
            .with_side(Side::Right)
            .with_v_ccas(DacValue::new(700).unwrap());
        assert_eq!(p.gmax.value(), 400);
        assert_eq!(p.side, Side::Right);
        assert_eq!(p.v_ccas.value(), 700);
        assert_eq!(p.v_dllres, DEFAULT_V_DLLRES);
    }
}
