// SPDX-License-Identifier: AGPL-3.0-only

//! Floating-gate configuration of one HICANN.
//!
//! Holds the shared parameter row of every FG block and the list of
//! programming passes the FG controller runs when the chip is configured.
//! Pass records are exchanged whole: callers read a record, modify it and
//! write it back.

use crate::error::{Result, WaferError};
use hicann_chip::coord::{FgBlockOnHicann, FG_BLOCKS_ON_HICANN};
use hicann_chip::fg::{DacValue, FgConfig, DEFAULT_PROGRAMMING_PASSES};
use hicann_chip::shared::{SharedParameter, SHARED_PARAMETER_COUNT};

const BLOCKS: usize = FG_BLOCKS_ON_HICANN as usize;

/// Shared FG values and programming passes of one HICANN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatingGates {
    shared: [[DacValue; SHARED_PARAMETER_COUNT]; BLOCKS],
    passes: Vec<FgConfig>,
}

impl Default for FloatingGates {
    fn default() -> Self {
        Self::new()
    }
}

impl FloatingGates {
    /// All shared values zero, [`DEFAULT_PROGRAMMING_PASSES`] default passes.
    pub fn new() -> Self {
        Self {
            shared: [[DacValue::ZERO; SHARED_PARAMETER_COUNT]; BLOCKS],
            passes: vec![FgConfig::default(); DEFAULT_PROGRAMMING_PASSES],
        }
    }

    /// Shared value of `param` on `block`.
    pub fn shared(&self, block: FgBlockOnHicann, param: SharedParameter) -> DacValue {
        self.shared[usize::from(block.value())][param.index()]
    }

    /// Set the shared value of `param` on `block`.
    pub fn set_shared(&mut self, block: FgBlockOnHicann, param: SharedParameter, value: DacValue) {
        self.shared[usize::from(block.value())][param.index()] = value;
    }

    /// Number of programming passes.
    pub fn programming_passes(&self) -> usize {
        self.passes.len()
    }

    /// Resize the pass list; new passes take the default record.
    pub fn set_programming_passes(&mut self, count: usize) {
        self.passes.resize(count, FgConfig::default());
    }

    /// Copy of pass `pass`.
    ///
    /// # Errors
    ///
    /// Returns error if `pass` is not below [`Self::programming_passes`].
    pub fn fg_config(&self, pass: usize) -> Result<FgConfig> {
        self.passes.get(pass).copied().ok_or(WaferError::PassOutOfRange {
            pass,
            count: self.passes.len(),
        })
    }

    /// Replace pass `pass` with `config`.
    ///
    /// # Errors
    ///
    /// Returns error if `pass` is not below [`Self::programming_passes`].
    pub fn set_fg_config(&mut self, pass: usize, config: FgConfig) -> Result<()> {
        let count = self.passes.len();
        let slot = self
            .passes
            .get_mut(pass)
            .ok_or(WaferError::PassOutOfRange { pass, count })?;
        *slot = config;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(i: u8) -> FgBlockOnHicann {
        FgBlockOnHicann::new(i).unwrap()
    }

    #[test]
    fn shared_values_are_per_block() {
        let mut fgs = FloatingGates::new();
        let v = DacValue::new(511).unwrap();
        fgs.set_shared(block(1), SharedParameter::V_gmax2, v);
        assert_eq!(fgs.shared(block(1), SharedParameter::V_gmax2), v);
        assert_eq!(fgs.shared(block(0), SharedParameter::V_gmax2), DacValue::ZERO);
        assert_eq!(fgs.shared(block(1), SharedParameter::V_gmax1), DacValue::ZERO);
    }

    #[test]
    fn pass_read_modify_write() {
        let mut fgs = FloatingGates::new();
        let mut cfg = fgs.fg_config(1).unwrap();
        cfg.fg_bias = 3;
        fgs.set_fg_config(1, cfg).unwrap();
        assert_eq!(fgs.fg_config(1).unwrap().fg_bias, 3);
        assert_eq!(fgs.fg_config(0).unwrap(), FgConfig::default());
    }

    #[test]
    fn pass_out_of_range() {
        let mut fgs = FloatingGates::new();
        fgs.set_programming_passes(1);
        assert!(matches!(
            fgs.fg_config(1),
            Err(WaferError::PassOutOfRange { pass: 1, count: 1 })
        ));
        assert!(fgs.set_fg_config(5, FgConfig::default()).is_err());
    }

    #[test]
    fn passes_resize() {
        let mut fgs = FloatingGates::new();
        assert_eq!(fgs.programming_passes(), DEFAULT_PROGRAMMING_PASSES);
        fgs.set_programming_passes(0);
        assert_eq!(fgs.programming_passes(), 0);
        fgs.set_programming_passes(3);
        assert_eq!(fgs.fg_config(2).unwrap(), FgConfig::default());
    }
}
