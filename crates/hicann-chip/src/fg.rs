// SPDX-License-Identifier: AGPL-3.0-only

//! Floating-gate cells and the FG programming pass record.
//!
//! Floating-gate cells are written by the on-chip FG controller, which
//! iterates over a list of *programming passes*. Each pass carries its own
//! timing and bias-current settings; the list is written pass by pass.
//!
//! ## Pass record layout
//!
//! | Field | Width | Meaning |
//! |-------|-------|---------|
//! | `maxcycle` | 8 bit | Max write cycles per cell |
//! | `readtime` | 6 bit | Comparator settle time |
//! | `acceleratorstep` | 6 bit | Cycles before step size increases |
//! | `voltagewritetime` | 6 bit | Pulse length for voltage cells |
//! | `currentwritetime` | 6 bit | Pulse length for current cells |
//! | `fg_bias` | 4 bit | Programming bias current |
//! | `fg_biasn` | 4 bit | Bias of the bias (n-side) |
//! | `pulselength` | 4 bit | Write pulse length |
//! | `groundvm` | 1 bit | Ground the membrane during writes |
//! | `calib` | 1 bit | Calibration mode |

use std::fmt;

/// Largest value a floating-gate cell holds (10-bit DAC).
pub const FG_MAX: u16 = 1023;

/// Number of programming passes a freshly initialised HICANN carries.
pub const DEFAULT_PROGRAMMING_PASSES: usize = 2;

/// A 10-bit floating-gate DAC value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DacValue(u16);

impl DacValue {
    /// Zero.
    pub const ZERO: Self = Self(0);
    /// Full scale.
    pub const MAX: Self = Self(FG_MAX);

    /// Checked constructor; `None` above [`FG_MAX`].
    #[must_use]
    pub const fn new(value: u16) -> Option<Self> {
        if value <= FG_MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Raw DAC value.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for DacValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One FG controller programming pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FgConfig {
    /// Max write cycles per cell.
    pub maxcycle: u8,
    /// Comparator settle time.
    pub readtime: u8,
    /// Cycles before the write step increases.
    pub acceleratorstep: u8,
    /// Pulse length for voltage cells.
    pub voltagewritetime: u8,
    /// Pulse length for current cells.
    pub currentwritetime: u8,
    /// Programming bias current.
    pub fg_bias: u8,
    /// Bias of the programming bias.
    pub fg_biasn: u8,
    /// Write pulse length.
    pub pulselength: u8,
    /// Ground the membrane during writes.
    pub groundvm: bool,
    /// Calibration mode.
    pub calib: bool,
}

impl Default for FgConfig {
    fn default() -> Self {
        Self {
            maxcycle: 255,
            readtime: 63,
            acceleratorstep: 9,
            voltagewritetime: 63,
            currentwritetime: 1,
            fg_bias: 8,
            fg_biasn: 5,
            pulselength: 9,
            groundvm: false,
            calib: false,
        }
    }
}

impl FgConfig {
    /// Whether both programming bias fields are zero.
    #[must_use]
    pub const fn biases_zeroed(&self) -> bool {
        self.fg_bias == 0 && self.fg_biasn == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dac_range() {
        assert_eq!(DacValue::new(1023), Some(DacValue::MAX));
        assert!(DacValue::new(1024).is_none());
        assert_eq!(DacValue::new(275).map(DacValue::value), Some(275));
    }

    #[test]
    fn default_pass_is_biased() {
        let cfg = FgConfig::default();
        assert!(!cfg.biases_zeroed());
        let zeroed = FgConfig { fg_bias: 0, fg_biasn: 0, ..cfg };
        assert!(zeroed.biases_zeroed());
    }
}
