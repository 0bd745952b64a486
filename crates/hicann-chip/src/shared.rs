// SPDX-License-Identifier: AGPL-3.0-only

//! Shared floating-gate parameters.
//!
//! Each FG block stores one row of *shared* analog parameters next to its
//! per-neuron rows. Shared values bias circuits common to every neuron of a
//! block quadrant: synaptic conductance references, the DLL reset voltage,
//! the cascode voltage of the synapse input stage and so on.
//!
//! ```text
//! V_gmax0..3   Conductance references selected by the synapse drivers
//! V_dllres     DLL reset voltage of the synapse drivers
//! V_ccas       Cascode voltage of the synapse input stage
//! V_reset      Neuron reset potential (shared per quadrant)
//! ```

use std::fmt;
use std::str::FromStr;

macro_rules! shared_parameters {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Shared floating-gate parameter of an FG block.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum SharedParameter {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )+
        }

        impl SharedParameter {
            /// Every shared parameter, in row order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Name as printed on the chip documentation.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }
    };
}

shared_parameters! {
    V_reset => "V_reset",
    int_op_bias => "int_op_bias",
    V_dllres => "V_dllres",
    V_bout => "V_bout",
    V_bexp => "V_bexp",
    V_fac => "V_fac",
    I_breset => "I_breset",
    V_dep => "V_dep",
    I_bstim => "I_bstim",
    V_thigh => "V_thigh",
    V_gmax3 => "V_gmax3",
    V_tlow => "V_tlow",
    V_gmax0 => "V_gmax0",
    V_clra => "V_clra",
    V_clrc => "V_clrc",
    V_gmax1 => "V_gmax1",
    V_stdf => "V_stdf",
    V_gmax2 => "V_gmax2",
    V_m => "V_m",
    V_bstdf => "V_bstdf",
    V_dtc => "V_dtc",
    V_br => "V_br",
    V_ccas => "V_ccas",
}

/// Number of shared parameters per FG block.
pub const SHARED_PARAMETER_COUNT: usize = SharedParameter::ALL.len();

impl SharedParameter {
    /// The four conductance references a synapse driver can select.
    pub const GMAX: [Self; 4] = [Self::V_gmax0, Self::V_gmax1, Self::V_gmax2, Self::V_gmax3];

    /// Position in the shared row; dense in `0..SHARED_PARAMETER_COUNT`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SharedParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SharedParameter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown shared parameter '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_dense() {
        assert_eq!(SHARED_PARAMETER_COUNT, 23);
        for (i, p) in SharedParameter::ALL.iter().enumerate() {
            assert_eq!(p.index(), i);
        }
    }

    #[test]
    fn names_round_trip() {
        assert_eq!("V_dllres".parse::<SharedParameter>(), Ok(SharedParameter::V_dllres));
        assert_eq!("v_ccas".parse::<SharedParameter>(), Ok(SharedParameter::V_ccas));
        assert!("V_nope".parse::<SharedParameter>().is_err());
    }

    #[test]
    fn gmax_set_is_distinct() {
        let mut g = SharedParameter::GMAX.to_vec();
        g.sort();
        g.dedup();
        assert_eq!(g.len(), 4);
        assert!(!g.contains(&SharedParameter::V_dllres));
    }
}
