// SPDX-License-Identifier: AGPL-3.0-only

//! Digital synapse settings.
//!
//! Each synapse driver row splits its conductance range with a 4-bit
//! `gmax_div` per side; each synapse stores a 4-bit weight.

macro_rules! four_bit {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u8);

        impl $name {
            /// Largest value.
            pub const MAX: Self = Self(15);

            /// Checked constructor; `None` above 15.
            #[must_use]
            pub const fn new(value: u8) -> Option<Self> {
                if value <= Self::MAX.0 {
                    Some(Self(value))
                } else {
                    None
                }
            }

            /// Raw value.
            #[must_use]
            pub const fn value(self) -> u8 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

four_bit!(
    /// Conductance divider of one side of a synapse driver row.
    GmaxDiv
);
four_bit!(
    /// Digital synapse weight.
    SynapseWeight
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_bit_range() {
        assert_eq!(GmaxDiv::new(1).map(GmaxDiv::value), Some(1));
        assert!(GmaxDiv::new(16).is_none());
        assert_eq!(SynapseWeight::new(15), Some(SynapseWeight::MAX));
        assert_eq!(SynapseWeight::default().value(), 0);
    }
}
