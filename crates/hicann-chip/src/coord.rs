// SPDX-License-Identifier: AGPL-3.0-only

//! Coordinate spaces of a wafer and of a single HICANN.
//!
//! ```text
//! Wafer ── 384 HICANNs
//!  └─ HICANN
//!      ├─ 4 floating-gate blocks         (FgBlockOnHicann 0..4)
//!      └─ 224 synapse drivers            (SynapseDriverOnHicann 0..224)
//!          └─ 2 rows per driver          (RowOnSynapseDriver 0..2)
//!              └─ 256 synapses per row   (SynapseColumnOnHicann 0..256)
//! ```
//!
//! Every coordinate is a checked newtype: `new` returns `None` outside the
//! silicon range, so a value of the type is always a valid address.

use std::fmt;

/// HICANNs on one wafer.
pub const HICANNS_ON_WAFER: u16 = 384;
/// Floating-gate blocks per HICANN.
pub const FG_BLOCKS_ON_HICANN: u8 = 4;
/// Synapse drivers per HICANN (112 per side, two sides).
pub const SYNAPSE_DRIVERS_ON_HICANN: u16 = 224;
/// Synapse rows driven by one synapse driver.
pub const ROWS_ON_SYNAPSE_DRIVER: u8 = 2;
/// Synapse rows per HICANN.
pub const SYNAPSE_ROWS_ON_HICANN: u16 =
    SYNAPSE_DRIVERS_ON_HICANN * ROWS_ON_SYNAPSE_DRIVER as u16;
/// Synapse columns per HICANN (one per denmem).
pub const SYNAPSE_COLUMNS_ON_HICANN: u16 = 256;

macro_rules! coordinate {
    ($(#[$doc:meta])* $name:ident, $repr:ty, $max:expr, $label:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($repr);

        impl $name {
            /// Checked constructor; `None` outside the silicon range.
            #[must_use]
            pub const fn new(value: $repr) -> Option<Self> {
                if value < $max {
                    Some(Self(value))
                } else {
                    None
                }
            }

            /// Raw index.
            #[must_use]
            pub const fn value(self) -> $repr {
                self.0
            }

            /// All coordinates in ascending order.
            pub fn iter_all() -> impl Iterator<Item = Self> + Clone {
                (0..$max).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "({})"), self.0)
            }
        }
    };
}

coordinate!(
    /// HICANN position on a wafer (enumerated, 0..384).
    HicannOnWafer, u16, HICANNS_ON_WAFER, "HICANN"
);
coordinate!(
    /// Floating-gate block on a HICANN.
    FgBlockOnHicann, u8, FG_BLOCKS_ON_HICANN, "FGBlock"
);
coordinate!(
    /// Synapse driver on a HICANN.
    SynapseDriverOnHicann, u16, SYNAPSE_DRIVERS_ON_HICANN, "SynapseDriver"
);
coordinate!(
    /// Row of a synapse driver (top or bottom).
    RowOnSynapseDriver, u8, ROWS_ON_SYNAPSE_DRIVER, "Row"
);
coordinate!(
    /// Synapse row on a HICANN.
    SynapseRowOnHicann, u16, SYNAPSE_ROWS_ON_HICANN, "SynapseRow"
);
coordinate!(
    /// Synapse column on a HICANN.
    SynapseColumnOnHicann, u16, SYNAPSE_COLUMNS_ON_HICANN, "SynapseColumn"
);

/// Wafer identifier. Not range-checked; the facility assigns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WaferId(pub u16);

impl fmt::Display for WaferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wafer({})", self.0)
    }
}

/// Half of a synapse row config: each row carries one setting per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left (even) half.
    Left,
    /// Right (odd) half.
    Right,
}

impl Side {
    /// Both sides.
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    /// Array index of this side.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

impl std::str::FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            other => Err(format!("unknown side '{other}' (expected left or right)")),
        }
    }
}

impl SynapseRowOnHicann {
    /// Row driven by `row` of `driver`.
    #[must_use]
    pub const fn from_driver(driver: SynapseDriverOnHicann, row: RowOnSynapseDriver) -> Self {
        Self(driver.0 * ROWS_ON_SYNAPSE_DRIVER as u16 + row.0 as u16)
    }

    /// Driver feeding this row.
    #[must_use]
    pub const fn driver(self) -> SynapseDriverOnHicann {
        SynapseDriverOnHicann(self.0 / ROWS_ON_SYNAPSE_DRIVER as u16)
    }

    /// Row index within the driver.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn row_on_driver(self) -> RowOnSynapseDriver {
        RowOnSynapseDriver((self.0 % ROWS_ON_SYNAPSE_DRIVER as u16) as u8)
    }
}

/// A single synapse on a HICANN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SynapseOnHicann {
    /// Synapse row.
    pub row: SynapseRowOnHicann,
    /// Synapse column.
    pub column: SynapseColumnOnHicann,
}

impl SynapseOnHicann {
    /// Checked constructor from raw row and column.
    #[must_use]
    pub const fn new(row: u16, column: u16) -> Option<Self> {
        match (SynapseRowOnHicann::new(row), SynapseColumnOnHicann::new(column)) {
            (Some(row), Some(column)) => Some(Self { row, column }),
            _ => None,
        }
    }
}

impl fmt::Display for SynapseOnHicann {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Synapse({}, {})", self.row.value(), self.column.value())
    }
}

/// Extent of the configuration a HICANN exposes.
///
/// [`Geometry::HICANN`] is the full chip. Smaller geometries are prefixes of
/// the full coordinate spaces: a geometry with two FG blocks holds blocks 0
/// and 1. Reduced tiles are used by simulated substrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    fg_blocks: u8,
    synapse_drivers: u16,
    rows_per_driver: u8,
}

impl Geometry {
    /// Full HICANN.
    pub const HICANN: Self = Self {
        fg_blocks: FG_BLOCKS_ON_HICANN,
        synapse_drivers: SYNAPSE_DRIVERS_ON_HICANN,
        rows_per_driver: ROWS_ON_SYNAPSE_DRIVER,
    };

    /// Checked constructor; `None` if any extent exceeds the silicon.
    #[must_use]
    pub const fn new(fg_blocks: u8, synapse_drivers: u16, rows_per_driver: u8) -> Option<Self> {
        if fg_blocks > FG_BLOCKS_ON_HICANN
            || synapse_drivers > SYNAPSE_DRIVERS_ON_HICANN
            || rows_per_driver > ROWS_ON_SYNAPSE_DRIVER
        {
            return None;
        }
        Some(Self { fg_blocks, synapse_drivers, rows_per_driver })
    }

    /// FG block count.
    #[must_use]
    pub const fn fg_block_count(&self) -> u8 {
        self.fg_blocks
    }

    /// Synapse driver count.
    #[must_use]
    pub const fn synapse_driver_count(&self) -> u16 {
        self.synapse_drivers
    }

    /// Rows per synapse driver.
    #[must_use]
    pub const fn rows_per_driver(&self) -> u8 {
        self.rows_per_driver
    }

    /// FG blocks present.
    pub fn fg_blocks(&self) -> impl Iterator<Item = FgBlockOnHicann> + Clone {
        FgBlockOnHicann::iter_all().take(usize::from(self.fg_blocks))
    }

    /// Synapse drivers present.
    pub fn synapse_drivers(&self) -> impl Iterator<Item = SynapseDriverOnHicann> + Clone {
        SynapseDriverOnHicann::iter_all().take(usize::from(self.synapse_drivers))
    }

    /// Rows present on each synapse driver.
    pub fn rows(&self) -> impl Iterator<Item = RowOnSynapseDriver> + Clone {
        RowOnSynapseDriver::iter_all().take(usize::from(self.rows_per_driver))
    }

    /// Whether `block` is part of this geometry.
    #[must_use]
    pub const fn contains_block(&self, block: FgBlockOnHicann) -> bool {
        block.0 < self.fg_blocks
    }

    /// Whether `driver`/`row` is part of this geometry.
    #[must_use]
    pub const fn contains_row(&self, driver: SynapseDriverOnHicann, row: RowOnSynapseDriver) -> bool {
        driver.0 < self.synapse_drivers && row.0 < self.rows_per_driver
    }

    /// Whether a synapse row is part of this geometry.
    #[must_use]
    pub const fn contains_synapse_row(&self, row: SynapseRowOnHicann) -> bool {
        self.contains_row(row.driver(), row.row_on_driver())
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::HICANN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_ranges() {
        assert!(HicannOnWafer::new(383).is_some());
        assert!(HicannOnWafer::new(384).is_none());
        assert!(FgBlockOnHicann::new(4).is_none());
        assert_eq!(SynapseDriverOnHicann::iter_all().count(), 224);
        assert_eq!(SYNAPSE_ROWS_ON_HICANN, 448);
    }

    #[test]
    fn synapse_row_maps_back_to_driver() {
        for driver in SynapseDriverOnHicann::iter_all() {
            for row in RowOnSynapseDriver::iter_all() {
                let syn_row = SynapseRowOnHicann::from_driver(driver, row);
                assert_eq!(syn_row.driver(), driver);
                assert_eq!(syn_row.row_on_driver(), row);
            }
        }
    }

    #[test]
    fn reduced_geometry_is_prefix() {
        let g = Geometry::new(2, 2, 2).unwrap();
        let blocks: Vec<u8> = g.fg_blocks().map(FgBlockOnHicann::value).collect();
        assert_eq!(blocks, [0, 1]);
        assert_eq!(g.synapse_drivers().count(), 2);
        assert!(!g.contains_block(FgBlockOnHicann::new(2).unwrap()));
        assert!(Geometry::new(5, 1, 1).is_none());
        assert!(Geometry::new(1, 1, 3).is_none());
    }

    #[test]
    fn side_parses() {
        assert_eq!("Left".parse::<Side>(), Ok(Side::Left));
        assert_eq!("r".parse::<Side>(), Ok(Side::Right));
        assert!("up".parse::<Side>().is_err());
    }
}
