// SPDX-License-Identifier: AGPL-3.0-only

//! Synapse array of one HICANN: driver row configs and synapse weights.

use hicann_chip::coord::{
    RowOnSynapseDriver, Side, SynapseDriverOnHicann, SynapseOnHicann, SynapseRowOnHicann,
    SYNAPSE_COLUMNS_ON_HICANN, SYNAPSE_ROWS_ON_HICANN,
};
use hicann_chip::synapse::{GmaxDiv, SynapseWeight};

const ROWS: usize = SYNAPSE_ROWS_ON_HICANN as usize;
const COLUMNS: usize = SYNAPSE_COLUMNS_ON_HICANN as usize;

/// Digital configuration of one synapse driver row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowConfig {
    /// Conductance divider, one per side.
    pub gmax_div: [GmaxDiv; 2],
}

/// Row configs and weights of every synapse on a HICANN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynapseArray {
    rows: Vec<RowConfig>,
    weights: Vec<SynapseWeight>,
}

impl Default for SynapseArray {
    fn default() -> Self {
        Self::new()
    }
}

impl SynapseArray {
    /// Zeroed row configs and weights.
    pub fn new() -> Self {
        Self {
            rows: vec![RowConfig::default(); ROWS],
            weights: vec![SynapseWeight::default(); ROWS * COLUMNS],
        }
    }

    fn row_index(driver: SynapseDriverOnHicann, row: RowOnSynapseDriver) -> usize {
        usize::from(SynapseRowOnHicann::from_driver(driver, row).value())
    }

    fn weight_index(synapse: SynapseOnHicann) -> usize {
        usize::from(synapse.row.value()) * COLUMNS + usize::from(synapse.column.value())
    }

    /// Row config of `row` on `driver`.
    pub fn row_config(&self, driver: SynapseDriverOnHicann, row: RowOnSynapseDriver) -> RowConfig {
        self.rows[Self::row_index(driver, row)]
    }

    /// Mutable row config of `row` on `driver`.
    pub fn row_config_mut(
        &mut self,
        driver: SynapseDriverOnHicann,
        row: RowOnSynapseDriver,
    ) -> &mut RowConfig {
        &mut self.rows[Self::row_index(driver, row)]
    }

    /// Conductance divider on one side of a driver row.
    pub fn gmax_div(&self, driver: SynapseDriverOnHicann, row: RowOnSynapseDriver, side: Side) -> GmaxDiv {
        self.row_config(driver, row).gmax_div[side.index()]
    }

    /// Set the conductance divider on one side of a driver row.
    pub fn set_gmax_div(
        &mut self,
        driver: SynapseDriverOnHicann,
        row: RowOnSynapseDriver,
        side: Side,
        value: GmaxDiv,
    ) {
        self.row_config_mut(driver, row).gmax_div[side.index()] = value;
    }

    /// Weight of one synapse.
    pub fn weight(&self, synapse: SynapseOnHicann) -> SynapseWeight {
        self.weights[Self::weight_index(synapse)]
    }

    /// Set the weight of one synapse.
    pub fn set_weight(&mut self, synapse: SynapseOnHicann, weight: SynapseWeight) {
        self.weights[Self::weight_index(synapse)] = weight;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmax_div_sides_are_independent() {
        let mut syns = SynapseArray::new();
        let driver = SynapseDriverOnHicann::new(17).unwrap();
        let row = RowOnSynapseDriver::new(1).unwrap();
        let div = GmaxDiv::new(7).unwrap();
        syns.set_gmax_div(driver, row, Side::Left, div);
        assert_eq!(syns.gmax_div(driver, row, Side::Left), div);
        assert_eq!(syns.gmax_div(driver, row, Side::Right), GmaxDiv::default());
        let other = RowOnSynapseDriver::new(0).unwrap();
        assert_eq!(syns.gmax_div(driver, other, Side::Left), GmaxDiv::default());
    }

    #[test]
    fn weights_address_last_synapse() {
        let mut syns = SynapseArray::new();
        let last = SynapseOnHicann::new(447, 255).unwrap();
        syns.set_weight(last, SynapseWeight::MAX);
        assert_eq!(syns.weight(last), SynapseWeight::MAX);
        let first = SynapseOnHicann::new(0, 0).unwrap();
        assert_eq!(syns.weight(first), SynapseWeight::default());
    }
}
