// SPDX-License-Identifier: AGPL-3.0-only

//! `hicann` — command-line interface for HICANN wafer parameter programming.
//!
//! ```text
//! USAGE:
//!   hicann program [options]     Program analog parameters on a software wafer
//!   hicann parameters            List shared floating-gate parameters
//! ```
//!
//! Every `program` option also reads a `HICANN_*` environment variable.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hicann_driver::chip::coord::{Geometry, HicannOnWafer, Side, WaferId};
use hicann_driver::chip::fg::{DacValue, FG_MAX};
use hicann_driver::chip::shared::SharedParameter;
use hicann_driver::chip::synapse::{GmaxDiv, SynapseWeight};
use hicann_driver::{
    program_analog_parameters, set_synapse_weights, AnalogParameters, HicannConfig,
    SoftwareWafer, Substrate, SynapseOnWafer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hicann", about = "HICANN wafer parameter programming CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Allocate HICANNs on a software wafer, program them and print the result.
    Program(ProgramArgs),
    /// List the shared floating-gate parameters of an FG block.
    Parameters,
}

#[derive(clap::Args)]
struct ProgramArgs {
    /// Wafer id.
    #[arg(long, env = "HICANN_WAFER", default_value_t = 33)]
    wafer: u16,

    /// HICANN to allocate (enumerated, 0..384). Repeatable.
    #[arg(long = "hicann", env = "HICANN_HICANNS", value_delimiter = ',', default_values_t = [297])]
    hicanns: Vec<u16>,

    /// Value for V_gmax0..V_gmax3.
    #[arg(long, env = "HICANN_GMAX", default_value_t = FG_MAX)]
    gmax: u16,

    /// Conductance divider for every synapse driver row.
    #[arg(long, env = "HICANN_GMAX_DIV", default_value_t = 1)]
    gmax_div: u8,

    /// Driver row side receiving gmax_div (left or right).
    #[arg(long, env = "HICANN_SIDE", default_value = "left")]
    side: Side,

    /// Value for V_dllres.
    #[arg(long, env = "HICANN_V_DLLRES", default_value_t = 275)]
    v_dllres: u16,

    /// Value for V_ccas.
    #[arg(long, env = "HICANN_V_CCAS", default_value_t = 800)]
    v_ccas: u16,

    /// Override the number of FG programming passes per HICANN.
    #[arg(long, env = "HICANN_PASSES")]
    passes: Option<usize>,

    /// Synapse to receive --weight, as hicann/row/column. Repeatable.
    #[arg(long = "synapse", value_delimiter = ',')]
    synapses: Vec<SynapseOnWafer>,

    /// Weight written to every --synapse.
    #[arg(long, env = "HICANN_WEIGHT", default_value_t = 15)]
    weight: u8,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Cmd::Program(args) => cmd_program(&args)?,
        Cmd::Parameters => cmd_parameters(),
    }

    Ok(())
}

fn dac(name: &str, value: u16) -> Result<DacValue> {
    DacValue::new(value).with_context(|| format!("{name}={value} exceeds the DAC range 0..={FG_MAX}"))
}

impl ProgramArgs {
    fn analog_parameters(&self) -> Result<AnalogParameters> {
        let gmax_div = GmaxDiv::new(self.gmax_div)
            .with_context(|| format!("gmax-div={} exceeds four bits", self.gmax_div))?;
        Ok(AnalogParameters::new(dac("gmax", self.gmax)?, gmax_div)
            .with_side(self.side)
            .with_v_dllres(dac("v-dllres", self.v_dllres)?)
            .with_v_ccas(dac("v-ccas", self.v_ccas)?))
    }
}

fn cmd_program(args: &ProgramArgs) -> Result<()> {
    let params = args.analog_parameters()?;
    let weight = SynapseWeight::new(args.weight)
        .with_context(|| format!("weight={} exceeds four bits", args.weight))?;

    let mut wafer = SoftwareWafer::new(WaferId(args.wafer));
    for &h in &args.hicanns {
        let hicann = HicannOnWafer::new(h).with_context(|| format!("HICANN {h} out of range"))?;
        let config = wafer.allocate_with(hicann, Geometry::HICANN)?;
        if let Some(passes) = args.passes {
            config.floating_gates.set_programming_passes(passes);
        }
    }

    info!("Allocated {} HICANN(s) on {}", wafer.len(), wafer.wafer());

    program_analog_parameters(&mut wafer, &params).context("programming analog parameters")?;

    if !args.synapses.is_empty() {
        let written = set_synapse_weights(&mut wafer, args.synapses.iter().copied(), weight)
            .context("setting synapse weights")?;
        println!("Synapse weights: {written} set to {weight}");
        println!();
    }

    println!("{}: {} HICANN(s) programmed", wafer.wafer(), wafer.len());
    println!();
    for hicann in wafer.allocated_hicanns()? {
        print_hicann(hicann, wafer.hicann(hicann)?, &params)?;
    }

    Ok(())
}

fn print_hicann(hicann: HicannOnWafer, config: &HicannConfig, params: &AnalogParameters) -> Result<()> {
    let geometry = config.geometry();
    let fgs = &config.floating_gates;

    println!("[{}] {hicann}", hicann.value());
    for block in geometry.fg_blocks() {
        let gmax: Vec<String> = SharedParameter::GMAX
            .iter()
            .map(|&p| fgs.shared(block, p).to_string())
            .collect();
        println!(
            "     {block}  V_gmax0..3 [{}]  V_dllres {}  V_ccas {}",
            gmax.join(", "),
            fgs.shared(block, SharedParameter::V_dllres),
            fgs.shared(block, SharedParameter::V_ccas),
        );
    }

    let rows = geometry
        .synapse_drivers()
        .flat_map(|d| geometry.rows().map(move |r| (d, r)))
        .filter(|&(d, r)| config.synapses.gmax_div(d, r, params.side) == params.gmax_div)
        .count();
    println!("     gmax_div {:?}={}  on {rows} driver row(s)", params.side, params.gmax_div);

    for pass in 0..fgs.programming_passes() {
        let cfg = fgs.fg_config(pass)?;
        println!("     pass {pass}  fg_bias {}  fg_biasn {}", cfg.fg_bias, cfg.fg_biasn);
    }
    println!();
    Ok(())
}

fn cmd_parameters() {
    println!("Shared floating-gate parameters: {}", SharedParameter::ALL.len());
    println!();
    for p in SharedParameter::ALL {
        println!("  [{:>2}] {p}", p.index());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_prints_every_pass_of_a_programmed_hicann() {
        let mut wafer = SoftwareWafer::new(WaferId(33));
        let hicann = HicannOnWafer::new(297).unwrap();
        wafer.allocate(hicann).unwrap().floating_gates.set_programming_passes(3);
        let params = AnalogParameters::default();
        program_analog_parameters(&mut wafer, &params).unwrap();
        assert!(print_hicann(hicann, wafer.hicann(hicann).unwrap(), &params).is_ok());
    }
}
