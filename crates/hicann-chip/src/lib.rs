// SPDX-License-Identifier: AGPL-3.0-only

//! Silicon model for the HICANN neuromorphic chip.
//!
//! This crate has **no dependencies** and **no hardware access** — it is a
//! pure model of the silicon: coordinate spaces on the wafer and on a single
//! HICANN, the shared floating-gate parameter set, the per-pass programming
//! record, and the value ranges of the analog and digital cells.
//!
//! # Crate organisation
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coord`] | Wafer, HICANN, FG block, synapse driver/row/column coordinates, tile geometry |
//! | [`shared`] | The 23 shared floating-gate parameters of an FG block |
//! | [`fg`] | 10-bit DAC values and the FG programming pass record |
//! | [`synapse`] | 4-bit gmax divider and synapse weight values |

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod coord;
pub mod fg;
pub mod shared;
pub mod synapse;
