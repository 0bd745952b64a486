// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for wafer configuration operations

use hicann_chip::coord::{HicannOnWafer, WaferId};
use thiserror::Error;

/// Result type alias for wafer operations
pub type Result<T> = std::result::Result<T, WaferError>;

/// Errors raised by a substrate or its configuration store
#[derive(Debug, Error)]
pub enum WaferError {
    /// HICANN is not part of the allocated set
    #[error("{hicann} is not allocated on {wafer}")]
    HicannNotAllocated {
        /// Wafer that was addressed
        wafer: WaferId,
        /// HICANN that was requested
        hicann: HicannOnWafer,
    },

    /// HICANN was allocated twice
    #[error("{hicann} is already allocated on {wafer}")]
    AlreadyAllocated {
        /// Wafer that was addressed
        wafer: WaferId,
        /// HICANN that was requested
        hicann: HicannOnWafer,
    },

    /// Programming pass index out of range
    #[error("Programming pass {pass} out of range (have {count} passes)")]
    PassOutOfRange {
        /// Requested pass
        pass: usize,
        /// Number of configured passes
        count: usize,
    },

    /// Coordinate lies outside the tile's geometry
    #[error("Coordinate out of range: {what}")]
    CoordinateOutOfRange {
        /// Description of the coordinate
        what: String,
    },

    /// Text does not name a synapse on the wafer
    #[error("Invalid synapse '{input}': {reason}")]
    InvalidSynapse {
        /// Text that was parsed
        input: String,
        /// Reason for failure
        reason: String,
    },

    /// Failure reported by the substrate backend
    #[error("Substrate error: {reason}")]
    Backend {
        /// Reason for failure
        reason: String,
    },
}

impl WaferError {
    /// Create a coordinate out of range error
    pub fn coordinate_out_of_range(what: impl Into<String>) -> Self {
        Self::CoordinateOutOfRange { what: what.into() }
    }

    /// Create an invalid synapse error
    pub fn invalid_synapse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSynapse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a backend error
    pub fn backend(reason: impl Into<String>) -> Self {
        Self::Backend {
            reason: reason.into(),
        }
    }
}
