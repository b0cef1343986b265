// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use thiserror::Error;

use crate::rect::Rect;

/// Result type for panel tiling operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while projecting openings or partitioning a panel
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid panel: size {width} x {height} must be finite and positive")]
    InvalidPanel { width: f64, height: f64 },

    #[error("Invalid opening: {}", FaultList(.faults, "opening"))]
    InvalidOpening { faults: Vec<OpeningFault> },

    #[error("Invalid sub-item: {}", FaultList(.faults, "sub-item"))]
    InvalidSubItem { faults: Vec<SubItemFault> },

    /// Internal invariant violation; the partition would contain a hole.
    #[error("Degenerate tile emitted: {tile}")]
    DegenerateTile { tile: Rect },

    /// Internal invariant violation caught by output verification.
    #[error("Partition verification failed: {0}")]
    PartitionMismatch(String),
}

impl Error {
    /// Whether the error signals a bug in the partitioner rather than bad input
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::DegenerateTile { .. } | Error::PartitionMismatch(_))
    }
}

/// Why a single opening was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpeningFaultKind {
    NonFinite,
    NonPositiveSize,
    OutsidePanel,
    /// Shares area with the earlier opening at index `other`
    Overlaps { other: usize },
}

impl fmt::Display for OpeningFaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpeningFaultKind::NonFinite => f.write_str("non-finite coordinates"),
            OpeningFaultKind::NonPositiveSize => f.write_str("non-positive size"),
            OpeningFaultKind::OutsidePanel => f.write_str("not contained in panel"),
            OpeningFaultKind::Overlaps { other } => write!(f, "overlaps opening #{}", other),
        }
    }
}

/// One offending opening, reported by index into the caller's list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeningFault {
    pub index: usize,
    pub rect: Rect,
    pub kind: OpeningFaultKind,
}

impl fmt::Display for OpeningFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} {}", self.index, self.rect, self.kind)
    }
}

/// Why a single sub-item could not be projected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubItemFaultKind {
    NonFinite,
    NonPositiveSize,
}

/// One offending sub-item, reported by index into the caller's list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubItemFault {
    pub index: usize,
    pub width: f64,
    pub height: f64,
    pub kind: SubItemFaultKind,
}

impl fmt::Display for SubItemFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SubItemFaultKind::NonFinite => write!(f, "#{} non-finite pose or size", self.index),
            SubItemFaultKind::NonPositiveSize => write!(
                f,
                "#{} non-positive size {} x {}",
                self.index, self.width, self.height
            ),
        }
    }
}

struct FaultList<'a, T>(&'a [T], &'static str);

impl<T: fmt::Display> fmt::Display for FaultList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(s) rejected", self.0.len(), self.1)?;
        for (i, fault) in self.0.iter().enumerate() {
            f.write_str(if i == 0 { ": " } else { "; " })?;
            write!(f, "{}", fault)?;
        }
        Ok(())
    }
}
