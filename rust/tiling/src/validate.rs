// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Input validation and partition verification
//!
//! Inputs are checked once, before the sweep starts, and every offending
//! opening is reported together. Openings that pass are snapped onto nearby
//! panel and opening edges; the sweep and verification both work on the
//! snapped geometry. Verification re-checks a finished partition against the
//! coverage, non-overlap and containment invariants.

use tracing::debug;

use crate::error::{Error, OpeningFault, OpeningFaultKind, Result};
use crate::rect::{total_area, Rect};
use crate::snap::snap_openings;

/// Reject a non-positive panel, or any opening that is degenerate, not
/// contained in the panel, or overlapping another opening.
pub fn validate_inputs(panel: &Rect, openings: &[Rect], eps: f64) -> Result<()> {
    prepare_openings(panel, openings, eps).map(|_| ())
}

/// Validate the inputs and return the openings the sweep should see.
///
/// Edges within `eps` of a panel edge or another opening's edge are snapped
/// together. Openings that collapse to zero width or height when snapped are
/// dropped, so the result is not index-aligned with `openings`.
pub fn prepare_openings(panel: &Rect, openings: &[Rect], eps: f64) -> Result<Vec<Rect>> {
    if !panel.is_finite() || panel.width <= 0.0 || panel.height <= 0.0 {
        return Err(Error::InvalidPanel {
            width: panel.width,
            height: panel.height,
        });
    }

    let mut faults = Vec::new();
    let mut accepted = Vec::with_capacity(openings.len());
    for (index, rect) in openings.iter().enumerate() {
        match opening_fault(panel, rect, eps) {
            Some(kind) => faults.push(OpeningFault {
                index,
                rect: *rect,
                kind,
            }),
            None => accepted.push(index),
        }
    }

    let originals: Vec<Rect> = accepted.iter().map(|&i| openings[i]).collect();
    let snapped = snap_openings(panel, &originals, eps);

    // Tolerance-sized overlaps have already been snapped to shared edges
    let overlap_tolerance = eps * eps;
    for (j, rect) in snapped.iter().enumerate() {
        if let Some(i) = snapped[..j]
            .iter()
            .position(|other| rect.intersection_area(other) > overlap_tolerance)
        {
            faults.push(OpeningFault {
                index: accepted[j],
                rect: originals[j],
                kind: OpeningFaultKind::Overlaps { other: accepted[i] },
            });
        }
    }

    if !faults.is_empty() {
        faults.sort_by_key(|f| f.index);
        return Err(Error::InvalidOpening { faults });
    }

    let prepared: Vec<Rect> = snapped
        .into_iter()
        .filter(|r| r.width > 0.0 && r.height > 0.0)
        .collect();
    if prepared.len() < openings.len() {
        debug!(
            dropped = openings.len() - prepared.len(),
            "openings collapsed by snapping"
        );
    }
    Ok(prepared)
}

fn opening_fault(panel: &Rect, opening: &Rect, eps: f64) -> Option<OpeningFaultKind> {
    if !opening.is_finite() {
        Some(OpeningFaultKind::NonFinite)
    } else if opening.width <= 0.0 || opening.height <= 0.0 {
        Some(OpeningFaultKind::NonPositiveSize)
    } else if !panel.contains_rect(opening, eps) {
        Some(OpeningFaultKind::OutsidePanel)
    } else {
        None
    }
}

/// Check that `tiles` exactly partition `panel` minus `openings`.
pub fn verify_partition(panel: &Rect, openings: &[Rect], tiles: &[Rect], eps: f64) -> Result<()> {
    let overlap_tolerance = eps * eps;

    for (i, tile) in tiles.iter().enumerate() {
        if !panel.contains_rect(tile, eps) {
            return Err(Error::PartitionMismatch(format!(
                "tile #{} {} leaves panel {}",
                i, tile, panel
            )));
        }
        if let Some((j, opening)) = openings
            .iter()
            .enumerate()
            .find(|(_, o)| tile.intersection_area(o) > overlap_tolerance)
        {
            return Err(Error::PartitionMismatch(format!(
                "tile #{} {} overlaps opening #{} {}",
                i, tile, j, opening
            )));
        }
        for (j, other) in tiles.iter().enumerate().skip(i + 1) {
            if tile.intersection_area(other) > overlap_tolerance {
                return Err(Error::PartitionMismatch(format!(
                    "tile #{} {} overlaps tile #{} {}",
                    i, tile, j, other
                )));
            }
        }
    }

    let covered = total_area(tiles) + total_area(openings);
    let tolerance = overlap_tolerance * (tiles.len() + openings.len()).max(1) as f64;
    if (covered - panel.area()).abs() > tolerance {
        return Err(Error::PartitionMismatch(format!(
            "covered area {:.6} differs from panel area {:.6}",
            covered,
            panel.area()
        )));
    }

    Ok(())
}
