// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Opening Projector
//!
//! Maps the sub-items attached to a panel (windows and doors on a wall, stair
//! voids on a floor) into opening rectangles in the panel's local frame.
//!
//! Poses are given in the host plane: the wall plane for walls, the floor
//! plane for floors. Both the panel pose and the sub-item pose locate the
//! respective center. A sub-item that is rotated relative to the panel is
//! replaced by the axis-aligned bounding box of its rotated corners, which
//! over-approximates the cut-out.

use nalgebra::{Isometry2, Point2, Vector2};
use tracing::debug;

use crate::error::{Error, Result, SubItemFault, SubItemFaultKind};
use crate::rect::Rect;

/// A panel's placement and size in its host plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelFrame {
    /// Pose of the panel center
    pub pose: Isometry2<f64>,
    pub width: f64,
    pub height: f64,
}

impl PanelFrame {
    pub fn new(pose: Isometry2<f64>, width: f64, height: f64) -> Self {
        Self {
            pose,
            width,
            height,
        }
    }

    /// Panel centered on the host-plane origin, unrotated
    pub fn centered(width: f64, height: f64) -> Self {
        Self::new(Isometry2::identity(), width, height)
    }

    /// The panel in its own local frame, anchored at the origin
    pub fn panel_rect(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    fn half_extents(&self) -> Vector2<f64> {
        Vector2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// What kind of sub-item cuts the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubItemKind {
    Window,
    Door,
    StairVoid,
}

/// A window, door or stair void attached to a panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubItem {
    pub kind: SubItemKind,
    /// Pose of the sub-item center, in the same plane as the panel pose
    pub pose: Isometry2<f64>,
    pub width: f64,
    pub height: f64,
}

impl SubItem {
    pub fn new(kind: SubItemKind, pose: Isometry2<f64>, width: f64, height: f64) -> Self {
        Self {
            kind,
            pose,
            width,
            height,
        }
    }

    /// Sub-item given directly as a rectangle in the panel's local corner
    /// frame of `frame`.
    pub fn aligned(kind: SubItemKind, frame: &PanelFrame, rect: Rect) -> Self {
        let local_center = Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5)
            - frame.half_extents();
        let pose = frame.pose * Isometry2::translation(local_center.x, local_center.y);
        Self::new(kind, pose, rect.width, rect.height)
    }

    fn fault(&self, index: usize) -> Option<SubItemFault> {
        let finite = self.width.is_finite()
            && self.height.is_finite()
            && self.pose.translation.vector.iter().all(|v| v.is_finite())
            && self.pose.rotation.angle().is_finite();
        let kind = if !finite {
            SubItemFaultKind::NonFinite
        } else if self.width <= 0.0 || self.height <= 0.0 {
            SubItemFaultKind::NonPositiveSize
        } else {
            return None;
        };
        Some(SubItemFault {
            index,
            width: self.width,
            height: self.height,
            kind,
        })
    }
}

/// Project one sub-item into the panel's local frame.
///
/// Sub-items sharing the panel's orientation (within `eps` radians) are
/// translated directly; rotated ones yield the bounding box of their corners.
pub fn project_opening(frame: &PanelFrame, item: &SubItem, eps: f64) -> Rect {
    let relative = frame.pose.inverse() * item.pose;
    let center = relative.translation.vector + frame.half_extents();
    let half = Vector2::new(item.width * 0.5, item.height * 0.5);

    if relative.rotation.angle().abs() <= eps {
        return Rect::new(
            center.x - half.x,
            center.y - half.y,
            item.width,
            item.height,
        );
    }

    let corners = [
        Point2::new(-half.x, -half.y),
        Point2::new(half.x, -half.y),
        Point2::new(half.x, half.y),
        Point2::new(-half.x, half.y),
    ];

    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for corner in corners {
        let p = relative.rotation * corner;
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    Rect::from_corners(
        center.x + min_x,
        center.y + min_y,
        center.x + max_x,
        center.y + max_y,
    )
}

/// Project every sub-item of a panel.
///
/// Malformed sub-items are collected and reported together.
pub fn project_openings(frame: &PanelFrame, items: &[SubItem], eps: f64) -> Result<Vec<Rect>> {
    let mut openings = Vec::with_capacity(items.len());
    let mut faults = Vec::new();

    for (index, item) in items.iter().enumerate() {
        if let Some(fault) = item.fault(index) {
            faults.push(fault);
            continue;
        }
        let opening = project_opening(frame, item, eps);
        debug!(index, kind = ?item.kind, %opening, "projected opening");
        openings.push(opening);
    }

    if faults.is_empty() {
        Ok(openings)
    } else {
        Err(Error::InvalidSubItem { faults })
    }
}
