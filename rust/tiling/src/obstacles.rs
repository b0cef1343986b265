// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Obstacle Set
//!
//! Openings plus every tile emitted so far, kept in two sorted views: one by
//! ascending `x` and one by ascending `y`. Bound queries walk only the tail of
//! the relevant view past the query point and stop at the first hit.

use std::cmp::Ordering;

use crate::rect::{FrontierPoint, Rect};

/// Rectangles that bound further tile growth
#[derive(Debug, Clone, Default)]
pub struct ObstacleSet {
    by_x: Vec<Rect>,
    by_y: Vec<Rect>,
}

fn cmp_x(a: &Rect, b: &Rect) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

fn cmp_y(a: &Rect, b: &Rect) -> Ordering {
    a.y.total_cmp(&b.y).then_with(|| a.x.total_cmp(&b.x))
}

impl ObstacleSet {
    /// Seed the set with the panel's openings
    pub fn from_openings(openings: &[Rect]) -> Self {
        let mut by_x = openings.to_vec();
        let mut by_y = openings.to_vec();
        // Stable sorts keep caller order among equal keys
        by_x.sort_by(cmp_x);
        by_y.sort_by(cmp_y);
        Self { by_x, by_y }
    }

    /// Insert a rectangle into both views, after any equal keys
    pub fn insert(&mut self, rect: Rect) {
        let ix = self
            .by_x
            .partition_point(|o| cmp_x(o, &rect) != Ordering::Greater);
        self.by_x.insert(ix, rect);
        let iy = self
            .by_y
            .partition_point(|o| cmp_y(o, &rect) != Ordering::Greater);
        self.by_y.insert(iy, rect);
    }

    /// Whether an obstacle already occupies the corner `p`
    pub fn covers(&self, p: FrontierPoint, eps: f64) -> bool {
        let end = self.by_y.partition_point(|o| o.y <= p.y + eps);
        self.by_y[..end].iter().any(|o| o.covers_point(p, eps))
    }

    /// Smallest top edge strictly below `p.y` among obstacles whose x-range
    /// contains `p.x`.
    pub fn height_bound(&self, p: FrontierPoint, eps: f64) -> Option<f64> {
        let start = self.by_y.partition_point(|o| o.y <= p.y + eps);
        self.by_y[start..]
            .iter()
            .find(|o| o.spans_x(p.x, eps))
            .map(|o| o.y)
    }

    /// Smallest left edge strictly right of `p.x` among obstacles that
    /// intersect the horizontal band `[p.y, max_y)`.
    pub fn width_bound(&self, p: FrontierPoint, max_y: f64, eps: f64) -> Option<f64> {
        let start = self.by_x.partition_point(|o| o.x <= p.x + eps);
        self.by_x[start..]
            .iter()
            .find(|o| o.overlaps_y(p.y, max_y, eps))
            .map(|o| o.x)
    }

    /// `[x, right)` spans of obstacles whose top edge lies on the horizontal
    /// line `y` and overlaps `(lo, hi)`, in ascending `x`.
    pub fn spans_below(
        &self,
        y: f64,
        lo: f64,
        hi: f64,
        eps: f64,
    ) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.by_x
            .iter()
            .filter(move |o| (o.y - y).abs() <= eps && o.overlaps_x(lo, hi, eps))
            .map(|o| (o.x, o.right()))
    }

    /// `[y, bottom)` spans of obstacles whose left edge lies on the vertical
    /// line `x` and overlaps `(lo, hi)`, in ascending `y`.
    pub fn spans_right_of(
        &self,
        x: f64,
        lo: f64,
        hi: f64,
        eps: f64,
    ) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.by_y
            .iter()
            .filter(move |o| (o.x - x).abs() <= eps && o.overlaps_y(lo, hi, eps))
            .map(|o| (o.y, o.bottom()))
    }
}
