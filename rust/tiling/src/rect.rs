// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned rectangles in a panel's local 2D frame.
//!
//! The frame follows the editor convention: `x` grows to the right and `y`
//! grows downward, so a rectangle's *top* edge is at `y` and its *bottom*
//! edge is at `y + height`.

use std::cmp::Ordering;
use std::fmt;

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the local origin
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Build the rectangle spanning two opposite corners
    pub fn from_corners(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// `x` lies in `[self.x, self.right())`, with both bounds shifted by `eps`
    /// so that a rectangle ending exactly at `x` does not count.
    #[inline]
    pub fn spans_x(&self, x: f64, eps: f64) -> bool {
        self.x <= x + eps && self.right() > x + eps
    }

    /// Vertical counterpart of [`Rect::spans_x`]
    #[inline]
    pub fn spans_y(&self, y: f64, eps: f64) -> bool {
        self.y <= y + eps && self.bottom() > y + eps
    }

    /// Half-open containment of a corner point, used to discard frontier
    /// points that an earlier tile or opening already occupies.
    #[inline]
    pub fn covers_point(&self, p: FrontierPoint, eps: f64) -> bool {
        self.spans_x(p.x, eps) && self.spans_y(p.y, eps)
    }

    /// Whether the open interval `(lo, hi)` overlaps this rect's x-range by
    /// more than `eps`.
    #[inline]
    pub fn overlaps_x(&self, lo: f64, hi: f64, eps: f64) -> bool {
        self.x < hi - eps && self.right() > lo + eps
    }

    #[inline]
    pub fn overlaps_y(&self, lo: f64, hi: f64, eps: f64) -> bool {
        self.y < hi - eps && self.bottom() > lo + eps
    }

    /// `other` lies inside `self`, allowing each edge to poke out by `eps`
    pub fn contains_rect(&self, other: &Rect, eps: f64) -> bool {
        other.x >= self.x - eps
            && other.y >= self.y - eps
            && other.right() <= self.right() + eps
            && other.bottom() <= self.bottom() + eps
    }

    /// Area shared by two rectangles, zero when they only touch
    pub fn intersection_area(&self, other: &Rect) -> f64 {
        let w = self.right().min(other.right()) - self.x.max(other.x);
        let h = self.bottom().min(other.bottom()) - self.y.max(other.y);
        if w <= 0.0 || h <= 0.0 {
            0.0
        } else {
            w * h
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.4}, {:.4}, {:.4} x {:.4})",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Candidate top-left corner from which the sweep grows the next tile.
///
/// Ordered by `y` first, then `x`, using IEEE total ordering so points can be
/// kept in ordered collections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrontierPoint {
    pub x: f64,
    pub y: f64,
}

impl FrontierPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Eq for FrontierPoint {}

impl Ord for FrontierPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y
            .total_cmp(&other.y)
            .then_with(|| self.x.total_cmp(&other.x))
    }
}

impl PartialOrd for FrontierPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sum of rectangle areas
pub fn total_area<'a>(rects: impl IntoIterator<Item = &'a Rect>) -> f64 {
    rects.into_iter().map(Rect::area).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f64 = 1e-3;

    #[test]
    fn test_edges_and_area() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_relative_eq!(r.right(), 4.0);
        assert_relative_eq!(r.bottom(), 6.0);
        assert_relative_eq!(r.area(), 12.0);
        assert_eq!(Rect::from_corners(1.0, 2.0, 4.0, 6.0), r);
    }

    #[test]
    fn test_spans_is_half_open() {
        let r = Rect::new(4.0, 4.0, 2.0, 2.0);
        assert!(r.spans_x(4.0, EPS));
        assert!(r.spans_x(5.9, EPS));
        assert!(!r.spans_x(6.0, EPS));
        assert!(!r.spans_x(3.9, EPS));
        // Within tolerance of the left edge still counts as inside
        assert!(r.spans_x(3.9995, EPS));
    }

    #[test]
    fn test_covers_point() {
        let r = Rect::new(0.0, 0.0, 2.0, 2.0);
        assert!(r.covers_point(FrontierPoint::new(0.0, 0.0), EPS));
        assert!(!r.covers_point(FrontierPoint::new(2.0, 0.0), EPS));
        assert!(!r.covers_point(FrontierPoint::new(0.0, 2.0), EPS));
    }

    #[test]
    fn test_intersection_area_touching_is_zero() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(2.0, 0.0, 2.0, 2.0);
        let c = Rect::new(1.0, 1.0, 2.0, 2.0);
        assert_relative_eq!(a.intersection_area(&b), 0.0);
        assert_relative_eq!(a.intersection_area(&c), 1.0);
    }

    #[test]
    fn test_contains_rect_with_tolerance() {
        let panel = Rect::from_size(10.0, 4.0);
        assert!(panel.contains_rect(&Rect::new(3.0, 0.0, 2.0, 4.0), EPS));
        assert!(panel.contains_rect(&Rect::new(3.0, -0.0005, 2.0, 4.0), EPS));
        assert!(!panel.contains_rect(&Rect::new(9.0, 0.0, 2.0, 1.0), EPS));
    }

    #[test]
    fn test_frontier_point_order() {
        let mut points = vec![
            FrontierPoint::new(5.0, 1.0),
            FrontierPoint::new(0.0, 2.0),
            FrontierPoint::new(1.0, 1.0),
        ];
        points.sort();
        assert_eq!(
            points,
            vec![
                FrontierPoint::new(1.0, 1.0),
                FrontierPoint::new(5.0, 1.0),
                FrontierPoint::new(0.0, 2.0),
            ]
        );
    }
}
