// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sweep frontier: pending tile corners, popped top-to-bottom then
//! left-to-right.

use std::collections::BTreeSet;

use smallvec::SmallVec;

use crate::rect::{FrontierPoint, Rect};

/// Ordered set of candidate tile corners
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    points: BTreeSet<FrontierPoint>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point; returns false if the exact point is already pending
    pub fn push(&mut self, point: FrontierPoint) -> bool {
        self.points.insert(point)
    }

    /// Smallest `y`, ties broken by smallest `x`
    pub fn pop(&mut self) -> Option<FrontierPoint> {
        self.points.pop_first()
    }
}

/// Initial frontier for a panel: its own corner, plus the corner right of
/// every opening on the top edge and below every opening on the left edge.
pub fn seed(panel: &Rect, openings: &[Rect], eps: f64) -> Frontier {
    let mut frontier = Frontier::new();
    frontier.push(FrontierPoint::new(panel.x, panel.y));

    for opening in openings {
        if (opening.y - panel.y).abs() <= eps && opening.right() < panel.right() - eps {
            frontier.push(FrontierPoint::new(opening.right(), panel.y));
        }
        if (opening.x - panel.x).abs() <= eps && opening.bottom() < panel.bottom() - eps {
            frontier.push(FrontierPoint::new(panel.x, opening.bottom()));
        }
    }

    frontier
}

/// Walk an edge from `start` to `end` past the `[lo, hi)` spans of the
/// obstacles that touch it, given in ascending `lo` order.
///
/// Returns the start of every free gap along the edge. An edge that no
/// obstacle touches yields its own start.
pub fn walk_edge(
    start: f64,
    end: f64,
    spans: impl IntoIterator<Item = (f64, f64)>,
    eps: f64,
) -> SmallVec<[f64; 4]> {
    let mut gaps = SmallVec::new();
    let mut cursor = start;
    let mut advanced = false;

    for (lo, hi) in spans {
        if hi <= cursor + eps {
            continue;
        }
        if lo > cursor + eps {
            gaps.push(cursor);
        }
        cursor = cursor.max(hi);
        advanced = true;
        if cursor >= end - eps {
            break;
        }
    }

    if !advanced || cursor < end - eps {
        gaps.push(cursor);
    }

    gaps
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-3;

    #[test]
    fn test_pop_order() {
        let mut frontier = Frontier::new();
        frontier.push(FrontierPoint::new(6.0, 4.0));
        frontier.push(FrontierPoint::new(4.0, 6.0));
        frontier.push(FrontierPoint::new(4.0, 0.0));
        assert!(!frontier.push(FrontierPoint::new(4.0, 0.0)));
        assert_eq!(frontier.points.len(), 3);

        assert_eq!(frontier.pop(), Some(FrontierPoint::new(4.0, 0.0)));
        assert_eq!(frontier.pop(), Some(FrontierPoint::new(6.0, 4.0)));
        assert_eq!(frontier.pop(), Some(FrontierPoint::new(4.0, 6.0)));
        assert_eq!(frontier.pop(), None);
        assert!(frontier.points.is_empty());
    }

    #[test]
    fn test_seed_edge_openings() {
        let panel = Rect::from_size(10.0, 10.0);
        let openings = [
            Rect::new(3.0, 0.0, 2.0, 2.0),  // top edge
            Rect::new(0.0, 4.0, 1.0, 2.0),  // left edge
            Rect::new(8.0, 0.0, 2.0, 10.0), // top edge, flush with right
            Rect::new(4.0, 4.0, 1.0, 1.0),  // interior
        ];
        let mut frontier = seed(&panel, &openings, EPS);
        let mut points = Vec::new();
        while let Some(p) = frontier.pop() {
            points.push(p);
        }
        assert_eq!(
            points,
            vec![
                FrontierPoint::new(0.0, 0.0),
                FrontierPoint::new(5.0, 0.0),
                FrontierPoint::new(0.0, 6.0),
            ]
        );
    }

    #[test]
    fn test_walk_edge_gaps() {
        // [0, 10) with obstacles [2, 4) and [4, 5) and [7, 8)
        let gaps = walk_edge(0.0, 10.0, [(2.0, 4.0), (4.0, 5.0), (7.0, 8.0)], EPS);
        assert_eq!(gaps.as_slice(), &[0.0, 5.0, 8.0]);
    }

    #[test]
    fn test_walk_edge_fully_blocked() {
        let gaps = walk_edge(0.0, 10.0, [(-2.0, 3.0), (3.0, 10.0)], EPS);
        assert!(gaps.is_empty());
    }

    #[test]
    fn test_walk_edge_untouched_edge_yields_start() {
        let gaps = walk_edge(2.0, 6.0, std::iter::empty(), EPS);
        assert_eq!(gaps.as_slice(), &[2.0]);
    }

    #[test]
    fn test_walk_edge_skips_spans_behind_cursor() {
        let gaps = walk_edge(5.0, 10.0, [(0.0, 5.0), (5.0, 6.0)], EPS);
        assert_eq!(gaps.as_slice(), &[6.0]);
    }
}
