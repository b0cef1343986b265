// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Edge snapping
//!
//! Opening edges closer than `eps` to a panel edge or to another opening's
//! edge are moved onto a shared coordinate before the sweep. Afterwards any
//! two distinct edge coordinates on the same axis are more than `eps` apart,
//! so the sweep's tolerance tests never merge a real gap.

use crate::rect::Rect;

/// Coordinates on one axis grouped into runs whose neighbours lie within
/// `eps` of each other; every run maps to a single representative.
struct AxisSnap {
    /// `(lowest member, representative)`, ascending
    runs: Vec<(f64, f64)>,
}

impl AxisSnap {
    /// Panel edges in `anchors` win over opening edges in the same run;
    /// otherwise a run snaps to its lowest member.
    fn build(anchors: [f64; 2], values: impl IntoIterator<Item = f64>, eps: f64) -> Self {
        let mut coords: Vec<f64> = values.into_iter().chain(anchors).collect();
        coords.sort_by(f64::total_cmp);
        coords.dedup();

        let mut runs: Vec<(f64, f64)> = Vec::new();
        let mut run_start = 0;
        for i in 0..coords.len() {
            let last = i + 1 == coords.len();
            if last || coords[i + 1] - coords[i] > eps {
                let members = &coords[run_start..=i];
                let rep = anchors
                    .iter()
                    .copied()
                    .find(|a| members.contains(a))
                    .unwrap_or(members[0]);
                runs.push((members[0], rep));
                run_start = i + 1;
            }
        }

        Self { runs }
    }

    fn snap(&self, v: f64) -> f64 {
        let idx = self.runs.partition_point(|&(lo, _)| lo <= v);
        idx.checked_sub(1).map_or(v, |i| self.runs[i].1)
    }
}

/// Snap opening edges onto nearby panel and opening edges, then clip each
/// opening to the panel.
///
/// Returns one rectangle per input opening, in input order. An opening
/// narrower than `eps` may collapse to zero width or height.
pub fn snap_openings(panel: &Rect, openings: &[Rect], eps: f64) -> Vec<Rect> {
    let xs = AxisSnap::build(
        [panel.x, panel.right()],
        openings.iter().flat_map(|o| [o.x, o.right()]),
        eps,
    );
    let ys = AxisSnap::build(
        [panel.y, panel.bottom()],
        openings.iter().flat_map(|o| [o.y, o.bottom()]),
        eps,
    );

    openings
        .iter()
        .map(|o| {
            let min_x = xs.snap(o.x).max(panel.x);
            let min_y = ys.snap(o.y).max(panel.y);
            let max_x = xs.snap(o.right()).min(panel.right()).max(min_x);
            let max_y = ys.snap(o.bottom()).min(panel.bottom()).max(min_y);
            Rect::from_corners(min_x, min_y, max_x, max_y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f64 = 1e-3;

    #[test]
    fn test_snaps_to_panel_edge() {
        let panel = Rect::from_size(10.0, 10.0);
        let snapped = snap_openings(&panel, &[Rect::new(4.0, 0.0005, 2.0, 2.0)], EPS);
        assert_eq!(snapped[0].x, 4.0);
        assert_eq!(snapped[0].y, 0.0);
        assert_relative_eq!(snapped[0].right(), 6.0);
        assert_relative_eq!(snapped[0].bottom(), 2.0005, epsilon = 1e-12);
    }

    #[test]
    fn test_clips_opening_poking_out() {
        let panel = Rect::from_size(10.0, 4.0);
        let snapped = snap_openings(&panel, &[Rect::new(9.0, -0.0004, 1.0008, 2.0)], EPS);
        assert_eq!(snapped[0].y, 0.0);
        assert_relative_eq!(snapped[0].right(), 10.0);
        assert_relative_eq!(snapped[0].bottom(), 1.9996, epsilon = 1e-12);
    }

    #[test]
    fn test_near_touching_openings_share_an_edge() {
        let panel = Rect::from_size(10.0, 10.0);
        let openings = [Rect::new(2.0, 2.0, 2.0, 2.0), Rect::new(3.9993, 2.0004, 1.0, 1.0)];
        let snapped = snap_openings(&panel, &openings, EPS);
        assert_relative_eq!(snapped[0].right(), 3.9993, epsilon = 1e-12);
        assert_relative_eq!(snapped[1].x, snapped[0].right(), epsilon = 1e-12);
        assert_eq!(snapped[1].y, 2.0);
        assert!(snapped[0].intersection_area(&snapped[1]) < 1e-12);
    }

    #[test]
    fn test_separated_edges_are_untouched() {
        let panel = Rect::from_size(10.0, 10.0);
        let openings = [Rect::new(1.0, 1.0, 2.0, 2.0), Rect::new(3.5, 1.25, 2.0, 2.0)];
        assert_eq!(snap_openings(&panel, &openings, EPS), openings.to_vec());
    }
}
