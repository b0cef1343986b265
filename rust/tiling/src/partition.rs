// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Frontier-Sweep Partitioner
//!
//! Decomposes a panel minus its openings into non-overlapping tiles:
//! 1. Pop the top-most, then left-most pending corner
//! 2. Grow a tile down to the first obstacle below the corner, then right to
//!    the first obstacle inside that band
//! 3. Record the tile as an obstacle and seed new corners along its bottom
//!    and right edges wherever the neighbouring space is free
//!
//! Openings seed corners along their bottom and right edges up front, the
//! same way tiles do once emitted.
//!
//! Corners are always popped in increasing `(y, x)` order, so each tile's
//! rectangle is free at the moment it is emitted and every free region ends
//! up with a corner at its top-left.

use tracing::{debug, error, warn};

use crate::config::TilingConfig;
use crate::error::{Error, Result};
use crate::frontier::{self, walk_edge, Frontier};
use crate::obstacles::ObstacleSet;
use crate::rect::{FrontierPoint, Rect};
use crate::validate::{prepare_openings, verify_partition};

/// Opening-aware panel partitioner
#[derive(Debug, Clone, Default)]
pub struct Partitioner {
    config: TilingConfig,
}

impl Partitioner {
    /// Create a partitioner with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TilingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TilingConfig {
        &self.config
    }

    /// Decompose `panel` minus `openings` into tiles.
    ///
    /// Openings must be given in the panel's local frame. Opening edges within
    /// `eps` of a panel edge or of another opening's edge are snapped together
    /// first, so tiles match the snapped openings exactly. Tiles are returned
    /// in emission order, which is deterministic for identical input.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(width = panel.width, height = panel.height, openings = openings.len())
    )]
    pub fn partition(&self, panel: &Rect, openings: &[Rect]) -> Result<Vec<Rect>> {
        let eps = self.config.epsilon;

        let openings = match prepare_openings(panel, openings, eps) {
            Ok(prepared) => prepared,
            Err(err) => {
                warn!(%err, "rejecting panel before sweep");
                return Err(err);
            }
        };

        let tiles = Sweep::new(panel, &openings, eps).run()?;

        if self.config.verify_output {
            if let Err(err) = verify_partition(panel, &openings, &tiles, eps) {
                error!(%err, "partition failed verification");
                return Err(err);
            }
        }

        debug!(tiles = tiles.len(), "panel partitioned");
        Ok(tiles)
    }
}

/// Partition with the default configuration
pub fn decompose(panel: &Rect, openings: &[Rect]) -> Result<Vec<Rect>> {
    Partitioner::new().partition(panel, openings)
}

/// Per-call sweep state
struct Sweep {
    panel: Rect,
    eps: f64,
    obstacles: ObstacleSet,
    frontier: Frontier,
    tiles: Vec<Rect>,
}

impl Sweep {
    fn new(panel: &Rect, openings: &[Rect], eps: f64) -> Self {
        let mut sweep = Self {
            panel: *panel,
            eps,
            obstacles: ObstacleSet::from_openings(openings),
            frontier: frontier::seed(panel, openings, eps),
            tiles: Vec::new(),
        };
        // Free space whose top and left neighbours are both openings is only
        // reachable from a corner on an opening's edge.
        for opening in openings {
            sweep.seed_below(opening);
            sweep.seed_right_of(opening);
        }
        sweep
    }

    fn run(mut self) -> Result<Vec<Rect>> {
        while let Some(corner) = self.frontier.pop() {
            // Repeated seeds and corners on an opening's edge land here
            if !self.inside_panel(corner) || self.obstacles.covers(corner, self.eps) {
                continue;
            }

            let tile = self.grow(corner);
            if tile.width < self.eps || tile.height < self.eps {
                error!(%tile, "degenerate tile");
                return Err(Error::DegenerateTile { tile });
            }
            debug!(%tile, "tile emitted");

            self.obstacles.insert(tile);
            self.tiles.push(tile);
            self.seed_below(&tile);
            self.seed_right_of(&tile);
        }

        Ok(self.tiles)
    }

    fn grow(&self, corner: FrontierPoint) -> Rect {
        let max_y = self
            .obstacles
            .height_bound(corner, self.eps)
            .unwrap_or_else(|| self.panel.bottom());
        let max_x = self
            .obstacles
            .width_bound(corner, max_y, self.eps)
            .unwrap_or_else(|| self.panel.right());
        Rect::from_corners(corner.x, corner.y, max_x, max_y)
    }

    /// Corners along the tile's bottom edge, left to right
    fn seed_below(&mut self, tile: &Rect) {
        let y = tile.bottom();
        let spans = self.obstacles.spans_below(y, tile.x, tile.right(), self.eps);
        for x in walk_edge(tile.x, tile.right(), spans, self.eps) {
            self.push_corner(FrontierPoint::new(x, y));
        }
    }

    /// Corners along the tile's right edge, top to bottom
    fn seed_right_of(&mut self, tile: &Rect) {
        let x = tile.right();
        let spans = self.obstacles.spans_right_of(x, tile.y, tile.bottom(), self.eps);
        for y in walk_edge(tile.y, tile.bottom(), spans, self.eps) {
            self.push_corner(FrontierPoint::new(x, y));
        }
    }

    fn push_corner(&mut self, corner: FrontierPoint) {
        if self.inside_panel(corner) {
            self.frontier.push(corner);
        }
    }

    fn inside_panel(&self, p: FrontierPoint) -> bool {
        p.x < self.panel.right() - self.eps && p.y < self.panel.bottom() - self.eps
    }
}
