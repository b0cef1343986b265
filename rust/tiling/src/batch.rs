// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panel-level driver: project a panel's sub-items, then partition it.
//!
//! Independent panels share no state, so a batch is fanned out over the
//! rayon thread pool and collected per caller-supplied panel id.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::config::TilingConfig;
use crate::error::Result;
use crate::partition::Partitioner;
use crate::projector::{project_openings, PanelFrame, SubItem};
use crate::rect::Rect;

/// One panel to decompose, identified by the caller
#[derive(Debug, Clone)]
pub struct PanelRequest {
    pub id: u32,
    pub frame: PanelFrame,
    pub items: Vec<SubItem>,
}

impl PanelRequest {
    pub fn new(id: u32, frame: PanelFrame, items: Vec<SubItem>) -> Self {
        Self { id, frame, items }
    }
}

/// Decompose a single panel into tiles in its local frame
pub fn decompose_panel(
    frame: &PanelFrame,
    items: &[SubItem],
    config: &TilingConfig,
) -> Result<Vec<Rect>> {
    let openings = project_openings(frame, items, config.epsilon)?;
    Partitioner::with_config(*config).partition(&frame.panel_rect(), &openings)
}

/// Decompose many panels in parallel.
///
/// A failing panel does not affect the others; its error is returned under
/// its id. Duplicate ids keep the result of the last request with that id.
pub fn decompose_panels(
    requests: &[PanelRequest],
    config: &TilingConfig,
) -> FxHashMap<u32, Result<Vec<Rect>>> {
    let results: Vec<(u32, Result<Vec<Rect>>)> = requests
        .par_iter()
        .map(|request| {
            let result = decompose_panel(&request.frame, &request.items, config);
            if let Err(err) = &result {
                warn!(panel = request.id, %err, "panel decomposition failed");
            }
            (request.id, result)
        })
        .collect();

    let failed = results.iter().filter(|(_, r)| r.is_err()).count();
    debug!(panels = results.len(), failed, "batch decomposed");

    results.into_iter().collect()
}
