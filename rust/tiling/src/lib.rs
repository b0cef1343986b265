// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panel Tiling
//!
//! Decomposes a rectangular wall or floor panel with rectangular openings
//! (windows, doors, stair voids) into non-overlapping rectangular tiles whose
//! union is exactly the panel minus the openings. A downstream exporter turns
//! each tile into a solid box.

pub mod batch;
pub mod config;
pub mod error;
pub mod frontier;
pub mod obstacles;
pub mod partition;
pub mod projector;
pub mod rect;
pub mod snap;
pub mod validate;

// Re-export nalgebra types used in poses
pub use nalgebra::{Isometry2, Vector2};

pub use batch::{decompose_panel, decompose_panels, PanelRequest};
pub use config::{TilingConfig, DEFAULT_EPSILON};
pub use error::{Error, OpeningFault, OpeningFaultKind, Result, SubItemFault, SubItemFaultKind};
pub use partition::{decompose, Partitioner};
pub use projector::{project_opening, project_openings, PanelFrame, SubItem, SubItemKind};
pub use rect::{FrontierPoint, Rect};
pub use snap::snap_openings;
pub use validate::{prepare_openings, validate_inputs, verify_partition};
