//! Shared vocabulary for the hexworld crates: tile kinds and cell coordinates.

mod types;

pub use types::{BuildingKind, CellCoord, FloorKind, NO_BUILDING, building_index};
