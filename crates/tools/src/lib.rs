//! Developer tooling: world inspector and tile statistics.
//!
//! # Invariants
//! - Tools only read the world.

mod inspector;

pub use inspector::{CellInfo, WorldInspector, WorldSummary};

pub fn crate_info() -> &'static str {
    "hexworld-tools v0.1.0"
}
