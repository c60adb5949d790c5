//! World kernel: the hex tile grid, the neighbour-smoothing generator, and the
//! caller-owned world state.
//!
//! # Invariants
//! - Generation is pure with respect to its random draws: the same draws
//!   always produce the same grids.
//! - Grids are replaced wholesale on every generation, never patched.
//! - Every floor cell holds a kind; every building cell is empty or a kind.

pub mod config;
pub mod generator;
pub mod grid;
pub mod rng;
pub mod world;

pub use config::{ConfigError, GeneratorConfig, MAX_DIMENSION, SmoothingMode};
pub use generator::{GeneratedWorld, generate, generate_with, pick_building, surrounded_by};
pub use grid::{GridError, TileGrid, hex_neighbors};
pub use rng::{DrawSequence, RandomSource};
pub use world::{HexWorld, WorldError};
