use serde::{Deserialize, Serialize};

/// Largest accepted row or column count.
pub const MAX_DIMENSION: usize = 4096;

/// How the smoothing pass reads neighbour terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SmoothingMode {
    /// One grid, read and written during a single row-major sweep. A cell can
    /// observe neighbours already smoothed earlier in the same sweep.
    #[default]
    InPlace,
    /// Neighbours are read from a frozen copy of the seeded grid; results go
    /// to a separate output grid.
    Snapshot,
}

/// Parameters for one world generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub rows: usize,
    pub cols: usize,
    /// Probability in `[0, 1]` that an eligible grass tile receives a building.
    pub building_chance: f64,
    #[serde(default)]
    pub smoothing: SmoothingMode,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            building_chance: 0.1,
            smoothing: SmoothingMode::InPlace,
        }
    }
}

impl GeneratorConfig {
    pub fn new(rows: usize, cols: usize, building_chance: f64) -> Self {
        Self {
            rows,
            cols,
            building_chance,
            ..Self::default()
        }
    }

    pub fn with_smoothing(mut self, smoothing: SmoothingMode) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Reject dimensions and probabilities the generator is not meant to see.
    ///
    /// Zero-sized grids are valid and generate an empty world.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_dimensions(self.rows, self.cols)?;
        validate_chance(self.building_chance)
    }
}

pub(crate) fn validate_dimensions(rows: usize, cols: usize) -> Result<(), ConfigError> {
    if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
        return Err(ConfigError::InvalidDimensions {
            rows,
            cols,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}

pub(crate) fn validate_chance(chance: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&chance) {
        return Err(ConfigError::InvalidChance(chance));
    }
    Ok(())
}

/// Errors from validating generator input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid dimensions {rows}x{cols} exceed the limit of {max} per side")]
    InvalidDimensions { rows: usize, cols: usize, max: usize },
    #[error("building chance {0} is outside [0, 1]")]
    InvalidChance(f64),
}
