use hexworld_common::{BuildingKind, CellCoord, FloorKind, building_index};
use serde::{Deserialize, Serialize};

use crate::config::{
    ConfigError, GeneratorConfig, SmoothingMode, validate_chance, validate_dimensions,
};
use crate::generator::{GeneratedWorld, generate_with};
use crate::grid::TileGrid;
use crate::rng::RandomSource;

/// The caller-owned world: generation settings plus the two tile layers.
///
/// Settings can change between generations without touching the grids; only
/// `regenerate` replaces them, and it always replaces both wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawWorld")]
pub struct HexWorld {
    config: GeneratorConfig,
    floor: TileGrid<FloorKind>,
    buildings: TileGrid<Option<BuildingKind>>,
    /// Number of completed generations.
    generation: u64,
}

/// Unchecked wire form of a `HexWorld`.
#[derive(Deserialize)]
struct RawWorld {
    config: GeneratorConfig,
    floor: TileGrid<FloorKind>,
    buildings: TileGrid<Option<BuildingKind>>,
    generation: u64,
}

impl TryFrom<RawWorld> for HexWorld {
    type Error = WorldError;

    fn try_from(raw: RawWorld) -> Result<Self, WorldError> {
        raw.config.validate()?;
        let floor = (raw.floor.rows(), raw.floor.cols());
        let buildings = (raw.buildings.rows(), raw.buildings.cols());
        if floor != buildings {
            return Err(WorldError::LayerMismatch { floor, buildings });
        }
        Ok(Self {
            config: raw.config,
            floor: raw.floor,
            buildings: raw.buildings,
            generation: raw.generation,
        })
    }
}

/// Errors from restoring a world out of stored data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorldError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("floor layer is {floor:?} but building layer is {buildings:?}")]
    LayerMismatch {
        floor: (usize, usize),
        buildings: (usize, usize),
    },
}

impl Default for HexWorld {
    fn default() -> Self {
        Self::empty(GeneratorConfig::default())
    }
}

impl HexWorld {
    /// Create a world with empty grids. Call `regenerate` to fill them.
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::empty(config))
    }

    fn empty(config: GeneratorConfig) -> Self {
        Self {
            config,
            floor: TileGrid::new(0, 0, FloorKind::Water),
            buildings: TileGrid::new(0, 0, None),
            generation: 0,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn floor(&self) -> &TileGrid<FloorKind> {
        &self.floor
    }

    pub fn buildings(&self) -> &TileGrid<Option<BuildingKind>> {
        &self.buildings
    }

    /// Rows of the current grids (not of the pending config).
    pub fn rows(&self) -> usize {
        self.floor.rows()
    }

    /// Columns of the current grids (not of the pending config).
    pub fn cols(&self) -> usize {
        self.floor.cols()
    }

    pub fn floor_at(&self, coord: CellCoord) -> Option<FloorKind> {
        self.floor.get(coord).copied()
    }

    pub fn building_at(&self, coord: CellCoord) -> Option<BuildingKind> {
        self.buildings.get(coord).copied().flatten()
    }

    /// Set the grid size used by the next generation.
    pub fn set_dimensions(&mut self, rows: usize, cols: usize) -> Result<(), ConfigError> {
        validate_dimensions(rows, cols)?;
        self.config.rows = rows;
        self.config.cols = cols;
        Ok(())
    }

    /// Set the building probability used by the next generation.
    pub fn set_building_chance(&mut self, chance: f64) -> Result<(), ConfigError> {
        validate_chance(chance)?;
        self.config.building_chance = chance;
        Ok(())
    }

    pub fn set_smoothing(&mut self, smoothing: SmoothingMode) {
        self.config.smoothing = smoothing;
    }

    /// Discard the current grids and generate fresh ones from the config.
    pub fn regenerate<R: RandomSource>(&mut self, rng: &mut R) {
        let GeneratedWorld { floor, buildings } = generate_with(&self.config, rng);
        self.floor = floor;
        self.buildings = buildings;
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            rows = self.config.rows,
            cols = self.config.cols,
            "world regenerated"
        );
    }

    /// Every cell with its floor and building, row-major.
    pub fn cells(
        &self,
    ) -> impl Iterator<Item = (CellCoord, FloorKind, Option<BuildingKind>)> + '_ {
        self.floor
            .iter()
            .zip(self.buildings.iter())
            .map(|((coord, floor), (_, building))| (coord, *floor, *building))
    }

    /// Building layer flattened to integers, `NO_BUILDING` for empty cells.
    pub fn building_indices(&self) -> TileGrid<i32> {
        self.buildings.map(|b| building_index(*b))
    }

    /// Floor layer flattened to kind indices.
    pub fn floor_indices(&self) -> TileGrid<u8> {
        self.floor.map(|f| f.index())
    }

    /// Deterministic FNV-1a hash of the grid contents, for comparing worlds.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&mut h, &(self.rows() as u64).to_le_bytes());
        mix(&mut h, &(self.cols() as u64).to_le_bytes());
        for (_, floor, building) in self.cells() {
            mix(&mut h, &[floor.index()]);
            mix(&mut h, &building_index(building).to_le_bytes());
        }
        h
    }
}
