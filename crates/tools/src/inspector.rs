use std::collections::BTreeMap;

use hexworld_common::{BuildingKind, CellCoord, FloorKind};
use hexworld_kernel::{HexWorld, hex_neighbors, surrounded_by};
use serde::Serialize;

/// World inspector for developer tooling.
///
/// Provides read-only queries against the world state for debugging and
/// development UI.
pub struct WorldInspector;

impl WorldInspector {
    /// Produce a summary of the world state.
    pub fn summary(world: &HexWorld) -> WorldSummary {
        let mut floor_counts: BTreeMap<FloorKind, usize> =
            FloorKind::ALL.iter().map(|k| (*k, 0)).collect();
        let mut building_counts: BTreeMap<BuildingKind, usize> = BTreeMap::new();

        for (_, floor, building) in world.cells() {
            *floor_counts.entry(floor).or_default() += 1;
            if let Some(kind) = building {
                *building_counts.entry(kind).or_default() += 1;
            }
        }

        WorldSummary {
            rows: world.rows(),
            cols: world.cols(),
            generation: world.generation(),
            total_buildings: building_counts.values().sum(),
            floor_counts,
            building_counts,
            state_hash: world.state_hash(),
        }
    }

    /// Describe one cell and its neighbourhood.
    pub fn inspect_cell(world: &HexWorld, coord: CellCoord) -> Option<CellInfo> {
        let floor = world.floor_at(coord)?;
        Some(CellInfo {
            coord,
            floor,
            building: world.building_at(coord),
            neighbors: hex_neighbors(coord, world.rows(), world.cols()),
            surrounded_by_water: surrounded_by(world.floor(), coord, FloorKind::Water),
        })
    }
}

/// Summary of world state for the inspector.
#[derive(Debug, Clone, Serialize)]
pub struct WorldSummary {
    pub rows: usize,
    pub cols: usize,
    pub generation: u64,
    pub floor_counts: BTreeMap<FloorKind, usize>,
    pub building_counts: BTreeMap<BuildingKind, usize>,
    pub total_buildings: usize,
    pub state_hash: u64,
}

impl WorldSummary {
    pub fn floor_count(&self, kind: FloorKind) -> usize {
        self.floor_counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn building_count(&self, kind: BuildingKind) -> usize {
        self.building_counts.get(&kind).copied().unwrap_or(0)
    }
}

impl std::fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "World: {}x{} generation={} water={} grass={} buildings={} hash={:#x}",
            self.rows,
            self.cols,
            self.generation,
            self.floor_count(FloorKind::Water),
            self.floor_count(FloorKind::Grass),
            self.total_buildings,
            self.state_hash,
        )?;
        for (kind, count) in &self.building_counts {
            write!(f, "\n  {:<9} {count}", kind.name())?;
        }
        Ok(())
    }
}

/// Detailed info about a single cell.
#[derive(Debug, Clone)]
pub struct CellInfo {
    pub coord: CellCoord,
    pub floor: FloorKind,
    pub building: Option<BuildingKind>,
    pub neighbors: Vec<CellCoord>,
    pub surrounded_by_water: bool,
}

impl std::fmt::Display for CellInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cell {} floor={} building={} neighbors={} surrounded_by_water={}",
            self.coord,
            self.floor.name(),
            self.building.map_or("none", |b| b.name()),
            self.neighbors.len(),
            self.surrounded_by_water,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexworld_kernel::{DrawSequence, GeneratorConfig};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn summary_empty_world() {
        let world = HexWorld::default();
        let summary = WorldInspector::summary(&world);
        assert_eq!(summary.generation, 0);
        assert_eq!(summary.floor_count(FloorKind::Water), 0);
        assert_eq!(summary.total_buildings, 0);
    }

    #[test]
    fn summary_counts_every_cell() {
        let mut world = HexWorld::new(GeneratorConfig::new(6, 7, 0.5)).unwrap();
        world.regenerate(&mut SmallRng::seed_from_u64(8));

        let summary = WorldInspector::summary(&world);
        let floors: usize = summary.floor_counts.values().sum();
        assert_eq!(floors, 42);
        assert_eq!(summary.generation, 1);
        assert_eq!(
            summary.total_buildings,
            world.cells().filter(|(_, _, b)| b.is_some()).count()
        );
    }

    #[test]
    fn summary_lists_buildings() {
        let mut world = HexWorld::new(GeneratorConfig::new(1, 2, 1.0)).unwrap();
        world.regenerate(&mut DrawSequence::new([0.9, 0.9, 0.0, 0.5, 0.0, 0.5]));

        let summary = WorldInspector::summary(&world);
        assert_eq!(summary.building_count(BuildingKind::HomeB), 2);
        assert_eq!(summary.building_count(BuildingKind::Mine), 0);
        let s = format!("{summary}");
        assert!(s.contains("grass=2"));
        assert!(s.contains("home_b"));
    }

    #[test]
    fn inspect_cell_found() {
        let mut world = HexWorld::new(GeneratorConfig::new(3, 3, 0.0)).unwrap();
        world.regenerate(&mut DrawSequence::constant(0.1));

        let info = WorldInspector::inspect_cell(&world, CellCoord::new(1, 0)).unwrap();
        assert_eq!(info.floor, FloorKind::Water);
        assert_eq!(info.neighbors.len(), 5);
        assert!(info.surrounded_by_water);
        assert!(info.to_string().contains("building=none"));
    }

    #[test]
    fn inspect_cell_not_found() {
        let world = HexWorld::default();
        assert!(WorldInspector::inspect_cell(&world, CellCoord::new(0, 0)).is_none());
    }
}
