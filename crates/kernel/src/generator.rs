use hexworld_common::{BuildingKind, CellCoord, FloorKind};

use crate::config::{GeneratorConfig, SmoothingMode};
use crate::grid::{TileGrid, hex_neighbors};
use crate::rng::RandomSource;

/// The two parallel layers produced by one generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedWorld {
    pub floor: TileGrid<FloorKind>,
    pub buildings: TileGrid<Option<BuildingKind>>,
}

/// Generate a world with the default (in-place) smoothing.
///
/// Inputs are not validated; zero rows or columns produce empty grids, and so
/// does a size whose cell count overflows `usize`. Callers bound the size with
/// `GeneratorConfig::validate` (at most `MAX_DIMENSION` per side).
pub fn generate<R: RandomSource>(
    rows: usize,
    cols: usize,
    building_chance: f64,
    rng: &mut R,
) -> GeneratedWorld {
    run(rows, cols, building_chance, SmoothingMode::default(), rng)
}

/// Generate a world from a full configuration.
pub fn generate_with<R: RandomSource>(config: &GeneratorConfig, rng: &mut R) -> GeneratedWorld {
    run(
        config.rows,
        config.cols,
        config.building_chance,
        config.smoothing,
        rng,
    )
}

/// Whether every in-grid hex neighbour of `coord` holds `kind`.
///
/// Off-grid neighbours are skipped, so a cell with no neighbours at all is
/// surrounded by every kind.
pub fn surrounded_by(floor: &TileGrid<FloorKind>, coord: CellCoord, kind: FloorKind) -> bool {
    hex_neighbors(coord, floor.rows(), floor.cols())
        .into_iter()
        .all(|n| floor.get(n) == Some(&kind))
}

/// Pick a building kind from one draw in `[0, 1)`.
///
/// Rounds to the nearest index, so the first and last kinds get half the
/// weight of the others.
pub fn pick_building(draw: f64) -> BuildingKind {
    let top = BuildingKind::COUNT - 1;
    let index = (draw * top as f64).round() as usize;
    BuildingKind::ALL[index.min(top)]
}

fn run<R: RandomSource>(
    rows: usize,
    cols: usize,
    building_chance: f64,
    smoothing: SmoothingMode,
    rng: &mut R,
) -> GeneratedWorld {
    let _span = tracing::info_span!("generate", rows, cols).entered();

    let mut floor = seed_floor(rows, cols, rng);
    tracing::debug!(grass = count(&floor, FloorKind::Grass), "seed pass done");

    smooth(&mut floor, smoothing);
    tracing::debug!(
        grass = count(&floor, FloorKind::Grass),
        ?smoothing,
        "smoothing pass done"
    );

    let buildings = place_buildings(&floor, building_chance, rng);
    let placed = buildings.iter().filter(|(_, b)| b.is_some()).count();
    tracing::debug!(placed, building_chance, "placement pass done");

    tracing::trace!(
        water = count(&floor, FloorKind::Water),
        grass = count(&floor, FloorKind::Grass),
        placed,
        "generated world"
    );

    GeneratedWorld { floor, buildings }
}

fn seed_floor<R: RandomSource>(rows: usize, cols: usize, rng: &mut R) -> TileGrid<FloorKind> {
    TileGrid::from_fn(rows, cols, |_| {
        if rng.next_unit().round() >= 1.0 {
            FloorKind::Grass
        } else {
            FloorKind::Water
        }
    })
}

fn smooth(floor: &mut TileGrid<FloorKind>, mode: SmoothingMode) {
    let snapshot = match mode {
        SmoothingMode::InPlace => None,
        SmoothingMode::Snapshot => Some(floor.clone()),
    };

    for row in 0..floor.rows() {
        for col in 0..floor.cols() {
            let coord = CellCoord::new(row, col);
            // Water is checked first, so Grass wins when both hold.
            for kind in FloorKind::ALL {
                let surrounded = match &snapshot {
                    Some(frozen) => surrounded_by(frozen, coord, kind),
                    None => surrounded_by(floor, coord, kind),
                };
                if surrounded {
                    floor.set(coord, kind);
                }
            }
        }
    }
}

fn place_buildings<R: RandomSource>(
    floor: &TileGrid<FloorKind>,
    building_chance: f64,
    rng: &mut R,
) -> TileGrid<Option<BuildingKind>> {
    let mut buildings = TileGrid::new(floor.rows(), floor.cols(), None);

    for (coord, kind) in floor.iter() {
        if *kind != FloorKind::Grass || surrounded_by(floor, coord, FloorKind::Water) {
            continue;
        }
        if rng.next_unit() < building_chance {
            buildings.set(coord, Some(pick_building(rng.next_unit())));
        }
    }

    buildings
}

fn count(floor: &TileGrid<FloorKind>, kind: FloorKind) -> usize {
    floor.iter().filter(|(_, k)| **k == kind).count()
}
