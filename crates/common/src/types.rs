use serde::{Deserialize, Serialize};

/// Position of a tile in an offset hex grid, addressed as (row, column).
///
/// Odd rows sit half a tile to the right of even rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    pub row: usize,
    pub col: usize,
}

impl CellCoord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this cell lies on an odd (shifted) row.
    pub fn is_odd_row(&self) -> bool {
        self.row % 2 == 1
    }
}

impl std::fmt::Display for CellCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Terrain kind of a floor tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorKind {
    Water,
    Grass,
}

impl FloorKind {
    /// Every floor kind in index order.
    pub const ALL: [FloorKind; 2] = [FloorKind::Water, FloorKind::Grass];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn glyph(self) -> char {
        match self {
            FloorKind::Water => '~',
            FloorKind::Grass => '.',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FloorKind::Water => "water",
            FloorKind::Grass => "grass",
        }
    }
}

/// Building prop that can stand on a grass tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingKind {
    Archery,
    Barracks,
    HomeA,
    HomeB,
    Market,
    Tavern,
    Mine,
}

impl BuildingKind {
    /// Every building kind in index order.
    pub const ALL: [BuildingKind; 7] = [
        BuildingKind::Archery,
        BuildingKind::Barracks,
        BuildingKind::HomeA,
        BuildingKind::HomeB,
        BuildingKind::Market,
        BuildingKind::Tavern,
        BuildingKind::Mine,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn glyph(self) -> char {
        match self {
            BuildingKind::Archery => 'A',
            BuildingKind::Barracks => 'B',
            BuildingKind::HomeA => 'h',
            BuildingKind::HomeB => 'H',
            BuildingKind::Market => 'M',
            BuildingKind::Tavern => 'T',
            BuildingKind::Mine => 'N',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BuildingKind::Archery => "archery",
            BuildingKind::Barracks => "barracks",
            BuildingKind::HomeA => "home_a",
            BuildingKind::HomeB => "home_b",
            BuildingKind::Market => "market",
            BuildingKind::Tavern => "tavern",
            BuildingKind::Mine => "mine",
        }
    }
}

/// Integer value stored for a cell without a building when the building
/// layer is flattened.
pub const NO_BUILDING: i32 = -1;

/// Flatten an optional building to its integer form (`NO_BUILDING` or a kind index).
pub fn building_index(building: Option<BuildingKind>) -> i32 {
    building.map_or(NO_BUILDING, |b| i32::from(b.index()))
}
