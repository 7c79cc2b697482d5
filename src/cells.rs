use smallvec::SmallVec;
use std::convert::From;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;

/// North is the increasing `y` direction, east the increasing `x` direction.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

impl CompassPrimary {
    /// Every direction, in the order neighbours are enumerated.
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::West,
                                          CompassPrimary::East,
                                          CompassPrimary::North,
                                          CompassPrimary::South];

    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::West => CompassPrimary::East,
        }
    }

    /// Creates a new coordinate offset 1 cell away in this direction.
    /// Returns None if the coordinate is not representable.
    pub fn offset(self, coord: Cartesian2DCoordinate) -> Option<Cartesian2DCoordinate> {
        let (x, y) = (coord.x, coord.y);
        match self {
            CompassPrimary::North => y.checked_add(1).map(|y| Cartesian2DCoordinate::new(x, y)),
            CompassPrimary::South => y.checked_sub(1).map(|y| Cartesian2DCoordinate::new(x, y)),
            CompassPrimary::East => x.checked_add(1).map(|x| Cartesian2DCoordinate::new(x, y)),
            CompassPrimary::West => x.checked_sub(1).map(|x| Cartesian2DCoordinate::new(x, y)),
        }
    }
}

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }

    /// The direction of `other` from this coordinate, if the two are orthogonally adjacent.
    pub fn direction_to(self, other: Cartesian2DCoordinate) -> Option<CompassPrimary> {
        let dx = i64::from(other.x) - i64::from(self.x);
        let dy = i64::from(other.y) - i64::from(self.y);
        match (dx, dy) {
            (1, 0) => Some(CompassPrimary::East),
            (-1, 0) => Some(CompassPrimary::West),
            (0, 1) => Some(CompassPrimary::North),
            (0, -1) => Some(CompassPrimary::South),
            _ => None,
        }
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

/// The four walls bounding a grid cell. `true` means the wall is intact.
///
/// Adjacent cells do not share a wall: opening a passage clears one flag on each side.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct Cell {
    north: bool,
    south: bool,
    east: bool,
    west: bool,
}

impl Cell {
    pub fn walled() -> Cell {
        Cell {
            north: true,
            south: true,
            east: true,
            west: true,
        }
    }

    #[inline]
    pub fn has_wall(&self, direction: CompassPrimary) -> bool {
        match direction {
            CompassPrimary::North => self.north,
            CompassPrimary::South => self.south,
            CompassPrimary::East => self.east,
            CompassPrimary::West => self.west,
        }
    }

    #[inline]
    pub fn is_fully_walled(&self) -> bool {
        self.north && self.south && self.east && self.west
    }

    pub(crate) fn remove_wall(&mut self, direction: CompassPrimary) {
        match direction {
            CompassPrimary::North => self.north = false,
            CompassPrimary::South => self.south = false,
            CompassPrimary::East => self.east = false,
            CompassPrimary::West => self.west = false,
        }
    }
}

impl Default for Cell {
    fn default() -> Cell {
        Cell::walled()
    }
}
