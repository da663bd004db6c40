//! Planar grid coordinates decoded from location IDs.
//!
//! Locations are packed into one integer: `x = id mod 1000`,
//! `y = id div 1000`.  Distances are plain Euclidean distances in grid units.

use crate::LocationId;

/// Width of one grid row in the packed location encoding.
pub const ROW_WIDTH: u32 = 1_000;

/// A point on the location grid.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: f32,
    pub y: f32,
}

impl GridPoint {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance_sq(self, other: GridPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn distance(self, other: GridPoint) -> f32 {
        self.distance_sq(other).sqrt()
    }
}

impl std::fmt::Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl LocationId {
    /// Decode the packed grid position.
    #[inline]
    pub fn grid_point(self) -> GridPoint {
        GridPoint {
            x: (self.0 % ROW_WIDTH) as f32,
            y: (self.0 / ROW_WIDTH) as f32,
        }
    }

    /// Pack grid cell `(x, y)`; `x` must be below [`ROW_WIDTH`].
    #[inline]
    pub fn from_grid(x: u32, y: u32) -> Option<LocationId> {
        if x >= ROW_WIDTH {
            return None;
        }
        y.checked_mul(ROW_WIDTH)
            .and_then(|row| row.checked_add(x))
            .map(LocationId)
    }
}
