//! Block positions and axis-aligned search cubes.

use serde::{Deserialize, Serialize};

/// An integer block position in a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    /// East-west coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
    /// North-south coordinate.
    pub z: i32,
}

impl BlockPos {
    /// Create a position from its three coordinates.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The axis-aligned cube of `radius` blocks centered on this position.
    ///
    /// The cube is closed on all six faces: a radius of 5 around the origin
    /// includes both (5, 5, 5) and (-5, -5, -5). Bounds saturate at the
    /// coordinate range limits.
    pub const fn cube(self, radius: i32) -> Cube {
        Cube {
            min: Self::new(
                self.x.saturating_sub(radius),
                self.y.saturating_sub(radius),
                self.z.saturating_sub(radius),
            ),
            max: Self::new(
                self.x.saturating_add(radius),
                self.y.saturating_add(radius),
                self.z.saturating_add(radius),
            ),
        }
    }
}

impl core::fmt::Display for BlockPos {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// An inclusive axis-aligned cube, produced by [`BlockPos::cube`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cube {
    /// Inclusive minimum corner.
    pub min: BlockPos,
    /// Inclusive maximum corner.
    pub max: BlockPos,
}

impl Cube {
    /// Whether `pos` lies inside the cube, faces included.
    pub const fn contains(&self, pos: BlockPos) -> bool {
        pos.x >= self.min.x
            && pos.x <= self.max.x
            && pos.y >= self.min.y
            && pos.y <= self.max.y
            && pos.z >= self.min.z
            && pos.z <= self.max.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_is_closed_on_all_faces() {
        let cube = BlockPos::new(0, 0, 0).cube(5);
        assert!(cube.contains(BlockPos::new(5, 5, 5)));
        assert!(cube.contains(BlockPos::new(-5, -5, -5)));
        assert!(!cube.contains(BlockPos::new(6, 0, 0)));
        assert!(!cube.contains(BlockPos::new(0, -6, 0)));
    }

    #[test]
    fn cube_centered_off_origin() {
        let cube = BlockPos::new(100, 64, 200).cube(10);
        assert_eq!(cube.min, BlockPos::new(90, 54, 190));
        assert_eq!(cube.max, BlockPos::new(110, 74, 210));
    }

    #[test]
    fn cube_saturates_at_coordinate_limits() {
        let cube = BlockPos::new(i32::MIN, 0, i32::MAX).cube(1);
        assert_eq!(cube.min.x, i32::MIN);
        assert_eq!(cube.max.z, i32::MAX);
    }

    #[test]
    fn zero_radius_cube_is_the_point() {
        let pos = BlockPos::new(3, -2, 9);
        let cube = pos.cube(0);
        assert!(cube.contains(pos));
        assert!(!cube.contains(BlockPos::new(3, -2, 10)));
    }
}
