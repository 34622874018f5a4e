use serde::{Deserialize, Serialize};

/// Tile index.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize)]
pub struct TileIndex {
    /// X index (column).
    pub x: i32,
    /// Y index (row).
    pub y: i32,
    /// Z index (zoom level).
    pub z: u32,
}

impl TileIndex {
    /// Create a new index instance.
    pub fn new(x: i32, y: i32, z: u32) -> Self {
        Self { x, y, z }
    }
}
