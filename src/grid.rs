use crate::tile::{Tile, TileKind};

/// A room's tile grid, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomGrid {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<Tile>,
}

impl RoomGrid {
    pub fn filled(width: usize, height: usize, kind: TileKind) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::new(kind); width * height],
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Tile> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(&self.tiles[y as usize * self.width + x as usize])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(&mut self.tiles[y as usize * self.width + x as usize])
    }

    /// Overwrite the cell at (x, y), dropping any bomb token it carried.
    /// Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, kind: TileKind) {
        if let Some(tile) = self.get_mut(x, y) {
            *tile = Tile::new(kind);
        }
    }

    pub fn kind_at(&self, x: i32, y: i32) -> Option<TileKind> {
        self.get(x, y).map(|t| t.kind)
    }

    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.get(x, y).map(|t| t.kind.is_walkable()).unwrap_or(false)
    }
}
