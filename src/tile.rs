use crate::constants::{BOMB_DAMAGE, SPIKE_DAMAGE};

/// Identity token carried by an armed bomb tile.
///
/// A scheduled detonation holds the same token and fires only if the tile
/// still carries it, so a bomb that was overwritten or already set off
/// cannot detonate twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BombId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Empty,
    Wall,
    Door,
    Hole,
    Spikes,
    Rock,
    Bomb,
    Item,
}

impl TileKind {
    pub fn name(&self) -> &'static str {
        match self {
            TileKind::Empty => "EMPTY",
            TileKind::Wall => "WALL",
            TileKind::Door => "DOOR",
            TileKind::Hole => "HOLE",
            TileKind::Spikes => "SPIKES",
            TileKind::Rock => "ROCK",
            TileKind::Bomb => "BOMB",
            TileKind::Item => "ITEM",
        }
    }

    /// Holes count as non-walkable and block exactly like walls.
    pub fn is_walkable(&self) -> bool {
        matches!(
            self,
            TileKind::Empty | TileKind::Door | TileKind::Spikes | TileKind::Item
        )
    }

    /// Damage dealt by interacting with this kind (0 for harmless tiles)
    pub fn damage(&self) -> i32 {
        match self {
            TileKind::Spikes => SPIKE_DAMAGE,
            TileKind::Bomb => BOMB_DAMAGE,
            _ => 0,
        }
    }

    pub fn is_collectable(&self) -> bool {
        matches!(self, TileKind::Item)
    }
}

/// One grid cell. Position is implied by the cell's index in its grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub kind: TileKind,
    /// Set only on bombs armed by the player; generator-placed bombs have none
    /// and can only be set off by contact.
    pub bomb: Option<BombId>,
}

impl Tile {
    pub fn new(kind: TileKind) -> Self {
        Self { kind, bomb: None }
    }

    pub fn armed_bomb(id: BombId) -> Self {
        Self {
            kind: TileKind::Bomb,
            bomb: Some(id),
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::new(TileKind::Empty)
    }
}
