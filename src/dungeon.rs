//! The dungeon: rooms generated lazily and memoized by integer coordinate.

use std::collections::{HashMap, HashSet};

use glam::Vec2;
use rand::Rng;

use crate::components::Enemy;
use crate::constants::*;
use crate::grid::RoomGrid;
use crate::room_gen::RoomGenerator;

/// Integer coordinate of a room within the dungeon.
pub type RoomCoord = (i32, i32);

/// One edge of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Which edge a border cell sits on. Horizontal edges win ties, so the
    /// corners resolve the same way door-edge checks always have.
    pub fn of_border_tile(x: i32, y: i32, width: usize, height: usize) -> Option<Side> {
        if y == 0 {
            Some(Side::Top)
        } else if y == height as i32 - 1 {
            Some(Side::Bottom)
        } else if x == 0 {
            Some(Side::Left)
        } else if x == width as i32 - 1 {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// One screen's tile grid plus the enemies that live in it.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub grid: RoomGrid,
    pub enemies: Vec<Enemy>,
}

/// Lazily populated map of room coordinates to rooms.
///
/// A room is generated on first visit and never regenerated; the entry side
/// only matters for that first generation. Room dimensions are fixed for the
/// directory's lifetime, shared by every room.
pub struct RoomDirectory {
    rooms: HashMap<RoomCoord, Room>,
    visited: HashSet<RoomCoord>,
    room_width: usize,
    room_height: usize,
    extent: i32,
}

impl RoomDirectory {
    pub fn new(room_width: usize, room_height: usize, extent: i32) -> Self {
        Self {
            rooms: HashMap::new(),
            visited: HashSet::new(),
            room_width,
            room_height,
            extent,
        }
    }

    /// Fetch the room at `coord`, generating and populating it on first
    /// access. Revisits return the stored room unchanged; `entry` is ignored.
    /// The coordinate is recorded as visited either way.
    pub fn get_or_create(
        &mut self,
        coord: RoomCoord,
        entry: Option<Side>,
        rng: &mut impl Rng,
    ) -> &mut Room {
        self.visited.insert(coord);

        let (width, height) = (self.room_width, self.room_height);
        self.rooms.entry(coord).or_insert_with(|| {
            log::debug!("generating room at {coord:?}, entry {entry:?}");
            Room {
                grid: RoomGenerator::generate(entry, width, height, rng),
                enemies: spawn_enemies(width, height, rng),
            }
        })
    }

    pub fn room(&self, coord: RoomCoord) -> Option<&Room> {
        self.rooms.get(&coord)
    }

    pub fn room_mut(&mut self, coord: RoomCoord) -> Option<&mut Room> {
        self.rooms.get_mut(&coord)
    }

    /// Coordinates the player has entered, for the minimap. Append-only.
    pub fn visited(&self) -> &HashSet<RoomCoord> {
        &self.visited
    }

    /// Dungeon extent per axis; transitions clamp room coordinates into
    /// `[0, extent)`.
    pub fn extent(&self) -> i32 {
        self.extent
    }
}

/// Roll 1..=3 enemies at random interior positions.
fn spawn_enemies(width: usize, height: usize, rng: &mut impl Rng) -> Vec<Enemy> {
    let count = rng.gen_range(ENEMY_COUNT_MIN..=ENEMY_COUNT_MAX);
    (0..count)
        .map(|_| {
            let x = rng.gen_range(1..=width as i32 - 2) as f32 + 0.5;
            let y = rng.gen_range(1..=height as i32 - 2) as f32 + 0.5;
            Enemy::new(
                Vec2::new(x, y),
                rng.gen_range(ENEMY_SIZE_MIN..=ENEMY_SIZE_MAX),
                rng.gen_range(ENEMY_SPEED_MIN..=ENEMY_SPEED_MAX),
            )
        })
        .collect()
}
