//! Player movement and tile interaction.
//!
//! One axis of displacement is resolved per call; diagonal movement is two
//! independent calls, each re-reading the possibly-just-mutated tile.

use glam::Vec2;
use rand::Rng;

use crate::components::Player;
use crate::dungeon::{Room, RoomCoord, RoomDirectory, Side};
use crate::events::{EventQueue, GameEvent};
use crate::systems::combat;
use crate::tile::TileKind;
use crate::timers::FuseScheduler;

/// Result of a player move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Moved,
    /// Target tile blocks, or the move would leave the grid
    Blocked,
    /// The player stepped into a door on this side; the caller runs the
    /// room transition
    EnteredDoor(Side),
    /// The move was rejected but set off a bomb at the target tile
    TriggeredBomb,
    /// Moved onto an item tile and picked it up
    Collected,
}

/// Resolve a proposed displacement against the target tile.
pub fn try_move(
    player: &mut Player,
    room: &mut Room,
    dx: f32,
    dy: f32,
    fuses: &mut FuseScheduler,
    events: &mut EventQueue,
) -> MoveResult {
    let target = player.pos + Vec2::new(dx, dy);
    let (tx, ty) = (target.x.floor() as i32, target.y.floor() as i32);

    // An edge-adjacent move can floor to a cell outside the grid; treat it
    // like hitting a wall.
    let Some(tile) = room.grid.get(tx, ty) else {
        return MoveResult::Blocked;
    };
    let tile = *tile;

    match tile.kind {
        TileKind::Wall | TileKind::Rock | TileKind::Hole => MoveResult::Blocked,
        TileKind::Door => {
            match Side::of_border_tile(tx, ty, room.grid.width, room.grid.height) {
                Some(side) => MoveResult::EnteredDoor(side),
                None => {
                    // A door off the border has no edge to cross; walk through it.
                    log::warn!("door tile at ({tx}, {ty}) is not on the room border");
                    player.pos = target;
                    MoveResult::Moved
                }
            }
        }
        TileKind::Bomb => {
            room.grid.set(tx, ty, TileKind::Empty);
            if let Some(id) = tile.bomb {
                fuses.disarm(id);
            }
            let kills = combat::detonate(&mut room.enemies, Vec2::new(tx as f32, ty as f32), events);
            events.push(GameEvent::BombExploded {
                x: tx,
                y: ty,
                kills,
            });
            MoveResult::TriggeredBomb
        }
        TileKind::Spikes => {
            player.pos = target;
            combat::damage_player(player, tile.kind.damage(), events);
            MoveResult::Moved
        }
        TileKind::Item => {
            player.pos = target;
            room.grid.set(tx, ty, TileKind::Empty);
            player.items_collected += 1;
            events.push(GameEvent::ItemCollected { x: tx, y: ty });
            MoveResult::Collected
        }
        // Permissive default: EMPTY, and any kind without an interaction
        // rule, is plain walkable ground.
        kind => {
            if kind != TileKind::Empty {
                log::warn!("no interaction rule for {} at ({tx}, {ty}); allowing move", kind.name());
            }
            player.pos = target;
            MoveResult::Moved
        }
    }
}

/// Cross a door: step the room coordinate, clamp it into the dungeon extent,
/// fetch or generate the destination with the opposite side as entry, and
/// put the player one tile in from the entry edge, centered on the cross axis.
pub fn enter_door(
    player: &mut Player,
    directory: &mut RoomDirectory,
    current: &mut RoomCoord,
    crossed: Side,
    rng: &mut impl Rng,
    events: &mut EventQueue,
) {
    let (mut rx, mut ry) = *current;
    match crossed {
        Side::Top => ry -= 1,
        Side::Bottom => ry += 1,
        Side::Left => rx -= 1,
        Side::Right => rx += 1,
    }
    rx = rx.clamp(0, directory.extent() - 1);
    ry = ry.clamp(0, directory.extent() - 1);
    *current = (rx, ry);

    let entry = crossed.opposite();
    let room = directory.get_or_create(*current, Some(entry), rng);
    let width = room.grid.width as f32;
    let height = room.grid.height as f32;

    player.pos = match entry {
        Side::Top => Vec2::new(width / 2.0, 1.0),
        Side::Bottom => Vec2::new(width / 2.0, height - 2.0),
        Side::Left => Vec2::new(1.0, height / 2.0),
        Side::Right => Vec2::new(width - 2.0, height / 2.0),
    };

    log::info!("entered room {:?} via {entry:?} door", *current);
    events.push(GameEvent::RoomEntered {
        coord: *current,
        via: entry,
    });
}
