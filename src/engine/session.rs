//! Core session state - owns the simulation data.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

use crate::components::Player;
use crate::config::SessionConfig;
use crate::dungeon::{Room, RoomCoord, RoomDirectory, Side};
use crate::events::EventQueue;
use crate::timers::{FuseScheduler, GameClock};

/// One game session: the dungeon, the player, and everything that advances
/// per frame. No global state; the shell owns exactly one of these.
pub struct GameSession {
    pub(super) directory: RoomDirectory,
    pub(super) current: RoomCoord,
    pub(super) player: Player,
    pub(super) clock: GameClock,
    pub(super) fuses: FuseScheduler,
    pub(super) rng: StdRng,
    pub(super) next_bomb_id: u64,
    pub(super) game_over: bool,
    pub(super) inventory_open: bool,

    /// Event queue drained by the shell after each tick
    pub events: EventQueue,
}

impl GameSession {
    /// Create a session: generate the starting room at the dungeon center
    /// with a forced left entry door and put the player in the middle of it.
    pub fn new(config: SessionConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut directory =
            RoomDirectory::new(config.room_width, config.room_height, config.dungeon_extent);
        let start = (config.dungeon_extent / 2, config.dungeon_extent / 2);
        directory.get_or_create(start, Some(Side::Left), &mut rng);

        let spawn = Vec2::new(
            config.room_width as f32 / 2.0,
            config.room_height as f32 / 2.0,
        );
        let player = Player::new(
            spawn,
            config.player.size,
            config.player.speed,
            config.player.health,
            config.player.hit_cooldown,
            config.player.shot_range,
            config.player.bombs,
        );

        Self {
            directory,
            current: start,
            player,
            clock: GameClock::new(),
            fuses: FuseScheduler::new(),
            rng,
            next_bomb_id: 0,
            game_over: false,
            inventory_open: false,
            events: EventQueue::new(),
        }
    }

    // -------------------------------------------------------------------
    // Read-only render surface
    // -------------------------------------------------------------------

    pub fn current_coord(&self) -> RoomCoord {
        self.current
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.directory.room(self.current)
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Room coordinates the player has entered, for the minimap.
    pub fn visited(&self) -> &HashSet<RoomCoord> {
        self.directory.visited()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_inventory_open(&self) -> bool {
        self.inventory_open
    }
}
