//! Frame advancement: input -> movement -> fuses -> enemies.

use glam::Vec2;

use super::session::GameSession;
use crate::constants::BOMB_FUSE_SECONDS;
use crate::events::GameEvent;
use crate::input::{ActionKey, InputState};
use crate::systems::{combat, movement, MoveResult};
use crate::tile::{BombId, Tile, TileKind};

impl GameSession {
    /// Advance the session by one frame.
    ///
    /// Strict per-tick order: held movement keys (one resolver call per
    /// direction), edge-triggered actions, due bomb fuses, enemy update.
    /// After game over only the clock still advances.
    pub fn tick(&mut self, input: &mut InputState, dt: f32) {
        puffin::profile_function!();

        self.clock.advance(dt);
        if self.game_over {
            return;
        }

        let speed = self.player.speed;
        if input.is_held(ActionKey::MoveUp) {
            self.move_player(0.0, -speed);
        }
        if input.is_held(ActionKey::MoveDown) {
            self.move_player(0.0, speed);
        }
        if input.is_held(ActionKey::MoveLeft) {
            self.move_player(-speed, 0.0);
        }
        if input.is_held(ActionKey::MoveRight) {
            self.move_player(speed, 0.0);
        }

        if input.take(ActionKey::Shoot) {
            if let Some(room) = self.directory.room_mut(self.current) {
                combat::shoot_closest(room, &self.player, &mut self.events);
            }
        }
        if input.take(ActionKey::DropBomb) {
            self.drop_bomb();
        }
        if input.take(ActionKey::Inventory) {
            self.inventory_open = !self.inventory_open;
        }

        self.fire_due_fuses();

        if let Some(room) = self.directory.room_mut(self.current) {
            combat::update_enemies(room, &mut self.player, &mut self.events);
        }

        if self.player.health.is_dead() {
            self.game_over = true;
            input.clear();
        }
    }

    /// Resolve one axis of displacement, following a door transition if the
    /// resolver reports one.
    fn move_player(&mut self, dx: f32, dy: f32) {
        let Some(room) = self.directory.room_mut(self.current) else {
            return;
        };
        let result = movement::try_move(
            &mut self.player,
            room,
            dx,
            dy,
            &mut self.fuses,
            &mut self.events,
        );
        if let MoveResult::EnteredDoor(side) = result {
            movement::enter_door(
                &mut self.player,
                &mut self.directory,
                &mut self.current,
                side,
                &mut self.rng,
                &mut self.events,
            );
        }
    }

    /// Drop a bomb on the tile under the player and start its fuse.
    /// Needs a bomb in inventory and plain ground underfoot.
    fn drop_bomb(&mut self) {
        if self.player.bombs == 0 {
            return;
        }
        let tx = self.player.pos.x.floor() as i32;
        let ty = self.player.pos.y.floor() as i32;
        let Some(room) = self.directory.room_mut(self.current) else {
            return;
        };
        if room.grid.kind_at(tx, ty) != Some(TileKind::Empty) {
            return;
        }

        self.next_bomb_id += 1;
        let id = BombId(self.next_bomb_id);
        if let Some(tile) = room.grid.get_mut(tx, ty) {
            *tile = Tile::armed_bomb(id);
        }
        self.player.bombs -= 1;
        self.fuses
            .arm(self.current, tx, ty, id, self.clock.time + BOMB_FUSE_SECONDS);
        self.events.push(GameEvent::BombArmed { x: tx, y: ty });
    }

    /// Fire every due fuse. A fuse only detonates if its tile still holds
    /// the very bomb it was armed for; anything else already went off or
    /// was overwritten, and the fuse is a no-op.
    fn fire_due_fuses(&mut self) {
        while let Some(det) = self.fuses.pop_due(self.clock.time) {
            let Some(room) = self.directory.room_mut(det.room) else {
                continue;
            };
            let still_armed = room
                .grid
                .get(det.x, det.y)
                .map_or(false, |tile| {
                    tile.kind == TileKind::Bomb && tile.bomb == Some(det.bomb)
                });
            if !still_armed {
                log::debug!(
                    "stale fuse for room {:?} tile ({}, {}); skipping",
                    det.room,
                    det.x,
                    det.y
                );
                continue;
            }

            room.grid.set(det.x, det.y, TileKind::Empty);
            let kills = combat::detonate(
                &mut room.enemies,
                Vec2::new(det.x as f32, det.y as f32),
                &mut self.events,
            );
            self.events.push(GameEvent::BombExploded {
                x: det.x,
                y: det.y,
                kills,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Enemy;
    use crate::config::SessionConfig;

    fn test_session(seed: u64) -> GameSession {
        let config = SessionConfig {
            seed: Some(seed),
            ..SessionConfig::default()
        };
        GameSession::new(config)
    }

    /// Clear a patch around (5, 5) and park the player there.
    fn stage_player(session: &mut GameSession) {
        let coord = session.current;
        let room = session.directory.room_mut(coord).unwrap();
        for y in 4..=6 {
            for x in 4..=6 {
                room.grid.set(x, y, TileKind::Empty);
            }
        }
        room.enemies.clear();
        session.player.pos = Vec2::new(5.5, 5.5);
    }

    #[test]
    fn test_session_starts_with_one_visited_room() {
        let session = test_session(1);
        assert_eq!(session.visited().len(), 1);
        assert!(session.visited().contains(&session.current_coord()));
        assert!(session.current_room().is_some());
        assert!(!session.is_game_over());
    }

    #[test]
    fn test_dropped_bomb_detonates_after_the_fuse() {
        let mut session = test_session(2);
        stage_player(&mut session);
        let coord = session.current;
        session
            .directory
            .room_mut(coord)
            .unwrap()
            .enemies
            .push(Enemy::new(Vec2::new(6.5, 5.5), 0.5, 0.0));

        let mut input = InputState::new();
        input.press(ActionKey::DropBomb);
        session.tick(&mut input, 0.0);

        let room = session.directory.room(coord).unwrap();
        assert_eq!(room.grid.kind_at(5, 5), Some(TileKind::Bomb));
        assert_eq!(session.player.bombs, crate::constants::PLAYER_STARTING_BOMBS - 1);
        session.events.drain().count();

        // Not due yet
        session.tick(&mut input, BOMB_FUSE_SECONDS / 2.0);
        assert_eq!(
            session.directory.room(coord).unwrap().grid.kind_at(5, 5),
            Some(TileKind::Bomb)
        );

        // Past the fuse
        session.tick(&mut input, BOMB_FUSE_SECONDS);
        let room = session.directory.room(coord).unwrap();
        assert_eq!(room.grid.kind_at(5, 5), Some(TileKind::Empty));
        assert!(room.enemies.is_empty());
        assert!(session
            .events
            .drain()
            .any(|e| matches!(e, GameEvent::BombExploded { kills: 1, .. })));
    }

    #[test]
    fn test_contact_detonation_disarms_the_fuse() {
        let mut session = test_session(3);
        stage_player(&mut session);

        let mut input = InputState::new();
        input.press(ActionKey::DropBomb);
        session.tick(&mut input, 0.0);

        // Step off the bomb, then walk back into it before the fuse is due
        session.player.pos = Vec2::new(4.2, 5.5);
        input.press(ActionKey::MoveRight);
        for _ in 0..10 {
            session.tick(&mut input, 0.01);
        }
        input.release(ActionKey::MoveRight);

        let explosions = session
            .events
            .drain()
            .filter(|e| matches!(e, GameEvent::BombExploded { .. }))
            .count();
        assert_eq!(explosions, 1);
        assert!(session.fuses.is_empty());

        // The fuse's due time passes with nothing left to fire
        session.tick(&mut input, BOMB_FUSE_SECONDS * 2.0);
        assert!(!session
            .events
            .drain()
            .any(|e| matches!(e, GameEvent::BombExploded { .. })));
    }

    #[test]
    fn test_fuse_is_a_no_op_when_the_tile_was_overwritten() {
        let mut session = test_session(4);
        stage_player(&mut session);

        let mut input = InputState::new();
        input.press(ActionKey::DropBomb);
        session.tick(&mut input, 0.0);
        session.events.drain().count();

        // Something else claims the cell before the fuse is due
        let coord = session.current;
        session
            .directory
            .room_mut(coord)
            .unwrap()
            .grid
            .set(5, 5, TileKind::Rock);

        session.tick(&mut input, BOMB_FUSE_SECONDS * 2.0);

        assert!(!session
            .events
            .drain()
            .any(|e| matches!(e, GameEvent::BombExploded { .. })));
        assert_eq!(
            session.directory.room(coord).unwrap().grid.kind_at(5, 5),
            Some(TileKind::Rock)
        );
    }

    #[test]
    fn test_game_over_freezes_the_session() {
        let mut session = test_session(5);
        stage_player(&mut session);
        session.player.health.current = 1;
        let coord = session.current;
        session
            .directory
            .room_mut(coord)
            .unwrap()
            .enemies
            .push(Enemy::new(Vec2::new(5.5, 5.5), 1.0, 0.0));

        let mut input = InputState::new();
        session.tick(&mut input, 0.0);
        assert!(session.is_game_over());
        assert!(session.events.drain().any(|e| e == GameEvent::PlayerDied));

        let frozen = session.player.pos;
        input.press(ActionKey::MoveRight);
        session.tick(&mut input, 0.0);
        assert_eq!(session.player.pos, frozen);
    }

    #[test]
    fn test_shoot_kills_an_enemy_in_range() {
        let mut session = test_session(6);
        stage_player(&mut session);
        let coord = session.current;
        session
            .directory
            .room_mut(coord)
            .unwrap()
            .enemies
            .push(Enemy::new(Vec2::new(7.5, 5.5), 0.5, 0.0));

        let mut input = InputState::new();
        input.press(ActionKey::Shoot);
        session.tick(&mut input, 0.0);

        assert!(session.directory.room(coord).unwrap().enemies.is_empty());
        // Edge-triggered: the press was consumed
        assert!(!input.is_held(ActionKey::Shoot));
    }

    #[test]
    fn test_inventory_key_toggles() {
        let mut session = test_session(7);
        stage_player(&mut session);
        let mut input = InputState::new();

        input.press(ActionKey::Inventory);
        session.tick(&mut input, 0.0);
        assert!(session.is_inventory_open());

        input.press(ActionKey::Inventory);
        session.tick(&mut input, 0.0);
        assert!(!session.is_inventory_open());
    }
}
