//! Enemy pursuit, contact damage, ranged attacks, and bomb blasts.

use glam::Vec2;

use crate::components::{Enemy, Player};
use crate::constants::*;
use crate::dungeon::Room;
use crate::events::{EventQueue, GameEvent};

/// Per-frame enemy update: chase the player, then test for contact.
///
/// Pursuit is a straight line toward the player's center with no
/// pathfinding; enemies walk through walls. Accepted simplification.
pub fn update_enemies(room: &mut Room, player: &mut Player, events: &mut EventQueue) {
    puffin::profile_function!();

    for enemy in &mut room.enemies {
        let to_player = player.center() - enemy.center();
        let distance = to_player.length();
        if distance > 0.0 {
            enemy.pos += to_player / distance * enemy.speed;
        }

        if overlaps(player, enemy) {
            damage_player(player, ENEMY_CONTACT_DAMAGE, events);
        }
    }

    if player.hit_cooldown > 0 {
        player.hit_cooldown -= 1;
    }
}

/// Axis-aligned overlap test between the player and enemy squares.
fn overlaps(player: &Player, enemy: &Enemy) -> bool {
    player.pos.x < enemy.pos.x + enemy.size
        && player.pos.x + player.size > enemy.pos.x
        && player.pos.y < enemy.pos.y + enemy.size
        && player.pos.y + player.size > enemy.pos.y
}

/// Apply one damage event to the player, gated by the hit cooldown.
pub fn damage_player(player: &mut Player, amount: i32, events: &mut EventQueue) {
    if player.hit_cooldown > 0 {
        return;
    }
    player.hit_cooldown = player.cooldown_frames;
    player.health.damage(amount);
    events.push(GameEvent::PlayerDamaged {
        amount,
        remaining: player.health.current,
    });
    if player.health.is_dead() {
        events.push(GameEvent::PlayerDied);
    }
}

/// Kill the enemy closest to the player, if it is within shot range.
/// Instant, no projectile travel. Returns whether anything died.
pub fn shoot_closest(room: &mut Room, player: &Player, events: &mut EventQueue) -> bool {
    let mut closest: Option<(usize, f32)> = None;
    for (index, enemy) in room.enemies.iter().enumerate() {
        let distance = player.pos.distance(enemy.pos);
        if closest.map_or(true, |(_, best)| distance < best) {
            closest = Some((index, distance));
        }
    }

    match closest {
        Some((index, distance)) if distance < player.shot_range => {
            let enemy = room.enemies.remove(index);
            events.push(GameEvent::EnemyKilled {
                x: enemy.pos.x,
                y: enemy.pos.y,
            });
            true
        }
        _ => false,
    }
}

/// Remove every enemy within the blast radius of `center`.
/// Returns the kill count; the caller clears the tile and reports the blast.
pub fn detonate(enemies: &mut Vec<Enemy>, center: Vec2, events: &mut EventQueue) -> usize {
    let before = enemies.len();
    enemies.retain(|enemy| {
        let survives = enemy.pos.distance(center) > BOMB_BLAST_RADIUS;
        if !survives {
            events.push(GameEvent::EnemyKilled {
                x: enemy.pos.x,
                y: enemy.pos.y,
            });
        }
        survives
    });
    before - enemies.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::RoomGrid;
    use crate::tile::TileKind;

    fn room_with(enemies: Vec<Enemy>) -> Room {
        Room {
            grid: RoomGrid::filled(10, 10, TileKind::Empty),
            enemies,
        }
    }

    fn test_player(x: f32, y: f32) -> Player {
        Player::new(Vec2::new(x, y), 0.6, 0.1, 5, 60, 5.0, 3)
    }

    #[test]
    fn test_enemies_chase_the_player() {
        let mut room = room_with(vec![Enemy::new(Vec2::new(8.0, 5.0), 1.0, 0.05)]);
        let mut player = test_player(2.0, 5.0);
        let mut events = EventQueue::new();

        let before = player.center().distance(room.enemies[0].center());
        update_enemies(&mut room, &mut player, &mut events);
        let after = player.center().distance(room.enemies[0].center());

        assert!(after < before);
        assert!((before - after - 0.05).abs() < 1e-4);
    }

    #[test]
    fn test_contact_damages_once_per_cooldown() {
        // Enemy sitting on top of the player, never leaving contact
        let mut room = room_with(vec![Enemy::new(Vec2::new(2.0, 2.0), 2.0, 0.0)]);
        let mut player = test_player(2.5, 2.5);
        let mut events = EventQueue::new();

        for _ in 0..30 {
            update_enemies(&mut room, &mut player, &mut events);
        }

        let hits = events
            .drain()
            .filter(|e| matches!(e, GameEvent::PlayerDamaged { .. }))
            .count();
        assert_eq!(hits, 1);
        assert_eq!(player.health.current, 4);
    }

    #[test]
    fn test_cooldown_expiry_allows_the_next_hit() {
        let mut room = room_with(vec![Enemy::new(Vec2::new(2.0, 2.0), 2.0, 0.0)]);
        let mut player = test_player(2.5, 2.5);
        player.cooldown_frames = 3;
        let mut events = EventQueue::new();

        // Frames 1..=4: hit on frame 1, cooldown 3, 2, 1, hit again on the
        // frame after it reaches zero
        for _ in 0..5 {
            update_enemies(&mut room, &mut player, &mut events);
        }

        let hits = events
            .drain()
            .filter(|e| matches!(e, GameEvent::PlayerDamaged { .. }))
            .count();
        assert_eq!(hits, 2);
    }

    #[test]
    fn test_shot_kills_only_the_closest_enemy_in_range() {
        let near = Enemy::new(Vec2::new(5.0, 8.0), 1.0, 0.02); // distance 3
        let far = Enemy::new(Vec2::new(5.0, 12.0), 1.0, 0.02); // distance 7
        let mut room = room_with(vec![far.clone(), near]);
        let player = test_player(5.0, 5.0);
        let mut events = EventQueue::new();

        assert!(shoot_closest(&mut room, &player, &mut events));

        assert_eq!(room.enemies, vec![far]);
    }

    #[test]
    fn test_shot_misses_beyond_range() {
        let mut room = room_with(vec![Enemy::new(Vec2::new(5.0, 12.0), 1.0, 0.02)]);
        let player = test_player(5.0, 5.0); // distance 7 > range 5
        let mut events = EventQueue::new();

        assert!(!shoot_closest(&mut room, &player, &mut events));
        assert_eq!(room.enemies.len(), 1);
    }

    #[test]
    fn test_shot_on_empty_room_is_a_no_op() {
        let mut room = room_with(vec![]);
        let player = test_player(5.0, 5.0);
        let mut events = EventQueue::new();

        assert!(!shoot_closest(&mut room, &player, &mut events));
        assert!(events.is_empty());
    }

    #[test]
    fn test_blast_kills_within_radius_only() {
        let close = Enemy::new(Vec2::new(4.0, 5.0), 1.0, 0.02); // distance 1
        let distant = Enemy::new(Vec2::new(4.0, 15.0), 1.0, 0.02); // distance 11
        let mut enemies = vec![close, distant.clone()];
        let mut events = EventQueue::new();

        let kills = detonate(&mut enemies, Vec2::new(4.0, 4.0), &mut events);

        assert_eq!(kills, 1);
        assert_eq!(enemies, vec![distant]);
    }

    #[test]
    fn test_player_death_is_signaled_exactly_at_zero() {
        let mut player = test_player(1.0, 1.0);
        player.health.current = 1;
        let mut events = EventQueue::new();

        damage_player(&mut player, 1, &mut events);

        let drained: Vec<_> = events.drain().collect();
        assert!(drained.contains(&GameEvent::PlayerDied));
    }
}
