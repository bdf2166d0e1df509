#![allow(dead_code)]

mod components;
mod config;
mod constants;
mod dungeon;
mod engine;
mod events;
mod grid;
mod input;
mod room_gen;
mod systems;
mod tile;
mod timers;

use std::path::Path;

use config::SessionConfig;
use engine::GameSession;
use events::GameEvent;
use input::{ActionKey, InputState};
use tile::TileKind;

/// Seconds per simulated frame (60 fps)
const FRAME_SECONDS: f32 = 1.0 / 60.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => SessionConfig::from_json_file(Path::new(&path))?,
        None => SessionConfig::default(),
    };

    let mut session = GameSession::new(config);
    let mut input = InputState::new();

    // Scripted demo session: wander, shoot, drop a bomb, wander back.
    let script: &[(&[ActionKey], usize)] = &[
        (&[ActionKey::MoveRight], 40),
        (&[ActionKey::MoveDown], 30),
        (&[ActionKey::Shoot], 1),
        (&[ActionKey::DropBomb], 1),
        (&[ActionKey::MoveLeft], 40),
        (&[], 80),
    ];

    'script: for (keys, frames) in script {
        for key in *keys {
            input.press(*key);
        }
        for _ in 0..*frames {
            session.tick(&mut input, FRAME_SECONDS);
            for event in session.events.drain() {
                report(event);
            }
            if session.is_game_over() {
                break 'script;
            }
        }
        for key in *keys {
            input.release(*key);
        }
    }

    render(&session);
    Ok(())
}

fn report(event: GameEvent) {
    match event {
        GameEvent::RoomEntered { coord, via } => {
            println!("entered room {coord:?} through the {via:?} door")
        }
        GameEvent::PlayerDamaged { amount, remaining } => {
            println!("ouch: -{amount} hp ({remaining} left)")
        }
        GameEvent::PlayerDied => println!("game over"),
        GameEvent::EnemyKilled { x, y } => println!("enemy down at ({x:.1}, {y:.1})"),
        GameEvent::ItemCollected { x, y } => println!("picked up an item at ({x}, {y})"),
        GameEvent::BombArmed { x, y } => println!("bomb armed at ({x}, {y})"),
        GameEvent::BombExploded { x, y, kills } => {
            println!("bomb at ({x}, {y}) went off, {kills} enemies caught")
        }
    }
}

/// Print the current room, its occupants, and the minimap.
fn render(session: &GameSession) {
    let Some(room) = session.current_room() else {
        return;
    };

    let mut rows: Vec<Vec<char>> = (0..room.grid.height)
        .map(|y| {
            (0..room.grid.width)
                .map(|x| glyph(room.grid.kind_at(x as i32, y as i32).unwrap_or(TileKind::Empty)))
                .collect()
        })
        .collect();

    for enemy in &room.enemies {
        plot(&mut rows, enemy.pos.x, enemy.pos.y, 'e');
    }
    let player = session.player();
    plot(&mut rows, player.pos.x, player.pos.y, '@');

    println!();
    for row in rows {
        println!("{}", row.into_iter().collect::<String>());
    }
    println!(
        "room {:?}  hp {}/{}  bombs {}  items {}{}",
        session.current_coord(),
        player.health.current,
        player.health.max,
        player.bombs,
        player.items_collected,
        if session.is_game_over() {
            "  [game over]"
        } else {
            ""
        }
    );
    print_minimap(session);
}

fn plot(rows: &mut [Vec<char>], x: f32, y: f32, glyph: char) {
    let (x, y) = (x.floor() as i32, y.floor() as i32);
    if x >= 0 && y >= 0 && (y as usize) < rows.len() && (x as usize) < rows[y as usize].len() {
        rows[y as usize][x as usize] = glyph;
    }
}

fn glyph(kind: TileKind) -> char {
    match kind {
        TileKind::Empty => ' ',
        TileKind::Wall => '#',
        TileKind::Door => '+',
        TileKind::Hole => 'O',
        TileKind::Spikes => '^',
        TileKind::Rock => '%',
        TileKind::Bomb => '*',
        TileKind::Item => '$',
    }
}

fn print_minimap(session: &GameSession) {
    let visited = session.visited();
    let min_x = visited.iter().map(|c| c.0).min().unwrap_or(0);
    let max_x = visited.iter().map(|c| c.0).max().unwrap_or(0);
    let min_y = visited.iter().map(|c| c.1).min().unwrap_or(0);
    let max_y = visited.iter().map(|c| c.1).max().unwrap_or(0);

    println!("visited rooms:");
    for y in min_y..=max_y {
        let line: String = (min_x..=max_x)
            .map(|x| {
                if (x, y) == session.current_coord() {
                    '@'
                } else if visited.contains(&(x, y)) {
                    'o'
                } else {
                    '.'
                }
            })
            .collect();
        println!("  {line}");
    }
}
