//! Game event queue for decoupled communication with the shell.
//!
//! Systems push events as they mutate state; the shell drains them after each
//! tick to drive rendering, UI, or whatever else reacts.

use crate::dungeon::{RoomCoord, Side};

/// Events the core emits during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// The player crossed a door into another room
    RoomEntered { coord: RoomCoord, via: Side },
    /// The player took damage (cooldown already applied)
    PlayerDamaged { amount: i32, remaining: i32 },
    /// Health reached zero; the session is over
    PlayerDied,
    /// An enemy was removed from its room
    EnemyKilled { x: f32, y: f32 },
    /// The player picked up an item tile
    ItemCollected { x: i32, y: i32 },
    /// A bomb was dropped and its fuse started
    BombArmed { x: i32, y: i32 },
    /// A bomb went off
    BombExploded { x: i32, y: i32, kills: usize },
}

/// Simple event queue - events are pushed during update, processed at end of frame
#[derive(Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
