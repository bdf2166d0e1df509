use glam::Vec2;

/// Health component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn damage(&mut self, amount: i32) {
        self.current -= amount;
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}

/// The player. Single instance, owned by the session; position is continuous,
/// in tile units, anchored at the square's top-left corner.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    /// Edge length of the player square, in tiles
    pub size: f32,
    /// Tiles moved per held direction per frame
    pub speed: f32,
    pub health: Health,
    /// Frames until the player can take damage again; counts down to 0
    pub hit_cooldown: i32,
    /// Value the cooldown resets to after a damage event
    pub cooldown_frames: i32,
    pub shot_range: f32,
    /// Bombs left to drop
    pub bombs: u32,
    pub items_collected: u32,
}

impl Player {
    pub fn new(
        pos: Vec2,
        size: f32,
        speed: f32,
        health: i32,
        cooldown_frames: i32,
        shot_range: f32,
        bombs: u32,
    ) -> Self {
        Self {
            pos,
            size,
            speed,
            health: Health::new(health),
            hit_cooldown: 0,
            cooldown_frames,
            shot_range,
            bombs,
            items_collected: 0,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size * 0.5)
    }
}

/// A chasing enemy. Owned by its room; removed from the room's collection on
/// death and never persisted elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, size: f32, speed: f32) -> Self {
        Self { pos, size, speed }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size * 0.5)
    }
}
