//! Game constants organized by category.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.

// =============================================================================
// ROOMS & DUNGEON
// =============================================================================

/// Default room width in tiles
pub const DEFAULT_ROOM_WIDTH: usize = 15;
/// Default room height in tiles
pub const DEFAULT_ROOM_HEIGHT: usize = 15;
/// Smallest room dimension the generator can scatter hazards into
pub const MIN_ROOM_DIM: usize = 5;
/// Dungeon extent per axis; room coordinates are clamped into [0, extent)
pub const DEFAULT_DUNGEON_EXTENT: i32 = 20;

// =============================================================================
// ROOM GENERATION
// =============================================================================

/// Chance for each non-entry side to get a door
pub const DOOR_CHANCE: f64 = 0.5;
/// Chance for each scatterable kind (holes, spikes, rocks, bombs, items) to appear at all
pub const SCATTER_CHANCE: f64 = 0.5;
/// Minimum placements per scattered kind
pub const SCATTER_COUNT_MIN: u32 = 1;
/// Maximum placements per scattered kind
pub const SCATTER_COUNT_MAX: u32 = 5;
/// Scatter keeps this many cells clear of the bottom/right edges
pub const SCATTER_EDGE_MARGIN: i32 = 3;

// =============================================================================
// PLAYER
// =============================================================================

/// Player's default starting health
pub const PLAYER_STARTING_HEALTH: i32 = 5;
/// Player square edge length in tiles
pub const PLAYER_SIZE: f32 = 0.6;
/// Distance moved per held direction per frame, in tiles
pub const PLAYER_SPEED: f32 = 0.1;
/// Frames between consecutive damage events applied to the player
pub const PLAYER_HIT_COOLDOWN_FRAMES: i32 = 60;
/// Maximum distance at which a shot can kill, in tiles
pub const PLAYER_SHOT_RANGE: f32 = 5.0;
/// Bombs in the player's starting inventory
pub const PLAYER_STARTING_BOMBS: u32 = 3;

// =============================================================================
// ENEMIES
// =============================================================================

/// Minimum enemies spawned per room
pub const ENEMY_COUNT_MIN: u32 = 1;
/// Maximum enemies spawned per room
pub const ENEMY_COUNT_MAX: u32 = 3;
/// Smallest enemy square edge length
pub const ENEMY_SIZE_MIN: f32 = 0.35;
/// Largest enemy square edge length
pub const ENEMY_SIZE_MAX: f32 = 3.5;
/// Slowest enemy chase speed, tiles per frame
pub const ENEMY_SPEED_MIN: f32 = 0.01;
/// Fastest enemy chase speed, tiles per frame
pub const ENEMY_SPEED_MAX: f32 = 0.05;
/// Damage per enemy contact event
pub const ENEMY_CONTACT_DAMAGE: i32 = 1;

// =============================================================================
// TILES
// =============================================================================

/// Damage dealt by stepping onto spikes
pub const SPIKE_DAMAGE: i32 = 1;
/// Damage listed for bomb tiles in the catalog
pub const BOMB_DAMAGE: i32 = 2;
/// Enemies within this many tiles of a detonating bomb are killed
pub const BOMB_BLAST_RADIUS: f32 = 5.0;
/// Seconds between arming a bomb and its detonation
pub const BOMB_FUSE_SECONDS: f32 = 1.0;
