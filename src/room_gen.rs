use crate::constants::*;
use crate::dungeon::Side;
use crate::grid::RoomGrid;
use crate::tile::TileKind;
use rand::Rng;

/// Procedural single-room generator.
///
/// Builds a walled rectangle, places one door per wanted side, then scatters
/// hazards and pickups over the interior. All randomness comes from the
/// caller's `Rng` so generation is reproducible under a seeded source.
pub struct RoomGenerator {
    grid: RoomGrid,
}

impl RoomGenerator {
    /// Generate a room grid. A door is always placed on `entry` (when given);
    /// each remaining side gets one independently at `DOOR_CHANCE`.
    pub fn generate(
        entry: Option<Side>,
        width: usize,
        height: usize,
        rng: &mut impl Rng,
    ) -> RoomGrid {
        let mut gen = Self {
            grid: RoomGrid::filled(width, height, TileKind::Empty),
        };

        gen.build_walls();
        gen.place_doors(entry, rng);

        // Later placements silently overwrite earlier ones. Accepted
        // generator policy, not collision avoidance worth having.
        gen.scatter(TileKind::Hole, rng);
        gen.scatter(TileKind::Spikes, rng);
        gen.scatter(TileKind::Rock, rng);
        gen.scatter(TileKind::Bomb, rng);
        gen.scatter(TileKind::Item, rng);

        gen.grid
    }

    fn build_walls(&mut self) {
        let width = self.grid.width as i32;
        let height = self.grid.height as i32;

        for x in 0..width {
            self.grid.set(x, 0, TileKind::Wall);
            self.grid.set(x, height - 1, TileKind::Wall);
        }
        for y in 0..height {
            self.grid.set(0, y, TileKind::Wall);
            self.grid.set(width - 1, y, TileKind::Wall);
        }
    }

    /// Pick a door cell on the given side, strictly between the corners.
    fn door_candidate(&self, side: Side, rng: &mut impl Rng) -> (i32, i32) {
        let width = self.grid.width as i32;
        let height = self.grid.height as i32;

        match side {
            Side::Top => (rng.gen_range(1..=width - 2), 0),
            Side::Bottom => (rng.gen_range(1..=width - 2), height - 1),
            Side::Left => (0, rng.gen_range(1..=height - 2)),
            Side::Right => (width - 1, rng.gen_range(1..=height - 2)),
        }
    }

    fn place_doors(&mut self, entry: Option<Side>, rng: &mut impl Rng) {
        let candidates: Vec<(Side, (i32, i32))> = Side::ALL
            .iter()
            .map(|&side| (side, self.door_candidate(side, rng)))
            .collect();

        for &(side, (x, y)) in &candidates {
            if Some(side) == entry {
                self.grid.set(x, y, TileKind::Door);
            }
        }

        for &(side, (x, y)) in &candidates {
            if Some(side) == entry {
                continue; // already forced
            }
            if rng.gen_bool(DOOR_CHANCE) {
                self.grid.set(x, y, TileKind::Door);
            }
        }
    }

    /// With `SCATTER_CHANCE`, drop 1..=5 tiles of `kind` at random interior
    /// cells, keeping `SCATTER_EDGE_MARGIN` clear of the bottom/right edges.
    fn scatter(&mut self, kind: TileKind, rng: &mut impl Rng) {
        if !rng.gen_bool(SCATTER_CHANCE) {
            return;
        }

        let max_x = self.grid.width as i32 - 1 - SCATTER_EDGE_MARGIN;
        let max_y = self.grid.height as i32 - 1 - SCATTER_EDGE_MARGIN;
        let count = rng.gen_range(SCATTER_COUNT_MIN..=SCATTER_COUNT_MAX);

        for _ in 0..count {
            let x = rng.gen_range(1..=max_x);
            let y = rng.gen_range(1..=max_y);
            self.grid.set(x, y, kind);
        }
    }
}
