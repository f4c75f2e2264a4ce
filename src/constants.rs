//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::{IVec2, UVec2};

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the game board, in cells.
pub const BOARD_SIZE: UVec2 = UVec2::new(14, 9);

/// The cell the player occupies at session start and after losing a life.
pub const PLAYER_SPAWN: IVec2 = IVec2::new(1, 1);
/// The center of the ghost pen; the three ghosts fan out one cell to each side.
pub const GHOST_SPAWN: IVec2 = IVec2::new(7, 4);

pub const STARTING_LIVES: u8 = 3;

pub const PELLET_SCORE: u32 = 10;
pub const POWER_PELLET_SCORE: u32 = 50;
pub const GHOST_CAPTURE_SCORE: u32 = 200;

/// How long ghosts stay frightened after the player eats a power pellet.
pub const FRIGHTENED_DURATION: Duration = Duration::from_millis(7000);

/// Chance that a chasing ghost takes a uniformly random legal step instead of the greedy one.
pub const GHOST_EXPLORE_CHANCE: f64 = 0.25;

/// Elapsed time required between player steps. Shrinks per level, clamped at the floor.
pub const PLAYER_MOVE_INTERVAL: Duration = Duration::from_millis(180);
pub const PLAYER_MOVE_INTERVAL_FLOOR: Duration = Duration::from_millis(115);
pub const PLAYER_MOVE_INTERVAL_STEP: Duration = Duration::from_millis(12);

/// Elapsed time required between ghost steps. Shrinks per level, clamped at the floor.
pub const GHOST_MOVE_INTERVAL: Duration = Duration::from_millis(250);
pub const GHOST_MOVE_INTERVAL_FLOOR: Duration = Duration::from_millis(140);
pub const GHOST_MOVE_INTERVAL_STEP: Duration = Duration::from_millis(15);

/// Per-tick increment of the player's mouth animation counter.
pub const MOUTH_PHASE_STEP: f32 = 0.2;

/// An enum representing the different types of tiles on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapTile {
    /// An empty tile.
    Empty,
    /// A wall tile.
    Wall,
    /// A regular pellet.
    Pellet,
    /// A power pellet.
    PowerPellet,
}

/// The raw layout of the game board, as rows of characters.
pub const RAW_BOARD: [&str; BOARD_SIZE.y as usize] = [
    "##############",
    "#o..........o#",
    "#.####..####.#",
    "#............#",
    "#.##.####.##.#",
    "#............#",
    "#.####..####.#",
    "#o..........o#",
    "##############",
];
