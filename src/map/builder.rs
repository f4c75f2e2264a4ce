//! Board construction: a parsed tile layout becomes three disjoint cell sets.

use std::collections::HashSet;

use bevy_ecs::resource::Resource;
use glam::{IVec2, UVec2};

use crate::constants::MapTile;
use crate::error::{BoardError, GameResult};
use crate::map::parser::BoardParser;

/// The static tile grid plus the mutable pellet bookkeeping.
///
/// Walls never change for the lifetime of the board; the pellet sets shrink
/// as the player eats and are re-derived wholesale on level advance or
/// restart via [`Board::reset_pellets`].
#[derive(Resource, Debug, Clone)]
pub struct Board {
    size: UVec2,
    tiles: Vec<Vec<MapTile>>,
    walls: HashSet<IVec2>,
    pellets: HashSet<IVec2>,
    power_pellets: HashSet<IVec2>,
}

impl Board {
    /// Builds a board from a raw text layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout fails to parse (unknown character,
    /// ragged rows, no rows at all).
    pub fn new(rows: &[&str]) -> GameResult<Board> {
        let parsed = BoardParser::parse_rows(rows)?;

        let mut board = Board {
            size: UVec2::new(parsed.width as u32, parsed.height as u32),
            tiles: parsed.tiles,
            walls: HashSet::new(),
            pellets: HashSet::new(),
            power_pellets: HashSet::new(),
        };
        board.reset_pellets();
        Ok(board)
    }

    /// Re-derives the wall and pellet sets from the static tile layout.
    ///
    /// Idempotent; called on construction, level advance, and restart.
    pub fn reset_pellets(&mut self) {
        self.walls.clear();
        self.pellets.clear();
        self.power_pellets.clear();

        for (y, row) in self.tiles.iter().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                let cell = IVec2::new(x as i32, y as i32);
                match tile {
                    MapTile::Wall => {
                        self.walls.insert(cell);
                    }
                    MapTile::Pellet => {
                        self.pellets.insert(cell);
                    }
                    MapTile::PowerPellet => {
                        self.power_pellets.insert(cell);
                    }
                    MapTile::Empty => {}
                }
            }
        }
    }

    /// Checks that every given spawn cell lies inside the board.
    ///
    /// Spawn cells may legally sit on wall tiles (the ghost pen is walled);
    /// only out-of-range cells are rejected.
    pub fn validate_spawns(&self, cells: impl IntoIterator<Item = IVec2>) -> Result<(), BoardError> {
        for cell in cells {
            if !self.in_bounds(cell) {
                return Err(BoardError::SpawnOutOfBounds(cell));
            }
        }
        Ok(())
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn in_bounds(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.size.x && (cell.y as u32) < self.size.y
    }

    /// The single source of truth for movement legality: a step onto `cell`
    /// is legal iff the cell is in-bounds and not a wall.
    pub fn is_passable(&self, cell: IVec2) -> bool {
        self.in_bounds(cell) && !self.walls.contains(&cell)
    }

    /// Removes the pellet at `cell`, reporting whether one was present.
    pub fn eat_pellet(&mut self, cell: IVec2) -> bool {
        self.pellets.remove(&cell)
    }

    /// Removes the power pellet at `cell`, reporting whether one was present.
    pub fn eat_power_pellet(&mut self, cell: IVec2) -> bool {
        self.power_pellets.remove(&cell)
    }

    /// True once both pellet sets are empty, i.e. the level is cleared.
    pub fn is_cleared(&self) -> bool {
        self.pellets.is_empty() && self.power_pellets.is_empty()
    }

    pub fn walls(&self) -> &HashSet<IVec2> {
        &self.walls
    }

    pub fn pellets(&self) -> &HashSet<IVec2> {
        &self.pellets
    }

    pub fn power_pellets(&self) -> &HashSet<IVec2> {
        &self.power_pellets
    }
}
