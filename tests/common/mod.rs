#![allow(dead_code)]

use std::time::Duration;

use bevy_ecs::query::With;
use glam::IVec2;
use rand::RngCore;

use muncher::events::GameCommand;
use muncher::game::Game;
use muncher::map::direction::Direction;
use muncher::systems::components::{Facing, Ghost, PlayerControlled, Position};

pub fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// A game with a fixed RNG seed.
pub fn game() -> Game {
    Game::with_seed(0xC0FFEE).expect("static board layout is valid")
}

/// A game that has already received the start command.
pub fn running_game() -> Game {
    let mut game = game();
    game.handle_command(GameCommand::Start);
    game.tick(Duration::ZERO);
    game
}

pub fn set_player(game: &mut Game, cell: IVec2, direction: Direction) {
    let mut query = game
        .world
        .query_filtered::<(&mut Position, &mut Facing), With<PlayerControlled>>();
    for (mut position, mut facing) in query.iter_mut(&mut game.world) {
        position.0 = cell;
        *facing = Facing {
            direction,
            queued: None,
        };
    }
}

pub fn player_cell(game: &mut Game) -> IVec2 {
    let mut query = game.world.query_filtered::<&Position, With<PlayerControlled>>();
    query.single(&game.world).expect("player entity exists").0
}

pub fn player_facing(game: &mut Game) -> Facing {
    let mut query = game.world.query_filtered::<&Facing, With<PlayerControlled>>();
    *query.single(&game.world).expect("player entity exists")
}

pub fn set_ghost(game: &mut Game, ghost: Ghost, cell: IVec2) {
    let mut query = game.world.query::<(&Ghost, &mut Position)>();
    for (kind, mut position) in query.iter_mut(&mut game.world) {
        if *kind == ghost {
            position.0 = cell;
        }
    }
}

pub fn ghost_cell(game: &mut Game, ghost: Ghost) -> IVec2 {
    let mut query = game.world.query::<(&Ghost, &Position)>();
    query
        .iter(&game.world)
        .find(|(kind, _)| **kind == ghost)
        .map(|(_, position)| position.0)
        .expect("ghost entity exists")
}

/// An RNG that repeats one value forever, for forcing policy branches.
///
/// `u64::MAX` forces the exploration draw to come up false, so the greedy
/// branch is always taken.
pub struct ConstRng(pub u64);

impl RngCore for ConstRng {
    fn next_u32(&mut self) -> u32 {
        self.0 as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let value = self.0 as u8;
        dest.fill(value);
    }
}
