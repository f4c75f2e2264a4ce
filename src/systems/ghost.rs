//! Ghost movement policy: greedy Manhattan steps, inverted while frightened.

use bevy_ecs::query::{With, Without};
use bevy_ecs::system::{Query, Res, ResMut};
use glam::IVec2;
use rand::seq::IndexedRandom;
use rand::Rng;
use smallvec::SmallVec;
use tracing::trace;

use crate::constants::GHOST_EXPLORE_CHANCE;
use crate::map::builder::Board;
use crate::map::direction::Direction;
use crate::systems::collision;
use crate::systems::components::{
    Facing, FrightenedUntil, GameRng, Ghost, HudState, Lives, MoveTimers, PlayerControlled, Position, Score,
    SpawnPoint, TickClock,
};
use crate::systems::state::GameStage;

fn manhattan(a: IVec2, b: IVec2) -> i32 {
    let d = (a - b).abs();
    d.x + d.y
}

/// Chooses the next one-cell step for a ghost at `origin`.
///
/// A pure function of (origin, player cell, wall set, frightened flag, one
/// random draw); ghosts hold no memory across ticks beyond their position.
/// Candidates are the four axis directions in [`Direction::DIRECTIONS`]
/// order, filtered by passability; ties break toward the earlier candidate.
/// Returns `None` when the ghost is fully walled in.
///
/// While frightened, the ghost maximizes Manhattan distance to the player.
/// Otherwise it takes a uniformly random legal step with a fixed exploration
/// chance, and the distance-minimizing step the rest of the time.
pub fn choose_direction(
    origin: IVec2,
    player: IVec2,
    board: &Board,
    frightened: bool,
    rng: &mut impl Rng,
) -> Option<Direction> {
    let options: SmallVec<[Direction; 4]> = Direction::DIRECTIONS
        .iter()
        .copied()
        .filter(|direction| board.is_passable(origin + direction.as_ivec2()))
        .collect();

    if options.is_empty() {
        return None;
    }

    let distance_to_player = |direction: Direction| manhattan(origin + direction.as_ivec2(), player);

    if frightened {
        // Evade: keep the first candidate on ties.
        let mut best = options[0];
        for &candidate in &options[1..] {
            if distance_to_player(candidate) > distance_to_player(best) {
                best = candidate;
            }
        }
        return Some(best);
    }

    if rng.random_bool(GHOST_EXPLORE_CHANCE) {
        return options.choose(rng).copied();
    }

    // min_by_key keeps the first minimal candidate, matching the fixed
    // tie-break order.
    options.iter().copied().min_by_key(|&direction| distance_to_player(direction))
}

/// Steps every ghost once per elapsed ghost move interval, then sweeps for
/// collisions.
#[allow(clippy::too_many_arguments)]
pub fn ghost_movement_system(
    mut stage: ResMut<GameStage>,
    clock: Res<TickClock>,
    mut timers: ResMut<MoveTimers>,
    board: Res<Board>,
    frightened: Res<FrightenedUntil>,
    mut rng: ResMut<GameRng>,
    mut score: ResMut<Score>,
    mut lives: ResMut<Lives>,
    mut hud: ResMut<HudState>,
    mut player: Query<(&mut Position, &mut Facing, &SpawnPoint), With<PlayerControlled>>,
    mut ghosts: Query<(&Ghost, &mut Position, &SpawnPoint), Without<PlayerControlled>>,
) {
    if *stage != GameStage::Running {
        return;
    }

    let now = clock.now;
    if !timers.ghost_due(now) {
        return;
    }
    timers.last_ghost_move = now;

    let player_cell = match player.single_mut() {
        Ok((position, _, _)) => position.0,
        Err(_) => return,
    };

    let frightened_now = frightened.is_active(now);
    for (ghost, mut position, _) in ghosts.iter_mut() {
        match choose_direction(position.0, player_cell, &board, frightened_now, &mut rng.0) {
            Some(direction) => {
                position.0 += direction.as_ivec2();
                trace!(ghost = %ghost, cell = ?position.0, direction = %direction, frightened = frightened_now, "ghost stepped");
            }
            None => {
                trace!(ghost = %ghost, cell = ?position.0, "ghost walled in, holding position");
            }
        }
    }

    collision::sweep(
        frightened_now,
        &mut score,
        &mut lives,
        &mut stage,
        &mut hud,
        &mut player,
        &mut ghosts,
    );
}
