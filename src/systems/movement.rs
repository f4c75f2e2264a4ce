//! Player movement: buffered turns, single-step advance, pellet pickup.

use bevy_ecs::query::{With, Without};
use bevy_ecs::system::{Query, Res, ResMut};
use tracing::{debug, trace};

use crate::constants::{FRIGHTENED_DURATION, MOUTH_PHASE_STEP, PELLET_SCORE, POWER_PELLET_SCORE};
use crate::map::builder::Board;
use crate::systems::collision;
use crate::systems::components::{
    AnimationPhase, Facing, FrightenedUntil, Ghost, HudState, Lives, MoveTimers, PlayerControlled, Position, Score,
    SpawnPoint, StatusTag, TickClock,
};
use crate::systems::state::GameStage;

/// Steps the player once per elapsed move interval.
///
/// The buffered turn is adopted first when it leads to a passable cell, so a
/// turn can be queued before reaching an intersection. An illegal step is a
/// silent no-op that retains the current direction. Arrival consumes any
/// pellet on the destination cell; a power pellet additionally pushes the
/// frightened deadline forward. A collision sweep follows every step phase.
#[allow(clippy::too_many_arguments)]
pub fn player_movement_system(
    mut stage: ResMut<GameStage>,
    clock: Res<TickClock>,
    mut timers: ResMut<MoveTimers>,
    mut board: ResMut<Board>,
    mut score: ResMut<Score>,
    mut lives: ResMut<Lives>,
    mut frightened: ResMut<FrightenedUntil>,
    mut hud: ResMut<HudState>,
    mut player: Query<(&mut Position, &mut Facing, &SpawnPoint), With<PlayerControlled>>,
    mut ghosts: Query<(&Ghost, &mut Position, &SpawnPoint), Without<PlayerControlled>>,
) {
    if *stage != GameStage::Running {
        return;
    }

    let now = clock.now;
    if !timers.player_due(now) {
        return;
    }
    timers.last_player_move = now;

    {
        let Ok((mut position, mut facing, _)) = player.single_mut() else {
            return;
        };

        // Adopt the buffered turn once it becomes legal. The buffer is kept,
        // not cleared; re-adopting the same direction is harmless.
        if let Some(queued) = facing.queued {
            if board.is_passable(position.0 + queued.as_ivec2()) {
                facing.direction = queued;
            }
        }

        let destination = position.0 + facing.direction.as_ivec2();
        if board.is_passable(destination) {
            position.0 = destination;

            if board.eat_pellet(destination) {
                score.0 += PELLET_SCORE;
                trace!(cell = ?destination, score = score.0, "pellet eaten");
            }
            if board.eat_power_pellet(destination) {
                score.0 += POWER_PELLET_SCORE;
                frightened.extend_to(now + FRIGHTENED_DURATION);
                hud.set(
                    StatusTag::Power,
                    format!("power mode: ghosts vulnerable {}s", FRIGHTENED_DURATION.as_secs()),
                );
                debug!(cell = ?destination, deadline = ?frightened.deadline(), "power pellet eaten");
            }
        }
    }

    collision::sweep(
        frightened.is_active(now),
        &mut score,
        &mut lives,
        &mut stage,
        &mut hud,
        &mut player,
        &mut ghosts,
    );
}

/// Advances the player's mouth animation counter every frame, in every stage.
pub fn animation_system(mut phases: Query<&mut AnimationPhase>) {
    for mut phase in phases.iter_mut() {
        phase.0 += MOUTH_PHASE_STEP;
    }
}
