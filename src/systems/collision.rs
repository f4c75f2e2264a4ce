//! Collision resolution between the player and ghosts.

use bevy_ecs::query::{With, Without};
use bevy_ecs::system::Query;
use tracing::{debug, info};

use crate::constants::GHOST_CAPTURE_SCORE;
use crate::systems::components::{
    Facing, Ghost, HudState, Lives, PlayerControlled, Position, Score, SpawnPoint, StatusTag,
};
use crate::systems::state::GameStage;

enum Verdict {
    Captured,
    Fatal,
}

/// Returns the player and every ghost to their spawn cells.
pub fn reset_actors(
    player: &mut Query<(&mut Position, &mut Facing, &SpawnPoint), With<PlayerControlled>>,
    ghosts: &mut Query<(&Ghost, &mut Position, &SpawnPoint), Without<PlayerControlled>>,
) {
    for (mut position, mut facing, spawn) in player.iter_mut() {
        position.0 = spawn.0;
        *facing = Facing::default();
    }
    for (_, mut position, spawn) in ghosts.iter_mut() {
        position.0 = spawn.0;
    }
}

/// Checks whether any ghost shares the player's cell, and resolves the hit.
///
/// Runs after every movement phase. While frightened, the ghost is captured:
/// bonus points, ghost teleported to its spawn, player unaffected. Otherwise
/// the player loses a life and all actors reset; at zero lives the session
/// transitions to the terminal game-over stage. Only the first colliding
/// ghost in iteration order is processed per sweep.
#[allow(clippy::too_many_arguments)]
pub fn sweep(
    frightened: bool,
    score: &mut Score,
    lives: &mut Lives,
    stage: &mut GameStage,
    hud: &mut HudState,
    player: &mut Query<(&mut Position, &mut Facing, &SpawnPoint), With<PlayerControlled>>,
    ghosts: &mut Query<(&Ghost, &mut Position, &SpawnPoint), Without<PlayerControlled>>,
) {
    let player_cell = match player.single_mut() {
        Ok((position, _, _)) => position.0,
        Err(_) => return,
    };

    let mut verdict = None;
    for (ghost, mut position, spawn) in ghosts.iter_mut() {
        if position.0 != player_cell {
            continue;
        }

        if frightened {
            score.0 += GHOST_CAPTURE_SCORE;
            position.0 = spawn.0;
            hud.log(format!("{ghost} captured +{GHOST_CAPTURE_SCORE}"));
            debug!(ghost = %ghost, score = score.0, "frightened ghost captured");
            verdict = Some(Verdict::Captured);
        } else {
            verdict = Some(Verdict::Fatal);
        }
        break;
    }

    if matches!(verdict, Some(Verdict::Fatal)) {
        lives.0 -= 1;

        if lives.0 == 0 {
            *stage = GameStage::GameOver;
            hud.set(StatusTag::GameOver, "session over");
            info!(score = score.0, "game over");
        } else {
            hud.set(StatusTag::Hit, format!("hit: {} lives left", lives.0));
            debug!(lives = lives.0, "player caught, actors reset");
            reset_actors(player, ghosts);
        }
    }
}
