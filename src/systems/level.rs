//! Level-clear detection: regenerate the board and speed the game up.

use bevy_ecs::query::{With, Without};
use bevy_ecs::system::{Query, Res, ResMut};
use tracing::info;

use crate::map::builder::Board;
use crate::systems::collision::reset_actors;
use crate::systems::components::{
    Facing, Ghost, HudState, Level, MoveTimers, PlayerControlled, Position, SpawnPoint, StatusTag,
};
use crate::systems::state::GameStage;

/// Advances the level once both pellet sets are drained: bump the counter,
/// shrink both move intervals (clamped at their floors), regenerate the
/// board from the static layout, and return all actors to their spawns.
pub fn level_clear_system(
    stage: Res<GameStage>,
    mut board: ResMut<Board>,
    mut level: ResMut<Level>,
    mut timers: ResMut<MoveTimers>,
    mut hud: ResMut<HudState>,
    mut player: Query<(&mut Position, &mut Facing, &SpawnPoint), With<PlayerControlled>>,
    mut ghosts: Query<(&Ghost, &mut Position, &SpawnPoint), Without<PlayerControlled>>,
) {
    if *stage != GameStage::Running || !board.is_cleared() {
        return;
    }

    level.0 += 1;
    timers.speed_up();
    board.reset_pellets();
    reset_actors(&mut player, &mut ghosts);
    hud.set(StatusTag::LevelUp, format!("level {} loaded, speed increased", level.0));
    info!(
        level = level.0,
        player_interval = ?timers.player_interval,
        ghost_interval = ?timers.ghost_interval,
        "level cleared"
    );
}
