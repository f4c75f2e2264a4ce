//! The game stage state machine and input command handling.

use bevy_ecs::event::EventReader;
use bevy_ecs::query::{With, Without};
use bevy_ecs::resource::Resource;
use bevy_ecs::system::{Query, Res, ResMut};
use tracing::{debug, info};

use crate::events::{GameCommand, GameEvent};
use crate::map::builder::Board;
use crate::systems::collision::reset_actors;
use crate::systems::components::{
    Facing, FrightenedUntil, Ghost, GlobalState, HudState, Level, Lives, MoveTimers, PlayerControlled, Position, Score,
    SpawnPoint, StatusTag, TickClock,
};

/// A resource tracking the overall stage of a session.
///
/// `Ready` is the pre-start screen, `GameOver` is terminal until an explicit
/// restart. Logical updates (movement, collisions, level checks) only run
/// while `Running`; rendering happens in every stage.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GameStage {
    #[default]
    Ready,
    Running,
    Paused,
    GameOver,
}

/// Applies buffered input commands to the state machine and the player's
/// queued direction.
#[allow(clippy::too_many_arguments)]
pub fn command_system(
    mut events: EventReader<GameEvent>,
    mut stage: ResMut<GameStage>,
    mut global: ResMut<GlobalState>,
    mut score: ResMut<Score>,
    mut lives: ResMut<Lives>,
    mut level: ResMut<Level>,
    mut timers: ResMut<MoveTimers>,
    mut frightened: ResMut<FrightenedUntil>,
    mut board: ResMut<Board>,
    mut hud: ResMut<HudState>,
    mut player: Query<(&mut Position, &mut Facing, &SpawnPoint), With<PlayerControlled>>,
    mut ghosts: Query<(&Ghost, &mut Position, &SpawnPoint), Without<PlayerControlled>>,
) {
    for event in events.read() {
        let GameEvent::Command(command) = *event;
        match command {
            GameCommand::Turn(direction) => {
                for (_, mut facing, _) in player.iter_mut() {
                    facing.queued = Some(direction);
                }
            }
            GameCommand::TogglePause => match *stage {
                GameStage::Running => {
                    *stage = GameStage::Paused;
                    hud.set(StatusTag::Paused, "session paused");
                    debug!("paused");
                }
                GameStage::Paused => {
                    *stage = GameStage::Running;
                    hud.set(StatusTag::Running, "session resumed");
                    debug!("resumed");
                }
                // Pausing is meaningless before start and after game over.
                GameStage::Ready | GameStage::GameOver => {}
            },
            GameCommand::Start => {
                if *stage == GameStage::Ready {
                    *stage = GameStage::Running;
                    hud.set(StatusTag::Running, "session active");
                    info!("session started");
                }
            }
            GameCommand::Restart => {
                *score = Score::default();
                *lives = Lives::default();
                *level = Level::default();
                *timers = MoveTimers::default();
                frightened.clear();
                board.reset_pellets();
                reset_actors(&mut player, &mut ghosts);
                *stage = GameStage::Running;
                hud.set(StatusTag::Running, "new session started");
                info!("session restarted");
            }
            GameCommand::Exit => {
                global.exit = true;
            }
        }
    }
}

/// Drops the HUD status back from POWER to RUNNING once the frightened
/// window has elapsed.
pub fn frighten_status_system(
    stage: Res<GameStage>,
    clock: Res<TickClock>,
    frightened: Res<FrightenedUntil>,
    mut hud: ResMut<HudState>,
) {
    if *stage == GameStage::Running && hud.status == StatusTag::Power && !frightened.is_active(clock.now) {
        hud.status = StatusTag::Running;
    }
}
