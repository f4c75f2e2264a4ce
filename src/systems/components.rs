use std::time::Duration;

use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use glam::IVec2;
use rand::rngs::SmallRng;
use strum_macros::Display;

use crate::constants::{
    GHOST_MOVE_INTERVAL, GHOST_MOVE_INTERVAL_FLOOR, GHOST_MOVE_INTERVAL_STEP, GHOST_SPAWN, PLAYER_MOVE_INTERVAL,
    PLAYER_MOVE_INTERVAL_FLOOR, PLAYER_MOVE_INTERVAL_STEP, STARTING_LIVES,
};
use crate::map::direction::Direction;

/// A tag component for the entity controlled by the player.
#[derive(Default, Component)]
pub struct PlayerControlled;

/// The three resident ghosts.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Ghost {
    Blinky,
    Inky,
    Clyde,
}

impl Ghost {
    pub const ALL: [Ghost; 3] = [Ghost::Blinky, Ghost::Inky, Ghost::Clyde];

    /// The cell this ghost starts at and returns to after being captured.
    pub fn spawn_cell(&self) -> IVec2 {
        match self {
            Ghost::Blinky => GHOST_SPAWN,
            Ghost::Inky => GHOST_SPAWN - IVec2::X,
            Ghost::Clyde => GHOST_SPAWN + IVec2::X,
        }
    }
}

/// The grid cell an actor currently occupies.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub IVec2);

/// Current heading plus the buffered turn input, adopted when legal.
#[derive(Component, Debug, Clone, Copy)]
pub struct Facing {
    pub direction: Direction,
    pub queued: Option<Direction>,
}

impl Default for Facing {
    fn default() -> Self {
        Self {
            direction: Direction::Right,
            queued: None,
        }
    }
}

/// The cell an actor is returned to on life loss or level advance.
#[derive(Component, Debug, Clone, Copy)]
pub struct SpawnPoint(pub IVec2);

/// Mouth animation counter for the player sprite. Advances every frame,
/// even while paused.
#[derive(Component, Debug, Default)]
pub struct AnimationPhase(pub f32);

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub position: Position,
    pub facing: Facing,
    pub spawn: SpawnPoint,
    pub phase: AnimationPhase,
}

#[derive(Bundle)]
pub struct GhostBundle {
    pub ghost: Ghost,
    pub position: Position,
    pub spawn: SpawnPoint,
}

#[derive(Resource, Debug, Default)]
pub struct Score(pub u32);

#[derive(Resource, Debug)]
pub struct Lives(pub u8);

impl Default for Lives {
    fn default() -> Self {
        Self(STARTING_LIVES)
    }
}

#[derive(Resource, Debug)]
pub struct Level(pub u32);

impl Default for Level {
    fn default() -> Self {
        Self(1)
    }
}

/// The single timestamp sampled once per tick and threaded through every
/// update. Systems never re-sample a clock themselves.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct TickClock {
    pub now: Duration,
}

/// Deadline of the frightened window. Only ever moves forward; while the
/// current tick's timestamp is before it, ghosts evade and are capturable.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct FrightenedUntil(Duration);

impl FrightenedUntil {
    pub fn extend_to(&mut self, deadline: Duration) {
        self.0 = self.0.max(deadline);
    }

    pub fn is_active(&self, now: Duration) -> bool {
        now < self.0
    }

    pub fn deadline(&self) -> Duration {
        self.0
    }

    pub fn clear(&mut self) {
        self.0 = Duration::ZERO;
    }
}

/// Independent elapsed-time gates for player and ghost stepping.
#[derive(Resource, Debug, Clone, Copy)]
pub struct MoveTimers {
    pub player_interval: Duration,
    pub ghost_interval: Duration,
    pub last_player_move: Duration,
    pub last_ghost_move: Duration,
}

impl Default for MoveTimers {
    fn default() -> Self {
        Self {
            player_interval: PLAYER_MOVE_INTERVAL,
            ghost_interval: GHOST_MOVE_INTERVAL,
            last_player_move: Duration::ZERO,
            last_ghost_move: Duration::ZERO,
        }
    }
}

impl MoveTimers {
    pub fn player_due(&self, now: Duration) -> bool {
        now.saturating_sub(self.last_player_move) >= self.player_interval
    }

    pub fn ghost_due(&self, now: Duration) -> bool {
        now.saturating_sub(self.last_ghost_move) >= self.ghost_interval
    }

    /// Shrinks both intervals by their fixed per-level steps, clamped at
    /// their floors so the speed-up is bounded.
    pub fn speed_up(&mut self) {
        self.player_interval = self
            .player_interval
            .saturating_sub(PLAYER_MOVE_INTERVAL_STEP)
            .max(PLAYER_MOVE_INTERVAL_FLOOR);
        self.ghost_interval = self
            .ghost_interval
            .saturating_sub(GHOST_MOVE_INTERVAL_STEP)
            .max(GHOST_MOVE_INTERVAL_FLOOR);
    }
}

/// The injectable random source used by the ghost policy. Seeded per game so
/// tests can force deterministic branches.
#[derive(Resource)]
pub struct GameRng(pub SmallRng);

/// Free-text status tag shown in the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StatusTag {
    #[strum(to_string = "READY")]
    Ready,
    #[strum(to_string = "RUNNING")]
    Running,
    #[strum(to_string = "PAUSE")]
    Paused,
    #[strum(to_string = "POWER")]
    Power,
    #[strum(to_string = "HIT")]
    Hit,
    #[strum(to_string = "LEVEL UP")]
    LevelUp,
    #[strum(to_string = "KO")]
    GameOver,
}

/// Write-only HUD text sinks: the status tag and a one-line event log.
#[derive(Resource, Debug, Clone)]
pub struct HudState {
    pub status: StatusTag,
    pub log_line: String,
}

impl Default for HudState {
    fn default() -> Self {
        Self {
            status: StatusTag::Ready,
            log_line: "press start".to_string(),
        }
    }
}

impl HudState {
    pub fn set(&mut self, status: StatusTag, log_line: impl Into<String>) {
        self.status = status;
        self.log_line = log_line.into();
    }

    pub fn log(&mut self, log_line: impl Into<String>) {
        self.log_line = log_line.into();
    }
}

#[derive(Resource, Debug, Default)]
pub struct GlobalState {
    pub exit: bool,
}
