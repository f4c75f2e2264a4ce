use bevy_ecs::prelude::*;

use crate::map::direction::Direction;

/// A discrete input command applied to the game state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    /// Buffer a desired turn for the player; adopted when it becomes legal.
    Turn(Direction),
    TogglePause,
    Start,
    Restart,
    Exit,
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Command(GameCommand),
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}
