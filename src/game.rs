//! This module contains the main game state and the per-tick entry point.

use std::time::Duration;

use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::query::With;
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};
use bevy_ecs::world::World;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::constants::{PLAYER_SPAWN, RAW_BOARD};
use crate::error::GameResult;
use crate::events::{GameCommand, GameEvent};
use crate::map::builder::Board;
use crate::render::Frame;
use crate::systems::components::{
    AnimationPhase, Facing, FrightenedUntil, GameRng, Ghost, GhostBundle, GlobalState, HudState, Level, Lives,
    MoveTimers, PlayerBundle, PlayerControlled, Position, Score, SpawnPoint, TickClock,
};
use crate::systems::ghost::ghost_movement_system;
use crate::systems::hud::{self, HudSnapshot};
use crate::systems::level::level_clear_system;
use crate::systems::movement::{animation_system, player_movement_system};
use crate::systems::state::{command_system, frighten_status_system, GameStage};

/// The `Game` struct is the main entry point for the game.
///
/// It owns the ECS world and the schedule that advances it. All logical
/// updates happen inside [`Game::tick`], driven by a single explicitly
/// threaded timestamp; rendering reads a [`Frame`] snapshot and never
/// mutates state.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Creates a game with an entropy-seeded ghost RNG.
    pub fn new() -> GameResult<Game> {
        Self::from_rng(SmallRng::from_os_rng())
    }

    /// Creates a game with a fixed RNG seed, for deterministic tests.
    pub fn with_seed(seed: u64) -> GameResult<Game> {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(rng: SmallRng) -> GameResult<Game> {
        let mut world = World::default();
        let mut schedule = Schedule::default();

        EventRegistry::register_event::<GameEvent>(&mut world);

        let board = Board::new(&RAW_BOARD)?;
        board.validate_spawns(
            std::iter::once(PLAYER_SPAWN).chain(Ghost::ALL.iter().map(|ghost| ghost.spawn_cell())),
        )?;
        world.insert_resource(board);

        world.insert_resource(Score::default());
        world.insert_resource(Lives::default());
        world.insert_resource(Level::default());
        world.insert_resource(TickClock::default());
        world.insert_resource(FrightenedUntil::default());
        world.insert_resource(MoveTimers::default());
        world.insert_resource(HudState::default());
        world.insert_resource(GlobalState::default());
        world.insert_resource(GameStage::default());
        world.insert_resource(GameRng(rng));

        world.spawn(PlayerBundle {
            player: PlayerControlled,
            position: Position(PLAYER_SPAWN),
            facing: Facing::default(),
            spawn: SpawnPoint(PLAYER_SPAWN),
            phase: AnimationPhase::default(),
        });
        for ghost in Ghost::ALL {
            world.spawn(GhostBundle {
                ghost,
                position: Position(ghost.spawn_cell()),
                spawn: SpawnPoint(ghost.spawn_cell()),
            });
        }

        schedule.add_systems(
            (
                command_system,
                animation_system,
                player_movement_system,
                ghost_movement_system,
                level_clear_system,
                frighten_status_system,
            )
                .chain(),
        );

        Ok(Game { world, schedule })
    }

    /// Queues an input command for the next tick.
    pub fn handle_command(&mut self, command: GameCommand) {
        let mut events = self.world.resource_mut::<Events<GameEvent>>();
        events.send(GameEvent::from(command));
    }

    /// Advances the game by one tick at the given timestamp.
    ///
    /// The timestamp is sampled once by the caller and threaded through
    /// every system; it must be monotonically non-decreasing across calls.
    pub fn tick(&mut self, now: Duration) {
        self.world.insert_resource(TickClock { now });
        self.schedule.run(&mut self.world);
        self.world.resource_mut::<Events<GameEvent>>().update();
    }

    pub fn score(&self) -> u32 {
        self.world.resource::<Score>().0
    }

    pub fn lives(&self) -> u8 {
        self.world.resource::<Lives>().0
    }

    pub fn level(&self) -> u32 {
        self.world.resource::<Level>().0
    }

    pub fn stage(&self) -> GameStage {
        *self.world.resource::<GameStage>()
    }

    pub fn should_exit(&self) -> bool {
        self.world.resource::<GlobalState>().exit
    }

    pub fn hud(&self) -> HudSnapshot {
        hud::snapshot(
            self.world.resource::<Score>(),
            self.world.resource::<Lives>(),
            self.world.resource::<Level>(),
            self.world.resource::<HudState>(),
        )
    }

    /// Captures a renderable snapshot of the current state.
    pub fn frame(&mut self) -> Frame {
        let now = self.world.resource::<TickClock>().now;
        let frightened = self.world.resource::<FrightenedUntil>().is_active(now);
        let stage = self.stage();
        let hud = self.hud();

        let board = self.world.resource::<Board>();
        let size = board.size();
        let walls = board.walls().clone();
        let pellets = board.pellets().clone();
        let power_pellets = board.power_pellets().clone();

        let mut player_query = self
            .world
            .query_filtered::<(&Position, &Facing, &AnimationPhase), With<PlayerControlled>>();
        let (position, facing, phase) = player_query
            .single(&self.world)
            .expect("player entity is spawned at construction");
        let player_cell = position.0;
        let player_direction = facing.direction;
        let player_phase = phase.0;

        let mut ghost_query = self.world.query::<(&Ghost, &Position)>();
        let ghosts = ghost_query
            .iter(&self.world)
            .map(|(ghost, position)| (*ghost, position.0))
            .collect();

        Frame {
            size,
            walls,
            pellets,
            power_pellets,
            player_cell,
            player_direction,
            player_phase,
            ghosts,
            frightened,
            stage,
            hud,
            now,
        }
    }
}
