//! Collision outcomes: lost lives, frightened captures, and game over.

mod common;

use common::{ghost_cell, ms, player_cell, running_game, set_ghost, set_player};
use glam::IVec2;
use pretty_assertions::assert_eq;

use muncher::constants::{
    GHOST_CAPTURE_SCORE, GHOST_SPAWN, PELLET_SCORE, PLAYER_SPAWN, STARTING_LIVES,
};
use muncher::events::GameCommand;
use muncher::map::{Board, Direction};
use muncher::systems::components::{FrightenedUntil, Ghost, Lives};
use muncher::systems::state::GameStage;

#[test]
fn walking_into_a_ghost_costs_a_life_and_resets_actors() {
    let mut game = running_game();
    set_player(&mut game, IVec2::new(2, 3), Direction::Right);
    set_ghost(&mut game, Ghost::Blinky, IVec2::new(3, 3));

    game.tick(ms(200));

    assert_eq!(game.lives(), STARTING_LIVES - 1);
    assert_eq!(game.hud().status, "HIT");
    assert_eq!(player_cell(&mut game), PLAYER_SPAWN);
    for ghost in Ghost::ALL {
        assert_eq!(ghost_cell(&mut game, ghost), ghost.spawn_cell());
    }
    // The pellet under the collision cell was still eaten on arrival.
    assert_eq!(game.score(), PELLET_SCORE);
}

#[test]
fn frightened_ghost_is_captured_in_place() {
    let mut game = running_game();
    game.world
        .resource_mut::<FrightenedUntil>()
        .extend_to(ms(10_000));
    set_player(&mut game, IVec2::new(2, 3), Direction::Right);
    set_ghost(&mut game, Ghost::Blinky, IVec2::new(3, 3));

    game.tick(ms(200));

    assert_eq!(game.score(), PELLET_SCORE + GHOST_CAPTURE_SCORE);
    assert_eq!(game.lives(), STARTING_LIVES);
    assert_eq!(player_cell(&mut game), IVec2::new(3, 3));
    assert_eq!(ghost_cell(&mut game, Ghost::Blinky), GHOST_SPAWN);
    assert_eq!(game.stage(), GameStage::Running);
}

/// Two ghosts on the player's cell still resolve as a single capture.
#[test]
fn only_the_first_overlapping_ghost_is_resolved() {
    let mut game = running_game();
    game.world
        .resource_mut::<FrightenedUntil>()
        .extend_to(ms(10_000));
    set_player(&mut game, IVec2::new(2, 3), Direction::Right);
    set_ghost(&mut game, Ghost::Blinky, IVec2::new(3, 3));
    set_ghost(&mut game, Ghost::Inky, IVec2::new(3, 3));

    game.tick(ms(200));

    assert_eq!(game.score(), PELLET_SCORE + GHOST_CAPTURE_SCORE);
    let parked = Ghost::ALL
        .iter()
        .filter(|ghost| ghost_cell(&mut game, **ghost) == IVec2::new(3, 3))
        .count();
    assert_eq!(parked, 1, "one overlapping ghost stays put until next sweep");
}

#[test]
fn losing_the_last_life_ends_the_session() {
    let mut game = running_game();
    game.world.resource_mut::<Lives>().0 = 1;
    set_player(&mut game, IVec2::new(2, 3), Direction::Right);
    set_ghost(&mut game, Ghost::Blinky, IVec2::new(3, 3));

    game.tick(ms(200));

    assert_eq!(game.lives(), 0);
    assert_eq!(game.stage(), GameStage::GameOver);
    assert_eq!(game.hud().status, "KO");
    // No actor reset on the terminal stage.
    assert_eq!(player_cell(&mut game), IVec2::new(3, 3));
}

#[test]
fn game_over_ignores_everything_but_restart() {
    let mut game = running_game();
    game.world.resource_mut::<Lives>().0 = 1;
    set_player(&mut game, IVec2::new(2, 3), Direction::Right);
    set_ghost(&mut game, Ghost::Blinky, IVec2::new(3, 3));
    game.tick(ms(200));
    assert_eq!(game.stage(), GameStage::GameOver);
    let frozen_score = game.score();

    game.tick(ms(1000));
    assert_eq!(player_cell(&mut game), IVec2::new(3, 3));
    assert_eq!(game.score(), frozen_score);

    game.handle_command(GameCommand::TogglePause);
    game.tick(ms(1200));
    assert_eq!(game.stage(), GameStage::GameOver);

    game.handle_command(GameCommand::Start);
    game.tick(ms(1400));
    assert_eq!(game.stage(), GameStage::GameOver);
}

#[test]
fn restart_rebuilds_the_session() {
    let mut game = running_game();
    game.world.resource_mut::<Lives>().0 = 1;
    set_player(&mut game, IVec2::new(2, 3), Direction::Right);
    set_ghost(&mut game, Ghost::Blinky, IVec2::new(3, 3));
    game.tick(ms(200));
    assert_eq!(game.stage(), GameStage::GameOver);

    game.handle_command(GameCommand::Restart);
    game.tick(ms(1600));

    assert_eq!(game.stage(), GameStage::Running);
    assert_eq!(game.lives(), STARTING_LIVES);
    assert_eq!(game.level(), 1);
    // Play resumes on the same tick: the respawned player immediately steps
    // right off its spawn and eats the pellet there.
    assert_eq!(player_cell(&mut game), PLAYER_SPAWN + IVec2::X);
    assert_eq!(game.score(), PELLET_SCORE);

    let pristine = Board::new(&muncher::constants::RAW_BOARD).expect("static board layout is valid");
    let board = game.world.resource::<Board>();
    assert_eq!(board.pellets().len(), pristine.pellets().len() - 1);
    assert_eq!(board.power_pellets().len(), pristine.power_pellets().len());
}
