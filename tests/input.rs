//! Key-to-command bindings.

use crossterm::event::KeyCode;
use speculoos::prelude::*;

use muncher::app::command_for;
use muncher::events::GameCommand;
use muncher::map::Direction;

#[test]
fn arrows_and_both_letter_layouts_steer() {
    for code in [KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('z')] {
        assert_that(&command_for(code)).is_equal_to(Some(GameCommand::Turn(Direction::Up)));
    }
    for code in [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('q')] {
        assert_that(&command_for(code)).is_equal_to(Some(GameCommand::Turn(Direction::Left)));
    }
    assert_that(&command_for(KeyCode::Down)).is_equal_to(Some(GameCommand::Turn(Direction::Down)));
    assert_that(&command_for(KeyCode::Right)).is_equal_to(Some(GameCommand::Turn(Direction::Right)));
}

#[test]
fn session_keys_map_to_commands() {
    assert_that(&command_for(KeyCode::Enter)).is_equal_to(Some(GameCommand::Start));
    assert_that(&command_for(KeyCode::Char(' '))).is_equal_to(Some(GameCommand::TogglePause));
    assert_that(&command_for(KeyCode::Char('r'))).is_equal_to(Some(GameCommand::Restart));
    assert_that(&command_for(KeyCode::Esc)).is_equal_to(Some(GameCommand::Exit));
}

#[test]
fn unbound_keys_are_ignored() {
    assert_that(&command_for(KeyCode::Char('x'))).is_none();
    assert_that(&command_for(KeyCode::Tab)).is_none();
}
