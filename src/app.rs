//! Terminal front-end: raw-mode input, a fixed-rate loop, frame drawing.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{ExecutableCommand, QueueableCommand};
use tracing::{info, trace, warn};

use crate::constants::LOOP_TIME;
use crate::events::GameCommand;
use crate::game::Game;
use crate::map::direction::Direction;
use crate::render;

/// Maps a key press to a game command. Arrows plus WASD and the ZQSD
/// alternate layout steer; space pauses, enter starts, `r` restarts.
pub fn command_for(code: KeyCode) -> Option<GameCommand> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('z') => Some(GameCommand::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(GameCommand::Turn(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('q') => Some(GameCommand::Turn(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(GameCommand::Turn(Direction::Right)),
        KeyCode::Char(' ') => Some(GameCommand::TogglePause),
        KeyCode::Enter => Some(GameCommand::Start),
        KeyCode::Char('r') => Some(GameCommand::Restart),
        KeyCode::Esc => Some(GameCommand::Exit),
        _ => None,
    }
}

pub struct App {
    game: Game,
    stdout: Stdout,
    started: Instant,
}

impl App {
    pub fn new() -> Result<Self> {
        let game = Game::new()?;

        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(Hide)?;
        stdout.execute(Clear(ClearType::All))?;

        Ok(Self {
            game,
            stdout,
            started: Instant::now(),
        })
    }

    fn poll_commands(&mut self) -> Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(command) = command_for(key.code) {
                    trace!(command = ?command, "input");
                    self.game.handle_command(command);
                }
            }
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let frame = self.game.frame();
        for (y, line) in render::draw(&frame).iter().enumerate() {
            self.stdout.queue(MoveTo(0, y as u16))?.queue(Print(line))?;
        }
        self.stdout.flush()?;
        Ok(())
    }

    pub fn run(&mut self) -> Result<()> {
        info!("starting game loop ({:.3}ms)", LOOP_TIME.as_secs_f32() * 1000.0);

        loop {
            let start = Instant::now();

            self.poll_commands()?;
            self.game.tick(self.started.elapsed());
            self.draw()?;

            if self.game.should_exit() {
                info!("exit requested");
                break;
            }

            if start.elapsed() < LOOP_TIME {
                let remaining = LOOP_TIME.saturating_sub(start.elapsed());
                if remaining != Duration::ZERO {
                    spin_sleep::sleep(remaining);
                }
            } else {
                warn!("game loop behind schedule by {:?}", start.elapsed() - LOOP_TIME);
            }
        }

        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.stdout.execute(Show);
        let _ = self.stdout.execute(LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
