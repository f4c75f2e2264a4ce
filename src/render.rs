//! Terminal rendering: a pure function of a frame snapshot.
//!
//! `draw` never touches game state; the front-end decides when and where the
//! produced lines are written.

use std::collections::HashSet;
use std::time::Duration;

use crossterm::style::{Color, Stylize};
use glam::{IVec2, UVec2};

use crate::map::direction::Direction;
use crate::systems::components::Ghost;
use crate::systems::hud::HudSnapshot;
use crate::systems::state::GameStage;

/// How long each blink phase of a power pellet lasts.
const POWER_BLINK_PERIOD_MS: u128 = 160;

/// A self-contained snapshot of everything the renderer needs.
#[derive(Debug, Clone)]
pub struct Frame {
    pub size: UVec2,
    pub walls: HashSet<IVec2>,
    pub pellets: HashSet<IVec2>,
    pub power_pellets: HashSet<IVec2>,
    pub player_cell: IVec2,
    pub player_direction: Direction,
    pub player_phase: f32,
    pub ghosts: Vec<(Ghost, IVec2)>,
    pub frightened: bool,
    pub stage: GameStage,
    pub hud: HudSnapshot,
    pub now: Duration,
}

fn ghost_color(ghost: Ghost, frightened: bool) -> Color {
    if frightened {
        return Color::Rgb { r: 47, g: 115, b: 255 };
    }
    match ghost {
        Ghost::Blinky => Color::Rgb { r: 255, g: 95, b: 95 },
        Ghost::Inky => Color::Rgb { r: 87, g: 213, b: 255 },
        Ghost::Clyde => Color::Rgb { r: 255, g: 159, b: 67 },
    }
}

fn player_glyph(direction: Direction, phase: f32) -> char {
    // Mouth closes on alternating animation phases.
    if (phase as i32) % 2 != 0 {
        return 'O';
    }
    match direction {
        Direction::Up => 'v',
        Direction::Down => '^',
        Direction::Left => '>',
        Direction::Right => '<',
    }
}

fn overlay_line(stage: GameStage) -> &'static str {
    match stage {
        GameStage::Ready => "PRESS ENTER TO START",
        GameStage::Running => "",
        GameStage::Paused => "PAUSE // SPACE TO RESUME",
        GameStage::GameOver => "GAME OVER // PRESS R TO RESTART",
    }
}

/// Renders the board, actors, and HUD to styled terminal lines. Each cell is
/// two columns wide to keep the aspect ratio roughly square.
pub fn draw(frame: &Frame) -> Vec<String> {
    let blink_on = (frame.now.as_millis() / POWER_BLINK_PERIOD_MS) % 2 == 0;
    let width = frame.size.x as usize * 2;

    let mut lines = Vec::with_capacity(frame.size.y as usize + 3);
    for y in 0..frame.size.y as i32 {
        let mut line = String::new();
        for x in 0..frame.size.x as i32 {
            let cell = IVec2::new(x, y);

            if cell == frame.player_cell {
                let glyph = player_glyph(frame.player_direction, frame.player_phase);
                line.push_str(&format!("{} ", glyph).yellow().to_string());
            } else if let Some((ghost, _)) = frame.ghosts.iter().find(|(_, at)| *at == cell) {
                line.push_str(&"M ".with(ghost_color(*ghost, frame.frightened)).to_string());
            } else if frame.walls.contains(&cell) {
                line.push_str(&"██".dark_green().to_string());
            } else if frame.power_pellets.contains(&cell) {
                if blink_on {
                    line.push_str(&"o ".dark_yellow().to_string());
                } else {
                    line.push_str("  ");
                }
            } else if frame.pellets.contains(&cell) {
                line.push_str(&"· ".grey().to_string());
            } else {
                line.push_str("  ");
            }
        }
        lines.push(line);
    }

    lines.push(format!(
        "{:<width$}",
        format!(
            "SCORE {}  LIVES {}  LEVEL {}  [{}]",
            frame.hud.score, frame.hud.lives, frame.hud.level, frame.hud.status
        ),
    ));
    lines.push(format!("{:<width$}", frame.hud.log_line));
    lines.push(format!("{:<width$}", overlay_line(frame.stage)));

    lines
}
