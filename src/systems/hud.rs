//! HUD text sinks: score formatting and the per-frame HUD snapshot.

use crate::systems::components::{HudState, Level, Lives, Score};

/// Formats the score zero-padded to six digits.
pub fn format_score(value: u32) -> String {
    format!("{value:06}")
}

/// A write-only view of the HUD counters and text sinks; never read back by
/// the game logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudSnapshot {
    pub score: String,
    pub lives: u8,
    pub level: u32,
    pub status: String,
    pub log_line: String,
}

pub fn snapshot(score: &Score, lives: &Lives, level: &Level, hud: &HudState) -> HudSnapshot {
    HudSnapshot {
        score: format_score(score.0),
        lives: lives.0,
        level: level.0,
        status: hud.status.to_string(),
        log_line: hud.log_line.clone(),
    }
}
