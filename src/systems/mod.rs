//! Game logic systems and the components/resources they operate on.

pub mod collision;
pub mod components;
pub mod ghost;
pub mod hud;
pub mod level;
pub mod movement;
pub mod state;
