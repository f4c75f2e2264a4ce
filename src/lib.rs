//! Grid-chase arcade game library crate.

pub mod app;
pub mod constants;
pub mod error;
pub mod events;
pub mod game;
pub mod map;
pub mod render;
pub mod systems;
