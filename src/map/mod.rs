//! Board layout parsing, construction, and grid directions.

pub mod builder;
pub mod direction;
pub mod parser;

pub use builder::Board;
pub use direction::Direction;
