//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only
//! - Stable iteration order (actor insertion order)
//! - No rendering, input or platform dependencies
//!
//! Positions and sizes are `glam::Vec2` in tile units, `y` pointing down.

pub mod actor;
pub mod grid;
pub mod level;
pub mod parser;
pub mod rect;
pub mod tick;

pub use actor::{Actor, ActorId, ActorKind, ActorTag, CoinState, FireballKind};
pub use grid::{Grid, Obstacle};
pub use level::{Level, LevelStatus, Touch};
pub use parser::{ActorCtor, LevelParser, standard_actors};
pub use rect::Rect;
pub use tick::{RunReport, advance, run_until_finished, tick};
