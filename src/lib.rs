//! Coin Runner - A tile-based platformer simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, actors, level state, ticking)
//! - `campaign`: Level sets and the run-all-levels progression rule
//! - `settings`: Runtime configuration for the headless driver

pub mod campaign;
pub mod error;
pub mod settings;
pub mod sim;

pub use campaign::{Campaign, Progress};
pub use error::{Error, Result};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Default fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Largest step `advance` hands to a single tick
    pub const MAX_STEP: f32 = 0.05;
    /// Maximum ticks per `advance` call; frame time beyond that is dropped
    pub const MAX_SUBSTEPS: u32 = 64;

    /// Grace period after the level outcome is decided (seconds)
    pub const FINISH_DELAY: f32 = 1.0;

    /// Player box, spawned half a tile up so its feet sit on the cell floor
    pub const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.5);
    pub const PLAYER_SPAWN_OFFSET: Vec2 = Vec2::new(0.0, -0.5);

    /// Coin box and its offset inside the spawn cell
    pub const COIN_SIZE: Vec2 = Vec2::new(0.6, 0.6);
    pub const COIN_SPAWN_OFFSET: Vec2 = Vec2::new(0.2, 0.1);
    /// Bobbing phase speed (radians/s)
    pub const COIN_SPRING_SPEED: f32 = 8.0;
    /// Bobbing amplitude (tiles)
    pub const COIN_SPRING_DIST: f32 = 0.07;

    /// All fireballs occupy one full tile
    pub const FIREBALL_SIZE: Vec2 = Vec2::new(1.0, 1.0);
    pub const HORIZONTAL_FIREBALL_SPEED: Vec2 = Vec2::new(2.0, 0.0);
    pub const VERTICAL_FIREBALL_SPEED: Vec2 = Vec2::new(0.0, 2.0);
    pub const FIRE_RAIN_SPEED: Vec2 = Vec2::new(0.0, 3.0);
}
