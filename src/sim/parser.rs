//! Level plans: text rows to grid and actors
//!
//! A plan is a list of rows, one character per tile. Obstacle symbols fill the
//! grid; actor symbols spawn actors through a symbol table. Anything else is
//! empty space.

use std::collections::HashMap;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::actor::Actor;
use super::grid::{Grid, Obstacle};
use super::level::Level;

/// Builds an actor for the tile at the given cell position
pub type ActorCtor = fn(Vec2, &mut Pcg32) -> Actor;

fn spawn_player(cell: Vec2, _rng: &mut Pcg32) -> Actor {
    Actor::player(cell)
}

fn spawn_coin(cell: Vec2, rng: &mut Pcg32) -> Actor {
    Actor::coin(cell, rng)
}

fn spawn_horizontal_fireball(cell: Vec2, _rng: &mut Pcg32) -> Actor {
    Actor::horizontal_fireball(cell)
}

fn spawn_vertical_fireball(cell: Vec2, _rng: &mut Pcg32) -> Actor {
    Actor::vertical_fireball(cell)
}

fn spawn_fire_rain(cell: Vec2, _rng: &mut Pcg32) -> Actor {
    Actor::fire_rain(cell)
}

/// The standard symbol table
pub fn standard_actors() -> HashMap<char, ActorCtor> {
    let mut table: HashMap<char, ActorCtor> = HashMap::new();
    table.insert('@', spawn_player);
    table.insert('o', spawn_coin);
    table.insert('=', spawn_horizontal_fireball);
    table.insert('|', spawn_vertical_fireball);
    table.insert('v', spawn_fire_rain);
    table
}

pub struct LevelParser {
    actors: HashMap<char, ActorCtor>,
    /// Drives coin phases, so the same seed builds identical levels
    rng: Pcg32,
}

impl Default for LevelParser {
    fn default() -> Self {
        Self::new(standard_actors(), 0)
    }
}

impl LevelParser {
    pub fn new(actors: HashMap<char, ActorCtor>, seed: u64) -> Self {
        Self {
            actors,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Standard symbol table with the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(standard_actors(), seed)
    }

    pub fn actor_from_symbol(&self, symbol: char) -> Option<ActorCtor> {
        self.actors.get(&symbol).copied()
    }

    pub fn obstacle_from_symbol(symbol: char) -> Option<Obstacle> {
        match symbol {
            'x' => Some(Obstacle::Wall),
            '!' => Some(Obstacle::Lava),
            _ => None,
        }
    }

    pub fn create_grid<S: AsRef<str>>(&self, plan: &[S]) -> Grid {
        let rows = plan
            .iter()
            .map(|row| row.as_ref().chars().map(Self::obstacle_from_symbol).collect())
            .collect();
        Grid::new(rows)
    }

    /// Actors in row-major order of their symbols
    pub fn create_actors<S: AsRef<str>>(&mut self, plan: &[S]) -> Vec<Actor> {
        let mut actors = Vec::new();
        for (y, row) in plan.iter().enumerate() {
            for (x, symbol) in row.as_ref().chars().enumerate() {
                if let Some(ctor) = self.actor_from_symbol(symbol) {
                    actors.push(ctor(Vec2::new(x as f32, y as f32), &mut self.rng));
                }
            }
        }
        actors
    }

    pub fn parse<S: AsRef<str>>(&mut self, plan: &[S]) -> Level {
        let grid = self.create_grid(plan);
        let actors = self.create_actors(plan);
        log::debug!(
            "Parsed {}x{} level with {} actors",
            grid.width(),
            grid.height(),
            actors.len()
        );
        Level::new(grid, actors)
    }
}
