//! Actors: the moving, sized boxes that live in a level
//!
//! Every actor is one `Actor` value whose `kind` carries the variant-specific
//! state. Level logic dispatches on the capability tag (`ActorTag`), never on
//! the concrete variant.

use std::sync::atomic::{AtomicU32, Ordering};

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::rect::Rect;
use crate::consts::*;
use crate::error::{Error, Result};

static NEXT_ACTOR_ID: AtomicU32 = AtomicU32::new(1);

/// Stable actor identity, unique among actors constructed in this process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u32);

impl ActorId {
    /// Allocate an ID no other constructed actor has
    pub fn fresh() -> Self {
        ActorId(NEXT_ACTOR_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Capability tag used for level dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorTag {
    Actor,
    Player,
    Coin,
    Fireball,
}

impl ActorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorTag::Actor => "actor",
            ActorTag::Player => "player",
            ActorTag::Coin => "coin",
            ActorTag::Fireball => "fireball",
        }
    }
}

/// Bobbing state of a coin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoinState {
    /// Resting position the bob oscillates around
    pub start_pos: Vec2,
    /// Current phase (radians)
    pub spring: f32,
}

impl CoinState {
    pub fn update_spring(&mut self, dt: f32) {
        self.spring += COIN_SPRING_SPEED * dt;
    }

    /// Vertical offset from the resting position
    pub fn spring_vector(&self) -> Vec2 {
        Vec2::new(0.0, self.spring.sin() * COIN_SPRING_DIST)
    }
}

/// Fireball movement patterns
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FireballKind {
    /// Bounces back and forth along x
    Horizontal,
    /// Bounces up and down
    Vertical,
    /// Falls and respawns at `start_pos` when it hits something
    Rain { start_pos: Vec2 },
    /// Free-moving fireball with an arbitrary velocity
    Free,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActorKind {
    /// Plain box with no behavior
    Generic,
    Player,
    Coin(CoinState),
    Fireball(FireballKind),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Allocated at construction; clones share it and count as the same actor
    pub id: ActorId,
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height. Must stay positive; use `set_size` to change it.
    pub size: Vec2,
    /// Velocity in tiles per second
    pub speed: Vec2,
    pub kind: ActorKind,
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            id: ActorId::fresh(),
            pos: Vec2::ZERO,
            size: Vec2::ONE,
            speed: Vec2::ZERO,
            kind: ActorKind::Generic,
        }
    }
}

impl Actor {
    /// Generic actor; the box must have positive extent
    pub fn new(pos: Vec2, size: Vec2, speed: Vec2) -> Result<Self> {
        check_size(size)?;
        Ok(Self {
            pos,
            size,
            speed,
            ..Self::default()
        })
    }

    /// Resize the box, keeping the positive-extent rule
    pub fn set_size(&mut self, size: Vec2) -> Result<()> {
        check_size(size)?;
        self.size = size;
        Ok(())
    }

    /// Player standing on the cell at `cell`
    pub fn player(cell: Vec2) -> Self {
        Self {
            pos: cell + PLAYER_SPAWN_OFFSET,
            size: PLAYER_SIZE,
            kind: ActorKind::Player,
            ..Self::default()
        }
    }

    /// Coin centered in the cell at `cell`, with a random bob phase
    pub fn coin<R: Rng>(cell: Vec2, rng: &mut R) -> Self {
        let start_pos = cell + COIN_SPAWN_OFFSET;
        Self {
            pos: start_pos,
            size: COIN_SIZE,
            kind: ActorKind::Coin(CoinState {
                start_pos,
                spring: rng.random_range(0.0..std::f32::consts::TAU),
            }),
            ..Self::default()
        }
    }

    /// One-tile fireball with an arbitrary velocity
    pub fn fireball(pos: Vec2, speed: Vec2) -> Self {
        Self {
            pos,
            size: FIREBALL_SIZE,
            speed,
            kind: ActorKind::Fireball(FireballKind::Free),
            ..Self::default()
        }
    }

    pub fn horizontal_fireball(pos: Vec2) -> Self {
        Self {
            kind: ActorKind::Fireball(FireballKind::Horizontal),
            ..Self::fireball(pos, HORIZONTAL_FIREBALL_SPEED)
        }
    }

    pub fn vertical_fireball(pos: Vec2) -> Self {
        Self {
            kind: ActorKind::Fireball(FireballKind::Vertical),
            ..Self::fireball(pos, VERTICAL_FIREBALL_SPEED)
        }
    }

    pub fn fire_rain(pos: Vec2) -> Self {
        Self {
            kind: ActorKind::Fireball(FireballKind::Rain { start_pos: pos }),
            ..Self::fireball(pos, FIRE_RAIN_SPEED)
        }
    }

    pub fn tag(&self) -> ActorTag {
        match self.kind {
            ActorKind::Generic => ActorTag::Actor,
            ActorKind::Player => ActorTag::Player,
            ActorKind::Coin(_) => ActorTag::Coin,
            ActorKind::Fireball(_) => ActorTag::Fireball,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.rect().left()
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.rect().top()
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.rect().right()
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.rect().bottom()
    }

    /// Boxes overlap; an actor never intersects itself
    pub fn is_intersect(&self, other: &Actor) -> bool {
        if other.id == self.id {
            return false;
        }
        self.rect().intersects(&other.rect())
    }

    /// Where the actor would be after `dt` at its current speed
    pub fn next_position(&self, dt: f32) -> Vec2 {
        self.pos + self.speed * dt
    }

    /// Advance this actor by `dt`. Only the actor itself is mutated.
    pub fn act(&mut self, dt: f32, grid: &Grid) {
        match self.kind {
            ActorKind::Generic | ActorKind::Player => {}
            ActorKind::Coin(ref mut coin) => {
                coin.update_spring(dt);
                self.pos = coin.start_pos + coin.spring_vector();
            }
            ActorKind::Fireball(_) => {
                let next = self.next_position(dt);
                if grid.obstacle_at(next, self.size).is_some() {
                    self.handle_obstacle();
                } else {
                    self.pos = next;
                }
            }
        }
    }

    /// Fireball response to a blocked move
    pub fn handle_obstacle(&mut self) {
        match self.kind {
            ActorKind::Fireball(FireballKind::Rain { start_pos }) => {
                self.pos = start_pos;
            }
            ActorKind::Fireball(_) => {
                self.speed = -self.speed;
            }
            _ => {}
        }
    }
}

fn check_size(size: Vec2) -> Result<()> {
    if size.x > 0.0 && size.y > 0.0 {
        Ok(())
    } else {
        Err(Error::DegenerateSize {
            x: size.x,
            y: size.y,
        })
    }
}
