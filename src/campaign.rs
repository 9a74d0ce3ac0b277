//! Level sets and campaign progression
//!
//! A level set is a JSON array of plans, each plan an array of row strings.
//! Players work through the levels in order: losing replays the same level,
//! winning moves on, and winning the last level completes the campaign.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sim::{Level, LevelParser, LevelStatus};

/// Rows of a single level, top to bottom
pub type Plan = Vec<String>;

/// Where the campaign stands after a level outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Progress {
    /// Replay the level at this index
    Retry(usize),
    /// Move on to the level at this index
    Advanced(usize),
    /// All levels won
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    plans: Vec<Plan>,
    current: usize,
    /// Levels lost so far
    pub attempts_lost: u32,
    completed: bool,
}

impl Campaign {
    pub fn new(plans: Vec<Plan>) -> Result<Self> {
        if plans.is_empty() {
            return Err(Error::EmptyLevelSet);
        }
        Ok(Self {
            plans,
            current: 0,
            attempts_lost: 0,
            completed: false,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let plans: Vec<Plan> = serde_json::from_str(json)?;
        log::info!("Loaded level set with {} levels", plans.len());
        Self::new(plans)
    }

    pub fn load(path: &std::path::Path) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_plan(&self) -> &[String] {
        &self.plans[self.current]
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Fresh level for the current plan
    pub fn build_level(&self, parser: &mut LevelParser) -> Level {
        parser.parse(self.current_plan())
    }

    /// Apply the outcome of the current level
    pub fn record(&mut self, status: LevelStatus) -> Result<Progress> {
        if self.completed {
            return Ok(Progress::Completed);
        }
        match status {
            LevelStatus::Playing => Err(Error::LevelNotFinished(status)),
            LevelStatus::Lost => {
                self.attempts_lost += 1;
                log::info!("Level {} lost, retrying", self.current + 1);
                Ok(Progress::Retry(self.current))
            }
            LevelStatus::Won if self.current + 1 < self.plans.len() => {
                self.current += 1;
                log::info!("Advancing to level {}", self.current + 1);
                Ok(Progress::Advanced(self.current))
            }
            LevelStatus::Won => {
                self.completed = true;
                log::info!("All {} levels completed", self.plans.len());
                Ok(Progress::Completed)
            }
        }
    }
}
