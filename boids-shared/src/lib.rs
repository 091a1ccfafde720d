#![cfg_attr(not(feature = "std"), no_std)]

use boids_core::{sign_sensitive_max, Agent, Category, Weights, DEFAULT_WEIGHT, MAX_WEIGHT};
use serde::{Deserialize, Serialize};

mod error;

pub use error::SettingsError;

/// Represents a 2D position in screen coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Colour group of an agent as seen by a renderer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Red,
    Green,
    Blue,
    Cyan,
}

impl From<Category> for Tag {
    fn from(category: Category) -> Self {
        match category {
            Category::Red => Tag::Red,
            Category::Green => Tag::Green,
            Category::Blue => Tag::Blue,
            Category::Cyan => Tag::Cyan,
        }
    }
}

/// Everything a renderer needs to draw one agent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AgentView {
    pub position: Position,
    /// Rotation in radians, `atan2(vy, vx)`.
    pub heading: f64,
    pub tag: Tag,
}

impl From<&Agent> for AgentView {
    fn from(agent: &Agent) -> Self {
        Self {
            position: Position::new(agent.position.x, agent.position.y),
            heading: agent.heading(),
            tag: agent.category().into(),
        }
    }
}

/// All agents after one tick
#[cfg(feature = "std")]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub agents: Vec<AgentView>,
}

#[cfg(feature = "std")]
impl FrameSnapshot {
    pub fn capture(flock: &boids_core::Flock) -> Self {
        Self {
            tick: flock.ticks(),
            agents: flock.agents.iter().map(AgentView::from).collect(),
        }
    }
}

/// Flock settings a user interface can change between ticks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FlockSettings {
    pub alignment_weight: f64,
    pub separation_weight: f64,
    pub cohesion_weight: f64,
    pub color_sensitive: bool,
    /// Wrap-around domain; `None` leaves the current bounds alone.
    pub bounds: Option<Position>,
    /// Let alignment use its own radius instead of the separation radius.
    pub alignment_uses_own_radius: bool,
}

impl Default for FlockSettings {
    fn default() -> Self {
        Self {
            alignment_weight: DEFAULT_WEIGHT,
            separation_weight: DEFAULT_WEIGHT,
            cohesion_weight: DEFAULT_WEIGHT,
            color_sensitive: false,
            bounds: None,
            alignment_uses_own_radius: false,
        }
    }
}

impl FlockSettings {
    pub fn weights(&self) -> Weights {
        Weights::new(
            self.alignment_weight,
            self.separation_weight,
            self.cohesion_weight,
        )
    }

    /// Caps every weight at `MAX_WEIGHT` in magnitude, like a slider would.
    pub fn clamp_weights(mut self) -> Self {
        self.alignment_weight = sign_sensitive_max(self.alignment_weight, MAX_WEIGHT);
        self.separation_weight = sign_sensitive_max(self.separation_weight, MAX_WEIGHT);
        self.cohesion_weight = sign_sensitive_max(self.cohesion_weight, MAX_WEIGHT);
        self
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let weights = [
            ("alignment", self.alignment_weight),
            ("separation", self.separation_weight),
            ("cohesion", self.cohesion_weight),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::InvalidWeight { name, value });
            }
        }

        if let Some(bounds) = self.bounds {
            for value in [bounds.x, bounds.y] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(SettingsError::InvalidBounds {
                        x: bounds.x,
                        y: bounds.y,
                    });
                }
            }
        }

        Ok(())
    }

    /// Validates and pushes the settings onto every agent of `flock`.
    #[cfg(feature = "std")]
    pub fn apply_to(&self, flock: &mut boids_core::Flock) -> Result<(), SettingsError> {
        self.validate()?;

        flock.set_weights(self.weights());
        flock.set_color_sensitive(self.color_sensitive);
        flock.config.alignment_radius = if self.alignment_uses_own_radius {
            boids_core::AlignmentRadius::Own
        } else {
            boids_core::AlignmentRadius::Separation
        };
        if let Some(bounds) = self.bounds {
            flock.resize(bounds.x, bounds.y);
        }

        Ok(())
    }
}

/// Settings update message sent by a user interface
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingsUpdate {
    pub settings: FlockSettings,
}

/// Request to add an agent at a point, e.g. after a click
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SpawnRequest {
    pub position: Position,
}
