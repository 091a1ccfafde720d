#![cfg_attr(not(feature = "std"), no_std)]

pub mod agent;
pub mod behavior;
pub mod flock;
pub mod rng;
pub mod vector;

pub use agent::{Agent, AgentState, Bounds, Category, Weights};
#[cfg(feature = "std")]
pub use flock::Flock;
pub use flock::FixedFlock;
pub use rng::{RandomSource, SimpleRng};
pub use vector::{sign_sensitive_max, Vector2D};

/// Size of the rendered triangle; the neighbourhood radii are multiples of it.
pub const TRI_SIZE: f64 = 8.0;
pub const MAX_VELOCITY: f64 = 3.0;
pub const SEPARATION_DISTANCE: f64 = 10.0 * TRI_SIZE;
pub const ALIGNMENT_DISTANCE: f64 = 15.0 * TRI_SIZE;
pub const CENTER_OF_MASS_NEIGHBORHOOD: f64 = 25.0 * TRI_SIZE;
pub const DEFAULT_WEIGHT: f64 = 0.5;
/// Upper end of the weight range offered to users. Not enforced here.
pub const MAX_WEIGHT: f64 = 3.0;
pub const JITTER_PROBABILITY: f64 = 0.01;
pub const JITTER_MAGNITUDE: f64 = 0.5;

/// Which radius alignment uses to find neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignmentRadius {
    /// Reuse the separation radius. This is the reference behaviour.
    #[default]
    Separation,
    /// Use `EngineConfig::alignment_distance`.
    Own,
}

/// How agents observe each other within one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickMode {
    /// Every agent reads the state all agents had when the tick started.
    #[default]
    Snapshot,
    /// Agents update in order and later agents see the already updated
    /// state of earlier ones.
    Sequential,
}

/// Configuration for the flock simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub max_velocity: f64,
    pub separation_distance: f64,
    pub alignment_distance: f64,
    pub cohesion_distance: f64,
    pub alignment_radius: AlignmentRadius,
    pub jitter_probability: f64,
    pub jitter_magnitude: f64,
    pub tick_mode: TickMode,
}

impl EngineConfig {
    /// Radius alignment actually queries with.
    pub fn alignment_query_distance(&self) -> f64 {
        match self.alignment_radius {
            AlignmentRadius::Separation => self.separation_distance,
            AlignmentRadius::Own => self.alignment_distance,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_velocity: MAX_VELOCITY,
            separation_distance: SEPARATION_DISTANCE,
            alignment_distance: ALIGNMENT_DISTANCE,
            cohesion_distance: CENTER_OF_MASS_NEIGHBORHOOD,
            alignment_radius: AlignmentRadius::Separation,
            jitter_probability: JITTER_PROBABILITY,
            jitter_magnitude: JITTER_MAGNITUDE,
            tick_mode: TickMode::Snapshot,
        }
    }
}
