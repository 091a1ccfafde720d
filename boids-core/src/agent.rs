use crate::rng::RandomSource;
use crate::vector::Vector2D;
use crate::{DEFAULT_WEIGHT, MAX_VELOCITY};

/// Discrete group an agent belongs to, rendered as its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Red,
    Green,
    Blue,
    Cyan,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Red,
        Category::Green,
        Category::Blue,
        Category::Cyan,
    ];

    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.next_index(Self::ALL.len())]
    }
}

/// Size of the wrap-around domain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Per-agent steering weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub alignment: f64,
    pub separation: f64,
    pub cohesion: f64,
}

impl Weights {
    pub fn new(alignment: f64, separation: f64, cohesion: f64) -> Self {
        Self {
            alignment,
            separation,
            cohesion,
        }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHT, DEFAULT_WEIGHT, DEFAULT_WEIGHT)
    }
}

/// What other agents can see of an agent during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentState {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub category: Category,
}

/// A single boid entity
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub bounds: Bounds,
    pub weights: Weights,
    pub color_sensitive: bool,
    category: Category,
}

impl Agent {
    pub fn new(position: Vector2D, velocity: Vector2D, bounds: Bounds, category: Category) -> Self {
        Self {
            position,
            velocity,
            bounds,
            weights: Weights::default(),
            color_sensitive: false,
            category,
        }
    }

    /// Agent at `(x, y)` with a random velocity and category.
    ///
    /// Each velocity axis is drawn from `[-MAX_VELOCITY / 2, MAX_VELOCITY / 2)`.
    pub fn spawn<R: RandomSource + ?Sized>(x: f64, y: f64, bounds: Bounds, rng: &mut R) -> Self {
        let vx = rng.next_f64() * MAX_VELOCITY - 0.5 * MAX_VELOCITY;
        let vy = rng.next_f64() * MAX_VELOCITY - 0.5 * MAX_VELOCITY;
        let category = Category::random(rng);
        Self::new(Vector2D::new(x, y), Vector2D::new(vx, vy), bounds, category)
    }

    /// Agent at a uniformly random spot inside `bounds`.
    pub fn random<R: RandomSource + ?Sized>(bounds: Bounds, rng: &mut R) -> Self {
        let x = rng.next_f64() * bounds.x;
        let y = rng.next_f64() * bounds.y;
        Self::spawn(x, y, bounds, rng)
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_color_sensitive(mut self, color_sensitive: bool) -> Self {
        self.color_sensitive = color_sensitive;
        self
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn state(&self) -> AgentState {
        AgentState {
            position: self.position,
            velocity: self.velocity,
            category: self.category,
        }
    }

    /// Display rotation in radians derived from the velocity.
    pub fn heading(&self) -> f64 {
        self.velocity.heading()
    }

    /// Whether this agent takes `other` into account when looking for
    /// neighbours, ignoring distance.
    pub fn considers(&self, other: &AgentState) -> bool {
        !self.color_sensitive || other.category == self.category
    }

    /// Adopts `velocity`, moves by it and wraps into the bounds.
    pub fn advance(&mut self, velocity: Vector2D) {
        self.velocity = velocity;
        self.position = (self.position + velocity).wrap_around(self.bounds.x, self.bounds.y);
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    fn bounds() -> Bounds {
        Bounds::new(1024.0, 768.0)
    }

    #[test]
    fn test_agent_creation() {
        let agent = Agent::new(
            Vector2D::new(10.0, 20.0),
            Vector2D::new(1.0, 1.0),
            bounds(),
            Category::Blue,
        );

        assert_eq!(agent.position, Vector2D::new(10.0, 20.0));
        assert_eq!(agent.velocity, Vector2D::new(1.0, 1.0));
        assert_eq!(agent.weights, Weights::new(0.5, 0.5, 0.5));
        assert!(!agent.color_sensitive);
        assert_eq!(agent.category(), Category::Blue);
    }

    #[test]
    fn test_spawn_velocity_range() {
        let mut rng = SimpleRng::new(42);
        let half = 0.5 * MAX_VELOCITY;

        for _ in 0..500 {
            let agent = Agent::spawn(5.0, 6.0, bounds(), &mut rng);
            assert_eq!(agent.position, Vector2D::new(5.0, 6.0));
            assert!(agent.velocity.x >= -half && agent.velocity.x < half);
            assert!(agent.velocity.y >= -half && agent.velocity.y < half);
        }
    }

    #[test]
    fn test_spawn_uses_every_category() {
        let mut rng = SimpleRng::new(3);
        let mut seen = [false; 4];

        for _ in 0..200 {
            let agent = Agent::spawn(0.0, 0.0, bounds(), &mut rng);
            let slot = Category::ALL
                .iter()
                .position(|c| *c == agent.category())
                .unwrap();
            seen[slot] = true;
        }

        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_random_agent_inside_bounds() {
        let mut rng = SimpleRng::new(9);
        for _ in 0..200 {
            let agent = Agent::random(bounds(), &mut rng);
            assert!(agent.position.x >= 0.0 && agent.position.x < 1024.0);
            assert!(agent.position.y >= 0.0 && agent.position.y < 768.0);
        }
    }

    #[test]
    fn test_considers_respects_color_filter() {
        let agent = Agent::new(Vector2D::zero(), Vector2D::zero(), bounds(), Category::Red);
        let red = AgentState {
            position: Vector2D::zero(),
            velocity: Vector2D::zero(),
            category: Category::Red,
        };
        let cyan = AgentState {
            category: Category::Cyan,
            ..red
        };

        assert!(agent.considers(&red));
        assert!(agent.considers(&cyan));

        let agent = agent.with_color_sensitive(true);
        assert!(agent.considers(&red));
        assert!(!agent.considers(&cyan));
    }

    #[test]
    fn test_advance_wraps_edges() {
        let mut agent = Agent::new(
            Vector2D::new(1022.0, 1.0),
            Vector2D::zero(),
            bounds(),
            Category::Green,
        );

        agent.advance(Vector2D::new(3.0, -2.0));

        assert_eq!(agent.velocity, Vector2D::new(3.0, -2.0));
        assert_eq!(agent.position, Vector2D::new(1.0, 769.0));
    }

    #[test]
    fn test_heading_follows_velocity() {
        let agent = Agent::new(
            Vector2D::zero(),
            Vector2D::new(0.0, -2.0),
            bounds(),
            Category::Red,
        );
        assert!((agent.heading() + core::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}
