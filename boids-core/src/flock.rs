use crate::agent::{Agent, AgentState, Bounds};
#[cfg(feature = "std")]
use crate::agent::Weights;
use crate::behavior;
use crate::rng::RandomSource;
use crate::EngineConfig;

/// A fixed-capacity flock for embedded (no_std) environments
pub struct FixedFlock<const N: usize> {
    pub agents: heapless::Vec<Agent, N>,
    pub config: EngineConfig,
    pub bounds: Bounds,
    ticks: u64,
}

impl<const N: usize> FixedFlock<N> {
    pub fn new(bounds: Bounds, config: EngineConfig) -> Self {
        Self {
            agents: heapless::Vec::new(),
            config,
            bounds,
            ticks: 0,
        }
    }

    /// Adds `agent` and returns its index, or hands it back when full.
    pub fn add_agent(&mut self, agent: Agent) -> Result<usize, Agent> {
        self.agents.push(agent)?;
        Ok(self.agents.len() - 1)
    }

    pub fn spawn<R: RandomSource + ?Sized>(
        &mut self,
        x: f64,
        y: f64,
        rng: &mut R,
    ) -> Result<usize, Agent> {
        let agent = Agent::spawn(x, y, self.bounds, rng);
        self.add_agent(agent)
    }

    pub fn tick<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let mut states: heapless::Vec<AgentState, N> =
            self.agents.iter().map(Agent::state).collect();
        behavior::step_agents(&mut self.agents, &mut states, &self.config, rng);
        self.ticks += 1;
    }

    pub fn resize(&mut self, x: f64, y: f64) {
        self.bounds = Bounds::new(x, y);
        for agent in self.agents.iter_mut() {
            agent.bounds = self.bounds;
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

/// A collection of agents for std environments
///
/// The flock is the only owner of its agents. Configuration changes and
/// ticks both need `&mut self`, so they never overlap.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct Flock {
    pub agents: Vec<Agent>,
    pub config: EngineConfig,
    pub bounds: Bounds,
    ticks: u64,
}

#[cfg(feature = "std")]
impl Flock {
    pub fn new(bounds: Bounds) -> Self {
        Self::new_with_config(bounds, EngineConfig::default())
    }

    pub fn new_with_config(bounds: Bounds, config: EngineConfig) -> Self {
        Self {
            agents: Vec::new(),
            config,
            bounds,
            ticks: 0,
        }
    }

    /// Flock of `count` agents placed uniformly at random inside `bounds`.
    pub fn seeded<R: RandomSource + ?Sized>(
        bounds: Bounds,
        count: usize,
        config: EngineConfig,
        rng: &mut R,
    ) -> Self {
        let mut flock = Self::new_with_config(bounds, config);
        flock.reset(count, rng);
        flock
    }

    pub fn add_agent(&mut self, agent: Agent) -> usize {
        self.agents.push(agent);
        self.agents.len() - 1
    }

    /// Appends an agent at `(x, y)` with random velocity and category.
    pub fn spawn<R: RandomSource + ?Sized>(&mut self, x: f64, y: f64, rng: &mut R) -> usize {
        let agent = Agent::spawn(x, y, self.bounds, rng);
        self.add_agent(agent)
    }

    /// Replaces every agent with `count` fresh random ones.
    pub fn reset<R: RandomSource + ?Sized>(&mut self, count: usize, rng: &mut R) {
        let bounds = self.bounds;
        self.agents = (0..count).map(|_| Agent::random(bounds, rng)).collect();
        self.ticks = 0;
    }

    pub fn remove(&mut self, index: usize) -> Option<Agent> {
        if index < self.agents.len() {
            Some(self.agents.remove(index))
        } else {
            None
        }
    }

    pub fn tick<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let mut states: Vec<AgentState> = self.agents.iter().map(Agent::state).collect();
        behavior::step_agents(&mut self.agents, &mut states, &self.config, rng);
        self.ticks += 1;
    }

    pub fn resize(&mut self, x: f64, y: f64) {
        self.bounds = Bounds::new(x, y);
        for agent in self.agents.iter_mut() {
            agent.bounds = self.bounds;
        }
    }

    pub fn set_weights(&mut self, weights: Weights) {
        for agent in self.agents.iter_mut() {
            agent.weights = weights;
        }
    }

    pub fn set_alignment_weight(&mut self, weight: f64) {
        for agent in self.agents.iter_mut() {
            agent.weights.alignment = weight;
        }
    }

    pub fn set_separation_weight(&mut self, weight: f64) {
        for agent in self.agents.iter_mut() {
            agent.weights.separation = weight;
        }
    }

    pub fn set_cohesion_weight(&mut self, weight: f64) {
        for agent in self.agents.iter_mut() {
            agent.weights.cohesion = weight;
        }
    }

    pub fn set_color_sensitive(&mut self, color_sensitive: bool) {
        for agent in self.agents.iter_mut() {
            agent.color_sensitive = color_sensitive;
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;
    use crate::vector::Vector2D;
    use crate::{Category, MAX_VELOCITY};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bounds() -> Bounds {
        Bounds::new(800.0, 600.0)
    }

    #[test]
    fn test_flock_creation() {
        let mut rng = StdRng::seed_from_u64(1);
        let flock = Flock::seeded(bounds(), 50, EngineConfig::default(), &mut rng);
        assert_eq!(flock.len(), 50);
        assert_eq!(flock.bounds, bounds());
        assert!(flock.agents.iter().all(|a| a.bounds == bounds()));
    }

    #[test]
    fn test_flock_update() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut flock = Flock::seeded(bounds(), 10, EngineConfig::default(), &mut rng);
        let initial_positions: Vec<_> = flock.agents.iter().map(|a| a.position).collect();

        flock.tick(&mut rng);

        let changed = flock
            .agents
            .iter()
            .zip(initial_positions.iter())
            .any(|(a, &initial)| a.position != initial);
        assert!(changed);
        assert_eq!(flock.ticks(), 1);
    }

    #[test]
    fn test_velocity_at_max_after_tick() {
        let mut rng = SimpleRng::new(77);
        let mut flock = Flock::seeded(Bounds::new(300.0, 300.0), 40, EngineConfig::default(), &mut rng);

        for _ in 0..20 {
            flock.tick(&mut rng);
            for agent in &flock.agents {
                assert!((agent.velocity.magnitude() - MAX_VELOCITY).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_spawn_appends() {
        let mut rng = SimpleRng::new(5);
        let mut flock = Flock::new(bounds());

        assert_eq!(flock.spawn(10.0, 20.0, &mut rng), 0);
        assert_eq!(flock.spawn(30.0, 40.0, &mut rng), 1);
        assert_eq!(flock.agents[1].position, Vector2D::new(30.0, 40.0));
        assert_eq!(flock.agents[1].bounds, bounds());
    }

    #[test]
    fn test_reset_replaces_population() {
        let mut rng = SimpleRng::new(5);
        let mut flock = Flock::seeded(bounds(), 3, EngineConfig::default(), &mut rng);
        flock.tick(&mut rng);

        flock.reset(1, &mut rng);
        assert_eq!(flock.len(), 1);
        assert_eq!(flock.ticks(), 0);
    }

    #[test]
    fn test_remove() {
        let mut rng = SimpleRng::new(5);
        let mut flock = Flock::seeded(bounds(), 2, EngineConfig::default(), &mut rng);
        let second = flock.agents[1].clone();

        assert_eq!(flock.remove(5), None);
        assert!(flock.remove(0).is_some());
        assert_eq!(flock.agents, vec![second]);
    }

    #[test]
    fn test_resize_updates_agents() {
        let mut rng = SimpleRng::new(5);
        let mut flock = Flock::seeded(bounds(), 4, EngineConfig::default(), &mut rng);

        flock.resize(1920.0, 1080.0);
        assert_eq!(flock.bounds, Bounds::new(1920.0, 1080.0));
        assert!(flock.agents.iter().all(|a| a.bounds == flock.bounds));
    }

    #[test]
    fn test_flock_wide_setters() {
        let mut rng = SimpleRng::new(5);
        let mut flock = Flock::seeded(bounds(), 4, EngineConfig::default(), &mut rng);

        flock.set_alignment_weight(1.0);
        flock.set_separation_weight(2.0);
        flock.set_cohesion_weight(3.0);
        flock.set_color_sensitive(true);

        for agent in &flock.agents {
            assert_eq!(agent.weights, Weights::new(1.0, 2.0, 3.0));
            assert!(agent.color_sensitive);
        }

        flock.set_weights(Weights::zero());
        assert!(flock.agents.iter().all(|a| a.weights == Weights::zero()));
    }

    #[test]
    fn test_fixed_flock_capacity() {
        let mut rng = SimpleRng::new(11);
        let mut flock: FixedFlock<2> = FixedFlock::new(bounds(), EngineConfig::default());

        assert_eq!(flock.spawn(1.0, 1.0, &mut rng), Ok(0));
        assert_eq!(flock.spawn(2.0, 2.0, &mut rng), Ok(1));

        let rejected = flock.spawn(3.0, 3.0, &mut rng).unwrap_err();
        assert_eq!(rejected.position, Vector2D::new(3.0, 3.0));
        assert_eq!(flock.len(), 2);
    }

    #[test]
    fn test_fixed_flock_matches_growable_flock() {
        let agents = [
            Agent::new(Vector2D::new(100.0, 100.0), Vector2D::new(1.0, 2.0), bounds(), Category::Red),
            Agent::new(Vector2D::new(140.0, 90.0), Vector2D::new(-2.0, 0.5), bounds(), Category::Blue),
            Agent::new(Vector2D::new(400.0, 300.0), Vector2D::new(0.0, -1.0), bounds(), Category::Red),
        ];

        let mut growable = Flock::new(bounds());
        let mut fixed: FixedFlock<8> = FixedFlock::new(bounds(), EngineConfig::default());
        for agent in agents {
            growable.add_agent(agent.clone());
            fixed.add_agent(agent).unwrap();
        }

        let mut rng_a = SimpleRng::new(21);
        let mut rng_b = SimpleRng::new(21);
        for _ in 0..10 {
            growable.tick(&mut rng_a);
            fixed.tick(&mut rng_b);
        }

        assert_eq!(growable.agents.as_slice(), fixed.agents.as_slice());
        assert_eq!(fixed.ticks(), 10);
    }
}
