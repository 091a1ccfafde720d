//! Steering rules and the per-tick update.
//!
//! Each rule looks at the other agents through [`neighbors`] and returns
//! `None` when nobody is close enough, in which case the term is skipped for
//! that tick. Present terms are added straight onto the velocity in the
//! order cohesion, separation, alignment.

use crate::agent::{Agent, AgentState};
use crate::rng::RandomSource;
use crate::vector::Vector2D;
use crate::{EngineConfig, TickMode};

/// Agents among `others` that `agent` considers and that lie strictly
/// closer than `radius`.
pub fn neighbors<'a, I>(
    others: I,
    agent: &'a Agent,
    radius: f64,
) -> impl Iterator<Item = &'a AgentState> + Clone + 'a
where
    I: IntoIterator<Item = &'a AgentState>,
    I::IntoIter: Clone + 'a,
{
    others.into_iter().filter(move |other| {
        agent.considers(other) && other.position.distance(&agent.position) < radius
    })
}

/// Pull toward the centre of mass of agents within the cohesion radius.
pub fn cohesion<'a, I>(agent: &'a Agent, others: I, config: &EngineConfig) -> Option<Vector2D>
where
    I: IntoIterator<Item = &'a AgentState>,
    I::IntoIter: Clone + 'a,
{
    let centre = Vector2D::arithmetic_mean(
        neighbors(others, agent, config.cohesion_distance).map(|other| other.position),
    )?;
    Some((centre - agent.position).normalize_to(agent.weights.cohesion))
}

/// Push away from agents within the separation radius.
pub fn separation<'a, I>(agent: &'a Agent, others: I, config: &EngineConfig) -> Option<Vector2D>
where
    I: IntoIterator<Item = &'a AgentState>,
    I::IntoIter: Clone + 'a,
{
    let mut close = neighbors(others, agent, config.separation_distance).peekable();
    close.peek()?;

    let away = close.fold(Vector2D::zero(), |sum, other| {
        sum + (agent.position - other.position)
    });
    Some(away.normalize_to(agent.weights.separation))
}

/// Turn toward the mean velocity of nearby agents.
pub fn alignment<'a, I>(agent: &'a Agent, others: I, config: &EngineConfig) -> Option<Vector2D>
where
    I: IntoIterator<Item = &'a AgentState>,
    I::IntoIter: Clone + 'a,
{
    let heading = Vector2D::arithmetic_mean(
        neighbors(others, agent, config.alignment_query_distance()).map(|other| other.velocity),
    )?;
    Some(heading.normalize_to(agent.weights.alignment))
}

/// Occasional random nudge.
pub fn jitter<R: RandomSource + ?Sized>(config: &EngineConfig, rng: &mut R) -> Option<Vector2D> {
    if rng.next_f64() >= config.jitter_probability {
        return None;
    }
    let nudge = Vector2D::new(rng.next_f64() - 0.5, rng.next_f64() - 0.5);
    Some(nudge.normalize_to(config.jitter_magnitude))
}

/// Velocity `agent` moves with this tick, given everybody else.
pub fn next_velocity<'a, I, R>(
    agent: &'a Agent,
    others: I,
    config: &EngineConfig,
    rng: &mut R,
) -> Vector2D
where
    I: IntoIterator<Item = &'a AgentState>,
    I::IntoIter: Clone + 'a,
    R: RandomSource + ?Sized,
{
    let others = others.into_iter();
    let mut velocity = agent.velocity;

    let adjustments = [
        cohesion(agent, others.clone(), config),
        separation(agent, others.clone(), config),
        alignment(agent, others, config),
        jitter(config, rng),
    ];
    for adjustment in adjustments.into_iter().flatten() {
        velocity = velocity + adjustment;
    }

    velocity.normalize_to(config.max_velocity)
}

/// Runs one tick over `agents`.
///
/// `states` must hold the state of every agent, index for index, when the
/// tick starts. In [`TickMode::Sequential`] it is refreshed after each agent
/// moves so later agents see the update.
pub fn step_agents<R: RandomSource + ?Sized>(
    agents: &mut [Agent],
    states: &mut [AgentState],
    config: &EngineConfig,
    rng: &mut R,
) {
    debug_assert_eq!(agents.len(), states.len());

    for index in 0..agents.len() {
        let others = states
            .iter()
            .enumerate()
            .filter(move |(other, _)| *other != index)
            .map(|(_, state)| state);
        let velocity = next_velocity(&agents[index], others, config, rng);
        agents[index].advance(velocity);

        if config.tick_mode == TickMode::Sequential {
            states[index] = agents[index].state();
        }
    }
}
