use anyhow::{Context, Result};
use boids_core::{Bounds, EngineConfig, Flock, TickMode};
use boids_shared::{FlockSettings, FrameSnapshot, Position, SettingsUpdate, SpawnRequest};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::path::Path;

/// Default domain size, matching a 1024 x 768 window
pub const DEFAULT_WIDTH: f64 = 1024.0;
pub const DEFAULT_HEIGHT: f64 = 768.0;

/// Everything needed to start a headless run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub agents: usize,
    pub width: f64,
    pub height: f64,
    pub seed: Option<u64>,
    pub tick_mode: TickMode,
    pub settings: FlockSettings,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            agents: 1,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
            tick_mode: TickMode::Snapshot,
            settings: FlockSettings::default(),
        }
    }
}

/// Reads `FlockSettings` from a JSON file. Missing fields keep their defaults.
pub fn load_settings(path: &Path) -> Result<FlockSettings> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    let settings = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
    Ok(settings)
}

/// Owns a flock, the random source driving it and the settings last applied
pub struct Simulation {
    flock: Flock,
    rng: StdRng,
    settings: FlockSettings,
}

/// Caps weights at `MAX_WEIGHT` and validates what is left.
fn sanitize(settings: &FlockSettings) -> Result<FlockSettings> {
    let clamped = settings.clone().clamp_weights();
    if clamped != *settings {
        log::warn!(
            "Weights capped at {}: {:?}",
            boids_core::MAX_WEIGHT,
            clamped.weights()
        );
    }
    clamped.validate().context("Invalid flock settings")?;
    Ok(clamped)
}

impl Simulation {
    pub fn new(options: &RunOptions) -> Result<Self> {
        let mut settings = options.settings.clone();
        if settings.bounds.is_none() {
            settings.bounds = Some(Position::new(options.width, options.height));
        }

        let clamped = sanitize(&settings)?;

        let mut rng = match options.seed {
            Some(seed) => {
                log::debug!("Using seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        let bounds = clamped
            .bounds
            .map(|b| Bounds::new(b.x, b.y))
            .unwrap_or(Bounds::new(options.width, options.height));
        let config = EngineConfig {
            tick_mode: options.tick_mode,
            ..EngineConfig::default()
        };

        let mut flock = Flock::seeded(bounds, options.agents, config, &mut rng);
        clamped.apply_to(&mut flock)?;

        log::info!(
            "Seeded {} agents in {} x {} ({:?} ticks)",
            flock.len(),
            bounds.x,
            bounds.y,
            options.tick_mode
        );

        Ok(Self {
            flock,
            rng,
            settings: clamped,
        })
    }

    /// Settings currently applied to every agent
    pub fn settings(&self) -> &FlockSettings {
        &self.settings
    }

    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    /// Adds an agent at `(x, y)`, as a click on the canvas would.
    ///
    /// The new agent starts with default weights.
    pub fn spawn(&mut self, x: f64, y: f64) -> usize {
        let index = self.flock.spawn(x, y, &mut self.rng);
        log::debug!("Spawned agent {} at ({:.1}, {:.1})", index, x, y);
        index
    }

    pub fn spawn_at(&mut self, request: SpawnRequest) -> usize {
        self.spawn(request.position.x, request.position.y)
    }

    /// Applies a settings update to every agent. A missing `bounds` keeps the
    /// current domain.
    pub fn apply(&mut self, update: SettingsUpdate) -> Result<()> {
        let mut settings = sanitize(&update.settings)?;
        if settings.bounds.is_none() {
            settings.bounds = self.settings.bounds;
        }
        settings.apply_to(&mut self.flock)?;
        log::debug!("Applied settings {:?}", settings);
        self.settings = settings;
        Ok(())
    }

    /// Replaces the population with `count` fresh agents and reapplies the
    /// current settings to them.
    pub fn reset(&mut self, count: usize) -> Result<()> {
        self.flock.reset(count, &mut self.rng);
        self.settings.apply_to(&mut self.flock)?;
        log::info!("Flock reset to {} agents", count);
        Ok(())
    }

    pub fn tick(&mut self) {
        self.flock.tick(&mut self.rng);
    }

    /// Runs `ticks` ticks and writes a JSON line per `every`-th tick.
    ///
    /// Returns the number of frames written.
    pub fn run<W: Write>(&mut self, ticks: u64, every: u64, mut out: W) -> Result<u64> {
        let every = every.max(1);
        let mut frames = 0;

        for _ in 0..ticks {
            self.tick();

            if self.flock.ticks() % every == 0 {
                let frame = FrameSnapshot::capture(&self.flock);
                serde_json::to_writer(&mut out, &frame).context("Failed to encode frame")?;
                out.write_all(b"\n").context("Failed to write frame")?;
                frames += 1;
            }
        }

        out.flush().context("Failed to flush output")?;
        log::debug!("Wrote {} frames over {} ticks", frames, ticks);
        Ok(frames)
    }
}
