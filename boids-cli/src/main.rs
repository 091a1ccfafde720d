use anyhow::{Context, Result};
use boids_cli::{load_settings, RunOptions, Simulation, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use boids_core::TickMode;
use boids_shared::{Position, SpawnRequest};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless boids flocking simulation", long_about = None)]
struct Args {
    /// Number of agents to seed
    #[arg(short, long, default_value_t = 1)]
    agents: usize,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 100)]
    ticks: u64,

    /// Width of the wrap-around domain
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: f64,

    /// Height of the wrap-around domain
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: f64,

    /// Seed for a reproducible run (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file with flock settings; flags below override its weights
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Alignment weight
    #[arg(long)]
    alignment: Option<f64>,

    /// Separation weight
    #[arg(long)]
    separation: Option<f64>,

    /// Cohesion weight
    #[arg(long)]
    cohesion: Option<f64>,

    /// Only flock with agents of the same colour
    #[arg(short = 'c', long)]
    color_sensitive: bool,

    /// Use the alignment radius for alignment instead of the separation radius
    #[arg(long)]
    own_alignment_radius: bool,

    /// Extra agent at `X,Y`, added after seeding (repeatable)
    #[arg(long, value_parser = parse_spawn)]
    spawn: Vec<SpawnRequest>,

    /// Let agents see updates made earlier in the same tick
    #[arg(long)]
    sequential: bool,

    /// Emit a frame every N ticks
    #[arg(short, long, default_value_t = 1)]
    every: u64,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn parse_spawn(value: &str) -> Result<SpawnRequest, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {:?}", value))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x {:?}: {}", x, e))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y {:?}: {}", y, e))?;
    Ok(SpawnRequest {
        position: Position::new(x, y),
    })
}

impl Args {
    fn run_options(&self) -> Result<RunOptions> {
        let mut settings = match &self.settings {
            Some(path) => load_settings(path)?,
            None => Default::default(),
        };

        if let Some(weight) = self.alignment {
            settings.alignment_weight = weight;
        }
        if let Some(weight) = self.separation {
            settings.separation_weight = weight;
        }
        if let Some(weight) = self.cohesion {
            settings.cohesion_weight = weight;
        }
        settings.color_sensitive |= self.color_sensitive;
        settings.alignment_uses_own_radius |= self.own_alignment_radius;

        if !(self.width > 0.0 && self.height > 0.0) {
            anyhow::bail!(
                "Domain size must be positive, got {} x {}",
                self.width,
                self.height
            );
        }

        Ok(RunOptions {
            agents: self.agents,
            width: self.width,
            height: self.height,
            seed: self.seed,
            tick_mode: if self.sequential {
                TickMode::Sequential
            } else {
                TickMode::Snapshot
            },
            settings,
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    log::info!("Boids simulation starting...");
    log::debug!("Arguments: {:?}", args);

    let options = args.run_options()?;
    let mut simulation = Simulation::new(&options).context("Failed to initialize simulation")?;
    for request in &args.spawn {
        simulation.spawn_at(*request);
    }

    let started = Instant::now();
    let stdout = std::io::stdout();
    let frames = simulation
        .run(args.ticks, args.every, stdout.lock())
        .context("Simulation error")?;

    let elapsed = started.elapsed().as_secs_f64();
    if elapsed > 0.0 {
        log::info!(
            "{} ticks, {} frames in {:.3}s ({:.1} ticks/s)",
            args.ticks,
            frames,
            elapsed,
            args.ticks as f64 / elapsed
        );
    }

    Ok(())
}
