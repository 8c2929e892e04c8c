//! Birthday Swarm entry point
//!
//! Headless native driver: runs the simulation at a fixed frame rate and
//! reports matches through the log. Drawing is left to external renderers,
//! which can consume the JSON snapshot.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;

use birthday_swarm::consts::*;
use birthday_swarm::renderer::LogRenderer;
use birthday_swarm::{Bounds, Config, FrameClock, SimError, Simulation};

/// Birthday paradox particle simulation
#[derive(Debug, Parser)]
#[command(name = "birthday-swarm", version, about)]
struct Args {
    /// Number of people to simulate
    #[arg(short = 'n', long, default_value_t = 23, allow_negative_numbers = true)]
    people: i64,

    /// RNG seed (defaults to the current time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Frames to run before exiting
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,

    /// Target frames per second; 0 runs as fast as possible
    #[arg(long, default_value_t = TARGET_FPS)]
    fps: u32,

    #[arg(long, default_value_t = WORLD_WIDTH)]
    width: f32,

    #[arg(long, default_value_t = WORLD_HEIGHT)]
    height: f32,

    /// JSON file with config overrides
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override a single config field, e.g. `--set attractionForce=0.05`
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    overrides: Vec<String>,

    /// Write the final state as JSON
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Log a status line every N frames (0 disables)
    #[arg(long, default_value_t = 60)]
    report_every: u64,
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        log::error!("{}", e);
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), SimError> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    for entry in &args.overrides {
        apply_override(&mut config, entry)?;
    }

    let population = usize::try_from(args.people).map_err(|_| SimError::NegativePopulation(args.people))?;
    let seed = args.seed.unwrap_or_else(time_seed);
    let bounds = Bounds::new(args.width, args.height);

    log::info!("Birthday Swarm (native) starting...");
    let mut sim = Simulation::new(seed, bounds, population, config);
    println!("{} people, chance of a shared birthday: {}", population, sim.probability());

    let mut renderer = LogRenderer::new();
    let mut clock = FrameClock::new(args.fps);
    let mut last = Instant::now();
    let mut frames_run = 0;

    while frames_run < args.ticks {
        let due = if args.fps == 0 {
            1
        } else {
            let now = Instant::now();
            let due = clock.advance(now.duration_since(last).as_secs_f64());
            last = now;
            due
        };

        for _ in 0..due {
            if frames_run >= args.ticks {
                break;
            }
            sim.frame(&mut renderer);
            frames_run += 1;

            if args.report_every > 0 && frames_run % args.report_every == 0 {
                println!("tick {:>6}  matches: {}", frames_run, sim.last_report().status_label());
            }
        }

        if args.fps != 0 && due == 0 {
            std::thread::sleep(Duration::from_secs_f64(clock.period() / 4.0));
        }
    }

    let report = sim.last_report();
    println!("final: {}", report.status_label());
    if let Some(banner) = report.banner() {
        println!("{banner}");
    }

    if let Some(path) = &args.snapshot {
        sim.write_snapshot(path)?;
    }
    Ok(())
}

/// Parse `FIELD=VALUE` and write it into the config
fn apply_override(config: &mut Config, entry: &str) -> Result<(), SimError> {
    let (field, value) = entry
        .split_once('=')
        .ok_or_else(|| SimError::InvalidOverride(entry.to_string()))?;
    let value: f32 = value
        .trim()
        .parse()
        .map_err(|_| SimError::InvalidOverride(entry.to_string()))?;
    config.set(field.trim(), value)
}

fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
