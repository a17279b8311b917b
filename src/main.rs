#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use torus_life::{LifeConfig, World};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Run Conway's Game of Life on a toroidal grid without a display.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML config file; CLI flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    columns: Option<u32>,

    #[arg(long)]
    rows: Option<u32>,

    /// Number of generations to run
    #[arg(short, long)]
    generations: Option<u64>,

    /// Probability that random seeding marks a cell alive
    #[arg(short, long)]
    density: Option<f64>,

    /// Seed for reproducible random seeding
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print a status line every N generations
    #[arg(short, long)]
    interval: Option<u64>,

    /// Pause between generations, in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Print the final grid ('#' alive, '.' dead)
    #[arg(long)]
    show: bool,
}

fn resolve_config(args: &Args) -> Result<LifeConfig> {
    let mut config = match &args.config {
        Some(path) => LifeConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => LifeConfig::default(),
    };
    if let Some(n) = args.columns {
        config = config.columns(n);
    }
    if let Some(n) = args.rows {
        config = config.rows(n);
    }
    if let Some(n) = args.generations {
        config = config.generations(n);
    }
    if let Some(d) = args.density {
        config = config.density(d);
    }
    if let Some(s) = args.seed {
        config = config.seed(s);
    }
    if let Some(n) = args.interval {
        config = config.report_interval(n);
    }
    if let Some(ms) = args.tick_ms {
        config = config.tick_ms(ms);
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn render(world: &World) -> String {
    let columns = world.columns() as usize;
    let mut out = String::with_capacity((columns + 1) * world.rows() as usize);
    for y in 0..world.rows() {
        for x in 0..world.columns() {
            out.push(if world.get_cell(x as i64, y as i64) { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}

fn run(config: &LifeConfig, show: bool) -> Result<()> {
    let mut world = World::from_config(config).context("building world")?;
    let tick = Duration::from_millis(config.tick_ms);
    println!(
        "{}x{} torus, {} live cells at generation 0",
        world.columns(),
        world.rows(),
        world.live_count()
    );

    let mut total = Duration::ZERO;
    let mut phase = Duration::ZERO;
    for generation in 1..=config.generations {
        let start = Instant::now();
        world.next();
        let elapsed = start.elapsed();
        total += elapsed;
        phase += elapsed;

        if generation % config.report_interval == 0 || generation == config.generations {
            let phase_ms = phase.as_secs_f64() * 1000.0;
            println!(
                "Generation {generation}: pop = {} | {phase_ms:.3} ms since last report",
                world.live_count()
            );
            phase = Duration::ZERO;
        }
        if !tick.is_zero() {
            std::thread::sleep(tick);
        }
    }

    let total_ms = total.as_secs_f64() * 1000.0;
    let avg_ms = if config.generations == 0 {
        0.0
    } else {
        total_ms / config.generations as f64
    };
    println!("\n--- Summary ({} generations) ---", config.generations);
    println!("final pop = {}", world.live_count());
    println!("{total_ms:.3} ms total, {avg_ms:.6} ms/generation");

    if show {
        print!("{}", render(&world));
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "torus_life=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = resolve_config(&args)?;
    run(&config, args.show)
}
