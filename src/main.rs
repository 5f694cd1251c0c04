//! Headless CLI for the Game of Life simulation engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_sim::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{
        create_example_patterns, evolve_generations, load_pattern_from_file,
        save_pattern_to_file, Grid, RuleSet,
    },
    utils::{ColorOutput, GridFormatter},
    SimulationDriver,
};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "game_of_life_sim")]
#[command(about = "Configurable Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a simulation with the periodic ticker, printing each frame
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Starting pattern file (overrides config)
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Grid rows for a blank start (overrides config)
        #[arg(short, long)]
        rows: Option<usize>,

        /// Grid columns for a blank start (overrides config)
        #[arg(long)]
        columns: Option<usize>,

        /// Tick interval in milliseconds (overrides config)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Generations to run before exiting (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,
    },

    /// Advance a pattern a fixed number of generations without the ticker
    Step {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Starting pattern file (overrides config)
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Generations to advance (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Write the final pattern to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print every intermediate generation
        #[arg(long)]
        show_evolution: bool,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            pattern,
            rows,
            columns,
            interval,
            generations,
        } => run_command(config, pattern, rows, columns, interval, generations),
        Commands::Step {
            config,
            pattern,
            generations,
            output,
            show_evolution,
        } => step_command(config, pattern, generations, output, show_evolution),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn load_settings(config_path: &PathBuf, overrides: CliOverrides) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    settings.merge_with_cli(&overrides);
    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

/// Build a driver seeded from the configured pattern, or a blank grid
fn build_driver(settings: &Settings) -> Result<SimulationDriver> {
    let sim = &settings.simulation;
    let mut driver = SimulationDriver::new(sim.rows, sim.columns)?;

    if let Some(ref pattern_file) = settings.input.pattern_file {
        let pattern = load_pattern_from_file(pattern_file)
            .with_context(|| format!("Failed to load pattern from {}", pattern_file.display()))?;
        driver.resize(pattern.rows, pattern.columns)?;
        for (row, column) in pattern.live_cells() {
            driver.toggle_cell(row, column);
        }
    }

    driver.configure(
        sim.neighborhood,
        RuleSet::new(sim.survive.iter().copied(), sim.birth.iter().copied()),
    );
    Ok(driver)
}

fn run_command(
    config_path: PathBuf,
    pattern: Option<PathBuf>,
    rows: Option<usize>,
    columns: Option<usize>,
    interval: Option<u64>,
    generations: Option<usize>,
) -> Result<()> {
    let settings = load_settings(
        &config_path,
        CliOverrides {
            rows,
            columns,
            interval_ms: interval,
            generations,
            pattern_file: pattern,
        },
    )?;

    let mut driver = build_driver(&settings)?;
    let target = settings.simulation.generations as u64;

    println!(
        "{}",
        ColorOutput::info(&format!(
            "Playing {} generation(s) at {} ms per tick",
            target, settings.simulation.interval_ms
        ))
    );
    println!("{}", GridFormatter::format_grid_compact(&driver.grid()));

    if target == 0 {
        return Ok(());
    }

    let (tx, rx) = mpsc::channel();
    driver.subscribe(move |frame| {
        let _ = tx.send(frame.clone());
    });

    driver.start(Duration::from_millis(settings.simulation.interval_ms))?;
    for frame in rx {
        match settings.output.format {
            OutputFormat::Text => println!("{}", GridFormatter::format_frame(&frame)),
            OutputFormat::Json => {
                let json = serde_json::to_string(&frame).context("Failed to serialize frame")?;
                println!("{}", json);
            }
        }
        if frame.iterations >= target {
            break;
        }
    }
    driver.stop();

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Finished after {} generation(s), {} cell(s) alive",
            driver.iterations(),
            driver.grid().live_count()
        ))
    );
    Ok(())
}

fn step_command(
    config_path: PathBuf,
    pattern: Option<PathBuf>,
    generations: Option<usize>,
    output: Option<PathBuf>,
    show_evolution: bool,
) -> Result<()> {
    let settings = load_settings(
        &config_path,
        CliOverrides {
            generations,
            pattern_file: pattern,
            ..CliOverrides::default()
        },
    )?;
    let sim = &settings.simulation;

    let mut grid = match settings.input.pattern_file {
        Some(ref pattern_file) => load_pattern_from_file(pattern_file)
            .with_context(|| format!("Failed to load pattern from {}", pattern_file.display()))?,
        None => Grid::new(sim.rows, sim.columns)?,
    };
    let rules = RuleSet::new(sim.survive.iter().copied(), sim.birth.iter().copied());

    println!("Generation 0 (Living: {}):", grid.live_count());
    println!("{}", GridFormatter::format_grid_compact(&grid));

    if show_evolution {
        for generation in 1..=sim.generations {
            grid = evolve_generations(grid, sim.neighborhood, &rules, 1);
            println!("Generation {} (Living: {}):", generation, grid.live_count());
            println!("{}", GridFormatter::format_grid_compact(&grid));
        }
    } else {
        grid = evolve_generations(grid, sim.neighborhood, &rules, sim.generations);
        println!(
            "Generation {} (Living: {}):",
            sim.generations,
            grid.live_count()
        );
        println!("{}", GridFormatter::format_grid_compact(&grid));
    }

    if let Some(output_path) = output {
        save_pattern_to_file(&grid, &output_path)
            .with_context(|| format!("Failed to save pattern to {}", output_path.display()))?;
        println!(
            "{}",
            ColorOutput::success(&format!("Pattern saved to {}", output_path.display()))
        );
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("input/patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let default_settings = Settings::default();
        default_settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&patterns_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    println!("{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration in {}", config_path.display());
    println!("2. Run: cargo run -- run --pattern input/patterns/glider.txt");

    Ok(())
}
