//! lem-in — route a colony of agents from the start room to the end room.
//!
//! Reads a colony file, echoes it in canonical form, then prints one line
//! per turn listing every move made that turn (`L<agent>-<room>`).  Logs go
//! to stderr so stdout holds only the report.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use lem_core::{SelectionStrategy, SolverConfig};
use lem_io::{CsvMoveWriter, TurnPrinter, parse_colony_file, render_colony, render_paths};
use lem_sim::{SimOutcome, solve};

#[derive(Parser)]
#[command(name = "lem-in")]
#[command(about = "Move every agent through the colony in as few turns as the path set allows")]
struct Cli {
    /// Colony file to solve
    file: PathBuf,

    /// Stop enumerating after this many candidate paths
    #[arg(long)]
    max_paths: Option<usize>,

    /// Fail if the agents have not all arrived after this many turns
    #[arg(long)]
    max_turns: Option<u64>,

    /// Path selection: max-paths or min-turns
    #[arg(long, default_value = "max-paths")]
    strategy: SelectionStrategy,

    /// Also list the enumerated and selected paths
    #[arg(long)]
    show_paths: bool,

    /// Write every move as a `turn,agent,room` row to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let t0 = Instant::now();

    // 1. Parse.
    let colony = parse_colony_file(&cli.file)?;
    debug!(
        file = %cli.file.display(),
        agents = colony.agent_count(),
        rooms = colony.room_count(),
        tunnels = colony.tunnel_count(),
        "colony loaded"
    );

    let config = SolverConfig {
        max_paths: cli.max_paths,
        max_turns: cli.max_turns,
        strategy:  cli.strategy,
    };

    // 2. Echo the colony, then stream the moves as each turn resolves.
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", render_colony(&colony))?;
    writeln!(out)?;

    let mut printer = TurnPrinter::new(&colony, &mut out);
    let solution = solve(&colony, &config, &mut printer)?;
    if let Some(e) = printer.take_error() {
        return Err(e).context("writing moves");
    }
    let elapsed = t0.elapsed();

    if solution.log.outcome == SimOutcome::NoRoute {
        info!("end room unreachable from start, no moves");
    }

    // 3. Optional path listings.
    if cli.show_paths {
        writeln!(out)?;
        write!(out, "{}", render_paths(&colony, "All paths from start to end:", &solution.paths))?;
        write!(out, "{}", render_paths(&colony, "Selected paths:", &solution.path_set))?;
    }
    out.flush()?;

    // 4. Optional CSV export.
    if let Some(path) = &cli.csv {
        let mut writer = CsvMoveWriter::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        writer.write_log(&colony, &solution.log)?;
        writer.finish()?;
        info!(rows = writer.rows_written(), path = %path.display(), "move CSV written");
    }

    info!(
        turns = solution.log.turn_count(),
        moves = solution.log.move_count(),
        paths = solution.path_set.len(),
        strategy = %config.strategy,
        elapsed_ms = elapsed.as_secs_f64() * 1e3,
        "solved"
    );
    Ok(())
}
