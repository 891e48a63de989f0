//! pagesim command-line front end.
//!
//! Usage: pagesim [OPTIONS] [PAGES]...
//!
//! Runs a replacement policy over the given pages and prints the trace.
//! Set `RUST_LOG=debug` (or `trace`) to see engine logging on stderr.

use std::process;

use clap::{Parser, ValueEnum};
use log::info;

use pagesim::{
    compare, reference_string, simulate, Policy, SimulationConfig, SimulationResult, Slot,
    DEFAULT_FRAME_COUNT,
};

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// The `{"steps": [...], "faults": n}` response object.
    Json,
    /// One line per access.
    Table,
    /// Statistics and trace fingerprint only.
    Summary,
}

/// Simulate FIFO, LRU and OPT page replacement.
#[derive(Debug, Parser)]
#[command(name = "pagesim", version, about)]
struct Cli {
    /// Number of physical frames.
    #[arg(short, long, default_value_t = DEFAULT_FRAME_COUNT as i64, allow_negative_numbers = true)]
    frames: i64,

    /// Replacement policy: FIFO, LRU or OPT.
    #[arg(short, long, default_value = "FIFO")]
    policy: String,

    /// Run all three policies over the same pages.
    #[arg(long)]
    compare: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Reference string, one page number per argument.
    #[arg(allow_negative_numbers = true)]
    pages: Vec<i64>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> pagesim::Result<()> {
    let config = SimulationConfig::from_raw(cli.frames, &cli.policy)?;
    let reference = reference_string(&cli.pages);
    info!(
        "simulating {} accesses with {} frames",
        reference.len(),
        config.frame_count()
    );

    let results = if cli.compare {
        compare(&reference, config.frame_count())?
    } else {
        vec![(
            config.policy(),
            simulate(&reference, config.frame_count(), config.policy())?,
        )]
    };

    for (policy, result) in &results {
        print_result(*policy, result, cli.format, cli.compare)?;
    }
    Ok(())
}

fn print_result(
    policy: Policy,
    result: &SimulationResult,
    format: Format,
    labelled: bool,
) -> pagesim::Result<()> {
    match format {
        Format::Json if labelled => println!("{}: {}", policy, result.to_json()?),
        Format::Json => println!("{}", result.to_json_pretty()?),
        Format::Table => {
            println!("{}", policy);
            for (position, step) in result.trace.iter().enumerate() {
                println!(
                    "{:>4}  page {:>4}  [{}]{}",
                    position,
                    step.page,
                    render_frames(&step.frames),
                    if step.page_fault { "  fault" } else { "" }
                );
            }
            println!("Total page faults: {}", result.faults);
        }
        Format::Summary => println!(
            "{:<4} {}  fingerprint: {:08x}",
            policy,
            result.stats(),
            result.trace.fingerprint()
        ),
    }
    Ok(())
}

fn render_frames(frames: &[Slot]) -> String {
    frames
        .iter()
        .map(|slot| match slot {
            Some(page) => format!("{:>3}", page),
            None => "  -".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
