//! RV32I single-cycle simulator CLI.
//!
//! This binary provides the command-line entry point for the simulator. It
//! performs:
//! 1. **Setup:** Reads JSON configuration (or defaults) and sizes the core.
//! 2. **Loading:** Places an ELF or flat binary image into memory.
//! 3. **Run loop:** Ticks the core until the program halts or the cycle
//!    budget runs out, then reports statistics and the register file.

use clap::{Parser, Subcommand};
use std::process;

use rv32sc_core::Config;
use rv32sc_core::sim::{HaltReason, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "rv32sc",
    author,
    version,
    about = "RV32I single-cycle simulator",
    long_about = "Run an RV32I program on the single-cycle core.\n\nImages may be RV32 ELF executables (loaded at their link addresses) or flat binaries (loaded at the configured start PC). The run ends when the program parks itself in a tight loop or the cycle budget runs out.\n\nExamples:\n  rv32sc run -f prog.elf\n  rv32sc run -f prog.bin --config board.json --cycles 100000\n  rv32sc run -f prog.elf --trace --stats summary,control"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program image to completion.
    Run {
        /// Program image to execute (ELF or flat binary).
        #[arg(short, long)]
        file: String,

        /// JSON configuration file (defaults used when omitted).
        #[arg(short, long)]
        config: Option<String>,

        /// Cycle budget (runs until a tight loop when omitted).
        #[arg(long)]
        cycles: Option<u64>,

        /// Enable per-instruction execution tracing.
        #[arg(long)]
        trace: bool,

        /// Statistics sections to print (comma separated), e.g. summary,control.
        #[arg(long, value_delimiter = ',')]
        stats: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            config,
            cycles,
            trace,
            stats,
        } => cmd_run(&file, config.as_deref(), cycles, trace, &stats),
    }
}

/// Runs the simulator: loads the image, loops on `tick` until the program
/// halts, then prints statistics and a register dump.
fn cmd_run(
    file: &str,
    config_path: Option<&str>,
    cycles: Option<u64>,
    trace: bool,
    stats: &[String],
) {
    init_tracing(trace);

    let mut config = match config_path {
        Some(path) => match Config::from_json_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error reading config: {e}");
                process::exit(1);
            }
        },
        None => Config::default(),
    };
    if trace {
        config.general.trace_instructions = true;
    }

    let mut sim = match Simulator::new(&config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    println!("[*] Loading: {file}");
    if let Err(e) = sim.load_program(file) {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    }

    println!(
        "    Start PC: {:#010x}  RAM: {} KiB",
        sim.pc,
        config.memory.ram_words * 4 / 1024
    );

    match sim.run(cycles) {
        HaltReason::TightLoop(pc) => println!("\n[*] Halted in tight loop at {pc:#010x}"),
        HaltReason::CycleLimit => println!("\n[*] Cycle limit reached at {:#010x}", sim.pc),
    }

    sim.stats.print_sections(stats);
    println!();
    sim.datapath.gpr.dump();
}

/// Initializes the `tracing` subscriber for the process.
///
/// `RUST_LOG` takes precedence; otherwise `--trace` selects debug-level
/// output and the default is info.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
