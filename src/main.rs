//! vmsim CLI.
//!
//! Usage:
//!   vmsim sweep                          # compare FIFO/LRU/LFU across patterns
//!   vmsim sweep --frames 4 --json        # smaller table, JSON output
//!   vmsim schedule proc_a.txt proc_b.txt # FCFS over process files
//!   vmsim schedule --scheduler rr --quantum 300 proc_a.txt

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use vmsim::driver::{self, SweepConfig};
use vmsim::sched::{fcfs, round_robin, OsModel, Process, DEFAULT_QUANTUM};

#[derive(Parser)]
#[command(name = "vmsim", version, about = "OS resource-management simulator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare page replacement policies across reference patterns
    Sweep {
        /// Number of physical memory frames available
        #[arg(long, default_value_t = 8)]
        frames: usize,

        /// Number of distinct pages in virtual memory
        #[arg(long, default_value_t = 16)]
        num_pages: u32,

        /// Length of the reference sequence for each pattern
        #[arg(long, default_value_t = 1000)]
        sequence_length: usize,

        /// Seed for the sequence generators
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Emit results as JSON instead of a text table
        #[arg(long)]
        json: bool,
    },

    /// Run process files under a CPU scheduler and report timing metrics
    Schedule {
        /// Scheduling discipline
        #[arg(long, value_enum, default_value = "fcfs")]
        scheduler: SchedulerKind,

        /// Round-Robin time quantum in simulated nanoseconds
        #[arg(long, default_value_t = DEFAULT_QUANTUM)]
        quantum: u64,

        /// Process files, one instruction per line ending in its cost
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SchedulerKind {
    Fcfs,
    Rr,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Sweep {
            frames,
            num_pages,
            sequence_length,
            seed,
            json,
        } => run_sweep(
            SweepConfig {
                frames,
                num_pages,
                sequence_length,
                seed,
            },
            json,
        ),
        Command::Schedule {
            scheduler,
            quantum,
            files,
        } => run_schedule(scheduler, quantum, &files),
    }
}

fn run_sweep(config: SweepConfig, json: bool) -> Result<()> {
    println!(
        "Comparing policies: {} frames, {} pages, {} references per pattern (seed {})",
        config.frames, config.num_pages, config.sequence_length, config.seed
    );

    let results = driver::compare_patterns(&config).context("running policy sweep")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", driver::render_table(&results));
    }
    Ok(())
}

fn run_schedule(scheduler: SchedulerKind, quantum: u64, files: &[PathBuf]) -> Result<()> {
    let mut os = OsModel::new(quantum);
    let mut processes = HashMap::new();

    for (i, path) in files.iter().enumerate() {
        let id = i as u32 + 1;
        let proc = Process::from_file(id, path)?;
        processes.insert(id, proc);
        os.add_process(id);
    }

    match scheduler {
        SchedulerKind::Fcfs => {
            println!("Running FCFS scheduler...");
            fcfs(&mut os, &mut processes);
        }
        SchedulerKind::Rr => {
            println!("Running Round-Robin scheduler with quantum = {quantum} ns...");
            round_robin(&mut os, &mut processes);
        }
    }

    println!("\nProcess metrics:");
    for entry in &os.process_table {
        let turnaround = entry.turnaround_time().unwrap_or(0);
        let waiting = entry.waiting_time().unwrap_or(0);
        println!(
            "Process {}: turnaround = {} ns, cpu = {} ns, waiting = {} ns",
            entry.process_id, turnaround, entry.cpu_time, waiting
        );
    }
    println!("Total simulation time: {} ns", os.current_time);
    Ok(())
}
