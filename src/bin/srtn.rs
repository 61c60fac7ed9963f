//! srtn: simulate SRTN scheduling for a process list and print the result.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use u_srtn::models::{MetricsReport, Process, Tick};
use u_srtn::scheduler::{ReadyQueueKind, Simulation, SrtnScheduler};
use u_srtn::workload::{self, WorkloadConfig};

/// Simulate preemptive Shortest Remaining Time Next scheduling.
#[derive(Parser)]
#[command(name = "srtn")]
struct Cli {
    /// Process list: JSON array (`.json`) or `id arrival burst` rows.
    input: Option<PathBuf>,

    /// Generate this many random processes instead of reading a file.
    #[arg(long, value_name = "N", conflicts_with = "input")]
    random: Option<usize>,

    /// Seed for --random.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Latest arrival tick for --random.
    #[arg(long, default_value_t = 10)]
    max_arrival: Tick,

    /// Longest burst for --random.
    #[arg(long, default_value_t = 10)]
    max_burst: Tick,

    /// Ready-set structure.
    #[arg(long, value_enum, default_value_t = QueueArg::Scan)]
    ready_queue: QueueArg,

    /// Print the full report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum QueueArg {
    Scan,
    Heap,
}

impl From<QueueArg> for ReadyQueueKind {
    fn from(arg: QueueArg) -> Self {
        match arg {
            QueueArg::Scan => ReadyQueueKind::Scan,
            QueueArg::Heap => ReadyQueueKind::Heap,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    processes: &'a [Process],
    simulation: &'a Simulation,
    metrics: &'a MetricsReport,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let processes = load_processes(cli)?;

    let scheduler = SrtnScheduler::new().with_ready_queue(cli.ready_queue.into());
    let sim = scheduler.simulate_validated(&processes)?;
    let metrics = sim.metrics(&processes)?;

    if cli.json {
        let report = Report {
            processes: &processes,
            simulation: &sim,
            metrics: &metrics,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_gantt(&sim, &metrics));
        println!();
        print!("{}", render_table(&metrics));
    }

    Ok(())
}

fn load_processes(cli: &Cli) -> anyhow::Result<Vec<Process>> {
    if let Some(count) = cli.random {
        let config = WorkloadConfig::new(count)
            .with_max_arrival(cli.max_arrival)
            .with_max_burst(cli.max_burst);
        let mut rng = StdRng::seed_from_u64(cli.seed);
        return Ok(workload::random_processes(&mut rng, &config));
    }

    let Some(path) = cli.input.as_ref() else {
        bail!("missing required argument: <INPUT> (or use --random <N>)");
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let processes = if path.extension().is_some_and(|ext| ext == "json") {
        workload::from_json(&text)
    } else {
        workload::from_table(&text)
    }
    .with_context(|| format!("failed to parse {}", path.display()))?;

    Ok(processes)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

/// One row per process: `x` first run, `#` later runs, `.` otherwise.
fn render_gantt(sim: &Simulation, metrics: &MetricsReport) -> String {
    let width = sim.timeline.makespan().max(0) as usize;
    let label_width = metrics
        .processes
        .iter()
        .map(|m| m.id.len())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut out = String::new();
    let _ = write!(out, "{:>label_width$} ", "t");
    for tick in 0..width {
        let _ = write!(out, "{}", tick % 10);
    }
    out.push('\n');

    for m in &metrics.processes {
        let mut row = vec!['.'; width];
        for tick in sim.timeline.events_for(&m.id) {
            row[tick as usize] = '#';
        }
        if let Some(cell) = row.get_mut(m.start as usize) {
            *cell = 'x';
        }
        let _ = writeln!(out, "{:>label_width$} {}", m.id, row.into_iter().collect::<String>());
    }
    out
}

fn render_table(metrics: &MetricsReport) -> String {
    const HEADERS: [&str; 7] = [
        "Process",
        "Arrival",
        "Burst",
        "Start",
        "Finish",
        "Turnaround",
        "Waiting",
    ];

    let mut out = String::new();
    for h in HEADERS {
        let _ = write!(out, "{h:>11}");
    }
    out.push('\n');

    for m in &metrics.processes {
        let _ = writeln!(
            out,
            "{:>11}{:>11}{:>11}{:>11}{:>11}{:>11}{:>11}",
            m.id, m.arrival, m.burst, m.start, m.finish, m.turnaround, m.waiting
        );
    }

    let _ = writeln!(
        out,
        "{:>11}{:>11}{:>11}{:>11}{:>11}{:>11.2}{:>11.2}",
        "AVERAGE", "-", "-", "-", "-", metrics.avg_turnaround, metrics.avg_waiting
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use u_srtn::scheduler::simulate;

    fn preemption_case() -> (Simulation, MetricsReport) {
        let processes = vec![Process::from(("P1", 0, 5)), Process::from(("P2", 1, 3))];
        let sim = simulate(&processes);
        let metrics = sim.metrics(&processes).unwrap();
        (sim, metrics)
    }

    #[test]
    fn test_render_gantt_marks_first_run_once() {
        let (sim, metrics) = preemption_case();
        let gantt = render_gantt(&sim, &metrics);
        let lines: Vec<&str> = gantt.lines().collect();
        assert_eq!(lines[0], "   t 01234567");
        assert_eq!(lines[1], "  P1 x...####");
        assert_eq!(lines[2], "  P2 .x##....");
    }

    #[test]
    fn test_render_table_averages() {
        let (_, metrics) = preemption_case();
        let table = render_table(&metrics);
        let last = table.lines().last().unwrap();
        assert!(last.trim_start().starts_with("AVERAGE"));
        assert!(last.ends_with("       5.50       1.50"));
    }
}
