use std::process::ExitCode;
use std::time::Instant;

use choice_dp::reference::exhaustive_best_choices;
use choice_dp::utils::distinct_anchors;
use choice_dp::walks::{random_walk, seeded_rng, simple_random_walk};
use choice_dp::{ChoiceEngine, Path, Strategy};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "choice_probe",
    about = "Pick representative break-points on random walks and measure the solvers"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Select break-points on one seeded random walk and print the result.
    Walk(WalkArgs),
    /// Time both strategies over increasing path lengths and check they agree.
    Scale(ScaleArgs),
}

#[derive(Args)]
struct WalkArgs {
    /// Number of points in the walk.
    #[arg(long, default_value_t = 20)]
    steps: usize,
    /// Choice budget.
    #[arg(long, default_value_t = 7)]
    choices: usize,
    /// Dimension of the walk; 1 gives an integer-valued walk.
    #[arg(long, default_value_t = 1)]
    dim: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, value_enum, default_value_t = StrategyArg::Memoized)]
    strategy: StrategyArg,
    /// Emit a JSON object instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ScaleArgs {
    /// Path lengths to probe.
    #[arg(long, value_delimiter = ',', default_values_t = [16, 64, 256, 512, 1024])]
    sizes: Vec<usize>,
    /// Choice budget, clamped to the path length.
    #[arg(long, default_value_t = 8)]
    choices: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Largest path length also checked against the exhaustive reference.
    #[arg(long, default_value_t = 9)]
    verify_limit: usize,
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

#[derive(Copy, Clone, ValueEnum)]
enum StrategyArg {
    Memoized,
    Layered,
}

impl From<StrategyArg> for Strategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Memoized => Strategy::Memoized,
            StrategyArg::Layered => Strategy::Layered,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

#[derive(Serialize)]
struct WalkReport {
    steps: usize,
    dim: usize,
    seed: u64,
    strategy: &'static str,
    choices: Vec<usize>,
    anchors: Vec<usize>,
    cost: f64,
    cost_cells: usize,
    choice_cells: usize,
}

#[derive(Serialize, Clone)]
struct Measurement {
    strategy: &'static str,
    len: usize,
    n_choices: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    cache_cells: usize,
    cost: f64,
    status: VerificationStatus,
    detail: Option<String>,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
enum VerificationStatus {
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Walk(args) => run_walk(&args),
        Command::Scale(args) => run_scale(&args),
    }
}

fn run_walk(args: &WalkArgs) -> ExitCode {
    if args.steps == 0 || args.dim == 0 {
        eprintln!("choice_probe: --steps and --dim must be positive");
        return ExitCode::from(2);
    }
    let mut rng = seeded_rng(args.seed);
    let path = if args.dim == 1 {
        simple_random_walk(&mut rng, args.steps)
    } else {
        random_walk(&mut rng, args.steps, args.dim)
    };
    let strategy = Strategy::from(args.strategy);
    let engine = match choice_dp::ChoiceEngineBuilder::new(&path)
        .with_choices(args.choices)
        .with_strategy(strategy)
        .build()
    {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("choice_probe: {err}");
            return ExitCode::from(2);
        }
    };

    let (choices, cost, stats) = engine.run_with_stats();
    info!(steps = args.steps, choices = args.choices, cost, "walk summarised");

    if args.json {
        let report = WalkReport {
            steps: args.steps,
            dim: args.dim,
            seed: args.seed,
            strategy: strategy.as_str(),
            anchors: distinct_anchors(&choices),
            choices,
            cost,
            cost_cells: stats.cost_cells,
            choice_cells: stats.choice_cells,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("choice_probe output error: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{path}");
        println!("{choices:?}");
        println!("{cost}");
        println!("cache cells: {}", stats.total());
    }
    ExitCode::SUCCESS
}

fn run_scale(args: &ScaleArgs) -> ExitCode {
    let mut sys = System::new();
    let mut measurements = Vec::new();
    let total = args.sizes.len();

    for (idx, &len) in args.sizes.iter().enumerate() {
        if len == 0 {
            warn!("skipping empty path length");
            continue;
        }
        let n_choices = args.choices.min(len);
        eprint!("[{}/{}] n={len}, m={n_choices}... ", idx + 1, total);
        let path = simple_random_walk(&mut seeded_rng(args.seed.wrapping_add(len as u64)), len);

        let memo = measure(&path, n_choices, Strategy::Memoized, &mut sys);
        let layered = measure(&path, n_choices, Strategy::Layered, &mut sys);

        let mut status = VerificationStatus::Passed;
        let mut detail = None;
        if memo.0 != layered.0 || memo.1.cost.to_bits() != layered.1.cost.to_bits() {
            status = VerificationStatus::Failed;
            detail = Some(format!(
                "strategies disagree: {:?}/{} vs {:?}/{}",
                memo.0, memo.1.cost, layered.0, layered.1.cost
            ));
        } else if len <= args.verify_limit {
            let (ref_choices, ref_cost) = exhaustive_best_choices(&path, n_choices);
            if ref_choices != memo.0 || ref_cost.to_bits() != memo.1.cost.to_bits() {
                status = VerificationStatus::Failed;
                detail = Some(format!(
                    "expected {ref_choices:?}/{ref_cost}, got {:?}/{}",
                    memo.0, memo.1.cost
                ));
            }
        }

        eprintln!(
            "{} cost={}, memoized={:.3}s, layered={:.3}s",
            status.label(),
            memo.1.cost,
            memo.1.wall_s,
            layered.1.wall_s
        );
        for (_, mut m) in [memo, layered] {
            m.status = status;
            m.detail = detail.clone();
            measurements.push(m);
        }
    }

    let failed = measurements
        .iter()
        .filter(|m| m.status == VerificationStatus::Failed)
        .count();
    eprintln!(
        "{} measurements, {} failed",
        measurements.len(),
        failed
    );

    if let Err(err) = write_measurements(args.format, &measurements) {
        eprintln!("choice_probe output error: {err}");
        return ExitCode::FAILURE;
    }
    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn measure(
    path: &Path,
    n_choices: usize,
    strategy: Strategy,
    sys: &mut System,
) -> (Vec<usize>, Measurement) {
    let engine = ChoiceEngine::with_strategy(path, n_choices, strategy);
    let before = rss_kib(sys);
    let start = Instant::now();
    let (choices, cost, stats) = engine.run_with_stats();
    let duration = start.elapsed();
    let after = rss_kib(sys);
    debug!(strategy = strategy.as_str(), len = path.len(), ?duration, "measured");

    let measurement = Measurement {
        strategy: strategy.as_str(),
        len: path.len(),
        n_choices,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        cache_cells: stats.total(),
        cost,
        status: VerificationStatus::Passed,
        detail: None,
    };
    (choices, measurement)
}

fn write_measurements(format: OutputFormat, measurements: &[Measurement]) -> Result<(), String> {
    match format {
        OutputFormat::Csv => {
            println!("strategy,len,n_choices,wall_s,rss_delta_kib,cache_cells,cost,status,detail");
            for m in measurements {
                let detail = m
                    .detail
                    .as_ref()
                    .map(|s| s.replace('"', "'"))
                    .unwrap_or_default();
                println!(
                    "{},{},{},{:.3},{},{},{},{},\"{}\"",
                    m.strategy,
                    m.len,
                    m.n_choices,
                    m.wall_s,
                    m.rss_delta_kib,
                    m.cache_cells,
                    m.cost,
                    m.status.label(),
                    detail
                );
            }
            Ok(())
        }
        OutputFormat::Table => {
            println!(
                "{:<10}  {:>8}  {:>6}  {:>10}  {:>14}  {:>12}  {:>14}  {:<8}",
                "strategy", "len", "m", "wall_s", "rss_delta_kib", "cache_cells", "cost", "status"
            );
            println!("{:-<96}", "");
            for m in measurements {
                println!(
                    "{:<10}  {:>8}  {:>6}  {:>10.3}  {:>14}  {:>12}  {:>14}  {:<8}",
                    m.strategy,
                    m.len,
                    m.n_choices,
                    m.wall_s,
                    m.rss_delta_kib,
                    m.cache_cells,
                    m.cost,
                    m.status.label()
                );
            }
            Ok(())
        }
        OutputFormat::Json => {
            let text = serde_json::to_string_pretty(measurements).map_err(|e| e.to_string())?;
            println!("{text}");
            Ok(())
        }
    }
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}
