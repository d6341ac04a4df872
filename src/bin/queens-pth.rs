use std::io;
use std::process::exit;

use clap::{Parser, ValueEnum};
use log::{error, info, LevelFilter};

use queens::{
    Config, NaiveThreadPool, ParallelSolver, QueensError, RayonThreadPool, Report, Result,
    SharedQueueThreadPool, ThreadPool, DEFAULT_QUEENS, DEFAULT_THREADS,
};

const USAGE: &str = "Usage:\n  queens-pth [number_of_queens] [number_of_threads]";

#[derive(Clone, Copy, ValueEnum)]
enum Pool {
    /// One thread per worker
    Naive,
    /// Fixed workers draining a shared queue
    SharedQueue,
    /// Dedicated rayon pool
    Rayon,
}

#[derive(Parser)]
#[command(
    name = "queens-pth",
    version,
    about = "Counts N-Queens solutions with a fork-join parallel search"
)]
struct Cli {
    /// Number of queens and number of threads, at most two values
    #[arg(value_name = "ARGS", allow_negative_numbers = true)]
    args: Vec<String>,

    /// Thread pool the workers run on
    #[arg(long, value_enum, default_value = "naive")]
    pool: Pool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(level_for(cli.verbose))
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    match run(cli) {
        Ok(()) => {}
        Err(QueensError::InvalidArgumentCount { .. }) => {
            eprintln!("Error: wrong number of parameters.\n{USAGE}");
            exit(1);
        }
        Err(e) => {
            error!("{}", e);
            exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let (config, warning) = Config::parallel(&cli.args)?;
    if let Some(warning) = warning {
        eprintln!(
            "Error: {warning}.\n{USAGE}\n\
             number_of_queens  should be > 0\n\
             number_of_threads should be > 0\n\
             number_of_threads can't be bigger than number_of_queens\n\
             Using default number of queens ({DEFAULT_QUEENS}) and threads ({DEFAULT_THREADS})."
        );
    }

    let num_cpus = num_cpus::get();
    info!("queens-pth {}", env!("CARGO_PKG_VERSION"));
    info!("Board size: {}, threads: {}", config.queens, config.threads);
    if config.threads > num_cpus {
        info!(
            "{} threads requested but only {} cores available",
            config.threads, num_cpus
        );
    }

    match cli.pool {
        Pool::Naive => run_with_pool::<NaiveThreadPool>(config, cli.json),
        Pool::SharedQueue => run_with_pool::<SharedQueueThreadPool>(config, cli.json),
        Pool::Rayon => run_with_pool::<RayonThreadPool>(config, cli.json),
    }
}

fn run_with_pool<P: ThreadPool>(config: Config, json: bool) -> Result<()> {
    let solver = ParallelSolver::<P>::new(config.threads)?;
    let report = Report::measure(&solver, config.queens, Some(config.threads))?;

    let stdout = io::stdout().lock();
    if json {
        report.write_json(stdout)
    } else {
        report.write_text(stdout)
    }
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
