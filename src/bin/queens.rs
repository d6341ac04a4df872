use std::io;
use std::process::exit;

use clap::Parser;
use log::{error, info, LevelFilter};

use queens::{Config, QueensError, Report, Result, SequentialSolver, DEFAULT_QUEENS};

#[derive(Parser)]
#[command(
    name = "queens",
    version,
    about = "Counts N-Queens solutions with a sequential backtracking search"
)]
struct Cli {
    /// Number of queens, at most one value
    #[arg(value_name = "NUMBER_OF_QUEENS", allow_negative_numbers = true)]
    args: Vec<String>,

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
            eprintln!("Error: wrong number of parameters.\nUsage:\n  queens [number_of_queens]");
            exit(1);
        }
        Err(e) => {
            error!("{}", e);
            exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let (config, warning) = Config::sequential(&cli.args)?;
    if let Some(warning) = warning {
        eprintln!(
            "Error: {warning}.\n\
             Usage:\n  queens [number_of_queens]\n\
             number_of_queens should be > 0\n\
             Using default number of queens ({DEFAULT_QUEENS})."
        );
    }

    info!("queens {}", env!("CARGO_PKG_VERSION"));
    info!("Board size: {}", config.queens);

    let report = Report::measure(&SequentialSolver::new(), config.queens, None)?;

    let stdout = io::stdout().lock();
    if cli.json {
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
