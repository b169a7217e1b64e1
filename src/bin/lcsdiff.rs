use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lcs_diff::{Comparison, DiffError, FileDiff, LineEnding};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lcsdiff",
    version,
    about = "Compare text files line by line",
    long_about = "Compares an original file with one or more target files. \
    Each comparison computes a longest common subsequence of lines with \
    Hirschberg's linear-space algorithm and prints the aligned result: \
    '   ' unchanged, '-' only in the original, '+' only in the target, \
    '*' replaced."
)]
struct Cli {
    #[arg(index = 1, help = "The original file")]
    original: PathBuf,

    #[arg(index = 2, num_args = 0.., help = "Files to compare with the original")]
    targets: Vec<PathBuf>,

    #[arg(
        long,
        default_value_t = LineEnding::Platform,
        help = "Line delimiter: platform, lf or crlf"
    )]
    line_ending: LineEnding,

    #[arg(long, help = "Print per-target op counts to stderr")]
    summary: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn print_diffs(diffs: &[FileDiff], summary: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for diff in diffs {
        writeln!(out, "{diff}")?;
        if summary {
            eprintln!("{}: {}", diff.target().display(), diff.summary());
        }
    }
    out.flush()
}

fn run(cli: Cli) -> Result<(), DiffError> {
    let diffs = Comparison::new()
        .with_line_ending(cli.line_ending)
        .run(&cli.original, &cli.targets)?;
    print_diffs(&diffs, cli.summary).map_err(DiffError::Output)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("lcsdiff: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
