use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use lcs_diff::{align, DiffOp, Hirschberg, HirschbergBuilder};
use serde::Serialize;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() -> ExitCode {
    let options = Options::parse();

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("lcs-diff scaling probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Runs the Hirschberg LCS and the aligner over growing line sequences:");
    eprintln!(
        "  • Correctness: LCS length matches a full-table DP (up to size {})",
        options.verify_limit
    );
    eprintln!("  • Conservation: the op stream reproduces both inputs");
    eprintln!("  • Space: row cells stay 4·(|y|+1) while |x| grows");
    eprintln!();
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/2] Square inputs (|x| = |y|)...");
    measurements.extend(run_square(&options, &mut sys));
    eprintln!();

    eprintln!("[2/2] Growing |x| with fixed |y| = {}...", FIXED_Y);
    measurements.extend(run_fixed_y(&options, &mut sys));
    eprintln!();

    print_summary(&measurements, &options);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match options.format.write(&mut out, &measurements) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("scale_probe output error: {err}");
            ExitCode::FAILURE
        }
    }
}

const FIXED_Y: usize = 256;

#[derive(Parser)]
#[command(
    name = "scale_probe",
    about = "Measure Hirschberg LCS time, memory and row cells over growing inputs",
    after_help = "Examples:\n  \
    cargo run --features probe --bin scale_probe\n  \
    cargo run --features probe --bin scale_probe -- --format table --verify-limit 256"
)]
struct Options {
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv, help = "Output format")]
    format: OutputFormat,

    #[arg(
        long,
        default_value_t = 512,
        help = "Largest |x| verified against the full-table DP"
    )]
    verify_limit: usize,

    #[arg(long, help = "Work size for overlapping row profiles (feature `parallel`)")]
    parallel_threshold: Option<usize>,
}

impl Options {
    fn solver(&self) -> Hirschberg {
        let builder = HirschbergBuilder::new();
        match self.parallel_threshold {
            Some(t) => builder.with_parallel_threshold(t).build(),
            None => builder.build(),
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn write<W: Write>(self, out: &mut W, measurements: &[Measurement]) -> io::Result<()> {
        match self {
            OutputFormat::Csv => write_csv(out, measurements),
            OutputFormat::Table => write_table(out, measurements),
            OutputFormat::Json => write_json(out, measurements),
        }
    }
}

#[derive(Clone, Serialize)]
struct Measurement {
    scenario: &'static str,
    #[serde(rename = "size")]
    size_desc: String,
    wall_s: f64,
    rss_delta_kib: u64,
    row_cells: usize,
    max_depth: usize,
    #[serde(rename = "status")]
    verification_status: VerificationStatus,
    #[serde(rename = "detail")]
    verification_detail: Option<String>,
}

#[derive(Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn run_square(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[256, 512, 1024, 2048, 4096, 8192, 16384];
    let total = SIZES.len();
    SIZES
        .iter()
        .enumerate()
        .map(|(idx, &len)| {
            eprint!("      [{}/{}] |x| = |y| = {}... ", idx + 1, total, len);
            let x = synthetic_lines(len, 7, 0);
            let y = synthetic_lines(len, 7, 3);
            let m = probe("square", format!("x={len},y={len}"), options, sys, &x, &y);
            report(&m);
            m
        })
        .collect()
}

fn run_fixed_y(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[256, 1024, 4096, 16384, 65536];
    let total = SIZES.len();
    let y = synthetic_lines(FIXED_Y, 5, 1);
    SIZES
        .iter()
        .enumerate()
        .map(|(idx, &len)| {
            eprint!("      [{}/{}] |x| = {}... ", idx + 1, total, len);
            let x = synthetic_lines(len, 5, 0);
            let m = probe(
                "fixed_y",
                format!("x={len},y={FIXED_Y}"),
                options,
                sys,
                &x,
                &y,
            );
            report(&m);
            m
        })
        .collect()
}

fn probe(
    scenario: &'static str,
    size_desc: String,
    options: &Options,
    sys: &mut System,
    x: &[String],
    y: &[String],
) -> Measurement {
    let solver = options.solver();
    let before = rss_kib(sys);
    let start = Instant::now();
    let (pairs, stats) = solver.run(x, y);
    let lcs: Vec<&String> = pairs.iter().map(|&(i, _)| &x[i]).collect();
    let ops: Vec<DiffOp<'_, String>> = align(x, y, &lcs).collect();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    let (status, detail) = verify(options, x, y, pairs.len(), &ops);

    Measurement {
        scenario,
        size_desc,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        row_cells: stats.row_cells,
        max_depth: stats.max_depth,
        verification_status: status,
        verification_detail: detail,
    }
}

fn verify(
    options: &Options,
    x: &[String],
    y: &[String],
    lcs_len: usize,
    ops: &[DiffOp<'_, String>],
) -> (VerificationStatus, Option<String>) {
    let x_side: Vec<&String> = ops.iter().filter_map(DiffOp::x_side).collect();
    let y_side: Vec<&String> = ops.iter().filter_map(DiffOp::y_side).collect();
    if !x_side.iter().copied().eq(x.iter()) || !y_side.iter().copied().eq(y.iter()) {
        return (
            VerificationStatus::Failed,
            Some("op stream does not reproduce the inputs".to_string()),
        );
    }
    if x.len() > options.verify_limit {
        return (VerificationStatus::NotChecked, None);
    }
    let baseline = full_lcs_len(x, y);
    if baseline == lcs_len {
        (VerificationStatus::Passed, None)
    } else {
        (
            VerificationStatus::Failed,
            Some(format!("expected {baseline}, got {lcs_len}")),
        )
    }
}

fn report(m: &Measurement) {
    eprintln!(
        "{} rows={}, depth={}, time={:.3}s, status={}",
        m.verification_status.icon(),
        m.row_cells,
        m.max_depth,
        m.wall_s,
        m.verification_status.label()
    );
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));

    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.verification_status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }
    eprintln!("  Total runs: {}", measurements.len());
    eprintln!("  ✓ Passed: {passed}");
    eprintln!("  ✗ Failed: {failed}");
    eprintln!(
        "  ○ Not checked (|x| > {}): {not_checked}",
        options.verify_limit
    );

    if failed > 0 {
        eprintln!();
        eprintln!("Failed runs:");
        for m in measurements {
            if matches!(m.verification_status, VerificationStatus::Failed) {
                eprintln!("  ✗ {} ({})", m.scenario, m.size_desc);
                if let Some(ref detail) = m.verification_detail {
                    eprintln!("     Error: {detail}");
                }
            }
        }
    }
    eprintln!();
}

fn write_csv<W: Write>(out: &mut W, measurements: &[Measurement]) -> io::Result<()> {
    writeln!(
        out,
        "scenario,size_desc,wall_s,rss_delta_kib,row_cells,max_depth,verification_status,verification_detail"
    )?;
    for m in measurements {
        writeln!(
            out,
            "{},{},{:.3},{},{},{},{},{}",
            m.scenario,
            csv_field(&m.size_desc),
            m.wall_s,
            m.rss_delta_kib,
            m.row_cells,
            m.max_depth,
            m.verification_status.label(),
            csv_field(m.verification_detail.as_deref().unwrap_or("")),
        )?;
    }
    Ok(())
}

/// Quote a CSV field, doubling embedded quotes.
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn write_table<W: Write>(out: &mut W, measurements: &[Measurement]) -> io::Result<()> {
    let mut col1 = "scenario".len();
    let mut col2 = "size".len();
    for m in measurements {
        col1 = col1.max(m.scenario.len());
        col2 = col2.max(m.size_desc.len());
    }

    writeln!(
        out,
        "{:<col1$}  {:<col2$}  {:>10}  {:>14}  {:>10}  {:>6}  {:>12}  detail",
        "scenario", "size", "wall_s", "rss_delta_kib", "row_cells", "depth", "status",
    )?;
    writeln!(
        out,
        "{:-<col1$}  {:-<col2$}  {:-<10}  {:-<14}  {:-<10}  {:-<6}  {:-<12}  {:-<12}",
        "", "", "", "", "", "", "", "",
    )?;
    for m in measurements {
        writeln!(
            out,
            "{:<col1$}  {:<col2$}  {:>10.3}  {:>14}  {:>10}  {:>6}  {:>12}  {}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.row_cells,
            m.max_depth,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
        )?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, measurements: &[Measurement]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, measurements)?;
    writeln!(out)
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

/// Lines drawn from a small vocabulary so that matches are frequent but the
/// two inputs are not identical.
fn synthetic_lines(len: usize, vocabulary: usize, offset: usize) -> Vec<String> {
    (0..len)
        .map(|i| format!("line {}", (i * 3 + offset) % vocabulary))
        .collect()
}

fn full_lcs_len(s: &[String], t: &[String]) -> usize {
    let n = s.len();
    let m = t.len();
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            let up = dp[i - 1][j];
            let left = dp[i][j - 1];
            let diag = dp[i - 1][j - 1] + usize::from(s[i - 1] == t[j - 1]);
            dp[i][j] = up.max(left).max(diag);
        }
    }
    dp[n][m]
}
