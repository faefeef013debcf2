use clap::{Parser, ValueEnum};

mod date;
mod diagnostics;
mod error;
mod ingest;
mod render;
mod report;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "reqstat")]
#[command(about = "Per-endpoint request summary from NDJSON access logs", long_about = None)]
struct Cli {
    /// Log files to ingest, processed in the given order.
    #[arg(short = 'f', long = "file", required = true, num_args = 1..)]
    files: Vec<String>,

    /// Report flavor to produce.
    #[arg(long, value_enum, default_value_t = ReportKind::Average)]
    report: ReportKind,

    /// Keep only records whose @timestamp falls on this day (YYYY-MM-DD).
    #[arg(long)]
    date: Option<String>,

    /// Show debug-level diagnostics.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportKind {
    /// Request count and average response time per URL.
    Average,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    diagnostics::init_logger(cli.verbose);

    // 1) Validate the day filter before touching any input.
    if let Some(date) = cli.date.as_deref() {
        date::validate(date)?;
    }

    // 2) Aggregate all input files into one shared accumulator.
    let mut diag = diagnostics::LogDiagnostics;
    let counter = ingest::aggregate(&cli.files, cli.date.as_deref(), &mut diag)?;

    // 3) Derive the report rows.
    let rows = match cli.report {
        ReportKind::Average => report::finalize(&counter),
    };

    // 4) Render the table.
    println!("{}", render::render_table(&rows));

    Ok(())
}
