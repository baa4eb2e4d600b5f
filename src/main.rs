//! CLI entry point for the grade calculator.
//!
//! Keeps a list of (subject, score, weight) rows in a local JSON store and
//! prints the weighted average and letter grade after every change. The list
//! can be exported to CSV, and any exported CSV can be graded on its own.

use anyhow::Result;
use clap::{Parser, Subcommand};
use grade_calc::{
    config::{STORE_ENV, Settings},
    controller::{RowUpdate, SubjectList},
    error::GradeError,
    grading::SubjectEntry,
    output::{DEFAULT_EXPORT_FILE, export_csv, format_value, read_csv_file},
    samples::DEFAULT_EXAMPLE_COUNT,
    store::JsonFileStore,
    summary::{Report, Summary},
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "grade_calc")]
#[command(about = "Weighted-average grade calculator", long_about = None)]
struct Cli {
    /// JSON file the subject list is saved in
    #[arg(long, global = true, env = STORE_ENV, value_name = "FILE")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all subjects and the current grade
    List {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a subject row
    Add {
        #[arg(short, long, default_value = "")]
        name: String,

        /// Score between 0 and 100; blank or non-numeric leaves it unset
        #[arg(short, long, default_value = "")]
        score: String,

        /// Weight greater than 0; blank or non-numeric leaves it unset
        #[arg(short, long, default_value = "")]
        weight: String,
    },
    /// Change fields of an existing row
    Edit {
        /// Row number as shown by `list`
        index: usize,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        score: Option<String>,

        #[arg(short, long)]
        weight: Option<String>,
    },
    /// Remove a row
    Remove {
        /// Row number as shown by `list`
        index: usize,
    },
    /// Remove every row
    Clear,
    /// Replace the list with random example subjects
    Example {
        #[arg(short, long, default_value_t = DEFAULT_EXAMPLE_COUNT)]
        count: usize,
    },
    /// Export the list as CSV
    Export {
        #[arg(short, long, default_value = DEFAULT_EXPORT_FILE)]
        output: String,
    },
    /// Grade an exported CSV file without touching the saved list
    Compute {
        #[arg(value_name = "CSV_FILE")]
        file: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env();

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = settings
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let log_file_name = settings
        .log_file
        .file_name()
        .unwrap_or(OsStr::new("grade_calc.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive(LevelFilter::INFO.into()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(
            EnvFilter::from_env("RUST_LOG_JSON").add_directive(LevelFilter::DEBUG.into()),
        );

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let store_path = cli.store.unwrap_or(settings.store_path);
    info!(store = %store_path.display(), "Using subject store");
    let store = JsonFileStore::new(store_path);

    match cli.command {
        Commands::List { json } => {
            let list = SubjectList::open(store)?;
            print_list(list.entries(), json)?;
        }
        Commands::Add {
            name,
            score,
            weight,
        } => {
            let mut list = SubjectList::open(store)?;
            let added = list.add(&name, &score, &weight)?;
            info!(
                name = %added.name,
                score = ?added.score,
                weight = ?added.weight,
                "Subject added"
            );
            print_list(list.entries(), false)?;
        }
        Commands::Edit {
            index,
            name,
            score,
            weight,
        } => {
            let mut list = SubjectList::open(store)?;
            let edited = list.edit(
                index,
                RowUpdate {
                    name,
                    score,
                    weight,
                },
            )?;
            info!(index, name = %edited.name, "Subject updated");
            print_list(list.entries(), false)?;
        }
        Commands::Remove { index } => {
            let mut list = SubjectList::open(store)?;
            let removed = list.remove(index)?;
            info!(index, name = %removed.name, "Subject removed");
            print_list(list.entries(), false)?;
        }
        Commands::Clear => {
            let mut list = SubjectList::open(store)?;
            list.clear()?;
            info!("Subject list cleared");
            print_list(list.entries(), false)?;
        }
        Commands::Example { count } => {
            let mut list = SubjectList::open(store)?;
            list.load_examples(&mut rand::thread_rng(), count)?;
            info!(count = list.entries().len(), "Example subjects loaded");
            print_list(list.entries(), false)?;
        }
        Commands::Export { output } => {
            let list = SubjectList::open(store)?;
            match export_csv(&output, list.entries()) {
                Ok(()) => println!("Wrote {} subjects to {output}", list.entries().len()),
                Err(e) if e.downcast_ref::<GradeError>() == Some(&GradeError::NothingToExport) => {
                    warn!("Export skipped: list is empty");
                    println!("{e}");
                }
                Err(e) => return Err(e),
            }
        }
        Commands::Compute { file, json } => {
            let entries = read_csv_file(&file)?;
            info!(file = %file, rows = entries.len(), "Grading CSV");
            print_list(&entries, json)?;
        }
    }

    Ok(())
}

/// Prints the rows and their summary, or a JSON report.
fn print_list(entries: &[SubjectEntry], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&Report::from_entries(entries))?);
        return Ok(());
    }

    for (i, entry) in entries.iter().enumerate() {
        println!(
            "{:>3}  {:<28} {:>8} {:>8}",
            i + 1,
            entry.name,
            format_value(entry.score),
            format_value(entry.weight)
        );
    }
    if !entries.is_empty() {
        println!();
    }
    println!("{}", Summary::from_entries(entries));
    Ok(())
}
