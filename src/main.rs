//! Calificaciones CLI
//!
//! Command-line client for the grades portal:
//! - Fetch a student's grades
//! - Format dates the way the portal shows them
//! - Generate a config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use calificaciones::grades::cell_text;
use calificaciones::logging::init_logging;
use calificaciones::table::sort_rows_by_column;
use calificaciones::{
    config, format, load_student_grades, Config, HttpGradeClient, NotificationKind, Notifier,
};

#[derive(Parser)]
#[command(name = "calificaciones")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line client for the grades portal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Portal URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a student's grades
    Grades {
        /// Student id
        student_id: String,
        /// Column to sort by (ascending)
        #[arg(short, long)]
        sort: Option<String>,
    },

    /// Format a date as the portal does ("15 de marzo de 2024")
    Date { input: String },

    /// Format a time as the portal does ("09:05")
    Time { input: String },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// Prints outcome notifications to stderr
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        eprintln!("{} {}", kind.icon(), message);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url.trim_end_matches('/').to_string();
    }

    init_logging(&config.logging);

    match cli.command {
        Commands::Grades { student_id, sort } => {
            let client = HttpGradeClient::new(&config.api)?;
            let grades = load_student_grades(&client, &StderrNotifier, &student_id).await?;

            let (headers, mut rows) = grades.to_table();
            let mut records = grades.records().to_vec();

            if let Some(column) = sort {
                let Some(idx) = headers.iter().position(|h| *h == column) else {
                    bail!("Unknown column {:?}, available: {}", column, headers.join(", "));
                };
                sort_rows_by_column(&mut rows, idx, |row, col| row.get(col).cloned());
                sort_rows_by_column(&mut records, idx, |record, _| {
                    record.get(&column).map(cell_text)
                });
            }

            match cli.format {
                OutputFormat::Table => print_table(&headers, &rows),
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&records)?);
                }
                OutputFormat::Csv => {
                    let mut writer = csv::Writer::from_writer(std::io::stdout());
                    writer.write_record(&headers)?;
                    for row in &rows {
                        writer.write_record(row)?;
                    }
                    writer.flush()?;
                }
            }
        }

        Commands::Date { input } => {
            println!("{}", format::format_date(&input)?);
        }

        Commands::Time { input } => {
            println!("{}", format::format_time(&input)?);
        }

        Commands::Config { output } => {
            let content = config::generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn print_table(headers: &[String], rows: &[Vec<String>]) {
    if headers.is_empty() {
        println!("No records");
        return;
    }

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<width$}", c, width = *w))
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("{}", line(headers));
    println!(
        "{}",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ")
    );
    for row in rows {
        println!("{}", line(row));
    }
}
