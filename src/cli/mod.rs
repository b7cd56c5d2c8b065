mod render;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{IsTerminal, Write, stdin, stdout};

use crate::application::ExpenseService;
use crate::io::Exporter;

pub use render::{Presentation, truncate};
pub use session::{ExportFormat, ExportKind, run_session, split_words};

use render::{render_summary_json, render_summary_table};

/// Outlay - Expense Calculator
#[derive(Parser)]
#[command(name = "outlay")]
#[command(about = "Record expenses for a session and see the total, daily average and top spends")]
#[command(version)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace) or a full filter such as `outlay=info,clap=warn`
    #[arg(long, env = "OUTLAY_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Enable verbose output (same as --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Currency symbol used when printing amounts
    #[arg(long, env = "OUTLAY_CURRENCY", default_value = "$", global = true)]
    pub currency: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session (default)
    Session,

    /// Summarize expenses given on the command line
    Summarize {
        /// Expense as CATEGORY=AMOUNT (repeatable)
        #[arg(short, long = "expense", value_name = "CATEGORY=AMOUNT")]
        expenses: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl Cli {
    /// Filter directive for the log subscriber.
    /// A bare level applies to this crate only; anything with a target is passed through.
    pub fn log_filter(&self) -> String {
        if self.verbose {
            "outlay=debug".to_string()
        } else if self.log_level.contains('=') {
            self.log_level.clone()
        } else {
            format!("outlay={}", self.log_level)
        }
    }

    /// Install the stderr log subscriber. Stdout is left for reports.
    pub fn init_tracing(&self) {
        tracing_subscriber::fmt()
            .with_env_filter(self.log_filter())
            .with_writer(std::io::stderr)
            .init();
    }

    pub fn presentation(&self) -> Presentation {
        Presentation {
            currency: self.currency.clone(),
        }
    }

    pub fn run(self) -> Result<()> {
        let presentation = self.presentation();

        match self.command.unwrap_or(Commands::Session) {
            Commands::Session => {
                let mut service = ExpenseService::new();
                let input = stdin();
                let prompt = input.is_terminal();
                let mut out = stdout().lock();
                run_session(&mut service, input.lock(), &mut out, &presentation, prompt)?;
            }

            Commands::Summarize { expenses, format } => {
                let mut out = stdout().lock();
                run_summarize_command(&expenses, format, &presentation, &mut out)?;
            }
        }

        Ok(())
    }
}

/// Summarize `CATEGORY=AMOUNT` pairs. Malformed pairs are reported on stderr and skipped.
pub fn run_summarize_command<W: Write>(
    expenses: &[String],
    format: OutputFormat,
    presentation: &Presentation,
    out: &mut W,
) -> Result<()> {
    let mut service = ExpenseService::new();

    for raw in expenses {
        let Some((category, amount)) = raw.rsplit_once('=') else {
            eprintln!("Skipping '{}': expected CATEGORY=AMOUNT", raw);
            continue;
        };
        if let Err(err) = service.add_expense(category, amount) {
            eprintln!("Skipping '{}': {}", raw, err);
        }
    }

    match format {
        OutputFormat::Table => {
            let summary = ExpenseService::compute_summary(service.entries());
            render_summary_table(out, presentation, &summary)?;
        }
        OutputFormat::Json => {
            let summary = ExpenseService::compute_summary(service.entries());
            render_summary_json(out, &summary)?;
        }
        OutputFormat::Csv => {
            Exporter::new(&service).export_summary_csv(&mut *out)?;
        }
    }

    Ok(())
}
