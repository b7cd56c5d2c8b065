use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::application::{AppError, ExpenseService};
use crate::domain::EntryId;
use crate::io::Exporter;

use super::render::{Presentation, render_entries, render_summary_json, render_summary_table};
use super::OutputFormat;

/// One line typed at the session prompt.
#[derive(Parser, Debug)]
#[command(name = "outlay", no_binary_name = true, disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// Record an expense
    Add {
        /// Category label (quote it to include spaces)
        category: String,

        /// Amount (e.g., "50.00" or "50")
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },

    /// Delete an expense by its position in `list`
    #[command(alias = "rm")]
    Delete {
        /// Position as shown by `list`, starting at 1
        position: usize,
    },

    /// Delete an expense by its id
    Remove {
        /// Expense id, with or without the leading '#'
        id: String,
    },

    /// List recorded expenses
    #[command(alias = "ls")]
    List,

    /// Compute total, daily average and top expenses
    #[command(alias = "calc")]
    Calculate {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Export the session to CSV or JSON
    Export {
        /// What to export
        #[arg(value_enum)]
        what: ExportKind,

        /// Output file (printed here if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Format (default: csv for entries and summary, json for full)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
    },

    /// Forget every recorded expense
    Clear,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportKind {
    Entries,
    Summary,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Read commands from `input` until it ends or the user quits.
/// Problems with a single line are reported and the session carries on.
pub fn run_session<R: BufRead, W: Write>(
    service: &mut ExpenseService,
    input: R,
    out: &mut W,
    presentation: &Presentation,
    prompt: bool,
) -> Result<()> {
    if prompt {
        writeln!(out, "Expense session started. Type `help` for commands.")?;
    }

    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read input")?;

        let words = match split_words(&line) {
            Ok(words) if words.is_empty() => continue,
            Ok(words) => words,
            Err(err) => {
                writeln!(out, "error: {}", err)?;
                continue;
            }
        };

        let command = match SessionLine::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                // Covers `help` as well as usage errors
                write!(out, "{}", err.render())?;
                continue;
            }
        };

        match execute(service, command, out, presentation) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(err) => writeln!(out, "error: {:#}", err)?,
        }
    }

    tracing::debug!(entries = service.len(), "session ended");
    Ok(())
}

fn execute<W: Write>(
    service: &mut ExpenseService,
    command: SessionCommand,
    out: &mut W,
    presentation: &Presentation,
) -> Result<Flow> {
    match command {
        SessionCommand::Add { category, amount } => {
            let entry = service.add_expense(&category, &amount)?;
            writeln!(
                out,
                "Added #{}: {} {}",
                entry.id,
                entry.category,
                presentation.money(entry.amount)
            )?;
        }

        SessionCommand::Delete { position } => {
            if position == 0 {
                bail!("Positions start at 1");
            }
            let entry = service.delete_expense(position - 1).map_err(|err| match err {
                AppError::PositionOutOfRange { len, .. } => {
                    anyhow::anyhow!("No expense at position {} (ledger has {})", position, len)
                }
                other => other.into(),
            })?;
            writeln!(
                out,
                "Deleted #{}: {} {}",
                entry.id,
                entry.category,
                presentation.money(entry.amount)
            )?;
        }

        SessionCommand::Remove { id } => {
            let id = parse_entry_id(&id)?;
            let entry = service.delete_expense_by_id(id)?;
            writeln!(
                out,
                "Deleted #{}: {} {}",
                entry.id,
                entry.category,
                presentation.money(entry.amount)
            )?;
        }

        SessionCommand::List => {
            render_entries(out, presentation, service.entries())?;
        }

        SessionCommand::Calculate { format } => {
            if service.is_empty() {
                writeln!(out, "Add at least one expense before calculating.")?;
                return Ok(Flow::Continue);
            }
            match format {
                OutputFormat::Table => {
                    let summary = service.summary()?;
                    render_summary_table(out, presentation, &summary)?;
                }
                OutputFormat::Json => {
                    let summary = service.summary()?;
                    render_summary_json(out, &summary)?;
                }
                OutputFormat::Csv => {
                    Exporter::new(service).export_summary_csv(&mut *out)?;
                }
            }
        }

        SessionCommand::Export {
            what,
            output,
            format,
        } => {
            run_export(service, what, output, format, out)?;
        }

        SessionCommand::Clear => {
            let removed = service.clear();
            writeln!(out, "Cleared {} expenses", removed)?;
        }

        SessionCommand::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

fn run_export<W: Write>(
    service: &ExpenseService,
    what: ExportKind,
    output: Option<PathBuf>,
    format: Option<ExportFormat>,
    out: &mut W,
) -> Result<()> {
    let format = format.unwrap_or(match what {
        ExportKind::Full => ExportFormat::Json,
        ExportKind::Entries | ExportKind::Summary => ExportFormat::Csv,
    });
    if what == ExportKind::Full && format == ExportFormat::Csv {
        bail!("Full export is only available as JSON");
    }

    let exporter = Exporter::new(service);

    // Determine output writer
    let writer: Box<dyn Write + '_> = match &output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(&mut *out),
    };

    let message = match (what, format) {
        (ExportKind::Entries, ExportFormat::Csv) => {
            let count = exporter.export_entries_csv(writer)?;
            format!("Exported {} expenses", count)
        }
        (ExportKind::Entries, ExportFormat::Json) => {
            let count = exporter.export_entries_json(writer)?;
            format!("Exported {} expenses", count)
        }
        (ExportKind::Summary, ExportFormat::Csv) => {
            let summary = exporter.export_summary_csv(writer)?;
            format!("Exported summary of {} expenses", summary.count)
        }
        (ExportKind::Summary, ExportFormat::Json) => {
            let summary = exporter.export_summary_json(writer)?;
            format!("Exported summary of {} expenses", summary.count)
        }
        (ExportKind::Full, _) => {
            let snapshot = exporter.export_full_json(writer)?;
            format!("Exported session: {} expenses", snapshot.entries.len())
        }
    };

    match output {
        Some(path) => {
            writeln!(out, "{} to {}", message, path.display())?;
            tracing::info!(path = %path.display(), "session exported");
        }
        // JSON output has no trailing newline of its own
        None if format == ExportFormat::Json => writeln!(out)?,
        None => {}
    }

    Ok(())
}

fn parse_entry_id(raw: &str) -> Result<EntryId> {
    raw.trim_start_matches('#')
        .parse()
        .with_context(|| format!("Invalid expense id '{}'", raw))
}

/// Split a line into words, honouring single and double quotes.
pub fn split_words(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        bail!("Unterminated quote");
    }
    if in_word {
        words.push(current);
    }

    Ok(words)
}
