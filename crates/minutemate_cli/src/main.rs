//! MinuteMate command-line shell.
//!
//! # Responsibility
//! - Read meeting notes from a file or stdin.
//! - Print the MOM preview markup or the extracted items as JSON.
//!
//! # Invariants
//! - Blank notes print the empty-state markup and exit successfully.
//! - Logging stays disabled unless `--log-dir` is given.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use minutemate_core::{init_logging, ExtractorConfig, MomService};
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Full preview markup.
    Html,
    /// Extracted action items only.
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "minutemate",
    version,
    about = "Generate a minutes-of-meeting preview from raw notes"
)]
struct Cli {
    /// Notes file; reads stdin when omitted or `-`.
    #[arg(short, long)]
    input: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Maximum action items to keep (1-6). Overrides MINUTEMATE_MAX_ITEMS.
    #[arg(long)]
    max_items: Option<usize>,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long, default_value_t = minutemate_core::default_log_level().to_string())]
    log_level: String,

    /// Absolute directory for rolling log files.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        init_logging(&cli.log_level, &log_dir.to_string_lossy())
            .map_err(anyhow::Error::msg)
            .context("failed to initialize logging")?;
    }

    let config = resolve_config(cli.max_items)?;
    let notes = read_notes(cli.input.as_deref())?;
    let output = run(&MomService::new(config), &notes, cli.format)?;
    println!("{output}");
    Ok(())
}

fn resolve_config(max_items: Option<usize>) -> Result<ExtractorConfig> {
    match max_items {
        Some(value) => Ok(ExtractorConfig::with_max_items(Some(value))),
        None => ExtractorConfig::from_env().context("failed to load configuration"),
    }
}

fn read_notes(input: Option<&std::path::Path>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read notes from `{}`", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read notes from stdin")?;
            Ok(buffer)
        }
    }
}

fn run(service: &MomService, notes: &str, format: OutputFormat) -> Result<String> {
    let outcome = service.generate(notes);
    match format {
        OutputFormat::Html => Ok(outcome.markup().to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(outcome.items()).context("failed to encode action items")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{read_notes, resolve_config, run, Cli, OutputFormat};
    use clap::Parser;
    use minutemate_core::MomService;
    use std::io::Write;

    #[test]
    fn json_output_lists_extracted_items() {
        let output = run(
            &MomService::default(),
            "send deck, Owner: Sam, Due: Friday",
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["owner"], "Sam");
        assert_eq!(value[0]["due"], "Friday");
    }

    #[test]
    fn json_output_for_blank_notes_is_empty_array() {
        let output = run(&MomService::default(), "  ", OutputFormat::Json).unwrap();
        assert_eq!(output, "[]");
    }

    #[test]
    fn html_output_for_blank_notes_is_empty_state() {
        let output = run(&MomService::default(), "", OutputFormat::Html).unwrap();
        assert!(output.contains("Paste some notes first."));
    }

    #[test]
    fn notes_are_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "need budget").unwrap();
        let notes = read_notes(Some(file.path())).unwrap();
        assert_eq!(notes.trim(), "need budget");
    }

    #[test]
    fn missing_input_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let err = read_notes(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("absent.txt"));
    }

    #[test]
    fn explicit_max_items_is_normalized() {
        assert_eq!(resolve_config(Some(42)).unwrap().max_items, 6);
        assert_eq!(resolve_config(Some(2)).unwrap().max_items, 2);
    }

    #[test]
    fn cli_parses_format_and_limits() {
        let cli =
            Cli::try_parse_from(["minutemate", "--format", "json", "--max-items", "3"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.max_items, Some(3));
        assert!(cli.input.is_none());
    }
}
