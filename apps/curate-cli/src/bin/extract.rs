use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::{CommandFactory, Parser, ValueEnum};

use curate_core::config::Config;
use curate_core::content::ContentSource;
use curate_core::{logging, Error};
use curate_text::{render_report, Classifier};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// Extract metadata from content for BTR curation.
///
/// Exactly one source is used, checked in order: --content, --file, stdin.
#[derive(Parser, Debug)]
#[command(name = "curate-extract", version)]
struct Cli {
    /// Content string to analyze
    #[arg(long)]
    content: Option<String>,

    /// Path to file containing content
    #[arg(long)]
    file: Option<String>,

    /// Read content from stdin
    #[arg(long)]
    stdin: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Extra TOML config layered over config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Usage followed by the error line, for runs given no input at all.
fn missing_input_report() -> String {
    format!(
        "{}\nError: {}",
        Cli::command().render_help(),
        Error::NoContent
    )
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();
    let config = Config::load_from(Path::new("."), cli.config.as_deref()).map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    let settings = config.classifier()?;

    let use_stdin = cli.stdin || !io::stdin().is_terminal();
    let Some(source) = ContentSource::select(cli.content, cli.file.as_deref(), use_stdin) else {
        eprintln!("{}", missing_input_report());
        process::exit(1);
    };

    let content = match source.read() {
        Ok(content) => content,
        Err(e @ (Error::FileNotFound(_) | Error::NoContent)) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let classifier = Classifier::new(settings.summary_max_len);
    let result = classifier.classify(&content);
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print!("{}", render_report(&result)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_report_ends_with_error_line() {
        let report = missing_input_report();
        assert!(report.contains("--content"));
        assert!(report.trim_end().ends_with("Error: No content provided"));
    }

    #[test]
    fn no_flags_and_a_terminal_select_nothing() {
        let cli = Cli::try_parse_from(["curate-extract"]).unwrap();
        let source = ContentSource::select(cli.content, cli.file.as_deref(), cli.stdin);
        assert!(source.is_none());
    }

    #[test]
    fn format_flag_parses() {
        let cli = Cli::try_parse_from(["curate-extract", "--file", "a.md", "--format", "text"])
            .unwrap();
        assert!(matches!(cli.format, OutputFormat::Text));
        assert_eq!(cli.file.as_deref(), Some("a.md"));
    }
}
