use crate::input::{read_samples, Column, Format, InputError};
use crate::output::{Output, Report};
use clap::Parser;
use stats_summary::Summary;
use std::fs::File;
use std::io::{stdin, stdout, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info, info_span, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

mod input;
mod output;

/// Print descriptive statistics (mean, standard deviation, variance, extrema and percentiles) of
/// numbers read from files or stdin.
///
/// Each input is summarized separately.
///
/// Use the `RUST_LOG` environment variable to configure logging.
#[derive(Parser, Debug)]
#[command(version, author)]
struct CliArgs {
    /// Files to read numbers from. Use `-` or pass nothing to read from stdin.
    inputs: Vec<PathBuf>,

    /// Input format.
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,
    /// CSV column to read, either its header name or its 0-based index. Defaults to the first
    /// column. Ignored for text input.
    #[arg(short, long)]
    column: Option<Column>,

    /// Choose the CLI stdout format. Omit the option for the default.
    /// Status messages will be printed to stderr in all cases.
    #[arg(long, value_enum)]
    output: Option<Output>,
}

impl CliArgs {
    fn inputs(&self) -> Vec<PathBuf> {
        if self.inputs.is_empty() {
            vec![PathBuf::from("-")]
        } else {
            self.inputs.clone()
        }
    }

    fn column(&self) -> Column {
        self.column.clone().unwrap_or_default()
    }

    /// `--column` was given but the input format has no columns
    fn column_ignored(&self) -> bool {
        self.column.is_some() && self.format == Format::Text
    }

    fn output(&self) -> Output {
        self.output.unwrap_or_default()
    }
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let mut env_filter = EnvFilter::builder();
    env_filter = if cfg!(debug_assertions) {
        env_filter.with_default_directive(LevelFilter::DEBUG.into())
    } else {
        env_filter.with_default_directive(LevelFilter::INFO.into())
    };
    let env_filter = env_filter.from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .without_time()
                .with_writer(std::io::stderr)
                .with_filter(env_filter),
        )
        .init();

    let inputs = args.inputs();
    if inputs.iter().filter(|p| is_stdin(p)).count() > 1 {
        error!("Can't read stdin more than once");
        return ExitCode::FAILURE;
    }

    if args.column_ignored() {
        warn!("--column only applies to csv input, ignoring it");
    }
    let column = args.column();

    let start = Instant::now();
    let mut reports = Vec::with_capacity(inputs.len());
    let mut failed = false;
    for path in &inputs {
        let _span = info_span!("input", path = %path.display()).entered();
        match summarize(path, args.format, &column) {
            Ok(summary) => reports.push(Report {
                source: path.display().to_string(),
                summary,
            }),
            Err(e) => {
                error!("Could not summarize '{}' : {e}", path.display());
                failed = true;
            }
        }
    }
    info!(
        "Summarized {} of {} inputs in {:?}",
        reports.len(),
        inputs.len(),
        start.elapsed()
    );

    if let Err(e) = args.output().display_reports(stdout().lock(), &reports) {
        error!("Could not write results : {e}");
        return ExitCode::FAILURE;
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn is_stdin(path: &Path) -> bool {
    path.to_str() == Some("-")
}

fn summarize(path: &Path, format: Format, column: &Column) -> Result<Summary, InputError> {
    let reader: Box<dyn BufRead> = if is_stdin(path) {
        Box::new(stdin().lock())
    } else {
        Box::new(BufReader::new(File::open(path)?))
    };
    let samples = read_samples(reader, format, column)?;
    let summary = Summary::compute(&samples)?;
    debug!(count = summary.count(), "computed summary");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = CliArgs::parse_from(["stats-summary"]);
        assert_eq!(args.inputs(), [PathBuf::from("-")]);
        assert_eq!(args.format, Format::Text);
        assert_eq!(args.column(), Column::Index(0));
        assert!(!args.column_ignored());
        assert_eq!(args.output(), Output::Default);
    }

    #[test]
    fn csv_options() {
        let args = CliArgs::parse_from([
            "stats-summary",
            "--format",
            "csv",
            "--column",
            "score",
            "--output",
            "json",
            "a.csv",
            "b.csv",
        ]);
        assert_eq!(args.inputs(), [PathBuf::from("a.csv"), PathBuf::from("b.csv")]);
        assert_eq!(args.format, Format::Csv);
        assert_eq!(args.column(), Column::Name("score".to_string()));
        assert!(!args.column_ignored());
        assert_eq!(args.output(), Output::Json);
    }

    #[test]
    fn column_with_text_input_is_flagged() {
        let args = CliArgs::parse_from(["stats-summary", "--column", "2", "numbers.txt"]);
        assert_eq!(args.format, Format::Text);
        assert!(args.column_ignored());

        let args = CliArgs::parse_from(["stats-summary", "-f", "csv", "-c", "2", "numbers.csv"]);
        assert!(!args.column_ignored());
        assert_eq!(args.column(), Column::Index(2));
    }

    #[test]
    fn missing_file() {
        let err = summarize(
            Path::new("this/file/does/not/exist.txt"),
            Format::Text,
            &Column::default(),
        )
        .unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }
}
