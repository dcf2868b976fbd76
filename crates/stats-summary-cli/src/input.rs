use clap::ValueEnum;
use stats_summary::SummaryError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::io::{BufRead, Read};
use std::str::FromStr;
use tracing::{debug, trace};

#[derive(Debug, Copy, Clone, Default, PartialEq, ValueEnum)]
pub(crate) enum Format {
    /// Numbers separated by whitespace or commas. Blank lines and lines starting with `#` are skipped.
    #[default]
    Text,
    /// CSV with a header row, values are taken from a single column.
    Csv,
}

/// Column of a CSV input, either its header name or its 0-based index.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Column {
    Index(usize),
    Name(String),
}

impl Default for Column {
    fn default() -> Self {
        Column::Index(0)
    }
}

impl FromStr for Column {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse() {
            Ok(i) => Column::Index(i),
            Err(_) => Column::Name(s.to_string()),
        })
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Column::Index(i) => write!(f, "#{i}"),
            Column::Name(name) => write!(f, "'{name}'"),
        }
    }
}

#[derive(Debug)]
pub(crate) enum InputError {
    Io(io::Error),
    /// A token could not be read as a number, `line` is 1-based
    Parse { line: u64, token: String },
    Csv(csv::Error),
    MissingColumn(Column),
    Summary(SummaryError),
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Io(e) => write!(f, "read error: {e}"),
            InputError::Parse { line, token } => {
                write!(f, "line {line}: '{token}' is not a number")
            }
            InputError::Csv(e) => write!(f, "csv error: {e}"),
            InputError::MissingColumn(column) => write!(f, "no column {column} in csv header"),
            InputError::Summary(e) => Display::fmt(e, f),
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            InputError::Csv(e) => Some(e),
            InputError::Summary(e) => Some(e),
            InputError::Parse { .. } | InputError::MissingColumn(_) => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for InputError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<SummaryError> for InputError {
    fn from(value: SummaryError) -> Self {
        Self::Summary(value)
    }
}

pub(crate) fn read_samples(
    reader: impl BufRead,
    format: Format,
    column: &Column,
) -> Result<Vec<f64>, InputError> {
    let samples = match format {
        Format::Text => read_text(reader)?,
        Format::Csv => read_csv(reader, column)?,
    };
    debug!(count = samples.len(), ?format, "read samples");
    Ok(samples)
}

fn parse_token(token: &str, line: u64) -> Result<f64, InputError> {
    token.parse().map_err(|_| InputError::Parse {
        line,
        token: token.to_string(),
    })
}

fn read_text(reader: impl BufRead) -> Result<Vec<f64>, InputError> {
    let mut samples = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i as u64 + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        for token in line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            samples.push(parse_token(token, line_no)?);
        }
    }
    Ok(samples)
}

fn read_csv(reader: impl Read, column: &Column) -> Result<Vec<f64>, InputError> {
    let mut csv = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let index = match column {
        Column::Index(i) => {
            if *i >= csv.headers()?.len() {
                return Err(InputError::MissingColumn(column.clone()));
            }
            *i
        }
        Column::Name(name) => csv
            .headers()?
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| InputError::MissingColumn(column.clone()))?,
    };
    trace!(index, %column, "selected csv column");

    let mut samples = Vec::new();
    for record in csv.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        match record.get(index) {
            Some("") | None => continue,
            Some(token) => samples.push(parse_token(token, line)?),
        }
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(input: &str) -> Result<Vec<f64>, InputError> {
        read_samples(input.as_bytes(), Format::Text, &Column::default())
    }

    fn csv(input: &str, column: &str) -> Result<Vec<f64>, InputError> {
        read_samples(input.as_bytes(), Format::Csv, &column.parse().unwrap())
    }

    #[test]
    fn text_mixed_separators() {
        let samples = text("# latencies\n1 2.5\n\n3,4\n  -5e2\t6\n").unwrap();
        assert_eq!(samples, [1.0, 2.5, 3.0, 4.0, -500.0, 6.0]);
    }

    #[test]
    fn text_reports_line() {
        match text("1\n2\nthree\n") {
            Err(InputError::Parse { line, token }) => {
                assert_eq!(line, 3);
                assert_eq!(token, "three");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn text_empty() {
        assert!(text("# nothing here\n\n").unwrap().is_empty());
    }

    #[test]
    fn csv_by_name() {
        let samples = csv("frame,score\n0, 91.5\n1,88\n2,\n", "score").unwrap();
        assert_eq!(samples, [91.5, 88.0]);
    }

    #[test]
    fn csv_by_index() {
        let samples = csv("frame,score\n0,91.5\n1,88\n", "0").unwrap();
        assert_eq!(samples, [0.0, 1.0]);
    }

    #[test]
    fn csv_missing_column() {
        assert!(matches!(
            csv("frame,score\n0,1\n", "psnr"),
            Err(InputError::MissingColumn(Column::Name(name))) if name == "psnr"
        ));
        assert!(matches!(
            csv("frame,score\n0,1\n", "2"),
            Err(InputError::MissingColumn(Column::Index(2)))
        ));
    }

    #[test]
    fn csv_bad_value() {
        assert!(matches!(
            csv("score\n1\nNaNa\n", "score"),
            Err(InputError::Parse { line: 3, .. })
        ));
    }

    #[test]
    fn error_display() {
        let e = InputError::from(SummaryError::EmptyInput);
        assert_eq!(e.to_string(), "empty sample set");
        assert!(e.source().is_some());
        let e = InputError::MissingColumn(Column::Name("x".into()));
        assert_eq!(e.to_string(), "no column 'x' in csv header");
    }
}
