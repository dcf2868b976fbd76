use clap::ValueEnum;
use serde::Serialize;
use stats_summary::{Percentile, Summary};
use std::io;
use std::io::Write;

#[derive(Debug, Copy, Clone, Default, PartialEq, ValueEnum)]
pub(crate) enum Output {
    /// Default classic output for human reading, one block per input.
    #[default]
    Default,
    /// Json array with one object per input.
    Json,
    /// CSV output. One row per input.
    CSV,
}

/// Summary of a single input
#[derive(Debug, Serialize)]
pub(crate) struct Report {
    pub(crate) source: String,
    pub(crate) summary: Summary,
}

impl Output {
    pub(crate) fn display_reports(&self, mut w: impl Write, reports: &[Report]) -> io::Result<()> {
        match self {
            Output::Default => {
                for (i, report) in reports.iter().enumerate() {
                    if reports.len() > 1 {
                        if i > 0 {
                            writeln!(w)?;
                        }
                        writeln!(w, "==> {} <==", report.source)?;
                    }
                    writeln!(w, "{}", report.summary)?;
                }
            }
            Output::Json => {
                serde_json::to_writer_pretty(&mut w, reports)?;
                writeln!(w)?;
            }
            Output::CSV => {
                let mut csv = csv::Writer::from_writer(w);
                csv.write_record(
                    [
                        "source", "count", "mean", "std_dev", "variance", "minimum", "maximum",
                    ]
                    .into_iter()
                    .map(String::from)
                    .chain(Percentile::ALL.map(|p| format!("percentile_{}", p.rank()))),
                )?;
                for report in reports {
                    let s = &report.summary;
                    csv.write_record(
                        [report.source.clone(), s.count().to_string()]
                            .into_iter()
                            .chain(
                                [s.mean(), s.std_dev(), s.variance(), s.minimum(), s.maximum()]
                                    .into_iter()
                                    .chain(Percentile::ALL.map(|p| s.percentile(p)))
                                    .map(|x| x.to_string()),
                            ),
                    )?;
                }
                csv.flush()?;
            }
        }
        Ok(())
    }
}
