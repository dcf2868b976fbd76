//! Descriptive statistics of a finite sample set: count, mean, sample variance and standard
//! deviation, extrema, and the 25th/50th/75th/95th/99th nearest rank percentiles.
//!
//! ```
//! use stats_summary::{Percentile, Summary};
//! let summary = Summary::compute(&[4.0, 3.0, 2.0, 1.0]).unwrap();
//! assert_eq!(summary.mean(), 2.5);
//! assert_eq!(summary.percentile(Percentile::P50), 3.0);
//! ```

pub use error::SummaryError;
pub use percentile::{nearest_rank_index, Percentile};
pub use summary::{compute_summary, Summarize, Summary};

mod error;
mod percentile;
mod render;
mod summary;
