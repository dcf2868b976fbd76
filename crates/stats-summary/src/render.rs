use crate::percentile::Percentile;
use crate::summary::Summary;
use std::fmt::{Display, Formatter};

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Entries  : {}", self.count())?;
        writeln!(f, "Mean     : {:6.4}", self.mean())?;
        writeln!(f, "StdDev   : {:6.4}", self.std_dev())?;
        writeln!(f, "Variance : {:6.4}", self.variance())?;
        writeln!(f, "Minimum  : {:6.4}", self.minimum())?;
        writeln!(f, "Maximum  : {:6.4}", self.maximum())?;
        write!(f, "Percentiles")?;
        for p in Percentile::ALL {
            write!(f, "\n    {} : {:6.4}", p.label(), self.percentile(p))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Summary;

    #[test]
    fn layout() {
        let summary = Summary::compute(&[4.0, 3.0, 2.0, 1.0]).unwrap();
        assert_eq!(
            summary.to_string(),
            "Entries  : 4
Mean     : 2.5000
StdDev   : 1.2910
Variance : 1.6667
Minimum  : 1.0000
Maximum  : 4.0000
Percentiles
    25th : 2.0000
    50th : 3.0000
    75th : 4.0000
    95th : 4.0000
    99th : 4.0000"
        );
    }

    #[test]
    fn pads_small_values() {
        let summary = Summary::compute(&[0.5]).unwrap();
        let text = summary.to_string();
        assert!(text.contains("Mean     : 0.5000\n"));
        assert!(text.contains("StdDev   : 0.0000\n"));
        assert!(text.ends_with("99th : 0.5000"));
    }

    #[test]
    fn wide_values_keep_precision() {
        let summary = Summary::compute(&[256.0, 1.0, 1024.0, 512.0]).unwrap();
        let text = summary.to_string();
        assert!(text.contains("Mean     : 448.2500\n"));
        assert!(text.contains("StdDev   : 436.8618\n"));
        assert!(text.contains("Variance : 190848.2500\n"));
        assert_eq!(text.lines().count(), 12);
    }
}
