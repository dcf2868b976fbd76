/// Percentile ranks stored in a [Summary](crate::Summary).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Percentile {
    P25,
    P50,
    P75,
    P95,
    P99,
}

impl Percentile {
    pub const ALL: [Percentile; 5] = [
        Percentile::P25,
        Percentile::P50,
        Percentile::P75,
        Percentile::P95,
        Percentile::P99,
    ];

    pub const fn rank(self) -> usize {
        match self {
            Percentile::P25 => 25,
            Percentile::P50 => 50,
            Percentile::P75 => 75,
            Percentile::P95 => 95,
            Percentile::P99 => 99,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Percentile::P25 => "25th",
            Percentile::P50 => "50th",
            Percentile::P75 => "75th",
            Percentile::P95 => "95th",
            Percentile::P99 => "99th",
        }
    }
}

/// Index of the `p` percentile in an ascending sorted sample set of `count` values.
///
/// Nearest rank without interpolation: `floor(count * rank / 100)`. Every rank is below 100, so
/// the index is in bounds whenever `count >= 1`.
pub const fn nearest_rank_index(count: usize, p: Percentile) -> usize {
    let rank = p.rank();
    // Split on 100 so `count * rank` can't overflow
    (count / 100) * rank + (count % 100) * rank / 100
}
