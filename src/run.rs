//! Folding a pair stream into one of the strategies.

use {
    tracing::{debug, info, warn},
    crate::{
        disjoint_sets::{
            Algorithm,
            UnionFind,
            compressed_weighted_quick_union::CompressedWeightedQuickUnion,
            quick_find::QuickFind,
            quick_union::QuickUnion,
            weighted_quick_union::WeightedQuickUnion,
        },
        error::Error,
        report::{Counters, Outcome, RunReport, Step},
    },
};

/// Runs the strategy `U` over `pairs` on a universe of `len` elements.
///
/// The pairs are processed one at a time in order. The run stops at the end of `pairs`,
/// or fails with `Error::OutOfRangeElement` at the first element outside `0 .. len`.
/// Negative elements are out of range too.
///
/// The report keeps a `Step` for every processed pair, so its size grows with the length
/// of the stream and not only with `len`.
///
/// # Examples
///
/// ```
/// use connectivity::{run, Error, Outcome, QuickUnion};
///
/// let report = run::<QuickUnion, _>(4, vec![(0, 1), (1, 0), (2, 3)]).unwrap();
///
/// assert_eq!(report.steps[1].outcome, Outcome::Discarded);
/// assert_eq!(report.groups, vec![vec![0, 1], vec![2, 3]]);
///
/// let error = run::<QuickUnion, _>(4, vec![(0, -1)]).unwrap_err();
/// assert_eq!(error, Error::OutOfRangeElement { element: -1, len: 4 });
/// ```
pub fn run<U, I>(len: usize, pairs: I) -> Result<RunReport, Error> where
    U: UnionFind,
    I: IntoIterator<Item = (i64, i64)>,
{
    let algorithm = U::ALGORITHM;
    let mut set = U::with_len(len)?;
    let mut counters = Counters::default();
    let mut steps = Vec::new();

    for (p, q) in pairs {
        counters.pairs_cnt += 1;

        let (p, q) = match (element(p, len), element(q, len)) {
            (Ok(p), Ok(q)) => (p, q),
            (Err(error), _) | (_, Err(error)) => {
                warn!(algorithm = %algorithm, pair = counters.pairs_cnt, %error, "rejecting pair");
                return Err(error)
            },
        };

        let outcome = set.union(p, q, &mut counters)?;
        debug!(algorithm = %algorithm, p, q, linked = outcome == Outcome::Linked);

        steps.push(Step { p, q, outcome });
    }

    debug_assert_eq!(set.amount_of_sets(), len - counters.links_cnt);
    let groups = set.components()?;

    info!(
        algorithm = %algorithm,
        len,
        pairs = counters.pairs_cnt,
        links = counters.links_cnt,
        finds = counters.find_cnt,
        unions = counters.union_cnt,
        "run finished"
    );

    Ok(RunReport::new(algorithm, len, counters, steps, groups))
}

impl Algorithm {
    /// Runs this strategy over `pairs`, see [`run`].
    ///
    /// [`run`]: ../run/fn.run.html
    pub fn run<I>(self, len: usize, pairs: I) -> Result<RunReport, Error> where
        I: IntoIterator<Item = (i64, i64)>,
    {
        match self {
            Algorithm::QuickFind => run::<QuickFind, I>(len, pairs),
            Algorithm::QuickUnion => run::<QuickUnion, I>(len, pairs),
            Algorithm::WeightedQuickUnion => run::<WeightedQuickUnion, I>(len, pairs),
            Algorithm::CompressedWeightedQuickUnion => {
                run::<CompressedWeightedQuickUnion, I>(len, pairs)
            },
        }
    }
}

/// Converts an input value to an index below `len`.
fn element(value: i64, len: usize) -> Result<usize, Error> {
    usize::try_from(value)
        .ok()
        .filter(|&index| index < len)
        .ok_or(Error::OutOfRangeElement { element: value.into(), len })
}
