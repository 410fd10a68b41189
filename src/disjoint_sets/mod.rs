//! The four [disjoint-sets/union-find] strategies and the capability they share.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure

use {
    std::{fmt, str::FromStr},
    crate::{
        error::Error,
        report::{Counters, Outcome},
    },
};

pub mod compressed_weighted_quick_union;
mod forest;
pub mod quick_find;
pub mod quick_union;
pub mod weighted_quick_union;

/// A partition of the elements `0 .. len` that can only become coarser.
///
/// Every element starts in its own set. The methods that take a `Counters` charge the
/// array accesses they perform to it; `representative`, `amount_of_sets` and `components`
/// are bookkeeping for reports and tests and are not charged.
///
/// # Examples
///
/// ```
/// use connectivity::{Counters, Outcome, UnionFind, WeightedQuickUnion};
///
/// let mut counters = Counters::default();
/// let mut set = WeightedQuickUnion::with_len(4).unwrap();
///
/// assert_eq!(set.union(1, 2, &mut counters), Ok(Outcome::Linked));
/// assert_eq!(set.union(2, 1, &mut counters), Ok(Outcome::Discarded));
/// assert_eq!(set.connected(1, 2, &mut counters), Ok(true));
/// assert_eq!(set.connected(0, 2, &mut counters), Ok(false));
///
/// assert_eq!(counters.links_cnt, 1);
/// assert_eq!(set.amount_of_sets(), 3);
/// ```
pub trait UnionFind: Sized {
    /// The strategy implemented by this type.
    const ALGORITHM: Algorithm;

    /// Creates the identity partition of `len` singleton sets.
    ///
    /// Returns `Error::AllocationFailure` if the arrays cannot be reserved.
    fn with_len(len: usize) -> Result<Self, Error>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the universe has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the partition array: labels for Quick Find, parent pointers otherwise.
    fn id(&self) -> &[usize];

    /// Returns `true` if `p` and `q` are in the same set.
    ///
    /// Returns `Error::OutOfRangeElement` if `p` or `q` is not below `len`.
    fn connected(&self, p: usize, q: usize, counters: &mut Counters) -> Result<bool, Error>;

    /// Joins the sets of `p` and `q` unless they already are the same set.
    ///
    /// Increments `counters.links_cnt` when two sets were joined.
    /// Returns `Error::OutOfRangeElement` without touching the partition if `p` or `q`
    /// is not below `len`.
    fn union(&mut self, p: usize, q: usize, counters: &mut Counters) -> Result<Outcome, Error>;

    /// Gives the representative of the set that `index` belongs to.
    ///
    /// This is the label of `index` for Quick Find and its root otherwise.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    fn representative(&self, index: usize) -> usize;

    /// Returns the amount of sets.
    fn amount_of_sets(&self) -> usize {
        let mut done = bit_vec![false; self.len()];
        let mut count = 0;

        for index in 0 .. self.len() {
            let root = self.representative(index);

            if !done[root] {
                done.set(root, true);
                count += 1;
            }
        }

        count
    }

    /// Groups the elements by set in a single labeling scan.
    ///
    /// Groups appear in the order their first element is met and
    /// the members of every group are increasing.
    fn components(&self) -> Result<Vec<Vec<usize>>, Error> {
        const UNSEEN: usize = !0;

        // Maps a representative to the position of its group.
        let mut slots = forest::filled(self.len(), UNSEEN)?;
        let mut groups: Vec<Vec<usize>> = Vec::new();

        for index in 0 .. self.len() {
            let root = self.representative(index);

            if slots[root] == UNSEEN {
                slots[root] = groups.len();
                groups.push(Vec::new());
            }

            groups[slots[root]].push(index);
        }

        Ok(groups)
    }
}

/// Selects one of the four strategies at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Algorithm {
    QuickFind,
    QuickUnion,
    WeightedQuickUnion,
    CompressedWeightedQuickUnion,
}

impl Algorithm {
    /// All strategies from the slowest to the fastest.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::QuickFind,
        Algorithm::QuickUnion,
        Algorithm::WeightedQuickUnion,
        Algorithm::CompressedWeightedQuickUnion,
    ];

    /// The short tag used in reports.
    pub fn tag(self) -> &'static str {
        match self {
            Algorithm::QuickFind => "QF",
            Algorithm::QuickUnion => "QU",
            Algorithm::WeightedQuickUnion => "WQU",
            Algorithm::CompressedWeightedQuickUnion => "CWQU",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.tag())
    }
}

/// The error returned when a string names no known algorithm.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm `{0}`, expected one of qf, qu, wqu, cwqu")]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "qf" | "quick-find" => Ok(Algorithm::QuickFind),
            "qu" | "quick-union" => Ok(Algorithm::QuickUnion),
            "wqu" | "weighted-quick-union" => Ok(Algorithm::WeightedQuickUnion),
            "cwqu" | "compressed-weighted-quick-union" => {
                Ok(Algorithm::CompressedWeightedQuickUnion)
            },
            _ => Err(ParseAlgorithmError(name.to_owned())),
        }
    }
}
