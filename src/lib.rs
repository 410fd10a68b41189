//! The four classic [union-find] solutions to the dynamic connectivity problem.
//!
//! A universe of `N` elements labeled `0 .. N` starts out as `N` singleton components.
//! A stream of pairs `(p, q)` declares connections; every pair that spans two distinct
//! components merges them, every other pair is discarded.
//!
//! All four strategies implement the [`UnionFind`] trait and only differ in representation:
//!
//! - [`QuickFind`] keeps a component label per element. `connected` is `O(1)`,
//!   `union` relabels the whole array in `O(N)`.
//! - [`QuickUnion`] keeps a forest of parent pointers. Both operations follow the
//!   pointers to the root, which is `O(N)` on a degenerate chain.
//! - [`WeightedQuickUnion`] always hangs the smaller tree below the larger one,
//!   which bounds the height of every tree by `log2(N)`.
//! - [`CompressedWeightedQuickUnion`] additionally points every node on the two
//!   traversed paths straight at the new root after each union.
//!
//! Every operation is charged to a [`Counters`] value: a "find" unit per array access done
//! to locate a component and a "union" unit per array access done to merge them.
//! The [`run`] function folds a pair stream into one strategy and returns a [`RunReport`].
//!
//! ```
//! use connectivity::{run, QuickFind};
//!
//! let report = run::<QuickFind, _>(10, vec![(4, 3), (3, 8), (6, 5), (9, 4), (2, 1)]).unwrap();
//!
//! assert_eq!(report.links_cnt, 5);
//! assert_eq!(report.component_count(), 5);
//! ```
//!
//! [union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`UnionFind`]: disjoint_sets/trait.UnionFind.html
//! [`QuickFind`]: disjoint_sets/quick_find/struct.QuickFind.html
//! [`QuickUnion`]: disjoint_sets/quick_union/struct.QuickUnion.html
//! [`WeightedQuickUnion`]: disjoint_sets/weighted_quick_union/struct.WeightedQuickUnion.html
//! [`CompressedWeightedQuickUnion`]: disjoint_sets/compressed_weighted_quick_union/struct.CompressedWeightedQuickUnion.html
//! [`Counters`]: report/struct.Counters.html
//! [`run`]: run/fn.run.html
//! [`RunReport`]: report/struct.RunReport.html

/// A convenient macro to create a `BitVec` similar to `vec!`.
macro_rules! bit_vec {
    ($element: expr; $len: expr) => {
        bit_vec::BitVec::from_elem($len, $element)
    };
}

pub mod disjoint_sets;
pub mod error;
pub mod input;
pub mod report;
pub mod run;

pub use crate::{
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
    run::run,
};
