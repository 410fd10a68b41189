//! Weighted Quick Union with full path compression after every union.
//!
//! See [`CompressedWeightedQuickUnion`] for more information.
//!
//! [`CompressedWeightedQuickUnion`]: struct.CompressedWeightedQuickUnion.html

use crate::{
    disjoint_sets::{
        forest::{self, WeightedForest},
        Algorithm,
        UnionFind,
    },
    error::Error,
    report::{Counters, Outcome},
};

/// A size balanced forest whose union paths are flattened.
///
/// `union` links the two roots exactly like [`WeightedQuickUnion`].
/// Afterwards it walks from `p` and from `q` a second time and points every node on
/// the way directly at the new root, charging one union unit per rewritten pointer.
/// Elements touched by a union are one hop away from their root until later unions
/// hang that root below another one.
///
/// Queries do not compress, so `connected` leaves the partition untouched.
///
/// [`WeightedQuickUnion`]: ../weighted_quick_union/struct.WeightedQuickUnion.html
///
/// # Examples
///
/// ```
/// use connectivity::{CompressedWeightedQuickUnion, Counters, UnionFind};
///
/// let mut counters = Counters::default();
/// let mut set = CompressedWeightedQuickUnion::with_len(4).unwrap();
///
/// set.union(0, 1, &mut counters).unwrap();
/// set.union(2, 3, &mut counters).unwrap();
/// set.union(0, 2, &mut counters).unwrap();
///
/// // Without compression 0 would be two hops away from the root 3.
/// assert_eq!(set.id(), &[3, 3, 3, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct CompressedWeightedQuickUnion {
    forest: WeightedForest,
}

impl CompressedWeightedQuickUnion {
    /// Returns the size array; an entry is only meaningful at a root.
    #[inline]
    pub fn sizes(&self) -> &[usize] {
        self.forest.sizes()
    }

    /// Returns the amount of parent hops from `index` to its root.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    pub fn depth(&self, index: usize) -> usize {
        self.forest.forest().depth(index)
    }

    fn roots(&self, p: usize, q: usize, counters: &mut Counters) -> Result<(usize, usize), Error> {
        let p = forest::check(p, self.len())?;
        let q = forest::check(q, self.len())?;

        let i = self.forest.forest().root(p, counters);
        let j = self.forest.forest().root(q, counters);
        counters.find_cnt += 1;

        Ok((i, j))
    }

    /// Points every node on the path from `index` to `root` directly at `root`.
    fn compress(&mut self, mut index: usize, root: usize, counters: &mut Counters) {
        let forest = self.forest.forest_mut();

        while index != forest.parent(index) {
            let next = forest.parent(index);
            forest.set_parent(index, root, counters);
            index = next;
        }
    }
}

impl UnionFind for CompressedWeightedQuickUnion {
    const ALGORITHM: Algorithm = Algorithm::CompressedWeightedQuickUnion;

    fn with_len(len: usize) -> Result<Self, Error> {
        Ok(Self {
            forest: WeightedForest::with_len(len)?,
        })
    }

    #[inline]
    fn len(&self) -> usize {
        self.forest.forest().len()
    }

    #[inline]
    fn id(&self) -> &[usize] {
        self.forest.forest().parents()
    }

    fn connected(&self, p: usize, q: usize, counters: &mut Counters) -> Result<bool, Error> {
        let (i, j) = self.roots(p, q, counters)?;

        Ok(i == j)
    }

    fn union(&mut self, p: usize, q: usize, counters: &mut Counters) -> Result<Outcome, Error> {
        let (i, j) = self.roots(p, q, counters)?;

        if i == j {
            return Ok(Outcome::Discarded)
        }

        let root = self.forest.link(i, j, counters);
        counters.links_cnt += 1;

        // Both paths now end at `root`, one of them through the old root below it.
        self.compress(p, root, counters);
        self.compress(q, root, counters);

        Ok(Outcome::Linked)
    }

    #[inline]
    fn representative(&self, index: usize) -> usize {
        self.forest.forest().find_final(index)
    }
}
