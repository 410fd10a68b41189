//! Weighted Quick Union: the smaller tree always goes below the larger one.
//!
//! See [`WeightedQuickUnion`] for more information.
//!
//! [`WeightedQuickUnion`]: struct.WeightedQuickUnion.html

use crate::{
    disjoint_sets::{
        forest::{self, WeightedForest},
        Algorithm,
        UnionFind,
    },
    error::Error,
    report::{Counters, Outcome},
};

/// A forest of parent pointers balanced by tree size.
///
/// A tree only gains height when it is hung below a tree at least as large,
/// so an element at depth `d` lives in a tree of at least `2 ^ d` elements.
/// Every walk therefore takes at most `log2(n)` hops.
///
/// When both trees have the same size the root of `p` goes below the root of `q`.
/// Finding the roots is charged like Quick Union. Linking is charged three union units:
/// one for comparing the sizes, one for the parent write and one for the size write.
///
/// # Examples
///
/// ```
/// use connectivity::{Counters, UnionFind, WeightedQuickUnion};
///
/// let mut counters = Counters::default();
/// let mut set = WeightedQuickUnion::with_len(8).unwrap();
///
/// for q in 1 .. 8 {
///     set.union(0, q, &mut counters).unwrap();
/// }
///
/// // All elements hang directly below the root of the first union.
/// assert_eq!(set.id(), &[1; 8]);
/// assert_eq!(set.sizes()[1], 8);
/// ```
#[derive(Clone, Debug)]
pub struct WeightedQuickUnion {
    forest: WeightedForest,
}

impl WeightedQuickUnion {
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
}

impl UnionFind for WeightedQuickUnion {
    const ALGORITHM: Algorithm = Algorithm::WeightedQuickUnion;

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

        self.forest.link(i, j, counters);
        counters.links_cnt += 1;

        Ok(Outcome::Linked)
    }

    #[inline]
    fn representative(&self, index: usize) -> usize {
        self.forest.forest().find_final(index)
    }
}
