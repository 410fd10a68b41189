//! Quick Union: every element stores a parent and sets are trees.
//!
//! See [`QuickUnion`] for more information.
//!
//! [`QuickUnion`]: struct.QuickUnion.html

use crate::{
    disjoint_sets::{
        forest::{self, Forest},
        Algorithm,
        UnionFind,
    },
    error::Error,
    report::{Counters, Outcome},
};

/// A partition stored as a forest of parent pointers without any balancing.
///
/// Both `connected` and `union` walk to the roots of `p` and `q`, which takes time
/// proportional to the height of the trees.
/// A union always puts the root of `p` below the root of `q`, so a stream like
/// `(0, 1), (0, 2), (0, 3), ...` grows a chain and makes every walk `O(n)`.
///
/// Each hop of a walk is charged one find unit and comparing the two roots one more.
/// Linking two roots is charged one union unit.
#[derive(Clone, Debug)]
pub struct QuickUnion {
    forest: Forest,
}

impl QuickUnion {
    /// Returns the roots of `p` and `q` after a bounds check, charging the walks.
    fn roots(&self, p: usize, q: usize, counters: &mut Counters) -> Result<(usize, usize), Error> {
        let p = forest::check(p, self.len())?;
        let q = forest::check(q, self.len())?;

        let i = self.forest.root(p, counters);
        let j = self.forest.root(q, counters);
        counters.find_cnt += 1;

        Ok((i, j))
    }

    /// Returns the amount of parent hops from `index` to its root.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    pub fn depth(&self, index: usize) -> usize {
        self.forest.depth(index)
    }
}

impl UnionFind for QuickUnion {
    const ALGORITHM: Algorithm = Algorithm::QuickUnion;

    fn with_len(len: usize) -> Result<Self, Error> {
        Ok(Self {
            forest: Forest::with_len(len)?,
        })
    }

    #[inline]
    fn len(&self) -> usize {
        self.forest.len()
    }

    #[inline]
    fn id(&self) -> &[usize] {
        self.forest.parents()
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

        self.forest.set_parent(i, j, counters);
        counters.links_cnt += 1;

        Ok(Outcome::Linked)
    }

    #[inline]
    fn representative(&self, index: usize) -> usize {
        self.forest.find_final(index)
    }
}
