//! Quick Find: every element stores the label of its component.
//!
//! See [`QuickFind`] for more information.
//!
//! [`QuickFind`]: struct.QuickFind.html

use crate::{
    disjoint_sets::{forest, Algorithm, UnionFind},
    error::Error,
    report::{Counters, Outcome},
};

/// A partition where all elements of a set share one label.
///
/// `connected` compares two labels in `O(1)` time.
/// `union` sweeps the whole array to relabel one set and always takes `O(n)` time.
///
/// A `connected` check is charged one find unit. The relabeling sweep is charged one union
/// unit per element read and another one per element that is actually relabeled.
///
/// # Examples
///
/// ```
/// use connectivity::{Counters, QuickFind, UnionFind};
///
/// let mut counters = Counters::default();
/// let mut set = QuickFind::with_len(3).unwrap();
///
/// set.union(0, 2, &mut counters).unwrap();
///
/// // The labels of the first set were rewritten to the label of the second.
/// assert_eq!(set.id(), &[2, 1, 2]);
/// assert_eq!(counters.find_cnt, 1);
/// assert_eq!(counters.union_cnt, 3 + 1);
/// ```
#[derive(Clone, Debug)]
pub struct QuickFind {
    /// The component label of each element.
    id: Vec<usize>,
}

impl UnionFind for QuickFind {
    const ALGORITHM: Algorithm = Algorithm::QuickFind;

    fn with_len(len: usize) -> Result<Self, Error> {
        Ok(Self {
            id: forest::identity(len)?,
        })
    }

    #[inline]
    fn len(&self) -> usize {
        self.id.len()
    }

    #[inline]
    fn id(&self) -> &[usize] {
        &self.id
    }

    fn connected(&self, p: usize, q: usize, counters: &mut Counters) -> Result<bool, Error> {
        let p = forest::check(p, self.len())?;
        let q = forest::check(q, self.len())?;

        counters.find_cnt += 1;
        Ok(self.id[p] == self.id[q])
    }

    fn union(&mut self, p: usize, q: usize, counters: &mut Counters) -> Result<Outcome, Error> {
        if self.connected(p, q, counters)? {
            return Ok(Outcome::Discarded)
        }

        let old = self.id[p];
        let new = self.id[q];

        for label in self.id.iter_mut() {
            counters.union_cnt += 1;

            if *label == old {
                *label = new;
                counters.union_cnt += 1;
            }
        }

        counters.links_cnt += 1;
        Ok(Outcome::Linked)
    }

    #[inline]
    fn representative(&self, index: usize) -> usize {
        self.id[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relabels_whole_component() {
        let mut counters = Counters::default();
        let mut set = QuickFind::with_len(5).unwrap();

        assert_eq!(set.union(0, 1, &mut counters), Ok(Outcome::Linked));
        assert_eq!(set.union(1, 2, &mut counters), Ok(Outcome::Linked));
        assert_eq!(set.id(), &[2, 2, 2, 3, 4]);

        // One find each, five reads each and one plus two relabels.
        assert_eq!(counters, Counters { pairs_cnt: 0, links_cnt: 2, find_cnt: 2, union_cnt: 13 });
    }

    #[test]
    fn discard_charges_only_the_check() {
        let mut counters = Counters::default();
        let mut set = QuickFind::with_len(3).unwrap();

        set.union(0, 1, &mut counters).unwrap();
        let before = counters;

        assert_eq!(set.union(1, 0, &mut counters), Ok(Outcome::Discarded));
        assert_eq!(counters.find_cnt, before.find_cnt + 1);
        assert_eq!(counters.union_cnt, before.union_cnt);
        assert_eq!(counters.links_cnt, 1);
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut counters = Counters::default();
        let mut set = QuickFind::with_len(5).unwrap();

        assert_eq!(
            set.union(5, 0, &mut counters),
            Err(Error::OutOfRangeElement { element: 5, len: 5 }),
        );
        assert_eq!(set.id(), &[0, 1, 2, 3, 4]);
        assert_eq!(counters, Counters::default());
    }
}
