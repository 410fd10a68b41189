use crate::{
    error::Error,
    report::Counters,
};

/// Allocates `len` copies of `value`, reporting failure instead of aborting.
pub(crate) fn filled(len: usize, value: usize) -> Result<Vec<usize>, Error> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(len).map_err(|_| Error::AllocationFailure { len })?;
    vec.resize(len, value);

    Ok(vec)
}

/// Allocates the identity partition `0 .. len`.
pub(crate) fn identity(len: usize) -> Result<Vec<usize>, Error> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(len).map_err(|_| Error::AllocationFailure { len })?;
    vec.extend(0 .. len);

    Ok(vec)
}

/// Returns `index` if it is below `len`.
#[inline]
pub(crate) fn check(index: usize, len: usize) -> Result<usize, Error> {
    if index < len {
        Ok(index)
    } else {
        Err(Error::out_of_range(index, len))
    }
}

/// Parent pointers shared by the Quick Union family.
///
/// A union only ever sets the parent of a root, and it is set to another root.
/// No pointer ever leads back into its own subtree, so the pointers form a forest and
/// every walk reaches a root in fewer than `len` hops.
#[derive(Clone, Debug)]
pub(crate) struct Forest {
    parent: Vec<usize>,
}

impl Forest {
    pub(crate) fn with_len(len: usize) -> Result<Self, Error> {
        Ok(Self {
            parent: identity(len)?,
        })
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub(crate) fn parents(&self) -> &[usize] {
        &self.parent
    }

    #[inline]
    pub(crate) fn parent(&self, index: usize) -> usize {
        self.parent[index]
    }

    /// Follows the parents of `index` to its root, charging one find unit per hop.
    pub(crate) fn root(&self, index: usize, counters: &mut Counters) -> usize {
        let (root, hops) = self.walk(index);
        counters.find_cnt += hops;

        root
    }

    /// Returns the root of `index` without charging anything.
    #[inline]
    pub(crate) fn find_final(&self, index: usize) -> usize {
        self.walk(index).0
    }

    /// Returns the amount of hops from `index` to its root.
    #[inline]
    pub(crate) fn depth(&self, index: usize) -> usize {
        self.walk(index).1
    }

    /// Sets the parent of `index`, charging one union unit.
    #[inline]
    pub(crate) fn set_parent(&mut self, index: usize, parent: usize, counters: &mut Counters) {
        self.parent[index] = parent;
        counters.union_cnt += 1;
    }

    fn walk(&self, mut index: usize) -> (usize, usize) {
        // The forest invariant bounds every path by `len - 1` hops.
        for hops in 0 .. self.parent.len() {
            let parent = self.parent[index];

            if parent == index {
                return (index, hops)
            }

            index = parent;
        }

        unreachable!("the parent pointers of element {} form a cycle", index)
    }
}

/// A `Forest` that also tracks the size of every tree.
#[derive(Clone, Debug)]
pub(crate) struct WeightedForest {
    forest: Forest,
    /// Only meaningful at roots, where it holds the amount of elements in the tree.
    size: Vec<usize>,
}

impl WeightedForest {
    pub(crate) fn with_len(len: usize) -> Result<Self, Error> {
        Ok(Self {
            forest: Forest::with_len(len)?,
            size: filled(len, 1)?,
        })
    }

    #[inline]
    pub(crate) fn forest(&self) -> &Forest {
        &self.forest
    }

    #[inline]
    pub(crate) fn forest_mut(&mut self) -> &mut Forest {
        &mut self.forest
    }

    #[inline]
    pub(crate) fn sizes(&self) -> &[usize] {
        &self.size
    }

    /// Hangs the smaller of the roots `i` and `j` below the larger and returns the new root.
    ///
    /// On equal sizes `i` goes below `j`.
    /// Charges the size comparison, the parent write and the size write as union units.
    pub(crate) fn link(&mut self, i: usize, j: usize, counters: &mut Counters) -> usize {
        counters.union_cnt += 1;
        let (child, root) = if self.size[i] > self.size[j] {
            (j, i)
        } else {
            (i, j)
        };

        self.forest.set_parent(child, root, counters);
        self.size[root] += self.size[child];
        counters.union_cnt += 1;

        root
    }
}
