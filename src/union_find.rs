use core::fmt;
use core::marker::PhantomData;

use displaydoc::Display;
use rustc_hash::FxHashMap;

use crate::algorithm::Algorithm;
use crate::error::{BuildError, OutOfRangeIndex};
use crate::index::IndexType;
use crate::quick_union::{BySize, QuickUnion};
use crate::storage::{Borrowed, Owned, StorageMode};

/// Disjoint-set structure over the fixed universe `[0, N)`.
///
/// Binds one strategy `A` ([`QuickFind`](crate::QuickFind) or
/// [`QuickUnion`]), an index width `I` (any [`IndexType`] able to represent
/// `N - 1`), the capacity `N`, and a storage mode `M` ([`Owned`] or
/// [`Borrowed`]). The operation surface is identical for every combination;
/// only the complexity profile changes.
///
/// Every id is validated before any store is touched, so a failing call
/// leaves the partition exactly as it was.
pub struct UnionFind<'s, A, I, const N: usize, M = Owned>
where
    A: Algorithm<I>,
    I: IndexType,
    M: StorageMode,
{
    representative: M::Store<'s, I, N>,
    weights: A::Weights<'s, M, N>,
    classes: usize,
    algorithm: PhantomData<A>,
}

impl<A, I, const N: usize> UnionFind<'static, A, I, N, Owned>
where
    A: Algorithm<I>,
    I: IndexType,
{
    /// Builds an owned instance with every element in its own class.
    ///
    /// Fails with [`BuildError::CapacityOverflow`] when `I` cannot represent
    /// `N - 1`.
    pub fn new() -> Result<Self, BuildError> {
        if !I::fits(N) {
            return Err(BuildError::CapacityOverflow { capacity: N });
        }
        Ok(Self {
            representative: core::array::from_fn(|id| I::from_usize(id)),
            weights: A::fresh_weights::<N>(),
            classes: N,
            algorithm: PhantomData,
        })
    }
}

impl<'s, A, I, const N: usize> UnionFind<'s, A, I, N, Borrowed>
where
    A: Algorithm<I>,
    I: IndexType,
{
    /// Builds an instance over caller-owned storage.
    ///
    /// The representative buffer must be identity-initialized
    /// (`representative[i] == i`) and of length exactly `N`; weighted
    /// strategies additionally take a weight buffer of length `N` filled
    /// with the heuristic's initial value, unweighted ones take `[]`.
    /// Identity initialization is the caller's contract; lengths are
    /// validated here.
    pub fn from_storage(
        representative: &'s mut [I],
        weights: A::Weights<'s, Borrowed, N>,
    ) -> Result<Self, BuildError> {
        if !I::fits(N) {
            return Err(BuildError::CapacityOverflow { capacity: N });
        }
        if representative.len() != N {
            return Err(BuildError::InvalidStorageLength {
                expected: N,
                actual: representative.len(),
            });
        }
        let expected_weights = if A::USES_WEIGHTS { N } else { 0 };
        if weights.as_ref().len() != expected_weights {
            return Err(BuildError::InvalidStorageLength {
                expected: expected_weights,
                actual: weights.as_ref().len(),
            });
        }
        Ok(Self {
            representative,
            weights,
            classes: N,
            algorithm: PhantomData,
        })
    }
}

impl<'s, A, I, const N: usize, M> UnionFind<'s, A, I, N, M>
where
    A: Algorithm<I>,
    I: IndexType,
    M: StorageMode,
{
    fn check(&self, id: I) -> Result<(), OutOfRangeIndex> {
        if id.to_usize() < N {
            Ok(())
        } else {
            Err(OutOfRangeIndex {
                index: id.to_usize(),
                len: N,
            })
        }
    }

    /// Merges the classes of `a` and `b`. Returns `false` when they were
    /// already the same class; the call is then a no-op.
    pub fn union(&mut self, a: I, b: I) -> Result<bool, OutOfRangeIndex> {
        self.check(a)?;
        self.check(b)?;
        let merged = A::unite(self.representative.as_mut(), self.weights.as_mut(), a, b);
        if merged {
            self.classes -= 1;
        }
        Ok(merged)
    }

    /// Resolves `a` to its class representative.
    ///
    /// Under a compressing quick-union this rewrites pointers along the
    /// walk; the partition itself never changes.
    pub fn find(&mut self, a: I) -> Result<I, OutOfRangeIndex> {
        self.check(a)?;
        Ok(A::find(self.representative.as_mut(), a))
    }

    /// Whether `a` and `b` are currently in the same class.
    pub fn connected(&mut self, a: I, b: I) -> Result<bool, OutOfRangeIndex> {
        self.check(a)?;
        self.check(b)?;
        let representative = self.representative.as_mut();
        Ok(A::find(representative, a) == A::find(representative, b))
    }

    /// Returns every element to its own singleton class.
    pub fn reset(&mut self) {
        for (id, entry) in self.representative.as_mut().iter_mut().enumerate() {
            *entry = I::from_usize(id);
        }
        A::reset_weights(self.weights.as_mut());
        self.classes = N;
    }

    /// The capacity `N`.
    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Number of distinct classes. Starts at `N` and drops by one per
    /// merging [`union`](Self::union).
    pub fn class_count(&self) -> usize {
        self.classes
    }

    /// One pass over the universe, bucketing every element by its current
    /// [`find`](Self::find) result. Groups come out ordered by root id,
    /// members ascending.
    pub fn groups(&mut self) -> Groups<I> {
        let representative = self.representative.as_mut();
        let mut buckets: FxHashMap<usize, Vec<I>> = FxHashMap::default();
        for id in 0..N {
            let root = A::find(representative, I::from_usize(id));
            buckets
                .entry(root.to_usize())
                .or_default()
                .push(I::from_usize(id));
        }
        let mut classes: Vec<Group<I>> = buckets
            .into_iter()
            .map(|(root, members)| Group {
                root: I::from_usize(root),
                members,
            })
            .collect();
        classes.sort_unstable_by_key(|group| group.root.to_usize());
        Groups {
            inner: classes.into_iter(),
        }
    }

    /// The raw representative store. Parent pointers under quick-union,
    /// final class ids under quick-find.
    pub fn representative(&self) -> &[I] {
        self.representative.as_ref()
    }

    /// The raw weight store. Empty for strategies with no per-root
    /// bookkeeping; entries are only meaningful at roots.
    pub fn weights(&self) -> &[usize] {
        self.weights.as_ref()
    }
}

impl<'s, I, const N: usize, M, const COMPRESS: bool>
    UnionFind<'s, QuickUnion<BySize, COMPRESS>, I, N, M>
where
    I: IndexType,
    M: StorageMode,
{
    /// Number of elements in `a`'s class. Only the by-size heuristic keeps
    /// exact counts, so this is only offered there.
    pub fn class_size(&mut self, a: I) -> Result<usize, OutOfRangeIndex> {
        self.check(a)?;
        let root =
            <QuickUnion<BySize, COMPRESS> as Algorithm<I>>::find(self.representative.as_mut(), a);
        Ok(self.weights.as_ref()[root.to_usize()])
    }
}

impl<A, I, const N: usize, M> fmt::Debug for UnionFind<'_, A, I, N, M>
where
    A: Algorithm<I>,
    I: IndexType,
    M: StorageMode,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnionFind")
            .field("representative", &self.representative.as_ref())
            .field("weights", &self.weights.as_ref())
            .field("classes", &self.classes)
            .finish()
    }
}

#[derive(Clone, Debug, Display, PartialEq, Eq)]
/// class {root}: {members:?}
pub struct Group<I: IndexType> {
    pub root: I,
    pub members: Vec<I>,
}

/// Iterator over the current partition, one [`Group`] per class, ordered by
/// root id. Restartable: clone it, or call [`groups`](UnionFind::groups)
/// again.
#[derive(Clone, Debug)]
pub struct Groups<I: IndexType> {
    inner: std::vec::IntoIter<Group<I>>,
}

impl<I: IndexType> Iterator for Groups<I> {
    type Item = Group<I>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: IndexType> ExactSizeIterator for Groups<I> {}
