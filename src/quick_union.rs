use core::marker::PhantomData;

use crate::algorithm::Algorithm;
use crate::index::IndexType;
use crate::storage::{Owned, StorageMode};

/// Attach the lower-rank root below the higher-rank one; ties keep the first
/// argument's root and bump its rank.
#[derive(Debug, Default)]
pub struct ByRank;

/// Attach the smaller class below the larger one; ties keep the first
/// argument's root. Keeps exact class sizes at every root.
#[derive(Debug, Default)]
pub struct BySize;

/// No balancing: the second argument's root always goes below the first's.
/// Adversarial union orders can build an O(N)-height chain.
#[derive(Debug, Default)]
pub struct Unweighted;

/// Merge policy of [`QuickUnion`]: decides which of two distinct roots
/// survives and maintains the per-root weight entries.
///
/// Weight entries are meaningful at roots only; non-root entries are stale
/// leftovers and never read.
pub trait Heuristic {
    /// Weight array this policy needs: one entry per element, or none.
    type Weights<'a, M: StorageMode, const N: usize>: AsRef<[usize]> + AsMut<[usize]>;

    /// Weight assigned to every element at construction and reset.
    const INITIAL: usize;

    const USES_WEIGHTS: bool;

    fn fresh_weights<const N: usize>() -> Self::Weights<'static, Owned, N>;

    /// Links two distinct roots. The caller guarantees `a != b` and that both
    /// are roots.
    fn link<I: IndexType>(a: I, b: I, weights: &mut [usize], representative: &mut [I]);
}

impl Heuristic for Unweighted {
    type Weights<'a, M: StorageMode, const N: usize> = [usize; 0];

    const INITIAL: usize = 0;
    const USES_WEIGHTS: bool = false;

    fn fresh_weights<const N: usize>() -> [usize; 0] {
        []
    }

    fn link<I: IndexType>(a: I, b: I, _weights: &mut [usize], representative: &mut [I]) {
        representative[b.to_usize()] = a;
    }
}

impl Heuristic for ByRank {
    type Weights<'a, M: StorageMode, const N: usize> = M::Store<'a, usize, N>;

    const INITIAL: usize = 0;
    const USES_WEIGHTS: bool = true;

    fn fresh_weights<const N: usize>() -> Self::Weights<'static, Owned, N> {
        [Self::INITIAL; N]
    }

    fn link<I: IndexType>(mut a: I, mut b: I, rank: &mut [usize], representative: &mut [I]) {
        if rank[a.to_usize()] < rank[b.to_usize()] {
            core::mem::swap(&mut a, &mut b);
        }
        representative[b.to_usize()] = a;
        // Equal ranks are the only case where the surviving tree grows taller.
        if rank[a.to_usize()] == rank[b.to_usize()] {
            rank[a.to_usize()] += 1;
        }
    }
}

impl Heuristic for BySize {
    type Weights<'a, M: StorageMode, const N: usize> = M::Store<'a, usize, N>;

    const INITIAL: usize = 1;
    const USES_WEIGHTS: bool = true;

    fn fresh_weights<const N: usize>() -> Self::Weights<'static, Owned, N> {
        [Self::INITIAL; N]
    }

    fn link<I: IndexType>(mut a: I, mut b: I, size: &mut [usize], representative: &mut [I]) {
        if size[a.to_usize()] < size[b.to_usize()] {
            core::mem::swap(&mut a, &mut b);
        }
        representative[b.to_usize()] = a;
        size[a.to_usize()] += size[b.to_usize()];
    }
}

/// Parent-forest strategy.
///
/// `H` picks the merge heuristic ([`ByRank`], [`BySize`], [`Unweighted`]);
/// `COMPRESS` enables full path compression inside `find`. With the defaults
/// (by-rank, compressed) every operation is amortized near-constant.
#[derive(Debug, Default)]
pub struct QuickUnion<H = ByRank, const COMPRESS: bool = true> {
    heuristic: PhantomData<H>,
}

impl<I, H, const COMPRESS: bool> Algorithm<I> for QuickUnion<H, COMPRESS>
where
    I: IndexType,
    H: Heuristic,
{
    type Weights<'a, M: StorageMode, const N: usize> = H::Weights<'a, M, N>;

    const USES_WEIGHTS: bool = H::USES_WEIGHTS;

    fn find(representative: &mut [I], a: I) -> I {
        let mut root = a;
        while representative[root.to_usize()] != root {
            root = representative[root.to_usize()];
        }
        if COMPRESS {
            // Second pass: everything visited on the walk now points straight
            // at the root, so repeat lookups are O(1).
            let mut cursor = a;
            while cursor != root {
                cursor = core::mem::replace(&mut representative[cursor.to_usize()], root);
            }
        }
        root
    }

    fn unite(representative: &mut [I], weights: &mut [usize], a: I, b: I) -> bool {
        let root_a = Self::find(representative, a);
        let root_b = Self::find(representative, b);
        if root_a == root_b {
            return false;
        }
        H::link(root_a, root_b, weights, representative);
        true
    }

    fn fresh_weights<const N: usize>() -> Self::Weights<'static, Owned, N> {
        H::fresh_weights::<N>()
    }

    fn reset_weights(weights: &mut [usize]) {
        weights.fill(H::INITIAL);
    }
}
