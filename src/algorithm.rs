use crate::index::IndexType;
use crate::storage::{Owned, StorageMode};

/// A union-find strategy.
///
/// Strategies are stateless markers; all operations are associated functions
/// over raw slices, so the same code path serves owned and borrowed storage.
/// The meaning of `representative` is strategy-dependent: quick-find stores
/// the final class id of each element, quick-union stores a parent pointer
/// with roots satisfying `representative[r] == r`.
pub trait Algorithm<I: IndexType> {
    /// Weight array kept next to the representative array. Zero-length for
    /// strategies with no per-root bookkeeping.
    type Weights<'a, M: StorageMode, const N: usize>: AsRef<[usize]> + AsMut<[usize]>;

    /// Whether a weight entry is kept per element. Drives length validation
    /// of borrowed weight storage.
    const USES_WEIGHTS: bool;

    /// Resolves `a` to its class representative. May rewrite pointers along
    /// the way (path compression) but never changes the partition.
    fn find(representative: &mut [I], a: I) -> I;

    /// Merges the classes of `a` and `b`. Returns `false` (and changes
    /// nothing) when they are already the same class.
    fn unite(representative: &mut [I], weights: &mut [usize], a: I, b: I) -> bool;

    /// A freshly initialized owned weight store.
    fn fresh_weights<const N: usize>() -> Self::Weights<'static, Owned, N>;

    /// Rewrites `weights` to its freshly-constructed value.
    fn reset_weights(weights: &mut [usize]);
}
