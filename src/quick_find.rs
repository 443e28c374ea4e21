use crate::algorithm::Algorithm;
use crate::index::IndexType;
use crate::storage::StorageMode;

/// Representative-table strategy: every element stores its final class id.
///
/// `find` is a single array read; `union` pays for it with a full scan that
/// rewrites one class id to the other, O(N) regardless of class sizes.
#[derive(Debug, Default)]
pub struct QuickFind;

impl<I: IndexType> Algorithm<I> for QuickFind {
    type Weights<'a, M: StorageMode, const N: usize> = [usize; 0];

    const USES_WEIGHTS: bool = false;

    fn find(representative: &mut [I], a: I) -> I {
        representative[a.to_usize()]
    }

    fn unite(representative: &mut [I], _weights: &mut [usize], a: I, b: I) -> bool {
        let root_a = representative[a.to_usize()];
        let root_b = representative[b.to_usize()];
        if root_a == root_b {
            return false;
        }
        for entry in representative {
            if *entry == root_b {
                *entry = root_a;
            }
        }
        true
    }

    fn fresh_weights<const N: usize>() -> [usize; 0] {
        []
    }

    fn reset_weights(_weights: &mut [usize]) {}
}

#[cfg(test)]
mod tests {
    use crate::{QuickFind, UnionFind};

    #[test]
    fn transitive_connectivity() {
        let mut uf = UnionFind::<QuickFind, u32, 10>::new().unwrap();
        uf.union(4, 3).unwrap();
        uf.union(3, 8).unwrap();
        uf.union(6, 5).unwrap();
        uf.union(9, 4).unwrap();
        assert!(uf.connected(3, 9).unwrap());
        assert!(!uf.connected(0, 9).unwrap());
    }

    #[test]
    fn union_rewrites_second_class_to_first_root() {
        let mut uf = UnionFind::<QuickFind, u8, 10>::new().unwrap();
        uf.union(4, 3).unwrap();
        assert_eq!(uf.representative(), [0, 1, 2, 4, 4, 5, 6, 7, 8, 9]);
        uf.union(3, 8).unwrap();
        assert_eq!(uf.representative(), [0, 1, 2, 4, 4, 5, 6, 7, 4, 9]);
        uf.union(9, 4).unwrap();
        assert_eq!(uf.representative(), [0, 1, 2, 9, 9, 5, 6, 7, 9, 9]);
    }

    #[test]
    fn redundant_union_is_a_no_op() {
        let mut uf = UnionFind::<QuickFind, u8, 6>::new().unwrap();
        assert!(uf.union(0, 1).unwrap());
        let snapshot: Vec<u8> = uf.representative().to_vec();
        assert!(!uf.union(0, 1).unwrap());
        assert!(!uf.union(1, 0).unwrap());
        assert_eq!(uf.representative(), &snapshot[..]);
    }

    #[test]
    fn find_does_not_mutate() {
        let mut uf = UnionFind::<QuickFind, u8, 6>::new().unwrap();
        uf.union(2, 5).unwrap();
        let snapshot: Vec<u8> = uf.representative().to_vec();
        assert_eq!(uf.find(5).unwrap(), 2);
        assert_eq!(uf.representative(), &snapshot[..]);
    }
}
