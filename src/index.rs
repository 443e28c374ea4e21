use core::fmt::{Debug, Display};

/// Unsigned primitive used for element ids and parent pointers.
///
/// The index width bounds the supported capacity: a `UnionFind` over `I` can
/// hold at most `I::MAX_INDEX + 1` elements. Implemented for `u8`, `u16`,
/// `u32`, `u64` and `usize`.
pub trait IndexType: Copy + Eq + Debug + Display + 'static {
    const ZERO: Self;

    /// Largest id this type can store.
    const MAX_INDEX: usize;

    fn from_usize(value: usize) -> Self;

    fn to_usize(self) -> usize;

    /// Whether every id in `[0, capacity)` is representable.
    fn fits(capacity: usize) -> bool {
        capacity == 0 || capacity - 1 <= Self::MAX_INDEX
    }
}

macro_rules! impl_index_type {
    ($($ty:ident),*) => {
        $(
            impl IndexType for $ty {
                const ZERO: Self = 0;
                const MAX_INDEX: usize = $ty::MAX as usize;

                #[inline]
                fn from_usize(value: usize) -> Self {
                    debug_assert!(value <= Self::MAX_INDEX);
                    value as $ty
                }

                #[inline]
                fn to_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_index_type!(u8, u16, u32, u64, usize);
