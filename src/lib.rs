//! Disjoint-set (union-find) structures over a fixed universe of `N`
//! integer ids.
//!
//! Two strategies share one facade: [`QuickFind`] keeps a representative
//! table (O(1) find, O(N) union), [`QuickUnion`] keeps a parent forest with
//! a pluggable merge heuristic ([`ByRank`], [`BySize`], [`Unweighted`]) and
//! optional path compression — amortized near-constant operations with the
//! defaults. Strategy, heuristic and compression are chosen through the type
//! system, so there is no per-call dispatch.
//!
//! Storage is either allocated by the structure ([`Owned`], the default) or
//! an exclusive borrow of caller-provided buffers ([`Borrowed`]), which lets
//! the same machinery run over externally owned memory.
//!
//! ```
//! use taproot::{ByRank, QuickUnion, UnionFind};
//!
//! let mut uf = UnionFind::<QuickUnion<ByRank>, u8, 10>::new()?;
//! uf.union(1, 2)?;
//! uf.union(2, 3)?;
//! assert!(uf.connected(1, 3)?);
//! assert_eq!(uf.class_count(), 8);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod algorithm;
mod error;
mod index;
mod quick_find;
mod quick_union;
mod storage;
mod union_find;

pub use self::algorithm::Algorithm;
pub use self::error::{BuildError, OutOfRangeIndex};
pub use self::index::IndexType;
pub use self::quick_find::QuickFind;
pub use self::quick_union::{ByRank, BySize, Heuristic, QuickUnion, Unweighted};
pub use self::storage::{Borrowed, Owned, StorageMode};
pub use self::union_find::{Group, Groups, UnionFind};
