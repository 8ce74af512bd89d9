//! Provides customized implementations of generic data structures.

mod bitvec;
pub use self::bitvec::BitVec;
