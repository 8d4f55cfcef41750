//! Hash shim.
//!
//! Values are fed to [`FxHasher`], the canonical hasher for the bridge. The
//! result is deterministic for a given build and platform word size; it is
//! not a stable fingerprint across releases.

use core::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

#[inline]
pub extern "C" fn hash<T: Hash>(this: &T) -> usize {
    let mut hasher = FxHasher::default();
    this.hash(&mut hasher);
    hasher.finish() as usize
}
