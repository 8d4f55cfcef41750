//! # Bridge Operations
//!
//! `extern "C"` shims, one per bridged operation. Every shim is generic and
//! bounded by the trait it wraps, so it can only be instantiated for types
//! that actually have the operation; registration leaves the vtable slot of
//! an absent operation `None`.
//!
//! Lifecycle shims take raw pointers and are `unsafe`. Comparison, hashing
//! and formatting shims take references and are safe to call.
//!
//! A panic inside a wrapped operation does not unwind across the `extern
//! "C"` boundary; the process aborts.

pub mod compare;
pub mod construct;
#[cfg(feature = "fmt")]
pub mod format;
#[cfg(feature = "hash")]
pub mod hash;

pub use construct::Slot;
