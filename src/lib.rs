#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: owned strings, manifests and the registry in no_std
// - cmp / hash / fmt: predicate groups (all in `full`, the default)
// - manifest: serde derives and JSON rendering
// - profiling: profiler scopes on lifecycle shims and the registry

//! # bridge-caps
//!
//! Compile-time capability detection and C-ABI bridge functions for opaque
//! value types.
//!
//! Register a concrete type and the crate works out, at compile time, which
//! structural capabilities it has (default/copy/move construction, drop
//! glue, equality, ordering, hashing, formatting), derives the obligations a
//! foreign binding generator should honour, and exposes an `extern "C"`
//! function for exactly the operations the type supports.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Detection                                               |
//! |  - Detect<T> inherent-const fallback, Facts, vtable slots         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Predicates -> Profile                                   |
//! |  - Predicates::from_facts, Profile::derive (const fn policy)      |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Bridge Operations                                       |
//! |  - extern "C" shims, BridgeVTable, BridgeString                   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Registration                                            |
//! |  - bridge!, #[derive(Bridge)], Registered, Registry / manifest    |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use bridge_caps::prelude::*;
//!
//! #[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
//! pub struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! bridge!(Point);
//!
//! const _: () = assert!(point::should_impl_copy() && !point::should_impl_drop());
//!
//! fn main() {
//!     # #[cfg(feature = "full")] {
//!     let (a, b) = (Point { x: 1, y: 2 }, Point { x: 1, y: 3 });
//!     assert_eq!(point::VTABLE.compare(&a, &b), Some(Comparison::Less));
//!     assert!(capable!(Point: TotallyOrdered & Hashable & !Displayable));
//!     # }
//! }
//! ```
//!
//! An operation the type lacks has no shim to call:
//!
//! ```compile_fail
//! struct Opaque;
//! // `Opaque` is not `PartialEq`
//! let _ = bridge_caps::shim::compare::eq::<Opaque>;
//! ```
//!
//! Predicate names are checked when the macro expands:
//!
//! ```compile_fail
//! use bridge_caps::capable;
//! fn main() {
//!     let _ = capable!(i32: Sortable);
//! }
//! ```
//!
//! and instantiations are limited to two type arguments:
//!
//! ```compile_fail
//! use bridge_caps::bridge;
//! pub struct Triple<A, B, C>(A, B, C);
//! bridge!(TripleU8 = Triple<u8, u8, u8>);
//! fn main() {}
//! ```

// Allow `::bridge_caps` to work inside the crate itself
extern crate self as bridge_caps;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Detection
// =============================================================================
pub mod detect;
pub mod ops;

// =============================================================================
// Layer 1: Predicates and Profile
// =============================================================================
pub mod predicate;
pub mod profile;

// =============================================================================
// Layer 2: Bridge Operations
// =============================================================================
pub mod comparison;
pub mod shim;
pub mod string;
pub mod vtable;

// =============================================================================
// Layer 3: Registration
// =============================================================================
pub mod registry;

pub use comparison::Comparison;
pub use predicate::{DisplaySource, Predicates, ThreeWaySupport};
pub use profile::Profile;
pub use registry::Registered;
#[cfg(feature = "alloc")]
pub use registry::{Registry, RegistryError, TypeManifest};
pub use shim::Slot;
pub use string::BridgeString;
pub use vtable::{BridgeVTable, Operation};

pub use macros::{assert_capable, bridge, capable, predicates_of, Bridge};

pub mod prelude {
    pub use crate::ops::{Equal, GreaterEqual, GreaterThan, LessEqual, LessThan, NotEqual};
    pub use crate::{
        assert_capable, bridge, capable, predicates_of, Bridge, BridgeString, BridgeVTable,
        Comparison, DisplaySource, Operation, Predicates, Profile, Registered, Slot,
        ThreeWaySupport,
    };
    #[cfg(feature = "alloc")]
    pub use crate::{Registry, RegistryError, TypeManifest};
}
