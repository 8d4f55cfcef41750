//! Named queries exposed on `Predicates` and `Profile`.
//!
//! Each predicate name maps to a `const fn` on `Predicates` through
//! [`query_method`](super::naming::query_method); each obligation maps to
//! `Profile::should_impl_<snake>`. Registration emits one module-level
//! function per entry, and `capable!` accepts exactly the predicate names.

pub const PREDICATE_QUERIES: &[&str] = &[
    "DefaultConstructible",
    "CopyConstructible",
    "MoveConstructible",
    "Destructible",
    "TriviallyDestructible",
    "TriviallyCopyable",
    "TriviallyMovable",
    "Send",
    "Sync",
    "EqualityComparable",
    "HasEq",
    "HasNe",
    "HasLt",
    "HasLe",
    "HasGt",
    "HasGe",
    "HasThreeWay",
    "PartiallyOrdered",
    "TotallyOrdered",
    "Hashable",
    "Debuggable",
    "Displayable",
];

pub const OBLIGATIONS: &[&str] = &[
    "Drop",
    "Copy",
    "Default",
    "CopyNew",
    "MoveNew",
    "PartialEq",
    "Eq",
    "PartialOrd",
    "Ord",
    "Hash",
    "Debug",
    "Display",
    "Trivial",
    "Unpin",
    "Send",
    "Sync",
];
