//! Per-operator comparison traits.
//!
//! Some value types define individual comparison operators without the
//! laws `PartialEq` or `PartialOrd` imply. Implement only the operators the
//! type has; registration bridges each one independently, and a type with
//! [`LessThan`] plus equality gets a synthesized three-way comparison.
//!
//! For a type implementing both a std trait and the matching operator trait,
//! the std trait is bridged.

macro_rules! operator_traits {
    ($($(#[$doc:meta])* $Trait:ident::$method:ident;)*) => {$(
        $(#[$doc])*
        pub trait $Trait {
            fn $method(&self, other: &Self) -> bool;
        }
    )*};
}

operator_traits! {
    /// `self == other`
    Equal::equal;
    /// `self != other`
    NotEqual::not_equal;
    /// `self < other`
    LessThan::less_than;
    /// `self <= other`
    LessEqual::less_equal;
    /// `self > other`
    GreaterThan::greater_than;
    /// `self >= other`
    GreaterEqual::greater_equal;
}
