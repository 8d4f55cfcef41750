//! # Capability Profile
//!
//! The "should implement" obligations the foreign side's binding generator
//! acts on, derived from [`Predicates`] by one policy function.

use crate::predicate::Predicates;

/// Obligations for one registered type.
///
/// Never claims an operation the type lacks: every flag implies the
/// predicates that make the bridged operation well-formed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "manifest", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    /// Custom destruction is required (drop glue exists).
    pub needs_drop: bool,
    /// Bitwise copies are sound on the foreign side. Never set together
    /// with `needs_drop`.
    pub copy: bool,
    pub default: bool,
    pub copy_new: bool,
    pub move_new: bool,
    /// `==` exists. Independent of `eq`.
    pub partial_eq: bool,
    /// Equality is an equivalence relation.
    pub eq: bool,
    pub partial_ord: bool,
    pub ord: bool,
    pub hash: bool,
    pub debug: bool,
    pub display: bool,
    /// The value may be held inline instead of behind an opaque pointer.
    pub trivial: bool,
    pub unpin: bool,
    pub send: bool,
    pub sync: bool,
}

macro_rules! obligations {
    ($($obligation:ident => $field:ident),* $(,)?) => {
        ::paste::paste! {
            impl Profile {
                $(
                    #[inline]
                    pub const fn [<should_impl_ $obligation>](&self) -> bool {
                        self.$field
                    }
                )*
            }
        }
    };
}

obligations! {
    drop => needs_drop,
    copy => copy,
    default => default,
    copy_new => copy_new,
    move_new => move_new,
    partial_eq => partial_eq,
    eq => eq,
    partial_ord => partial_ord,
    ord => ord,
    hash => hash,
    debug => debug,
    display => display,
    trivial => trivial,
    unpin => unpin,
    send => send,
    sync => sync,
}

impl Profile {
    /// The policy. Pure, so it can be checked on hand-built predicates.
    pub const fn derive(p: Predicates) -> Self {
        let needs_drop = p.destructible && !p.trivially_destructible;
        Profile {
            needs_drop,
            copy: p.trivially_copyable && p.trivially_movable && !needs_drop,
            default: p.default_constructible,
            copy_new: p.copy_constructible,
            move_new: p.move_constructible,
            partial_eq: p.has_eq,
            eq: p.equality_comparable,
            partial_ord: p.is_partially_ordered(),
            ord: p.totally_ordered,
            hash: p.hashable,
            debug: p.debuggable,
            display: p.display.is_present(),
            trivial: p.trivially_movable,
            unpin: p.trivially_movable,
            send: p.send,
            sync: p.sync,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::Facts;

    #[test]
    fn copy_requires_no_drop_glue() {
        let mut p = Predicates::from_facts(Facts { copy: true, unpin: true, ..Facts::NONE }, false);
        assert!(Profile::derive(p).copy);

        // Inconsistent on purpose: the policy alone must still refuse.
        p.trivially_destructible = false;
        p.trivially_movable = true;
        let profile = Profile::derive(p);
        assert!(profile.should_impl_drop());
        assert!(!profile.should_impl_copy());
    }

    #[test]
    fn ord_is_not_four_operators() {
        let facts = Facts {
            less_than: true,
            less_equal: true,
            greater_than: true,
            greater_equal: true,
            equal: true,
            ..Facts::NONE
        };
        let profile = Profile::derive(Predicates::from_facts(facts, false));
        assert!(profile.should_impl_partial_ord());
        assert!(!profile.should_impl_ord());
        assert!(profile.should_impl_partial_eq() && !profile.should_impl_eq());
    }
}
