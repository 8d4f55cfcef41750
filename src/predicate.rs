//! Structural capability predicates of one type.

use crate::detect::Facts;

/// How a type's three-way comparison is obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "manifest", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "manifest", serde(rename_all = "snake_case"))]
pub enum ThreeWaySupport {
    /// `PartialOrd` (and `Ord` when totally ordered).
    Native,
    /// No native comparison; built from `<` and `==`.
    Synthesized,
    Absent,
}

impl ThreeWaySupport {
    #[inline]
    pub const fn is_present(self) -> bool {
        !matches!(self, ThreeWaySupport::Absent)
    }
}

/// Where a type's display text comes from, highest priority first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "manifest", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "manifest", serde(rename_all = "snake_case"))]
pub enum DisplaySource {
    /// `T: Display`
    ToString,
    /// `String: From<&T>`
    StringCast,
    /// `T: AsRef<[u8]>`, decoded as lossy UTF-8
    StringView,
    Absent,
}

impl DisplaySource {
    #[inline]
    pub const fn is_present(self) -> bool {
        !matches!(self, DisplaySource::Absent)
    }
}

/// Raw structural facts about one concrete type.
///
/// Every field is a pure function of the type. Built at compile time by the
/// registration macros through [`Predicates::from_facts`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "manifest", derive(serde::Serialize, serde::Deserialize))]
pub struct Predicates {
    pub default_constructible: bool,
    pub copy_constructible: bool,
    pub move_constructible: bool,
    pub destructible: bool,
    pub trivially_destructible: bool,
    pub trivially_copyable: bool,
    pub trivially_movable: bool,
    pub send: bool,
    pub sync: bool,
    /// `Eq`: equality is an equivalence relation, not just an `==` operator.
    pub equality_comparable: bool,
    pub has_eq: bool,
    pub has_ne: bool,
    pub has_lt: bool,
    pub has_le: bool,
    pub has_gt: bool,
    pub has_ge: bool,
    pub three_way: ThreeWaySupport,
    /// `Ord`. Having all four relational operators is not enough.
    pub totally_ordered: bool,
    pub hashable: bool,
    pub debuggable: bool,
    pub display: DisplaySource,
}

impl Predicates {
    /// Combine detected trait facts into predicates.
    ///
    /// `needs_drop` is `core::mem::needs_drop::<T>()`. Every registered type
    /// is `Sized`, so it can always be moved (bitwise) and dropped in place.
    pub const fn from_facts(facts: Facts, needs_drop: bool) -> Self {
        let trivially_destructible = !needs_drop;
        let has_eq = facts.partial_eq || facts.equal;
        let has_lt = facts.partial_ord || facts.less_than;

        let three_way = if facts.partial_ord {
            ThreeWaySupport::Native
        } else if has_lt && has_eq {
            ThreeWaySupport::Synthesized
        } else {
            ThreeWaySupport::Absent
        };

        let display = if facts.display {
            DisplaySource::ToString
        } else if facts.string_cast {
            DisplaySource::StringCast
        } else if facts.string_view {
            DisplaySource::StringView
        } else {
            DisplaySource::Absent
        };

        Predicates {
            default_constructible: facts.default,
            copy_constructible: facts.clone,
            move_constructible: true,
            destructible: true,
            trivially_destructible,
            trivially_copyable: facts.copy,
            trivially_movable: facts.unpin && trivially_destructible,
            send: facts.send,
            sync: facts.sync,
            equality_comparable: facts.eq,
            has_eq,
            has_ne: facts.partial_eq || facts.not_equal,
            has_lt,
            has_le: facts.partial_ord || facts.less_equal,
            has_gt: facts.partial_ord || facts.greater_than,
            has_ge: facts.partial_ord || facts.greater_equal,
            three_way,
            totally_ordered: facts.ord,
            hashable: facts.hash,
            debuggable: facts.debug,
            display,
        }
    }

    pub const fn is_default_constructible(&self) -> bool {
        self.default_constructible
    }

    pub const fn is_copy_constructible(&self) -> bool {
        self.copy_constructible
    }

    pub const fn is_move_constructible(&self) -> bool {
        self.move_constructible
    }

    pub const fn is_destructible(&self) -> bool {
        self.destructible
    }

    pub const fn is_trivially_destructible(&self) -> bool {
        self.trivially_destructible
    }

    pub const fn is_trivially_copyable(&self) -> bool {
        self.trivially_copyable
    }

    pub const fn is_trivially_movable(&self) -> bool {
        self.trivially_movable
    }

    pub const fn is_send(&self) -> bool {
        self.send
    }

    pub const fn is_sync(&self) -> bool {
        self.sync
    }

    pub const fn is_equality_comparable(&self) -> bool {
        self.equality_comparable
    }

    pub const fn has_eq(&self) -> bool {
        self.has_eq
    }

    pub const fn has_ne(&self) -> bool {
        self.has_ne
    }

    pub const fn has_lt(&self) -> bool {
        self.has_lt
    }

    pub const fn has_le(&self) -> bool {
        self.has_le
    }

    pub const fn has_gt(&self) -> bool {
        self.has_gt
    }

    pub const fn has_ge(&self) -> bool {
        self.has_ge
    }

    pub const fn has_three_way(&self) -> bool {
        self.three_way.is_present()
    }

    /// A native or synthesized three-way comparison, or `<` with `==`.
    pub const fn is_partially_ordered(&self) -> bool {
        self.three_way.is_present() || (self.has_lt && self.has_eq)
    }

    pub const fn is_totally_ordered(&self) -> bool {
        self.totally_ordered
    }

    pub const fn is_hashable(&self) -> bool {
        self.hashable
    }

    pub const fn is_debuggable(&self) -> bool {
        self.debuggable
    }

    pub const fn is_displayable(&self) -> bool {
        self.display.is_present()
    }
}
