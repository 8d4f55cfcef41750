//! Three-way comparison results and their wire encoding.

use core::cmp::Ordering;

/// Result of a bridged three-way comparison.
///
/// Crosses the boundary as an `i8`: `-1`, `0`, `1`, or `i8::MAX` when the
/// operands are unordered (for example a NaN compared under a partial
/// order). Any other raw value decodes as [`Comparison::Unordered`].
#[repr(i8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Comparison {
    Less = -1,
    Equal = 0,
    Greater = 1,
    /// The `i8::MAX` sentinel.
    Unordered = i8::MAX,
}

impl Comparison {
    #[inline]
    pub const fn from_raw(raw: i8) -> Self {
        match raw {
            -1 => Comparison::Less,
            0 => Comparison::Equal,
            1 => Comparison::Greater,
            _ => Comparison::Unordered,
        }
    }

    #[inline]
    pub const fn into_raw(self) -> i8 {
        self as i8
    }

    #[inline]
    pub const fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Comparison::Less,
            Ordering::Equal => Comparison::Equal,
            Ordering::Greater => Comparison::Greater,
        }
    }

    #[inline]
    pub const fn from_partial(ordering: Option<Ordering>) -> Self {
        match ordering {
            Some(o) => Self::from_ordering(o),
            None => Comparison::Unordered,
        }
    }

    /// Derive a three-way result from `lhs < rhs` and `lhs == rhs` alone.
    ///
    /// `<` without `==` is less, neither is greater, `==` without `<` is
    /// equal. Both at once is contradictory and reads as unordered.
    #[inline]
    pub const fn synthesize(less: bool, equal: bool) -> Self {
        match (less, equal) {
            (true, false) => Comparison::Less,
            (false, false) => Comparison::Greater,
            (false, true) => Comparison::Equal,
            (true, true) => Comparison::Unordered,
        }
    }

    #[inline]
    pub const fn to_ordering(self) -> Option<Ordering> {
        match self {
            Comparison::Less => Some(Ordering::Less),
            Comparison::Equal => Some(Ordering::Equal),
            Comparison::Greater => Some(Ordering::Greater),
            Comparison::Unordered => None,
        }
    }

    #[inline]
    pub const fn is_ordered(self) -> bool {
        !matches!(self, Comparison::Unordered)
    }
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        Self::from_ordering(ordering)
    }
}

impl From<Option<Ordering>> for Comparison {
    fn from(ordering: Option<Ordering>) -> Self {
        Self::from_partial(ordering)
    }
}

impl From<Comparison> for Option<Ordering> {
    fn from(c: Comparison) -> Self {
        c.to_ordering()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_encoding() {
        assert_eq!(Comparison::Less.into_raw(), -1);
        assert_eq!(Comparison::Equal.into_raw(), 0);
        assert_eq!(Comparison::Greater.into_raw(), 1);
        assert_eq!(Comparison::Unordered.into_raw(), i8::MAX);
        for raw in [-1, 0, 1, i8::MAX] {
            assert_eq!(Comparison::from_raw(raw).into_raw(), raw);
        }
        assert_eq!(Comparison::from_raw(2), Comparison::Unordered);
        assert_eq!(Comparison::from_raw(i8::MIN), Comparison::Unordered);
    }

    #[test]
    fn synthesized_table() {
        assert_eq!(Comparison::synthesize(true, false), Comparison::Less);
        assert_eq!(Comparison::synthesize(false, false), Comparison::Greater);
        assert_eq!(Comparison::synthesize(false, true), Comparison::Equal);
        assert_eq!(Comparison::synthesize(true, true), Comparison::Unordered);
    }

    #[test]
    fn partial() {
        assert_eq!(Comparison::from(1.0f64.partial_cmp(&f64::NAN)), Comparison::Unordered);
        assert_eq!(Comparison::from(1.0f64.partial_cmp(&2.0)), Comparison::Less);
        assert!(!Comparison::Unordered.is_ordered());
        assert_eq!(Option::<Ordering>::from(Comparison::Greater), Some(Ordering::Greater));
    }
}
