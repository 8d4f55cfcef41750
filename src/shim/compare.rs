//! Relational and three-way comparison shims.
//!
//! Each relational operator is bridged on its own: through the std trait
//! when the type has it, otherwise through the matching per-operator trait
//! from [`ops`](crate::ops). No operator is derived from another.

use crate::comparison::Comparison;
use crate::ops::{Equal, GreaterEqual, GreaterThan, LessEqual, LessThan, NotEqual};

macro_rules! std_relation {
    ($($name:ident: $Bound:ident => $op:tt;)*) => {$(
        #[inline]
        pub extern "C" fn $name<T: $Bound>(lhs: &T, rhs: &T) -> bool {
            lhs $op rhs
        }
    )*};
}

macro_rules! op_relation {
    ($($name:ident: $Bound:ident => $method:ident;)*) => {$(
        #[inline]
        pub extern "C" fn $name<T: $Bound>(lhs: &T, rhs: &T) -> bool {
            lhs.$method(rhs)
        }
    )*};
}

std_relation! {
    eq: PartialEq => ==;
    ne: PartialEq => !=;
    lt: PartialOrd => <;
    le: PartialOrd => <=;
    gt: PartialOrd => >;
    ge: PartialOrd => >=;
}

op_relation! {
    equal: Equal => equal;
    not_equal: NotEqual => not_equal;
    less_than: LessThan => less_than;
    less_equal: LessEqual => less_equal;
    greater_than: GreaterThan => greater_than;
    greater_equal: GreaterEqual => greater_equal;
}

/// Three-way comparison of a total order; never [`Comparison::Unordered`].
#[inline]
pub extern "C" fn three_way_strong<T: Ord>(lhs: &T, rhs: &T) -> i8 {
    Comparison::from_ordering(lhs.cmp(rhs)).into_raw()
}

/// Three-way comparison of a partial order; incomparable values are
/// [`Comparison::Unordered`].
#[inline]
pub extern "C" fn three_way_partial<T: PartialOrd>(lhs: &T, rhs: &T) -> i8 {
    Comparison::from_partial(lhs.partial_cmp(rhs)).into_raw()
}

/// Three-way comparison built from `<` and `PartialEq`.
#[inline]
pub extern "C" fn three_way_synth_std<T: LessThan + PartialEq>(lhs: &T, rhs: &T) -> i8 {
    Comparison::synthesize(lhs.less_than(rhs), lhs == rhs).into_raw()
}

/// Three-way comparison built from `<` and [`Equal`].
#[inline]
pub extern "C" fn three_way_synth_op<T: LessThan + Equal>(lhs: &T, rhs: &T) -> i8 {
    Comparison::synthesize(lhs.less_than(rhs), lhs.equal(rhs)).into_raw()
}
