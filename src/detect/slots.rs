//! Bridge-function slots resolved per concrete type.
//!
//! `Detect::<T>::EQ_STD` is `Some(shim)` when `T: PartialEq` and `None`
//! otherwise. Registration combines these into a [`BridgeVTable`], taking
//! the first available source for operations with more than one.
//!
//! [`BridgeVTable`]: crate::BridgeVTable

use super::Detect;
#[cfg(feature = "cmp")]
use crate::ops::{Equal, GreaterEqual, GreaterThan, LessEqual, LessThan, NotEqual};
#[cfg(feature = "fmt")]
use crate::shim::format::{self, StringCast, StringView};
use crate::shim::construct;
#[cfg(feature = "cmp")]
use crate::shim::compare;
#[cfg(feature = "hash")]
use crate::shim::hash;
use crate::vtable::{
    ConstructFn, CopyFn, DestructFn, FormatFn, HashFn, MoveFn, RelationFn, ThreeWayFn,
};

/// Generate fallback trait + inherent slot const for one shim.
macro_rules! impl_slot {
    ($(#[$cfg:meta])? $slot:ident: $Fn:ident where T: [$($bound:tt)+] => $module:ident::$shim:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$slot:camel Fallback>]<T> {
                const [<$slot:upper>]: Option<$Fn<T>> = None;
            }
            impl<T> [<$slot:camel Fallback>]<T> for Detect<T> {}

            $(#[$cfg])?
            impl<T: $($bound)+> Detect<T> {
                pub const [<$slot:upper>]: Option<$Fn<T>> = Some($module::$shim::<T>);
            }
        }
    };
}

// Lifecycle
impl_slot!(default_new: ConstructFn where T: [Default] => construct::default_new);
impl_slot!(copy_new: CopyFn where T: [Clone] => construct::copy_new);
impl_slot!(move_new: MoveFn where T: [Sized] => construct::move_new);
impl_slot!(destruct: DestructFn where T: [Sized] => construct::destruct);

// Relational, std traits first
impl_slot!(#[cfg(feature = "cmp")] eq_std: RelationFn where T: [PartialEq] => compare::eq);
impl_slot!(#[cfg(feature = "cmp")] ne_std: RelationFn where T: [PartialEq] => compare::ne);
impl_slot!(#[cfg(feature = "cmp")] lt_std: RelationFn where T: [PartialOrd] => compare::lt);
impl_slot!(#[cfg(feature = "cmp")] le_std: RelationFn where T: [PartialOrd] => compare::le);
impl_slot!(#[cfg(feature = "cmp")] gt_std: RelationFn where T: [PartialOrd] => compare::gt);
impl_slot!(#[cfg(feature = "cmp")] ge_std: RelationFn where T: [PartialOrd] => compare::ge);

// Relational, per-operator traits
impl_slot!(#[cfg(feature = "cmp")] eq_op: RelationFn where T: [Equal] => compare::equal);
impl_slot!(#[cfg(feature = "cmp")] ne_op: RelationFn where T: [NotEqual] => compare::not_equal);
impl_slot!(#[cfg(feature = "cmp")] lt_op: RelationFn where T: [LessThan] => compare::less_than);
impl_slot!(#[cfg(feature = "cmp")] le_op: RelationFn where T: [LessEqual] => compare::less_equal);
impl_slot!(#[cfg(feature = "cmp")] gt_op: RelationFn where T: [GreaterThan] => compare::greater_than);
impl_slot!(#[cfg(feature = "cmp")] ge_op: RelationFn where T: [GreaterEqual] => compare::greater_equal);

// Three-way, in priority order
impl_slot!(#[cfg(feature = "cmp")] cmp_strong: ThreeWayFn where T: [Ord] => compare::three_way_strong);
impl_slot!(#[cfg(feature = "cmp")] cmp_partial: ThreeWayFn where T: [PartialOrd] => compare::three_way_partial);
impl_slot!(#[cfg(feature = "cmp")] cmp_synth_std: ThreeWayFn where T: [LessThan + PartialEq] => compare::three_way_synth_std);
impl_slot!(#[cfg(feature = "cmp")] cmp_synth_op: ThreeWayFn where T: [LessThan + Equal] => compare::three_way_synth_op);

impl_slot!(#[cfg(feature = "hash")] hash: HashFn where T: [core::hash::Hash] => hash::hash);

// Formatting; display sources in priority order
impl_slot!(#[cfg(feature = "fmt")] debug: FormatFn where T: [core::fmt::Debug] => format::debug);
impl_slot!(#[cfg(feature = "fmt")] display_to_string: FormatFn where T: [core::fmt::Display] => format::display_to_string);
impl_slot!(#[cfg(feature = "fmt")] display_string_cast: FormatFn where T: [StringCast] => format::display_string_cast);
impl_slot!(#[cfg(feature = "fmt")] display_string_view: FormatFn where T: [StringView] => format::display_string_view);
