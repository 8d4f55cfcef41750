//! The named surface a registration produces.

#![cfg(feature = "full")]
#![allow(dead_code)]

use std::any::TypeId;

use bridge_caps::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

pub struct Wrapper<T>(T);

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Bridge)]
pub struct Token {
    text: String,
}

/// Snake-cases to the keyword `ref`.
#[derive(Clone, PartialEq, Bridge)]
pub struct Ref(u8);

#[derive(Default)]
pub struct Match;

pub mod geometry {
    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    pub struct Angle(pub f32);
}

bridge!(Point);
bridge!(PairI32String = Pair<i32, String>);
bridge!(WrappedU8 = Wrapper<u8>);
bridge!(Angle = geometry::Angle);
bridge!(Coords = (i32, i32));
bridge!(Match);
bridge!(AnyBox = Box<dyn std::any::Any>);

fn type_id_of<T: 'static>(_: &T) -> TypeId {
    TypeId::of::<T>()
}

#[test]
fn alias_and_type() {
    assert_eq!(TypeId::of::<PairI32String>(), TypeId::of::<Pair<i32, String>>());
    assert_eq!(TypeId::of::<pair_i32_string::Type>(), TypeId::of::<Pair<i32, String>>());
    assert_eq!(TypeId::of::<Angle>(), TypeId::of::<geometry::Angle>());
    assert_eq!(TypeId::of::<coords::Type>(), TypeId::of::<(i32, i32)>());
    assert_eq!(pair_i32_string::NAME, "PairI32String");
    assert_eq!(pair_i32_string::RUST_TYPE, "Pair<i32,String>");
}

#[test]
fn type_constructor_and_arguments() {
    use pair_i32_string::{TyArg0, TyArg1, TyCon};
    assert_eq!(TypeId::of::<TyArg0>(), TypeId::of::<i32>());
    assert_eq!(TypeId::of::<TyArg1>(), TypeId::of::<String>());
    assert_eq!(
        TypeId::of::<TyCon<TyArg0, TyArg1>>(),
        TypeId::of::<pair_i32_string::Type>()
    );

    // The constructor is generic, not tied to the registered arguments.
    let other: TyCon<u8, bool> = Pair { first: 1, second: true };
    assert_eq!(type_id_of(&other), TypeId::of::<Pair<u8, bool>>());

    assert_eq!(TypeId::of::<wrapped_u8::TyCon<u8>>(), TypeId::of::<Wrapper<u8>>());
    assert_eq!(TypeId::of::<wrapped_u8::TyArg0>(), TypeId::of::<u8>());
}

#[test]
fn named_queries() {
    assert!(pair_i32_string::is_copy_constructible());
    assert!(!pair_i32_string::is_default_constructible());
    assert!(pair_i32_string::has_eq() && !pair_i32_string::has_lt());
    assert!(pair_i32_string::should_impl_partial_eq());
    assert!(!pair_i32_string::should_impl_eq());
    assert!(pair_i32_string::should_impl_drop());
    assert!(pair_i32_string::should_impl_debug());
    assert!(!pair_i32_string::should_impl_display());

    assert!(!wrapped_u8::should_impl_copy_new());
    assert!(wrapped_u8::should_impl_move_new());
    assert!(wrapped_u8::should_impl_trivial());
    assert!(!wrapped_u8::should_impl_copy(), "not Copy");

    assert!(angle::should_impl_partial_ord() && !angle::should_impl_ord());
    assert!(coords::should_impl_ord() && coords::should_impl_hash());
    assert_eq!(coords::abi_size(), std::mem::size_of::<(i32, i32)>());
    assert_eq!(coords::abi_align(), std::mem::align_of::<(i32, i32)>());
}

#[test]
fn derive_registers_local_type() {
    assert_eq!(token::NAME, "Token");
    assert_eq!(token::SYMBOL, "token_bridge_vtable");
    assert!(token::should_impl_eq() && token::should_impl_hash());
    assert!(!token::should_impl_partial_ord());
    assert_eq!(token::three_way_support(), ThreeWaySupport::Absent);
}

#[test]
fn keyword_names_get_raw_modules() {
    assert_eq!(r#ref::NAME, "Ref");
    assert_eq!(r#ref::SYMBOL, "ref_bridge_vtable");
    assert!(r#ref::should_impl_partial_eq() && r#ref::should_impl_copy_new());
    assert_eq!(TypeId::of::<r#ref::Type>(), TypeId::of::<Ref>());

    assert_eq!(r#match::SYMBOL, "match_bridge_vtable");
    assert!(r#match::should_impl_default());
    assert_consistent::<r#match::Registration>();
}

#[test]
fn rust_type_keeps_word_spacing() {
    assert_eq!(any_box::RUST_TYPE, "Box<dyn std::any::Any>");
    assert_eq!(coords::RUST_TYPE, "(i32,i32)");
    assert!(any_box::should_impl_drop() && !any_box::should_impl_send());
}

#[test]
fn queries_are_idempotent() {
    const A: bool = point::is_hashable();
    const B: bool = point::is_hashable();
    assert_eq!(A, B);
    assert_eq!(point::PREDICATES, point::PREDICATES);
    assert_eq!(point::PREDICATES, predicates_of!(Point));
    assert_eq!(point::PROFILE, Profile::derive(predicates_of!(Point)));
}

// ============================================================================
// Profile and vtable agree
// ============================================================================

fn assert_consistent<R: Registered>() {
    let p = R::PREDICATES;
    let vt = R::VTABLE;
    let name = R::NAME;
    assert_eq!(vt.has(Operation::DefaultNew), p.default_constructible, "{name}");
    assert_eq!(vt.has(Operation::CopyNew), p.copy_constructible, "{name}");
    assert!(vt.has(Operation::MoveNew) && vt.has(Operation::Destruct), "{name}");
    assert_eq!(vt.has(Operation::Eq), p.has_eq, "{name}");
    assert_eq!(vt.has(Operation::Ne), p.has_ne, "{name}");
    assert_eq!(vt.has(Operation::Lt), p.has_lt, "{name}");
    assert_eq!(vt.has(Operation::Le), p.has_le, "{name}");
    assert_eq!(vt.has(Operation::Gt), p.has_gt, "{name}");
    assert_eq!(vt.has(Operation::Ge), p.has_ge, "{name}");
    assert_eq!(vt.has(Operation::ThreeWay), p.three_way.is_present(), "{name}");
    assert_eq!(vt.has(Operation::Hash), p.hashable, "{name}");
    assert_eq!(vt.has(Operation::Debug), p.debuggable, "{name}");
    assert_eq!(vt.has(Operation::Display), p.display.is_present(), "{name}");
}

#[test]
fn vtable_matches_predicates() {
    assert_consistent::<point::Registration>();
    assert_consistent::<pair_i32_string::Registration>();
    assert_consistent::<wrapped_u8::Registration>();
    assert_consistent::<angle::Registration>();
    assert_consistent::<coords::Registration>();
    assert_consistent::<token::Registration>();
    assert_consistent::<r#ref::Registration>();
    assert_consistent::<any_box::Registration>();
}

#[test]
fn generic_code_reads_registration() {
    fn summary<R: Registered>() -> (&'static str, bool, usize) {
        (R::NAME, R::PROFILE.copy, R::VTABLE.size)
    }

    assert_eq!(summary::<point::Registration>(), ("Point", true, 8));
    assert_eq!(summary::<token::Registration>().1, false);
}

// ============================================================================
// Exported symbols, seen from the foreign side
// ============================================================================

unsafe extern "C" {
    fn point_bridge_vtable() -> *const BridgeVTable<Point>;
    fn pair_i32_string_bridge_vtable() -> *const BridgeVTable<Pair<i32, String>>;
    fn ref_bridge_vtable() -> *const BridgeVTable<Ref>;
}

#[test]
fn exported_vtable_symbols() {
    let vt = unsafe { &*point_bridge_vtable() };
    assert!(std::ptr::eq(vt, point::point_bridge_vtable()));
    assert_eq!(vt.size, 8);

    let a = Point { x: 1, y: 1 };
    let b = Point { x: 2, y: 0 };
    assert_eq!(vt.compare(&a, &b), Some(Comparison::Less));

    let pair = unsafe { &*pair_i32_string_bridge_vtable() };
    assert!(pair.three_way.is_none());
    assert!(pair.display.is_none());
    let x = Pair { first: 1, second: "a".to_string() };
    assert_eq!(pair.equal(&x, &x.clone()), Some(true));

    let by_keyword = unsafe { &*ref_bridge_vtable() };
    assert!(std::ptr::eq(by_keyword, r#ref::ref_bridge_vtable()));
    assert_eq!(by_keyword.equal(&Ref(1), &Ref(2)), Some(false));
}
