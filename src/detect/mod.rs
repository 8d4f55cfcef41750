//! # Capability Predicates: trait detection
//!
//! Compile-time detection of the traits that back every capability
//! predicate, plus the optional bridge-function slots a vtable is filled
//! from.
//!
//! ## How it works
//!
//! For each detected bound:
//! 1. A fallback trait declares `const IS_X: bool = false`
//! 2. The fallback is implemented for `Detect<T>` for every `T`
//! 3. An inherent `const IS_X: bool = true` exists on `Detect<T>` where `T: X`
//!
//! When resolving `Detect::<Concrete>::IS_X`, the compiler picks the
//! inherent const if `Concrete: X` and the trait const otherwise. Slots in
//! [`slots`] follow the same pattern with `Option` function pointers.
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site. In
//! generic code, read the results through [`Registered`](crate::Registered).
//!
//! ## Feature groups
//!
//! The `cmp`, `hash` and `fmt` features gate the inherent consts of their
//! group. With a group disabled the fallback answers, so every predicate in
//! it reads as absent and the matching vtable slots stay `None`.

use core::marker::PhantomData;

pub mod slots;

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<*const T>);

macros::define_detection!();
