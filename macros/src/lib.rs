//! Procedural macros for the bridge-caps registration facility
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `bridge!` | - | Register concrete types (or generic instantiations) |
//! | `#[derive(Bridge)]` | struct/enum | Register a local non-generic type |
//! | `capable!` | - | Evaluate predicate expressions on a concrete type |
//! | `assert_capable!` | - | Fail the build when a predicate expression is false |
//! | `predicates_of!` | - | The `Predicates` of a concrete type |
//! | `define_detection!` | - | Internal: detection table for `bridge_caps::detect` |

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod common;
mod inner;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate the trait-fact detection infrastructure.
///
/// This generates:
/// - Fallback traits (`CloneFallback`, ...) reporting absence
/// - Inherent `IS_XXX` consts on `Detect<T>` for types satisfying the bound
/// - The `Facts` struct with one flag per table entry
#[proc_macro]
pub fn define_detection(_input: TokenStream) -> TokenStream {
    inner::facts::expand_detection().into()
}

// =============================================================================
// User Macros (user/)
// =============================================================================

/// Register one or more types with the bridge.
///
/// # Syntax
///
/// ```ignore
/// bridge!(Point);                              // plain path, module `point`
/// bridge!(PairI32String = Pair<i32, String>);  // alias, module `pair_i32_string`
/// bridge! {
///     Celsius = units::Celsius;
///     Bytes = Vec<u8>;
/// }
/// ```
///
/// Each registration expands to a `pub type` alias (when one is given) and a
/// `pub mod` holding `PREDICATES`, `PROFILE`, `VTABLE`, named `const fn`
/// queries, `TyCon`/`TyArg0`/`TyArg1` for instantiations, a `Registration`
/// marker and the exported `<module>_bridge_vtable` symbol.
///
/// Registered types must be `pub`: the `Registration` marker names them in
/// a public trait impl. Instantiations take at most two type arguments, and
/// only type arguments.
#[proc_macro]
pub fn bridge(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::BridgeInput);
    user::expand_bridge(input).into()
}

/// Derive-style registration for a non-generic local type.
///
/// ```ignore
/// #[derive(Clone, PartialEq, Bridge)]
/// pub struct Point { x: i32, y: i32 }
///
/// assert!(point::should_impl_partial_eq());
/// ```
#[proc_macro_derive(Bridge)]
pub fn derive_bridge(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_bridge(input).into()
}

/// Evaluate capability predicates on concrete types.
///
/// # Syntax: `capable!(Type: Expr, ...)`
///
/// Supports `&`, `|`, `!` and parentheses over predicate names. Multiple
/// checks must all hold.
///
/// ```ignore
/// assert!(capable!(String: Hashable & !TriviallyCopyable));
/// assert!(capable!(f64: HasThreeWay & !TotallyOrdered));
/// assert!(capable!(i32: TotallyOrdered, String: Displayable));
/// ```
#[proc_macro]
pub fn capable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::TypeChecks);
    user::expand_capable(input).into()
}

/// Like `capable!`, but as item-level `const` assertions.
///
/// ```ignore
/// assert_capable!(Point: Hashable & TotallyOrdered);
/// ```
#[proc_macro]
pub fn assert_capable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::TypeChecks);
    user::expand_assert_capable(input).into()
}

/// The `Predicates` of a concrete type, evaluated at compile time.
#[proc_macro]
pub fn predicates_of(input: TokenStream) -> TokenStream {
    let ty = parse_macro_input!(input as syn::Type);
    user::expand_predicates_of_type(ty).into()
}
