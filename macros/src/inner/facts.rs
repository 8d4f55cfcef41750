//! Trait-fact table and the detection code generated from it.
//!
//! Single source of truth for every raw fact the crate detects. The library
//! expands [`expand_detection`] once inside `bridge_caps::detect`; user-side
//! macros expand [`expand_facts_of`] for a concrete type. Both walk the same
//! table, so the `Facts` struct and its initializers always agree.

use proc_macro2::TokenStream;
use quote::quote;

use crate::common::TraitModel;

// Table DSL: "path::to::Trait + Bounds", named after the first trait.
// See `macros/src/common/trait_model.rs` for parsing logic.

/// Marker and lifecycle facts (always detected).
pub const CORE_FACTS: &[&str] = &[
    "core::default::Default",
    "core::clone::Clone",
    "core::marker::Copy",
    "core::marker::Unpin + ?Sized",
    "core::marker::Send + ?Sized",
    "core::marker::Sync + ?Sized",
];

/// Equality and ordering facts (feature `cmp`).
pub const CMP_FACTS: &[&str] = &[
    "core::cmp::PartialEq + ?Sized",
    "core::cmp::Eq + ?Sized",
    "core::cmp::PartialOrd + ?Sized",
    "core::cmp::Ord + ?Sized",
    "crate::ops::Equal + ?Sized",
    "crate::ops::NotEqual + ?Sized",
    "crate::ops::LessThan + ?Sized",
    "crate::ops::LessEqual + ?Sized",
    "crate::ops::GreaterThan + ?Sized",
    "crate::ops::GreaterEqual + ?Sized",
];

/// Hashing facts (feature `hash`).
pub const HASH_FACTS: &[&str] = &["core::hash::Hash + ?Sized"];

/// Formatting facts (feature `fmt`).
pub const FMT_FACTS: &[&str] = &[
    "core::fmt::Debug + ?Sized",
    "core::fmt::Display + ?Sized",
    "crate::shim::format::StringCast + ?Sized",
    "crate::shim::format::StringView + ?Sized",
];

fn groups() -> [(&'static [&'static str], TokenStream); 4] {
    [
        (CORE_FACTS, quote! {}),
        (CMP_FACTS, quote! { #[cfg(feature = "cmp")] }),
        (HASH_FACTS, quote! { #[cfg(feature = "hash")] }),
        (FMT_FACTS, quote! { #[cfg(feature = "fmt")] }),
    ]
}

fn models() -> impl Iterator<Item = (TraitModel, TokenStream)> {
    groups().into_iter().flat_map(|(list, cfg)| {
        list.iter()
            .map(move |desc| (TraitModel::parse_desc(desc), cfg.clone()))
    })
}

/// Generate fallback traits, inherent detection consts and the `Facts` struct.
pub fn expand_detection() -> TokenStream {
    let mut items = Vec::new();
    let mut fields = Vec::new();
    let mut names = Vec::new();

    for (model, cfg) in models() {
        items.push(model.expand_detection(&cfg));

        let field = model.field();
        let doc = format!("`T: {}`", model.source);
        fields.push(quote! {
            #[doc = #doc]
            pub #field: bool
        });
        names.push(field);
    }

    quote! {
        #(#items)*

        /// Raw trait facts for one concrete type, one flag per detected bound.
        ///
        /// Built by the registration macros; a group disabled by cargo
        /// features reports every fact in it as `false`.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct Facts {
            #(#fields,)*
        }

        impl Facts {
            /// Every fact absent.
            pub const NONE: Self = Self {
                #(#names: false,)*
            };
        }
    }
}

/// A `Facts` initializer for the concrete type `ty`.
pub fn expand_facts_of(ty: &TokenStream) -> TokenStream {
    let fields = models().map(|(model, _)| {
        let field = model.field();
        let query = model.expand_query(ty);
        quote! { #field: #query }
    });

    quote! {
        ::bridge_caps::detect::Facts {
            #(#fields,)*
        }
    }
}

/// `const` block evaluating the `Predicates` of a concrete type.
pub fn expand_predicates_of(ty: &TokenStream) -> TokenStream {
    let facts = expand_facts_of(ty);
    quote! {
        ::bridge_caps::Predicates::from_facts(#facts, ::core::mem::needs_drop::<#ty>())
    }
}
