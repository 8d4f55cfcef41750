use proc_macro2::TokenStream;
use quote::{format_ident, quote, ToTokens};
use syn::punctuated::Punctuated;
use syn::{parse_str, Ident, Token, TypeParamBound};

use super::naming::{to_screaming_snake_case, to_snake_case};

/// Metadata for one detected trait fact.
///
/// Parsed from the table DSL: `"path::to::Trait + ?Sized"`. The fact is
/// named after the first trait bound.
pub struct TraitModel {
    /// The bounds a type must satisfy for the fact to hold.
    pub bounds: Punctuated<TypeParamBound, Token![+]>,
    /// Source text of the bound, kept for generated docs.
    pub source: String,
}

impl TraitModel {
    pub fn parse_desc(desc: &str) -> Self {
        let desc = desc.trim();

        // A single bound parses directly; "Trait + ?Sized" needs the trait-object form.
        let bounds = match parse_str::<TypeParamBound>(desc) {
            Ok(b) => {
                let mut p = Punctuated::new();
                p.push(b);
                p
            }
            Err(_) => match parse_str::<syn::TypeTraitObject>(&format!("dyn {desc}")) {
                Ok(obj) => obj.bounds,
                Err(e) => panic!("Failed to parse bounds '{desc}': {e}"),
            },
        };

        TraitModel {
            bounds,
            source: desc.to_string(),
        }
    }

    pub fn name(&self) -> Ident {
        for bound in &self.bounds {
            if let TypeParamBound::Trait(tb) = bound {
                if let Some(segment) = tb.path.segments.last() {
                    return segment.ident.clone();
                }
            }
        }

        panic!(
            "Cannot infer a fact name from bounds: {}",
            self.bounds.to_token_stream()
        );
    }

    /// `PartialEq` -> `IS_PARTIAL_EQ`
    pub fn const_name(&self) -> Ident {
        format_ident!("IS_{}", to_screaming_snake_case(&self.name().to_string()))
    }

    /// `PartialEq` -> `PartialEqFallback`
    pub fn fallback_trait(&self) -> Ident {
        format_ident!("{}Fallback", self.name())
    }

    /// `PartialEq` -> `partial_eq`, the field name in `Facts`.
    pub fn field(&self) -> Ident {
        format_ident!("{}", to_snake_case(&self.name().to_string()))
    }

    /// Fallback trait (always present) plus the inherent const on `Detect<T>`
    /// for types satisfying the bounds. `cfg` gates only the inherent const,
    /// so a disabled group reads as absent instead of failing to resolve.
    pub fn expand_detection(&self, cfg: &TokenStream) -> TokenStream {
        let const_name = self.const_name();
        let fallback_trait = self.fallback_trait();
        let bounds = &self.bounds;

        quote! {
            #[doc(hidden)]
            pub trait #fallback_trait {
                const #const_name: bool = false;
            }
            impl<T: ?Sized> #fallback_trait for crate::detect::Detect<T> {}

            #cfg
            impl<T: #bounds> crate::detect::Detect<T> {
                pub const #const_name: bool = true;
            }
        }
    }

    /// Resolve the fact for a concrete type from outside the library.
    pub fn expand_query(&self, ty: &TokenStream) -> TokenStream {
        let const_name = self.const_name();
        let fallback_trait = self.fallback_trait();
        quote! {
            {
                #[allow(unused_imports)]
                use ::bridge_caps::detect::#fallback_trait;
                ::bridge_caps::detect::Detect::<#ty>::#const_name
            }
        }
    }
}
