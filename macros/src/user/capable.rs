//! `capable!`, `assert_capable!` and `predicates_of!`: predicate queries on
//! concrete types without registering them.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Type;

use crate::common::naming::compact_tokens;
use crate::common::{bool_expr_to_check, bool_expr_to_string, TypeCheck, TypeChecks};
use crate::inner::facts::expand_predicates_of;

fn expand_check(check: &TypeCheck) -> syn::Result<TokenStream> {
    let ty = &check.ty;
    let predicates = expand_predicates_of(&quote!(#ty));
    let cond = bool_expr_to_check(&check.expr, &quote!(__PREDICATES))?;
    Ok(quote! {
        {
            const __PREDICATES: ::bridge_caps::Predicates = #predicates;
            #cond
        }
    })
}

/// All checks `&&`-ed into one `bool` expression.
pub fn expand_capable(input: TypeChecks) -> TokenStream {
    let mut exprs = Vec::new();
    for check in &input.checks {
        match expand_check(check) {
            Ok(e) => exprs.push(e),
            Err(e) => return e.to_compile_error(),
        }
    }
    quote! { (#(#exprs)&&*) }
}

/// One `const` assertion per check, failing the build when it does not hold.
pub fn expand_assert_capable(input: TypeChecks) -> TokenStream {
    let mut out = TokenStream::new();
    for check in &input.checks {
        let ty = &check.ty;
        let expr = match expand_check(check) {
            Ok(e) => e,
            Err(e) => return e.to_compile_error(),
        };
        let message = format!(
            "`{}` does not satisfy `{}`",
            compact_tokens(&quote!(#ty).to_string()),
            bool_expr_to_string(&check.expr)
        );
        out.extend(quote! {
            const _: () = ::core::assert!(#expr, #message);
        });
    }
    out
}

pub fn expand_predicates_of_type(ty: Type) -> TokenStream {
    let predicates = expand_predicates_of(&quote!(#ty));
    quote! {
        {
            const __PREDICATES: ::bridge_caps::Predicates = #predicates;
            __PREDICATES
        }
    }
}
