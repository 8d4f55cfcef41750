//! `bridge!` and `#[derive(Bridge)]`: per-type registration.
//!
//! Each registration becomes a module named after the alias in snake case,
//! as a raw identifier when that is a keyword (`Ref` -> `r#ref`).
//! The module holds the type aliases, the evaluated predicates and profile,
//! the vtable, one `const fn` per named query, a `Registration` marker
//! implementing `bridge_caps::Registered`, and the exported vtable accessor.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    DeriveInput, GenericArgument, Ident, PathArguments, Token, Type,
};

use crate::common::naming::{can_be_raw, compact_tokens, is_keyword, query_method, to_snake_case};
use crate::common::queries::{OBLIGATIONS, PREDICATE_QUERIES};
use crate::inner::facts::expand_predicates_of;

/// Generic instantiations may carry at most this many type arguments.
const MAX_TYPE_ARGS: usize = 2;

/// `Alias = Type` or a bare `Type` path.
pub struct BridgeDecl {
    alias: Option<Ident>,
    ty: Type,
}

impl Parse for BridgeDecl {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let alias = if input.peek(Ident) && input.peek2(Token![=]) && !input.peek2(Token![==]) {
            let alias: Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            Some(alias)
        } else {
            None
        };
        let ty: Type = input.parse()?;
        Ok(BridgeDecl { alias, ty })
    }
}

/// `bridge! { A = X; B = Y<u8>; Z }`
pub struct BridgeInput {
    decls: Punctuated<BridgeDecl, Token![;]>,
}

impl Parse for BridgeInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let decls = Punctuated::parse_terminated(input)?;
        if decls.is_empty() {
            return Err(input.error("expected at least one type to register"));
        }
        Ok(BridgeInput { decls })
    }
}

/// Everything the expansion needs for one registered type.
struct Plan {
    name: Ident,
    ty: Type,
    emit_alias: bool,
    ty_con: Option<(Type, Vec<Type>)>,
}

pub fn expand_bridge(input: BridgeInput) -> TokenStream {
    let mut out = TokenStream::new();
    for decl in input.decls {
        match plan_decl(decl) {
            Ok(plan) => out.extend(expand_plan(&plan)),
            Err(e) => out.extend(e.to_compile_error()),
        }
    }
    out
}

pub fn expand_derive_bridge(input: DeriveInput) -> TokenStream {
    if !input.generics.params.is_empty() {
        return syn::Error::new(
            input.generics.span(),
            "derive(Bridge) needs a concrete type; register an instantiation with `bridge!(Alias = Type<..>)`",
        )
        .to_compile_error();
    }

    let ident = input.ident;
    let plan = Plan {
        name: ident.clone(),
        ty: syn::parse_quote!(#ident),
        emit_alias: false,
        ty_con: None,
    };
    expand_plan(&plan)
}

fn plan_decl(decl: BridgeDecl) -> syn::Result<Plan> {
    let ty_con = match &decl.ty {
        Type::Path(tp) if tp.qself.is_none() => split_type_constructor(&decl.ty, tp)?,
        Type::Tuple(_) | Type::Array(_) => None,
        Type::Paren(p) => return plan_decl(BridgeDecl { alias: decl.alias, ty: (*p.elem).clone() }),
        other => {
            return Err(syn::Error::new(
                other.span(),
                "registered types must be owned value types: a path, tuple or array",
            ));
        }
    };

    match decl.alias {
        Some(name) => Ok(Plan {
            name,
            ty: decl.ty,
            emit_alias: true,
            ty_con,
        }),
        None => {
            let name = match (&decl.ty, &ty_con) {
                (Type::Path(tp), None) => tp.path.segments.last().map(|s| s.ident.clone()),
                _ => None,
            };
            match name {
                Some(name) => Ok(Plan {
                    name,
                    ty: decl.ty,
                    emit_alias: false,
                    ty_con,
                }),
                None => Err(syn::Error::new(
                    decl.ty.span(),
                    "this type needs an alias: `bridge!(Alias = Type)`",
                )),
            }
        }
    }
}

/// For `Path<A, B>` return the constructor with its arguments replaced by
/// parameters, plus the arguments themselves.
fn split_type_constructor(ty: &Type, tp: &syn::TypePath) -> syn::Result<Option<(Type, Vec<Type>)>> {
    let Some(last) = tp.path.segments.last() else {
        return Ok(None);
    };
    let PathArguments::AngleBracketed(args) = &last.arguments else {
        return Ok(None);
    };

    let mut type_args = Vec::new();
    for arg in &args.args {
        match arg {
            GenericArgument::Type(t) => type_args.push(t.clone()),
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "only type arguments are supported in registered instantiations",
                ));
            }
        }
    }
    if type_args.len() > MAX_TYPE_ARGS {
        return Err(syn::Error::new(
            ty.span(),
            format!(
                "at most {MAX_TYPE_ARGS} type arguments are supported, found {}",
                type_args.len()
            ),
        ));
    }

    let params: Vec<Ident> = (0..type_args.len()).map(|i| format_ident!("P{}", i)).collect();
    let mut con = tp.clone();
    if let Some(seg) = con.path.segments.last_mut() {
        seg.arguments = PathArguments::AngleBracketed(syn::parse_quote!(<#(#params),*>));
    }
    Ok(Some((Type::Path(con), type_args)))
}

/// The registered type as it reads in source.
fn type_text(ty: &Type) -> String {
    compact_tokens(&quote!(#ty).to_string())
}

/// The registration module for `name`, raw when the snake-cased name is a
/// keyword (`Ref` -> `r#ref`).
fn module_ident(name: &Ident) -> syn::Result<Ident> {
    let snake = to_snake_case(&name.to_string());
    if !is_keyword(&snake) {
        return Ok(Ident::new(&snake, name.span()));
    }
    if can_be_raw(&snake) {
        return Ok(Ident::new_raw(&snake, name.span()));
    }
    Err(syn::Error::new(
        name.span(),
        format!("`{snake}` cannot name the registration module; use `bridge!(Alias = {name})`"),
    ))
}

fn expand_plan(plan: &Plan) -> TokenStream {
    let name = &plan.name;
    let ty = &plan.ty;
    let name_str = name.to_string();
    let module = match module_ident(name) {
        Ok(module) => module,
        Err(e) => return e.to_compile_error(),
    };
    let symbol = format_ident!("{}_bridge_vtable", to_snake_case(&name_str));
    let symbol_str = symbol.to_string();
    let rust_type = type_text(ty);

    let alias = if plan.emit_alias {
        quote! {
            #[doc = concat!("Canonical name of `", #rust_type, "` across the bridge.")]
            pub type #name = #ty;
        }
    } else {
        quote! {}
    };

    let ty_con = match &plan.ty_con {
        Some((con, args)) => {
            let params: Vec<Ident> = (0..args.len()).map(|i| format_ident!("P{}", i)).collect();
            let arg_aliases: Vec<Ident> = (0..args.len()).map(|i| format_ident!("TyArg{}", i)).collect();
            quote! {
                /// The generic type constructor of the registered instantiation.
                pub type TyCon<#(#params),*> = #con;
                #(pub type #arg_aliases = #args;)*
            }
        }
        None => quote! {},
    };

    let self_ty = quote!(Type);
    let predicates = expand_predicates_of(&self_ty);
    let vtable = expand_vtable();

    let predicate_fns = PREDICATE_QUERIES.iter().map(|q| {
        let method = Ident::new(&query_method(q), Span::call_site());
        quote! {
            #[inline]
            pub const fn #method() -> bool {
                PREDICATES.#method()
            }
        }
    });
    let obligation_fns = OBLIGATIONS.iter().map(|o| {
        let method = format_ident!("should_impl_{}", to_snake_case(o));
        quote! {
            #[inline]
            pub const fn #method() -> bool {
                PROFILE.#method()
            }
        }
    });

    quote! {
        #alias

        #[doc = concat!("Bridge registration of `", #rust_type, "`.")]
        #[allow(dead_code, non_snake_case, clippy::all)]
        pub mod #module {
            #[allow(unused_imports)]
            use super::*;

            pub type Type = #ty;
            #ty_con

            pub const NAME: &str = #name_str;
            pub const RUST_TYPE: &str = #rust_type;
            pub const SYMBOL: &str = #symbol_str;

            pub const PREDICATES: ::bridge_caps::Predicates = #predicates;
            pub const PROFILE: ::bridge_caps::Profile = ::bridge_caps::Profile::derive(PREDICATES);
            pub const VTABLE: ::bridge_caps::BridgeVTable<Type> = #vtable;

            #(#predicate_fns)*
            #(#obligation_fns)*

            #[inline]
            pub const fn three_way_support() -> ::bridge_caps::ThreeWaySupport {
                PREDICATES.three_way
            }

            #[inline]
            pub const fn display_source() -> ::bridge_caps::DisplaySource {
                PREDICATES.display
            }

            #[inline]
            pub const fn abi_size() -> usize {
                ::core::mem::size_of::<Type>()
            }

            #[inline]
            pub const fn abi_align() -> usize {
                ::core::mem::align_of::<Type>()
            }

            /// Marker carrying this registration into generic code.
            pub struct Registration;

            impl ::bridge_caps::Registered for Registration {
                type Target = Type;
                const NAME: &'static str = NAME;
                const RUST_TYPE: &'static str = RUST_TYPE;
                const SYMBOL: &'static str = SYMBOL;
                const PREDICATES: ::bridge_caps::Predicates = PREDICATES;
                const PROFILE: ::bridge_caps::Profile = PROFILE;
                const VTABLE: ::bridge_caps::BridgeVTable<Type> = VTABLE;
            }

            static EXPORTED_VTABLE: ::bridge_caps::BridgeVTable<Type> = VTABLE;

            /// Address of the vtable for the foreign side.
            #[unsafe(no_mangle)]
            pub extern "C" fn #symbol() -> *const ::bridge_caps::BridgeVTable<Type> {
                &EXPORTED_VTABLE
            }
        }
    }
}

/// Single-source slots, and slots filled by the first available source.
const VTABLE_SLOTS: &[(&str, &[&str])] = &[
    ("default_new", &["DEFAULT_NEW"]),
    ("copy_new", &["COPY_NEW"]),
    ("move_new", &["MOVE_NEW"]),
    ("destruct", &["DESTRUCT"]),
    ("eq", &["EQ_STD", "EQ_OP"]),
    ("ne", &["NE_STD", "NE_OP"]),
    ("lt", &["LT_STD", "LT_OP"]),
    ("le", &["LE_STD", "LE_OP"]),
    ("gt", &["GT_STD", "GT_OP"]),
    ("ge", &["GE_STD", "GE_OP"]),
    ("three_way", &["CMP_STRONG", "CMP_PARTIAL", "CMP_SYNTH_STD", "CMP_SYNTH_OP"]),
    ("hash", &["HASH"]),
    ("debug", &["DEBUG"]),
    ("display", &["DISPLAY_TO_STRING", "DISPLAY_STRING_CAST", "DISPLAY_STRING_VIEW"]),
];

fn expand_vtable() -> TokenStream {
    let slots = VTABLE_SLOTS.iter().map(|(field, sources)| {
        let field = Ident::new(field, Span::call_site());
        let value = first_available(sources);
        quote! { #field: #value }
    });

    quote! {
        {
            #[allow(unused_imports)]
            use ::bridge_caps::detect::slots::*;
            type D = ::bridge_caps::detect::Detect<Type>;
            ::bridge_caps::BridgeVTable {
                size: ::core::mem::size_of::<Type>(),
                align: ::core::mem::align_of::<Type>(),
                #(#slots,)*
            }
        }
    }
}

fn first_available(sources: &[&str]) -> TokenStream {
    match sources {
        [] => quote! { None },
        [last] => {
            let c = Ident::new(last, Span::call_site());
            quote! { D::#c }
        }
        [head, rest @ ..] => {
            let c = Ident::new(head, Span::call_site());
            let rest = first_available(rest);
            quote! {
                match D::#c {
                    Some(f) => Some(f),
                    None => #rest,
                }
            }
        }
    }
}
