// Boolean expression parsing and evaluation for capability queries

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    Ident, Token,
};

use super::naming::query_method;
use super::queries::PREDICATE_QUERIES;

// =============================================================================
// Boolean Expression AST
// =============================================================================

#[derive(Clone, Debug)]
pub enum BoolExpr {
    Cap(Ident),
    And(Box<BoolExpr>, Box<BoolExpr>),
    Or(Box<BoolExpr>, Box<BoolExpr>),
    Not(Box<BoolExpr>),
}

impl Parse for BoolExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        parse_or(input)
    }
}

// Recursive descent parser: Or -> And -> Unary -> Primary

fn parse_or(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_and(input)?;

    while input.peek(Token![|]) {
        input.parse::<Token![|]>()?;
        let rhs = parse_and(input)?;
        lhs = BoolExpr::Or(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_and(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_unary(input)?;

    while input.peek(Token![&]) {
        input.parse::<Token![&]>()?;
        let rhs = parse_unary(input)?;
        lhs = BoolExpr::And(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(BoolExpr::Not(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        content.parse()
    } else {
        let name: Ident = input.parse()?;
        Ok(BoolExpr::Cap(name))
    }
}

// =============================================================================
// Evaluation against a `Predicates` value
// =============================================================================

/// Lower the expression to boolean code reading `predicates`, one method call
/// per predicate name. Unknown names are reported at their span.
pub fn bool_expr_to_check(expr: &BoolExpr, predicates: &TokenStream) -> syn::Result<TokenStream> {
    Ok(match expr {
        BoolExpr::Cap(name) => {
            let text = name.to_string();
            if !PREDICATE_QUERIES.contains(&text.as_str()) {
                return Err(syn::Error::new(
                    name.span(),
                    format!(
                        "unknown capability predicate `{text}`; expected one of: {}",
                        PREDICATE_QUERIES.join(", ")
                    ),
                ));
            }
            let method = format_ident!("{}", query_method(&text), span = name.span());
            quote! { #predicates.#method() }
        }
        BoolExpr::And(lhs, rhs) => {
            let l = bool_expr_to_check(lhs, predicates)?;
            let r = bool_expr_to_check(rhs, predicates)?;
            quote! { (#l && #r) }
        }
        BoolExpr::Or(lhs, rhs) => {
            let l = bool_expr_to_check(lhs, predicates)?;
            let r = bool_expr_to_check(rhs, predicates)?;
            quote! { (#l || #r) }
        }
        BoolExpr::Not(operand) => {
            let o = bool_expr_to_check(operand, predicates)?;
            quote! { (!#o) }
        }
    })
}

/// Human-readable form, used in diagnostics.
pub fn bool_expr_to_string(expr: &BoolExpr) -> String {
    match expr {
        BoolExpr::Cap(name) => name.to_string(),
        BoolExpr::And(lhs, rhs) => {
            format!("({} & {})", bool_expr_to_string(lhs), bool_expr_to_string(rhs))
        }
        BoolExpr::Or(lhs, rhs) => {
            format!("({} | {})", bool_expr_to_string(lhs), bool_expr_to_string(rhs))
        }
        BoolExpr::Not(operand) => format!("!{}", bool_expr_to_string(operand)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence() {
        let expr: BoolExpr = syn::parse_str("Hashable | Debuggable & !TriviallyCopyable").unwrap();
        assert_eq!(
            bool_expr_to_string(&expr),
            "(Hashable | (Debuggable & !TriviallyCopyable))"
        );
    }

    #[test]
    fn unknown_predicate() {
        let expr: BoolExpr = syn::parse_str("Hashable & Serializable").unwrap();
        let err = bool_expr_to_check(&expr, &quote!(p)).unwrap_err();
        assert!(err.to_string().contains("Serializable"));
    }
}
