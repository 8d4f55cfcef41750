//! Common parsing helpers
//!
//! Shared parsing helpers for consistent syntax across macros.

use syn::{
    parse::{Parse, ParseStream},
    Token, Type,
};

use super::BoolExpr;

// =============================================================================
// Type Check Parsing: `Type: Expr`
// =============================================================================

/// A single type check: `Type: BoolExpr`
///
/// Used in:
/// - `capable!(Point: Hashable & !TriviallyCopyable)`
/// - `assert_capable!(Point: Displayable)`
pub struct TypeCheck {
    pub ty: Type,
    pub expr: BoolExpr,
}

impl Parse for TypeCheck {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: Type = input.parse()?;
        input.parse::<Token![:]>()?;
        let expr: BoolExpr = input.parse()?;
        Ok(TypeCheck { ty, expr })
    }
}

/// One or more type checks separated by commas; all must hold.
pub struct TypeChecks {
    pub checks: Vec<TypeCheck>,
}

impl Parse for TypeChecks {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut checks = vec![input.parse()?];

        while input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            checks.push(input.parse()?);
        }

        Ok(TypeChecks { checks })
    }
}
