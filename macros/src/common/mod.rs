// Common utilities shared between internal and user-facing macros
//
// This module contains:
// - bool_expr: Boolean expression parsing and evaluation
// - naming: identifier case conversions
// - parse_utils: Common parsing helpers
// - queries: named predicate and obligation queries
// - trait_model: parsing of the trait-fact table

mod bool_expr;
pub mod naming;
mod parse_utils;
pub mod queries;
pub mod trait_model;

pub use bool_expr::*;
pub use parse_utils::*;
pub use trait_model::*;
