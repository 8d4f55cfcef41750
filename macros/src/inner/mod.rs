// Internal macros used by the library crate itself
//
// - facts: trait-fact table and detection generator

pub mod facts;
