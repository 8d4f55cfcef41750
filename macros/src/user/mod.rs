// User-facing macros
//
// - register: bridge! and #[derive(Bridge)]
// - capable: capable!, assert_capable! and predicates_of!

mod capable;
mod register;

pub use capable::*;
pub use register::*;
