mod decl;
mod expand;

pub use decl::{DefineInput, MacroInput, NewTypeDecl};
pub use expand::expand;
