use newtype_lib::{DefineInput, MacroInput};
use proc_macro::TokenStream;
use syn::{parse::Nothing, parse_macro_input};

/// Declares a new type over an underlying type.
///
/// ```text
/// new_type!(pub Length, i32);
/// ```
///
/// expands to a tag and an alias:
///
/// ```text
/// pub enum LengthTag {}
/// pub type Length = ::newtype::NewType<i32, LengthTag>;
/// ```
///
/// Attributes before the name go on the alias.
#[proc_macro]
pub fn new_type(input: TokenStream) -> TokenStream {
    let MacroInput(decl) = parse_macro_input!(input as MacroInput);
    newtype_lib::expand(decl)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Turns a type alias into a new type over the aliased type.
///
/// ```text
/// #[define]
/// pub type Length = i32;
/// ```
///
/// expands exactly like `new_type!(pub Length, i32)`.
#[proc_macro_attribute]
pub fn define(attr: TokenStream, input: TokenStream) -> TokenStream {
    parse_macro_input!(attr as Nothing);
    let DefineInput(decl) = parse_macro_input!(input as DefineInput);
    newtype_lib::expand(decl)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
