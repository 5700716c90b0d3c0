use quote::format_ident;
use syn::{
    parse::{Parse, ParseStream},
    Attribute, Generics, Ident, Result, Token, Type, Visibility,
};

/// A new type to declare: an alias over `ty` plus the tag that sets it apart.
pub struct NewTypeDecl {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub ident: Ident,
    /// Parsed only to be rejected with a proper span.
    pub generics: Generics,
    pub ty: Type,
}

impl NewTypeDecl {
    pub fn tag_ident(&self) -> Ident {
        format_ident!("{}Tag", self.ident, span = self.ident.span())
    }
}

/// Input of `new_type!(pub Length, i32)`.
pub struct MacroInput(pub NewTypeDecl);

impl Parse for MacroInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse()?;
        let ident = input.parse()?;
        let generics = input.parse()?;
        input.parse::<Token![,]>()?;
        let ty = input.parse()?;
        if !input.is_empty() {
            input.parse::<Token![,]>()?;
        }
        Ok(Self(NewTypeDecl {
            attrs,
            vis,
            ident,
            generics,
            ty,
        }))
    }
}

/// Input of `#[define] pub type Length = i32;`.
pub struct DefineInput(pub NewTypeDecl);

impl Parse for DefineInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse()?;
        input.parse::<Token![type]>()?;
        let ident = input.parse()?;
        let mut generics: Generics = input.parse()?;
        generics.where_clause = input.parse()?;
        input.parse::<Token![=]>()?;
        let ty = input.parse()?;
        input.parse::<Token![;]>()?;
        Ok(Self(NewTypeDecl {
            attrs,
            vis,
            ident,
            generics,
            ty,
        }))
    }
}
