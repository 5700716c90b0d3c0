use crate::NewTypeDecl;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{ext::IdentExt, Generics, Result};

const GENERICS_UNSUPPORTED: &str = "generic new types are not supported";

/// Expands a declaration into its tag and its alias, and nothing else.
///
/// Attributes stay on the alias. `#[cfg]`s are repeated on the tag so the two
/// items always exist together.
pub fn expand(decl: NewTypeDecl) -> Result<TokenStream> {
    reject_generics(&decl.generics)?;
    let tag = decl.tag_ident();
    let NewTypeDecl {
        attrs,
        vis,
        ident,
        ty,
        ..
    } = decl;
    let cfgs = attrs.iter().filter(|attr| attr.path.is_ident("cfg"));
    let tag_doc = format!(
        " Tag distinguishing [`{}`] from other new types.",
        ident.unraw()
    );
    Ok(quote!(
        #(#cfgs)*
        #[doc = #tag_doc]
        #vis enum #tag {}

        #(#attrs)*
        #vis type #ident = ::newtype::NewType<#ty, #tag>;
    ))
}

fn reject_generics(generics: &Generics) -> Result<()> {
    if let Some(clause) = &generics.where_clause {
        return Err(syn::Error::new_spanned(clause, GENERICS_UNSUPPORTED));
    }
    if !generics.params.is_empty() {
        return Err(syn::Error::new_spanned(generics, GENERICS_UNSUPPORTED));
    }
    Ok(())
}
