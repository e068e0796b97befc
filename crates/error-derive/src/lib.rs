//! `#[derive(Error)]` for plain error enums.
//!
//! Every variant carries a `#[msg = "..."]` attribute that becomes its
//! [Display](std::fmt::Display) output. Variants may either be units or wrap
//! exactly one value; wrapped values get a `From` impl and are reported as the
//! error [source](std::error::Error::source).

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::spanned::Spanned;

#[proc_macro_derive(Error, attributes(msg))]
pub fn derive_error(input: TokenStream) -> TokenStream {
    let item = match syn::parse::<syn::ItemEnum>(input) {
        Ok(item) => item,
        Err(error) => return error.to_compile_error().into(),
    };

    expand(&item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(item: &syn::ItemEnum) -> syn::Result<TokenStream2> {
    let name = &item.ident;
    let (impl_generics, type_generics, where_clause) = item.generics.split_for_impl();

    let mut display_arms = vec![];
    let mut source_arms = vec![];
    let mut from_impls = vec![];

    for variant in &item.variants {
        let ident = &variant.ident;
        let message = message_of(variant)?;

        match &variant.fields {
            syn::Fields::Unit => {
                display_arms.push(quote!(Self::#ident => f.write_str(#message)));
            },
            syn::Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                let ty = &fields.unnamed[0].ty;

                display_arms.push(quote!(Self::#ident(_) => f.write_str(#message)));
                source_arms.push(quote!(Self::#ident(value) => Some(value)));
                from_impls.push(quote!(
                    #[automatically_derived]
                    impl #impl_generics ::std::convert::From<#ty> for #name #type_generics #where_clause {
                        fn from(value: #ty) -> Self {
                            Self::#ident(value)
                        }
                    }
                ));
            },
            syn::Fields::Unnamed(fields) => {
                return Err(syn::Error::new(
                    fields.span(),
                    "error variants may wrap at most one value",
                ));
            },
            syn::Fields::Named(fields) => {
                return Err(syn::Error::new(
                    fields.span(),
                    "error variants with named fields are not supported",
                ));
            },
        }
    }

    Ok(quote!(
        #[automatically_derived]
        impl #impl_generics ::std::fmt::Display for #name #type_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    #(#display_arms,)*
                }
            }
        }

        #(#from_impls)*

        #[automatically_derived]
        impl #impl_generics ::std::error::Error for #name #type_generics #where_clause {
            fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
                #[allow(unreachable_patterns)]
                let source: Option<&(dyn ::std::error::Error + 'static)> = match self {
                    #(#source_arms,)*
                    _ => None,
                };
                source
            }
        }
    ))
}

/// Finds the `#[msg = "..."]` attribute of a variant
fn message_of(variant: &syn::Variant) -> syn::Result<&syn::Expr> {
    variant
        .attrs
        .iter()
        .filter_map(|attr| match &attr.meta {
            syn::Meta::NameValue(name_value) if name_value.path.is_ident("msg") => {
                Some(&name_value.value)
            },
            _ => None,
        })
        .next()
        .ok_or_else(|| {
            syn::Error::new(
                variant.ident.span(),
                "missing #[msg = \"...\"] attribute on error variant",
            )
        })
}
