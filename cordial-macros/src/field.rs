//! `#[derive(Field)]` implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, Path};

/// Convert a `PascalCase` variant name into its `snake_case` wire name.
pub(crate) fn snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, ch) in ident.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Reads `#[field(rename = "...")]`, if present.
fn rename(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut renamed = None;
    for attr in attrs {
        if !attr.path().is_ident("field") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                renamed = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unknown field attribute, expected `rename`"))
            }
        })?;
    }
    Ok(renamed)
}

/// Reads the container-level `#[field(crate = "...")]`, defaulting to the
/// `cordial` facade.
fn crate_path(attrs: &[Attribute]) -> syn::Result<Path> {
    let mut path = None;
    for attr in attrs {
        if !attr.path().is_ident("field") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let lit: LitStr = meta.value()?.parse()?;
                path = Some(lit.parse_with(Path::parse_mod_style)?);
                Ok(())
            } else {
                Err(meta.error("unknown field attribute, expected `crate`"))
            }
        })?;
    }
    match path {
        Some(path) => Ok(path),
        None => syn::parse_str("::cordial"),
    }
}

pub(crate) fn derive_field_impl(input: DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let krate = crate_path(&input.attrs)?;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            name,
            "Field can only be derived for enums of unit variants",
        ));
    };

    let mut variants = Vec::with_capacity(data.variants.len());
    let mut wire_names = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "Field variants must not carry data",
            ));
        }
        let wire = match rename(&variant.attrs)? {
            Some(renamed) => renamed,
            None => snake_case(&variant.ident.to_string()),
        };
        if wire_names.contains(&wire) {
            return Err(syn::Error::new_spanned(
                variant,
                format!("duplicate wire name `{}`", wire),
            ));
        }
        variants.push(&variant.ident);
        wire_names.push(wire);
    }

    Ok(quote! {
        impl #impl_generics #krate::Field for #name #ty_generics #where_clause {
            const ALL: &'static [Self] = &[#(Self::#variants),*];

            fn name(self) -> &'static str {
                match self {
                    #(Self::#variants => #wire_names,)*
                }
            }

            fn from_name(name: &str) -> ::core::option::Option<Self> {
                match name {
                    #(#wire_names => ::core::option::Option::Some(Self::#variants),)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}
