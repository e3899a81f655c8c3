//! Procedural macros for cordial.
//!
//! - `#[derive(Field)]` - turns an enum of unit variants into the fillable
//!   field set of a part.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod field;

/// Derive macro for implementing the `Field` trait.
///
/// Every unit variant becomes a fillable field whose wire name is the
/// `snake_case` form of the variant name. Use `#[field(rename = "...")]` when
/// the wire name differs (e.g. `type`).
///
/// The impl names the trait through the `cordial` facade. Crates that depend
/// on `cordial-core` directly point it elsewhere with
/// `#[field(crate = "cordial_core")]` on the enum.
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Field)]
/// pub enum RoleField {
///     Id,
///     Name,
///     GuildId,
/// }
/// ```
#[proc_macro_derive(Field, attributes(field))]
pub fn derive_field(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    field::derive_field_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
