//! Derive macro for `lineage-facets`.
//!
//! `#[derive(Redactable)]` generates, for a struct:
//! - a `Walk` implementation that redacts every field not listed in
//!   `#[redact(skip_redact(...))]`
//! - a `Redactable` implementation carrying the type-level field list and
//!   exemption set
//! - a `Debug` implementation that prints the redacted view
//!
//! Exemption names are checked against the declared fields while the macro
//! expands, so a misspelled `skip_redact` entry is a compile error rather than a
//! silent no-op.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, parse_quote, spanned::Spanned, Data, DeriveInput, Result};

mod container;
mod derive_struct;
mod generics;
use container::{parse_container_options, ContainerOptions};
use derive_struct::{derive_struct, StructDeriveOutput};
use generics::add_bounds;

/// Derives `lineage_facets::Walk` and `lineage_facets::Redactable` for a struct.
///
/// # Container Attributes
///
/// - `#[redact(skip_redact(field, ...))]` - the type's exemption set. Listed
///   fields pass through redaction unchanged. Every other field is redacted:
///   text becomes the placeholder, scalars their neutral value, and nested
///   `Redactable` types (also inside `Option`, `Vec`, maps) are walked with their
///   own exemption set. Tuple struct fields are named by index
///   (`skip_redact(0)`). Unknown or repeated names are rejected at compile time.
/// - `#[redact(skip_debug)]` - do not generate `Debug`.
///
/// # Additional Generated Impls
///
/// - `Debug`: outside `cfg(any(test, feature = "testing"))` the value is cloned,
///   redacted, and the redacted fields are printed. This requires `Clone`.
///
/// Enums and unions are rejected: the exemption set is a list of field names
/// and only structs have a single fixed set of fields.
#[proc_macro_derive(Redactable, attributes(redact))]
pub fn derive_redactable(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the `lineage-facets` crate root.
///
/// Handles crate renaming (e.g., `facets = { package = "lineage-facets", ... }`).
/// Inside `lineage-facets` itself the crate aliases itself with
/// `extern crate self as lineage_facets`, so the plain name resolves there too.
fn crate_root() -> TokenStream {
    match crate_name("lineage-facets") {
        Ok(FoundCrate::Itself) => quote! { lineage_facets },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::lineage_facets },
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let ContainerOptions {
        skip_redact,
        skip_debug,
    } = parse_container_options(&attrs)?;

    let fields = match data {
        Data::Struct(data) => data.fields,
        Data::Enum(e) => {
            return Err(syn::Error::new(
                e.enum_token.span(),
                "`Redactable` can only be derived for structs",
            ));
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Redactable` cannot be derived for unions",
            ));
        }
    };

    let root = crate_root();
    let StructDeriveOutput {
        walk_body,
        field_names,
        skip_names,
        walked_generics,
        debug_generics,
        debug_redacted_body,
        debug_raw_body,
    } = derive_struct(&ident, fields, &generics, &skip_redact, &root)?;

    let walk_bound = quote! { #root::Walk };
    let walk_generics = add_bounds(generics.clone(), &walked_generics, &walk_bound);
    let (impl_generics, ty_generics, where_clause) = walk_generics.split_for_impl();

    let debug_impl = if skip_debug {
        quote! {}
    } else {
        let debug_bound = quote! { ::core::fmt::Debug };
        let raw_generics = add_bounds(generics.clone(), &debug_generics, &debug_bound);
        let (raw_impl_generics, raw_ty_generics, raw_where_clause) = raw_generics.split_for_impl();

        let mut redacted_generics = add_bounds(walk_generics.clone(), &debug_generics, &debug_bound);
        redacted_generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(Self: ::core::clone::Clone));
        let (red_impl_generics, red_ty_generics, red_where_clause) =
            redacted_generics.split_for_impl();

        quote! {
            #[cfg(any(test, feature = "testing"))]
            impl #raw_impl_generics ::core::fmt::Debug for #ident #raw_ty_generics #raw_where_clause {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    #debug_raw_body
                }
            }

            #[cfg(not(any(test, feature = "testing")))]
            impl #red_impl_generics ::core::fmt::Debug for #ident #red_ty_generics #red_where_clause {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    #debug_redacted_body
                }
            }
        }
    };

    Ok(quote! {
        impl #impl_generics #root::Walk for #ident #ty_generics #where_clause {
            fn walk<M: #root::RedactionMapper>(self, mapper: &M) -> Self {
                let _ = mapper;
                #walk_body
            }
        }

        impl #impl_generics #root::Redactable for #ident #ty_generics #where_clause {
            const FIELDS: &'static [&'static str] = &[#(#field_names),*];
            const SKIP_REDACT: &'static [&'static str] = &[#(#skip_names),*];
        }

        #debug_impl
    })
}
