//! Struct traversal generation.
//!
//! Resolves the container's `skip_redact` list against the declared fields,
//! then emits the walk body and both `Debug` bodies.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote, quote_spanned, ToTokens};
use syn::{ext::IdentExt, spanned::Spanned, Fields, Member, Result};

use crate::generics::collect_generics_from_type;

pub(crate) struct StructDeriveOutput {
    pub(crate) walk_body: TokenStream,
    pub(crate) field_names: Vec<String>,
    pub(crate) skip_names: Vec<String>,
    pub(crate) walked_generics: Vec<Ident>,
    pub(crate) debug_generics: Vec<Ident>,
    pub(crate) debug_redacted_body: TokenStream,
    pub(crate) debug_raw_body: TokenStream,
}

struct FieldInfo {
    member: Member,
    binding: Ident,
    name: String,
    ty: syn::Type,
    span: Span,
    exempt: bool,
}

#[derive(Clone, Copy)]
enum Shape {
    Named,
    Tuple,
    Unit,
}

fn collect_fields(fields: Fields) -> (Shape, Vec<FieldInfo>) {
    match fields {
        Fields::Named(named) => {
            let infos = named
                .named
                .into_iter()
                .filter_map(|field| {
                    let span = field.span();
                    let ident = field.ident?;
                    Some(FieldInfo {
                        name: ident.unraw().to_string(),
                        member: Member::Named(ident.clone()),
                        binding: ident,
                        ty: field.ty,
                        span,
                        exempt: false,
                    })
                })
                .collect();
            (Shape::Named, infos)
        }
        Fields::Unnamed(unnamed) => {
            let infos = unnamed
                .unnamed
                .into_iter()
                .enumerate()
                .map(|(index, field)| {
                    let span = field.span();
                    FieldInfo {
                        name: index.to_string(),
                        member: Member::from(index),
                        binding: format_ident!("field_{index}"),
                        ty: field.ty,
                        span,
                        exempt: false,
                    }
                })
                .collect();
            (Shape::Tuple, infos)
        }
        Fields::Unit => (Shape::Unit, Vec::new()),
    }
}

/// Marks the fields named by `skip_redact` as exempt.
///
/// Unknown and repeated names are definition errors and are reported at the
/// offending name.
fn resolve_exemptions(
    name: &Ident,
    fields: &mut [FieldInfo],
    skip_redact: &[Member],
) -> Result<Vec<String>> {
    let mut skip_names = Vec::with_capacity(skip_redact.len());
    for member in skip_redact {
        let Some(field) = fields.iter_mut().find(|field| &field.member == member) else {
            let shown = member.to_token_stream().to_string();
            return Err(syn::Error::new_spanned(
                member,
                format!("`skip_redact` names `{shown}`, which is not a field of `{name}`"),
            ));
        };
        if field.exempt {
            return Err(syn::Error::new_spanned(
                member,
                format!("`{}` is listed more than once in `skip_redact`", field.name),
            ));
        }
        field.exempt = true;
        skip_names.push(field.name.clone());
    }
    Ok(skip_names)
}

pub(crate) fn derive_struct(
    name: &Ident,
    fields: Fields,
    generics: &syn::Generics,
    skip_redact: &[Member],
    root: &TokenStream,
) -> Result<StructDeriveOutput> {
    let (shape, mut fields) = collect_fields(fields);
    let skip_names = resolve_exemptions(name, &mut fields, skip_redact)?;

    let mut walked_generics = Vec::new();
    let mut debug_generics = Vec::new();
    let mut transforms = Vec::new();
    let mut debug_fields = Vec::new();

    for field in &fields {
        let FieldInfo {
            binding, ty, span, ..
        } = field;
        collect_generics_from_type(ty, generics, &mut debug_generics);

        if !field.exempt {
            collect_generics_from_type(ty, generics, &mut walked_generics);
            transforms.push(quote_spanned! { *span =>
                let #binding = #root::Walk::walk(#binding, mapper);
            });
        }

        let field_name = &field.name;
        debug_fields.push(match shape {
            Shape::Named => quote_spanned! { *span =>
                debug.field(#field_name, &#binding);
            },
            Shape::Tuple | Shape::Unit => quote_spanned! { *span =>
                debug.field(&#binding);
            },
        });
    }

    let bindings: Vec<&Ident> = fields.iter().map(|field| &field.binding).collect();
    let field_names = fields.iter().map(|field| field.name.clone()).collect();

    let (pattern, debug_body) = match shape {
        Shape::Named => (
            quote! { Self { #(#bindings),* } },
            quote! {
                let mut debug = f.debug_struct(stringify!(#name));
                #(#debug_fields)*
                debug.finish()
            },
        ),
        Shape::Tuple => (
            quote! { Self ( #(#bindings),* ) },
            quote! {
                let mut debug = f.debug_tuple(stringify!(#name));
                #(#debug_fields)*
                debug.finish()
            },
        ),
        Shape::Unit => (quote! { Self }, quote! { f.write_str(stringify!(#name)) }),
    };

    let walk_body = quote! {
        let #pattern = self;
        #(#transforms)*
        #pattern
    };

    // The redacted view owns its fields, the raw view borrows them.
    let debug_redacted_body = quote! {
        #[allow(unused_variables)]
        let #pattern = #root::redact(::core::clone::Clone::clone(self));
        #debug_body
    };
    let debug_raw_body = quote! {
        #[allow(unused_variables)]
        let #pattern = self;
        #debug_body
    };

    Ok(StructDeriveOutput {
        walk_body,
        field_names,
        skip_names,
        walked_generics,
        debug_generics,
        debug_redacted_body,
        debug_raw_body,
    })
}
