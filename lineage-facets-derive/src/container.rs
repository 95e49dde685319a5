//! Container-level attribute parsing for `#[derive(Redactable)]`.
//!
//! The exemption set lives on the struct itself, not on individual fields, so
//! all options are read from `#[redact(...)]` on the container.

use syn::{punctuated::Punctuated, Attribute, Member, Meta, Result, Token};

/// Options parsed from container-level `#[redact(...)]` attributes.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// Fields exempt from redaction, in declaration order of the attribute.
    pub(crate) skip_redact: Vec<Member>,
    /// If true, skip generating the `Debug` impl.
    pub(crate) skip_debug: bool,
}

/// Parses container-level `#[redact(...)]` attributes.
///
/// Several attributes may be stacked; their `skip_redact` lists are concatenated.
pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("redact") {
            continue;
        }

        match &attr.meta {
            Meta::Path(path) => {
                return Err(syn::Error::new_spanned(
                    path,
                    "expected options, e.g. #[redact(skip_redact(name))]",
                ));
            }
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("skip_redact") {
                        let content;
                        syn::parenthesized!(content in meta.input);
                        let members = Punctuated::<Member, Token![,]>::parse_terminated(&content)?;
                        options.skip_redact.extend(members);
                        Ok(())
                    } else if meta.path.is_ident("skip_debug") {
                        options.skip_debug = true;
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown container option `{}`; expected `skip_redact` or `skip_debug`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            Meta::NameValue(nv) => {
                return Err(syn::Error::new_spanned(
                    nv,
                    "name-value syntax is not supported for #[redact]",
                ));
            }
        }
    }

    Ok(options)
}
