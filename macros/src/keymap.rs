// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `keymap!` macro.

use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{braced, Attribute, Ident, Path, Token, Type, Visibility};

/// One `KeyMarker => Type` line.
struct EntryDecl {
    key: Path,
    ty: Type,
}

impl Parse for EntryDecl {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key = input.parse()?;
        input.parse::<Token![=>]>()?;
        let ty = input.parse()?;
        Ok(Self { key, ty })
    }
}

/// The whole macro input.
struct KeymapInput {
    attrs: Vec<Attribute>,
    vis: Visibility,
    name: Ident,
    entries: Punctuated<EntryDecl, Token![,]>,
}

impl Parse for KeymapInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse()?;
        let name = input.parse()?;
        let content;
        braced!(content in input);
        let entries = content.parse_terminated(EntryDecl::parse, Token![,])?;
        if !input.is_empty() {
            return Err(input.error("expected a single map declaration"));
        }
        Ok(Self {
            attrs,
            vis,
            name,
            entries,
        })
    }
}

fn path_text(path: &Path) -> String {
    path.to_token_stream().to_string()
}

/// Reject a marker named twice. Markers that differ in spelling but resolve
/// to the same key text are caught later, by constant evaluation.
fn reject_repeated_markers(input: &KeymapInput) -> syn::Result<()> {
    let entries: Vec<&EntryDecl> = input.entries.iter().collect();
    let mut error: Option<syn::Error> = None;

    for (i, later) in entries.iter().enumerate() {
        let text = path_text(&later.key);
        if let Some(earlier) = entries[..i].iter().find(|e| path_text(&e.key) == text) {
            let mut err = syn::Error::new_spanned(
                &later.key,
                format!("key `{}` is bound more than once in `{}`", text, input.name),
            );
            err.combine(syn::Error::new_spanned(&earlier.key, "first bound here"));
            match error.as_mut() {
                Some(existing) => existing.combine(err),
                None => error = Some(err),
            }
        }
    }

    match error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

pub(crate) fn expand(input: TokenStream) -> syn::Result<TokenStream> {
    let input: KeymapInput = syn::parse2(input)?;
    reject_repeated_markers(&input)?;

    let KeymapInput {
        attrs,
        vis,
        name,
        entries,
    } = &input;
    let name_str = name.to_string();
    let keys: Vec<&Path> = entries.iter().map(|e| &e.key).collect();
    let types: Vec<&Type> = entries.iter().map(|e| &e.ty).collect();

    Ok(quote! {
        #(#attrs)*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        #vis struct #name;

        impl #name {
            /// Bindings in declaration order.
            pub const BINDINGS: &'static [::keyed::Binding] = &[
                #( ::keyed::Binding::of::<#types>(<#keys as ::keyed::StaticKey>::KEY) ),*
            ];

            /// The unvalidated declaration, for the dynamic tier.
            pub const KEY_MAP: ::keyed::KeyMap = ::keyed::KeyMap::new(#name_str, Self::BINDINGS);
        }

        const _: () = ::keyed::assert_unique(#name::BINDINGS);

        impl ::keyed::Schema for #name {
            const MAP: ::keyed::ValidatedMap = ::keyed::ValidatedMap::new_const(Self::KEY_MAP);
        }

        #(
            impl ::keyed::Entry<#keys> for #name {
                type Value = #types;
                const POSITION: usize = ::keyed::resolve_position(
                    Self::BINDINGS,
                    <#keys as ::keyed::StaticKey>::KEY,
                );
            }
        )*
    })
}
