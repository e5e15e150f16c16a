//! Derive macro implementation used by `mensura-core`.
//!
//! `mensura-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::Unit`, `crate::UnitCatalog` and `crate::Registry`, so it is intended to be used by `mensura-core` (or
//! by crates that expose an identical crate-root API).
//!
//! Most users should depend on `mensura` instead and use the predefined units.
//!
//! # Generated impls
//!
//! For a unit enum `MyUnit` whose variants are the units of one dimension, the derive implements:
//!
//! - `crate::Unit for MyUnit` (symbol, name, base flag, conversion parameters, reciprocal overrides)
//! - `crate::UnitCatalog for MyUnit` (dimension tag, the full variant list, wire/parse aliases, and a lazily
//!   built process-wide registry)
//! - `core::fmt::Display for MyUnit` (formats as the unit symbol)
//!
//! # Attributes
//!
//! The enum itself carries `#[unit(dimension = Dimension::Pressure)]`. Every variant carries a `#[unit(...)]`
//! attribute:
//!
//! - `symbol = "kPa"`: wire/display symbol (required)
//! - `name = "Kilopascal"`: display name, also the source of the compact key (required)
//! - `base`: marks the canonical unit of the dimension (exactly one variant)
//! - `coefficient = 1000.0`: affine scale to the base unit
//! - `offset = -273.15`: affine offset to the base unit (defaults to `0.0`)
//! - `reciprocal = 100.0`: replaces the affine map by `base = k / value`
//! - `alt_symbols = ["C"]`: extra symbols accepted on the wire
//! - `aliases = ["celsius"]`: extra case-insensitive tokens accepted by the string parser
//! - `keys = ["pressure_psi"]`: extra compact keys accepted when decoding

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    bracketed,
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    Attribute, Data, DeriveInput, Expr, Fields, Ident, LitStr, Token,
};

/// Derive `crate::Unit`, `crate::UnitCatalog` and `Display` for a unit enum.
///
/// The enum must carry `#[unit(dimension = ...)]` and each variant a `#[unit(symbol = .., name = .., ...)]`.
///
/// This macro is intended for use by `mensura-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let catalog = parse_attribute::<CatalogAttribute>(&input.attrs, name)?;
    let dimension = &catalog.dimension;

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new(
                name.span(),
                "`Unit` can only be derived for enums",
            ))
        }
    };

    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.ident.span(),
                "unit variants must not carry fields",
            ));
        }
        let attr = parse_attribute::<VariantAttribute>(&variant.attrs, &variant.ident)?;
        attr.validate(&variant.ident)?;
        variants.push((variant.ident.clone(), attr));
    }

    let bases: Vec<&Ident> = variants
        .iter()
        .filter(|(_, attr)| attr.base)
        .map(|(ident, _)| ident)
        .collect();
    let base = match bases.as_slice() {
        [base] => *base,
        [] => {
            return Err(syn::Error::new(
                name.span(),
                "exactly one variant must be marked `base`",
            ))
        }
        [_, extra, ..] => {
            return Err(syn::Error::new(
                extra.span(),
                "only one variant may be marked `base`",
            ))
        }
    };

    let idents: Vec<&Ident> = variants.iter().map(|(ident, _)| ident).collect();
    let symbols = variants.iter().map(|(_, attr)| &attr.symbol);
    let names = variants.iter().map(|(_, attr)| &attr.name);
    let coefficients = variants.iter().map(|(_, attr)| attr.coefficient_tokens());
    let offsets = variants.iter().map(|(_, attr)| attr.offset_tokens());
    let alt_symbols = variants.iter().map(|(_, attr)| {
        let alts = &attr.alt_symbols;
        quote! { &[#(#alts),*] }
    });
    let aliases = variants.iter().map(|(_, attr)| {
        let aliases = &attr.aliases;
        quote! { &[#(#aliases),*] }
    });
    let keys = variants.iter().map(|(_, attr)| {
        let keys = &attr.keys;
        quote! { &[#(#keys),*] }
    });

    let reciprocal: Vec<(&Ident, &Expr)> = variants
        .iter()
        .filter_map(|(ident, attr)| attr.reciprocal.as_ref().map(|k| (ident, k)))
        .collect();
    let conversions = if reciprocal.is_empty() {
        TokenStream2::new()
    } else {
        let recip_idents = reciprocal.iter().map(|(ident, _)| ident);
        let recip_consts = reciprocal.iter().map(|(_, k)| k);
        let recip_idents_from = recip_idents.clone();
        let recip_consts_from = recip_consts.clone();
        quote! {
            #[allow(unreachable_patterns)]
            fn convert_to_base(&self, value: f64) -> f64 {
                match self {
                    #( Self::#recip_idents => (#recip_consts) / value, )*
                    _ => crate::unit::affine_to_base(self, value),
                }
            }

            #[allow(unreachable_patterns)]
            fn convert_from_base(&self, value: f64) -> f64 {
                match self {
                    #( Self::#recip_idents_from => (#recip_consts_from) / value, )*
                    _ => crate::unit::affine_from_base(self, value),
                }
            }
        }
    };

    let expanded = quote! {
        impl crate::Unit for #name {
            fn dimension(&self) -> &str {
                <Self as crate::UnitCatalog>::DIMENSION.as_str()
            }

            fn symbol(&self) -> &str {
                match self {
                    #( Self::#idents => #symbols, )*
                }
            }

            fn name(&self) -> &str {
                match self {
                    #( Self::#idents => #names, )*
                }
            }

            fn is_base_unit(&self) -> bool {
                matches!(self, Self::#base)
            }

            fn coefficient(&self) -> f64 {
                match self {
                    #( Self::#idents => #coefficients, )*
                }
            }

            fn offset(&self) -> f64 {
                match self {
                    #( Self::#idents => #offsets, )*
                }
            }

            #conversions
        }

        impl crate::UnitCatalog for #name {
            const DIMENSION: crate::Dimension = #dimension;
            const ALL: &'static [Self] = &[#( Self::#idents ),*];
            const BASE: Self = Self::#base;

            fn alt_symbols(&self) -> &'static [&'static str] {
                match self {
                    #( Self::#idents => #alt_symbols, )*
                }
            }

            fn aliases(&self) -> &'static [&'static str] {
                match self {
                    #( Self::#idents => #aliases, )*
                }
            }

            fn keys(&self) -> &'static [&'static str] {
                match self {
                    #( Self::#idents => #keys, )*
                }
            }

            fn registry() -> &'static crate::Registry<Self> {
                static REGISTRY: crate::registry::Lazy<crate::Registry<#name>> =
                    crate::registry::Lazy::new(|| crate::Registry::build());
                &REGISTRY
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<Self as crate::Unit>::symbol(self))
            }
        }
    };

    Ok(expanded)
}

/// Parsed contents of the enum-level `#[unit(...)]` attribute.
struct CatalogAttribute {
    dimension: Expr,
}

impl Parse for CatalogAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut dimension: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "dimension" => {
                    dimension = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;

        Ok(CatalogAttribute { dimension })
    }
}

/// Parsed contents of a variant-level `#[unit(...)]` attribute.
struct VariantAttribute {
    symbol: LitStr,
    name: LitStr,
    base: bool,
    coefficient: Option<Expr>,
    offset: Option<Expr>,
    reciprocal: Option<Expr>,
    alt_symbols: Vec<LitStr>,
    aliases: Vec<LitStr>,
    keys: Vec<LitStr>,
}

impl VariantAttribute {
    fn validate(&self, ident: &Ident) -> syn::Result<()> {
        if self.base && (self.coefficient.is_some() || self.offset.is_some()) {
            return Err(syn::Error::new(
                ident.span(),
                "the `base` unit has an implicit coefficient of 1 and no offset",
            ));
        }
        if self.base && self.reciprocal.is_some() {
            return Err(syn::Error::new(
                ident.span(),
                "the `base` unit cannot be `reciprocal`",
            ));
        }
        if self.reciprocal.is_some() && (self.coefficient.is_some() || self.offset.is_some()) {
            return Err(syn::Error::new(
                ident.span(),
                "`reciprocal` replaces `coefficient` and `offset`",
            ));
        }
        if !self.base && self.coefficient.is_none() && self.reciprocal.is_none() {
            return Err(syn::Error::new(
                ident.span(),
                "missing required attribute `coefficient` (or `reciprocal`)",
            ));
        }
        Ok(())
    }

    fn coefficient_tokens(&self) -> TokenStream2 {
        match (&self.coefficient, &self.reciprocal) {
            (Some(coefficient), _) => quote! { (#coefficient) },
            (None, Some(k)) => quote! { (#k) },
            (None, None) => quote! { 1.0 },
        }
    }

    fn offset_tokens(&self) -> TokenStream2 {
        match &self.offset {
            Some(offset) => quote! { (#offset) },
            None => quote! { 0.0 },
        }
    }
}

fn parse_string_list(input: ParseStream) -> syn::Result<Vec<LitStr>> {
    let content;
    bracketed!(content in input);
    let items = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
    Ok(items.into_iter().collect())
}

impl Parse for VariantAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut name: Option<LitStr> = None;
        let mut base = false;
        let mut coefficient: Option<Expr> = None;
        let mut offset: Option<Expr> = None;
        let mut reciprocal: Option<Expr> = None;
        let mut alt_symbols = Vec::new();
        let mut aliases = Vec::new();
        let mut keys = Vec::new();

        while !input.is_empty() {
            let ident: Ident = input.parse()?;

            if ident == "base" {
                base = true;
            } else {
                input.parse::<Token![=]>()?;
                match ident.to_string().as_str() {
                    "symbol" => {
                        symbol = Some(input.parse()?);
                    }
                    "name" => {
                        name = Some(input.parse()?);
                    }
                    "coefficient" => {
                        coefficient = Some(input.parse()?);
                    }
                    "offset" => {
                        offset = Some(input.parse()?);
                    }
                    "reciprocal" => {
                        reciprocal = Some(input.parse()?);
                    }
                    "alt_symbols" => {
                        alt_symbols = parse_string_list(input)?;
                    }
                    "aliases" => {
                        aliases = parse_string_list(input)?;
                    }
                    "keys" => {
                        keys = parse_string_list(input)?;
                    }
                    other => {
                        return Err(syn::Error::new(
                            ident.span(),
                            format!("unknown attribute `{}`", other),
                        ));
                    }
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let name =
            name.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `name`"))?;

        Ok(VariantAttribute {
            symbol,
            name,
            base,
            coefficient,
            offset,
            reciprocal,
            alt_symbols,
            aliases,
            keys,
        })
    }
}

fn parse_attribute<T: Parse>(attrs: &[Attribute], owner: &Ident) -> syn::Result<T> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<T>();
        }
    }

    Err(syn::Error::new(
        owner.span(),
        "missing #[unit(...)] attribute",
    ))
}
