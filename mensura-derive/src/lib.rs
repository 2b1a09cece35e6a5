//! Derive macro implementation used by `mensura-core`.
//!
//! `mensura-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::Unit` and `crate::Quantity`, so it is intended to be used by `mensura-core` (or by crates that
//! expose an identical crate-root API).
//!
//! Most users should depend on `mensura` instead and use the built-in unit categories.
//!
//! # Generated impls
//!
//! For a *linear* category enum `MyUnit`, the derive implements:
//!
//! - `crate::Unit for MyUnit`, with `to_base`/`from_base` as multiplication/division by the variant's factor
//! - an inherent `conversion_factor()` accessor returning that factor
//!
//! Affine categories (temperature) cannot be expressed as a per-variant factor and implement `crate::Unit`
//! by hand.
//!
//! # Attributes
//!
//! The derive reads a required enum-level `#[unit(...)]` attribute:
//!
//! - `category = "length"`: category tag, used in error messages
//!
//! and a required `#[unit(...)]` attribute on every variant:
//!
//! - `name = "ft"`: displayed unit label
//! - `factor = 12.0`: conversion factor to the category's base unit

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, Data, DeriveInput, Expr, Fields, Ident, LitStr, Token, Variant,
};

/// Derive `crate::Unit` for a linear unit-category enum.
///
/// The derive must be paired with an enum-level `#[unit(category = ...)]` attribute and a
/// `#[unit(name = ..., factor = ...)]` attribute on every variant.
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

    // Parse the enum-level #[unit(...)] attribute
    let category_attr = parse_category_attribute(&input.attrs)?;
    let category = &category_attr.category;

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "#[derive(Unit)] only supports enums",
            ));
        }
    };

    let mut name_arms = Vec::new();
    let mut factor_arms = Vec::new();

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "unit variants must not carry fields",
            ));
        }

        let ident = &variant.ident;
        let variant_attr = parse_variant_attribute(variant)?;
        let unit_name = &variant_attr.name;
        let factor = &variant_attr.factor;

        name_arms.push(quote! { #name::#ident => #unit_name });
        factor_arms.push(quote! { #name::#ident => #factor });
    }

    let expanded = quote! {
        impl #name {
            /// Multiplicative factor from this unit to the category's base unit.
            pub const fn conversion_factor(self) -> f64 {
                match self {
                    #(#factor_arms,)*
                }
            }
        }

        impl crate::Unit for #name {
            const CATEGORY: &'static str = #category;

            fn name(self) -> &'static str {
                match self {
                    #(#name_arms,)*
                }
            }

            fn to_base(self, value: f64) -> f64 {
                value * self.conversion_factor()
            }

            fn from_base(self, base: f64) -> f64 {
                base / self.conversion_factor()
            }
        }
    };

    Ok(expanded)
}

/// Parsed contents of the enum-level `#[unit(...)]` attribute.
struct CategoryAttribute {
    category: LitStr,
    // Future extensions:
    // base_variant: Option<Ident>,
    // arithmetic: Option<LitBool>,
}

impl Parse for CategoryAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut category: Option<LitStr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "category" => {
                    category = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            // Consume trailing comma if present
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let category = category.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `category`")
        })?;

        Ok(CategoryAttribute { category })
    }
}

/// Parsed contents of a variant-level `#[unit(...)]` attribute.
struct VariantAttribute {
    name: LitStr,
    factor: Expr,
}

impl Parse for VariantAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name: Option<LitStr> = None;
        let mut factor: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    name = Some(input.parse()?);
                }
                "factor" => {
                    factor = Some(input.parse()?);
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

        let name = name
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `name`"))?;
        let factor = factor
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `factor`"))?;

        Ok(VariantAttribute { name, factor })
    }
}

fn parse_category_attribute(attrs: &[Attribute]) -> syn::Result<CategoryAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<CategoryAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing enum-level #[unit(...)] attribute",
    ))
}

fn parse_variant_attribute(variant: &Variant) -> syn::Result<VariantAttribute> {
    for attr in &variant.attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<VariantAttribute>();
        }
    }

    Err(syn::Error::new_spanned(
        variant,
        "missing variant-level #[unit(...)] attribute",
    ))
}
