//! Procedural macro for deriving `Choices` implementations.
//!
//! This crate provides the `#[derive(Choices)]` macro which generates a
//! `Choices` implementation for an enum of unit variants: one catalog entry
//! per variant plus the mapping between variants and submitted values.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DataEnum, DeriveInput, Fields, Ident, LitStr, Meta, parse_macro_input};

/// Derive the `Choices` trait for an enum of unit variants.
///
/// # Attributes
///
/// ## On variants
/// - `#[text("...")]` - The text shown to the participant (default: the variant name)
/// - `#[value("...")]` - The submitted value (default: the variant name)
/// - `#[detail("...")]` - Secondary text shown under the option
/// - `#[exclusive]` - Selecting this option deselects everything else
#[proc_macro_derive(Choices, attributes(text, value, detail, exclusive))]
pub fn derive_choices(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    implement_choices(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn implement_choices(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Choices can only be derived for enums",
            ));
        }
    };

    let variants = collect_variants(input, data)?;

    let catalog_entries = variants.iter().map(|v| {
        let value = &v.value;
        let text = &v.text;
        let detail = v.detail.as_ref().map(|d| quote! { .with_detail(#d) });
        let exclusive = v.exclusive.then(|| quote! { .exclusive() });
        quote! {
            choice_step::Choice::new(#value, #text) #detail #exclusive
        }
    });

    let value_arms = variants.iter().map(|v| {
        let ident = &v.ident;
        let value = &v.value;
        quote! { Self::#ident => #value, }
    });

    let from_value_arms = variants.iter().map(|v| {
        let ident = &v.ident;
        let value = &v.value;
        quote! { #value => Some(Self::#ident), }
    });

    Ok(quote! {
        impl choice_step::Choices for #name {
            fn catalog() -> choice_step::ChoiceCatalog {
                choice_step::ChoiceCatalog::from_checked(vec![
                    #(#catalog_entries),*
                ])
            }

            fn value(&self) -> &'static str {
                match self {
                    #(#value_arms)*
                }
            }

            fn from_value(value: &str) -> Option<Self> {
                match value {
                    #(#from_value_arms)*
                    _ => None,
                }
            }
        }
    })
}

// ============================================================================
// Attribute Extraction
// ============================================================================

/// One variant with its attributes resolved.
struct ChoiceVariant {
    ident: Ident,
    text: String,
    value: String,
    detail: Option<String>,
    exclusive: bool,
}

fn collect_variants(input: &DeriveInput, data: &DataEnum) -> syn::Result<Vec<ChoiceVariant>> {
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            input,
            "Choices requires at least one variant",
        ));
    }

    let mut variants: Vec<ChoiceVariant> = Vec::new();
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "Choices variants cannot carry data",
            ));
        }

        let attrs = VariantAttrs::extract(&variant.attrs)?;
        let name = variant.ident.to_string();
        let value = attrs.value.unwrap_or_else(|| name.clone());

        if variants.iter().any(|v| v.value == value) {
            return Err(syn::Error::new_spanned(
                variant,
                format!("duplicate choice value \"{value}\""),
            ));
        }

        variants.push(ChoiceVariant {
            ident: variant.ident.clone(),
            text: attrs.text.unwrap_or(name),
            value,
            detail: attrs.detail,
            exclusive: attrs.exclusive,
        });
    }

    Ok(variants)
}

/// Attributes that can appear on variants
struct VariantAttrs {
    text: Option<String>,
    value: Option<String>,
    detail: Option<String>,
    exclusive: bool,
}

impl VariantAttrs {
    fn extract(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut text = None;
        let mut value = None;
        let mut detail = None;
        let mut exclusive = false;

        for attr in attrs {
            if attr.path().is_ident("text") {
                text = Some(extract_string_attr(attr)?);
            } else if attr.path().is_ident("value") {
                value = Some(extract_string_attr(attr)?);
            } else if attr.path().is_ident("detail") {
                detail = Some(extract_string_attr(attr)?);
            } else if attr.path().is_ident("exclusive") {
                if !matches!(attr.meta, Meta::Path(_)) {
                    return Err(syn::Error::new_spanned(attr, "expected #[exclusive]"));
                }
                exclusive = true;
            }
        }

        Ok(Self {
            text,
            value,
            detail,
            exclusive,
        })
    }
}

fn extract_string_attr(attr: &Attribute) -> syn::Result<String> {
    match &attr.meta {
        Meta::List(list) => {
            let lit: LitStr = list.parse_args()?;
            Ok(lit.value())
        }
        _ => Err(syn::Error::new_spanned(
            attr,
            "expected #[attr(\"string\")]",
        )),
    }
}
