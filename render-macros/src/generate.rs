//! Code generation for `#[derive(Renderable)]`.

use crate::parse::{Capability, RenderableDef};
use proc_macro2::TokenStream;
use quote::quote;
use syn::WherePredicate;

/// Generate the `render::Renderable` impl.
pub fn generate_renderable(def: &RenderableDef) -> TokenStream {
    let name = &def.name;

    let mut generics = def.generics.clone();
    let where_clause = generics.make_where_clause();
    for capability in &def.capabilities {
        where_clause.predicates.push(capability_bound(*capability));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let accessors = def.capabilities.iter().map(|capability| generate_accessor(*capability));

    quote! {
        #[automatically_derived]
        impl #impl_generics ::render::Renderable for #name #ty_generics #where_clause {
            #(#accessors)*
        }
    }
}

/// `Self: Trait` bound required by a capability.
fn capability_bound(capability: Capability) -> WherePredicate {
    match capability {
        Capability::Serialize => syn::parse_quote!(Self: ::render::erased_serde::Serialize),
        Capability::Display => syn::parse_quote!(Self: ::core::fmt::Display),
        Capability::Error => syn::parse_quote!(Self: ::std::error::Error),
        Capability::WriteTo => syn::parse_quote!(Self: ::render::WriteTo),
        Capability::Binary => syn::parse_quote!(Self: ::render::MarshalBinary),
    }
}

/// Accessor returning the value itself for a capability.
fn generate_accessor(capability: Capability) -> TokenStream {
    let (method, target) = match capability {
        Capability::Serialize => (
            quote!(as_serialize),
            quote!(dyn ::render::erased_serde::Serialize),
        ),
        Capability::Display => (quote!(as_display), quote!(dyn ::core::fmt::Display)),
        Capability::Error => (quote!(as_error), quote!(dyn ::std::error::Error)),
        Capability::WriteTo => (quote!(as_write_to), quote!(dyn ::render::WriteTo)),
        Capability::Binary => (quote!(as_binary), quote!(dyn ::render::MarshalBinary)),
    };

    quote! {
        fn #method(&self) -> ::core::option::Option<&#target> {
            ::core::option::Option::Some(self)
        }
    }
}
