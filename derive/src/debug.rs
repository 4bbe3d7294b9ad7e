use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

pub(crate) fn for_struct(input: &DeriveInput) -> TokenStream {
    let Data::Struct(data) = &input.data else {
        return quote! {
            compile_error!("PacketDebug cannot be derived for enums or unions");
        };
    };

    let Fields::Named(fields) = &data.fields else {
        return quote! {
            compile_error!("PacketDebug can only be derived for structs with named fields");
        };
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let push_fields: Vec<_> = fields
        .named
        .iter()
        .filter_map(|field| field.ident.as_ref())
        .map(|field| {
            quote! {
                info.push(stringify!(#field), ::bedrock_protocol::DebugValue::debug_value(&self.#field));
            }
        })
        .collect();

    quote! {
        impl #impl_generics ::bedrock_protocol::PacketDebug for #ident #ty_generics #where_clause {
            fn debug_info(&self) -> ::bedrock_protocol::DebugInfo {
                let mut info = ::bedrock_protocol::DebugInfo::new(stringify!(#ident));
                #(#push_fields)*
                info
            }
        }
    }
}
