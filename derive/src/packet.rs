use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use crate::attrs::PacketAttributes;

pub(crate) fn for_struct(input: &DeriveInput, opts: &PacketAttributes) -> TokenStream {
    let Data::Struct(data) = &input.data else {
        return quote! {
            compile_error!("Packet cannot be derived for enums or unions");
        };
    };

    let has_sub_client = match &data.fields {
        Fields::Named(fields) => fields
            .named
            .iter()
            .any(|field| field.ident.as_ref().is_some_and(|ident| ident == "sub_client")),
        _ => false,
    };

    if !has_sub_client {
        return quote! {
            compile_error!("Packet can only be derived for structs with a `sub_client: SubClientIds` field");
        };
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let id = &opts.id;
    let name = opts.name.clone().unwrap_or_else(|| ident.to_string());
    let before_login = opts.before_login.unwrap_or(false);
    let unread_bytes = opts.unread_bytes.unwrap_or(false);

    quote! {
        impl #impl_generics ::bedrock_protocol::PacketMetadata for #ident #ty_generics #where_clause {
            const NETWORK_ID: u32 = #id;
            const NAME: &'static str = #name;
            const CAN_BE_SENT_BEFORE_LOGIN: bool = #before_login;
            const MAY_HAVE_UNREAD_BYTES: bool = #unread_bytes;
        }

        impl #impl_generics ::bedrock_protocol::SubClient for #ident #ty_generics #where_clause {
            #[inline]
            fn sub_client(&self) -> &::bedrock_protocol::SubClientIds {
                &self.sub_client
            }

            #[inline]
            fn sub_client_mut(&mut self) -> &mut ::bedrock_protocol::SubClientIds {
                &mut self.sub_client
            }
        }
    }
}
