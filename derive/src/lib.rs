#![allow(clippy::missing_panics_doc)]

use darling::FromDeriveInput;
use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

mod attrs;
mod debug;
mod packet;

use attrs::PacketAttributes;

/// Implements `PacketMetadata` and `SubClient` for the given struct.
/// The packet ID is required and passed with `#[packet]` as any constant `u32` expression, the rest of the attributes are optional:
/// ```rust,ignore
/// #[derive(Packet)]
/// #[packet(id = protocol_info::TEXT_PACKET, before_login = false, unread_bytes = false)]
/// pub struct MyPacket {
///     pub sub_client: SubClientIds,
///     /* fields */
/// }
/// ```
///
/// `name` overrides the diagnostic name, which is the struct name by default.
/// The struct must have a `sub_client: SubClientIds` field, it holds the routing IDs every packet carries.
#[proc_macro_derive(Packet, attributes(packet))]
pub fn derive_packet(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let opts = match PacketAttributes::from_derive_input(&input) {
        Ok(x) => x,
        Err(_) => {
            return quote! {
                compile_error!("invalid or missing signature for #[packet] attribute, please see documentation for `Packet` proc macro");
            }
            .into();
        }
    };

    packet::for_struct(&input, &opts).into()
}

/// Implements `PacketDebug` for the given struct, producing a snapshot of every field in declaration order.
/// All of the members of the struct must implement `DebugValue`.
#[proc_macro_derive(PacketDebug)]
pub fn derive_packet_debug(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    debug::for_struct(&input).into()
}
