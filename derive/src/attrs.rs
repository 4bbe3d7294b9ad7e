use darling::FromDeriveInput;
use syn::Expr;

#[derive(FromDeriveInput)]
#[darling(attributes(packet))]
pub(crate) struct PacketAttributes {
    pub id: Expr,
    pub name: Option<String>,
    pub before_login: Option<bool>,
    pub unread_bytes: Option<bool>,
}
