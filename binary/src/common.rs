/* Encodable/Decodable implementations for common types */

use crate::*;

macro_rules! impl_primitive {
    ($typ:ty,$read:ident,$write:ident) => {
        impl crate::Encodable for $typ {
            #[inline(always)]
            fn encode(&self, stream: &mut crate::NetworkBinaryStream) {
                stream.$write(*self);
            }
        }

        impl crate::Decodable for $typ {
            #[inline(always)]
            fn decode(stream: &mut crate::NetworkBinaryStream) -> crate::DecodeResult<Self> {
                stream.$read()
            }
        }
    };
}

impl_primitive!(bool, get_bool, put_bool);
impl_primitive!(u8, get_byte, put_byte);

encode_impl!(String, stream, self, stream.put_string(self));
decode_impl!(String, stream, stream.get_string());

encode_impl!(str, stream, self, stream.put_string(self));

/* Vec<T> */

impl<T> Encodable for Vec<T>
where
    T: Encodable,
{
    #[inline]
    fn encode(&self, stream: &mut NetworkBinaryStream) {
        stream.put_value_vec(self);
    }
}

impl<T> Decodable for Vec<T>
where
    T: Decodable,
{
    #[inline]
    fn decode(stream: &mut NetworkBinaryStream) -> DecodeResult<Self>
    where
        Self: Sized,
    {
        stream.get_value_vec()
    }
}
