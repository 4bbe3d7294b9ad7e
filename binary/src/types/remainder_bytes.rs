/* RemainderBytes - wrapper around Box<[u8]> that decodes with `stream.get_remaining_bytes()` and encodes with `stream.put_bytes()` */

use std::ops::Deref;

use crate::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[repr(transparent)]
pub struct RemainderBytes {
    data: Box<[u8]>,
}

encode_impl!(RemainderBytes, stream, self, {
    stream.put_bytes(&self.data);
});

decode_impl!(RemainderBytes, stream, {
    Ok(Self {
        data: stream.get_remaining_bytes()?.into(),
    })
});

impl Deref for RemainderBytes {
    type Target = [u8];
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl From<Vec<u8>> for RemainderBytes {
    #[inline]
    fn from(value: Vec<u8>) -> Self {
        Self {
            data: value.into_boxed_slice(),
        }
    }
}

impl From<Box<[u8]>> for RemainderBytes {
    #[inline]
    fn from(value: Box<[u8]>) -> Self {
        Self { data: value }
    }
}
