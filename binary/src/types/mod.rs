mod remainder_bytes;

pub use remainder_bytes::RemainderBytes;
