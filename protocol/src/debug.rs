//! Diagnostic snapshots of packets, for logging only. Nothing here is ever written to the wire.

use std::fmt::{self, Display, Write};

use bedrock_binary::RemainderBytes;

use crate::packet::SubClientIds;

/// Field name to printable value, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugInfo {
    packet: &'static str,
    fields: Vec<(&'static str, String)>,
}

impl DebugInfo {
    pub fn new(packet: &'static str) -> Self {
        Self {
            packet,
            fields: Vec::new(),
        }
    }

    pub fn push(&mut self, field: &'static str, value: String) {
        self.fields.push((field, value));
    }

    pub fn packet(&self) -> &'static str {
        self.packet
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(name, value)| (*name, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Display for DebugInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.packet)?;
        f.write_str(" {")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i != 0 {
                f.write_char(',')?;
            }
            write!(f, " {name}: {value}")?;
        }
        f.write_str(" }")
    }
}

pub trait PacketDebug {
    fn debug_info(&self) -> DebugInfo;
}

/// How a single field is rendered in a `DebugInfo`.
pub trait DebugValue {
    fn debug_value(&self) -> String;
}

/// Replace every byte outside of printable ASCII with a `\xNN` escape.
pub fn printable(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if (0x20..=0x7e).contains(&byte) {
            out.push(char::from(byte));
        } else {
            // writing into a String can't fail
            let _ = write!(out, "\\x{byte:02x}");
        }
    }

    out
}

macro_rules! debug_value_display {
    ($($typ:ty),* $(,)?) => {
        $(
            impl DebugValue for $typ {
                #[inline]
                fn debug_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

debug_value_display!(bool, u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl DebugValue for String {
    fn debug_value(&self) -> String {
        printable(self)
    }
}

impl DebugValue for str {
    fn debug_value(&self) -> String {
        printable(self)
    }
}

impl DebugValue for RemainderBytes {
    fn debug_value(&self) -> String {
        hex::encode(&**self)
    }
}

impl<T: DebugValue> DebugValue for Vec<T> {
    fn debug_value(&self) -> String {
        let items: Vec<_> = self.iter().map(DebugValue::debug_value).collect();
        format!("[{}]", items.join(", "))
    }
}

impl<T: DebugValue> DebugValue for Option<T> {
    fn debug_value(&self) -> String {
        self.as_ref().map_or_else(|| "null".to_owned(), DebugValue::debug_value)
    }
}

impl DebugValue for SubClientIds {
    fn debug_value(&self) -> String {
        format!("sender {}, recipient {}", self.sender_sub_id, self.recipient_sub_id)
    }
}
