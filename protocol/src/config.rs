use std::{
    fs::{File, OpenOptions},
    path::Path,
};

use bedrock_binary::StreamLimits;
use serde::{Deserialize, Serialize};
use serde_json::{Serializer, ser::PrettyFormatter};

fn default_strict_trailing_bytes() -> bool {
    true
}

/// Settings for `decode_packet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    #[serde(default)]
    pub limits: StreamLimits,
    /// reject packets that leave bytes unread, unless the packet says that is expected.
    /// when off, the leftover bytes are only logged
    #[serde(default = "default_strict_trailing_bytes")]
    pub strict_trailing_bytes: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            limits: StreamLimits::default(),
            strict_trailing_bytes: default_strict_trailing_bytes(),
        }
    }
}

impl CodecConfig {
    pub fn from_json(data: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn load(source: &Path) -> anyhow::Result<Self> {
        Ok(serde_json::from_reader(File::open(source)?)?)
    }

    pub fn save(&self, dest: &Path) -> anyhow::Result<()> {
        let writer = OpenOptions::new().write(true).create(true).truncate(true).open(dest)?;

        let mut serializer = Serializer::with_formatter(writer, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut serializer)?;

        Ok(())
    }
}
