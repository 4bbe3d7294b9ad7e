use serde::{Deserialize, Serialize};

/// Upper bounds applied to length prefixes read from the network, checked before anything is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamLimits {
    /// maximum byte length of a single string (1 MiB by default)
    pub max_string_length: usize,
    /// maximum element count of a length-prefixed array (4096 by default)
    pub max_array_length: usize,
}

impl Default for StreamLimits {
    fn default() -> Self {
        Self {
            max_string_length: 1024 * 1024,
            max_array_length: 4096,
        }
    }
}
