use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Character record as returned by the provider.
///
/// Only `id`, `name` and `image` are interpreted. Every other field the
/// provider sends (species, status, origin, ...) lands in `extra` and is
/// passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Character {
    pub fn new(id: u64, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            extra: Map::new(),
        }
    }

    /// Provider-specific string field, e.g. `species`.
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}
