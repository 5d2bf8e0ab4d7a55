//! In-memory dependency manifest and its section merge rules.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

use super::ConfigurationPatch;

const INDENT: &[u8] = b"    ";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("top-level value must be an object")]
    NotAnObject,

    #[error("section '{0}' is not a mapping")]
    SectionNotMapping(String),
}

/// Ordered JSON document whose top-level keys are manifest sections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ManifestDocument {
    root: Map<String, Value>,
}

impl ManifestDocument {
    pub fn parse(text: &str) -> Result<Self, ManifestError> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(ManifestError::NotAnObject),
        }
    }

    pub fn section(&self, name: &str) -> Option<&Value> {
        self.root.get(name)
    }

    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    /// Shallow-merge `patch` into the named section, patch winning on conflict.
    ///
    /// A missing (or null) section starts out empty. The section's immediate
    /// keys are left in lexicographic order; nested mappings are replaced
    /// wholesale rather than merged. On error the document is untouched.
    pub fn merge_section(
        &mut self,
        name: &str,
        patch: ConfigurationPatch<Value>,
    ) -> Result<(), ManifestError> {
        match self.root.get(name) {
            None | Some(Value::Null) | Some(Value::Object(_)) => {}
            Some(_) => return Err(ManifestError::SectionNotMapping(name.to_string())),
        }

        let slot = self.root.entry(name.to_string()).or_insert(Value::Null);
        let mut section = match slot.take() {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        for (key, value) in patch {
            section.insert(key, value);
        }
        *slot = Value::Object(sorted(section));
        Ok(())
    }

    /// Serialize as 4-space pretty JSON with a trailing newline.
    ///
    /// Forward slashes and non-ASCII characters are written unescaped.
    pub fn render(&self) -> Result<String, ManifestError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        self.root.serialize(&mut serializer)?;
        buf.push(b'\n');
        // serde_json only emits valid UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

fn sorted(map: Map<String, Value>) -> Map<String, Value> {
    let mut entries: Vec<(String, Value)> = map.into_iter().collect();
    entries.sort_by(|left, right| left.0.cmp(&right.0));
    entries.into_iter().collect()
}
