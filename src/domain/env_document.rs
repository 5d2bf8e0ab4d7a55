//! Line-oriented `KEY=VALUE` environment file.

use regex::{NoExpand, Regex};

use super::ConfigurationPatch;

/// Raw environment file text, edited by whole-line key replacement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnvDocument {
    text: String,
}

impl EnvDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Rewrite every `key=<value>` line to `key=value`.
    ///
    /// Only lines whose current value starts with a lowercase ASCII letter are
    /// replaced. Empty, numeric, quoted or capitalised values are left alone,
    /// as are absent keys; nothing is ever appended.
    ///
    /// Returns the number of rewritten lines.
    pub fn set_key(&mut self, key: &str, value: &str) -> usize {
        let pattern = replaceable_line(key);
        let count = pattern.find_iter(&self.text).count();
        if count > 0 {
            let replacement = format!("{key}={value}");
            self.text = pattern.replace_all(&self.text, NoExpand(&replacement)).into_owned();
        }
        count
    }

    /// Apply `set_key` for each entry, in patch order, against the evolving text.
    pub fn update_all(&mut self, patch: &ConfigurationPatch) -> usize {
        patch.iter().map(|(key, value)| self.set_key(key, value)).sum()
    }
}

fn replaceable_line(key: &str) -> Regex {
    // The key is escaped, so the pattern is always valid.
    Regex::new(&format!(r"(?m)^{}=[a-z][^\r\n]*", regex::escape(key)))
        .unwrap_or_else(|_| unreachable!("escaped key produced invalid pattern"))
}
