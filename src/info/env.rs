//! Environment variable snapshot served on `/env`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::echo::split::split;

/// Read-only view of selected environment variables, captured at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the process environment.
    ///
    /// An empty `names` list keeps every variable; otherwise only the listed
    /// names that are set are kept.
    pub fn capture(names: &[String]) -> Self {
        let entries = std::env::vars_os().map(|(key, value)| {
            format!("{}={}", key.to_string_lossy(), value.to_string_lossy())
        });
        Self::from_entries(entries).retain_names(names)
    }

    /// Build a snapshot from `KEY=VALUE` strings.
    ///
    /// Entries without `=` all end up under the empty key.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vars = entries
            .into_iter()
            .map(|entry| {
                let (key, value) = split(entry.as_ref(), "=");
                (key.to_string(), value.to_string())
            })
            .collect();
        Self { vars }
    }

    fn retain_names(mut self, names: &[String]) -> Self {
        if !names.is_empty() {
            self.vars.retain(|key, _| names.iter().any(|name| name == key));
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
