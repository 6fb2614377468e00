//! Plugin metadata for the version command

use std::fmt;

use serde::Serialize;

/// Name, version and authorship of the running build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginInfo {
    pub name: String,
    pub version: String,
    pub authors: Vec<String>,
    pub homepage: String,
}

impl PluginInfo {
    /// Build from package metadata
    ///
    /// `authors` is the colon separated list Cargo exposes as `CARGO_PKG_AUTHORS`.
    pub fn new(name: &str, version: &str, authors: &str, homepage: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            authors: authors
                .split(':')
                .map(str::trim)
                .filter(|author| !author.is_empty())
                .map(str::to_string)
                .collect(),
            homepage: homepage.to_string(),
        }
    }

    pub fn lead_author(&self) -> &str {
        self.authors.first().map_or("unknown", String::as_str)
    }

    /// The version response, one entry per line
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "Running {} version {} created by {}",
            self.name,
            self.version,
            self.lead_author()
        )];
        if !self.homepage.is_empty() {
            lines.push(self.homepage.clone());
        }
        lines
    }
}

impl fmt::Display for PluginInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
