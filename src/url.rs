//! URL forms that all denote "the page being rendered".
//!
//! A page built from `blog/index.html` is linked as `/blog/index.html`,
//! `/blog/` or `/blog` depending on who wrote the link. The navigation
//! filter treats all of them as the current page.
//!
//! All transforms are literal string edits. Nothing touches the filesystem
//! and `..`, `.`, repeated slashes and case are left exactly as given.

const INDEX_SUFFIX: &str = "/index.html";

/// The URL strings considered equivalent to the current page.
///
/// Holds either no entries (no source path configured) or exactly four, one
/// per transform, duplicates included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquivalenceSet {
    urls: Vec<String>,
}

impl EquivalenceSet {
    /// Build the set for a configured source path.
    ///
    /// `None` and the empty string both yield the empty set, which matches
    /// nothing.
    pub fn resolve(source_path: Option<&str>) -> Self {
        let Some(path) = source_path.filter(|p| !p.is_empty()) else {
            return Self::default();
        };

        let rooted = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        let without_slash = rooted.strip_suffix('/').unwrap_or(&rooted).to_string();
        let (directory, bare) = match rooted.strip_suffix(INDEX_SUFFIX) {
            Some(dir) => (format!("{dir}/"), dir.to_string()),
            None => (rooted.clone(), rooted.clone()),
        };

        Self {
            urls: vec![rooted, without_slash, directory, bare],
        }
    }

    /// Exact string membership.
    pub fn contains(&self, href: &str) -> bool {
        self.urls.iter().any(|url| url == href)
    }

    /// Number of entries, duplicates included (0 or 4).
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// All entries in transform order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    /// Unique entries in first-seen order.
    pub fn distinct(&self) -> Vec<&str> {
        let mut seen = Vec::with_capacity(self.urls.len());
        for url in self.iter() {
            if !seen.contains(&url) {
                seen.push(url);
            }
        }
        seen
    }
}
