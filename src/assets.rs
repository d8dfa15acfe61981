//! Loading of the shared markup fragments (`header.html`, `navigation.html`).
//!
//! Filters never open files themselves: they ask a [`ResourceLoader`] for
//! bytes by name. The binaries use a [`DirectoryLoader`] pointing next to
//! the executable; tests hand in a [`MemoryLoader`].

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::dom::Fragment;
use crate::error::{Error, Result};

/// Fragment injected into every page's `<head>`.
pub const HEADER_ASSET: &str = "header.html";

/// Fragment carrying the site navigation.
pub const NAVIGATION_ASSET: &str = "navigation.html";

/// Source of named asset bytes.
pub trait ResourceLoader {
    /// Read the full contents of the named asset.
    fn load(&self, name: &str) -> Result<Vec<u8>>;
}

impl<L: ResourceLoader + ?Sized> ResourceLoader for &L {
    fn load(&self, name: &str) -> Result<Vec<u8>> {
        (**self).load(name)
    }
}

/// Reads assets from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    root: PathBuf,
}

impl DirectoryLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Loader rooted at the directory holding the running executable.
    pub fn beside_executable() -> Result<Self> {
        let exe = std::env::current_exe()?;
        let dir = exe.parent().ok_or_else(|| {
            Error::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("executable {} has no parent directory", exe.display()),
            ))
        })?;
        Ok(Self::new(dir))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceLoader for DirectoryLoader {
    fn load(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.root.join(name);
        tracing::debug!(path = %path.display(), "reading asset");
        std::fs::read(&path).map_err(|source| Error::Asset {
            name: path.display().to_string(),
            source,
        })
    }
}

/// In-memory assets, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    assets: HashMap<String, Vec<u8>>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an asset.
    pub fn with(mut self, name: &str, contents: impl Into<Vec<u8>>) -> Self {
        self.assets.insert(name.to_string(), contents.into());
        self
    }
}

impl ResourceLoader for MemoryLoader {
    fn load(&self, name: &str) -> Result<Vec<u8>> {
        self.assets.get(name).cloned().ok_or_else(|| Error::Asset {
            name: name.to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such in-memory asset"),
        })
    }
}

/// Read a named asset and parse it into a detached fragment.
pub fn load_fragment(loader: &impl ResourceLoader, name: &str) -> Result<Fragment> {
    let bytes = loader.load(name)?;
    tracing::debug!(name, bytes = bytes.len(), "loaded fragment");
    Ok(Fragment::from_bytes(&bytes))
}
