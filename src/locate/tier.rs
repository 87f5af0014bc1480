//! Resolver strategies tried by the [`Locator`](super::Locator).
//!
//! Each tier answers "found / not found" for a name. Misses are not errors;
//! only the locator decides when every tier has missed.

use include_dir::Dir;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Which tier satisfied a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Filesystem,
    Bundled,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Filesystem => f.write_str("filesystem"),
            Provenance::Bundled => f.write_str("bundled"),
        }
    }
}

pub trait Resolver: Send + Sync {
    fn provenance(&self) -> Provenance;

    /// Return the content for `name`, or `None` if this tier does not have it.
    fn resolve(&self, name: &str) -> Option<Cow<'static, [u8]>>;
}

/// Tier 1: a path relative to `base_dir`.
#[derive(Debug, Clone)]
pub struct FilesystemTier {
    base_dir: PathBuf,
}

impl FilesystemTier {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl Resolver for FilesystemTier {
    fn provenance(&self) -> Provenance {
        Provenance::Filesystem
    }

    fn resolve(&self, name: &str) -> Option<Cow<'static, [u8]>> {
        let path = self.base_dir.join(name);
        if !path.is_file() {
            tracing::trace!(path = %path.display(), "not a file");
            return None;
        }
        match fs::read(&path) {
            Ok(bytes) => Some(Cow::Owned(bytes)),
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "unreadable panel file");
                None
            }
        }
    }
}

/// Tier 2: the name as given, inside the compiled-in resource tree.
#[derive(Debug, Clone, Copy)]
pub struct BundledTier {
    dir: &'static Dir<'static>,
}

impl BundledTier {
    pub fn new(dir: &'static Dir<'static>) -> Self {
        Self { dir }
    }
}

impl Resolver for BundledTier {
    fn provenance(&self) -> Provenance {
        Provenance::Bundled
    }

    fn resolve(&self, name: &str) -> Option<Cow<'static, [u8]>> {
        self.dir
            .get_file(name)
            .map(|file| Cow::Borrowed(file.contents()))
    }
}

/// Tier 3: the bundled lookup again with the conventional prefix prepended.
/// Names that already carry the prefix are skipped, tier 2 saw them as is.
#[derive(Debug, Clone, Copy)]
pub struct PrefixedBundledTier {
    inner: BundledTier,
    prefix: &'static str,
}

impl PrefixedBundledTier {
    pub fn new(dir: &'static Dir<'static>, prefix: &'static str) -> Self {
        Self {
            inner: BundledTier::new(dir),
            prefix,
        }
    }
}

impl Resolver for PrefixedBundledTier {
    fn provenance(&self) -> Provenance {
        Provenance::Bundled
    }

    fn resolve(&self, name: &str) -> Option<Cow<'static, [u8]>> {
        if name.starts_with(self.prefix) {
            return None;
        }
        self.inner.resolve(&format!("{}{}", self.prefix, name))
    }
}
