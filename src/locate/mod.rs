//! Resource location: filesystem first, then the bundled panel resources.
//!
//! Callers may pass a filesystem path, a bare bundled name (`git.json`) or a
//! bundled name that already carries the resource prefix
//! (`panels/json/git.json`). All three resolve through the same ordered tier
//! list without the caller knowing which one will answer.

pub mod tier;

pub use tier::{BundledTier, FilesystemTier, PrefixedBundledTier, Provenance, Resolver};

use crate::error::PanelError;
use include_dir::{Dir, include_dir};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Sub-path under which bundled panel definitions live.
pub const RESOURCE_PREFIX: &str = "panels/json/";

/// Panel definitions compiled into the crate.
static RESOURCES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/resources");

/// Raw content plus the tier it came from.
#[derive(Debug, Clone)]
pub struct Located {
    pub bytes: Cow<'static, [u8]>,
    pub provenance: Provenance,
}

pub struct Locator {
    tiers: Vec<Box<dyn Resolver>>,
}

impl Locator {
    /// Standard tier order, with filesystem paths relative to `base_dir`.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self::from_tiers(vec![
            Box::new(FilesystemTier::new(base_dir)),
            Box::new(BundledTier::new(&RESOURCES)),
            Box::new(PrefixedBundledTier::new(&RESOURCES, RESOURCE_PREFIX)),
        ])
    }

    pub fn from_tiers(tiers: Vec<Box<dyn Resolver>>) -> Self {
        Self { tiers }
    }

    /// Try every tier in order and return the first hit.
    pub fn locate(&self, name: &str) -> Result<Located, PanelError> {
        for tier in &self.tiers {
            if let Some(bytes) = tier.resolve(name) {
                tracing::debug!(requested = name, provenance = %tier.provenance(), "panel located");
                return Ok(Located {
                    bytes,
                    provenance: tier.provenance(),
                });
            }
            tracing::debug!(requested = name, provenance = %tier.provenance(), "tier missed");
        }
        Err(PanelError::FileNotFound {
            name: name.to_string(),
        })
    }

    /// File names of the bundled panel definitions, sorted.
    pub fn bundled_names() -> Vec<String> {
        let Some(dir) = RESOURCES.get_dir(RESOURCE_PREFIX.trim_end_matches('/')) else {
            return Vec::new();
        };
        let mut names: Vec<String> = dir
            .files()
            .filter_map(|f| f.path().file_name().and_then(|n| n.to_str()))
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }
}

impl Default for Locator {
    fn default() -> Self {
        Self::with_base_dir(Path::new("."))
    }
}
