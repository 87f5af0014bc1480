//! Load exported Kibana panel definitions and turn them into elements ready
//! for bulk indexing.
//!
//! Pipeline:
//! 1) locate the definition (filesystem, then bundled resources)
//! 2) parse + validate the panel document
//! 3) build one decoded element per saved object
//! 4) attach bulk-index addressing to every element

pub mod config;
pub mod element;
pub mod error;
pub mod index;
pub mod locate;
pub mod panel;
pub mod resolve;

pub use config::LoaderConfig;
pub use element::{Element, build_elements};
pub use error::{FormatError, PanelError};
pub use index::{IndexAction, IndexNaming, add_index_elements};
pub use locate::{Locator, Provenance};
pub use panel::{LoadedPanel, ObjectEntry, PanelDocument};
pub use resolve::{Reference, dangling_references, references, search_from_vis_json};

/// Runs the whole load-transform cycle for named definitions.
pub struct PanelLoader {
    locator: Locator,
    naming: IndexNaming,
}

impl PanelLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            locator: Locator::with_base_dir(config.base_dir),
            naming: config.naming,
        }
    }

    /// Locate and validate a definition.
    pub fn read(&self, name: &str) -> Result<LoadedPanel, PanelError> {
        let located = self.locator.locate(name)?;
        let panel = PanelDocument::parse(&located.bytes).map_err(|source| {
            PanelError::FileWrongFormat {
                name: name.to_string(),
                source,
            }
        })?;
        tracing::info!(
            requested = name,
            panel = %panel.id,
            objects = panel.objects.len(),
            provenance = %located.provenance,
            "panel loaded"
        );
        Ok(LoadedPanel {
            panel,
            provenance: located.provenance,
        })
    }

    /// Read a definition and return its enriched element set.
    pub fn load(&self, name: &str) -> Result<(LoadedPanel, Vec<Element>), PanelError> {
        let loaded = self.read(name)?;
        let mut elements = build_elements(&loaded.panel);
        add_index_elements(&mut elements, &self.naming);
        Ok((loaded, elements))
    }
}

impl Default for PanelLoader {
    fn default() -> Self {
        Self::new(LoaderConfig::default())
    }
}

/// Load `name` with the default configuration.
pub fn load_panel(name: &str) -> Result<(LoadedPanel, Vec<Element>), PanelError> {
    PanelLoader::default().load(name)
}
