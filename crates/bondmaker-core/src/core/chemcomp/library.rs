use super::component::ChemComp;
use super::provider::{ChemCompError, ChemCompProvider};
use std::collections::HashMap;
use std::path::Path;

/// In-memory chemical-component dictionary keyed by residue name.
#[derive(Debug, Clone, Default)]
pub struct ChemCompLibrary {
    components: HashMap<String, ChemComp>,
}

impl ChemCompLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a dictionary from a TOML file whose top-level tables are
    /// residue names.
    pub fn load(path: &Path) -> Result<Self, ChemCompError> {
        let content = std::fs::read_to_string(path).map_err(|e| ChemCompError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.to_string_lossy())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ChemCompError> {
        Self::parse(content, "<string>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self, ChemCompError> {
        let raw: HashMap<String, ChemComp> =
            toml::from_str(content).map_err(|e| ChemCompError::Toml {
                path: origin.to_string(),
                source: e,
            })?;
        let components = raw
            .into_iter()
            .map(|(name, mut comp)| {
                if comp.id.is_empty() {
                    comp.id = name.clone();
                }
                (name, comp)
            })
            .collect();
        Ok(Self { components })
    }

    /// Adds or replaces an entry under its `id`.
    pub fn insert(&mut self, comp: ChemComp) {
        self.components.insert(comp.id.clone(), comp);
    }

    pub fn get(&self, residue_name: &str) -> Option<&ChemComp> {
        self.components.get(residue_name)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl ChemCompProvider for ChemCompLibrary {
    fn get_chem_comp(&self, residue_name: &str) -> Result<Option<ChemComp>, ChemCompError> {
        Ok(self.get(residue_name).cloned())
    }
}
