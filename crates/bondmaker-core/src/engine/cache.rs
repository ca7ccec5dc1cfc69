use crate::core::chemcomp::component::ChemComp;
use crate::core::chemcomp::provider::ChemCompProvider;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Per-run memo of chemical-component lookups, keyed by residue name.
///
/// Unknown residues and failed lookups are cached as `None`, so the provider
/// is asked at most once per name.
#[derive(Debug, Default, Clone)]
pub struct ChemCompCache {
    data: HashMap<String, Option<ChemComp>>,
}

impl ChemCompCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry for `residue_name`, asking `provider` on first use.
    pub fn get_or_load<P: ChemCompProvider + ?Sized>(
        &mut self,
        provider: &P,
        residue_name: &str,
    ) -> Option<&ChemComp> {
        self.data
            .entry(residue_name.to_string())
            .or_insert_with(|| match provider.get_chem_comp(residue_name) {
                Ok(Some(comp)) => {
                    debug!(
                        residue = residue_name,
                        atoms = comp.atoms.len(),
                        bonds = comp.bonds.len(),
                        "Loaded chemical component."
                    );
                    Some(comp)
                }
                Ok(None) => {
                    debug!(residue = residue_name, "No chemical component entry.");
                    None
                }
                Err(e) => {
                    warn!(residue = residue_name, error = %e, "Chemical component lookup failed.");
                    None
                }
            })
            .as_ref()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chemcomp::provider::ChemCompError;
    use std::cell::RefCell;

    struct CountingProvider {
        calls: RefCell<Vec<String>>,
    }

    impl ChemCompProvider for CountingProvider {
        fn get_chem_comp(&self, residue_name: &str) -> Result<Option<ChemComp>, ChemCompError> {
            self.calls.borrow_mut().push(residue_name.to_string());
            match residue_name {
                "GLY" => Ok(Some(ChemComp::new("GLY").with_atoms(&["N", "CA"]))),
                "BAD" => Err(ChemCompError::Lookup {
                    name: residue_name.to_string(),
                    reason: "service unavailable".to_string(),
                }),
                _ => Ok(None),
            }
        }
    }

    fn provider() -> CountingProvider {
        CountingProvider {
            calls: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn known_components_are_loaded_once() {
        let provider = provider();
        let mut cache = ChemCompCache::new();

        assert_eq!(cache.get_or_load(&provider, "GLY").unwrap().atoms.len(), 2);
        assert!(cache.get_or_load(&provider, "GLY").is_some());
        assert_eq!(*provider.calls.borrow(), vec!["GLY"]);
    }

    #[test]
    fn unknown_and_failed_lookups_are_cached_as_missing() {
        let provider = provider();
        let mut cache = ChemCompCache::new();

        assert!(cache.get_or_load(&provider, "XYZ").is_none());
        assert!(cache.get_or_load(&provider, "BAD").is_none());
        assert!(cache.get_or_load(&provider, "XYZ").is_none());
        assert!(cache.get_or_load(&provider, "BAD").is_none());

        assert_eq!(cache.len(), 2);
        assert_eq!(*provider.calls.borrow(), vec!["XYZ", "BAD"]);
    }
}
