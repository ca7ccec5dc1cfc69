use super::component::ChemComp;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChemCompError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Lookup of chemical component '{name}' failed: {reason}")]
    Lookup { name: String, reason: String },
}

/// Source of chemical-component dictionary entries.
///
/// Implementations must return the same answer for the same residue name
/// within one bond-making run. `Ok(None)` means the residue is unknown to the
/// dictionary; `Err` is reserved for failures of the lookup itself.
pub trait ChemCompProvider {
    fn get_chem_comp(&self, residue_name: &str) -> Result<Option<ChemComp>, ChemCompError>;
}

impl<P: ChemCompProvider + ?Sized> ChemCompProvider for &P {
    fn get_chem_comp(&self, residue_name: &str) -> Result<Option<ChemComp>, ChemCompError> {
        (**self).get_chem_comp(residue_name)
    }
}
