use thiserror::Error;

/// Failure to locate an atom named by an explicit bond record.
///
/// Missing chains, residues or atoms are usually not errors (the model is
/// simply left out of the result); these variants cover the cases where the
/// record itself cannot be honoured.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("Invalid residue number '{value}' in chain {chain_id}")]
    InvalidResidueNumber { chain_id: String, value: String },

    #[error("Residue {residue} not found in model {model} while looking up alt loc '{alt_loc}'")]
    GroupNotFound {
        residue: String,
        model: usize,
        alt_loc: char,
    },

    #[error("Could not find alt loc '{alt_loc}' in residue {residue} of model {model}")]
    AltLocNotFound {
        residue: String,
        model: usize,
        alt_loc: char,
    },
}
