use crate::core::models::topology::BondOrder;
use serde::Deserialize;

/// One intra-residue bond of a dictionary entry.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChemCompBond {
    pub atom1: String,
    pub atom2: String,
    #[serde(default)]
    pub order: BondOrder,
}

impl ChemCompBond {
    pub fn new(atom1: &str, atom2: &str, order: BondOrder) -> Self {
        Self {
            atom1: atom1.to_string(),
            atom2: atom2.to_string(),
            order,
        }
    }
}

/// A chemical-component dictionary entry for one residue name.
///
/// Bonds are kept in dictionary order, which fixes the order in which
/// intra-residue bonds are appended to atoms.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct ChemComp {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub atoms: Vec<String>,
    #[serde(default)]
    pub bonds: Vec<ChemCompBond>,
}

impl ChemComp {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    pub fn with_atoms(mut self, atoms: &[&str]) -> Self {
        self.atoms = atoms.iter().map(|name| name.to_string()).collect();
        self
    }

    pub fn with_bond(mut self, atom1: &str, atom2: &str, order: BondOrder) -> Self {
        self.bonds.push(ChemCompBond::new(atom1, atom2, order));
        self
    }

    pub fn has_atom(&self, name: &str) -> bool {
        self.atoms.iter().any(|atom| atom == name)
    }
}
