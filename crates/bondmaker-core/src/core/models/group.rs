use super::ids::{AtomId, ChainId, GroupId};
use crate::core::utils::identifiers::{is_amino_acid, is_nucleotide};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Polymer classification of a group.
///
/// Backbone inference only links neighbours of the same polymer type, so this
/// is decided once when the group is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GroupType {
    AminoAcid,
    Nucleotide,
    #[default]
    Hetero,
}

impl GroupType {
    /// Classifies a residue by its three-letter (or nucleotide) code.
    pub fn from_residue_name(name: &str) -> Self {
        if is_amino_acid(name) {
            GroupType::AminoAcid
        } else if is_nucleotide(name) {
            GroupType::Nucleotide
        } else {
            GroupType::Hetero
        }
    }
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                GroupType::AminoAcid => "amino",
                GroupType::Nucleotide => "nucleotide",
                GroupType::Hetero => "hetatm",
            }
        )
    }
}

/// The author-assigned identity of a residue: chain, sequence number and
/// insertion code.
///
/// A blank insertion code is stored as `None` so that `' '` and an absent code
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResidueNumber {
    pub chain_id: String,
    pub seq_num: i32,
    pub ins_code: Option<char>,
}

impl ResidueNumber {
    pub fn new(chain_id: &str, seq_num: i32, ins_code: Option<char>) -> Self {
        Self {
            chain_id: chain_id.to_string(),
            seq_num,
            ins_code: ins_code.filter(|c| *c != ' '),
        }
    }
}

impl fmt::Display for ResidueNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chain_id, self.seq_num)?;
        if let Some(code) = self.ins_code {
            write!(f, "{code}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid residue number '{0}'")]
pub struct ParseResidueNumberError(pub String);

impl FromStr for ResidueNumber {
    type Err = ParseResidueNumberError;

    /// Parses the `chain:number[insertion]` form produced by `Display`,
    /// e.g. `"A:52"` or `"B:100A"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseResidueNumberError(s.to_string());
        let (chain_id, rest) = s.split_once(':').ok_or_else(err)?;
        let rest = rest.trim();
        let (digits, ins_code) = match rest.chars().last() {
            Some(c) if c.is_ascii_alphabetic() => (&rest[..rest.len() - c.len_utf8()], Some(c)),
            _ => (rest, None),
        };
        let seq_num = digits.parse::<i32>().map_err(|_| err())?;
        Ok(ResidueNumber::new(chain_id.trim(), seq_num, ins_code))
    }
}

/// A residue, nucleotide or hetero group.
///
/// Groups without a residue number are sequence placeholders for unobserved
/// residues; they never hold atoms. Alternate-location siblings are separate
/// groups that share the primary's residue number and are listed in
/// `alt_locs` of the primary only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub group_type: GroupType,
    pub residue_number: Option<ResidueNumber>,
    pub chain_id: ChainId,
    /// The alternate location this group models, if it is one.
    pub alt_loc: Option<char>,
    pub(crate) atoms: Vec<AtomId>,
    atom_name_map: HashMap<String, AtomId>,
    pub(crate) alt_locs: Vec<GroupId>,
}

impl Group {
    pub(crate) fn new(
        name: &str,
        group_type: GroupType,
        residue_number: Option<ResidueNumber>,
        chain_id: ChainId,
    ) -> Self {
        Self {
            name: name.to_string(),
            group_type,
            residue_number,
            chain_id,
            alt_loc: None,
            atoms: Vec::new(),
            atom_name_map: HashMap::new(),
            alt_locs: Vec::new(),
        }
    }

    /// Registers an atom under its name. The first atom with a given name wins
    /// the name lookup; later ones remain reachable through `atoms()`.
    pub(crate) fn add_atom(&mut self, atom_name: &str, atom_id: AtomId) {
        self.atoms.push(atom_id);
        self.atom_name_map
            .entry(atom_name.to_string())
            .or_insert(atom_id);
    }

    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    pub fn alt_locs(&self) -> &[GroupId] {
        &self.alt_locs
    }

    pub fn has_residue_number(&self) -> bool {
        self.residue_number.is_some()
    }

    pub fn get_atom_id_by_name(&self, name: &str) -> Option<AtomId> {
        self.atom_name_map.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;

    fn dummy_atom_id(n: u64) -> AtomId {
        AtomId::from(KeyData::from_ffi(n))
    }

    fn dummy_chain_id(n: u64) -> ChainId {
        ChainId::from(KeyData::from_ffi(n))
    }

    #[test]
    fn new_group_initializes_fields_correctly() {
        let chain_id = dummy_chain_id(1);
        let number = ResidueNumber::new("A", 10, None);
        let group = Group::new("GLY", GroupType::AminoAcid, Some(number.clone()), chain_id);
        assert_eq!(group.name, "GLY");
        assert_eq!(group.residue_number, Some(number));
        assert_eq!(group.chain_id, chain_id);
        assert_eq!(group.alt_loc, None);
        assert!(group.atoms().is_empty());
        assert!(group.alt_locs().is_empty());
        assert!(group.get_atom_id_by_name("CA").is_none());
    }

    #[test]
    fn add_atom_adds_atom_and_maps_name() {
        let mut group = Group::new("ALA", GroupType::AminoAcid, None, dummy_chain_id(2));
        let atom_id = dummy_atom_id(42);
        group.add_atom("CA", atom_id);
        assert_eq!(group.atoms(), &[atom_id]);
        assert_eq!(group.get_atom_id_by_name("CA"), Some(atom_id));
    }

    #[test]
    fn first_atom_with_a_name_wins_lookup() {
        let mut group = Group::new("SER", GroupType::AminoAcid, None, dummy_chain_id(3));
        group.add_atom("OG", dummy_atom_id(1));
        group.add_atom("OG", dummy_atom_id(2));
        assert_eq!(group.atoms().len(), 2);
        assert_eq!(group.get_atom_id_by_name("OG"), Some(dummy_atom_id(1)));
    }

    #[test]
    fn group_type_from_residue_name_classifies_polymers() {
        assert_eq!(GroupType::from_residue_name("ALA"), GroupType::AminoAcid);
        assert_eq!(GroupType::from_residue_name("DA"), GroupType::Nucleotide);
        assert_eq!(GroupType::from_residue_name("U"), GroupType::Nucleotide);
        assert_eq!(GroupType::from_residue_name("HEM"), GroupType::Hetero);
        assert_eq!(GroupType::from_residue_name("HOH"), GroupType::Hetero);
    }

    #[test]
    fn residue_number_treats_blank_insertion_code_as_none() {
        assert_eq!(
            ResidueNumber::new("A", 5, Some(' ')),
            ResidueNumber::new("A", 5, None)
        );
        assert_ne!(
            ResidueNumber::new("A", 5, Some('A')),
            ResidueNumber::new("A", 5, None)
        );
    }

    #[test]
    fn residue_number_display_and_parse_agree() {
        let plain = ResidueNumber::new("A", 52, None);
        let inserted = ResidueNumber::new("B", -3, Some('C'));
        assert_eq!(plain.to_string(), "A:52");
        assert_eq!(inserted.to_string(), "B:-3C");
        assert_eq!("A:52".parse::<ResidueNumber>().unwrap(), plain);
        assert_eq!("B:-3C".parse::<ResidueNumber>().unwrap(), inserted);
    }

    #[test]
    fn residue_number_parse_rejects_malformed_input() {
        assert!("52".parse::<ResidueNumber>().is_err());
        assert!("A:".parse::<ResidueNumber>().is_err());
        assert!("A:x1".parse::<ResidueNumber>().is_err());
    }
}
