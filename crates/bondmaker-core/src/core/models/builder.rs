use super::atom::{Atom, Element};
use super::group::{GroupType, ResidueNumber};
use super::ids::{AtomId, ChainId, GroupId};
use super::structure::Structure;
use nalgebra::Point3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("A model must be started before adding chains")]
    NoModel,
    #[error("A chain must be started before adding groups")]
    NoChain,
    #[error("A group must be started before adding atoms")]
    NoGroup,
    #[error("Atom '{0}' does not exist in the current residue")]
    UnknownAtom(String),
}

/// Incremental constructor for [`Structure`], mirroring the order in which a
/// coordinate file lists its records: model, chain, residue, atoms.
///
/// `start_alt_loc` switches the atom target to an alternate-location sibling
/// of the current residue until the next `start_group`.
#[derive(Default)]
pub struct StructureBuilder {
    structure: Structure,

    current_model: Option<usize>,
    current_chain: Option<ChainId>,
    current_group: Option<GroupId>,
    current_target: Option<GroupId>,
}

impl StructureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_model(&mut self) -> &mut Self {
        self.current_model = Some(self.structure.add_model());
        self.current_chain = None;
        self.current_group = None;
        self.current_target = None;
        self
    }

    pub fn start_chain(&mut self, id: &str) -> Result<&mut Self, BuildError> {
        let model = self.current_model.ok_or(BuildError::NoModel)?;
        let chain_id = self
            .structure
            .add_chain(model, id)
            .ok_or(BuildError::NoModel)?;
        self.current_chain = Some(chain_id);
        self.current_group = None;
        self.current_target = None;
        Ok(self)
    }

    /// Starts a polymer residue; it is part of the chain sequence and its type
    /// is derived from the residue name.
    pub fn start_group(&mut self, seq_num: i32, ins_code: Option<char>, name: &str) -> Result<&mut Self, BuildError> {
        let group_type = GroupType::from_residue_name(name);
        self.open_group(seq_num, ins_code, name, group_type, true)
    }

    /// Starts a hetero group (ligand, water, ion) outside the polymer sequence.
    pub fn start_het_group(&mut self, seq_num: i32, ins_code: Option<char>, name: &str) -> Result<&mut Self, BuildError> {
        self.open_group(seq_num, ins_code, name, GroupType::Hetero, false)
    }

    /// Appends an unobserved residue (sequence only, no coordinates).
    pub fn add_unobserved(&mut self, name: &str) -> Result<&mut Self, BuildError> {
        let chain_id = self.current_chain.ok_or(BuildError::NoChain)?;
        self.structure
            .add_unobserved_group(chain_id, name, GroupType::from_residue_name(name))
            .ok_or(BuildError::NoChain)?;
        self.current_group = None;
        self.current_target = None;
        Ok(self)
    }

    /// Directs subsequent atoms to the alternate-location sibling `alt_loc`
    /// of the current residue, creating it on first use.
    pub fn start_alt_loc(&mut self, alt_loc: char) -> Result<&mut Self, BuildError> {
        let group_id = self.current_group.ok_or(BuildError::NoGroup)?;
        let sibling = self
            .structure
            .add_alt_loc_group(group_id, alt_loc)
            .ok_or(BuildError::NoGroup)?;
        self.current_target = Some(sibling);
        Ok(self)
    }

    pub fn add_atom(
        &mut self,
        name: &str,
        element: Element,
        position: Point3<f64>,
        alt_loc: Option<char>,
    ) -> Result<&mut Self, BuildError> {
        self.push_atom(name, element, position, alt_loc)?;
        Ok(self)
    }

    /// Adds an atom and returns its id, for callers that need to refer back to it.
    pub fn push_atom(
        &mut self,
        name: &str,
        element: Element,
        position: Point3<f64>,
        alt_loc: Option<char>,
    ) -> Result<AtomId, BuildError> {
        let target = self.current_target.ok_or(BuildError::NoGroup)?;
        let mut atom = Atom::new(name, element, target, position);
        atom.alt_loc = alt_loc;
        self.structure
            .add_atom(target, atom)
            .ok_or(BuildError::NoGroup)
    }

    /// Makes an atom of the current residue's primary group visible in the
    /// current alternate-location sibling as well.
    pub fn add_shared_atom(&mut self, name: &str) -> Result<&mut Self, BuildError> {
        let primary = self.current_group.ok_or(BuildError::NoGroup)?;
        let target = self.current_target.ok_or(BuildError::NoGroup)?;
        let atom_id = self
            .structure
            .group(primary)
            .and_then(|group| group.get_atom_id_by_name(name))
            .ok_or_else(|| BuildError::UnknownAtom(name.to_string()))?;
        self.structure
            .share_atom(target, atom_id)
            .ok_or(BuildError::NoGroup)?;
        Ok(self)
    }

    pub fn current_group(&self) -> Option<GroupId> {
        self.current_group
    }

    pub fn build(self) -> Structure {
        self.structure
    }

    fn open_group(
        &mut self,
        seq_num: i32,
        ins_code: Option<char>,
        name: &str,
        group_type: GroupType,
        in_sequence: bool,
    ) -> Result<&mut Self, BuildError> {
        let chain_id = self.current_chain.ok_or(BuildError::NoChain)?;
        let chain_name = self
            .structure
            .chain(chain_id)
            .map(|chain| chain.id.clone())
            .ok_or(BuildError::NoChain)?;
        let number = ResidueNumber::new(&chain_name, seq_num, ins_code);
        let group_id = self
            .structure
            .add_group(chain_id, number, name, group_type, in_sequence)
            .ok_or(BuildError::NoChain)?;
        self.current_group = Some(group_id);
        self.current_target = Some(group_id);
        Ok(self)
    }
}
