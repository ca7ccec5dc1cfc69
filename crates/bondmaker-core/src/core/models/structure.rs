use super::atom::{Atom, Element};
use super::chain::Chain;
use super::group::{Group, GroupType, ResidueNumber};
use super::ids::{AtomId, BondId, ChainId, GroupId};
use super::topology::{Bond, BondOrder};
use crate::core::utils::identifiers::deuterated_name;
use slotmap::SlotMap;
use std::collections::HashMap;

/// One model (coordinate set) of a structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    chains: Vec<ChainId>,
    chain_id_map: HashMap<String, ChainId>,
}

impl Model {
    pub fn chains(&self) -> &[ChainId] {
        &self.chains
    }
}

/// A parsed macromolecular structure: models, chains, groups, atoms and the
/// bond graph between atoms.
///
/// All entities live in arenas and refer to each other by id. Bonds are stored
/// once and registered by id on both endpoint atoms, so the graph carries no
/// reference cycles.
#[derive(Debug, Clone, Default)]
pub struct Structure {
    /// Primary storage for atoms.
    atoms: SlotMap<AtomId, Atom>,
    /// Primary storage for groups, including alternate-location siblings.
    groups: SlotMap<GroupId, Group>,
    /// Primary storage for chains of every model.
    chains: SlotMap<ChainId, Chain>,
    /// Every bond in the structure.
    bonds: SlotMap<BondId, Bond>,
    /// Models in file order.
    models: Vec<Model>,
    /// Bonds flagged as disulfide bridges.
    ss_bonds: Vec<BondId>,
}

impl Structure {
    /// Creates a new, empty structure with no models.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    pub fn atom_mut(&mut self, id: AtomId) -> Option<&mut Atom> {
        self.atoms.get_mut(id)
    }

    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter()
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id)
    }

    pub fn chain(&self, id: ChainId) -> Option<&Chain> {
        self.chains.get(id)
    }

    pub fn bond(&self, id: BondId) -> Option<&Bond> {
        self.bonds.get(id)
    }

    pub fn bonds_iter(&self) -> impl Iterator<Item = (BondId, &Bond)> {
        self.bonds.iter()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn model(&self, index: usize) -> Option<&Model> {
        self.models.get(index)
    }

    /// Appends an empty model and returns its index.
    pub fn add_model(&mut self) -> usize {
        self.models.push(Model::default());
        self.models.len() - 1
    }

    /// Finds a chain by its identifier within one model.
    pub fn find_chain(&self, model: usize, chain_id: &str) -> Option<ChainId> {
        self.models.get(model)?.chain_id_map.get(chain_id).copied()
    }

    /// Adds a chain to a model, or returns the existing chain with that id.
    ///
    /// Returns `None` if the model does not exist.
    pub fn add_chain(&mut self, model: usize, chain_id: &str) -> Option<ChainId> {
        let model_data = self.models.get_mut(model)?;
        if let Some(&existing) = model_data.chain_id_map.get(chain_id) {
            return Some(existing);
        }
        let id = self.chains.insert(Chain::new(chain_id, model));
        model_data.chains.push(id);
        model_data.chain_id_map.insert(chain_id.to_string(), id);
        Some(id)
    }

    /// Adds an observed group (one with coordinates) to a chain.
    ///
    /// The group becomes reachable by residue number and is appended to the
    /// chain's atom groups; when `in_sequence` is set it is also appended to
    /// the polymer sequence. Adding a residue number that already exists in the
    /// chain returns the existing group.
    ///
    /// # Return
    ///
    /// Returns `None` if the chain does not exist or `number` belongs to a
    /// different chain.
    pub fn add_group(
        &mut self,
        chain_id: ChainId,
        number: ResidueNumber,
        name: &str,
        group_type: GroupType,
        in_sequence: bool,
    ) -> Option<GroupId> {
        let chain = self.chains.get_mut(chain_id)?;
        if number.chain_id != chain.id {
            return None;
        }
        if let Some(existing) = chain.find_group(&number) {
            return Some(existing);
        }

        let group = Group::new(name, group_type, Some(number.clone()), chain_id);
        let group_id = self.groups.insert(group);
        chain.insert_atom_group(number, group_id);
        if in_sequence {
            chain.seq_groups.push(group_id);
        }
        Some(group_id)
    }

    /// Appends an unobserved residue to the chain sequence.
    ///
    /// Such groups have no residue number and can never hold atoms.
    pub fn add_unobserved_group(
        &mut self,
        chain_id: ChainId,
        name: &str,
        group_type: GroupType,
    ) -> Option<GroupId> {
        let chain = self.chains.get_mut(chain_id)?;
        let group_id = self
            .groups
            .insert(Group::new(name, group_type, None, chain_id));
        chain.seq_groups.push(group_id);
        Some(group_id)
    }

    /// Creates an alternate-location sibling of `primary`.
    ///
    /// The sibling copies the primary's name, type and residue number and is
    /// listed only in the primary's `alt_locs`, never in the chain. If the
    /// primary itself or an existing sibling already models `alt_loc`, that
    /// group is returned instead.
    pub fn add_alt_loc_group(&mut self, primary: GroupId, alt_loc: char) -> Option<GroupId> {
        if let Some(existing) = self.alt_loc_group(primary, alt_loc) {
            return Some(existing);
        }
        let base = self.groups.get(primary)?;
        base.residue_number.as_ref()?;

        let mut sibling = Group::new(
            &base.name,
            base.group_type,
            base.residue_number.clone(),
            base.chain_id,
        );
        sibling.alt_loc = Some(alt_loc);
        let sibling_id = self.groups.insert(sibling);
        self.groups.get_mut(primary)?.alt_locs.push(sibling_id);
        Some(sibling_id)
    }

    /// Adds an atom to a group and returns its id.
    ///
    /// The atom's `group_id` is overwritten with `group_id`. Returns `None` if
    /// the group does not exist or has no residue number.
    pub fn add_atom(&mut self, group_id: GroupId, mut atom: Atom) -> Option<AtomId> {
        let group = self.groups.get_mut(group_id)?;
        if !group.has_residue_number() {
            return None;
        }
        atom.group_id = group_id;
        let name = atom.name.clone();
        let atom_id = self.atoms.insert(atom);
        group.add_atom(&name, atom_id);
        Some(atom_id)
    }

    /// Makes an existing atom visible in another group as well.
    ///
    /// Used for atoms that have a single conformation but must be present in
    /// every alternate-location sibling of their residue.
    pub fn share_atom(&mut self, group_id: GroupId, atom_id: AtomId) -> Option<()> {
        let name = self.atoms.get(atom_id)?.name.clone();
        let group = self.groups.get_mut(group_id)?;
        if group.atoms.contains(&atom_id) {
            return Some(());
        }
        group.add_atom(&name, atom_id);
        Some(())
    }

    /// Creates a bond between two atoms and registers it on both of them.
    ///
    /// # Return
    ///
    /// Returns the new bond id, the id of the bond that already joins the two
    /// atoms, or `None` if either atom is unknown or both ids are the same atom.
    pub fn add_bond(&mut self, atom1_id: AtomId, atom2_id: AtomId, order: BondOrder) -> Option<BondId> {
        if atom1_id == atom2_id
            || !self.atoms.contains_key(atom1_id)
            || !self.atoms.contains_key(atom2_id)
        {
            return None;
        }
        if let Some(existing) = self.find_bond(atom1_id, atom2_id) {
            return Some(existing);
        }

        let bond_id = self.bonds.insert(Bond::new(atom1_id, atom2_id, order));
        self.atoms[atom1_id].bonds.push(bond_id);
        self.atoms[atom2_id].bonds.push(bond_id);
        Some(bond_id)
    }

    /// Returns the bond joining two atoms, if any.
    pub fn find_bond(&self, atom1_id: AtomId, atom2_id: AtomId) -> Option<BondId> {
        self.atoms
            .get(atom1_id)?
            .bonds
            .iter()
            .copied()
            .find(|&bond_id| self.bonds[bond_id].connects(atom1_id, atom2_id))
    }

    /// Returns the bond ids registered on an atom, in creation order.
    pub fn bonds_of(&self, atom_id: AtomId) -> Option<&[BondId]> {
        self.atoms.get(atom_id).map(|atom| atom.bonds())
    }

    /// Returns the atoms bonded to `atom_id`, in bond creation order.
    pub fn bonded_neighbors(&self, atom_id: AtomId) -> Vec<AtomId> {
        self.bonds_of(atom_id)
            .unwrap_or_default()
            .iter()
            .filter_map(|&bond_id| self.bonds.get(bond_id)?.other(atom_id))
            .collect()
    }

    /// Returns the group followed by all of its alternate-location siblings.
    pub fn group_with_alt_locs(&self, group_id: GroupId) -> Vec<GroupId> {
        match self.groups.get(group_id) {
            Some(group) => std::iter::once(group_id)
                .chain(group.alt_locs.iter().copied())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Finds the group that models alternate location `alt_loc`.
    ///
    /// The group itself matches when it carries that tag, or holds atoms in
    /// that location; otherwise its siblings are searched in order.
    pub fn alt_loc_group(&self, group_id: GroupId, alt_loc: char) -> Option<GroupId> {
        let group = self.groups.get(group_id)?;
        if self.group_alt_loc(group) == Some(alt_loc) {
            return Some(group_id);
        }
        group
            .alt_locs
            .iter()
            .copied()
            .find(|&id| self.groups.get(id).is_some_and(|g| g.alt_loc == Some(alt_loc)))
    }

    /// The location a group models: its own tag, or else the first named
    /// location among its atoms (primary groups hold the first conformation).
    fn group_alt_loc(&self, group: &Group) -> Option<char> {
        group.alt_loc.or_else(|| {
            group
                .atoms
                .iter()
                .filter_map(|&id| self.atoms.get(id))
                .find_map(Atom::named_alt_loc)
        })
    }

    /// Looks up an atom by name within one group.
    ///
    /// If a hydrogen name (leading `H`) is missing, the deuterated name is tried
    /// instead and accepted only if that atom is actually deuterium.
    pub fn atom_by_name(&self, group_id: GroupId, name: &str) -> Option<AtomId> {
        let group = self.groups.get(group_id)?;
        if let Some(atom_id) = group.get_atom_id_by_name(name) {
            return Some(atom_id);
        }
        let deuterium_name = deuterated_name(name)?;
        group
            .get_atom_id_by_name(&deuterium_name)
            .filter(|&id| self.atoms.get(id).is_some_and(|a| a.element == Element::D))
    }

    /// Bonds flagged as disulfide bridges, in the order they were recorded.
    pub fn disulfide_bonds(&self) -> &[BondId] {
        &self.ss_bonds
    }

    pub fn add_disulfide_bond(&mut self, bond_id: BondId) {
        self.ss_bonds.push(bond_id);
    }

    /// Replaces the disulfide list wholesale.
    pub fn set_disulfide_bonds(&mut self, bonds: Vec<BondId>) {
        self.ss_bonds = bonds;
    }

    /// Shrinks the bond list capacity of one atom to its length.
    pub(crate) fn trim_atom_bonds(&mut self, atom_id: AtomId) {
        if let Some(atom) = self.atoms.get_mut(atom_id) {
            atom.bonds.shrink_to_fit();
        }
    }
}
