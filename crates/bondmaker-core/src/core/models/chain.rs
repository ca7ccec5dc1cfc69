use super::group::ResidueNumber;
use super::ids::GroupId;
use std::collections::HashMap;

/// A chain within one model.
///
/// `seq_groups` is the polymer sequence in order, including unobserved
/// residues; `atom_groups` holds every group with coordinates in file order.
/// Observed polymer residues appear in both lists as the same group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub id: String,                       // Chain identifier (e.g. "A", "AA")
    pub model: usize,                     // Index of the owning model
    pub(crate) seq_groups: Vec<GroupId>,  // Ordered polymer sequence
    pub(crate) atom_groups: Vec<GroupId>, // Groups with coordinates
    group_map: HashMap<ResidueNumber, GroupId>,
}

impl Chain {
    pub(crate) fn new(id: &str, model: usize) -> Self {
        Self {
            id: id.to_string(),
            model,
            seq_groups: Vec::new(),
            atom_groups: Vec::new(),
            group_map: HashMap::new(),
        }
    }

    pub(crate) fn insert_atom_group(&mut self, number: ResidueNumber, group_id: GroupId) {
        self.atom_groups.push(group_id);
        self.group_map.insert(number, group_id);
    }

    pub fn seq_groups(&self) -> &[GroupId] {
        &self.seq_groups
    }

    pub fn atom_groups(&self) -> &[GroupId] {
        &self.atom_groups
    }

    pub fn find_group(&self, number: &ResidueNumber) -> Option<GroupId> {
        self.group_map.get(number).copied()
    }
}
