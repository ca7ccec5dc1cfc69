use super::alt_loc::form_bonds_alt_loc_aware;
use crate::core::models::group::GroupType;
use crate::core::models::ids::GroupId;
use crate::core::models::structure::Structure;
use crate::core::models::topology::BondOrder;
use itertools::Itertools;
use tracing::{debug, instrument};

/// Forms C(i)–N(i+1) bonds between sequence-adjacent amino acids.
///
/// Both residues must be observed amino acids; a pair is bonded only when the
/// atoms are closer than `max_length`.
///
/// # Return
///
/// Returns the number of new bonds.
#[instrument(skip_all, name = "peptide_bond_task")]
pub fn form_peptide_bonds(structure: &mut Structure, max_length: f64) -> usize {
    let formed: usize = adjacent_pairs(structure, GroupType::AminoAcid)
        .into_iter()
        .map(|(tail, head)| {
            form_bonds_alt_loc_aware(
                structure,
                tail,
                "C",
                head,
                "N",
                Some(max_length),
                BondOrder::Single,
            )
        })
        .sum();
    debug!(bonds = formed, "Formed peptide bonds.");
    formed
}

/// Forms P(i+1)–O3'(i) phosphodiester bonds between sequence-adjacent
/// nucleotides.
///
/// # Return
///
/// Returns the number of new bonds.
#[instrument(skip_all, name = "nucleotide_bond_task")]
pub fn form_nucleotide_bonds(structure: &mut Structure, max_length: f64) -> usize {
    let formed: usize = adjacent_pairs(structure, GroupType::Nucleotide)
        .into_iter()
        .map(|(tail, head)| {
            form_bonds_alt_loc_aware(
                structure,
                head,
                "P",
                tail,
                "O3'",
                Some(max_length),
                BondOrder::Single,
            )
        })
        .sum();
    debug!(bonds = formed, "Formed nucleotide backbone bonds.");
    formed
}

/// Consecutive sequence positions where both groups are observed and of the
/// given type. Pairs never span chains or models.
fn adjacent_pairs(structure: &Structure, group_type: GroupType) -> Vec<(GroupId, GroupId)> {
    let qualifies = |id: GroupId| {
        structure
            .group(id)
            .is_some_and(|g| g.group_type == group_type && g.has_residue_number())
    };
    super::sequences(structure)
        .iter()
        .flat_map(|sequence| sequence.iter().copied().tuple_windows())
        .filter(|&(tail, head)| qualifies(tail) && qualifies(head))
        .collect()
}
