use crate::core::models::ids::{AtomId, GroupId};
use crate::core::models::structure::Structure;
use crate::core::models::topology::BondOrder;
use itertools::{Itertools, iproduct};
use tracing::{debug, trace};

/// Collects every atom called `name` in a group and its alternate-location
/// siblings, without duplicates.
///
/// Atoms shared between siblings are reported once. Missing hydrogen names
/// fall back to their deuterated counterpart (see [`Structure::atom_by_name`]).
pub fn atoms_named(structure: &Structure, group_id: GroupId, name: &str) -> Vec<AtomId> {
    structure
        .group_with_alt_locs(group_id)
        .into_iter()
        .filter_map(|member| structure.atom_by_name(member, name))
        .unique()
        .collect()
}

/// Bonds atom `name1` of `group1` to atom `name2` of `group2` across all
/// alternate locations of both groups.
///
/// Every candidate pair is considered. Pairs in two different named locations
/// are skipped, as are pairs at or beyond `max_length` when a limit is given.
///
/// # Return
///
/// Returns the number of bonds that did not exist before.
pub fn form_bonds_alt_loc_aware(
    structure: &mut Structure,
    group1: GroupId,
    name1: &str,
    group2: GroupId,
    name2: &str,
    max_length: Option<f64>,
    order: BondOrder,
) -> usize {
    let first = atoms_named(structure, group1, name1);
    let second = atoms_named(structure, group2, name2);
    if first.is_empty() || second.is_empty() {
        trace!(name1, name2, "No candidate atoms for bond.");
        return 0;
    }

    let before = structure.bond_count();
    for (&a, &b) in iproduct!(&first, &second) {
        let (Some(atom1), Some(atom2)) = (structure.atom(a), structure.atom(b)) else {
            continue;
        };
        if !atom1.alt_loc_compatible(atom2) {
            debug!(
                atom1 = %atom1.name,
                alt_loc1 = ?atom1.alt_loc,
                atom2 = %atom2.name,
                alt_loc2 = ?atom2.alt_loc,
                "Skipping bond between atoms in different alt locs."
            );
            continue;
        }
        if let Some(limit) = max_length {
            let length = nalgebra::distance(&atom1.position, &atom2.position);
            if length >= limit {
                trace!(name1, name2, length, limit, "Atoms too far apart to bond.");
                continue;
            }
        }
        structure.add_bond(a, b, order);
    }
    structure.bond_count() - before
}
