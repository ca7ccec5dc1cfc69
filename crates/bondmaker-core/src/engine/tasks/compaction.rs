use crate::core::models::structure::Structure;
use tracing::{debug, instrument};

/// Shrinks every atom's bond list to its length.
///
/// Bond lists grow while the passes run; once inference is done they are
/// read-only, so the spare capacity is released. Atoms of alternate-location
/// siblings are included. Bonds and their order are left untouched.
#[instrument(skip_all, name = "compaction_task")]
pub fn trim_bond_lists(structure: &mut Structure) {
    let atoms: Vec<_> = super::atom_groups(structure)
        .into_iter()
        .flat_map(|group_id| structure.group_with_alt_locs(group_id))
        .filter_map(|member| structure.group(member))
        .flat_map(|group| group.atoms().iter().copied())
        .collect();

    for &atom_id in &atoms {
        structure.trim_atom_bonds(atom_id);
    }
    debug!(atoms = atoms.len(), "Trimmed bond lists.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Element;
    use crate::core::models::builder::StructureBuilder;
    use crate::core::models::topology::BondOrder;
    use nalgebra::Point3;

    #[test]
    fn trimming_keeps_bonds_and_drops_spare_capacity() {
        let mut builder = StructureBuilder::new();
        builder.start_model();
        builder.start_chain("A").unwrap();
        builder.start_group(1, None, "SER").unwrap();
        let ca = builder.push_atom("CA", Element::C, Point3::origin(), None).unwrap();
        let cb = builder
            .push_atom("CB", Element::C, Point3::new(1.5, 0.0, 0.0), Some('A'))
            .unwrap();
        builder.start_alt_loc('B').unwrap();
        let cb_b = builder
            .push_atom("CB", Element::C, Point3::new(0.0, 1.5, 0.0), Some('B'))
            .unwrap();
        let mut structure = builder.build();

        let first = structure.add_bond(ca, cb, BondOrder::Single).unwrap();
        let second = structure.add_bond(ca, cb_b, BondOrder::Single).unwrap();
        structure.add_bond(cb, cb_b, BondOrder::Single);

        trim_bond_lists(&mut structure);

        for atom_id in [ca, cb, cb_b] {
            let atom = structure.atom(atom_id).unwrap();
            assert_eq!(atom.bond_capacity(), atom.bonds().len());
        }
        assert_eq!(structure.bonds_of(ca).unwrap(), &[first, second]);
        assert_eq!(structure.bond_count(), 3);
    }

    #[test]
    fn trimming_twice_leaves_bond_lists_unchanged() {
        let mut builder = StructureBuilder::new();
        builder.start_model();
        builder.start_chain("A").unwrap();
        builder.start_group(3, None, "CYS").unwrap();
        let cb = builder.push_atom("CB", Element::C, Point3::origin(), None).unwrap();
        let sg3 = builder
            .push_atom("SG", Element::S, Point3::new(1.8, 0.0, 0.0), None)
            .unwrap();
        builder.start_group(4, None, "CYS").unwrap();
        let sg4 = builder
            .push_atom("SG", Element::S, Point3::new(3.85, 0.0, 0.0), None)
            .unwrap();
        let mut structure = builder.build();

        structure.add_bond(cb, sg3, BondOrder::Single);
        structure.add_bond(sg3, sg4, BondOrder::Single);

        let snapshot = |structure: &Structure| -> Vec<_> {
            structure
                .atoms_iter()
                .map(|(id, atom)| (id, atom.bonds().to_vec()))
                .collect()
        };
        let before = snapshot(&structure);

        trim_bond_lists(&mut structure);
        let once = snapshot(&structure);
        trim_bond_lists(&mut structure);

        assert_eq!(once, before);
        assert_eq!(snapshot(&structure), before);
        assert_eq!(structure.bond_count(), 2);
    }
}
