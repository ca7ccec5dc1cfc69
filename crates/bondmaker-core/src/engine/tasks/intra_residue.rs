use super::alt_loc::form_bonds_alt_loc_aware;
use crate::core::chemcomp::provider::ChemCompProvider;
use crate::core::models::structure::Structure;
use crate::engine::cache::ChemCompCache;
use tracing::{debug, instrument};

/// Forms the bonds listed in the chemical-component dictionary for every
/// residue, including each alternate-location sibling.
///
/// Dictionary bonds are trusted as given: no distance check is made. Residues
/// without a dictionary entry, and dictionary atoms missing from the residue,
/// are skipped silently.
///
/// # Return
///
/// Returns the number of new bonds.
#[instrument(skip_all, name = "intra_residue_bond_task")]
pub fn form_intra_residue_bonds<P: ChemCompProvider + ?Sized>(
    structure: &mut Structure,
    provider: &P,
    cache: &mut ChemCompCache,
) -> usize {
    let mut formed = 0;

    for group_id in super::atom_groups(structure) {
        for member in structure.group_with_alt_locs(group_id) {
            let Some(name) = structure.group(member).map(|g| g.name.clone()) else {
                continue;
            };
            let Some(comp) = cache.get_or_load(provider, &name) else {
                continue;
            };
            for bond in &comp.bonds {
                formed += form_bonds_alt_loc_aware(
                    structure,
                    member,
                    &bond.atom1,
                    member,
                    &bond.atom2,
                    None,
                    bond.order,
                );
            }
        }
    }

    debug!(
        bonds = formed,
        components = cache.len(),
        "Formed intra-residue bonds."
    );
    formed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chemcomp::component::ChemComp;
    use crate::core::chemcomp::library::ChemCompLibrary;
    use crate::core::models::atom::Element;
    use crate::core::models::builder::StructureBuilder;
    use crate::core::models::topology::BondOrder;
    use nalgebra::Point3;

    fn library() -> ChemCompLibrary {
        let mut library = ChemCompLibrary::new();
        library.insert(
            ChemComp::new("GLY")
                .with_atoms(&["N", "CA", "C", "O", "OXT"])
                .with_bond("N", "CA", BondOrder::Single)
                .with_bond("CA", "C", BondOrder::Single)
                .with_bond("C", "O", BondOrder::Double)
                .with_bond("C", "OXT", BondOrder::Single),
        );
        library.insert(
            ChemComp::new("SER")
                .with_atoms(&["CA", "CB", "OG"])
                .with_bond("CA", "CB", BondOrder::Single)
                .with_bond("CB", "OG", BondOrder::Single),
        );
        library
    }

    #[test]
    fn dictionary_bonds_are_formed_regardless_of_distance() {
        let mut builder = StructureBuilder::new();
        builder.start_model();
        builder.start_chain("A").unwrap();
        builder.start_group(1, None, "GLY").unwrap();
        let n = builder.push_atom("N", Element::N, Point3::origin(), None).unwrap();
        let ca = builder
            .push_atom("CA", Element::C, Point3::new(50.0, 0.0, 0.0), None)
            .unwrap();
        let c = builder
            .push_atom("C", Element::C, Point3::new(51.5, 0.0, 0.0), None)
            .unwrap();
        let o = builder
            .push_atom("O", Element::O, Point3::new(52.7, 0.0, 0.0), None)
            .unwrap();
        let mut structure = builder.build();
        let mut cache = ChemCompCache::new();

        // OXT is absent, so three of the four dictionary bonds apply.
        let formed = form_intra_residue_bonds(&mut structure, &library(), &mut cache);
        assert_eq!(formed, 3);
        assert!(structure.find_bond(n, ca).is_some());
        let c_o = structure.find_bond(c, o).unwrap();
        assert_eq!(structure.bond(c_o).unwrap().order, BondOrder::Double);
    }

    #[test]
    fn unknown_residues_are_skipped() {
        let mut builder = StructureBuilder::new();
        builder.start_model();
        builder.start_chain("A").unwrap();
        builder.start_het_group(100, None, "LIG").unwrap();
        builder.add_atom("C1", Element::C, Point3::origin(), None).unwrap();
        builder
            .add_atom("C2", Element::C, Point3::new(1.5, 0.0, 0.0), None)
            .unwrap();
        let mut structure = builder.build();
        let mut cache = ChemCompCache::new();

        assert_eq!(form_intra_residue_bonds(&mut structure, &library(), &mut cache), 0);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn alternate_conformations_are_bonded_separately() {
        let mut builder = StructureBuilder::new();
        builder.start_model();
        builder.start_chain("A").unwrap();
        builder.start_group(7, None, "SER").unwrap();
        builder.add_atom("CA", Element::C, Point3::origin(), None).unwrap();
        builder
            .add_atom("CB", Element::C, Point3::new(1.5, 0.0, 0.0), Some('A'))
            .unwrap();
        builder
            .add_atom("OG", Element::O, Point3::new(2.9, 0.0, 0.0), Some('A'))
            .unwrap();
        builder.start_alt_loc('B').unwrap();
        builder.add_shared_atom("CA").unwrap();
        builder
            .add_atom("CB", Element::C, Point3::new(0.0, 1.5, 0.0), Some('B'))
            .unwrap();
        builder
            .add_atom("OG", Element::O, Point3::new(0.0, 2.9, 0.0), Some('B'))
            .unwrap();
        let mut structure = builder.build();
        let mut cache = ChemCompCache::new();

        // CA-CB(A), CA-CB(B), CB(A)-OG(A), CB(B)-OG(B).
        assert_eq!(form_intra_residue_bonds(&mut structure, &library(), &mut cache), 4);
        assert_eq!(structure.bond_count(), 4);
        assert_eq!(form_intra_residue_bonds(&mut structure, &library(), &mut cache), 0);
    }

    #[test]
    fn components_are_looked_up_once_per_name() {
        let mut builder = StructureBuilder::new();
        builder.start_model();
        builder.start_chain("A").unwrap();
        for seq in 1..=3 {
            builder.start_group(seq, None, "GLY").unwrap();
            builder.add_atom("N", Element::N, Point3::origin(), None).unwrap();
            builder
                .add_atom("CA", Element::C, Point3::new(1.5, 0.0, 0.0), None)
                .unwrap();
        }
        let mut structure = builder.build();
        let mut cache = ChemCompCache::new();

        assert_eq!(form_intra_residue_bonds(&mut structure, &library(), &mut cache), 3);
        assert_eq!(cache.len(), 1);
    }
}
