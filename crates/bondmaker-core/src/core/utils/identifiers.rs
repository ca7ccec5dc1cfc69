use phf::{Set, phf_set};

static AMINO_ACID_NAMES: Set<&'static str> = phf_set! {
    "ALA", "ARG", "ASN", "ASP", "CYS", "GLN", "GLU", "GLY", "HIS", "ILE",
    "LEU", "LYS", "MET", "PHE", "PRO", "SER", "THR", "TRP", "TYR", "VAL",
    "SEC", "PYL", "MSE", "ASX", "GLX", "UNK",
    "HSD", "HSE", "HSP", "HID", "HIE", "HIP", "CYX", "CYM", "ASH", "GLH", "LYN",
};

static NUCLEOTIDE_NAMES: Set<&'static str> = phf_set! {
    "A", "C", "G", "U", "I", "N",
    "DA", "DC", "DG", "DT", "DU", "DI", "DN",
    "ADE", "CYT", "GUA", "THY", "URA",
};

pub fn is_amino_acid(residue_name: &str) -> bool {
    AMINO_ACID_NAMES.contains(residue_name.trim())
}

pub fn is_nucleotide(residue_name: &str) -> bool {
    NUCLEOTIDE_NAMES.contains(residue_name.trim())
}

/// Returns the deuterium counterpart of a hydrogen atom name ("HB1" -> "DB1").
///
/// Only the first `H` is replaced, and only when the name starts with one.
pub fn deuterated_name(atom_name: &str) -> Option<String> {
    atom_name
        .strip_prefix('H')
        .map(|rest| format!("D{rest}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_amino_acid_recognizes_standard_and_modified_residues() {
        assert!(is_amino_acid("ALA"));
        assert!(is_amino_acid("GLY"));
        assert!(is_amino_acid("MSE"));
        assert!(is_amino_acid(" CYS "));
        assert!(!is_amino_acid("DA"));
        assert!(!is_amino_acid("HOH"));
        assert!(!is_amino_acid("ala"));
    }

    #[test]
    fn is_nucleotide_recognizes_dna_and_rna() {
        assert!(is_nucleotide("A"));
        assert!(is_nucleotide("U"));
        assert!(is_nucleotide("DT"));
        assert!(is_nucleotide(" DG"));
        assert!(!is_nucleotide("ALA"));
        assert!(!is_nucleotide("ATP"));
    }

    #[test]
    fn deuterated_name_replaces_leading_hydrogen_only() {
        assert_eq!(deuterated_name("HB1").as_deref(), Some("DB1"));
        assert_eq!(deuterated_name("H").as_deref(), Some("D"));
        assert_eq!(deuterated_name("HH12").as_deref(), Some("DH12"));
        assert_eq!(deuterated_name("CA"), None);
        assert_eq!(deuterated_name("1HB"), None);
    }
}
