//! Explicit bond records as delivered by coordinate-file parsers.
//!
//! Text fields are kept exactly as parsed (residue numbers included), because
//! resolving them against a structure is part of bond making and may fail per
//! record.

use phf::{Set, phf_set};
use std::fmt;
use std::str::FromStr;

/// Placeholder for an unknown value in mmCIF-style records.
pub const UNKNOWN_PLACEHOLDER: &str = "?";
/// Placeholder for an inapplicable value in mmCIF-style records.
pub const INAPPLICABLE_PLACEHOLDER: &str = ".";

static BOND_FORMING_CONNECTION_TYPES: Set<&'static str> = phf_set! {
    "disulf", "covale", "covale_base", "covale_phosphate", "covale_sugar", "modres",
};

/// A disulfide bridge record (PDB `SSBOND`). Both ends are implicitly the `SG`
/// atom of a `CYS` residue.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SsBondRecord {
    pub chain_id1: String,
    pub res_num1: String,
    pub ins_code1: String,
    pub chain_id2: String,
    pub res_num2: String,
    pub ins_code2: String,
}

impl SsBondRecord {
    pub fn new(chain_id1: &str, res_num1: &str, chain_id2: &str, res_num2: &str) -> Self {
        Self {
            chain_id1: chain_id1.to_string(),
            res_num1: res_num1.to_string(),
            chain_id2: chain_id2.to_string(),
            res_num2: res_num2.to_string(),
            ..Self::default()
        }
    }
}

impl fmt::Display for SsBondRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SSBOND CYS {} {}{} CYS {} {}{}",
            self.chain_id1,
            self.res_num1,
            self.ins_code1.trim(),
            self.chain_id2,
            self.res_num2,
            self.ins_code2.trim()
        )
    }
}

/// One end of a PDB `LINK` record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkPartner {
    pub atom_name: String,
    /// Alternate location; a blank value means "not specified".
    pub alt_loc: String,
    pub res_name: String,
    pub chain_id: String,
    pub res_seq: String,
    pub ins_code: String,
}

impl LinkPartner {
    pub fn new(chain_id: &str, res_seq: &str, res_name: &str, atom_name: &str, alt_loc: &str) -> Self {
        Self {
            atom_name: atom_name.to_string(),
            alt_loc: alt_loc.to_string(),
            res_name: res_name.to_string(),
            chain_id: chain_id.to_string(),
            res_seq: res_seq.to_string(),
            ins_code: String::new(),
        }
    }

    /// Returns whether the record names an explicit alternate location.
    pub fn has_alt_loc(&self) -> bool {
        !self.alt_loc.trim().is_empty()
    }
}

impl fmt::Display for LinkPartner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}{} {} {} (alt loc '{}')",
            self.chain_id,
            self.res_seq,
            self.ins_code.trim(),
            self.res_name,
            self.atom_name,
            self.alt_loc
        )
    }
}

/// A PDB `LINK` record between two arbitrary atoms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkRecord {
    pub partner1: LinkPartner,
    pub partner2: LinkPartner,
}

impl fmt::Display for LinkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LINK {} -- {}", self.partner1, self.partner2)
    }
}

/// The `conn_type_id` of a `_struct_conn` entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConnectionType {
    Disulfide,
    Covalent,
    CovalentBase,
    CovalentPhosphate,
    CovalentSugar,
    ModifiedResidue,
    HydrogenBond,
    MetalCoordination,
    Mismatch,
    SaltBridge,
    Other(String),
}

impl FromStr for ConnectionType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "disulf" => ConnectionType::Disulfide,
            "covale" => ConnectionType::Covalent,
            "covale_base" => ConnectionType::CovalentBase,
            "covale_phosphate" => ConnectionType::CovalentPhosphate,
            "covale_sugar" => ConnectionType::CovalentSugar,
            "modres" => ConnectionType::ModifiedResidue,
            "hydrog" => ConnectionType::HydrogenBond,
            "metalc" => ConnectionType::MetalCoordination,
            "mismat" => ConnectionType::Mismatch,
            "saltbr" => ConnectionType::SaltBridge,
            other => ConnectionType::Other(other.to_string()),
        })
    }
}

impl ConnectionType {
    pub fn as_str(&self) -> &str {
        match self {
            ConnectionType::Disulfide => "disulf",
            ConnectionType::Covalent => "covale",
            ConnectionType::CovalentBase => "covale_base",
            ConnectionType::CovalentPhosphate => "covale_phosphate",
            ConnectionType::CovalentSugar => "covale_sugar",
            ConnectionType::ModifiedResidue => "modres",
            ConnectionType::HydrogenBond => "hydrog",
            ConnectionType::MetalCoordination => "metalc",
            ConnectionType::Mismatch => "mismat",
            ConnectionType::SaltBridge => "saltbr",
            ConnectionType::Other(tag) => tag,
        }
    }

    /// Whether connections of this type are turned into covalent bonds.
    pub fn is_bond_forming(&self) -> bool {
        BOND_FORMING_CONNECTION_TYPES.contains(self.as_str())
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One end of a `_struct_conn` entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructConnPartner {
    pub chain_id: String,
    pub seq_id: String,
    pub res_name: String,
    pub atom_name: String,
    /// `pdbx_PDB_ins_code`; may be absent or a placeholder.
    pub ins_code: Option<String>,
    /// `pdbx_label_alt_id`; may be a placeholder.
    pub alt_loc: String,
    /// Symmetry operator in `n_klm` form, e.g. `1_555`.
    pub symmetry: String,
}

impl StructConnPartner {
    pub fn new(chain_id: &str, seq_id: &str, res_name: &str, atom_name: &str) -> Self {
        Self {
            chain_id: chain_id.to_string(),
            seq_id: seq_id.to_string(),
            res_name: res_name.to_string(),
            atom_name: atom_name.to_string(),
            ins_code: None,
            alt_loc: UNKNOWN_PLACEHOLDER.to_string(),
            symmetry: "1_555".to_string(),
        }
    }

    /// The insertion code with placeholders mapped to blank.
    pub fn effective_ins_code(&self) -> &str {
        self.ins_code.as_deref().map(blank_placeholder).unwrap_or("")
    }

    /// The alternate location with placeholders mapped to blank.
    pub fn effective_alt_loc(&self) -> &str {
        blank_placeholder(&self.alt_loc)
    }
}

impl fmt::Display for StructConnPartner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}({}) in chain {}, atom {}",
            self.seq_id,
            self.effective_ins_code(),
            self.res_name,
            self.chain_id,
            self.atom_name
        )?;
        let alt_loc = self.effective_alt_loc();
        if !alt_loc.is_empty() {
            write!(f, " (alt loc {alt_loc})")?;
        }
        Ok(())
    }
}

/// A `_struct_conn` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructConnRecord {
    pub conn_type: ConnectionType,
    pub partner1: StructConnPartner,
    pub partner2: StructConnPartner,
}

impl StructConnRecord {
    pub fn new(conn_type: &str, partner1: StructConnPartner, partner2: StructConnPartner) -> Self {
        let Ok(conn_type) = conn_type.parse::<ConnectionType>();
        Self {
            conn_type,
            partner1,
            partner2,
        }
    }
}

fn blank_placeholder(value: &str) -> &str {
    match value.trim() {
        UNKNOWN_PLACEHOLDER | INAPPLICABLE_PLACEHOLDER => "",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_type_parses_known_tags() {
        assert_eq!("disulf".parse::<ConnectionType>().unwrap(), ConnectionType::Disulfide);
        assert_eq!("covale_sugar".parse::<ConnectionType>().unwrap(), ConnectionType::CovalentSugar);
        assert_eq!("metalc".parse::<ConnectionType>().unwrap(), ConnectionType::MetalCoordination);
        assert_eq!(
            "weird".parse::<ConnectionType>().unwrap(),
            ConnectionType::Other("weird".to_string())
        );
    }

    #[test]
    fn only_covalent_connection_types_form_bonds() {
        for tag in ["disulf", "covale", "covale_base", "covale_phosphate", "covale_sugar", "modres"] {
            assert!(tag.parse::<ConnectionType>().unwrap().is_bond_forming(), "{tag}");
        }
        for tag in ["hydrog", "metalc", "mismat", "saltbr", "?", "DISULF"] {
            assert!(!tag.parse::<ConnectionType>().unwrap().is_bond_forming(), "{tag}");
        }
    }

    #[test]
    fn connection_type_round_trips_through_display() {
        let conn: ConnectionType = "covale_phosphate".parse().unwrap();
        assert_eq!(conn.to_string(), "covale_phosphate");
    }

    #[test]
    fn struct_conn_partner_maps_placeholders_to_blank() {
        let mut partner = StructConnPartner::new("A", "10", "CYS", "SG");
        assert_eq!(partner.effective_alt_loc(), "");
        assert_eq!(partner.effective_ins_code(), "");

        partner.ins_code = Some("?".to_string());
        partner.alt_loc = ".".to_string();
        assert_eq!(partner.effective_ins_code(), "");
        assert_eq!(partner.effective_alt_loc(), "");

        partner.ins_code = Some("B".to_string());
        partner.alt_loc = "A".to_string();
        assert_eq!(partner.effective_ins_code(), "B");
        assert_eq!(partner.effective_alt_loc(), "A");
    }

    #[test]
    fn link_partner_detects_blank_alt_loc() {
        assert!(!LinkPartner::new("A", "1", "ALA", "C", " ").has_alt_loc());
        assert!(!LinkPartner::new("A", "1", "ALA", "C", "").has_alt_loc());
        assert!(LinkPartner::new("A", "1", "ALA", "C", "A").has_alt_loc());
    }

    #[test]
    fn records_render_readable_descriptions() {
        let ss = SsBondRecord::new("A", "3", "B", "40");
        assert_eq!(ss.to_string(), "SSBOND CYS A 3 CYS B 40");

        let mut partner = StructConnPartner::new("A", "10", "CYS", "SG");
        partner.alt_loc = "B".to_string();
        assert_eq!(partner.to_string(), "10(CYS) in chain A, atom SG (alt loc B)");
    }
}
