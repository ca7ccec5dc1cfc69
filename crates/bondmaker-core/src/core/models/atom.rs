use super::ids::{BondId, GroupId};
use nalgebra::Point3;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Chemical element of an atom.
///
/// Only the elements that matter for bond inference get their own variant;
/// deuterium is kept apart from hydrogen because the atom-name lookup treats
/// deuterated hydrogens specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Element {
    H,
    /// Deuterium, the heavy hydrogen isotope.
    D,
    C,
    N,
    O,
    P,
    S,
    Se,
    Fe,
    Zn,
    Mg,
    Ca,
    Na,
    Cl,
    /// Any element without a dedicated variant.
    #[default]
    Other,
}

#[derive(Debug, Error)]
#[error("Invalid element symbol")]
pub struct ParseElementError;

impl FromStr for Element {
    type Err = ParseElementError;

    /// Parses an element symbol case-insensitively (e.g. `"SE"`, `"Se"`).
    ///
    /// Symbols that are well-formed but have no dedicated variant map to
    /// [`Element::Other`]; blank input is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s.trim();
        if symbol.is_empty() {
            return Err(ParseElementError);
        }
        match symbol.to_ascii_uppercase().as_str() {
            "H" => Ok(Element::H),
            "D" => Ok(Element::D),
            "C" => Ok(Element::C),
            "N" => Ok(Element::N),
            "O" => Ok(Element::O),
            "P" => Ok(Element::P),
            "S" => Ok(Element::S),
            "SE" => Ok(Element::Se),
            "FE" => Ok(Element::Fe),
            "ZN" => Ok(Element::Zn),
            "MG" => Ok(Element::Mg),
            "CA" => Ok(Element::Ca),
            "NA" => Ok(Element::Na),
            "CL" => Ok(Element::Cl),
            _ => Ok(Element::Other),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Element::H => "H",
                Element::D => "D",
                Element::C => "C",
                Element::N => "N",
                Element::O => "O",
                Element::P => "P",
                Element::S => "S",
                Element::Se => "Se",
                Element::Fe => "Fe",
                Element::Zn => "Zn",
                Element::Mg => "Mg",
                Element::Ca => "Ca",
                Element::Na => "Na",
                Element::Cl => "Cl",
                Element::Other => "X",
            }
        )
    }
}

/// An atom of a parsed structure.
///
/// Atoms are owned by the [`Structure`](super::structure::Structure) arena and
/// refer to their group and bonds by id. The bond list is appended to by the
/// bond-making passes and only ever trimmed, never shrunk in length.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The atom name as written in the source file (e.g. "CA", "O3'").
    pub name: String,
    pub element: Element,
    /// Cartesian coordinates in Angstroms.
    pub position: Point3<f64>,
    /// Alternate location tag; `None` or `' '` is the default location.
    pub alt_loc: Option<char>,
    /// The group this atom was created in.
    pub group_id: GroupId,
    pub(crate) bonds: Vec<BondId>,
}

impl Atom {
    /// Creates an atom in the default alternate location with no bonds.
    ///
    /// # Arguments
    ///
    /// * `name` - The atom name.
    /// * `element` - The chemical element.
    /// * `group_id` - The id of the owning group.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(name: &str, element: Element, group_id: GroupId, position: Point3<f64>) -> Self {
        Self {
            name: name.to_string(),
            element,
            position,
            alt_loc: None,
            group_id,
            bonds: Vec::new(),
        }
    }

    pub fn with_alt_loc(mut self, alt_loc: char) -> Self {
        self.alt_loc = Some(alt_loc);
        self
    }

    /// Returns the alternate location tag if it names a specific location.
    pub fn named_alt_loc(&self) -> Option<char> {
        self.alt_loc.filter(|c| *c != ' ')
    }

    /// Returns whether two atoms may bond with respect to their alt-locs.
    ///
    /// Atoms in two different named locations never bond. A default-location
    /// atom is compatible with anything.
    pub fn alt_loc_compatible(&self, other: &Atom) -> bool {
        match (self.named_alt_loc(), other.named_alt_loc()) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        }
    }

    pub fn bonds(&self) -> &[BondId] {
        &self.bonds
    }

    #[cfg(test)]
    pub(crate) fn bond_capacity(&self) -> usize {
        self.bonds.capacity()
    }
}
