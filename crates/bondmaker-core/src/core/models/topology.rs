use super::ids::AtomId;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The order of a covalent bond.
///
/// Distance- and record-derived bonds are always `Single`; higher orders only
/// come from chemical-component dictionary entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "OrderRepr")]
#[repr(u8)]
pub enum BondOrder {
    #[default]
    Single = 1,
    Double = 2,
    Triple = 3,
    Quadruple = 4,
}

impl BondOrder {
    /// The integer order (1 to 4).
    pub fn value(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid bond order '{0}'")]
pub struct ParseBondOrderError(pub String);

impl TryFrom<u8> for BondOrder {
    type Error = ParseBondOrderError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Single),
            2 => Ok(Self::Double),
            3 => Ok(Self::Triple),
            4 => Ok(Self::Quadruple),
            _ => Err(ParseBondOrderError(value.to_string())),
        }
    }
}

impl FromStr for BondOrder {
    type Err = ParseBondOrderError;

    /// Accepts integers, the chemical-component dictionary value codes
    /// (`SING`, `DOUB`, `TRIP`, `QUAD`) and spelled-out names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "s" | "sing" | "single" => Ok(Self::Single),
            "2" | "d" | "doub" | "double" => Ok(Self::Double),
            "3" | "t" | "trip" | "triple" => Ok(Self::Triple),
            "4" | "q" | "quad" | "quadruple" => Ok(Self::Quadruple),
            _ => Err(ParseBondOrderError(s.to_string())),
        }
    }
}

/// Either spelling a dictionary file may use for a bond order.
#[derive(Deserialize)]
#[serde(untagged)]
enum OrderRepr {
    Int(u8),
    Code(String),
}

impl TryFrom<OrderRepr> for BondOrder {
    type Error = ParseBondOrderError;

    fn try_from(repr: OrderRepr) -> Result<Self, Self::Error> {
        match repr {
            OrderRepr::Int(value) => BondOrder::try_from(value),
            OrderRepr::Code(code) => code.parse(),
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Single => "Single",
                Self::Double => "Double",
                Self::Triple => "Triple",
                Self::Quadruple => "Quadruple",
            }
        )
    }
}

/// An unordered covalent bond between two atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub atom1_id: AtomId, // ID of the first atom
    pub atom2_id: AtomId, // ID of the second atom
    pub order: BondOrder, // Bond order (e.g., single, double, etc.)
}

impl Bond {
    pub fn new(atom1_id: AtomId, atom2_id: AtomId, order: BondOrder) -> Self {
        Self {
            atom1_id,
            atom2_id,
            order,
        }
    }

    pub fn contains(&self, atom_id: AtomId) -> bool {
        self.atom1_id == atom_id || self.atom2_id == atom_id
    }

    /// Returns the partner of `atom_id`, or `None` if the atom is not part of
    /// this bond.
    pub fn other(&self, atom_id: AtomId) -> Option<AtomId> {
        if self.atom1_id == atom_id {
            Some(self.atom2_id)
        } else if self.atom2_id == atom_id {
            Some(self.atom1_id)
        } else {
            None
        }
    }

    /// Returns whether the bond joins exactly these two atoms, in either order.
    pub fn connects(&self, a: AtomId, b: AtomId) -> bool {
        (self.atom1_id == a && self.atom2_id == b) || (self.atom1_id == b && self.atom2_id == a)
    }
}
