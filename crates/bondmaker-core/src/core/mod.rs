//! # Core Module
//!
//! The data layer of the crate: the structure model that bond inference
//! mutates, the chemical-component dictionary interface, and the explicit bond
//! records produced by coordinate-file parsers.
//!
//! ## Architecture
//!
//! - **Structure Representation** ([`models`]) - Models, chains, groups, atoms and bonds
//! - **Reference Chemistry** ([`chemcomp`]) - Chemical-component dictionary entries and providers
//! - **File Records** ([`records`]) - `SSBOND`, `LINK` and `_struct_conn` records
//! - **Utilities** ([`utils`]) - Residue-name classification and atom-name helpers
//!
//! Nothing in this module performs bond inference; see [`crate::engine`].

pub mod chemcomp;
pub mod models;
pub mod records;
pub mod utils;
