//! # Chemical-Component Dictionary Module
//!
//! Access to reference data that lists, for each residue name, the atoms a
//! residue is expected to contain and the covalent bonds between them.
//!
//! ## Overview
//!
//! Bond inference treats the dictionary as an external lookup service behind
//! the [`provider::ChemCompProvider`] trait. The crate ships an in-memory
//! implementation, [`library::ChemCompLibrary`], that can be filled
//! programmatically or loaded from a TOML file:
//!
//! ```toml
//! [ALA]
//! atoms = ["N", "CA", "C", "O", "CB"]
//! bonds = [
//!     { atom1 = "N", atom2 = "CA", order = 1 },
//!     { atom1 = "C", atom2 = "O", order = "DOUB" },
//! ]
//! ```
//!
//! ## Key Components
//!
//! - [`component`] - Dictionary entries and their bond descriptors
//! - [`provider`] - The lookup trait and its error type
//! - [`library`] - TOML-backed in-memory dictionary

pub mod component;
pub mod library;
pub mod provider;
