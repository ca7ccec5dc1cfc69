//! # Core Models Module
//!
//! Data structures for a parsed macromolecular structure and its bond graph.
//!
//! ## Overview
//!
//! A [`structure::Structure`] owns every model, chain, group (residue), atom
//! and bond in slot-map arenas. Entities refer to each other by the typed ids
//! in [`ids`], so bonds can be registered on both endpoint atoms without
//! shared ownership.
//!
//! ## Key Components
//!
//! - [`atom`] - Atoms with element, coordinates, alternate location and bond list
//! - [`group`] - Residues/monomers, residue numbers and polymer classification
//! - [`chain`] - Sequence and coordinate views of a chain within one model
//! - [`structure`] - The arena-backed structure and its lookup and bonding API
//! - [`topology`] - Bonds and bond orders
//! - [`builder`] - Incremental construction in file order
//! - [`ids`] - Arena keys for atoms, groups, chains and bonds
//!
//! ## Usage
//!
//! ```ignore
//! use bondmaker::core::models::{atom::Element, builder::StructureBuilder};
//! use nalgebra::Point3;
//!
//! let mut builder = StructureBuilder::new();
//! builder.start_model();
//! builder.start_chain("A")?.start_group(1, None, "ALA")?;
//! builder.add_atom("C", Element::C, Point3::new(0.0, 0.0, 0.0), None)?;
//! let structure = builder.build();
//! ```

pub mod atom;
pub mod builder;
pub mod chain;
pub mod group;
pub mod ids;
pub mod structure;
pub mod topology;
