//! # Engine Module
//!
//! This module implements the bond-inference engine: the passes that turn a
//! parsed [`Structure`](crate::core::models::structure::Structure) into one
//! with a complete covalent bond graph.
//!
//! ## Overview
//!
//! Bonds come from three sources. Backbone bonds link sequence-adjacent
//! residues when the linking atoms are close enough. Intra-residue bonds are
//! taken from a chemical-component dictionary. Explicit records (SSBOND, LINK
//! and `_struct_conn`) name atom pairs that are bonded directly once they have
//! been resolved against the structure. Every pass is aware of alternate
//! locations and never bonds two atoms that belong to different named
//! conformations.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Distance cutoffs, C-alpha-only mode and the identity symmetry operator
//! - **Atom Resolution** ([`resolver`]) - Locating record-named atoms in every model
//! - **Dictionary Cache** ([`cache`]) - Per-run memo of chemical-component lookups
//! - **Progress Monitoring** ([`progress`]) - Phase reporting to an optional callback
//! - **Error Handling** ([`error`]) - Resolution errors raised per record
//! - **Tasks** (`tasks`) - The individual bond-forming passes

pub mod cache;
pub mod config;
pub mod error;
pub mod progress;
pub mod resolver;
pub(crate) mod tasks;
