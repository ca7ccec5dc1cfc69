//! # Bondmaker Core Library
//!
//! Covalent bond inference for parsed macromolecular structures.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture with a clear separation of concerns.
//!
//! - **[`core`]: The Foundation.** Arena-backed data models (`Structure`, chains, groups,
//!   atoms and bonds), the chemical-component dictionary, explicit bond records as parsers
//!   deliver them, and residue-name tables.
//!
//! - **[`engine`]: The Logic Core.** Configuration, atom resolution for bond records, the
//!   dictionary cache and the individual bond-forming passes, all aware of alternate
//!   locations.
//!
//! - **[`workflows`]: The Public API.** The `BondMaker`, which runs the passes in order over
//!   one structure and reports what it created.
//!
//! The library emits `tracing` events but never installs a subscriber.

pub mod core;
pub mod engine;
pub mod workflows;
