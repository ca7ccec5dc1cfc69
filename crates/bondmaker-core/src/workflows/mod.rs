//! # Workflows Module
//!
//! High-level entry points that run the bond-inference engine over a whole
//! structure.
//!
//! ## Overview
//!
//! A workflow owns the per-run state (configuration, dictionary cache and
//! progress reporter) and sequences the engine's passes: backbone bonds,
//! intra-residue bonds, explicit records and the final compaction of bond
//! lists. Callers parse a structure, pick a dictionary provider and hand both
//! to [`bonding::BondMaker`].
//!
//! ## Architecture
//!
//! - **Bond Making** ([`bonding`]) - The [`BondMaker`](bonding::BondMaker)
//!   workflow, the [`ExplicitBonds`](bonding::ExplicitBonds) record sources and
//!   the per-pass [`BondingSummary`](bonding::BondingSummary).

pub mod bonding;
