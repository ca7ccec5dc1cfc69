use crate::core::models::ids::{AtomId, BondId};
use crate::core::models::structure::Structure;
use crate::core::models::topology::BondOrder;
use crate::core::records::{
    ConnectionType, LinkPartner, LinkRecord, SsBondRecord, StructConnPartner, StructConnRecord,
};
use crate::engine::error::ResolutionError;
use crate::engine::resolver::{AtomQuery, paired_by_model, resolve_atom};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

const DISULFIDE_RESIDUE: &str = "CYS";
const DISULFIDE_ATOM: &str = "SG";

/// Bonds the `SG` atoms named by each SSBOND record, in every model where both
/// exist, and registers the bonds as disulfide bridges.
///
/// A record that cannot be resolved is logged and skipped; with `ca_only`
/// set, side-chain atoms are expected to be missing and the log drops to
/// debug.
///
/// # Return
///
/// Returns the number of new bonds.
#[instrument(skip_all, name = "disulfide_bond_task")]
pub fn form_disulfide_bonds(
    structure: &mut Structure,
    records: &[SsBondRecord],
    ca_only: bool,
) -> usize {
    let mut formed = 0;
    for record in records {
        match form_disulfide_bond(structure, record) {
            Ok(count) => formed += count,
            Err(e) => report_unresolved(ca_only, &record.to_string(), &e),
        }
    }
    debug!(records = records.len(), bonds = formed, "Processed SSBOND records.");
    formed
}

fn form_disulfide_bond(
    structure: &mut Structure,
    record: &SsBondRecord,
) -> Result<usize, ResolutionError> {
    let first = resolve_atom(
        structure,
        &cysteine_sulfur(&record.chain_id1, &record.res_num1, &record.ins_code1),
    )?;
    let second = resolve_atom(
        structure,
        &cysteine_sulfur(&record.chain_id2, &record.res_num2, &record.ins_code2),
    )?;

    let mut formed = 0;
    for (_, a, b) in paired_by_model(&first, &second) {
        let (count, bond_id) = bond_pair(structure, a, b);
        formed += count;
        if let Some(bond_id) = bond_id
            && !structure.disulfide_bonds().contains(&bond_id)
        {
            structure.add_disulfide_bond(bond_id);
        }
    }
    Ok(formed)
}

fn cysteine_sulfur<'a>(chain_id: &'a str, res_seq: &'a str, ins_code: &'a str) -> AtomQuery<'a> {
    AtomQuery {
        atom_name: DISULFIDE_ATOM,
        alt_loc: "",
        res_name: DISULFIDE_RESIDUE,
        chain_id,
        res_seq,
        ins_code,
    }
}

/// Bonds the two atoms named by each LINK record, in every model where both
/// exist.
///
/// Only records whose endpoints both name an alternate location are honored;
/// the rest are skipped. Unresolvable records are logged and skipped as for
/// SSBOND.
///
/// # Return
///
/// Returns the number of new bonds.
#[instrument(skip_all, name = "link_bond_task")]
pub fn form_link_record_bonds(
    structure: &mut Structure,
    records: &[LinkRecord],
    ca_only: bool,
) -> usize {
    let mut formed = 0;
    for record in records {
        match form_link_bond(structure, record) {
            Ok(count) => formed += count,
            Err(e) => report_unresolved(ca_only, &record.to_string(), &e),
        }
    }
    debug!(records = records.len(), bonds = formed, "Processed LINK records.");
    formed
}

fn form_link_bond(structure: &mut Structure, record: &LinkRecord) -> Result<usize, ResolutionError> {
    if !record.partner1.has_alt_loc() || !record.partner2.has_alt_loc() {
        debug!("Ignoring {} without alt locs on both partners.", record);
        return Ok(0);
    }
    let first = resolve_atom(structure, &link_query(&record.partner1))?;
    let second = resolve_atom(structure, &link_query(&record.partner2))?;
    Ok(bond_models(structure, &first, &second))
}

fn link_query(partner: &LinkPartner) -> AtomQuery<'_> {
    AtomQuery {
        atom_name: &partner.atom_name,
        alt_loc: &partner.alt_loc,
        res_name: &partner.res_name,
        chain_id: &partner.chain_id,
        res_seq: &partner.res_seq,
        ins_code: &partner.ins_code,
    }
}

/// Bonds the partners of each covalent `_struct_conn` entry.
///
/// Entries whose type does not form covalent bonds are ignored. Entries where
/// either partner carries a symmetry operator other than `identity_operator`
/// are skipped, since the partner lies outside the deposited coordinates.
/// Bonds from `disulf` entries become the structure's disulfide list,
/// replacing whatever was recorded before.
///
/// # Return
///
/// Returns the number of new bonds.
#[instrument(skip_all, name = "struct_conn_bond_task")]
pub fn form_bonds_from_struct_conn(
    structure: &mut Structure,
    records: &[StructConnRecord],
    identity_operator: &str,
) -> usize {
    let mut formed = 0;
    let mut disulfides: Vec<BondId> = Vec::new();

    for record in records {
        if !record.conn_type.is_bond_forming() {
            continue;
        }
        let (p1, p2) = (&record.partner1, &record.partner2);
        if p1.symmetry.trim() != identity_operator || p2.symmetry.trim() != identity_operator {
            info!(
                conn_type = %record.conn_type,
                symmetry1 = %p1.symmetry,
                symmetry2 = %p2.symmetry,
                "Skipping bond between atoms related by a symmetry operator: {} -- {}.",
                p1,
                p2
            );
            continue;
        }

        let first = match resolve_atom(structure, &struct_conn_query(p1)) {
            Ok(resolved) => resolved,
            Err(e) => {
                warn!(error = %e, "Could not find atom {}; skipping {} bond.", p1, record.conn_type);
                continue;
            }
        };
        let second = match resolve_atom(structure, &struct_conn_query(p2)) {
            Ok(resolved) => resolved,
            Err(e) => {
                warn!(error = %e, "Could not find atom {}; skipping {} bond.", p2, record.conn_type);
                continue;
            }
        };

        for (_, a, b) in paired_by_model(&first, &second) {
            let (count, bond_id) = bond_pair(structure, a, b);
            formed += count;
            if let Some(bond_id) = bond_id
                && record.conn_type == ConnectionType::Disulfide
                && !disulfides.contains(&bond_id)
            {
                disulfides.push(bond_id);
            }
        }
    }

    if !structure.disulfide_bonds().is_empty() {
        debug!(
            replaced = structure.disulfide_bonds().len(),
            "Replacing previously recorded disulfide bonds."
        );
    }
    structure.set_disulfide_bonds(disulfides);
    debug!(records = records.len(), bonds = formed, "Processed _struct_conn records.");
    formed
}

fn struct_conn_query(partner: &StructConnPartner) -> AtomQuery<'_> {
    AtomQuery {
        atom_name: &partner.atom_name,
        alt_loc: partner.effective_alt_loc(),
        res_name: &partner.res_name,
        chain_id: &partner.chain_id,
        res_seq: &partner.seq_id,
        ins_code: partner.effective_ins_code(),
    }
}

fn bond_models(
    structure: &mut Structure,
    first: &BTreeMap<usize, AtomId>,
    second: &BTreeMap<usize, AtomId>,
) -> usize {
    paired_by_model(first, second)
        .into_iter()
        .map(|(_, a, b)| bond_pair(structure, a, b).0)
        .sum()
}

/// Adds a single bond and reports whether it was new, alongside the id of the
/// bond now joining the pair.
fn bond_pair(structure: &mut Structure, a: AtomId, b: AtomId) -> (usize, Option<BondId>) {
    let before = structure.bond_count();
    let bond_id = structure.add_bond(a, b, BondOrder::Single);
    (structure.bond_count() - before, bond_id)
}

fn report_unresolved(ca_only: bool, record: &str, error: &ResolutionError) {
    if ca_only {
        debug!(%error, "Could not resolve atoms of {}; skipping.", record);
    } else {
        warn!(%error, "Could not resolve atoms of {}; skipping.", record);
    }
}
