use super::error::ResolutionError;
use crate::core::models::group::ResidueNumber;
use crate::core::models::ids::AtomId;
use crate::core::models::structure::Structure;
use std::collections::BTreeMap;

/// The fields a bond record uses to name one atom.
///
/// All fields are raw record text. `alt_loc` and `ins_code` may be blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomQuery<'a> {
    pub atom_name: &'a str,
    pub alt_loc: &'a str,
    pub res_name: &'a str,
    pub chain_id: &'a str,
    pub res_seq: &'a str,
    pub ins_code: &'a str,
}

impl AtomQuery<'_> {
    /// The residue-number key this query refers to.
    pub fn residue_number(&self) -> Result<ResidueNumber, ResolutionError> {
        let seq_num = self
            .res_seq
            .trim()
            .parse::<i32>()
            .map_err(|_| ResolutionError::InvalidResidueNumber {
                chain_id: self.chain_id.to_string(),
                value: self.res_seq.to_string(),
            })?;
        let ins_code = self.ins_code.chars().next();
        Ok(ResidueNumber::new(self.chain_id, seq_num, ins_code))
    }

    fn requested_alt_loc(&self) -> Option<char> {
        self.alt_loc.chars().next().filter(|c| *c != ' ')
    }
}

/// Resolves the atom named by `query` in every model of the structure.
///
/// Models lacking the chain, the residue or the atom are left out of the
/// result. When an alternate location is requested, a missing residue or a
/// residue without that alternate location is an error instead.
///
/// # Return
///
/// Returns the resolved atom per model index, in ascending model order.
///
/// # Errors
///
/// Returns [`ResolutionError`] if the residue number is not an integer or a
/// requested alternate location cannot be found.
pub fn resolve_atom(
    structure: &Structure,
    query: &AtomQuery<'_>,
) -> Result<BTreeMap<usize, AtomId>, ResolutionError> {
    let number = query.residue_number()?;
    let alt_loc = query.requested_alt_loc();
    let mut resolved = BTreeMap::new();

    for model in 0..structure.model_count() {
        let group_id = structure
            .find_chain(model, query.chain_id)
            .and_then(|chain_id| structure.chain(chain_id))
            .and_then(|chain| chain.find_group(&number));

        let group_id = match (group_id, alt_loc) {
            (Some(group_id), None) => group_id,
            (Some(group_id), Some(code)) => structure
                .alt_loc_group(group_id, code)
                .ok_or_else(|| ResolutionError::AltLocNotFound {
                    residue: number.to_string(),
                    model,
                    alt_loc: code,
                })?,
            (None, None) => continue,
            (None, Some(code)) => {
                return Err(ResolutionError::GroupNotFound {
                    residue: number.to_string(),
                    model,
                    alt_loc: code,
                });
            }
        };

        if let Some(atom_id) = structure
            .group(group_id)
            .and_then(|group| group.get_atom_id_by_name(query.atom_name))
        {
            resolved.insert(model, atom_id);
        }
    }

    Ok(resolved)
}

/// Pairs the atoms of two resolutions that live in the same model.
pub fn paired_by_model(
    first: &BTreeMap<usize, AtomId>,
    second: &BTreeMap<usize, AtomId>,
) -> Vec<(usize, AtomId, AtomId)> {
    first
        .iter()
        .filter_map(|(&model, &a)| second.get(&model).map(|&b| (model, a, b)))
        .collect()
}
