//! Bond-forming tasks.
//!
//! Each submodule implements one stage of bond inference over a [`Structure`]:
//! backbone links between adjacent residues, template-driven bonds inside a
//! residue, bonds imported from explicit records, and the final compaction of
//! per-atom bond lists. Stages never remove bonds, and creating a bond that
//! already exists is a no-op, so they may run in any order and more than once.

pub mod alt_loc;
pub mod backbone;
pub mod compaction;
pub mod intra_residue;
pub mod records;

use crate::core::models::ids::GroupId;
use crate::core::models::structure::Structure;

/// Every group with coordinates, model by model and chain by chain, in file order.
pub(crate) fn atom_groups(structure: &Structure) -> Vec<GroupId> {
    (0..structure.model_count())
        .filter_map(|model| structure.model(model))
        .flat_map(|model| model.chains().iter().copied())
        .filter_map(|chain_id| structure.chain(chain_id))
        .flat_map(|chain| chain.atom_groups().iter().copied())
        .collect()
}

/// The polymer sequence of every chain of every model.
pub(crate) fn sequences(structure: &Structure) -> Vec<Vec<GroupId>> {
    (0..structure.model_count())
        .filter_map(|model| structure.model(model))
        .flat_map(|model| model.chains().iter().copied())
        .filter_map(|chain_id| structure.chain(chain_id))
        .map(|chain| chain.seq_groups().to_vec())
        .collect()
}
