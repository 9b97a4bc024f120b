/*!
Decoding of raw solver models back into subset selections.
*/

use typed_index_collections::TiVec;

use crate::instance::{SetIdx, Subset};

/// Literal assignment as printed by a solver, in encounter order.
/// Zero entries are line terminators, not variable references, and may
/// appear anywhere in the sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawModel {
    literals: Vec<i64>,
}

impl RawModel {
    pub fn new(literals: Vec<i64>) -> Self {
        RawModel { literals }
    }

    pub fn literals(&self) -> &[i64] {
        &self.literals
    }

    /// Whether the model assigns any variable at all (terminator zeros
    /// do not count).
    pub fn has_literals(&self) -> bool {
        self.literals.iter().any(|&literal| literal != 0)
    }
}

/// Ordered selection of subsets, as (index, subset) pairs.
pub type Selection = Vec<(SetIdx, Subset)>;

/// Extracts the selected subsets from a raw model.
///
/// The model is scanned in the order given. Zeros are skipped, and a
/// positive literal whose magnitude falls within `[1, m]` selects the
/// corresponding subset. Entries outside that range are ignored rather
/// than rejected; a well-formed solver never produces them, but the
/// decoder does not rely on that.
pub fn decode(model: &RawModel, sets: &TiVec<SetIdx, Subset>) -> Selection {
    let m = sets.len();

    model
        .literals()
        .iter()
        .filter_map(|&literal| {
            if literal <= 0 {
                return None;
            }
            let id = literal as usize;
            if id > m {
                return None;
            }

            let index = SetIdx::from(id - 1);
            Some((index, sets[index].clone()))
        })
        .collect()
}
