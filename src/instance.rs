/*!
In-memory representation of a distinguishing sub-collection instance.
*/

use std::fmt::Display;

use typed_index_collections::TiVec;

/// Index of a candidate subset within the collection.
/// The 1-based DIMACS variable ID for this subset is `index + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SetIdx(usize);

impl From<usize> for SetIdx {
    fn from(index: usize) -> Self {
        SetIdx(index)
    }
}

impl From<SetIdx> for usize {
    fn from(index: SetIdx) -> Self {
        index.0
    }
}

impl Display for SetIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "C_{}", self.0 + 1)
    }
}

/// One candidate subset of the universe.
/// Tokens keep their input order; duplicates are dropped on construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subset {
    elements: Vec<String>,
}

impl Subset {
    pub fn new(tokens: impl IntoIterator<Item = String>) -> Self {
        let mut elements: Vec<String> = Vec::new();
        for token in tokens {
            if !elements.contains(&token) {
                elements.push(token);
            }
        }
        Subset { elements }
    }

    pub fn contains(&self, element: &str) -> bool {
        self.elements.iter().any(|e| e == element)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

impl Display for Subset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.elements.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
        }
        for element in iter {
            write!(f, " {}", element)?;
        }

        Ok(())
    }
}

/// An immutable problem instance: the universe of elements, the indexed
/// collection of candidate subsets, and the selection budget.
#[derive(Clone, Debug)]
pub struct Instance {
    budget: usize,
    universe: Vec<String>,
    sets: TiVec<SetIdx, Subset>,
}

impl Instance {
    /// Builds an instance. Universe elements keep their first-encounter
    /// order; later duplicates are dropped. Subset order is significant
    /// (position becomes the variable ID).
    pub fn new(
        budget: usize,
        universe: impl IntoIterator<Item = String>,
        sets: impl IntoIterator<Item = Subset>,
    ) -> Self {
        let mut deduped: Vec<String> = Vec::new();
        for element in universe {
            if !deduped.contains(&element) {
                deduped.push(element);
            }
        }

        Instance {
            budget,
            universe: deduped,
            sets: sets.into_iter().collect(),
        }
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    pub fn universe(&self) -> &[String] {
        &self.universe
    }

    pub fn sets(&self) -> &TiVec<SetIdx, Subset> {
        &self.sets
    }

    /// Number of candidate subsets, i.e. the number of selection variables.
    pub fn num_sets(&self) -> usize {
        self.sets.len()
    }

    /// Indices of the subsets whose membership differs between `u` and `v`.
    /// This is a symmetric-difference test: a subset containing both or
    /// neither element does not distinguish the pair.
    pub fn distinguishers(&self, u: &str, v: &str) -> Vec<SetIdx> {
        self.sets
            .iter_enumerated()
            .filter(|(_, set)| set.contains(u) != set.contains(v))
            .map(|(idx, _)| idx)
            .collect()
    }
}
