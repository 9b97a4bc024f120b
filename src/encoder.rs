/*!
Reduction from a problem instance to a CNF formula.

One selection variable per candidate subset. Every unordered pair of
universe elements contributes a clause requiring at least one subset
that distinguishes the pair to be selected; if the budget is smaller
than the collection, every (k+1)-combination of subsets is forbidden
from being selected simultaneously.
*/

use crate::formula::{Clause, Cnf, Literal, Variable};
use crate::instance::{Instance, SetIdx};

/// Result of encoding an instance.
///
/// `StructuralUnsat` means some element pair has no distinguishing
/// subset at all, so no selection can ever work regardless of the
/// budget. It is detected before any clause reaches a solver and
/// carries the offending pair for diagnostics.
#[derive(Debug, Clone)]
pub enum Encoding {
    Formula(Cnf),
    StructuralUnsat { left: String, right: String },
}

/// Encodes an instance into CNF, or reports structural unsatisfiability.
///
/// Clause order is deterministic: pairwise clauses first, iterating
/// universe pairs in first-encounter nested order, then at-most-k
/// clauses in lexicographic order of the forbidden index combinations.
///
/// The at-most-k encoding is the naive one and emits C(m, k+1)
/// clauses; callers are responsible for keeping `m` and `k` small
/// enough for the formula to stay tractable.
pub fn encode(instance: &Instance) -> Encoding {
    let m = instance.num_sets();
    let mut cnf = Cnf::new(m);

    let universe = instance.universe();
    for i in 0..universe.len() {
        for j in i + 1..universe.len() {
            let u = &universe[i];
            let v = &universe[j];

            let indices = instance.distinguishers(u, v);
            if indices.is_empty() {
                // No subset separates this pair; bail out before
                // emitting anything.
                return Encoding::StructuralUnsat {
                    left: u.clone(),
                    right: v.clone(),
                };
            }

            let literals = indices
                .into_iter()
                .map(|idx| Literal::new(Variable::for_set(idx), true))
                .collect();
            cnf.add_clause(Clause::new(literals));
        }
    }

    let pairwise_clauses = cnf.clauses().len();

    // Selecting all m subsets already respects a budget of k >= m.
    let k = instance.budget();
    if k < m {
        for combination in Combinations::new(m, k + 1) {
            let literals = combination
                .iter()
                .map(|&index| !Literal::new(Variable::for_set(SetIdx::from(index)), true))
                .collect();
            cnf.add_clause(Clause::new(literals));
        }
    }

    debug!(
        "encoded {} variables, {} pairwise + {} cardinality clauses",
        m,
        pairwise_clauses,
        cnf.clauses().len() - pairwise_clauses
    );

    Encoding::Formula(cnf)
}

/// Lazy generator of all `take`-element combinations of `0..n` in
/// lexicographic order. Produces one combination per step instead of
/// materializing all C(n, take) of them, so peak memory stays
/// proportional to `take`.
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    exhausted: bool,
}

impl Combinations {
    pub fn new(n: usize, take: usize) -> Self {
        Combinations {
            n,
            indices: (0..take).collect(),
            exhausted: take > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.exhausted {
            return None;
        }

        let current = self.indices.clone();

        // Advance the rightmost index that still has room, then reset
        // everything to its right to the smallest increasing run.
        let take = self.indices.len();
        let mut pos = take;
        loop {
            if pos == 0 {
                self.exhausted = true;
                break;
            }
            pos -= 1;

            if self.indices[pos] < self.n - take + pos {
                self.indices[pos] += 1;
                for later in pos + 1..take {
                    self.indices[later] = self.indices[later - 1] + 1;
                }
                break;
            }
        }

        Some(current)
    }
}
